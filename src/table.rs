use std::collections::{BTreeMap, BTreeSet};

use num_traits::{CheckedAdd, Zero};

use chrono::NaiveDate;

use crate::error::{Error, Result};


pub trait RegionKey: Ord + Clone + std::fmt::Debug {}
impl<T: Ord + Clone + std::fmt::Debug> RegionKey for T {}


/// Sparse per-date, per-region sums.
///
/// A date only exists in the table once a value was added for it, and a
/// region only exists for the dates it was reported on. Dates iterate in
/// ascending order.
#[derive(Debug, Clone)]
pub struct AggregateTable<K: RegionKey, V: Copy = i64> {
	by_date: BTreeMap<NaiveDate, BTreeMap<K, V>>,
}

impl<K: RegionKey, V: Copy> AggregateTable<K, V> {
	pub fn new() -> Self {
		Self{
			by_date: BTreeMap::new(),
		}
	}

	#[inline(always)]
	pub fn len(&self) -> usize {
		self.by_date.len()
	}

	#[inline(always)]
	pub fn is_empty(&self) -> bool {
		self.by_date.is_empty()
	}

	pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
		self.by_date.keys().copied()
	}

	pub fn get(&self, date: NaiveDate) -> Option<&BTreeMap<K, V>> {
		self.by_date.get(&date)
	}

	pub fn get_value(&self, date: NaiveDate, k: &K) -> Option<V> {
		self.get(date)?.get(k).copied()
	}

	pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &BTreeMap<K, V>)> + '_ {
		self.by_date.iter().map(|(date, regions)| (*date, regions))
	}

	/// Sorted union of the regions reported on any date.
	pub fn keys(&self) -> BTreeSet<&K> {
		let mut keyset = BTreeSet::new();
		for regions in self.by_date.values() {
			keyset.extend(regions.keys());
		}
		keyset
	}
}

impl<K: RegionKey, V: Copy + Zero + CheckedAdd> AggregateTable<K, V> {
	/// Add `v` to the sum of `k` on `date`. Fails instead of wrapping when
	/// the sum leaves the range of `V`.
	pub fn add(&mut self, date: NaiveDate, k: K, v: V) -> Result<()> {
		let reg = self.by_date.entry(date)
			.or_insert_with(BTreeMap::new)
			.entry(k)
			.or_insert_with(V::zero);
		*reg = reg.checked_add(&v).ok_or(Error::CountOverflow(date))?;
		Ok(())
	}
}

impl<K: RegionKey, V: Copy> Default for AggregateTable<K, V> {
	fn default() -> Self {
		Self::new()
	}
}
