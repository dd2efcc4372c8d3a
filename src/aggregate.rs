use log::trace;

use smartstring::alias::{String as SmartString};

use chrono::NaiveDate;

use crate::error::Result;
use crate::names::{is_unassigned, NameTables};
use crate::progress::ProgressSink;
use crate::snapshot::{SnapshotFile, SnapshotRecord};
use crate::table::{AggregateTable, RegionKey};


/// County-equivalent key: the locality and the full name of its subdivision.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalityKey {
	pub locality: SmartString,
	pub subdivision: SmartString,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
	All,
	On(NaiveDate),
	/// Inclusive on both ends.
	Between(NaiveDate, NaiveDate),
}

impl DateFilter {
	pub fn accepts(&self, date: NaiveDate) -> bool {
		match self {
			Self::All => true,
			Self::On(d) => date == *d,
			Self::Between(from, to) => date >= *from && date <= *to,
		}
	}
}

impl From<Option<NaiveDate>> for DateFilter {
	fn from(other: Option<NaiveDate>) -> Self {
		match other {
			Some(date) => Self::On(date),
			None => Self::All,
		}
	}
}


/// Strategy deciding which region, if any, a record counts towards.
pub trait Aggregation {
	type Key: RegionKey;

	/// Whether files of the given date are considered at all.
	fn accepts_date(&self, _date: NaiveDate) -> bool {
		true
	}

	fn region_key(&self, names: &NameTables, rec: &SnapshotRecord) -> Option<Self::Key>;
}


/// Whole countries, restricted to the interest list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByCountry;

impl Aggregation for ByCountry {
	type Key = SmartString;

	fn region_key(&self, names: &NameTables, rec: &SnapshotRecord) -> Option<Self::Key> {
		let country = names.resolve_country_alias(rec.country()?);
		if !names.is_interesting(country) {
			return None
		}
		Some(country.into())
	}
}


/// Subdivision codes within one country.
#[derive(Debug, Clone)]
pub struct BySubdivision {
	country: SmartString,
}

impl BySubdivision {
	pub fn new<S: Into<SmartString>>(country: S) -> Self {
		Self{country: country.into()}
	}
}

impl Aggregation for BySubdivision {
	type Key = SmartString;

	fn region_key(&self, names: &NameTables, rec: &SnapshotRecord) -> Option<Self::Key> {
		if rec.country()? != self.country.as_str() {
			return None
		}
		match names.encode_subdivision(rec.subdivision()?) {
			Some(code) => Some(code.into()),
			None => {
				trace!("dropping unrecognized subdivision {:?}", rec.subdivision);
				None
			},
		}
	}
}


/// Localities within one country, for the dates passing a filter.
#[derive(Debug, Clone)]
pub struct ByLocality {
	country: SmartString,
	dates: DateFilter,
}

impl ByLocality {
	pub fn new<S: Into<SmartString>>(country: S, dates: DateFilter) -> Self {
		Self{
			country: country.into(),
			dates,
		}
	}
}

impl Aggregation for ByLocality {
	type Key = LocalityKey;

	fn accepts_date(&self, date: NaiveDate) -> bool {
		self.dates.accepts(date)
	}

	fn region_key(&self, names: &NameTables, rec: &SnapshotRecord) -> Option<Self::Key> {
		if rec.country()? != self.country.as_str() {
			return None
		}
		let subdivision = rec.subdivision().and_then(|s| names.decode_subdivision(s));
		let locality = names.resolve_locality_alias(rec.locality());
		match (locality, subdivision) {
			(Some(locality), Some(subdivision)) if !is_unassigned(&locality) => Some(LocalityKey{
				locality,
				subdivision: subdivision.into(),
			}),
			_ => {
				trace!("dropping locality {:?} in {:?}", rec.locality, rec.subdivision);
				None
			},
		}
	}
}


/// Fold the records of one file into `table`.
pub fn fold_records<A: Aggregation + ?Sized>(
	names: &NameTables,
	aggregation: &A,
	date: NaiveDate,
	records: &[SnapshotRecord],
	table: &mut AggregateTable<A::Key>,
) -> Result<()> {
	for rec in records {
		if let Some(k) = aggregation.region_key(names, rec) {
			table.add(date, k, rec.confirmed)?;
		}
	}
	Ok(())
}

/// Load and fold every accepted file, one file at a time.
pub fn aggregate<A: Aggregation + ?Sized, S: ProgressSink + ?Sized>(
	progress: &mut S,
	names: &NameTables,
	aggregation: &A,
	files: &[SnapshotFile],
) -> Result<AggregateTable<A::Key>> {
	let mut table = AggregateTable::new();
	for (i, file) in files.iter().enumerate() {
		if aggregation.accepts_date(file.date) {
			let records = file.load()?;
			fold_records(names, aggregation, file.date, &records[..], &mut table)?;
		}
		progress.update(i+1, Some(files.len()));
	}
	progress.finish(files.len());
	Ok(table)
}


#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;

	fn day(m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(2020, m, d).unwrap()
	}

	fn rec(country: &str, subdivision: Option<&str>, locality: Option<&str>, confirmed: i64) -> SnapshotRecord {
		SnapshotRecord{
			country: Some(country.into()),
			subdivision: subdivision.map(Into::into),
			locality: locality.map(Into::into),
			confirmed,
		}
	}

	fn locality(locality: &str, subdivision: &str) -> LocalityKey {
		LocalityKey{
			locality: locality.into(),
			subdivision: subdivision.into(),
		}
	}

	#[test]
	fn by_country_resolves_aliases_and_drops_others() {
		let names = NameTables::new();
		let mut t = AggregateTable::new();
		fold_records(&names, &ByCountry, day(3, 1), &[
			rec("United Kingdom", None, None, 3),
			rec("UK", Some("Gibraltar"), None, 1),
			rec("Mainland China", Some("Hubei"), None, 60000),
			rec("Italy", None, None, 1694),
		], &mut t).unwrap();
		assert_eq!(t.get_value(day(3, 1), &"UK".into()), Some(4));
		assert_eq!(t.get_value(day(3, 1), &"Italy".into()), Some(1694));
		let keys: Vec<&str> = t.keys().into_iter().map(|k| k.as_str()).collect();
		assert_eq!(keys, vec!["Italy", "UK"]);
	}

	#[test]
	fn by_country_without_interesting_rows_has_no_date() {
		let names = NameTables::new();
		let mut t = AggregateTable::new();
		fold_records(&names, &ByCountry, day(1, 22), &[
			rec("Mainland China", Some("Hubei"), None, 444),
		], &mut t).unwrap();
		assert!(t.is_empty());
	}

	#[test]
	fn by_subdivision_matches_country_exactly() {
		let names = NameTables::new();
		let mut t = AggregateTable::new();
		fold_records(&names, &BySubdivision::new("US"), day(3, 9), &[
			rec("US", Some("California"), Some("Los Angeles"), 10),
			rec("US", Some("Orange County, CA"), None, 2),
			rec("US", Some("Diamond Princess"), None, 45),
			rec("US", None, None, 7),
			rec("United States", Some("Texas"), None, 99),
			rec("US", Some("TX"), None, 1),
		], &mut t).unwrap();
		assert_eq!(t.get_value(day(3, 9), &"CA".into()), Some(12));
		assert_eq!(t.get_value(day(3, 9), &"TX".into()), Some(1));
		assert_eq!(t.keys().len(), 2);
	}

	#[test]
	fn negative_corrections_reduce_the_sum() {
		let names = NameTables::new();
		let mut t = AggregateTable::new();
		fold_records(&names, &BySubdivision::new("US"), day(3, 22), &[
			rec("US", Some("California"), None, 10),
			rec("US", Some("California"), None, -1),
		], &mut t).unwrap();
		assert_eq!(t.get_value(day(3, 22), &"CA".into()), Some(9));
	}

	#[test]
	fn overflowing_sum_fails_the_fold() {
		let names = NameTables::new();
		let mut t = AggregateTable::new();
		let result = fold_records(&names, &ByCountry, day(3, 22), &[
			rec("Italy", None, None, i64::MAX),
			rec("Italy", Some("Lombardia"), None, 1),
		], &mut t);
		match result {
			Err(Error::CountOverflow(date)) => assert_eq!(date, day(3, 22)),
			other => panic!("unexpected result: {:?}", other),
		}
	}

	#[test]
	fn by_locality_normalizes_and_skips_unassigned() {
		let names = NameTables::new();
		let mut t = AggregateTable::new();
		fold_records(&names, &ByLocality::new("US", DateFilter::All), day(3, 23), &[
			rec("US", Some("New York"), Some("New York City"), 100),
			rec("US", Some("New York"), Some("New York"), 5),
			rec("US", Some("Missouri"), Some("St. Louis City"), 3),
			rec("US", Some("Massachusetts"), Some("Unassigned"), 40),
			rec("US", Some("Michigan"), Some("Out of MI"), 4),
			rec("US", Some("Diamond Princess"), Some("Unknown"), 1),
			rec("US", Some("Wuhan Evacuee"), Some("Evacuees"), 1),
			rec("US", Some("Washington"), None, 8),
			rec("Canada", Some("Ontario"), Some("Toronto"), 9),
		], &mut t).unwrap();
		assert_eq!(t.get_value(day(3, 23), &locality("New York", "New York")), Some(105));
		assert_eq!(t.get_value(day(3, 23), &locality("St Louis city", "Missouri")), Some(3));
		assert_eq!(t.keys().len(), 2);
	}

	#[test]
	fn locality_date_filter() {
		assert!(DateFilter::All.accepts(day(3, 22)));
		assert!(DateFilter::On(day(3, 22)).accepts(day(3, 22)));
		assert!(!DateFilter::On(day(3, 22)).accepts(day(3, 23)));
		let range = DateFilter::Between(day(3, 22), day(4, 3));
		assert!(range.accepts(day(3, 22)));
		assert!(range.accepts(day(4, 3)));
		assert!(!range.accepts(day(4, 4)));
		assert_eq!(DateFilter::from(None), DateFilter::All);

		let by_locality = ByLocality::new("US", DateFilter::On(day(3, 22)));
		assert!(by_locality.accepts_date(day(3, 22)));
		assert!(!by_locality.accepts_date(day(3, 21)));
		assert!(ByCountry.accepts_date(day(3, 21)));
	}
}
