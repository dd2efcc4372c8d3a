use std::fmt;
use std::io::{self, Write};

use crate::aggregate::LocalityKey;
use crate::table::{AggregateTable, RegionKey};


/// Spreadsheet layout: one column per region, one row per date.
///
/// Regions missing on a date produce an empty cell.
pub fn write_wide<W: Write, K: RegionKey + fmt::Display, V: Copy + fmt::Display>(
	w: &mut W,
	columns: &[K],
	table: &AggregateTable<K, V>,
) -> io::Result<()> {
	w.write_all(b"Date")?;
	for column in columns {
		write!(w, ",{}", column)?;
	}
	w.write_all(b"\n")?;

	for (date, regions) in table.iter() {
		write!(w, "{}", date)?;
		for column in columns {
			match regions.get(column) {
				Some(v) => write!(w, ",{}", v)?,
				None => w.write_all(b",")?,
			}
		}
		w.write_all(b"\n")?;
	}
	Ok(())
}

/// Columns of the subdivision table: every region seen on any date.
pub fn observed_columns<K: RegionKey, V: Copy>(table: &AggregateTable<K, V>) -> Vec<K> {
	table.keys().into_iter().cloned().collect()
}


struct Quoted<'x>(&'x str);

impl fmt::Display for Quoted<'_> {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		f.write_str("\"")?;
		for (i, part) in self.0.split('"').enumerate() {
			if i > 0 {
				f.write_str("\"\"")?;
			}
			f.write_str(part)?;
		}
		f.write_str("\"")
	}
}

/// Database import layout, without header: `date,"locality","subdivision",count`.
pub fn write_narrow<W: Write, V: Copy + fmt::Display>(
	w: &mut W,
	table: &AggregateTable<LocalityKey, V>,
) -> io::Result<()> {
	for (date, regions) in table.iter() {
		for (k, v) in regions.iter() {
			write!(w, "{},{},{},{}\n", date, Quoted(&k.locality), Quoted(&k.subdivision), v)?;
		}
	}
	Ok(())
}
