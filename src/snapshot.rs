use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use serde::Deserialize;

use smartstring::alias::{String as SmartString};

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::ioutil::{logical_file_name, magic_read};


static SNAPSHOT_EXTENSION: &'static str = ".csv";
static SNAPSHOT_DATE_FORMAT: &'static str = "%m-%d-%Y";


// The daily reports renamed their columns in March 2020; both spellings
// are read and the older one wins if a file carries both.
#[derive(Debug, Clone, Deserialize)]
struct RawSnapshotRow {
	#[serde(rename = "Country/Region", default)]
	country_legacy: Option<SmartString>,
	#[serde(rename = "Country_Region", default)]
	country: Option<SmartString>,
	#[serde(rename = "Province/State", default)]
	subdivision_legacy: Option<SmartString>,
	#[serde(rename = "Province_State", default)]
	subdivision: Option<SmartString>,
	#[serde(rename = "Admin2", default)]
	locality: Option<SmartString>,
	#[serde(rename = "Confirmed", default)]
	confirmed: Option<SmartString>,
}


/// One row of a daily report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRecord {
	pub country: Option<SmartString>,
	pub subdivision: Option<SmartString>,
	pub locality: Option<SmartString>,
	pub confirmed: i64,
}

impl SnapshotRecord {
	pub fn country(&self) -> Option<&str> {
		self.country.as_deref()
	}

	pub fn subdivision(&self) -> Option<&str> {
		self.subdivision.as_deref()
	}

	pub fn locality(&self) -> Option<&str> {
		self.locality.as_deref()
	}
}

fn non_empty(v: Option<SmartString>) -> Option<SmartString> {
	v.filter(|s| s.len() > 0)
}

fn parse_confirmed(path: &Path, line: u64, raw: Option<SmartString>) -> Result<i64> {
	let raw = match raw {
		Some(v) => v,
		None => return Ok(0),
	};
	let trimmed = raw.trim();
	if trimmed.len() == 0 {
		return Ok(0)
	}
	trimmed.parse::<i64>().map_err(|_| Error::InvalidCount{
		path: path.to_path_buf(),
		line,
		value: raw.to_string(),
	})
}

impl RawSnapshotRow {
	fn into_record(self, path: &Path, line: u64) -> Result<SnapshotRecord> {
		Ok(SnapshotRecord{
			confirmed: parse_confirmed(path, line, self.confirmed)?,
			country: non_empty(self.country_legacy).or(non_empty(self.country)),
			subdivision: non_empty(self.subdivision_legacy).or(non_empty(self.subdivision)),
			locality: non_empty(self.locality),
		})
	}
}


/// Parse a daily report. `path` is only used in error messages.
pub fn read_snapshot<R: io::Read>(r: R, path: &Path) -> Result<Vec<SnapshotRecord>> {
	let mut r = csv::ReaderBuilder::new()
		.flexible(true)
		.from_reader(r);
	let headers = r.headers()?.clone();
	let mut result = Vec::new();
	for row in r.records() {
		let row = row?;
		let line = row.position().map(|p| p.line()).unwrap_or(0);
		let raw: RawSnapshotRow = row.deserialize(Some(&headers))?;
		result.push(raw.into_record(path, line)?);
	}
	Ok(result)
}


/// Extract the report date from a file name such as `03-22-2020.csv`.
///
/// Returns `None` for files which are not daily reports at all.
pub fn snapshot_date(path: &Path) -> Option<Result<NaiveDate>> {
	let name = logical_file_name(path)?;
	if !name.ends_with(SNAPSHOT_EXTENSION) {
		return None
	}
	let stem = &name[..name.len() - SNAPSHOT_EXTENSION.len()];
	Some(NaiveDate::parse_from_str(stem, SNAPSHOT_DATE_FORMAT)
		.map_err(|_| Error::InvalidFileName(path.to_path_buf())))
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotFile {
	pub path: PathBuf,
	pub date: NaiveDate,
}

impl SnapshotFile {
	pub fn load(&self) -> Result<Vec<SnapshotRecord>> {
		debug!("loading {}", self.path.display());
		let buf = magic_read(&self.path)?;
		read_snapshot(&buf[..], &self.path)
	}
}


/// All daily reports in `dir`, ordered by file name.
pub fn list_snapshots<P: AsRef<Path>>(dir: P) -> Result<Vec<SnapshotFile>> {
	let mut paths = Vec::new();
	for entry in fs::read_dir(dir.as_ref())? {
		let entry = entry?;
		if !entry.file_type()?.is_file() {
			continue
		}
		paths.push(entry.path());
	}
	paths.sort();

	let mut result = Vec::with_capacity(paths.len());
	for path in paths {
		let date = match snapshot_date(&path) {
			Some(date) => date?,
			None => {
				debug!("ignoring {}", path.display());
				continue
			},
		};
		result.push(SnapshotFile{path, date});
	}
	Ok(result)
}
