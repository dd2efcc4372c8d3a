use std::io::Write;

use log::info;

use smartstring::alias::{String as SmartString};

mod aggregate;
mod config;
mod error;
mod invocation;
mod ioutil;
mod names;
mod progress;
mod refresh;
mod report;
mod snapshot;
mod table;

pub use aggregate::*;
pub use config::*;
pub use error::*;
pub use invocation::*;
pub use ioutil::{magic_open, magic_read};
pub use names::*;
pub use progress::*;
pub use refresh::*;
pub use report::*;
pub use snapshot::*;
pub use table::*;


/// Bring the snapshot repository up to date. Nothing may be read before
/// this succeeded.
pub fn refresh(config: &Config) -> Result<()> {
	refresh_snapshots(config.repository(), &config.remote, &config.branch)?;
	Ok(())
}


/// Wide table of the interest-list countries.
pub fn country_report<W: Write, S: ProgressSink + ?Sized>(
	progress: &mut S,
	names: &NameTables,
	files: &[SnapshotFile],
	w: &mut W,
) -> Result<()> {
	let table = aggregate(progress, names, &ByCountry, files)?;
	let columns: Vec<SmartString> = names.interesting_countries().iter().map(|c| (*c).into()).collect();
	write_wide(w, &columns[..], &table)?;
	Ok(())
}

/// Wide table of the subdivisions of `country`.
pub fn subdivision_report<W: Write, S: ProgressSink + ?Sized>(
	progress: &mut S,
	names: &NameTables,
	files: &[SnapshotFile],
	country: &str,
	w: &mut W,
) -> Result<()> {
	let table = aggregate(progress, names, &BySubdivision::new(country), files)?;
	let columns = observed_columns(&table);
	write_wide(w, &columns[..], &table)?;
	Ok(())
}

/// Narrow table of the localities of `country`.
pub fn locality_report<W: Write, S: ProgressSink + ?Sized>(
	progress: &mut S,
	names: &NameTables,
	files: &[SnapshotFile],
	country: &str,
	dates: DateFilter,
	w: &mut W,
) -> Result<()> {
	let table = aggregate(progress, names, &ByLocality::new(country, dates), files)?;
	write_narrow(w, &table)?;
	Ok(())
}


/// Produce the report selected by `invocation` from `files`.
pub fn dispatch<W: Write, S: ProgressSink + ?Sized>(
	progress: &mut S,
	names: &NameTables,
	files: &[SnapshotFile],
	invocation: &Invocation,
	w: &mut W,
) -> Result<()> {
	match invocation {
		Invocation::Countries => country_report(progress, names, files, w),
		Invocation::Localities{country, dates} => locality_report(progress, names, files, country, *dates, w),
	}
}

/// Refresh, then produce the report selected by `invocation` on `w`.
///
/// Nothing is written to `w` if the refresh fails.
pub fn run<W: Write, S: ProgressSink + ?Sized>(
	progress: &mut S,
	config: &Config,
	invocation: &Invocation,
	w: &mut W,
) -> Result<()> {
	refresh(config)?;
	let names = NameTables::new();
	let files = list_snapshots(config.daily_reports_dir())?;
	info!("{} daily reports in {}", files.len(), config.daily_reports_dir().display());
	dispatch(progress, &names, &files[..], invocation, w)
}
