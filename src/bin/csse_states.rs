use std::io;
use std::io::Write;

use log::info;

use csse::{Config, NameTables};


static DEFAULT_COUNTRY: &'static str = "US";


fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
	let argv: Vec<String> = std::env::args().collect();
	let country = argv.get(1).map(|s| s.as_str()).unwrap_or(DEFAULT_COUNTRY);
	let config = Config::default();
	csse::refresh(&config)?;

	let names = NameTables::new();
	let files = csse::list_snapshots(config.daily_reports_dir())?;
	info!("aggregating {} daily reports for {}", files.len(), country);
	let stdout = io::stdout();
	let mut out = io::BufWriter::new(stdout.lock());
	csse::subdivision_report(&mut *csse::default_output(), &names, &files[..], country, &mut out)?;
	out.flush()?;
	Ok(())
}
