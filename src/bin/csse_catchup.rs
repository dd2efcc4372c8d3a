use std::io;
use std::io::Write;

use log::info;

use csse::{Config, DateFilter, NameTables};


static DEFAULT_COUNTRY: &'static str = "US";


fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
	let argv: Vec<String> = std::env::args().collect();
	if argv.len() < 3 {
		eprintln!("usage: {} FROM TO [COUNTRY]", argv[0]);
		std::process::exit(2);
	}
	let from = csse::parse_date(&argv[1]).ok_or_else(|| format!("invalid date: {}", argv[1]))?;
	let to = csse::parse_date(&argv[2]).ok_or_else(|| format!("invalid date: {}", argv[2]))?;
	let country = argv.get(3).map(|s| s.as_str()).unwrap_or(DEFAULT_COUNTRY);
	let config = Config::default();
	csse::refresh(&config)?;

	let names = NameTables::new();
	let files = csse::list_snapshots(config.daily_reports_dir())?;
	info!("catching up {} from {} to {}", country, from, to);
	let stdout = io::stdout();
	let mut out = io::BufWriter::new(stdout.lock());
	csse::locality_report(
		&mut *csse::default_output(),
		&names,
		&files[..],
		country,
		DateFilter::Between(from, to),
		&mut out,
	)?;
	out.flush()?;
	Ok(())
}
