use std::io;
use std::io::Write;

use csse::{Config, Invocation};


fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
	let argv: Vec<String> = std::env::args().collect();
	let invocation = Invocation::from_args(&argv[1..]);
	let config = Config::default();
	let stdout = io::stdout();
	let mut out = io::BufWriter::new(stdout.lock());
	csse::run(&mut *csse::default_output(), &config, &invocation, &mut out)?;
	out.flush()?;
	Ok(())
}
