use std::path::{Path, PathBuf};


/// Checkout of the CSSE COVID-19 data repository.
pub static DEFAULT_REPOSITORY: &'static str = "/var/lib/csse/COVID-19";
/// Location of the daily report files relative to the repository root.
pub static DAILY_REPORTS_SUBDIR: &'static str = "csse_covid_19_data/csse_covid_19_daily_reports";
pub static DEFAULT_REMOTE: &'static str = "origin";
pub static DEFAULT_BRANCH: &'static str = "master";


#[derive(Debug, Clone)]
pub struct Config {
	pub repository: PathBuf,
	pub remote: String,
	pub branch: String,
}

impl Config {
	pub fn new<P: Into<PathBuf>>(repository: P) -> Self {
		Self{
			repository: repository.into(),
			remote: DEFAULT_REMOTE.into(),
			branch: DEFAULT_BRANCH.into(),
		}
	}

	pub fn repository(&self) -> &Path {
		&self.repository
	}

	pub fn daily_reports_dir(&self) -> PathBuf {
		self.repository.join(DAILY_REPORTS_SUBDIR)
	}
}

impl Default for Config {
	fn default() -> Self {
		Self::new(DEFAULT_REPOSITORY)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn daily_reports_below_repository() {
		let config = Config::new("/tmp/COVID-19");
		assert_eq!(
			config.daily_reports_dir(),
			PathBuf::from("/tmp/COVID-19/csse_covid_19_data/csse_covid_19_daily_reports"),
		);
		assert_eq!(config.remote, "origin");
		assert_eq!(config.branch, "master");
	}

	#[test]
	fn default_uses_fixed_repository() {
		assert_eq!(Config::default().repository(), Path::new(DEFAULT_REPOSITORY));
	}
}
