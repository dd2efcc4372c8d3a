use std::fmt;
use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::refresh::RefreshError;


#[derive(Debug)]
pub enum Error {
	Io(io::Error),
	Csv(csv::Error),
	InvalidCount{path: PathBuf, line: u64, value: String},
	InvalidFileName(PathBuf),
	CountOverflow(NaiveDate),
	Refresh(RefreshError),
}

impl fmt::Display for Error {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Io(e) => fmt::Display::fmt(e, f),
			Self::Csv(e) => fmt::Display::fmt(e, f),
			Self::InvalidCount{path, line, value} => write!(f, "invalid confirmed count {:?} in {} line {}", value, path.display(), line),
			Self::InvalidFileName(path) => write!(f, "snapshot file name is not MM-DD-YYYY: {}", path.display()),
			Self::CountOverflow(date) => write!(f, "confirmed count sum overflows on {}", date),
			Self::Refresh(e) => write!(f, "failed to update input data: {}", e),
		}
	}
}

impl From<io::Error> for Error {
	fn from(err: io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<csv::Error> for Error {
	fn from(err: csv::Error) -> Self {
		Self::Csv(err)
	}
}

impl From<RefreshError> for Error {
	fn from(err: RefreshError) -> Self {
		Self::Refresh(err)
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Io(e) => Some(e),
			Self::Csv(e) => Some(e),
			Self::Refresh(e) => Some(e),
			_ => None,
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;
