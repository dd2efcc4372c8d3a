use std::fmt;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use log::{debug, info};


#[derive(Debug)]
pub enum RefreshError {
	Spawn(io::Error),
	Failed{status: ExitStatus, stderr: String},
}

impl fmt::Display for RefreshError {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Spawn(e) => write!(f, "could not run git: {}", e),
			Self::Failed{status, stderr} => {
				write!(f, "git pull exited with {}", status)?;
				let stderr = stderr.trim();
				if stderr.len() > 0 {
					write!(f, ": {}", stderr)?;
				}
				Ok(())
			},
		}
	}
}

impl std::error::Error for RefreshError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Spawn(e) => Some(e),
			Self::Failed{..} => None,
		}
	}
}


/// Pull the latest snapshots from upstream into the repository at `repo`.
///
/// Runs git with `-C` so the working directory of the process is untouched.
pub fn refresh_snapshots<P: AsRef<Path>>(repo: P, remote: &str, branch: &str) -> Result<(), RefreshError> {
	let repo = repo.as_ref();
	info!("updating {} from {}/{}", repo.display(), remote, branch);
	let output = Command::new("git")
		.arg("-C")
		.arg(repo)
		.args(&["pull", remote, branch])
		.output()
		.map_err(RefreshError::Spawn)?;
	if !output.status.success() {
		return Err(RefreshError::Failed{
			status: output.status,
			stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
		})
	}
	debug!("git pull: {}", String::from_utf8_lossy(&output.stdout).trim());
	Ok(())
}
