use std::io;
use std::io::Read;
use std::fs;
use std::path::Path;

use flate2;


fn is_gzip(path: &Path) -> bool {
	match path.extension() {
		Some(x) => x == "gz",
		None => false,
	}
}

pub fn magic_open<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn Read>> {
	let path = path.as_ref();
	if is_gzip(path) {
		Ok(Box::new(flate2::read::GzDecoder::new(fs::File::open(path)?)))
	} else {
		Ok(Box::new(fs::File::open(path)?))
	}
}

/// Read the whole (decompressed) file; the handle is closed on return.
pub fn magic_read<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
	let mut buf = Vec::new();
	magic_open(path)?.read_to_end(&mut buf)?;
	Ok(buf)
}

/// File name with a trailing `.gz` removed, if the name is valid UTF-8.
pub fn logical_file_name(path: &Path) -> Option<&str> {
	let name = path.file_name()?.to_str()?;
	if is_gzip(path) {
		Some(&name[..name.len() - 3])
	} else {
		Some(name)
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	use flate2::write::GzEncoder;
	use flate2::Compression;

	#[test]
	fn reads_plain_and_gzip_alike() {
		let dir = tempfile::tempdir().unwrap();
		let plain = dir.path().join("a.csv");
		fs::write(&plain, b"x,y\n1,2\n").unwrap();
		let packed = dir.path().join("a.csv.gz");
		let mut enc = GzEncoder::new(fs::File::create(&packed).unwrap(), Compression::default());
		enc.write_all(b"x,y\n1,2\n").unwrap();
		enc.finish().unwrap();

		assert_eq!(magic_read(&plain).unwrap(), b"x,y\n1,2\n");
		assert_eq!(magic_read(&packed).unwrap(), b"x,y\n1,2\n");
	}

	#[test]
	fn logical_name_drops_gz() {
		assert_eq!(logical_file_name(Path::new("/d/03-22-2020.csv.gz")), Some("03-22-2020.csv"));
		assert_eq!(logical_file_name(Path::new("/d/03-22-2020.csv")), Some("03-22-2020.csv"));
		assert_eq!(logical_file_name(Path::new("/")), None);
	}
}
