use std::fs;
use std::io::Read;
use std::path::Path;

use echotrace::view::Result;

/// Read a reply body from a file, or from stdin when the path is absent or `-`.
pub(crate) fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
	match path {
		Some(path) if path != Path::new("-") => Ok(fs::read(path)?),
		_ => {
			let mut body = Vec::new();
			std::io::stdin().lock().read_to_end(&mut body)?;
			Ok(body)
		}
	}
}
