use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::model::config::Config;

/// Reads a whole UTF-8 text file into a single `String`.
///
/// Line breaks are kept: sentences may span lines and whitespace
/// tokenization treats them as ordinary separators.
pub fn read_text<P: AsRef<Path>>(filename: P) -> Result<String> {
	let mut contents = String::new();
	File::open(&filename)?.read_to_string(&mut contents)?;
	debug!("read {} bytes from {}", contents.len(), filename.as_ref().display());
	Ok(contents)
}

/// Loads and validates a JSON configuration file.
///
/// Fields missing from the file keep their default value.
pub fn read_config<P: AsRef<Path>>(filename: P) -> Result<Config> {
	let json = read_text(filename)?;
	Config::from_json(&json)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::MarkovError;

	#[test]
	fn missing_file_is_an_io_error() {
		let result = read_text("this/path/does/not/exist.txt");
		assert!(matches!(result, Err(MarkovError::Io(_))));
	}

	#[test]
	fn reads_text_and_config() {
		let dir = std::env::temp_dir().join(format!("markov-gen-io-{}", std::process::id()));
		std::fs::create_dir_all(&dir).unwrap();

		let text_path = dir.join("corpus.txt");
		std::fs::write(&text_path, "First line.\nSecond line!").unwrap();
		assert_eq!(read_text(&text_path).unwrap(), "First line.\nSecond line!");

		let config_path = dir.join("config.json");
		std::fs::write(&config_path, r#"{ "min_threshold": 3 }"#).unwrap();
		assert_eq!(read_config(&config_path).unwrap().min_threshold, 3);

		std::fs::remove_dir_all(&dir).unwrap();
	}
}
