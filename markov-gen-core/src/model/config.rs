use serde::{Deserialize, Serialize};

use crate::error::{MarkovError, Result};

/// Default number of previous words used as context.
pub const DEFAULT_ORDER: usize = 2;

/// Default minimum number of characters for a run to be learned as a sentence.
pub const MIN_THRESHOLD: usize = 10;

/// Default number of resampling attempts before giving up on a word or sentence.
pub const TRY_LIMIT: usize = 5;

/// Default character budget, about the size of a short message.
pub const MAX_CHAR_LIMIT: usize = 145;

/// Default sentence terminators.
pub const SENTENCE_PUNCT: [char; 3] = ['.', '!', '?'];

/// Tunable parameters for training and generation.
///
/// The context size `N` is not part of this struct: it is a const generic of
/// [`Corpus`](super::corpus::Corpus) so that keys have a fixed length.
///
/// # Responsibilities
/// - Hold segmentation parameters (`min_threshold`, `terminators`)
/// - Hold generation parameters (`try_limit`, `max_chars`)
/// - Reject values that would make segmentation or generation meaningless
///
/// # Invariants (after [`Config::validate`])
/// - `terminators` is non-empty and contains no whitespace
/// - `max_chars` is strictly positive
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Runs of this many characters or fewer are not learned.
	pub min_threshold: usize,

	/// Number of consecutive rejected candidates tolerated before stopping.
	pub try_limit: usize,

	/// Default character budget used by `Generator::generate`.
	max_chars: usize,

	/// Characters that end a sentence.
	terminators: Vec<char>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			min_threshold: MIN_THRESHOLD,
			try_limit: TRY_LIMIT,
			max_chars: MAX_CHAR_LIMIT,
			terminators: SENTENCE_PUNCT.to_vec(),
		}
	}
}

impl Config {
	/// Parses a JSON configuration. Missing fields take their default value.
	///
	/// # Errors
	/// Returns an error on malformed JSON, unknown fields, or invalid values.
	pub fn from_json(json: &str) -> Result<Self> {
		let config: Self = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	/// Checks the invariants listed on the struct.
	pub fn validate(&self) -> Result<()> {
		if self.max_chars == 0 {
			return Err(MarkovError::InvalidConfig("max_chars must be > 0".to_owned()));
		}
		Self::check_terminators(&self.terminators)
	}

	pub fn max_chars(&self) -> usize {
		self.max_chars
	}

	pub fn terminators(&self) -> &[char] {
		&self.terminators
	}

	pub fn is_terminator(&self, c: char) -> bool {
		self.terminators.contains(&c)
	}

	/// Sets the default character budget.
	///
	/// # Errors
	/// Returns an error if `max_chars` is zero.
	pub fn set_max_chars(&mut self, max_chars: usize) -> Result<()> {
		if max_chars == 0 {
			return Err(MarkovError::InvalidConfig("max_chars must be > 0".to_owned()));
		}
		self.max_chars = max_chars;
		Ok(())
	}

	/// Replaces the sentence terminators by the characters of `terminators`.
	///
	/// # Errors
	/// Returns an error if the set is empty or contains whitespace.
	pub fn set_terminators(&mut self, terminators: &str) -> Result<()> {
		let mut chars: Vec<char> = terminators.chars().collect();
		chars.sort_unstable();
		chars.dedup();
		Self::check_terminators(&chars)?;
		self.terminators = chars;
		Ok(())
	}

	fn check_terminators(terminators: &[char]) -> Result<()> {
		if terminators.is_empty() {
			return Err(MarkovError::InvalidConfig("at least one terminator is required".to_owned()));
		}
		if let Some(c) = terminators.iter().find(|c| c.is_whitespace()) {
			return Err(MarkovError::InvalidConfig(format!("terminator {c:?} is whitespace")));
		}
		Ok(())
	}
}
