use thiserror::Error;

/// Errors surfaced by configuration and file loading.
///
/// Training and generation never fail: dead ends and exhausted retries are
/// normal terminations that yield a (possibly empty) string.
#[derive(Debug, Error)]
pub enum MarkovError {
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	#[error("failed to parse configuration: {0}")]
	Config(#[from] serde_json::Error),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MarkovError>;
