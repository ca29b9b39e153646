use thiserror::Error;
use treedig::tree::DigError;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Path walk, coercion, or write failure.
	#[error(transparent)]
	Dig(#[from] DigError),
	/// Filesystem read or write failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Document or value argument is not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}
