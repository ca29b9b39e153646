use thiserror::Error;

use crate::tree::{Kind, Path};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DigError>;

/// Errors produced while walking, reading, and writing value trees.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DigError {
	/// Operation was called with zero path segments.
	#[error("missing path")]
	MissingPath,
	/// Requested destination kind cannot hold a value.
	#[error("invalid destination kind {kind}")]
	InvalidDestination {
		/// Rejected destination kind.
		kind: Kind,
	},
	/// Root value is not a map or sequence.
	#[error("source is not a container (found {found})")]
	InvalidSource {
		/// Kind of the rejected root.
		found: Kind,
	},
	/// Sequence index outside `0..len`.
	#[error("undefined index: {index} (len={len})")]
	IndexOutOfRange {
		/// Requested index.
		index: i64,
		/// Sequence length at that step.
		len: usize,
	},
	/// Path could not be resolved to a value.
	#[error("could not find the path: {path}")]
	PathNotFound {
		/// Path that failed to resolve.
		path: Path,
	},
	/// Terminal value could not be coerced into the destination type.
	#[error("could not assign {found} to {expected}")]
	TypeMismatch {
		/// Destination kind.
		expected: Kind,
		/// Kind of the value found at the path.
		found: Kind,
	},
	/// Write target is not a map.
	#[error("cannot set a key on {found}; only maps accept writes")]
	UnsupportedContainer {
		/// Kind of the rejected write target.
		found: Kind,
	},
	/// Path expression syntax is invalid.
	#[error("invalid path: {path}")]
	InvalidPath {
		/// Original user-provided path string.
		path: String,
	},
}
