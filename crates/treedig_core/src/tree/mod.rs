mod access;
mod container;
mod convert;
mod error;
mod json;
mod path;
mod typed;
mod value;
mod walk;

/// Strict typed reads and writes.
pub use access::{FromValue, get, get_as, get_kind, set};
/// Capability interface shared by maps and sequences.
pub use container::Container;
/// Scalar coercion collaborator.
pub use convert::{ConvertError, convert};
/// Error and result aliases.
pub use error::{DigError, Result};
/// Path expression types.
pub use path::Path;
/// Error-swallowing convenience readers.
pub use typed::{get_bool, get_f32, get_f64, get_i64, get_string, get_u64, get_value};
/// Dynamic value model.
pub use value::{Key, Kind, Map, Seq, Value};
/// Path descent and auto-vivification.
pub use walk::{dig, walk, walk_mut};
