use std::fmt;
use std::ops::Deref;

use crate::tree::{DigError, Key, Result};

/// Build a fixed-size array of [`Key`] segments from literals.
///
/// ```
/// use treedig::path;
/// use treedig::tree::Key;
///
/// let segments = path!["data", "children", 0];
/// assert_eq!(segments[2], Key::Int(0));
/// ```
#[macro_export]
macro_rules! path {
	($($segment:expr),* $(,)?) => {
		[$($crate::tree::Key::from($segment)),*]
	};
}

/// Owned path of keys, parsed from or rendered to `a.b[0].c` syntax.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Key>);

impl Path {
	/// Parse dotted key syntax with optional `[index]` selectors.
	///
	/// Keys may hold any character except `.`, `[` and `]`. A leading `[n]` selects into a root
	/// sequence.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || DigError::InvalidPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut keys = Vec::new();

		loop {
			let start = idx;
			while idx < bytes.len() && !matches!(bytes[idx], b'.' | b'[' | b']') {
				idx += 1;
			}

			if idx > start {
				keys.push(Key::Str(input[start..idx].to_owned()));
			} else if !(start == 0 && bytes[idx] == b'[') {
				return Err(invalid());
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(invalid());
				}

				let number = input[n_start..idx].parse::<i64>().map_err(|_| invalid())?;
				keys.push(Key::Int(number));
				idx += 1;
			}

			if idx >= bytes.len() {
				break;
			}
			if bytes[idx] != b'.' {
				return Err(invalid());
			}
			idx += 1;
			if idx >= bytes.len() {
				return Err(invalid());
			}
		}

		Ok(Self(keys))
	}

	/// Borrow the segments.
	pub fn keys(&self) -> &[Key] {
		&self.0
	}
}

impl Deref for Path {
	type Target = [Key];

	fn deref(&self) -> &[Key] {
		&self.0
	}
}

impl From<Vec<Key>> for Path {
	fn from(keys: Vec<Key>) -> Self {
		Self(keys)
	}
}

impl From<&[Key]> for Path {
	fn from(keys: &[Key]) -> Self {
		Self(keys.to_vec())
	}
}

impl fmt::Display for Path {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (position, key) in self.0.iter().enumerate() {
			match key {
				Key::Int(index) => write!(f, "[{index}]")?,
				Key::Str(name) if position == 0 => f.write_str(name)?,
				Key::Str(name) => write!(f, ".{name}")?,
			}
		}
		Ok(())
	}
}
