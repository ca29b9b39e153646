use crate::tree::{DigError, Key, Kind, Map, Path, Result, Seq, Value, convert, walk, walk_mut};

/// Destination type for [`get`].
///
/// `KIND` names the coercion target used when the stored value has a different concrete type.
/// `None` marks an open destination that accepts any value unchanged.
pub trait FromValue: Default {
	/// Coercion target kind, or `None` for open destinations.
	const KIND: Option<Kind>;

	/// Take `value` when its concrete type already matches `Self`.
	fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_from_value_copy {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl FromValue for $ty {
				const KIND: Option<Kind> = Some(Kind::$variant);

				fn from_value(value: &Value) -> Option<Self> {
					match value {
						Value::$variant(inner) => Some(*inner),
						_ => None,
					}
				}
			}
		)*
	};
}

impl_from_value_copy! {
	bool => Bool,
	i8 => I8,
	i16 => I16,
	i32 => I32,
	i64 => I64,
	u8 => U8,
	u16 => U16,
	u32 => U32,
	u64 => U64,
	f32 => F32,
	f64 => F64,
}

impl FromValue for String {
	const KIND: Option<Kind> = Some(Kind::String);

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::String(text) => Some(text.clone()),
			_ => None,
		}
	}
}

impl FromValue for Map {
	const KIND: Option<Kind> = Some(Kind::Map);

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Map(map) => Some(map.clone()),
			_ => None,
		}
	}
}

impl FromValue for Seq {
	const KIND: Option<Kind> = Some(Kind::Seq);

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Seq(items) => Some(items.clone()),
			_ => None,
		}
	}
}

impl FromValue for Value {
	const KIND: Option<Kind> = None;

	fn from_value(value: &Value) -> Option<Self> {
		Some(value.clone())
	}
}

/// Follow `path` from `root` and store the value found there into `dst`.
///
/// `dst` is reset to its default before the walk, so on any error it holds `T::default()`.
/// A value of a different concrete type goes through [`convert`]; if no rule applies the call
/// fails with [`DigError::TypeMismatch`]. Out-of-range sequence indices surface as
/// [`DigError::IndexOutOfRange`], every other miss as [`DigError::PathNotFound`].
pub fn get<T: FromValue>(root: &Value, dst: &mut T, path: &[Key]) -> Result<()> {
	if path.is_empty() {
		return Err(DigError::MissingPath);
	}

	*dst = T::default();

	let found = walk(root, path)?.ok_or_else(|| not_found(path))?;
	*dst = extract(found)?;
	Ok(())
}

/// [`get`] into a fresh destination, returned by value.
pub fn get_as<T: FromValue>(root: &Value, path: &[Key]) -> Result<T> {
	let mut out = T::default();
	get(root, &mut out, path)?;
	Ok(out)
}

/// Read the value at `path` coerced into a kind chosen at runtime.
///
/// `Kind::Null` cannot receive a value and is rejected with [`DigError::InvalidDestination`].
pub fn get_kind(root: &Value, kind: Kind, path: &[Key]) -> Result<Value> {
	if path.is_empty() {
		return Err(DigError::MissingPath);
	}
	if kind == Kind::Null {
		return Err(DigError::InvalidDestination { kind });
	}

	let found = walk(root, path)?.ok_or_else(|| not_found(path))?;
	convert(found, kind).map_err(|err| DigError::TypeMismatch {
		expected: err.to,
		found: err.from,
	})
}

/// Store `value` under the last segment of `path`, inside the map reached by the segments before it.
///
/// Intermediate levels must already exist; call [`dig`](crate::tree::dig) first to create them.
/// Only maps accept writes: a sequence or scalar parent fails with
/// [`DigError::UnsupportedContainer`].
pub fn set(root: &mut Value, value: impl Into<Value>, path: &[Key]) -> Result<()> {
	let Some((last, parent)) = path.split_last() else {
		return Err(DigError::MissingPath);
	};

	let target = walk_mut(root, false, parent)?.ok_or_else(|| not_found(path))?;
	let found = target.kind();
	let Some(container) = target.as_container_mut() else {
		return Err(DigError::UnsupportedContainer { found });
	};

	container.insert(last.clone(), value.into())?;
	Ok(())
}

fn extract<T: FromValue>(value: &Value) -> Result<T> {
	if let Some(exact) = T::from_value(value) {
		return Ok(exact);
	}

	let found = value.kind();
	let expected = T::KIND.unwrap_or(found);
	convert(value, expected)
		.ok()
		.and_then(|converted| T::from_value(&converted))
		.ok_or(DigError::TypeMismatch { expected, found })
}

fn not_found(path: &[Key]) -> DigError {
	DigError::PathNotFound { path: Path::from(path) }
}
