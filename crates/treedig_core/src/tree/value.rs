use std::collections::BTreeMap;
use std::fmt;

/// Key-ordered mapping container.
pub type Map = BTreeMap<Key, Value>;

/// Integer-indexed sequence container.
pub type Seq = Vec<Value>;

/// Map key or path segment.
///
/// On a map the key is looked up as-is. On a sequence only non-negative [`Key::Int`] segments
/// select an element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
	/// Integer key or sequence index.
	Int(i64),
	/// String key.
	Str(String),
}

impl Key {
	/// Integer payload, if this is an integer key.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Self::Int(index) => Some(*index),
			Self::Str(_) => None,
		}
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int(index) => write!(f, "{index}"),
			Self::Str(name) => f.write_str(name),
		}
	}
}

impl From<&str> for Key {
	fn from(value: &str) -> Self {
		Self::Str(value.to_owned())
	}
}

impl From<String> for Key {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<i32> for Key {
	fn from(value: i32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<i64> for Key {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<u32> for Key {
	fn from(value: u32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<usize> for Key {
	fn from(value: usize) -> Self {
		Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
	}
}

/// Concrete kind of a [`Value`], also used as a coercion target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// Empty slot.
	Null,
	/// Boolean scalar.
	Bool,
	/// 8-bit signed integer.
	I8,
	/// 16-bit signed integer.
	I16,
	/// 32-bit signed integer.
	I32,
	/// 64-bit signed integer.
	I64,
	/// 8-bit unsigned integer.
	U8,
	/// 16-bit unsigned integer.
	U16,
	/// 32-bit unsigned integer.
	U32,
	/// 64-bit unsigned integer.
	U64,
	/// 32-bit float.
	F32,
	/// 64-bit float.
	F64,
	/// UTF-8 string.
	String,
	/// Key-ordered map.
	Map,
	/// Sequence.
	Seq,
}

impl Kind {
	const ALL: [Kind; 15] = [
		Kind::Null,
		Kind::Bool,
		Kind::I8,
		Kind::I16,
		Kind::I32,
		Kind::I64,
		Kind::U8,
		Kind::U16,
		Kind::U32,
		Kind::U64,
		Kind::F32,
		Kind::F64,
		Kind::String,
		Kind::Map,
		Kind::Seq,
	];

	/// Lowercase display name.
	pub fn name(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool => "bool",
			Self::I8 => "i8",
			Self::I16 => "i16",
			Self::I32 => "i32",
			Self::I64 => "i64",
			Self::U8 => "u8",
			Self::U16 => "u16",
			Self::U32 => "u32",
			Self::U64 => "u64",
			Self::F32 => "f32",
			Self::F64 => "f64",
			Self::String => "string",
			Self::Map => "map",
			Self::Seq => "seq",
		}
	}

	/// Look up a kind by its lowercase name.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.name() == name)
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Dynamically typed tree node.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
	/// Empty optional or open slot.
	#[default]
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// 8-bit signed integer.
	I8(i8),
	/// 16-bit signed integer.
	I16(i16),
	/// 32-bit signed integer.
	I32(i32),
	/// 64-bit signed integer.
	I64(i64),
	/// 8-bit unsigned integer.
	U8(u8),
	/// 16-bit unsigned integer.
	U16(u16),
	/// 32-bit unsigned integer.
	U32(u32),
	/// 64-bit unsigned integer.
	U64(u64),
	/// 32-bit float.
	F32(f32),
	/// 64-bit float.
	F64(f64),
	/// UTF-8 string.
	String(String),
	/// Key-ordered map container.
	Map(Map),
	/// Sequence container.
	Seq(Seq),
	/// Owning indirection, unwrapped transparently by every walk.
	Boxed(Box<Value>),
}

impl Value {
	/// Empty map value.
	pub fn map() -> Self {
		Self::Map(Map::new())
	}

	/// Kind of the value behind any `Boxed` layers.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Null => Kind::Null,
			Self::Bool(_) => Kind::Bool,
			Self::I8(_) => Kind::I8,
			Self::I16(_) => Kind::I16,
			Self::I32(_) => Kind::I32,
			Self::I64(_) => Kind::I64,
			Self::U8(_) => Kind::U8,
			Self::U16(_) => Kind::U16,
			Self::U32(_) => Kind::U32,
			Self::U64(_) => Kind::U64,
			Self::F32(_) => Kind::F32,
			Self::F64(_) => Kind::F64,
			Self::String(_) => Kind::String,
			Self::Map(_) => Kind::Map,
			Self::Seq(_) => Kind::Seq,
			Self::Boxed(inner) => inner.kind(),
		}
	}

	/// Strip `Boxed` layers.
	pub fn resolve(&self) -> &Value {
		let mut current = self;
		while let Self::Boxed(inner) = current {
			current = inner.as_ref();
		}
		current
	}

	/// Strip `Boxed` layers, mutably.
	pub fn resolve_mut(&mut self) -> &mut Value {
		match self {
			Self::Boxed(inner) => inner.resolve_mut(),
			other => other,
		}
	}

	/// True when the resolved value is `Null`.
	pub fn is_null(&self) -> bool {
		matches!(self.resolve(), Self::Null)
	}

	/// Borrow the resolved map, if any.
	pub fn as_map(&self) -> Option<&Map> {
		match self.resolve() {
			Self::Map(map) => Some(map),
			_ => None,
		}
	}
}

macro_rules! impl_from_scalar {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Self::$variant(value)
				}
			}
		)*
	};
}

impl_from_scalar! {
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
	String => String,
	Map => Map,
	Seq => Seq,
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<Box<Value>> for Value {
	fn from(value: Box<Value>) -> Self {
		Self::Boxed(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}
