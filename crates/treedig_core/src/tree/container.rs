use tracing::debug;

use crate::tree::{DigError, Key, Kind, Map, Result, Seq, Value};

/// Capability interface over the two container shapes a walk can descend through.
pub trait Container {
	/// Container kind (`Map` or `Seq`).
	fn kind(&self) -> Kind;

	/// Number of direct children.
	fn len(&self) -> usize;

	/// True when the container has no children.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Look up one child.
	///
	/// `Ok(None)` means the key is absent; `Err` is reserved for structural failures such as an
	/// out-of-range sequence index.
	fn child(&self, key: &Key) -> Result<Option<&Value>>;

	/// Mutable lookup. With `vivify`, maps create an empty map under a missing or null key.
	fn child_mut(&mut self, key: &Key, vivify: bool) -> Result<Option<&mut Value>>;

	/// Store `value` under `key`, returning the previous value.
	fn insert(&mut self, key: Key, value: Value) -> Result<Option<Value>>;
}

impl Container for Map {
	fn kind(&self) -> Kind {
		Kind::Map
	}

	fn len(&self) -> usize {
		Map::len(self)
	}

	fn child(&self, key: &Key) -> Result<Option<&Value>> {
		Ok(self.get(key))
	}

	fn child_mut(&mut self, key: &Key, vivify: bool) -> Result<Option<&mut Value>> {
		if !vivify {
			return Ok(self.get_mut(key));
		}

		let slot = self.entry(key.clone()).or_insert(Value::Null);
		if slot.is_null() {
			debug!(%key, "creating missing map level");
			*slot = Value::map();
		}
		Ok(Some(slot))
	}

	fn insert(&mut self, key: Key, value: Value) -> Result<Option<Value>> {
		Ok(Map::insert(self, key, value))
	}
}

impl Container for Seq {
	fn kind(&self) -> Kind {
		Kind::Seq
	}

	fn len(&self) -> usize {
		Seq::len(self)
	}

	fn child(&self, key: &Key) -> Result<Option<&Value>> {
		Ok(seq_index(self.len(), key)?.map(|index| &self[index]))
	}

	fn child_mut(&mut self, key: &Key, _vivify: bool) -> Result<Option<&mut Value>> {
		Ok(seq_index(self.len(), key)?.map(|index| &mut self[index]))
	}

	fn insert(&mut self, _key: Key, _value: Value) -> Result<Option<Value>> {
		Err(DigError::UnsupportedContainer { found: Kind::Seq })
	}
}

/// Resolve a path segment against a sequence of `len` elements.
///
/// Non-integer segments miss softly; negative or too-large indices are hard errors.
fn seq_index(len: usize, key: &Key) -> Result<Option<usize>> {
	let Some(index) = key.as_int() else {
		return Ok(None);
	};

	match usize::try_from(index) {
		Ok(position) if position < len => Ok(Some(position)),
		_ => Err(DigError::IndexOutOfRange { index, len }),
	}
}

impl Value {
	/// View the resolved value as a container.
	pub fn as_container(&self) -> Option<&dyn Container> {
		match self.resolve() {
			Value::Map(map) => Some(map as &dyn Container),
			Value::Seq(items) => Some(items as &dyn Container),
			_ => None,
		}
	}

	/// View the resolved value as a mutable container.
	pub fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
		match self.resolve_mut() {
			Value::Map(map) => Some(map as &mut dyn Container),
			Value::Seq(items) => Some(items as &mut dyn Container),
			_ => None,
		}
	}
}
