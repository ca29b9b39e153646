use tracing::trace;

use crate::tree::{DigError, Key, Path, Result, Value};

/// Descend read-only from `root` along `path`.
///
/// Returns `Ok(None)` when a map key is missing, a segment lands on a scalar, or the node reached
/// is `Null`. Only structural failures are errors: a sequence index outside `0..len` yields
/// [`DigError::IndexOutOfRange`]. Missing map keys stay soft so that [`dig`] can fill them in and
/// [`get`](crate::tree::get) can report them as [`DigError::PathNotFound`].
pub fn walk<'a>(root: &'a Value, path: &[Key]) -> Result<Option<&'a Value>> {
	let mut node = root.resolve();
	if node.as_container().is_none() {
		return Err(DigError::InvalidSource { found: node.kind() });
	}

	for (depth, key) in path.iter().enumerate() {
		let Some(container) = node.as_container() else {
			trace!(depth, kind = %node.kind(), "walk stopped on non-container");
			return Ok(None);
		};

		match container.child(key)? {
			Some(child) if !child.is_null() => node = child.resolve(),
			_ => {
				trace!(depth, %key, "walk missed");
				return Ok(None);
			}
		}
	}

	Ok(Some(node))
}

/// Descend mutably from `root` along `path`, creating missing map levels when `vivify` is set.
///
/// Miss and error semantics match [`walk`]. With `vivify`, absent or null map slots are replaced
/// by empty maps; sequences are never extended.
pub fn walk_mut<'a>(root: &'a mut Value, vivify: bool, path: &[Key]) -> Result<Option<&'a mut Value>> {
	let mut node = root.resolve_mut();
	if node.as_container().is_none() {
		return Err(DigError::InvalidSource { found: node.kind() });
	}

	for key in path {
		let next = match node.as_container_mut() {
			Some(container) => container.child_mut(key, vivify)?,
			None => None,
		};

		match next {
			Some(child) if !child.is_null() => node = child.resolve_mut(),
			_ => {
				trace!(%key, vivify, "walk missed");
				return Ok(None);
			}
		}
	}

	Ok(Some(node))
}

/// Create every missing map level along `path`.
///
/// Existing nodes are left untouched, so repeating the call is a no-op. Fails with
/// [`DigError::PathNotFound`] when a segment runs into a scalar.
pub fn dig(root: &mut Value, path: &[Key]) -> Result<()> {
	if path.is_empty() {
		return Err(DigError::MissingPath);
	}

	match walk_mut(root, true, path)? {
		Some(_) => Ok(()),
		None => Err(DigError::PathNotFound { path: Path::from(path) }),
	}
}

#[cfg(test)]
mod tests;
