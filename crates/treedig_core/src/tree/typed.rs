//! Convenience readers that trade error reporting for a default value.
//!
//! Each reader runs [`get`](crate::tree::get) into a fresh destination and returns the type's
//! default (`false`, `""`, `0`, `0.0`, `None`) on any failure, including a missing path. Callers
//! that need to tell "absent" from "zero" use `get` or `get_as` instead.

use crate::tree::{Key, Value, get_as};

/// Bool at `path`, or `false`.
pub fn get_bool(root: &Value, path: &[Key]) -> bool {
	get_as(root, path).unwrap_or_default()
}

/// String at `path`, or `""`.
pub fn get_string(root: &Value, path: &[Key]) -> String {
	get_as(root, path).unwrap_or_default()
}

/// Signed integer at `path`, or `0`.
pub fn get_i64(root: &Value, path: &[Key]) -> i64 {
	get_as(root, path).unwrap_or_default()
}

/// Unsigned integer at `path`, or `0`.
pub fn get_u64(root: &Value, path: &[Key]) -> u64 {
	get_as(root, path).unwrap_or_default()
}

/// 32-bit float at `path`, or `0.0`.
pub fn get_f32(root: &Value, path: &[Key]) -> f32 {
	get_as(root, path).unwrap_or_default()
}

/// 64-bit float at `path`, or `0.0`.
pub fn get_f64(root: &Value, path: &[Key]) -> f64 {
	get_as(root, path).unwrap_or_default()
}

/// Any value at `path`, or `None`.
pub fn get_value(root: &Value, path: &[Key]) -> Option<Value> {
	get_as(root, path).ok()
}
