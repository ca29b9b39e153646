use std::fs;
use std::path::Path;

use treedig::tree::{Kind, Value};

use crate::error::Result;

/// Read a JSON document into a value tree.
pub(crate) fn load_document(path: &Path) -> Result<Value> {
	let bytes = fs::read(path)?;
	let json: serde_json::Value = serde_json::from_slice(&bytes)?;
	Ok(Value::from(json))
}

/// Parse a value argument as JSON, falling back to a plain string for bare words.
pub(crate) fn parse_value_arg(raw: &str) -> Value {
	match serde_json::from_str::<serde_json::Value>(raw) {
		Ok(json) => Value::from(json),
		Err(_) => Value::from(raw),
	}
}

/// Print `value` as pretty JSON on stdout, or write it back to `path` when `in_place` is set.
pub(crate) fn emit_document(path: &Path, value: &Value, in_place: bool) -> Result<()> {
	let rendered = serde_json::to_string_pretty(&serde_json::Value::from(value))?;
	if in_place {
		fs::write(path, format!("{rendered}\n"))?;
	} else {
		println!("{rendered}");
	}
	Ok(())
}

/// Clap value parser for `--as <kind>`.
pub(crate) fn parse_kind(name: &str) -> std::result::Result<Kind, String> {
	Kind::from_name(name).ok_or_else(|| {
		format!("unknown kind '{name}' (expected bool, i8..i64, u8..u64, f32, f64, string, map, seq)")
	})
}
