//! Best-effort scalar coercion.
//!
//! | target | accepted sources |
//! |---|---|
//! | `bool` | bool, any integer (`!= 0`), any float (`!= 0.0`), `1 t T TRUE true True 0 f F FALSE false False` |
//! | `i8..i64` | in-range integers, finite in-range floats (truncated), bool as 0/1, numeric strings, blank string as 0 |
//! | `u8..u64` | as signed, negative values rejected |
//! | `f32` | integers, floats (f64 narrowed), bool, float strings, blank string as 0; results must be finite |
//! | `f64` | integers, floats (f32 widened exactly), bool, float strings, blank string as 0; results must be finite |
//! | `string` | bool, integers, floats via `Display` |
//! | `null`, `map`, `seq` | same kind only |

use thiserror::Error;

use crate::tree::{Kind, Value};

/// No coercion rule maps the source kind onto the target kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot convert {from} to {to}")]
pub struct ConvertError {
	/// Kind of the source value.
	pub from: Kind,
	/// Requested target kind.
	pub to: Kind,
}

/// Coerce `value` into `to`, returning a value whose kind is exactly `to`.
pub fn convert(value: &Value, to: Kind) -> Result<Value, ConvertError> {
	let value = value.resolve();
	let from = value.kind();
	if from == to {
		return Ok(value.clone());
	}

	let converted = match to {
		Kind::Bool => to_bool(value).map(Value::Bool),
		Kind::I8 | Kind::I16 | Kind::I32 | Kind::I64 | Kind::U8 | Kind::U16 | Kind::U32 | Kind::U64 => {
			to_integer(value).and_then(|number| fit_integer(number, to))
		}
		Kind::F32 => to_f32(value).map(Value::F32),
		Kind::F64 => to_f64(value).map(Value::F64),
		Kind::String => to_string(value).map(Value::String),
		Kind::Null | Kind::Map | Kind::Seq => None,
	};

	converted.ok_or(ConvertError { from, to })
}

/// Numeric view of a scalar before it is fitted into a target width.
#[derive(Debug, Clone, Copy)]
enum Number {
	Int(i128),
	Float(f64),
}

fn number(value: &Value) -> Option<Number> {
	Some(match value {
		Value::Bool(flag) => Number::Int(i128::from(*flag)),
		Value::I8(n) => Number::Int(i128::from(*n)),
		Value::I16(n) => Number::Int(i128::from(*n)),
		Value::I32(n) => Number::Int(i128::from(*n)),
		Value::I64(n) => Number::Int(i128::from(*n)),
		Value::U8(n) => Number::Int(i128::from(*n)),
		Value::U16(n) => Number::Int(i128::from(*n)),
		Value::U32(n) => Number::Int(i128::from(*n)),
		Value::U64(n) => Number::Int(i128::from(*n)),
		Value::F32(f) => Number::Float(f64::from(*f)),
		Value::F64(f) => Number::Float(*f),
		Value::String(text) => parse_number(text)?,
		_ => return None,
	})
}

fn parse_number(text: &str) -> Option<Number> {
	let text = text.trim();
	if text.is_empty() {
		return Some(Number::Int(0));
	}
	if let Ok(n) = text.parse::<i128>() {
		return Some(Number::Int(n));
	}
	text.parse::<f64>().ok().filter(|f| f.is_finite()).map(Number::Float)
}

fn to_bool(value: &Value) -> Option<bool> {
	if let Value::String(text) = value {
		return match text.as_str() {
			"1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
			"0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
			_ => None,
		};
	}

	match number(value)? {
		Number::Int(n) => Some(n != 0),
		Number::Float(f) => Some(f != 0.0),
	}
}

fn to_integer(value: &Value) -> Option<i128> {
	match number(value)? {
		Number::Int(n) => Some(n),
		Number::Float(f) if f.is_finite() => Some(f.trunc() as i128),
		Number::Float(_) => None,
	}
}

fn fit_integer(n: i128, to: Kind) -> Option<Value> {
	Some(match to {
		Kind::I8 => Value::I8(i8::try_from(n).ok()?),
		Kind::I16 => Value::I16(i16::try_from(n).ok()?),
		Kind::I32 => Value::I32(i32::try_from(n).ok()?),
		Kind::I64 => Value::I64(i64::try_from(n).ok()?),
		Kind::U8 => Value::U8(u8::try_from(n).ok()?),
		Kind::U16 => Value::U16(u16::try_from(n).ok()?),
		Kind::U32 => Value::U32(u32::try_from(n).ok()?),
		Kind::U64 => Value::U64(u64::try_from(n).ok()?),
		_ => return None,
	})
}

fn to_f32(value: &Value) -> Option<f32> {
	let converted = match value {
		Value::String(text) => parse_float::<f32>(text)?,
		_ => match number(value)? {
			Number::Int(n) => n as f32,
			Number::Float(f) => f as f32,
		},
	};
	Some(converted).filter(|f| f.is_finite())
}

fn to_f64(value: &Value) -> Option<f64> {
	let converted = match value {
		Value::String(text) => parse_float::<f64>(text)?,
		_ => match number(value)? {
			Number::Int(n) => n as f64,
			Number::Float(f) => f,
		},
	};
	Some(converted).filter(|f| f.is_finite())
}

/// Parse a float string directly in the target width; blank text reads as zero.
fn parse_float<F: std::str::FromStr + Default>(text: &str) -> Option<F> {
	let text = text.trim();
	if text.is_empty() {
		return Some(F::default());
	}
	text.parse::<F>().ok()
}

fn to_string(value: &Value) -> Option<String> {
	Some(match value {
		Value::Bool(flag) => flag.to_string(),
		Value::I8(n) => n.to_string(),
		Value::I16(n) => n.to_string(),
		Value::I32(n) => n.to_string(),
		Value::I64(n) => n.to_string(),
		Value::U8(n) => n.to_string(),
		Value::U16(n) => n.to_string(),
		Value::U32(n) => n.to_string(),
		Value::U64(n) => n.to_string(),
		Value::F32(f) => f.to_string(),
		Value::F64(f) => f.to_string(),
		_ => return None,
	})
}
