//! Conversions between [`Value`] trees and `serde_json` documents.

use serde_json::{Number, Value as Json};

use crate::tree::{Key, Value};

impl From<Json> for Value {
	fn from(json: Json) -> Self {
		match json {
			Json::Null => Value::Null,
			Json::Bool(flag) => Value::Bool(flag),
			Json::Number(number) => from_number(&number),
			Json::String(text) => Value::String(text),
			Json::Array(items) => Value::Seq(items.into_iter().map(Value::from).collect()),
			Json::Object(fields) => Value::Map(fields.into_iter().map(|(name, item)| (Key::Str(name), Value::from(item))).collect()),
		}
	}
}

impl From<Value> for Json {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => Json::Null,
			Value::Bool(flag) => Json::Bool(flag),
			Value::I8(n) => Json::from(n),
			Value::I16(n) => Json::from(n),
			Value::I32(n) => Json::from(n),
			Value::I64(n) => Json::from(n),
			Value::U8(n) => Json::from(n),
			Value::U16(n) => Json::from(n),
			Value::U32(n) => Json::from(n),
			Value::U64(n) => Json::from(n),
			Value::F32(f) => float(f64::from(f)),
			Value::F64(f) => float(f),
			Value::String(text) => Json::String(text),
			Value::Seq(items) => Json::Array(items.into_iter().map(Json::from).collect()),
			Value::Map(map) => Json::Object(map.into_iter().map(|(key, item)| (key.to_string(), Json::from(item))).collect()),
			Value::Boxed(inner) => Json::from(*inner),
		}
	}
}

impl From<&Value> for Json {
	fn from(value: &Value) -> Self {
		Json::from(value.clone())
	}
}

fn from_number(number: &Number) -> Value {
	if let Some(n) = number.as_i64() {
		Value::I64(n)
	} else if let Some(n) = number.as_u64() {
		Value::U64(n)
	} else {
		number.as_f64().map_or(Value::Null, Value::F64)
	}
}

/// Non-finite floats have no JSON form and map to null.
fn float(f: f64) -> Json {
	Number::from_f64(f).map_or(Json::Null, Json::Number)
}

#[cfg(test)]
mod tests;
