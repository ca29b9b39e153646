use serde_json::json;

use crate::path;
use crate::tree::{Key, Kind, Value, walk};

#[test]
fn numbers_pick_the_narrowest_lossless_variant() {
	let value = Value::from(json!({
		"neg": -3,
		"big": 18_446_744_073_709_551_615_u64,
		"float": 1364825519.0,
	}));

	let kind_at = |name: &str| walk(&value, &path![name]).expect("walk succeeds").map(Value::kind);
	assert_eq!(kind_at("neg"), Some(Kind::I64));
	assert_eq!(kind_at("big"), Some(Kind::U64));
	assert_eq!(kind_at("float"), Some(Kind::F64));
}

#[test]
fn objects_become_string_keyed_maps() {
	let value = Value::from(json!({"PMap": {"17": {"Tag": "tag17"}}}));
	let map = value.as_map().expect("root is a map");
	assert!(map.contains_key(&Key::from("PMap")));
	assert_eq!(
		walk(&value, &path!["PMap", "17", "Tag"]).expect("walk succeeds"),
		Some(&Value::from("tag17"))
	);
}

#[test]
fn converts_back_to_json() {
	let mut value = Value::from(json!({"list": [1, null, "x"], "flag": true}));
	if let Value::Map(map) = &mut value {
		map.insert(Key::Int(7), Value::Boxed(Box::new(Value::F32(0.5))));
		map.insert("nan".into(), Value::F64(f64::NAN));
	}

	let json = serde_json::Value::from(&value);
	assert_eq!(
		json,
		json!({
			"7": 0.5,
			"flag": true,
			"list": [1, null, "x"],
			"nan": null,
		})
	);
}
