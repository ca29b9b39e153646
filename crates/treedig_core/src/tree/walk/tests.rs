use crate::path;
use crate::tree::{DigError, Kind, Map, Value, dig, walk, walk_mut};

fn matrix() -> Value {
	Value::Seq(vec![
		Value::Seq(vec![0.into(), 1.into(), 2.into()]),
		Value::Seq(vec![3.into(), 4.into(), 5.into()]),
		Value::Seq(vec![6.into(), 7.into(), 8.into()]),
	])
}

fn nested() -> Value {
	let mut inner = Map::new();
	inner.insert("variable".into(), Value::I32(2));
	inner.insert("empty".into(), Value::Null);

	let mut middle = Map::new();
	middle.insert("to".into(), Value::Boxed(Box::new(Value::Map(inner))));

	let mut root = Map::new();
	root.insert("path".into(), Value::Map(middle));
	root.insert("list".into(), Value::Seq(vec!["a".into(), Value::Null]));
	Value::Map(root)
}

#[test]
fn descends_nested_sequences() {
	let root = matrix();
	let found = walk(&root, &path![1, 1]).expect("walk succeeds");
	assert_eq!(found, Some(&Value::I32(4)));
}

#[test]
fn out_of_range_index_is_hard_error() {
	let root = matrix();
	let err = walk(&root, &path![9, 9]).expect_err("index 9 is out of range");
	assert_eq!(err, DigError::IndexOutOfRange { index: 9, len: 3 });

	let err = walk(&root, &path![-1]).expect_err("negative index is out of range");
	assert_eq!(err, DigError::IndexOutOfRange { index: -1, len: 3 });
}

#[test]
fn missing_map_key_is_soft_miss() {
	let root = nested();
	assert_eq!(walk(&root, &path!["path", "from"]).expect("walk succeeds"), None);
	assert_eq!(walk(&root, &path!["nope", "deeper", "still"]).expect("walk succeeds"), None);
}

#[test]
fn string_segment_on_sequence_is_soft_miss() {
	let root = nested();
	assert_eq!(walk(&root, &path!["list", "first"]).expect("walk succeeds"), None);
}

#[test]
fn scalar_and_null_nodes_stop_the_walk() {
	let root = nested();
	assert_eq!(walk(&root, &path!["path", "to", "variable", "x"]).expect("walk succeeds"), None);
	assert_eq!(walk(&root, &path!["path", "to", "empty"]).expect("walk succeeds"), None);
	assert_eq!(walk(&root, &path!["list", 1]).expect("walk succeeds"), None);
}

#[test]
fn boxed_layers_are_transparent() {
	let root = Value::Boxed(Box::new(nested()));
	let found = walk(&root, &path!["path", "to", "variable"]).expect("walk succeeds");
	assert_eq!(found, Some(&Value::I32(2)));
}

#[test]
fn scalar_root_is_rejected() {
	let root = Value::Bool(true);
	let err = walk(&root, &path!["a"]).expect_err("scalar root should fail");
	assert_eq!(err, DigError::InvalidSource { found: Kind::Bool });
}

#[test]
fn walk_mut_does_not_vivify_without_flag() {
	let mut root = nested();
	let before = root.clone();
	assert!(walk_mut(&mut root, false, &path!["a", "b"]).expect("walk succeeds").is_none());
	assert_eq!(root, before);
}

#[test]
fn walk_mut_edits_in_place() {
	let mut root = nested();
	let node = walk_mut(&mut root, false, &path!["path", "to", "variable"])
		.expect("walk succeeds")
		.expect("node exists");
	*node = Value::I32(7);
	assert_eq!(walk(&root, &path!["path", "to", "variable"]).expect("walk succeeds"), Some(&Value::I32(7)));
}

#[test]
fn dig_creates_missing_levels_and_is_idempotent() {
	let mut root = Value::map();
	dig(&mut root, &path!["a", "b", "c"]).expect("dig succeeds");

	let created = walk(&root, &path!["a", "b", "c"]).expect("walk succeeds");
	assert_eq!(created, Some(&Value::map()));

	let snapshot = root.clone();
	dig(&mut root, &path!["a", "b", "c"]).expect("second dig succeeds");
	assert_eq!(root, snapshot);
}

#[test]
fn dig_replaces_null_slots_but_keeps_existing_values() {
	let mut root = nested();
	dig(&mut root, &path!["path", "to", "empty", "leaf"]).expect("dig through null succeeds");
	assert!(walk(&root, &path!["path", "to", "empty", "leaf"]).expect("walk succeeds").is_some());
	assert_eq!(walk(&root, &path!["path", "to", "variable"]).expect("walk succeeds"), Some(&Value::I32(2)));
}

#[test]
fn dig_through_scalar_fails() {
	let mut root = nested();
	let err = dig(&mut root, &path!["path", "to", "variable", "deeper"]).expect_err("scalar blocks dig");
	assert!(matches!(err, DigError::PathNotFound { .. }));
}

#[test]
fn dig_does_not_extend_sequences() {
	let mut root = nested();
	let err = dig(&mut root, &path!["list", 5, "x"]).expect_err("sequence index out of range");
	assert_eq!(err, DigError::IndexOutOfRange { index: 5, len: 2 });
}

#[test]
fn dig_rejects_empty_path() {
	let mut root = Value::map();
	assert_eq!(dig(&mut root, &[]), Err(DigError::MissingPath));
}
