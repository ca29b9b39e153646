use treedig::path;
use treedig::tree::{Seq, Value, get, get_f64, get_string};
use treedig_testkit::load_json_fixture;

fn listing() -> Value {
	Value::from(load_json_fixture("listing.json"))
}

#[test]
fn children_read_into_sequence_destination() {
	let root = listing();

	let mut children = Seq::new();
	get(&root, &mut children, &path!["data", "children"]).expect("children resolve");
	assert_eq!(children.len(), 2);

	for child in &children {
		let mut created = 0.0_f64;
		get(child, &mut created, &path!["data", "created"]).expect("created resolves");
		assert_ne!(created, 0.0);
		assert_ne!(get_f64(child, &path!["data", "created"]), 0.0);
	}
}

#[test]
fn indexed_path_reaches_nested_fields() {
	let root = listing();
	assert_eq!(get_string(&root, &path!["data", "children", 1, "data", "author"]), "franciscosouza");
	assert_eq!(get_string(&root, &path!["data", "after"]), "t3_1aewpb");
	assert_eq!(get_string(&root, &path!["data", "before"]), "");
}
