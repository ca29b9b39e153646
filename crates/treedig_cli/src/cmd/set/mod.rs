use std::path::PathBuf;

use treedig::tree::{Path, Value, dig, set};

use crate::cmd::util::{emit_document, load_document, parse_value_arg};
use crate::error::Result;

/// Arguments for `treedig set`.
#[derive(clap::Args)]
pub struct Args {
	/// JSON document to modify.
	pub file: PathBuf,
	/// Path expression naming the key to write.
	pub path: String,
	/// New value as JSON; bare words are taken as strings.
	pub value: String,
	/// Create missing parent maps before writing.
	#[arg(long)]
	pub dig: bool,
	/// Write the result back to the file instead of printing it.
	#[arg(long)]
	pub in_place: bool,
}

/// Store a value at a path and emit the updated document.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file,
		path,
		value,
		dig: create_parents,
		in_place,
	} = args;

	let mut root = load_document(&file)?;
	let path = Path::parse(&path)?;
	apply(&mut root, &path, parse_value_arg(&value), create_parents)?;
	emit_document(&file, &root, in_place)
}

fn apply(root: &mut Value, path: &Path, value: Value, create_parents: bool) -> Result<()> {
	if create_parents && let Some((_, parent)) = path.split_last()
		&& !parent.is_empty()
	{
		dig(root, parent)?;
	}

	set(root, value, path)?;
	Ok(())
}
