use std::path::PathBuf;

use treedig::tree::{Path, dig};

use crate::cmd::util::{emit_document, load_document};
use crate::error::Result;

/// Arguments for `treedig dig`.
#[derive(clap::Args)]
pub struct Args {
	/// JSON document to modify.
	pub file: PathBuf,
	/// Path expression whose missing map levels should be created.
	pub path: String,
	/// Write the result back to the file instead of printing it.
	#[arg(long)]
	pub in_place: bool,
}

/// Create missing map levels along a path and emit the updated document.
pub fn run(args: Args) -> Result<()> {
	let Args { file, path, in_place } = args;

	let mut root = load_document(&file)?;
	let path = Path::parse(&path)?;
	dig(&mut root, &path)?;
	emit_document(&file, &root, in_place)
}
