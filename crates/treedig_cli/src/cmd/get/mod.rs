use std::path::PathBuf;

use serde::Serialize;
use treedig::tree::{Kind, Path, Value, get_as, get_kind};

use crate::cmd::util::{load_document, parse_kind};
use crate::error::Result;

/// Arguments for `treedig get`.
#[derive(clap::Args)]
pub struct Args {
	/// JSON document to read.
	pub file: PathBuf,
	/// Path expression, e.g. `data.children[0].data.created`.
	pub path: String,
	/// Coerce the value into this kind before printing.
	#[arg(long = "as", value_parser = parse_kind)]
	pub kind: Option<Kind>,
	/// Print a `{path, kind, value}` report instead of the bare value.
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct GetReport {
	path: String,
	kind: &'static str,
	value: serde_json::Value,
}

/// Resolve a path inside a JSON document and print the value found there.
pub fn run(args: Args) -> Result<()> {
	let Args { file, path, kind, json } = args;

	let root = load_document(&file)?;
	let path = Path::parse(&path)?;
	let value = lookup(&root, &path, kind)?;

	if json {
		let report = GetReport {
			path: path.to_string(),
			kind: value.kind().name(),
			value: serde_json::Value::from(&value),
		};
		println!("{}", serde_json::to_string_pretty(&report)?);
		return Ok(());
	}

	match value {
		Value::String(text) => println!("{text}"),
		other => println!("{}", serde_json::to_string_pretty(&serde_json::Value::from(other))?),
	}
	Ok(())
}

fn lookup(root: &Value, path: &Path, kind: Option<Kind>) -> Result<Value> {
	let value = match kind {
		Some(kind) => get_kind(root, kind, path)?,
		None => get_as::<Value>(root, path)?,
	};
	Ok(value)
}
