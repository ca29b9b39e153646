//! `treedig` command line: read, write, and auto-vivify paths inside JSON documents.

use clap::{Parser, Subcommand};

mod cmd;
mod error;

#[derive(Parser)]
#[command(name = "treedig", about = "Path-based reads and writes over JSON documents")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the value found at a path.
	Get(cmd::get::Args),
	/// Store a value at a path and print or write back the document.
	Set(cmd::set::Args),
	/// Create missing map levels along a path.
	Dig(cmd::dig::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> error::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Get(args) => cmd::get::run(args),
		Commands::Set(args) => cmd::set::run(args),
		Commands::Dig(args) => cmd::dig::run(args),
	}
}
