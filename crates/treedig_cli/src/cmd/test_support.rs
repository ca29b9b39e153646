use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use treedig_testkit::{fixture_path, target_dir as workspace_target_dir};

static TREEDIG_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_arg(name: &str) -> String {
	fixture_path(name).display().to_string()
}

/// Write `contents` to a per-process scratch file and return its path.
pub(crate) fn scratch_file(name: &str, contents: &str) -> PathBuf {
	let dir = workspace_target_dir().join("treedig-scratch").join(std::process::id().to_string());
	fs::create_dir_all(&dir).expect("scratch dir created");
	let path = dir.join(name);
	fs::write(&path, contents).expect("scratch file written");
	path
}

pub(crate) fn run_treedig(args: &[&str]) -> Output {
	Command::new(treedig_bin()).args(args).output().expect("treedig command executes")
}

pub(crate) fn run_treedig_json(args: &[&str]) -> serde_json::Value {
	let output = run_treedig(args);
	assert!(
		output.status.success(),
		"treedig command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn treedig_bin() -> &'static PathBuf {
	TREEDIG_BIN.get_or_init(resolve_treedig_bin)
}

fn resolve_treedig_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_treedig") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "treedig.exe" } else { "treedig" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "treedig"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build treedig binary at {}", bin.display());

	bin
}
