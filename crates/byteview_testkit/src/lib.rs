//! Fixture access shared by workspace tests.
//!
//! Fixtures are JSON value notations stored under `<workspace>/fixtures`.

use std::path::{Path, PathBuf};

/// Workspace root, two levels above this crate's manifest.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir.ancestors().nth(2).map(Path::to_path_buf).unwrap_or_else(|| manifest_dir.to_path_buf())
}

/// Path of a named fixture.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Fixture as a `byteview` value argument (`@path`).
pub fn fixture_arg(name: &str) -> String {
	format!("@{}", fixture_path(name).display())
}

/// Raw fixture text, panicking with the path when it cannot be read.
pub fn fixture_text(name: &str) -> String {
	let path = fixture_path(name);
	std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("fixture {} readable: {err}", path.display()))
}

/// Parsed fixture JSON.
pub fn json_fixture(name: &str) -> serde_json::Value {
	serde_json::from_str(&fixture_text(name)).unwrap_or_else(|err| panic!("fixture {name} is valid json: {err}"))
}
