#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use exsync_core::AnyEmptyResult;
use insta_cmd::get_cargo_bin;

pub fn exsync_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("exsync"));
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}

pub const SHAPE_SNIPPET: &str =
	"/*{\n\"irmf\": \"1.0\"\n\"color\": \"red\"\n\"materials\": [\"PLA\"]\n}*/\nvoid main(){}\n";

pub const STALE_README: &str =
	"# Examples\n\nIntro.\n\n## a.irmf\nSome text\n```glsl\nOLD\n```\nOLD FOOTER";

/// Write `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> AnyEmptyResult {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(path, content)?;

	Ok(())
}

/// A project with one stale README next to the snippet it references.
pub fn stale_project(root: &Path) -> AnyEmptyResult {
	write_file(root, "examples/shapes/README.md", STALE_README)?;
	write_file(root, "examples/shapes/a.irmf", SHAPE_SNIPPET)?;

	Ok(())
}
