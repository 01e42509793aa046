mod common;

use exsync_core::AnyEmptyResult;

#[test]
fn check_fails_when_stale() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::stale_project(tmp.path())?;

	common::exsync_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("Stale documents:"))
		.stderr(predicates::str::contains("examples/shapes/README.md"))
		.stderr(predicates::str::contains("Run `exsync update` to fix."));

	// Checking never writes.
	let content = std::fs::read_to_string(tmp.path().join("examples/shapes/README.md"))?;
	assert_eq!(content, common::STALE_README);

	Ok(())
}

#[test]
fn check_passes_after_update() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::stale_project(tmp.path())?;

	common::exsync_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	common::exsync_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains(
			"Check passed: all 1 document(s) are up to date.",
		));

	Ok(())
}

#[test]
fn check_with_diff() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::stale_project(tmp.path())?;

	common::exsync_cmd()
		.arg("check")
		.arg("--diff")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("-OLD FOOTER"))
		.stderr(predicates::str::contains("+  irmf: \"1.0\""));

	Ok(())
}

#[test]
fn check_json_output() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::stale_project(tmp.path())?;

	common::exsync_cmd()
		.arg("check")
		.arg("--format")
		.arg("json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stdout(predicates::str::contains("\"ok\":false"))
		.stdout(predicates::str::contains("\"directory\":\"examples/shapes\""));

	Ok(())
}

#[test]
fn check_json_output_when_in_sync() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join("examples"))?;

	common::exsync_cmd()
		.arg("check")
		.arg("--format")
		.arg("json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("{\"ok\":true,\"stale\":[]}"));

	Ok(())
}
