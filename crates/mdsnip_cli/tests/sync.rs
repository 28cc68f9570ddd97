use assert_cmd::Command;
use mdsnip_core::AnyEmptyResult;

#[test]
fn sync_updates_drifting_block() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(tmp.path().join("hello.ts"), "const x = 2;\n")?;
	std::fs::write(
		tmp.path().join("readme.md"),
		"```ts snippet=hello.ts\nconst x = 1;\n```\n",
	)?;

	let mut cmd = Command::cargo_bin("mdsnip")?;
	cmd.env("NO_COLOR", "1")
		.arg("sync")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Updated 1 file(s)."));

	let updated = std::fs::read_to_string(tmp.path().join("readme.md"))?;
	similar_asserts::assert_eq!(updated, "```ts snippet=hello.ts\nconst x = 2;\n```\n");

	Ok(())
}

#[test]
fn sync_is_the_default_command() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(tmp.path().join("hello.ts"), "const x = 2;\n")?;
	std::fs::write(
		tmp.path().join("readme.md"),
		"```ts snippet=hello.ts\nstale\n```\n",
	)?;

	let mut cmd = Command::cargo_bin("mdsnip")?;
	cmd.env("NO_COLOR", "1")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Updated 1 file(s)."));

	Ok(())
}

#[test]
fn sync_noop_when_in_sync() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(tmp.path().join("hello.ts"), "const x = 1;\n")?;
	std::fs::write(
		tmp.path().join("readme.md"),
		"```ts snippet=hello.ts\nconst x = 1;\n```\n",
	)?;

	let mut cmd = Command::cargo_bin("mdsnip")?;
	cmd.env("NO_COLOR", "1")
		.arg("sync")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains(
			"All code blocks are already in sync.",
		));

	Ok(())
}

#[test]
fn sync_dry_run_reports_without_writing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(tmp.path().join("hello.ts"), "const x = 2;\n")?;
	let original = "```ts snippet=hello.ts\nconst x = 1;\n```\n";
	std::fs::write(tmp.path().join("readme.md"), original)?;

	let mut cmd = Command::cargo_bin("mdsnip")?;
	cmd.env("NO_COLOR", "1")
		.arg("sync")
		.arg("--dry-run")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Dry run: would update 1 file(s):"))
		.stdout(predicates::str::contains("readme.md"));

	similar_asserts::assert_eq!(
		std::fs::read_to_string(tmp.path().join("readme.md"))?,
		original
	);

	Ok(())
}

#[test]
fn sync_applies_line_ranges() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(
		tmp.path().join("lines.txt"),
		"line 1\nline 2\nline 3\nline 4\nline 5\n",
	)?;
	std::fs::write(
		tmp.path().join("readme.md"),
		"```ts snippet=lines.txt#L2-L4\nstale\n```\n",
	)?;

	let mut cmd = Command::cargo_bin("mdsnip")?;
	cmd.env("NO_COLOR", "1")
		.arg("sync")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	similar_asserts::assert_eq!(
		std::fs::read_to_string(tmp.path().join("readme.md"))?,
		"```ts snippet=lines.txt#L2-L4\nline 2\nline 3\nline 4\n```\n"
	);

	Ok(())
}

#[test]
fn sync_succeeds_despite_missing_snippet() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(
		tmp.path().join("readme.md"),
		"```ts snippet=nowhere.ts\nbody\n```\n",
	)?;

	// A missing file is advisory: reported, but never a failure exit.
	let mut cmd = Command::cargo_bin("mdsnip")?;
	cmd.env("NO_COLOR", "1")
		.arg("sync")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("snippet-not-found"));

	Ok(())
}
