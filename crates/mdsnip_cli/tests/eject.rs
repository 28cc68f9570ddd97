use assert_cmd::Command;
use mdsnip_core::AnyEmptyResult;

#[test]
fn eject_removes_directives_snippets_and_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(
		tmp.path().join("mdsnip.toml"),
		"snippet_root = \"./snippets\"\n",
	)?;
	let dir = tmp.path().join("snippets").join("doc");
	std::fs::create_dir_all(&dir)?;
	std::fs::write(dir.join("snippet01.ts"), "const a = 1;\n")?;
	std::fs::write(
		tmp.path().join("doc.md"),
		"```ts snippet=doc/snippet01.ts\nconst a = 1;\n```\n",
	)?;

	let mut cmd = Command::cargo_bin("mdsnip")?;
	cmd.env("NO_COLOR", "1")
		.arg("eject")
		.arg("--yes")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Removed directives from 1 file(s)."));

	similar_asserts::assert_eq!(
		std::fs::read_to_string(tmp.path().join("doc.md"))?,
		"```ts\nconst a = 1;\n```\n"
	);
	assert!(!tmp.path().join("snippets").exists());
	assert!(!tmp.path().join("mdsnip.toml").exists());

	Ok(())
}

#[test]
fn eject_aborts_without_confirmation() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(
		tmp.path().join("mdsnip.toml"),
		"snippet_root = \"./snippets\"\n",
	)?;
	let original = "```ts snippet=doc/snippet01.ts\nconst a = 1;\n```\n";
	std::fs::write(tmp.path().join("doc.md"), original)?;

	let mut cmd = Command::cargo_bin("mdsnip")?;
	cmd.env("NO_COLOR", "1")
		.arg("eject")
		.arg("--path")
		.arg(tmp.path())
		.write_stdin("n\n")
		.assert()
		.success()
		.stdout(predicates::str::contains("Aborted."));

	similar_asserts::assert_eq!(
		std::fs::read_to_string(tmp.path().join("doc.md"))?,
		original
	);
	assert!(tmp.path().join("mdsnip.toml").is_file());

	Ok(())
}

#[test]
fn eject_never_deletes_the_project_root() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	// Default snippet_root is `.`: ejecting must not remove the project.
	std::fs::write(
		tmp.path().join("doc.md"),
		"```ts snippet=hello.ts\nbody\n```\n",
	)?;

	let mut cmd = Command::cargo_bin("mdsnip")?;
	cmd.env("NO_COLOR", "1")
		.arg("eject")
		.arg("--yes")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	assert!(tmp.path().is_dir());
	similar_asserts::assert_eq!(
		std::fs::read_to_string(tmp.path().join("doc.md"))?,
		"```ts\nbody\n```\n"
	);

	Ok(())
}
