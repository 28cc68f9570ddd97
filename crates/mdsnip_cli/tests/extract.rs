use assert_cmd::Command;
use mdsnip_core::AnyEmptyResult;

#[test]
fn extract_creates_snippet_files() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(
		tmp.path().join("guide.md"),
		"# Guide\n\n```ts\nconst a = 1;\n```\n\n```ts\nconst b = 2;\n```\n",
	)?;

	let mut cmd = Command::cargo_bin("mdsnip")?;
	cmd.env("NO_COLOR", "1")
		.arg("extract")
		.arg("--snippet-root")
		.arg("snippets")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains(
			"Extracted 2 snippet(s) from 1 file(s).",
		));

	let dir = tmp.path().join("snippets").join("guide");
	similar_asserts::assert_eq!(
		std::fs::read_to_string(dir.join("snippet01.ts"))?,
		"const a = 1;\n"
	);
	similar_asserts::assert_eq!(
		std::fs::read_to_string(dir.join("snippet02.ts"))?,
		"const b = 2;\n"
	);

	let updated = std::fs::read_to_string(tmp.path().join("guide.md"))?;
	assert!(updated.contains("```ts snippet=guide/snippet01.ts"));
	assert!(updated.contains("```ts snippet=guide/snippet02.ts"));

	Ok(())
}

#[test]
fn extract_with_nothing_to_do() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(
		tmp.path().join("readme.md"),
		"# Readme\n\n```ts snippet=already/tracked.ts\nbody\n```\n",
	)?;

	let mut cmd = Command::cargo_bin("mdsnip")?;
	cmd.env("NO_COLOR", "1")
		.arg("extract")
		.arg("--snippet-root")
		.arg("snippets")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains(
			"No untracked code blocks to extract.",
		));

	Ok(())
}

#[test]
fn extracted_blocks_pass_check() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(
		tmp.path().join("doc.md"),
		"```rust\nfn main() {}\n```\n",
	)?;

	let mut cmd = Command::cargo_bin("mdsnip")?;
	cmd.env("NO_COLOR", "1")
		.arg("extract")
		.arg("--snippet-root")
		.arg("snippets")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let mut check = Command::cargo_bin("mdsnip")?;
	check
		.env("NO_COLOR", "1")
		.arg("check")
		.arg("--snippet-root")
		.arg("snippets")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("All code blocks are in sync."));

	Ok(())
}

#[test]
fn extract_honors_include_extensions() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let original = "```ts\nskipped\n```\n";
	std::fs::write(tmp.path().join("doc.md"), original)?;

	// Only python is eligible, so the typescript block stays untouched.
	let mut cmd = Command::cargo_bin("mdsnip")?;
	cmd.env("NO_COLOR", "1")
		.arg("extract")
		.arg("--snippet-root")
		.arg("snippets")
		.arg("--include-extensions")
		.arg(".py")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains(
			"No untracked code blocks to extract.",
		));

	similar_asserts::assert_eq!(
		std::fs::read_to_string(tmp.path().join("doc.md"))?,
		original
	);

	Ok(())
}
