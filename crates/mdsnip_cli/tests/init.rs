use assert_cmd::Command;
use mdsnip_core::AnyEmptyResult;

#[test]
fn init_creates_config_and_snippet_dir() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let mut cmd = Command::cargo_bin("mdsnip")?;
	cmd.env("NO_COLOR", "1")
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Created config file:"));

	let config = std::fs::read_to_string(tmp.path().join("mdsnip.toml"))?;
	assert!(config.contains("snippet_root = \"./snippets\""));
	assert!(tmp.path().join("snippets").is_dir());

	Ok(())
}

#[test]
fn init_leaves_existing_config_alone() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let original = "snippet_root = \"./custom\"\n";
	std::fs::write(tmp.path().join("mdsnip.toml"), original)?;

	let mut cmd = Command::cargo_bin("mdsnip")?;
	cmd.env("NO_COLOR", "1")
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Config file already exists:"));

	similar_asserts::assert_eq!(
		std::fs::read_to_string(tmp.path().join("mdsnip.toml"))?,
		original
	);

	Ok(())
}

#[test]
fn init_with_extract_pulls_blocks_out() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(
		tmp.path().join("doc.md"),
		"```ts\nconst a = 1;\n```\n",
	)?;

	let mut cmd = Command::cargo_bin("mdsnip")?;
	cmd.env("NO_COLOR", "1")
		.arg("init")
		.arg("--extract")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Created config file:"))
		.stdout(predicates::str::contains("Extracted 1 snippet(s)"));

	assert!(
		tmp.path()
			.join("snippets")
			.join("doc")
			.join("snippet01.ts")
			.is_file()
	);

	Ok(())
}
