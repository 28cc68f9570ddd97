//! Issue reporting in the familiar per-file, line:column grouped layout.

use owo_colors::OwoColorize;
use owo_colors::Stream;

use mdsnip_core::FileIssues;

/// Print every issue grouped by file and return `(errors, warnings)` counts.
///
/// Layout, one file per group:
///
/// ```text
/// docs/guide.md
///   12:1  error    code block out of sync with snippet://src/lib.rs  content-mismatch
///    3:1  warning  snippet file not found: ./snippets/missing.ts     snippet-not-found
/// ```
pub fn print_file_issues(file_issues: &[FileIssues]) -> (usize, usize) {
	let mut errors = 0;
	let mut warnings = 0;

	for file in file_issues {
		if file.issues.is_empty() {
			continue;
		}

		println!(
			"{}",
			file.path
				.display()
				.if_supports_color(Stream::Stdout, |path| path.underline())
		);

		for issue in &file.issues {
			let position = format!("{}:{}", issue.line, issue.column);
			let severity = if issue.kind.is_error() {
				errors += 1;
				format!(
					"{}",
					"error".if_supports_color(Stream::Stdout, |s| s.red())
				)
			} else {
				warnings += 1;
				format!(
					"{}",
					"warning".if_supports_color(Stream::Stdout, |s| s.yellow())
				)
			};

			println!(
				"  {position}  {severity}  {}  {}",
				issue.message,
				issue
					.rule_id
					.if_supports_color(Stream::Stdout, |rule| rule.dimmed())
			);
		}

		println!();
	}

	(errors, warnings)
}

/// Print the closing problem count, eslint-style.
pub fn print_summary(errors: usize, warnings: usize) {
	if errors + warnings == 0 {
		return;
	}

	let line = format!(
		"\u{2716} {} problem{} ({errors} error{}, {warnings} warning{})",
		errors + warnings,
		plural(errors + warnings),
		plural(errors),
		plural(warnings),
	);

	if errors > 0 {
		println!("{}", line.if_supports_color(Stream::Stdout, |l| l.red()));
	} else {
		println!("{}", line.if_supports_color(Stream::Stdout, |l| l.yellow()));
	}
}

fn plural(count: usize) -> &'static str {
	if count == 1 { "" } else { "s" }
}
