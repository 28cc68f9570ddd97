use std::borrow::Cow;
use std::path::Path;

use regex::NoExpand;
use regex::Regex;

use crate::ExtractResult;
use crate::LanguageTable;
use crate::RuntimeConfig;
use crate::ScanMode;
use crate::SnipError;
use crate::SnipResult;
use crate::list_markdown_files;
use crate::scan_document;

/// Pull every untracked, extension-mapped code block out of the matched
/// documents into standalone snippet files, annotating the fence headers
/// with a `snippet=` reference back to them.
pub fn extract_documents(config: &RuntimeConfig, languages: &LanguageTable) -> ExtractResult {
	let mut result = ExtractResult::default();

	let files = match list_markdown_files(config) {
		Ok(files) => files,
		Err(error) => {
			result
				.errors
				.push(format!("error finding markdown files: {error}"));
			return result;
		}
	};

	for path in files {
		if let Err(error) = extract_one(&path, config, languages, &mut result) {
			result
				.errors
				.push(format!("error processing {}: {error}", path.display()));
		}
	}

	result
}

fn extract_one(
	path: &Path,
	config: &RuntimeConfig,
	languages: &LanguageTable,
	result: &mut ExtractResult,
) -> SnipResult<()> {
	let document = scan_document(path, ScanMode::Untracked)?;
	if document.blocks.is_empty() {
		return Ok(());
	}

	// Partition: a block is eligible only when its language maps to one of
	// the configured include-extensions. Everything else is left untouched.
	let eligible: Vec<(&crate::CodeBlock, String)> = document
		.blocks
		.iter()
		.filter_map(|block| {
			let extension = languages.extension_for(&block.language, &config.include_extensions)?;
			config
				.include_extensions
				.contains(&extension)
				.then_some((block, extension))
		})
		.collect();

	if eligible.is_empty() {
		return Ok(());
	}

	let dir_name = document
		.path
		.file_stem()
		.and_then(|stem| stem.to_str())
		.unwrap_or("snippets")
		.to_lowercase();
	let output_dir = config.snippet_root_abs().join(&dir_name);
	std::fs::create_dir_all(&output_dir)?;

	tracing::debug!(
		path = %path.display(),
		eligible = eligible.len(),
		output_dir = %output_dir.display(),
		"extracting snippets"
	);

	let width = index_width(eligible.len());
	let mut content = document.content.clone();
	let mut index = 1usize;
	let mut has_changes = false;

	for (block, extension) in eligible {
		// Advance past names already taken on disk.
		let (file_name, file_path) = loop {
			let name = format!("snippet{index:0width$}{extension}");
			let candidate = output_dir.join(&name);
			if !candidate.exists() {
				break (name, candidate);
			}
			index += 1;
		};

		std::fs::write(&file_path, ensure_trailing_newline(&block.content))?;
		result.snippets_created += 1;

		let reference = format!("{dir_name}/{file_name}");
		let new_header = format!("```{} snippet={reference}", block.language);

		// Rewrite the first still-bare header for this language. Once
		// annotated, a header no longer matches, so duplicate languages
		// claim headers strictly in processing order.
		let pattern = bare_header_pattern(&block.language)?;
		if let Cow::Owned(updated) = pattern.replace(&content, NoExpand(&new_header)) {
			content = updated;
			has_changes = true;
		}

		index += 1;
	}

	if has_changes {
		std::fs::write(&document.path, content)?;
		result.extracted.push(document.path.clone());
	}

	Ok(())
}

/// Line-anchored pattern matching a bare fence header for one language.
fn bare_header_pattern(language: &str) -> SnipResult<Regex> {
	Regex::new(&format!("(?m)^```{}$", regex::escape(language))).map_err(|e| {
		SnipError::Markdown(format!(
			"failed to build header pattern for `{language}`: {e}"
		))
	})
}

/// Zero-padded width for snippet indices: at least two digits, growing with
/// the eligible-block count.
fn index_width(count: usize) -> usize {
	let mut digits = 1;
	let mut remaining = count;
	while remaining >= 10 {
		digits += 1;
		remaining /= 10;
	}
	digits.max(2)
}

/// Append a trailing newline only when one is absent, never doubling it.
pub fn ensure_trailing_newline(content: &str) -> String {
	if content.ends_with('\n') {
		content.to_string()
	} else {
		format!("{content}\n")
	}
}
