use std::path::Path;
use std::path::PathBuf;

use crate::RuntimeConfig;
use crate::ScanMode;
use crate::SnipResult;
use crate::list_markdown_files;
use crate::scan_document;

/// Result of stripping directives out of the matched documents.
#[derive(Debug, Default)]
pub struct EjectResult {
	/// Documents that had at least one directive removed.
	pub processed: Vec<PathBuf>,
	pub errors: Vec<String>,
}

/// Remove every `snippet=` directive from the fence headers of the matched
/// documents, restoring the bare ```` ```<lang> ```` form. The snippet
/// files and config file themselves are the caller's responsibility.
pub fn remove_directives(config: &RuntimeConfig) -> EjectResult {
	let mut result = EjectResult::default();

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
		match strip_document(&path) {
			Ok(true) => result.processed.push(path),
			Ok(false) => {}
			Err(error) => {
				result
					.errors
					.push(format!("error processing {}: {error}", path.display()));
			}
		}
	}

	result
}

fn strip_document(path: &Path) -> SnipResult<bool> {
	let document = scan_document(path, ScanMode::Directives)?;
	if document.blocks.is_empty() {
		return Ok(false);
	}

	let mut stripped = Vec::new();
	let mut in_fence = false;
	let mut has_changes = false;

	for line in document.content.split('\n') {
		if !in_fence && line.starts_with("```") && line.contains("snippet=") {
			in_fence = true;
			// Keep the fence and language, drop the directive and anything
			// after it.
			let header = line.split(" snippet=").next().unwrap_or(line);
			if header != line {
				has_changes = true;
			}
			stripped.push(header.to_string());
			continue;
		}

		if line.starts_with("```") {
			in_fence = !in_fence;
		}
		stripped.push(line.to_string());
	}

	if !has_changes {
		return Ok(false);
	}

	std::fs::write(path, stripped.join("\n"))?;
	Ok(true)
}
