use std::path::Path;
use std::path::PathBuf;

use crate::CheckResult;
use crate::CodeBlock;
use crate::FileIssues;
use crate::Issue;
use crate::IssueKind;
use crate::RuntimeConfig;
use crate::ScanMode;
use crate::SnipError;
use crate::SnipResult;
use crate::SyncResult;
use crate::extract_lines;
use crate::list_markdown_files;
use crate::load_local;
use crate::load_remote;
use crate::replace_code_block;
use crate::resolve_local_path;
use crate::scan_document;

/// Terminal outcome of reconciling one directive-bearing block.
enum Reconciliation {
	/// Block content already equals the resolved snippet.
	InSync,
	/// Block content differs; `content` is the replacement text.
	Drifted { content: String },
	/// The line range produced nothing for this file: leave the block
	/// alone rather than corrupting the document with an empty body.
	Skipped,
	/// A per-block, non-fatal problem.
	Problem(Issue),
}

/// Resolve, load, and extract one block's snippet, then compare it against
/// the block's current content. Evaluated strictly in the order the error
/// taxonomy requires: remote load, local resolve, existence, local load,
/// extraction, comparison.
fn reconcile_block(
	block: &CodeBlock,
	config: &RuntimeConfig,
	document_path: &Path,
) -> Reconciliation {
	let Some(directive) = &block.directive else {
		return Reconciliation::Skipped;
	};

	tracing::trace!(
		reference = %directive.file_path,
		line = block.line,
		"reconciling block"
	);

	let loaded = if directive.is_remote {
		// URLs bypass path resolution and the containment check entirely.
		match load_remote(&directive.file_path, config) {
			Ok(text) => text,
			Err(error) => {
				return Reconciliation::Problem(Issue::new(
					IssueKind::RemoteError,
					error.to_string(),
					block.line,
					block.column,
					"remote-fetch-error",
				));
			}
		}
	} else {
		let resolved = match resolve_local_path(&directive.file_path, config, Some(document_path)) {
			Ok(path) => path,
			Err(error) => {
				let rule_id = match &error {
					SnipError::PathTraversal { .. } => "path-traversal",
					_ => "path-validation",
				};
				return Reconciliation::Problem(Issue::new(
					IssueKind::InvalidPath,
					error.to_string(),
					block.line,
					block.column,
					rule_id,
				));
			}
		};

		if !resolved.is_file() {
			return Reconciliation::Problem(Issue::new(
				IssueKind::FileMissing,
				format!("snippet file not found: {}", resolved.display()),
				block.line,
				block.column,
				"snippet-not-found",
			));
		}

		match load_local(&resolved) {
			Ok(text) => text,
			Err(error) => {
				return Reconciliation::Problem(Issue::new(
					IssueKind::LoadFailed,
					format!("error loading snippet {}: {error}", resolved.display()),
					block.line,
					block.column,
					"snippet-load-error",
				));
			}
		}
	};

	let extracted = extract_lines(&loaded, &directive.selection);

	// An empty extraction from a bounded directive means the range no
	// longer exists in the source; leave the block untouched.
	if extracted.is_empty() && directive.selection.is_bounded() {
		return Reconciliation::Skipped;
	}

	if extracted == block.content {
		Reconciliation::InSync
	} else {
		Reconciliation::Drifted { content: extracted }
	}
}

/// Rewrite every out-of-date directive-bearing block across all matched
/// documents. When `write` is false the result lists what would change but
/// no file is touched.
pub fn sync_documents(config: &RuntimeConfig, write: bool) -> SyncResult {
	let mut result = SyncResult::default();

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
		if let Err(error) = sync_one(&path, config, write, &mut result) {
			result
				.errors
				.push(format!("error processing {}: {error}", path.display()));
		}
	}

	result
}

fn sync_one(
	path: &Path,
	config: &RuntimeConfig,
	write: bool,
	result: &mut SyncResult,
) -> SnipResult<()> {
	let document = scan_document(path, ScanMode::Directives)?;
	tracing::debug!(path = %path.display(), blocks = document.blocks.len(), "syncing document");

	let mut issues = Vec::new();
	let mut content = document.content.clone();
	let mut has_changes = false;

	for block in &document.blocks {
		match reconcile_block(block, config, path) {
			Reconciliation::InSync | Reconciliation::Skipped => {}
			Reconciliation::Drifted { content: new_content } => {
				content = replace_code_block(&content, block, &new_content);
				has_changes = true;
			}
			Reconciliation::Problem(issue) => issues.push(issue),
		}
	}

	if !issues.is_empty() {
		result.file_issues.push(FileIssues {
			path: path.to_path_buf(),
			issues,
		});
	}

	if has_changes {
		if write {
			std::fs::write(path, content)?;
		}
		result.updated.push(path.to_path_buf());
	}

	Ok(())
}

/// Report every out-of-date directive-bearing block across all matched
/// documents without writing anything. CI gating runs this.
pub fn check_documents(config: &RuntimeConfig) -> CheckResult {
	let mut result = CheckResult::default();

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
		if let Err(error) = check_one(&path, config, &mut result) {
			result
				.errors
				.push(format!("error processing {}: {error}", path.display()));
		}
	}

	result
}

/// Per-document summary of untracked code blocks, surfaced by `check` as a
/// getting-started hint when no config file exists yet.
#[derive(Debug)]
pub struct DiscoveredBlocks {
	pub path: PathBuf,
	pub count: usize,
	/// Distinct fence languages, in first-seen order.
	pub languages: Vec<String>,
}

/// Find documents containing untracked code blocks. Best-effort: documents
/// that fail to enumerate or scan are skipped, never reported.
pub fn discover_untracked(config: &RuntimeConfig) -> Vec<DiscoveredBlocks> {
	let Ok(files) = list_markdown_files(config) else {
		return Vec::new();
	};

	let mut discovered = Vec::new();
	for path in files {
		let Ok(document) = scan_document(&path, ScanMode::Untracked) else {
			continue;
		};
		if document.blocks.is_empty() {
			continue;
		}

		let mut languages: Vec<String> = Vec::new();
		for block in &document.blocks {
			if !languages.contains(&block.language) {
				languages.push(block.language.clone());
			}
		}

		discovered.push(DiscoveredBlocks {
			path: document.path,
			count: document.blocks.len(),
			languages,
		});
	}

	discovered
}

fn check_one(path: &Path, config: &RuntimeConfig, result: &mut CheckResult) -> SnipResult<()> {
	let document = scan_document(path, ScanMode::Directives)?;
	tracing::debug!(path = %path.display(), blocks = document.blocks.len(), "checking document");

	let mut issues = Vec::new();
	let mut file_in_sync = true;

	for block in &document.blocks {
		match reconcile_block(block, config, path) {
			Reconciliation::InSync | Reconciliation::Skipped => {}
			Reconciliation::Drifted { .. } => {
				let locator = block
					.directive
					.as_ref()
					.map(|directive| directive.locator())
					.unwrap_or_default();
				issues.push(Issue::new(
					IssueKind::SyncNeeded,
					format!("code block out of sync with {locator}"),
					block.line,
					block.column,
					"content-mismatch",
				));
				file_in_sync = false;
			}
			Reconciliation::Problem(issue) => issues.push(issue),
		}
	}

	if !issues.is_empty() {
		result.file_issues.push(FileIssues {
			path: path.to_path_buf(),
			issues,
		});
	}

	if !file_in_sync {
		result.out_of_sync.push(path.to_path_buf());
		result.in_sync = false;
	}

	Ok(())
}
