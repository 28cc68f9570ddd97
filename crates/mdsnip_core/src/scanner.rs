use std::path::Path;
use std::path::PathBuf;

use markdown::ParseOptions;
use markdown::mdast::Code;
use markdown::mdast::Node;
use markdown::to_mdast;

use crate::SnipError;
use crate::SnipResult;
use crate::SnippetDirective;
use crate::parse_directive;

/// Byte offsets of a whole fenced block (fences included) in its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteSpan {
	pub start: usize,
	pub end: usize,
}

/// One fenced code block found in a document.
#[derive(Debug, Clone)]
pub struct CodeBlock {
	/// The fence's language tag. Blocks without one are never scanned.
	pub language: String,
	/// Raw body, excluding the fence lines.
	pub content: String,
	/// The parsed directive, present only in [`ScanMode::Directives`].
	pub directive: Option<SnippetDirective>,
	pub span: ByteSpan,
	/// 1-indexed start line, for issue reporting.
	pub line: usize,
	/// 1-indexed start column, for issue reporting.
	pub column: usize,
}

/// A markdown document together with its scanned code blocks, in source
/// order.
#[derive(Debug)]
pub struct MarkdownDocument {
	pub path: PathBuf,
	/// Full document text, the basis for in-place rewrites.
	pub content: String,
	pub blocks: Vec<CodeBlock>,
}

/// Which half of the directive partition a scan keeps. A block can never be
/// relevant to both modes at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
	/// Keep only blocks whose info string parses a directive (sync/check).
	Directives,
	/// Keep only blocks without a directive (extraction).
	Untracked,
}

/// Read and scan one markdown file.
pub fn scan_document(path: &Path, mode: ScanMode) -> SnipResult<MarkdownDocument> {
	let content = std::fs::read_to_string(path)?;
	let blocks = scan_blocks(&content, mode)?;

	Ok(MarkdownDocument {
		path: path.to_path_buf(),
		content,
		blocks,
	})
}

/// Scan document text for fenced code blocks, keeping the partition the
/// mode asks for.
pub fn scan_blocks(content: &str, mode: ScanMode) -> SnipResult<Vec<CodeBlock>> {
	let options = ParseOptions::gfm();
	let mdast =
		to_mdast(content, &options).map_err(|e| SnipError::Markdown(e.to_string()))?;

	let mut nodes = vec![];
	collect_code(&mdast, &mut nodes);

	let mut blocks = vec![];
	for node in nodes {
		let Some(language) = node.lang.clone() else {
			continue;
		};

		let directive = node.meta.as_deref().and_then(parse_directive);
		match mode {
			ScanMode::Directives if directive.is_none() => continue,
			ScanMode::Untracked if directive.is_some() => continue,
			_ => {}
		}

		let (span, line, column) = match &node.position {
			Some(position) => {
				(
					ByteSpan {
						start: position.start.offset,
						end: position.end.offset,
					},
					position.start.line,
					position.start.column,
				)
			}
			None => (ByteSpan { start: 0, end: 0 }, 1, 1),
		};

		blocks.push(CodeBlock {
			language,
			content: node.value.clone(),
			directive,
			span,
			line,
			column,
		});
	}

	Ok(blocks)
}

fn collect_code(node: &Node, nodes: &mut Vec<Code>) {
	match node {
		Node::Code(code) => nodes.push(code.clone()),
		_ => {
			if let Some(children) = node.children() {
				for child in children {
					collect_code(child, nodes);
				}
			}
		}
	}
}
