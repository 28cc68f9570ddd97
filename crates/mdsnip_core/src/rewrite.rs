use crate::CodeBlock;
use crate::parse_directive;

/// Splice `new_content` into the fenced block matching `block`'s directive,
/// leaving every other byte of the document untouched.
///
/// The target is located by matching the block's language prefix and
/// re-parsing the directive from each candidate opening fence line,
/// comparing for equivalence (same language, same path, same line
/// selection) rather than by offset arithmetic, which keeps the operation
/// correct after earlier edits have shifted offsets. If no matching
/// open/close fence pair is found the document is returned unchanged.
pub fn replace_code_block(content: &str, block: &CodeBlock, new_content: &str) -> String {
	let Some(directive) = &block.directive else {
		return content.to_string();
	};

	let lines: Vec<&str> = content.split('\n').collect();
	let mut open_line = None;
	let mut close_line = None;

	let fence_prefix = format!("```{}", block.language);
	for (index, line) in lines.iter().enumerate() {
		if open_line.is_none() {
			if !line.starts_with(&fence_prefix) || !line.contains("snippet=") {
				continue;
			}
			let Some(candidate) = parse_directive(line) else {
				continue;
			};
			if candidate.file_path == directive.file_path
				&& candidate.selection == directive.selection
			{
				open_line = Some(index);
			}
		} else if line.trim() == "```" {
			close_line = Some(index);
			break;
		}
	}

	let (Some(open), Some(close)) = (open_line, close_line) else {
		return content.to_string();
	};

	let mut spliced: Vec<&str> = Vec::with_capacity(lines.len());
	spliced.extend(&lines[..=open]);
	spliced.extend(new_content.split('\n'));
	spliced.extend(&lines[close..]);
	spliced.join("\n")
}
