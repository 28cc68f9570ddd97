use crate::LineSelection;

/// Extract the selected lines from `content` and trim surrounding blank
/// lines. Pure; 1-based inclusive bounds; bounds beyond the end of the text
/// are clamped rather than erroring, and a start past the end yields the
/// empty string.
pub fn extract_lines(content: &str, selection: &LineSelection) -> String {
	let selected = match selection {
		LineSelection::Whole => return trim_blank_lines(content),
		LineSelection::From { start } => {
			let lines: Vec<&str> = content.split('\n').collect();
			let from = start.saturating_sub(1);
			if from >= lines.len() {
				String::new()
			} else {
				lines[from..].join("\n")
			}
		}
		LineSelection::Range { start, end } => {
			let lines: Vec<&str> = content.split('\n').collect();
			let from = start.saturating_sub(1);
			let to = (*end).min(lines.len());
			if from >= to {
				String::new()
			} else {
				lines[from..to].join("\n")
			}
		}
	};

	trim_blank_lines(&selected)
}

/// Remove leading and trailing whitespace-only lines. Text that is entirely
/// blank collapses to the empty string; text with no blank edges passes
/// through unchanged.
pub fn trim_blank_lines(content: &str) -> String {
	let lines: Vec<&str> = content.split('\n').collect();

	let Some(first) = lines.iter().position(|line| !line.trim().is_empty()) else {
		return String::new();
	};
	let last = lines
		.iter()
		.rposition(|line| !line.trim().is_empty())
		.unwrap_or(first);

	lines[first..=last].join("\n")
}
