use reqwest::Url;

/// The line selection carried by a snippet directive's `#` fragment.
///
/// Parsed once from the fragment grammar; malformed fragments never produce
/// a selection — the whole token (fragment included) becomes the file path
/// instead. See [`parse_directive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSelection {
	/// No fragment: the whole file.
	Whole,
	/// `#L20-`: from `start` to the end of the file.
	From { start: usize },
	/// `#L5-L10` (inclusive) or `#L5` (start == end).
	Range { start: usize, end: usize },
}

impl LineSelection {
	pub fn start(&self) -> Option<usize> {
		match self {
			Self::Whole => None,
			Self::From { start } | Self::Range { start, .. } => Some(*start),
		}
	}

	pub fn end(&self) -> Option<usize> {
		match self {
			Self::Whole | Self::From { .. } => None,
			Self::Range { end, .. } => Some(*end),
		}
	}

	/// True when the directive specified any line bound.
	pub fn is_bounded(&self) -> bool {
		!matches!(self, Self::Whole)
	}
}

/// A parsed `snippet=` reference found in a fence's info string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetDirective {
	/// Local relative/absolute path, or a full `http(s)` URL.
	pub file_path: String,
	pub selection: LineSelection,
	/// True iff the reference token parses as an `http`/`https` URL.
	pub is_remote: bool,
}

impl SnippetDirective {
	/// Synthetic locator used in issue messages, e.g.
	/// `snippet://src/lib.rs#L5-L10`.
	pub fn locator(&self) -> String {
		match self.selection {
			LineSelection::Whole => format!("snippet://{}", self.file_path),
			LineSelection::From { start } => format!("snippet://{}#L{start}", self.file_path),
			LineSelection::Range { start, end } => {
				format!("snippet://{}#L{start}-L{end}", self.file_path)
			}
		}
	}
}

/// Parse the `snippet=<ref>` token out of a fence info string.
///
/// Returns `None` when no token is present (the block is untracked). The
/// reference is split on the *last* `#` so that filenames containing `#`
/// keep working; a malformed fragment falls back to treating the entire
/// token as a literal file path rather than failing the parse.
pub fn parse_directive(info: &str) -> Option<SnippetDirective> {
	let start = info.find("snippet=")? + "snippet=".len();
	let token = info[start..]
		.split(char::is_whitespace)
		.next()
		.unwrap_or_default();

	if token.is_empty() {
		return None;
	}

	Some(parse_reference(token))
}

/// Parse a bare reference token (everything after `snippet=`).
pub fn parse_reference(token: &str) -> SnippetDirective {
	let is_remote = is_remote_url(token);

	let Some(hash) = token.rfind('#') else {
		return SnippetDirective {
			file_path: token.to_string(),
			selection: LineSelection::Whole,
			is_remote,
		};
	};

	let file_path = &token[..hash];
	let fragment = &token[hash + 1..];

	match parse_fragment(fragment) {
		Some(selection) => SnippetDirective {
			file_path: file_path.to_string(),
			selection,
			is_remote,
		},
		// Not a line spec: the whole token, fragment included, is the path.
		None => SnippetDirective {
			file_path: token.to_string(),
			selection: LineSelection::Whole,
			is_remote,
		},
	}
}

/// True if the string parses as a URL with an `http` or `https` scheme.
pub fn is_remote_url(reference: &str) -> bool {
	Url::parse(reference)
		.map(|url| matches!(url.scheme(), "http" | "https"))
		.unwrap_or(false)
}

/// Parse a fragment such as `L5`, `5`, `L5-L10`, `L5-10`, or `L20-`.
///
/// Returns `None` for anything malformed: an empty leading numeric
/// component (`-5`, `L-5-L10`), more than one dash, or non-numeric parts.
/// A valid start with an invalid end recovers to an open-ended selection.
/// Line numbers are 1-based; a `0` bound counts as absent, so `#L0` and
/// `#L0-L5` select the whole file and `#L5-L0` is open-ended.
fn parse_fragment(fragment: &str) -> Option<LineSelection> {
	let spec = fragment.strip_prefix('L').unwrap_or(fragment);
	let parts: Vec<&str> = spec.split('-').collect();

	match parts.as_slice() {
		[single] => {
			let line: usize = parse_line_number(single)?;
			if line == 0 {
				return Some(LineSelection::Whole);
			}
			Some(LineSelection::Range {
				start: line,
				end: line,
			})
		}
		[start, end] => {
			if start.is_empty() {
				return None;
			}
			let start: usize = parse_line_number(start)?;
			if start == 0 {
				return Some(LineSelection::Whole);
			}

			if end.is_empty() {
				// Dash with no end line, e.g. `L20-`.
				return Some(LineSelection::From { start });
			}

			// The end may carry its own `L` prefix (`L5-L10`). A zero or
			// invalid end keeps the start and drops the end.
			match parse_line_number(end.strip_prefix('L').unwrap_or(end)) {
				Some(0) | None => Some(LineSelection::From { start }),
				Some(end) => Some(LineSelection::Range { start, end }),
			}
		}
		// More than one dash is malformed (`L-5-L10` and friends).
		_ => None,
	}
}

fn parse_line_number(text: &str) -> Option<usize> {
	if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	text.parse().ok()
}
