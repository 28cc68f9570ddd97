use std::path::PathBuf;

/// The category of a per-block problem found during reconciliation.
///
/// Issues never abort processing of the containing document; they accumulate
/// and are surfaced to the caller for reporting and exit-code decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
	/// The block's content differs from the resolved snippet (check mode).
	SyncNeeded,
	/// The directive points at a local file that does not exist. Advisory.
	FileMissing,
	/// The directive's path failed to resolve, or escaped the allowed roots.
	InvalidPath,
	/// Reading the snippet failed after it resolved successfully.
	LoadFailed,
	/// Fetching a remote snippet failed (scheme, status, or timeout).
	RemoteError,
}

impl IssueKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::SyncNeeded => "sync-needed",
			Self::FileMissing => "file-missing",
			Self::InvalidPath => "invalid-path",
			Self::LoadFailed => "load-failed",
			Self::RemoteError => "remote-error",
		}
	}

	/// Whether this issue should fail a `check` run. `file-missing` is
	/// advisory only.
	pub fn is_error(&self) -> bool {
		!matches!(self, Self::FileMissing)
	}
}

impl std::fmt::Display for IssueKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// One detected problem tied to a specific code block.
#[derive(Debug, Clone)]
pub struct Issue {
	pub kind: IssueKind,
	pub message: String,
	/// 1-indexed line of the block's opening fence.
	pub line: usize,
	/// 1-indexed column of the block's opening fence.
	pub column: usize,
	/// Stable rule identifier for machine consumption.
	pub rule_id: &'static str,
}

impl Issue {
	pub fn new(
		kind: IssueKind,
		message: impl Into<String>,
		line: usize,
		column: usize,
		rule_id: &'static str,
	) -> Self {
		Self {
			kind,
			message: message.into(),
			line,
			column,
			rule_id,
		}
	}
}

/// All issues found in a single markdown file.
#[derive(Debug, Clone)]
pub struct FileIssues {
	pub path: PathBuf,
	pub issues: Vec<Issue>,
}

/// Result of a `sync` run over all matched documents.
#[derive(Debug, Default)]
pub struct SyncResult {
	/// Documents that were rewritten (or would be, in dry-run mode).
	pub updated: Vec<PathBuf>,
	pub file_issues: Vec<FileIssues>,
	/// Failures that aborted processing of a whole document, plus at most
	/// one batch-fatal enumeration failure.
	pub errors: Vec<String>,
}

/// Result of a `check` run over all matched documents.
#[derive(Debug)]
pub struct CheckResult {
	pub in_sync: bool,
	pub out_of_sync: Vec<PathBuf>,
	pub file_issues: Vec<FileIssues>,
	pub errors: Vec<String>,
}

impl Default for CheckResult {
	fn default() -> Self {
		Self {
			in_sync: true,
			out_of_sync: Vec::new(),
			file_issues: Vec::new(),
			errors: Vec::new(),
		}
	}
}

/// Result of an `extract` run over all matched documents.
#[derive(Debug, Default)]
pub struct ExtractResult {
	/// Documents whose fence headers were annotated.
	pub extracted: Vec<PathBuf>,
	/// Number of snippet files written.
	pub snippets_created: usize,
	pub errors: Vec<String>,
}

/// True if any file carries at least one issue.
pub fn has_issues(file_issues: &[FileIssues]) -> bool {
	file_issues.iter().any(|file| !file.issues.is_empty())
}

/// True if any file carries an error-class issue (everything except
/// `file-missing`).
pub fn has_errors(file_issues: &[FileIssues]) -> bool {
	file_issues
		.iter()
		.any(|file| file.issues.iter().any(|issue| issue.kind.is_error()))
}
