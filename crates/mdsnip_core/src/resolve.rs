use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::RuntimeConfig;
use crate::SnipError;
use crate::SnipResult;

/// Resolve a local snippet reference to the one filesystem location it will
/// be read from. Never touches the network; remote references must not be
/// passed here.
///
/// Resolution order:
/// - `./` / `../` paths resolve relative to the directory containing the
///   markdown file that referenced them (an error if that is unknown);
/// - absolute paths pass through;
/// - bare relative paths try the working directory first and fall back to
///   the snippet root. This is a fallback chain, not a merge: when both
///   roots contain a same-named file, the working directory wins, so
///   user-authored files co-located with the docs take precedence over
///   machine-managed extracted snippets.
///
/// After symlink resolution the real path must lie within the working
/// directory or the snippet root; anything else is a path-traversal error
/// and is never read.
pub fn resolve_local_path(
	file_path: &str,
	config: &RuntimeConfig,
	markdown_file: Option<&Path>,
) -> SnipResult<PathBuf> {
	if file_path.starts_with("./") || file_path.starts_with("../") {
		let Some(document) = markdown_file else {
			return Err(SnipError::MissingDocumentContext {
				reference: file_path.to_string(),
			});
		};
		let document_dir = document.parent().unwrap_or_else(|| Path::new("."));
		return ensure_contained(document_dir.join(file_path), config, file_path);
	}

	let path = Path::new(file_path);
	if path.is_absolute() {
		return ensure_contained(path.to_path_buf(), config, file_path);
	}

	for root in candidate_roots(config) {
		let candidate = root.join(file_path);
		if candidate.exists() {
			return ensure_contained(candidate, config, file_path);
		}
	}

	// Nothing exists yet: report against the snippet root so the
	// missing-file message points at the managed location.
	ensure_contained(config.snippet_root_abs().join(file_path), config, file_path)
}

/// The ordered list of candidate roots a bare relative path is tried
/// against. Working directory first; the snippet root is the fallback.
fn candidate_roots(config: &RuntimeConfig) -> [PathBuf; 2] {
	[config.working_dir.clone(), config.snippet_root_abs()]
}

/// Enforce the containment invariant: the real (symlink-resolved) path must
/// stay inside one of the allowed roots.
fn ensure_contained(
	candidate: PathBuf,
	config: &RuntimeConfig,
	reference: &str,
) -> SnipResult<PathBuf> {
	let real = realpath_or_normalized(&candidate);
	let allowed = [
		realpath_or_normalized(&config.working_dir),
		realpath_or_normalized(&config.snippet_root_abs()),
	];

	if allowed.iter().any(|root| real.starts_with(root)) {
		Ok(candidate)
	} else {
		Err(SnipError::PathTraversal {
			reference: reference.to_string(),
		})
	}
}

/// Canonicalize when the path exists; otherwise fold `.` and `..`
/// components lexically so a not-yet-created path can still be checked.
fn realpath_or_normalized(path: &Path) -> PathBuf {
	if let Ok(real) = path.canonicalize() {
		return real;
	}

	let mut normalized = PathBuf::new();
	for component in path.components() {
		match component {
			Component::CurDir => {}
			Component::ParentDir => {
				normalized.pop();
			}
			other => normalized.push(other),
		}
	}
	normalized
}
