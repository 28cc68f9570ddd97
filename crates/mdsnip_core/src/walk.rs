use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use globset::Glob;
use globset::GlobMatcher;
use globset::GlobSet;
use globset::GlobSetBuilder;

use crate::RuntimeConfig;
use crate::SnipError;
use crate::SnipResult;

/// Enumerate the markdown files one invocation operates on: walk the
/// working directory, match `markdown_glob` minus `exclude_glob` against
/// paths relative to it. Output is sorted for deterministic processing
/// order.
pub fn list_markdown_files(config: &RuntimeConfig) -> SnipResult<Vec<PathBuf>> {
	let include = Glob::new(&config.markdown_glob)
		.map_err(|e| {
			SnipError::GlobPattern {
				pattern: config.markdown_glob.clone(),
				reason: e.to_string(),
			}
		})?
		.compile_matcher();
	let exclude = build_glob_set(&config.exclude_glob);

	let mut files = Vec::new();
	let mut visited_dirs = HashSet::new();
	walk_dir(
		&config.working_dir,
		&config.working_dir,
		&include,
		&exclude,
		&mut files,
		&mut visited_dirs,
	)?;

	files.sort();
	Ok(files)
}

/// Build a `GlobSet` from pattern strings, skipping any that fail to parse.
pub fn build_glob_set(patterns: &[String]) -> GlobSet {
	let mut builder = GlobSetBuilder::new();
	for pattern in patterns {
		if let Ok(glob) = Glob::new(pattern) {
			builder.add(glob);
		}
	}
	builder.build().unwrap_or_else(|_| GlobSet::empty())
}

fn walk_dir(
	root: &Path,
	dir: &Path,
	include: &GlobMatcher,
	exclude: &GlobSet,
	files: &mut Vec<PathBuf>,
	visited_dirs: &mut HashSet<PathBuf>,
) -> SnipResult<()> {
	if !dir.is_dir() {
		return Ok(());
	}

	// Detect symlink cycles by tracking canonical paths.
	let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
	if !visited_dirs.insert(canonical) {
		return Ok(());
	}

	for entry in std::fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		// Skip hidden entries and common non-source directories.
		if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
			if name.starts_with('.') || name == "node_modules" || name == "target" {
				continue;
			}
		}

		let Ok(rel_path) = path.strip_prefix(root) else {
			continue;
		};
		if !exclude.is_empty() && exclude.is_match(rel_path) {
			continue;
		}

		if path.is_dir() {
			walk_dir(root, &path, include, exclude, files, visited_dirs)?;
		} else if include.is_match(rel_path) {
			files.push(path);
		}
	}

	Ok(())
}
