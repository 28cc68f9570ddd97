use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::SnipError;
use crate::SnipResult;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "mdsnip.toml";

/// Default remote fetch timeout in milliseconds (30 seconds).
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 30_000;

/// Resolved settings for one invocation. Immutable for the duration of a
/// command; constructed by merging defaults → config file → CLI overrides,
/// in that precedence order (later wins).
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
	/// Base directory for resolving bare snippet paths. Relative values are
	/// resolved against [`working_dir`](Self::working_dir).
	pub snippet_root: PathBuf,
	/// Glob matched against paths relative to the working directory.
	pub markdown_glob: String,
	/// Globs excluded from the markdown walk.
	pub exclude_glob: Vec<String>,
	/// Extensions eligible for extraction, with leading dot (`.rs`).
	pub include_extensions: Vec<String>,
	/// Absolute directory the command runs in.
	pub working_dir: PathBuf,
	/// Timeout applied to each remote fetch.
	pub remote_timeout_ms: u64,
	/// Allow plain-http snippet URLs. Off by default.
	pub allow_insecure_http: bool,
}

impl RuntimeConfig {
	/// The snippet root as an absolute path.
	pub fn snippet_root_abs(&self) -> PathBuf {
		if self.snippet_root.is_absolute() {
			self.snippet_root.clone()
		} else {
			self.working_dir.join(&self.snippet_root)
		}
	}
}

/// CLI-provided overrides. List-valued fields are comma-separated strings,
/// split and trimmed during the merge.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
	pub snippet_root: Option<String>,
	pub markdown_glob: Option<String>,
	pub exclude_glob: Option<String>,
	pub include_extensions: Option<String>,
}

/// The on-disk `mdsnip.toml` shape. Every field is optional; missing fields
/// fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
	pub snippet_root: Option<PathBuf>,
	pub markdown_glob: Option<String>,
	pub exclude_glob: Option<Vec<String>>,
	pub include_extensions: Option<Vec<String>>,
	pub remote_timeout_ms: Option<u64>,
	pub allow_insecure_http: Option<bool>,
}

fn default_exclude_glob() -> Vec<String> {
	[
		"node_modules/**",
		".git/**",
		"dist/**",
		"build/**",
		"coverage/**",
		".next/**",
		".nuxt/**",
		"out/**",
		"target/**",
		"vendor/**",
	]
	.into_iter()
	.map(String::from)
	.collect()
}

fn default_include_extensions() -> Vec<String> {
	[
		".ts", ".js", ".py", ".java", ".cpp", ".c", ".go", ".rs", ".php", ".rb", ".swift", ".kt",
	]
	.into_iter()
	.map(String::from)
	.collect()
}

/// Whether a config file exists (at the explicit path, or the default
/// location inside `working_dir`).
pub fn config_exists(working_dir: &Path, config_path: Option<&Path>) -> bool {
	resolve_config_path(working_dir, config_path).is_file()
}

fn resolve_config_path(working_dir: &Path, config_path: Option<&Path>) -> PathBuf {
	match config_path {
		Some(path) if path.is_absolute() => path.to_path_buf(),
		Some(path) => working_dir.join(path),
		None => working_dir.join(CONFIG_FILE_NAME),
	}
}

/// Load the runtime configuration for one invocation.
///
/// A missing file at the default location silently falls back to defaults;
/// an explicitly passed `--config` path that does not exist is an error.
pub fn load_config(
	working_dir: &Path,
	config_path: Option<&Path>,
	overrides: &ConfigOverrides,
) -> SnipResult<RuntimeConfig> {
	let path = resolve_config_path(working_dir, config_path);

	let file = if path.is_file() {
		let content = std::fs::read_to_string(&path)?;
		toml::from_str::<ConfigFile>(&content).map_err(|e| {
			SnipError::ConfigParse {
				path: path.display().to_string(),
				reason: e.to_string(),
			}
		})?
	} else if config_path.is_some() {
		return Err(SnipError::ConfigMissing {
			path: path.display().to_string(),
		});
	} else {
		ConfigFile::default()
	};

	let mut config = RuntimeConfig {
		snippet_root: file.snippet_root.unwrap_or_else(|| PathBuf::from(".")),
		markdown_glob: file.markdown_glob.unwrap_or_else(|| "**/*.md".to_string()),
		exclude_glob: file.exclude_glob.unwrap_or_else(default_exclude_glob),
		include_extensions: file
			.include_extensions
			.unwrap_or_else(default_include_extensions),
		working_dir: working_dir.to_path_buf(),
		remote_timeout_ms: file.remote_timeout_ms.unwrap_or(DEFAULT_REMOTE_TIMEOUT_MS),
		allow_insecure_http: file.allow_insecure_http.unwrap_or(false),
	};

	if let Some(snippet_root) = &overrides.snippet_root {
		config.snippet_root = PathBuf::from(snippet_root);
	}
	if let Some(markdown_glob) = &overrides.markdown_glob {
		config.markdown_glob = markdown_glob.clone();
	}
	if let Some(exclude_glob) = &overrides.exclude_glob {
		config.exclude_glob = split_list(exclude_glob);
	}
	if let Some(include_extensions) = &overrides.include_extensions {
		config.include_extensions = split_list(include_extensions);
	}

	validate_config(&config)?;

	Ok(config)
}

fn split_list(value: &str) -> Vec<String> {
	value
		.split(',')
		.map(str::trim)
		.filter(|item| !item.is_empty())
		.map(String::from)
		.collect()
}

/// Reject configurations the engine cannot act on.
pub fn validate_config(config: &RuntimeConfig) -> SnipResult<()> {
	if config.snippet_root.as_os_str().is_empty() {
		return Err(SnipError::ConfigInvalid(
			"snippet_root must be a non-empty path".to_string(),
		));
	}
	if config.markdown_glob.is_empty() {
		return Err(SnipError::ConfigInvalid(
			"markdown_glob must be a non-empty pattern".to_string(),
		));
	}

	Ok(())
}
