/// One known fence language: canonical name, accepted aliases, and the
/// file extensions it maps to (first entry is the preferred one).
#[derive(Debug, Clone, Copy)]
struct LanguageEntry {
	name: &'static str,
	aliases: &'static [&'static str],
	extensions: &'static [&'static str],
}

/// Read-only lookup from fence language tags to candidate file extensions,
/// used only by the extraction flow. Constructed once at startup and passed
/// to the extraction engine explicitly.
#[derive(Debug, Clone)]
pub struct LanguageTable {
	entries: &'static [LanguageEntry],
}

static BUILTIN_LANGUAGES: &[LanguageEntry] = &[
	LanguageEntry {
		name: "typescript",
		aliases: &["ts"],
		extensions: &[".ts", ".tsx"],
	},
	LanguageEntry {
		name: "javascript",
		aliases: &["js", "node"],
		extensions: &[".js", ".mjs", ".cjs"],
	},
	LanguageEntry {
		name: "python",
		aliases: &["py"],
		extensions: &[".py"],
	},
	LanguageEntry {
		name: "rust",
		aliases: &["rs"],
		extensions: &[".rs"],
	},
	LanguageEntry {
		name: "go",
		aliases: &["golang"],
		extensions: &[".go"],
	},
	LanguageEntry {
		name: "java",
		aliases: &[],
		extensions: &[".java"],
	},
	LanguageEntry {
		name: "c",
		aliases: &[],
		extensions: &[".c", ".h"],
	},
	LanguageEntry {
		name: "cpp",
		aliases: &["c++", "cxx"],
		extensions: &[".cpp", ".cc", ".hpp"],
	},
	LanguageEntry {
		name: "csharp",
		aliases: &["cs", "c#"],
		extensions: &[".cs"],
	},
	LanguageEntry {
		name: "ruby",
		aliases: &["rb"],
		extensions: &[".rb"],
	},
	LanguageEntry {
		name: "php",
		aliases: &[],
		extensions: &[".php"],
	},
	LanguageEntry {
		name: "swift",
		aliases: &[],
		extensions: &[".swift"],
	},
	LanguageEntry {
		name: "kotlin",
		aliases: &["kt"],
		extensions: &[".kt", ".kts"],
	},
	LanguageEntry {
		name: "shell",
		aliases: &["sh", "bash", "zsh"],
		extensions: &[".sh"],
	},
	LanguageEntry {
		name: "html",
		aliases: &[],
		extensions: &[".html"],
	},
	LanguageEntry {
		name: "css",
		aliases: &[],
		extensions: &[".css"],
	},
	LanguageEntry {
		name: "json",
		aliases: &[],
		extensions: &[".json"],
	},
	LanguageEntry {
		name: "yaml",
		aliases: &["yml"],
		extensions: &[".yaml", ".yml"],
	},
	LanguageEntry {
		name: "toml",
		aliases: &[],
		extensions: &[".toml"],
	},
	LanguageEntry {
		name: "sql",
		aliases: &[],
		extensions: &[".sql"],
	},
];

impl LanguageTable {
	/// The built-in table covering the common fenced languages.
	pub fn builtin() -> Self {
		Self {
			entries: BUILTIN_LANGUAGES,
		}
	}

	/// Map a fence language tag (case-insensitive, name or alias) to the
	/// extension extraction should use: the first configured extension the
	/// language supports, else the language's first declared extension.
	/// Unknown languages map to `None`.
	pub fn extension_for(&self, language: &str, configured: &[String]) -> Option<String> {
		let normalized = language.to_lowercase();

		let entry = self.entries.iter().find(|entry| {
			entry.name == normalized
				|| entry
					.aliases
					.iter()
					.any(|alias| *alias == normalized)
		})?;

		for configured_ext in configured {
			if entry
				.extensions
				.iter()
				.any(|ext| ext == configured_ext)
			{
				return Some(configured_ext.clone());
			}
		}

		entry.extensions.first().map(|ext| (*ext).to_string())
	}
}
