use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

pub mod report;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct MdsnipCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Path to the configuration file (defaults to `mdsnip.toml` in the
	/// project root).
	#[arg(long, global = true)]
	pub config: Option<PathBuf>,

	/// Base directory for resolving bare snippet paths.
	#[arg(long, global = true)]
	pub snippet_root: Option<String>,

	/// Glob matched against markdown files, relative to the project root.
	#[arg(long, global = true)]
	pub markdown_glob: Option<String>,

	/// Comma-separated globs excluded from the markdown walk.
	#[arg(long, global = true)]
	pub exclude_glob: Option<String>,

	/// Comma-separated file extensions eligible for extraction.
	#[arg(long, global = true)]
	pub include_extensions: Option<String>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Rewrite out-of-date code blocks from their snippet sources.
	Sync {
		/// Show what would change without writing files.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// Check that all code blocks match their snippet sources.
	Check,
	/// Pull untracked code blocks out into snippet files.
	Extract,
	/// Initialize mdsnip in a project by creating a config file.
	Init {
		/// Also extract untracked code blocks after initializing.
		#[arg(long, default_value_t = false)]
		extract: bool,
	},
	/// Remove all snippet directives, the snippet directory, and the config
	/// file.
	Eject {
		/// Skip the confirmation prompt.
		#[arg(long, short, default_value_t = false)]
		yes: bool,
	},
}
