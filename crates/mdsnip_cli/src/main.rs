use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use mdsnip_cli::Commands;
use mdsnip_cli::MdsnipCli;
use mdsnip_cli::report::print_file_issues;
use mdsnip_cli::report::print_summary;
use mdsnip_core::AnyEmptyResult;
use mdsnip_core::CONFIG_FILE_NAME;
use mdsnip_core::ConfigOverrides;
use mdsnip_core::LanguageTable;
use mdsnip_core::RuntimeConfig;
use mdsnip_core::check_documents;
use mdsnip_core::config_exists;
use mdsnip_core::discover_untracked;
use mdsnip_core::extract_documents;
use mdsnip_core::has_errors;
use mdsnip_core::load_config;
use mdsnip_core::remove_directives;
use mdsnip_core::sync_documents;
use tracing_subscriber::EnvFilter;

fn main() {
	let args = MdsnipCli::parse();
	init_tracing(args.verbose);

	let result = match args.command {
		Some(Commands::Check) => run_check(&args),
		Some(Commands::Extract) => run_extract(&args),
		Some(Commands::Init { extract }) => run_init(&args, extract),
		Some(Commands::Eject { yes }) => run_eject(&args, yes),
		Some(Commands::Sync { dry_run }) => run_sync(&args, dry_run),
		// Bare `mdsnip` syncs.
		None => run_sync(&args, false),
	};

	if let Err(e) = result {
		eprintln!("error: {e}");
		process::exit(1);
	}
}

fn init_tracing(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("mdsnip_core=debug,mdsnip_cli=debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn resolve_root(args: &MdsnipCli) -> PathBuf {
	let root = args
		.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
	root.canonicalize().unwrap_or(root)
}

fn build_config(args: &MdsnipCli) -> Result<RuntimeConfig, mdsnip_core::SnipError> {
	let overrides = ConfigOverrides {
		snippet_root: args.snippet_root.clone(),
		markdown_glob: args.markdown_glob.clone(),
		exclude_glob: args.exclude_glob.clone(),
		include_extensions: args.include_extensions.clone(),
	};

	load_config(&resolve_root(args), args.config.as_deref(), &overrides)
}

fn run_sync(args: &MdsnipCli, dry_run: bool) -> AnyEmptyResult {
	let config = build_config(args)?;
	let result = sync_documents(&config, !dry_run);

	let (errors, warnings) = print_file_issues(&result.file_issues);
	print_summary(errors, warnings);

	for error in &result.errors {
		eprintln!("error: {error}");
	}

	if result.updated.is_empty() {
		println!("All code blocks are already in sync.");
	} else if dry_run {
		println!("Dry run: would update {} file(s):", result.updated.len());
		for path in &result.updated {
			println!("  {}", path.display());
		}
	} else {
		println!("Updated {} file(s).", result.updated.len());
		if args.verbose {
			for path in &result.updated {
				println!("  {}", path.display());
			}
		}
	}

	// Sync fails only on fatal errors; per-block issues are reported but do
	// not change the exit code.
	if !result.errors.is_empty() {
		process::exit(1);
	}

	Ok(())
}

fn run_check(args: &MdsnipCli) -> AnyEmptyResult {
	let config = build_config(args)?;
	let result = check_documents(&config);

	let (errors, warnings) = print_file_issues(&result.file_issues);
	print_summary(errors, warnings);

	for error in &result.errors {
		eprintln!("error: {error}");
	}

	let failed = !result.in_sync || has_errors(&result.file_issues) || !result.errors.is_empty();

	if failed {
		if !result.out_of_sync.is_empty() {
			eprintln!(
				"{} file(s) are out of sync. Run `mdsnip sync` to fix.",
				result.out_of_sync.len()
			);
		}
		process::exit(1);
	}

	// Getting-started hint: with no config file yet, point at the untracked
	// blocks extraction could pick up.
	if !config_exists(&resolve_root(args), args.config.as_deref()) {
		let discovered = discover_untracked(&config);
		if !discovered.is_empty() {
			for entry in &discovered {
				println!(
					"{}: {} code block(s) available ({})",
					entry.path.display(),
					entry.count,
					entry.languages.join(", ")
				);
			}
			println!("Run `mdsnip init --extract` to start tracking them.");
		}
	}

	println!("All code blocks are in sync.");
	Ok(())
}

fn run_extract(args: &MdsnipCli) -> AnyEmptyResult {
	let config = build_config(args)?;
	let result = extract_documents(&config, &LanguageTable::builtin());

	for error in &result.errors {
		eprintln!("error: {error}");
	}

	if result.snippets_created == 0 {
		println!("No untracked code blocks to extract.");
	} else {
		println!(
			"Extracted {} snippet(s) from {} file(s).",
			result.snippets_created,
			result.extracted.len()
		);
		if args.verbose {
			for path in &result.extracted {
				println!("  {}", path.display());
			}
		}
	}

	if !result.errors.is_empty() {
		process::exit(1);
	}

	Ok(())
}

fn run_init(args: &MdsnipCli, extract: bool) -> AnyEmptyResult {
	let root = resolve_root(args);
	let config_path = root.join(CONFIG_FILE_NAME);

	if config_exists(&root, args.config.as_deref()) {
		println!("Config file already exists: {}", config_path.display());
		return Ok(());
	}

	let sample_content = "snippet_root = \"./snippets\"\nmarkdown_glob = \"**/*.md\"\n";
	std::fs::write(&config_path, sample_content)?;
	std::fs::create_dir_all(root.join("snippets"))?;

	println!("Created config file: {}", config_path.display());
	println!();
	println!("Next steps:");
	println!("  1. Tag code blocks in your markdown files:");
	println!("     ```rust snippet=src/lib.rs#L1-L10");
	println!("  2. Run `mdsnip sync` to pull snippet content into the blocks");
	println!("  3. Run `mdsnip check` in CI to catch drift");

	if extract {
		return run_extract(args);
	}

	Ok(())
}

fn run_eject(args: &MdsnipCli, yes: bool) -> AnyEmptyResult {
	let root = resolve_root(args);
	let config = build_config(args)?;

	if !yes && !confirm("This will remove all snippet directives, the snippet directory, and the config file. Continue? [y/N] ")? {
		println!("Aborted.");
		return Ok(());
	}

	let result = remove_directives(&config);

	for error in &result.errors {
		eprintln!("error: {error}");
	}

	// Never delete the project root itself when snippet_root is `.`.
	let snippet_root = config.snippet_root_abs();
	let snippet_root_real = snippet_root.canonicalize().unwrap_or(snippet_root);
	if snippet_root_real != root && snippet_root_real.is_dir() {
		std::fs::remove_dir_all(&snippet_root_real)?;
		println!("Removed snippet directory: {}", snippet_root_real.display());
	}

	let config_path = match &args.config {
		Some(path) if path.is_absolute() => path.clone(),
		Some(path) => root.join(path),
		None => root.join(CONFIG_FILE_NAME),
	};
	if config_path.is_file() {
		std::fs::remove_file(&config_path)?;
		println!("Removed config file: {}", config_path.display());
	}

	println!(
		"Removed directives from {} file(s).",
		result.processed.len()
	);

	if !result.errors.is_empty() {
		process::exit(1);
	}

	Ok(())
}

fn confirm(prompt: &str) -> std::io::Result<bool> {
	print!("{prompt}");
	std::io::stdout().flush()?;

	let mut answer = String::new();
	std::io::stdin().read_line(&mut answer)?;
	Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
