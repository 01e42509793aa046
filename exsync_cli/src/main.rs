use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use exsync_cli::Commands;
use exsync_cli::ExsyncCli;
use exsync_cli::OutputFormat;
use exsync_core::check_project;
use exsync_core::compute_updates;
use exsync_core::project::ProjectContext;
use exsync_core::project::scan_project_with_config;
use exsync_core::write_updates;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = ExsyncCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match args.command {
		Some(Commands::Update { dry_run }) => run_update(&args, dry_run),
		Some(Commands::Check { diff, format }) => run_check(&args, diff, format),
		Some(Commands::List) => run_list(&args),
		None => {
			eprintln!("No subcommand specified. Run `exsync --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<exsync_core::SyncError>() {
			Ok(sync_err) => {
				let report: miette::Report = (*sync_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "info" } else { "warn" };
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

fn resolve_root(args: &ExsyncCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn scan(args: &ExsyncCli) -> Result<ProjectContext, Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	tracing::debug!(root = %root.display(), "scanning project");
	let ctx = scan_project_with_config(&root)?;

	if args.verbose {
		println!(
			"Scanned {}: {} document(s), {} snippet(s) in {} director(ies)",
			ctx.config.scan_dir.display(),
			ctx.collection.documents.len(),
			ctx.collection.snippet_count(),
			ctx.collection.directories.len()
		);
	}

	for directory in ctx.directories_without_document() {
		eprintln!(
			"{} `{directory}` has snippet files but no {}",
			colored!("warning:", yellow),
			ctx.config.document_name
		);
	}

	Ok(ctx)
}

fn run_update(args: &ExsyncCli, dry_run: bool) -> Result<(), Box<dyn std::error::Error>> {
	let ctx = scan(args)?;
	let root = resolve_root(args);
	let updates = compute_updates(&ctx)?;
	let updated_count = updates.updated_count();

	if updated_count == 0 {
		println!("All documents are already up to date.");
		return Ok(());
	}

	if dry_run {
		println!("Dry run: would update {updated_count} document(s):");
		for document in updates.updated_documents() {
			let rel = make_relative(&document.path, &root);
			println!("  {rel}");
		}
	} else {
		write_updates(&updates)?;
		println!("Updated {updated_count} document(s).");

		if args.verbose {
			for document in updates.updated_documents() {
				let rel = make_relative(&document.path, &root);
				println!("  {rel}");
			}
		}
	}

	Ok(())
}

fn run_check(
	args: &ExsyncCli,
	show_diff: bool,
	format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
	let ctx = scan(args)?;
	let root = resolve_root(args);
	let result = check_project(&ctx)?;

	if result.is_ok() {
		match format {
			OutputFormat::Json => {
				let output = serde_json::json!({
					"ok": true,
					"stale": [],
				});
				println!("{output}");
			}
			OutputFormat::Text => {
				println!(
					"Check passed: all {} document(s) are up to date.",
					result.checked
				);
			}
		}
		return Ok(());
	}

	match format {
		OutputFormat::Json => {
			let stale_entries: Vec<serde_json::Value> = result
				.stale
				.iter()
				.map(|entry| {
					serde_json::json!({
						"file": make_relative(&entry.path, &root),
						"directory": entry.directory,
					})
				})
				.collect();
			let output = serde_json::json!({
				"ok": false,
				"stale": stale_entries,
			});
			println!("{output}");
		}
		OutputFormat::Text => {
			eprintln!("Check failed.");
			eprintln!();
			eprintln!("Stale documents:");
			for entry in &result.stale {
				let rel = make_relative(&entry.path, &root);
				eprintln!("  {rel}");

				if show_diff {
					print_diff(&entry.current_content, &entry.expected_content);
				}
			}

			eprintln!();
			eprintln!(
				"{} document(s) are out of date. Run `exsync update` to fix.",
				result.stale.len()
			);
		}
	}

	process::exit(1);
}

fn run_list(args: &ExsyncCli) -> Result<(), Box<dyn std::error::Error>> {
	let ctx = scan(args)?;
	let root = resolve_root(args);

	if ctx.collection.documents.is_empty() && ctx.collection.snippet_count() == 0 {
		println!(
			"No {} or *{} files found.",
			ctx.config.document_name, ctx.config.snippet_extension
		);
		return Ok(());
	}

	for (directory, snippets) in &ctx.collection.directories {
		let document = ctx.collection.documents.get(directory);
		if document.is_none() && snippets.is_empty() {
			continue;
		}

		println!("{}", colored!(directory, bold));
		match document {
			Some(document) => println!("  {}", make_relative(&document.path, &root)),
			None => println!("  (no {})", ctx.config.document_name),
		}
		for name in snippets.keys() {
			println!("  - {name}");
		}
	}

	Ok(())
}

fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
