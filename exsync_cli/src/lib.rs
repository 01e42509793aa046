use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Keep example READMEs in sync with the snippet files next to them.",
	long_about = "exsync walks an examples directory, minimizes the metadata header of every \
	              snippet file and rewrites each `## <snippet>` section of the README.md in the \
	              same directory with the minimized snippet and a link to try it out.\n\nQuick \
	              start:\n  exsync update  Rewrite all README.md files\n  exsync check   Verify \
	              everything is up to date\n  exsync list    Show documents and snippets per \
	              directory"
)]
pub struct ExsyncCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Rewrite every README.md from the snippet files next to it.
	///
	/// Walks the scan directory, reduces each snippet file to its whitelisted
	/// metadata fields and body, and regenerates the code block and "try it"
	/// link of every `## <snippet>` section. A license footer is appended to
	/// each document.
	///
	/// Any broken reference aborts the run before a single file is written.
	Update {
		/// Preview changes without writing files. Prints which documents
		/// would be modified.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// Check that every README.md is up to date.
	///
	/// Regenerates every document in memory and compares it with the file on
	/// disk. Exits with a non-zero status code if any document is stale.
	Check {
		/// Show a unified diff for each stale document.
		#[arg(long, default_value_t = false)]
		diff: bool,

		/// Output format for check results. Use `text` for human-readable
		/// output or `json` for programmatic consumption.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// List every scanned directory with its document and snippet files.
	List,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption. Each stale entry includes
	/// the document path and its directory key.
	Json,
}
