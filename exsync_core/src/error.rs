use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum SyncError {
	#[error(transparent)]
	#[diagnostic(code(exsync::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to read `{path}`: {source}")]
	#[diagnostic(code(exsync::read_file))]
	ReadFile {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to write `{path}`: {source}")]
	#[diagnostic(code(exsync::write_file))]
	WriteFile {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(exsync::config_parse),
		help("check that exsync.toml is valid TOML with [reduce], [document] and/or [exclude] sections")
	)]
	ConfigParse(String),

	#[error("invalid exclude pattern `{pattern}`: {reason}")]
	#[diagnostic(code(exsync::exclude_pattern))]
	InvalidExcludePattern { pattern: String, reason: String },

	#[error("scan directory `{0}` does not exist or is not a directory")]
	#[diagnostic(
		code(exsync::not_a_directory),
		help("set `scan_dir` in exsync.toml or pass `--path` pointing at the project root")
	)]
	NotADirectory(String),

	#[error("file too large: `{path}` is {size} bytes (limit: {limit} bytes)")]
	#[diagnostic(
		code(exsync::file_too_large),
		help("increase `max_file_size` in exsync.toml or exclude this file")
	)]
	FileTooLarge { path: String, size: u64, limit: u64 },

	#[error("section {index} of the document in `{directory}` does not reference any `{extension}` file")]
	#[diagnostic(
		code(exsync::missing_snippet_reference),
		help("start the section heading with the snippet file name, e.g. `## example{extension}`")
	)]
	MissingSnippetReference {
		directory: String,
		index: usize,
		extension: String,
	},

	#[error("could not find snippet file `{filename}` in `{directory}`")]
	#[diagnostic(
		code(exsync::missing_snippet),
		help("add `{filename}` next to the document or fix the section heading")
	)]
	MissingSnippet { directory: String, filename: String },

	#[error("unable to find `{fence}` code block for `{filename}` in the document in `{directory}`")]
	#[diagnostic(
		code(exsync::missing_code_fence),
		help("add a `{fence}` code block to the section so it can be regenerated")
	)]
	MissingCodeFence {
		directory: String,
		filename: String,
		fence: String,
	},
}

pub type SyncResult<T> = Result<T, SyncError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
