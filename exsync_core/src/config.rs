use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::SyncError;
use crate::SyncResult;

/// Default maximum file size in bytes (10 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["exsync.toml", ".exsync.toml", ".config/exsync.toml"];

pub const DEFAULT_SCAN_DIR: &str = "examples";
pub const DEFAULT_DOCUMENT_NAME: &str = "README.md";
pub const DEFAULT_SNIPPET_EXTENSION: &str = ".irmf";
pub const DEFAULT_CLOSING_MARKER: &str = "}*/";
pub const DEFAULT_FIELDS: [&str; 5] = ["irmf", "materials", "max", "min", "units"];
pub const DEFAULT_CODE_FENCE: &str = "```glsl";
pub const DEFAULT_LINK_BASE_URL: &str =
	"https://gmlewis.github.io/irmf-editor/?s=github.com/gmlewis/irmf/blob/master";
pub const DEFAULT_TOOL_NAME: &str = "IRMF";

/// License notice appended as the final section of every rewritten document.
pub const DEFAULT_FOOTER: &str = r#"----------------------------------------------------------------------

# License

Copyright 2019 Glenn M. Lewis. All Rights Reserved.

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
"#;

/// Configuration loaded from an `exsync.toml` file.
///
/// Every key is optional. A project without a config file behaves exactly as
/// if it had this one:
///
/// ```toml
/// scan_dir = "examples"
/// document_name = "README.md"
/// snippet_extension = ".irmf"
/// max_file_size = 10485760
///
/// [reduce]
/// fields = ["irmf", "materials", "max", "min", "units"]
/// closing_marker = "}*/"
///
/// [document]
/// code_fence = "```glsl"
/// link_base_url = "https://gmlewis.github.io/irmf-editor/?s=github.com/gmlewis/irmf/blob/master"
/// tool_name = "IRMF"
///
/// [exclude]
/// patterns = []
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
	/// Directory, relative to the project root, that is walked for documents
	/// and snippets.
	pub scan_dir: PathBuf,
	/// Exact file name of a companion document.
	pub document_name: String,
	/// Exact extension (including the leading dot) of a snippet file.
	pub snippet_extension: String,
	/// Maximum size in bytes of a document or snippet. Larger files abort
	/// the run.
	pub max_file_size: u64,
	pub reduce: ReduceOptions,
	pub document: DocumentOptions,
	pub exclude: ExcludeConfig,
}

impl Default for SyncConfig {
	fn default() -> Self {
		Self {
			scan_dir: PathBuf::from(DEFAULT_SCAN_DIR),
			document_name: DEFAULT_DOCUMENT_NAME.to_string(),
			snippet_extension: DEFAULT_SNIPPET_EXTENSION.to_string(),
			max_file_size: DEFAULT_MAX_FILE_SIZE,
			reduce: ReduceOptions::default(),
			document: DocumentOptions::default(),
			exclude: ExcludeConfig::default(),
		}
	}
}

/// Controls how a snippet's leading metadata block is minimized.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReduceOptions {
	/// Ordered whitelist of metadata fields to keep. The first field whose
	/// `"<name>": ` tag appears in a line wins.
	pub fields: Vec<String>,
	/// Line that ends the metadata block. Everything after it is copied
	/// verbatim.
	pub closing_marker: String,
}

impl Default for ReduceOptions {
	fn default() -> Self {
		Self {
			fields: DEFAULT_FIELDS.iter().map(ToString::to_string).collect(),
			closing_marker: DEFAULT_CLOSING_MARKER.to_string(),
		}
	}
}

/// Controls how document sections are rebuilt.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
	/// Extension used to find the snippet file name in a section. Always
	/// taken from [`SyncConfig::snippet_extension`], see
	/// [`SyncConfig::document_options`].
	#[serde(skip)]
	pub snippet_extension: String,
	/// Opening fence of the code block that is replaced in every section.
	pub code_fence: String,
	/// Base url of the generated "try it" link.
	pub link_base_url: String,
	/// Editor name shown in the generated "try it" link.
	pub tool_name: String,
	/// Footer appended after the last section.
	pub footer: String,
}

impl Default for DocumentOptions {
	fn default() -> Self {
		Self {
			snippet_extension: DEFAULT_SNIPPET_EXTENSION.to_string(),
			code_fence: DEFAULT_CODE_FENCE.to_string(),
			link_base_url: DEFAULT_LINK_BASE_URL.to_string(),
			tool_name: DEFAULT_TOOL_NAME.to_string(),
			footer: DEFAULT_FOOTER.to_string(),
		}
	}
}

/// Configuration for excluding files and directories from the walk.
///
/// Patterns follow gitignore syntax and are relative to the scan directory.
/// With no patterns every directory and file under the scan directory is
/// visited.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExcludeConfig {
	#[serde(default)]
	pub patterns: Vec<String>,
}

impl SyncConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> SyncResult<Option<SyncConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path).map_err(|source| {
			SyncError::ReadFile {
				path: config_path.display().to_string(),
				source,
			}
		})?;

		Self::from_toml(&content).map(Some)
	}

	/// Load the config discovered at `root`, falling back to the defaults.
	pub fn load_or_default(root: &Path) -> SyncResult<SyncConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	/// Parse a config from TOML source.
	pub fn from_toml(content: &str) -> SyncResult<SyncConfig> {
		toml::from_str(content).map_err(|e| SyncError::ConfigParse(e.to_string()))
	}

	/// Section rebuilding options with the snippet extension of this config.
	pub fn document_options(&self) -> DocumentOptions {
		DocumentOptions {
			snippet_extension: self.snippet_extension.clone(),
			..self.document.clone()
		}
	}

	/// Absolute directory walked for this project.
	pub fn scan_root(&self, root: &Path) -> PathBuf {
		root.join(&self.scan_dir)
	}
}
