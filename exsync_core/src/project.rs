use std::path::Path;
use std::path::PathBuf;

use crate::SyncResult;
use crate::collector::Collection;
use crate::collector::collect;
use crate::config::SyncConfig;

/// A scanned project together with the configuration it was scanned with.
///
/// This is the main entry point returned by [`scan_project_with_config`] and
/// consumed by [`check_project`](crate::check_project) and
/// [`compute_updates`](crate::compute_updates).
#[derive(Debug, Clone)]
pub struct ProjectContext {
	/// The project root the config was discovered in.
	pub root: PathBuf,
	/// Configuration in effect for this scan.
	pub config: SyncConfig,
	/// Documents and reduced snippets found under the scan directory.
	pub collection: Collection,
}

impl ProjectContext {
	/// Directory keys that have snippets but no companion document.
	pub fn directories_without_document(&self) -> Vec<&str> {
		self.collection
			.directories
			.iter()
			.filter(|(key, dir)| !dir.is_empty() && !self.collection.documents.contains_key(*key))
			.map(|(key, _)| key.as_str())
			.collect()
	}
}

/// Scan a project with an explicit configuration.
pub fn scan_project(root: &Path, config: SyncConfig) -> SyncResult<ProjectContext> {
	let collection = collect(root, &config)?;

	Ok(ProjectContext {
		root: root.to_path_buf(),
		config,
		collection,
	})
}

/// Scan a project with config. Loads the discovered project config (or the
/// defaults) and walks the scan directory.
pub fn scan_project_with_config(root: &Path) -> SyncResult<ProjectContext> {
	let config = SyncConfig::load_or_default(root)?;
	scan_project(root, config)
}
