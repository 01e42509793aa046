use std::path::PathBuf;

use crate::SyncError;
use crate::SyncResult;
use crate::project::ProjectContext;
use crate::synchronizer::synchronize;

/// A companion document before and after synchronization.
#[derive(Debug, Clone)]
pub struct DocumentUpdate {
	/// Directory key of the document, e.g. `examples/shapes`.
	pub directory: String,
	/// Path of the document on disk.
	pub path: PathBuf,
	/// Content currently on disk.
	pub current_content: String,
	/// Regenerated content.
	pub expected_content: String,
}

impl DocumentUpdate {
	/// Returns true if the regenerated content differs from what is on disk.
	pub fn is_changed(&self) -> bool {
		self.current_content != self.expected_content
	}
}

/// Result of computing the regenerated content of every document.
#[derive(Debug, Default)]
pub struct UpdateResult {
	/// Every processed document, ordered by directory key.
	pub documents: Vec<DocumentUpdate>,
}

impl UpdateResult {
	/// Documents whose content changes.
	pub fn updated_documents(&self) -> impl Iterator<Item = &DocumentUpdate> {
		self.documents.iter().filter(|doc| doc.is_changed())
	}

	/// Number of documents whose content changes.
	pub fn updated_count(&self) -> usize {
		self.updated_documents().count()
	}
}

/// Result of checking a project for stale documents.
#[derive(Debug)]
pub struct CheckResult {
	/// Documents that are out of date.
	pub stale: Vec<DocumentUpdate>,
	/// Number of documents that were checked.
	pub checked: usize,
}

impl CheckResult {
	/// Returns true if every document is up to date.
	pub fn is_ok(&self) -> bool {
		self.stale.is_empty()
	}
}

/// Compute the regenerated content for every companion document.
///
/// Nothing is written. The first structural error in any document aborts the
/// whole computation, so a failing project never gets partially rewritten by
/// [`write_updates`].
pub fn compute_updates(ctx: &ProjectContext) -> SyncResult<UpdateResult> {
	let options = ctx.config.document_options();
	let mut documents = Vec::with_capacity(ctx.collection.documents.len());

	for (directory, document) in &ctx.collection.documents {
		let snippets = ctx.collection.directories.get(directory);
		let expected_content = synchronize(&document.content, directory, snippets, &options)?;

		documents.push(DocumentUpdate {
			directory: directory.clone(),
			path: document.path.clone(),
			current_content: document.content.clone(),
			expected_content,
		});
	}

	Ok(UpdateResult { documents })
}

/// Check whether every companion document is up to date.
pub fn check_project(ctx: &ProjectContext) -> SyncResult<CheckResult> {
	let updates = compute_updates(ctx)?;
	let checked = updates.documents.len();
	let stale = updates
		.documents
		.into_iter()
		.filter(DocumentUpdate::is_changed)
		.collect();

	Ok(CheckResult { stale, checked })
}

/// Write the regenerated documents back to disk. Unchanged documents are left
/// alone.
pub fn write_updates(updates: &UpdateResult) -> SyncResult<()> {
	for document in updates.updated_documents() {
		tracing::info!(path = %document.path.display(), "writing document");
		std::fs::write(&document.path, &document.expected_content).map_err(|source| {
			SyncError::WriteFile {
				path: document.path.display().to_string(),
				source,
			}
		})?;
	}

	Ok(())
}
