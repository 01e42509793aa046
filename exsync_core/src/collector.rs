use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use derive_more::Deref;
use derive_more::DerefMut;
use ignore::gitignore::Gitignore;
use ignore::gitignore::GitignoreBuilder;

use crate::SyncError;
use crate::SyncResult;
use crate::config::SyncConfig;
use crate::reducer::reduce;

/// Reduced snippets found in one directory, keyed by base file name.
///
/// Every visited directory gets one, even when it holds no snippets, so a
/// section pointing at a missing snippet fails instead of being skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut)]
pub struct DocumentDirectory(BTreeMap<String, String>);

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DocumentDirectory {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(name, snippet)| (name.into(), snippet.into()))
				.collect(),
		)
	}
}

/// A companion document read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	/// Path of the document file on disk.
	pub path: PathBuf,
	/// Raw text with line endings normalized.
	pub content: String,
}

/// Everything gathered by one walk of the scan directory.
///
/// Both maps are keyed by the `/`-separated directory path relative to the
/// project root, e.g. `examples/shapes`.
#[derive(Debug, Clone, Default)]
pub struct Collection {
	pub documents: BTreeMap<String, Document>,
	pub directories: BTreeMap<String, DocumentDirectory>,
}

impl Collection {
	/// Total number of reduced snippets across all directories.
	pub fn snippet_count(&self) -> usize {
		self.directories.values().map(|dir| dir.len()).sum()
	}
}

/// Normalize CRLF line endings to LF.
pub fn normalize_line_endings(content: &str) -> String {
	if content.contains('\r') {
		content.replace("\r\n", "\n").replace('\r', "\n")
	} else {
		content.to_string()
	}
}

/// Turn a directory path into its collection key relative to `root`.
pub fn directory_key(root: &Path, dir: &Path) -> String {
	let relative = dir.strip_prefix(root).unwrap_or(dir);
	let key = relative
		.components()
		.map(|component| component.as_os_str().to_string_lossy())
		.collect::<Vec<_>>()
		.join("/");

	if key.is_empty() { ".".to_string() } else { key }
}

/// Walk the scan directory of `root` and gather its documents and reduced
/// snippets.
///
/// Any failure while reading a document or snippet aborts the whole walk.
pub fn collect(root: &Path, config: &SyncConfig) -> SyncResult<Collection> {
	let scan_root = config.scan_root(root);
	if !scan_root.is_dir() {
		return Err(SyncError::NotADirectory(scan_root.display().to_string()));
	}

	let exclude = build_exclude_matcher(&scan_root, &config.exclude.patterns)?;
	let mut walker = Walker {
		root,
		config,
		exclude: &exclude,
		collection: Collection::default(),
	};
	walker.walk_dir(&scan_root)?;

	tracing::debug!(
		documents = walker.collection.documents.len(),
		directories = walker.collection.directories.len(),
		snippets = walker.collection.snippet_count(),
		"collected scan directory"
	);

	Ok(walker.collection)
}

/// Build a `Gitignore` matcher from the `[exclude]` patterns in the config.
fn build_exclude_matcher(scan_root: &Path, patterns: &[String]) -> SyncResult<Gitignore> {
	let mut builder = GitignoreBuilder::new(scan_root);
	for pattern in patterns {
		builder
			.add_line(None, pattern)
			.map_err(|e| SyncError::InvalidExcludePattern {
				pattern: pattern.clone(),
				reason: e.to_string(),
			})?;
	}
	builder.build().map_err(|e| SyncError::InvalidExcludePattern {
		pattern: patterns.join(", "),
		reason: e.to_string(),
	})
}

struct Walker<'a> {
	root: &'a Path,
	config: &'a SyncConfig,
	exclude: &'a Gitignore,
	collection: Collection,
}

impl Walker<'_> {
	/// Symlinked directories are not followed.
	fn walk_dir(&mut self, dir: &Path) -> SyncResult<()> {
		let key = directory_key(self.root, dir);
		self.collection
			.directories
			.entry(key.clone())
			.or_default();

		let mut entries = std::fs::read_dir(dir)?
			.map(|entry| entry.and_then(|entry| Ok((entry.path(), entry.file_type()?))))
			.collect::<Result<Vec<_>, _>>()?;
		// Sort for deterministic ordering.
		entries.sort_by(|(a, _), (b, _)| a.cmp(b));

		for (path, file_type) in entries {
			if file_type.is_symlink() && path.is_dir() {
				tracing::debug!(path = %path.display(), "skipping symlinked directory");
				continue;
			}

			let is_dir = file_type.is_dir();
			if self.exclude.matched(&path, is_dir).is_ignore() {
				continue;
			}

			if is_dir {
				self.walk_dir(&path)?;
				continue;
			}

			let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
				tracing::warn!(path = %path.display(), "skipping file with a non UTF-8 name");
				continue;
			};

			if name == self.config.document_name {
				let content = self.read_file(&path)?;
				tracing::debug!(path = %path.display(), "found document");
				self.collection
					.documents
					.insert(key.clone(), Document { path, content });
			} else if name.ends_with(&self.config.snippet_extension) {
				let content = self.read_file(&path)?;
				tracing::debug!(path = %path.display(), "found snippet");
				let reduced = reduce(&content, &self.config.reduce);
				self.collection
					.directories
					.entry(key.clone())
					.or_default()
					.insert(name.to_string(), reduced);
			}
		}

		Ok(())
	}

	fn read_file(&self, path: &Path) -> SyncResult<String> {
		let read_error = |source| {
			SyncError::ReadFile {
				path: path.display().to_string(),
				source,
			}
		};

		let size = std::fs::metadata(path).map_err(read_error)?.len();
		if size > self.config.max_file_size {
			return Err(SyncError::FileTooLarge {
				path: path.display().to_string(),
				size,
				limit: self.config.max_file_size,
			});
		}

		let raw = std::fs::read_to_string(path).map_err(read_error)?;
		Ok(normalize_line_endings(&raw))
	}
}
