//! `exsync_core` is the core library for [exsync](https://github.com/ifiokjr/exsync). It keeps the `README.md` files of an examples tree in sync with the snippet files stored next to them: each `## <snippet>` section of a README gets a freshly regenerated code block holding a minimized copy of the snippet, followed by a "try it" link.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Examples directory
//!   → Collector (walks the tree, reads README.md and *.irmf files per directory)
//!   → Reducer (keeps only whitelisted metadata fields of each snippet header)
//!   → Synchronizer (splits each README on `## ` headings and rebuilds every section)
//!   → Engine (compares regenerated documents with disk, writes the changed ones)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from `exsync.toml`: sentinel names, the field whitelist, fence, link and footer text.
//! - [`collector`]: Directory walking. Builds the per-directory document and reduced snippet maps.
//! - [`reducer`]: The two-state snippet header minimizer.
//! - [`synchronizer`]: Section splitting and rewriting of a single document.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use exsync_core::project::scan_project_with_config;
//! use exsync_core::{check_project, compute_updates, write_updates};
//! use std::path::Path;
//!
//! let ctx = scan_project_with_config(Path::new(".")).unwrap();
//!
//! // Check for stale documents
//! let result = check_project(&ctx).unwrap();
//! if !result.is_ok() {
//!     eprintln!("{} stale document(s) found", result.stale.len());
//! }
//!
//! // Rewrite every document
//! let updates = compute_updates(&ctx).unwrap();
//! write_updates(&updates).unwrap();
//! ```

pub use collector::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use project::*;
pub use reducer::*;
pub use synchronizer::*;

pub mod collector;
pub mod config;
mod engine;
#[allow(unused_assignments)]
mod error;
pub mod project;
pub mod reducer;
pub mod synchronizer;

#[cfg(test)]
mod __fixtures;
