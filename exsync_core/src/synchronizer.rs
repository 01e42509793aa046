use std::sync::LazyLock;

use regex::Regex;

use crate::SyncError;
use crate::SyncResult;
use crate::collector::DocumentDirectory;
use crate::config::DocumentOptions;

/// Level-2 heading delimiter: a newline, `##` and any run of whitespace.
static HEADING: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\n##\s+").expect("valid heading regex"));

/// Prefix written back in front of every rebuilt section heading.
const HEADING_PREFIX: &str = "## ";

/// Split a document into sections on level-2 headings.
///
/// Section 0 is the preamble. Every other section starts right after its
/// `## ` prefix, so its first characters are the heading text.
pub fn split_sections(document: &str) -> Vec<&str> {
	HEADING.split(document).collect()
}

/// Build the "try it" line appended to every rebuilt section.
pub fn try_message(directory: &str, filename: &str, options: &DocumentOptions) -> String {
	format!(
		"* Try loading [{filename}]({}/{directory}/{filename}) now in the experimental {} editor!\n",
		options.link_base_url, options.tool_name
	)
}

/// Rewrite every section of `document` with the reduced snippet it names.
///
/// `directory` is the document's directory key (used in the generated links
/// and error messages) and `snippets` the reduced snippets collected for that
/// directory. `None` means the directory was never visited, which behaves like
/// an empty directory.
///
/// A footer left by a previous run is dropped first. The preamble is then
/// kept byte for byte. In every other section the text up to
/// and including the opening code fence line is kept, the rest is replaced by
/// the reduced snippet, a closing fence, a blank line and the "try it" link.
/// The footer is appended as a final section.
pub fn synchronize(
	document: &str,
	directory: &str,
	snippets: Option<&DocumentDirectory>,
	options: &DocumentOptions,
) -> SyncResult<String> {
	let sections = split_sections(strip_footer(document, &options.footer));
	tracing::info!(
		directory,
		snippets = snippets.map_or(0, |dir| dir.len()),
		sections = sections.len(),
		"processing document"
	);

	let mut parts: Vec<String> = Vec::with_capacity(sections.len() + 1);
	for (index, section) in sections.iter().enumerate() {
		if index == 0 {
			parts.push((*section).to_string());
			continue;
		}

		parts.push(rewrite_section(section, index, directory, snippets, options)?);
	}
	parts.push(options.footer.clone());

	Ok(parts.join("\n"))
}

/// Name of the snippet referenced by a section: everything from the start of
/// the section up to and including the first occurrence of `extension`.
pub fn section_filename<'a>(section: &'a str, extension: &str) -> Option<&'a str> {
	section
		.find(extension)
		.map(|index| &section[..index + extension.len()])
}

fn rewrite_section(
	section: &str,
	index: usize,
	directory: &str,
	snippets: Option<&DocumentDirectory>,
	options: &DocumentOptions,
) -> SyncResult<String> {
	let Some(filename) = section_filename(section, &options.snippet_extension) else {
		return Err(SyncError::MissingSnippetReference {
			directory: directory.to_string(),
			index,
			extension: options.snippet_extension.clone(),
		});
	};

	let Some(snippet) = snippets.and_then(|dir| dir.get(filename)) else {
		return Err(SyncError::MissingSnippet {
			directory: directory.to_string(),
			filename: filename.to_string(),
		});
	};

	let Some(fence_start) = section.find(&options.code_fence) else {
		return Err(SyncError::MissingCodeFence {
			directory: directory.to_string(),
			filename: filename.to_string(),
			fence: options.code_fence.clone(),
		});
	};

	tracing::debug!(directory, index, filename, "rewriting section");

	let fence_end = fence_start + options.code_fence.len();
	let mut rebuilt = String::with_capacity(section.len() + snippet.len());
	rebuilt.push_str(HEADING_PREFIX);
	match section[fence_end..].find('\n') {
		Some(newline) => rebuilt.push_str(&section[..=fence_end + newline]),
		None => {
			rebuilt.push_str(section);
			rebuilt.push('\n');
		}
	}
	rebuilt.push_str(snippet);
	rebuilt.push_str("```\n\n");
	rebuilt.push_str(&try_message(directory, filename, options));

	Ok(rebuilt)
}

/// Drop the footer appended by a previous run. The footer may hold its own
/// `## ` heading, which would otherwise be split off as a section.
fn strip_footer<'a>(document: &'a str, footer: &str) -> &'a str {
	if footer.is_empty() {
		return document;
	}

	document
		.strip_suffix(footer)
		.and_then(|rest| rest.strip_suffix('\n'))
		.unwrap_or(document)
}
