use crate::config::ReduceOptions;

/// Where the reducer is within a snippet file.
///
/// The only transition is `Scanning` → `Copying`, taken on the line that is
/// exactly the closing marker. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
	/// Inside the leading metadata block. Lines are kept only when they
	/// carry a whitelisted field.
	#[default]
	Scanning,
	/// Past the closing marker. Lines are copied verbatim.
	Copying,
}

impl ScanState {
	/// Compute the next state after `line` has been seen in this state.
	#[must_use]
	pub fn next(self, line: &str, closing_marker: &str) -> Self {
		match self {
			Self::Scanning if line == closing_marker => Self::Copying,
			state => state,
		}
	}
}

/// Reformat `line` if it carries one of `fields`.
///
/// The first field whose `"<name>": ` tag appears anywhere in the line wins,
/// and the line becomes `  <name>: <rest of line after the tag>`.
pub fn reduce_field_line(line: &str, fields: &[String]) -> Option<String> {
	fields.iter().find_map(|field| {
		let tag = format!("\"{field}\": ");
		line.find(&tag)
			.map(|index| format!("  {field}: {}", &line[index + tag.len()..]))
	})
}

/// Minimize a snippet file's leading metadata block.
///
/// The first line is always kept verbatim. Until the closing marker is seen
/// only whitelisted field lines survive, reformatted by
/// [`reduce_field_line`]. The closing marker line and everything after it are
/// kept verbatim.
///
/// A snippet without a closing marker is filtered to the end of the file.
pub fn reduce(raw: &str, options: &ReduceOptions) -> String {
	let mut lines = raw.split('\n');
	let mut out: Vec<String> = Vec::new();

	if let Some(first) = lines.next() {
		out.push(first.to_string());
	}

	let mut state = ScanState::default();
	for line in lines {
		match state {
			ScanState::Copying => out.push(line.to_string()),
			ScanState::Scanning => {
				state = state.next(line, &options.closing_marker);
				if state == ScanState::Copying {
					out.push(line.to_string());
				} else if let Some(reduced) = reduce_field_line(line, &options.fields) {
					out.push(reduced);
				}
			}
		}
	}

	out.join("\n")
}
