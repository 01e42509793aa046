use std::path::Path;

use crate::AnyEmptyResult;

/// A snippet whose header carries one non-whitelisted field.
pub fn shape_snippet() -> &'static str {
	"/*{\n\"irmf\": \"1.0\"\n\"color\": \"red\"\n\"materials\": [\"PLA\"]\n}*/\nvoid main(){}\n"
}

/// The reduction of [`shape_snippet`] with the default whitelist.
pub fn reduced_shape_snippet() -> &'static str {
	"/*{\n  irmf: \"1.0\"\n  materials: [\"PLA\"]\n}*/\nvoid main(){}\n"
}

/// A realistic snippet header with trailing commas and nested values.
pub fn sphere_snippet() -> &'static str {
	r#"/*{
  "author": "Glenn M. Lewis",
  "copyright": "Apache-2.0",
  "date": "2019-06-30",
  "irmf": "1.0",
  "materials": ["PLA"],
  "max": [5,5,5],
  "min": [-5,-5,-5],
  "notes": "Simple IRMF shader - Hello, Sphere!",
  "options": {},
  "title": "10mm diameter Sphere",
  "units": "mm",
  "version": "1.0"
}*/

void mainModel4(out vec4 materials, in vec3 xyz) {
  const float radius = 5.0; // "max": not a header line
  float r = length(xyz);
  materials[0] = r <= radius ? 1.0 : 0.0;
}
"#
}

/// A document with a preamble and a single stale section for `a.irmf`.
pub fn single_section_document() -> &'static str {
	"# Examples\n\nIntro.\n\n## a.irmf\nSome text\n```glsl\nOLD\n```\nOLD FOOTER"
}

/// The "try it" link generated for `a.irmf` in `examples/shapes` with the
/// default options.
pub fn shape_try_message() -> &'static str {
	"* Try loading [a.irmf](https://gmlewis.github.io/irmf-editor/?s=github.com/gmlewis/irmf/blob/master/examples/shapes/a.irmf) now in the experimental IRMF editor!\n"
}

/// Write `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> AnyEmptyResult {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(path, content)?;

	Ok(())
}
