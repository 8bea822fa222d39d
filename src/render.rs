//! Rendering of the generated constant table and declaration fragment
//!
//! Pure functions from an [`EnumCatalog`] to the two generated bodies:
//!
//! - the `.pxd` declarations body: one `ctypedef enum` block per enum with
//!   aligned `NAME = VALUE  # description` lines
//! - the `.pxi` constants body: per enum, a packed table of `name=value`
//!   lines split across bounded string-literal chunks
//!
//! No I/O happens here; splicing the bodies into the target files is the
//! job of [`crate::splice`].

use thiserror::Error;

use crate::model::{ENUM_SPECS, EnumCatalog, EnumEntry};

/// Left-aligned column width for constant names in declaration lines.
const NAME_COLUMN: usize = 50;
/// Right-aligned column width for values in declaration lines.
const VALUE_COLUMN: usize = 7;
/// Chunk bound: MSVC refuses string literals past 2048 bytes, so a new
/// chunk is opened before the running length reaches this margin.
const MAX_CHUNK_LEN: usize = 2040;
/// Every packed chunk ends with a `\n\0` terminator.
const CHUNK_TERMINATOR_LEN: usize = 2;

/// Explanatory header emitted at the top of the constants body.
const CONSTANTS_PREAMBLE: [&str; 5] = [
    "# Constants are stored in tuples of strings, for which Pyrex generates very",
    "# efficient setup code.  To parse them, iterate over the tuples and parse each",
    "# line in each string independently.  Tuples of strings (instead of a plain",
    "# string) are required as some C-compilers of a certain well-known OS vendor",
    "# cannot handle strings that are a few thousand bytes in length.",
];

/// Errors that occur while rendering the generated bodies
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("enum '{0}' not found in the extracted documentation")]
    MissingEnum(&'static str),
}

/// The two rendered bodies, as lines without trailing newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSources {
    /// Body of the constants fragment (`.pxi`)
    pub constants: Vec<String>,
    /// Body of the declaration fragment (`.pxd`)
    pub declarations: Vec<String>,
}

/// Render both generated bodies from the extracted catalog.
///
/// Enums are emitted in the fixed [`ENUM_SPECS`] order; a missing enum fails
/// before any file is touched.
pub fn render_sources(catalog: &EnumCatalog) -> Result<RenderedSources, RenderError> {
    let mut constants: Vec<String> = Vec::new();
    let mut declarations: Vec<String> = Vec::new();

    declarations.push(r#"cdef extern from "libxml/xmlerror.h":"#.to_string());
    constants.extend(CONSTANTS_PREAMBLE.iter().map(|line| line.to_string()));
    constants.push(String::new());

    for spec in &ENUM_SPECS {
        let descriptor = catalog
            .get(spec.enum_name)
            .ok_or(RenderError::MissingEnum(spec.enum_name))?;

        declarations.push(format!("    ctypedef enum {}:", descriptor.name));
        constants.push(format!("cdef object {}", spec.var_name));
        constants.push(format!("{} = (\"\"\"\\", spec.var_name));

        let mut length = CHUNK_TERMINATOR_LEN;
        for entry in &descriptor.entries {
            declarations.push(format!("        {}", declaration_line(entry)));

            let line = packed_line(entry, spec.strip_prefix);
            if length + line.len() >= MAX_CHUNK_LEN {
                // Close the current chunk and open the next one
                constants.push("\"\"\",".to_string());
                constants.push("\"\"\"\\".to_string());
                length = CHUNK_TERMINATOR_LEN;
            }
            length += line.len() + CHUNK_TERMINATOR_LEN;
            constants.push(line);
        }

        declarations.push(String::new());
        constants.push("\"\"\",)".to_string());
        constants.push(String::new());
    }

    Ok(RenderedSources {
        constants,
        declarations,
    })
}

/// Aligned declaration line: `NAME = VALUE` with an optional description.
/// The constant name is never prefix-stripped here.
fn declaration_line(entry: &EnumEntry) -> String {
    match &entry.description {
        Some(description) => format!(
            "{name:<name_w$} = {value:>value_w$} # {description}",
            name = entry.name,
            value = entry.value,
            name_w = NAME_COLUMN,
            value_w = VALUE_COLUMN,
        ),
        None => format!(
            "{name:<name_w$} = {value:>value_w$}",
            name = entry.name,
            value = entry.value,
            name_w = NAME_COLUMN,
            value_w = VALUE_COLUMN,
        ),
    }
}

/// Compact `name=value` line with the configured prefix stripped, but only
/// when the remainder is non-empty (a name equal to the prefix stays whole).
fn packed_line(entry: &EnumEntry, prefix: &str) -> String {
    let name = match entry.name.strip_prefix(prefix) {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => entry.name.as_str(),
    };
    format!("{}={}", name, entry.value)
}
