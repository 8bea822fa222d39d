//! Marker-region splicing for the regenerated target files
//!
//! Each target file carries a managed region delimited by sentinel comment
//! lines. The file is modeled as three parts: an untouched prefix (ending at
//! the BEGIN marker line, inclusive), the managed region (replaced wholesale
//! on every run), and an untouched suffix (starting at the END marker line,
//! inclusive). [`splice`] is a pure function over that model, so regenerating
//! a file is one read, splice, overwrite cycle with no partial-failure
//! recovery.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Sentinel carried by the comment line that opens the managed region.
pub const BEGIN_MARKER: &str = "BEGIN: GENERATED CONSTANTS";
/// Sentinel carried by the comment line that closes the managed region.
pub const END_MARKER: &str = "END: GENERATED CONSTANTS";

/// Name the attribution comment credits for the regenerated region.
const GENERATOR: &str = env!("CARGO_PKG_NAME");

/// Errors that occur while splicing a target file
#[derive(Debug, Error)]
pub enum SpliceError {
    #[error("marker line '{0}' not found in target file")]
    MarkerNotFound(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The untouched parts of a target file around its managed region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSource {
    /// Everything up to and including the BEGIN marker line
    pub prefix: String,
    /// Everything from the END marker line to the end of the file
    pub suffix: String,
}

/// A marker line begins with a comment leader and carries the sentinel text.
fn is_marker(line: &str, marker: &str) -> bool {
    line.starts_with('#') && line.contains(marker)
}

/// Split a target file into its untouched prefix and suffix, discarding the
/// managed region between the markers.
pub fn split_source(text: &str) -> Result<SplitSource, SpliceError> {
    let mut lines = text.split_inclusive('\n');

    let mut prefix = String::new();
    let mut found_begin = false;
    for line in lines.by_ref() {
        prefix.push_str(line);
        if is_marker(line, BEGIN_MARKER) {
            found_begin = true;
            break;
        }
    }
    if !found_begin {
        return Err(SpliceError::MarkerNotFound(BEGIN_MARKER));
    }

    let mut suffix = String::new();
    let mut found_end = false;
    for line in lines {
        if found_end {
            suffix.push_str(line);
        } else if is_marker(line, END_MARKER) {
            found_end = true;
            suffix.push_str(line);
        }
    }
    if !found_end {
        return Err(SpliceError::MarkerNotFound(END_MARKER));
    }

    Ok(SplitSource { prefix, suffix })
}

/// Attribution comment block written between the BEGIN marker and the
/// rendered body: a blank line, the credit line, a blank line.
pub fn attribution() -> String {
    format!("\n# This section is generated by the script '{GENERATOR}'.\n\n")
}

/// Replace a file's managed region with the rendered body.
///
/// Pure: `(old document, new body) -> new document`. Splicing the same body
/// into its own output yields byte-identical text, making regeneration
/// idempotent.
pub fn splice(text: &str, body: &[String]) -> Result<String, SpliceError> {
    let split = split_source(text)?;
    let body_text = body.join("\n");

    let mut updated =
        String::with_capacity(split.prefix.len() + body_text.len() + split.suffix.len() + 64);
    updated.push_str(&split.prefix);
    updated.push_str(&attribution());
    updated.push_str(&body_text);
    updated.push_str(&split.suffix);
    Ok(updated)
}

/// Re-read a target file, splice the rendered body into its managed region,
/// and overwrite it in place. Destructive: no backup is kept.
pub fn regenerate_file(path: &Path, body: &[String]) -> Result<(), SpliceError> {
    let current = fs::read_to_string(path)?;
    let updated = splice(&current, body)?;
    fs::write(path, updated)?;
    Ok(())
}
