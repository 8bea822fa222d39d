//! Enum extraction from the libxml2 reference documentation
//!
//! The libxml2 HTML reference documents each error enum inside a
//! `<pre class="programlisting">` block: the leading text carries the
//! `Enum xmlErrorLevel {` header line, and every constant is wrapped in an
//! `<a name=...>` anchor whose tail text holds ` = <value> : <description>`.
//!
//! Extraction is fail-fast: once a block has been selected as an enum block,
//! any header or entry that does not match its expected pattern aborts the
//! run. Entries are accumulated in document order, which fixes the
//! declaration order of the generated output.

use std::path::{Path, PathBuf};

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::debug;

use crate::model::{EnumCatalog, EnumDescriptor, EnumEntry};

/// Location of the error-constant reference page beneath the doc root.
pub const DOC_RELATIVE_PATH: &str = "html/libxml-xmlerror.html";

/// Errors that occur while locating or parsing the documentation
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("documentation file not found: {}", .0.display())]
    MissingDocumentation(PathBuf),

    #[error("enum block has an unrecognized header line: {0:?}")]
    MalformedHeader(String),

    #[error("entry '{name}' has an unrecognized value line: {tail:?}")]
    MalformedEntry { name: String, tail: String },
}

/// Resolve the documentation root to the error-constant reference page,
/// failing if the file does not exist. No parsing happens here.
pub fn locate_documentation(doc_root: &Path) -> Result<PathBuf, ExtractError> {
    let path = doc_root.join(DOC_RELATIVE_PATH);
    if !path.is_file() {
        return Err(ExtractError::MissingDocumentation(path));
    }
    Ok(path)
}

/// Parse the reference page and extract every documented enum.
///
/// A `programlisting` block qualifies as an enum block when its leading text
/// contains the literal token `Enum` and it holds at least one named anchor.
/// Qualifying blocks must then parse completely or the whole run fails.
pub fn parse_enums(html: &str) -> Result<EnumCatalog, ExtractError> {
    let block_selector =
        Selector::parse("pre.programlisting").expect("INVARIANT: static selector is valid");
    let anchor_selector =
        Selector::parse("a[name]").expect("INVARIANT: static selector is valid");
    let header_pattern =
        Regex::new(r"(?i)^\s*enum\s+(\w+)\s*\{").expect("INVARIANT: static pattern is valid");
    let entry_pattern = Regex::new(r"^\s*=\s+([0-9]+)\s*(?::\s*(.*))?")
        .expect("INVARIANT: static pattern is valid");

    let document = Html::parse_document(html);
    let mut catalog = EnumCatalog::new();

    for block in document.select(&block_selector) {
        // Leading text of the block is the `enum <name> {` header line
        let Some(leading) = block.text().next() else {
            continue;
        };
        if !leading.contains("Enum") {
            continue;
        }
        let mut anchors = block.select(&anchor_selector).peekable();
        if anchors.peek().is_none() {
            continue;
        }

        let header = header_pattern
            .captures(leading)
            .ok_or_else(|| ExtractError::MalformedHeader(first_line(leading)))?;
        let enum_name = header[1].to_string();
        println!("Found enum {enum_name}");

        let mut entries = Vec::new();
        for anchor in anchors {
            let name: String = anchor.text().collect();
            let tail = anchor_tail(anchor).unwrap_or_default();
            let captures =
                entry_pattern
                    .captures(&tail)
                    .ok_or_else(|| ExtractError::MalformedEntry {
                        name: name.clone(),
                        tail: first_line(&tail),
                    })?;
            let value: u32 = captures[1]
                .parse()
                .map_err(|_| ExtractError::MalformedEntry {
                    name: name.clone(),
                    tail: first_line(&tail),
                })?;
            let description = captures.get(2).map(|m| m.as_str().to_string());
            entries.push(EnumEntry::new(name, value, description));
        }

        debug!(enum_name = %enum_name, entries = entries.len(), "extracted enum block");
        catalog.insert(EnumDescriptor {
            name: enum_name,
            entries,
        });
    }

    debug!(enums = catalog.len(), "extraction complete");
    Ok(catalog)
}

/// The text node immediately following an anchor element (its tail), holding
/// the ` = <value> : <description>` fragment for that constant.
fn anchor_tail(anchor: ElementRef<'_>) -> Option<String> {
    let node = anchor.next_sibling()?;
    node.value().as_text().map(|text| text.to_string())
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or("").to_string()
}
