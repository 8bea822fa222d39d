#![forbid(unsafe_code)]
//! libxml2 error-constant regenerator for the lxml sources
//!
//! `xmlerrgen` scrapes the libxml2 API reference page
//! `html/libxml-xmlerror.html` for its error-related `enum` declarations and
//! regenerates the marked region in two lxml source fragments:
//!
//! - `src/lxml/xmlerror.pxi` - the packed string-literal constants table
//! - `src/lxml/xmlerror.pxd` - the `ctypedef enum` declaration fragment
//!
//! Both targets carry paired `# ... BEGIN: GENERATED CONSTANTS ...` /
//! `# ... END: GENERATED CONSTANTS ...` marker lines; only the span between
//! them is rewritten, surrounding hand-written content is preserved.
//!
//! The pipeline is strictly linear: fetch, then extract, then render, then
//! splice. This is a manually run maintainer tool: the first failure aborts
//! the whole run with a diagnostic, and nothing is written once an error has
//! occurred.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (e.g. a static regex or
//!   CSS selector failing to compile), use `.expect("INVARIANT: reason")` with
//!   a clear explanation.

pub mod cli;
pub mod extract;
pub mod model;
pub mod render;
pub mod splice;

pub use extract::{locate_documentation, parse_enums};
pub use model::{ENUM_SPECS, EnumCatalog, EnumDescriptor, EnumEntry, EnumSpec};
pub use render::{RenderedSources, render_sources};
pub use splice::{SplitSource, regenerate_file, splice, split_source};
