//! CLI command implementations
//!
//! The command function returns `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use crate::extract;
use crate::render;
use crate::splice;

use super::{CliError, CliResult, ExitCode};

/// Constants fragment regenerated in place within the lxml checkout.
pub const CONSTANTS_FILE: &str = "src/lxml/xmlerror.pxi";
/// Declaration fragment regenerated in place within the lxml checkout.
pub const DECLARATIONS_FILE: &str = "src/lxml/xmlerror.pxd";

/// Regenerate the default target files from a documentation checkout.
pub fn generate(doc_root: &Path) -> CliResult<ExitCode> {
    run_generation(
        doc_root,
        Path::new(CONSTANTS_FILE),
        Path::new(DECLARATIONS_FILE),
    )
}

/// Full generation pipeline: fetch and extract the documentation, render
/// both bodies, then splice both targets.
///
/// Rendering happens before any write, so a parse mismatch or a missing
/// expected enum aborts with both target files untouched.
pub fn run_generation(
    doc_root: &Path,
    constants_file: &Path,
    declarations_file: &Path,
) -> CliResult<ExitCode> {
    let html_file = extract::locate_documentation(doc_root)
        .map_err(|e| CliError::failure(format!("Error: {e}")))?;
    let html = fs::read_to_string(&html_file)
        .map_err(|e| CliError::failure(format!("Error reading {}: {e}", html_file.display())))?;

    let catalog = extract::parse_enums(&html)
        .map_err(|e| CliError::failure(format!("Error parsing {}: {e}", html_file.display())))?;
    let rendered = render::render_sources(&catalog)
        .map_err(|e| CliError::failure(format!("Error: {e}")))?;

    println!("Updating file {}", constants_file.display());
    splice::regenerate_file(constants_file, &rendered.constants).map_err(|e| {
        CliError::failure(format!("Error updating {}: {e}", constants_file.display()))
    })?;

    println!("Updating file {}", declarations_file.display());
    splice::regenerate_file(declarations_file, &rendered.declarations).map_err(|e| {
        CliError::failure(format!("Error updating {}: {e}", declarations_file.display()))
    })?;

    println!("Done");
    Ok(ExitCode::SUCCESS)
}
