//! The `validate` command: check wireframe documents without emitting
//! markup.
//!
//! Each file is loaded and rendered into a discarding sink, so every check
//! the render path performs runs here too. Results are reported per file;
//! one failing file does not stop the others.

use std::io;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::document;
use crate::error::{MockdownError, Result};
use crate::render::Renderer;

/// Per-file validation outcome.
#[derive(Debug, Serialize)]
struct FileReport {
    /// Path as given on the command line.
    file: String,
    /// True when the document renders cleanly.
    valid: bool,
    /// Failure message, absent for valid files.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Runs the validate command.
///
/// # Errors
///
/// Returns [`MockdownError::Validation`] with the failure count when any
/// file fails, after all files have been reported.
pub fn execute(args: &ValidateArgs) -> Result<()> {
    let reports: Vec<FileReport> = args
        .files
        .iter()
        .map(|file| {
            let outcome = check(file);
            FileReport {
                file: file.display().to_string(),
                valid: outcome.is_ok(),
                error: outcome.err().map(|err| err.to_string()),
            }
        })
        .collect();

    match args.format {
        OutputFormat::Human => {
            for report in &reports {
                match &report.error {
                    None => println!("{}: OK", report.file),
                    Some(error) => println!("{}: {error}", report.file),
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    let failures = reports.iter().filter(|report| !report.valid).count();
    info!(
        files = reports.len(),
        failures, "validation finished"
    );

    if failures > 0 {
        return Err(MockdownError::Validation(failures));
    }
    Ok(())
}

/// Loads one file and renders it into a sink.
fn check(path: &Path) -> Result<()> {
    let doc = document::load_path(path)?;
    let mut renderer = Renderer::new(io::sink());
    renderer.render_document(&doc)
}
