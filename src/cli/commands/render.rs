//! The `render` command: wireframe YAML in, HTML mockup out.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde_yaml::Value;
use tracing::info;

use crate::cli::args::RenderArgs;
use crate::document;
use crate::error::Result;
use crate::render::Renderer;

/// Runs the render command.
///
/// Input and output default to stdin and stdout; `-` selects them
/// explicitly.
///
/// # Errors
///
/// Returns an error on unreadable input, malformed YAML, a field argument
/// violation, or a write failure.
pub fn execute(args: &RenderArgs) -> Result<()> {
    let document = match args.input.as_deref().filter(|path| !is_stdio(path)) {
        Some(path) => document::load_path(path)?,
        None => document::from_reader(io::stdin().lock())?,
    };

    let field_count = document.as_sequence().map_or(0, Vec::len);

    match args.output.as_deref().filter(|path| !is_stdio(path)) {
        Some(path) => {
            let writer = BufWriter::new(File::create(path)?);
            render_to(&document, writer)?;
            info!(fields = field_count, output = %path.display(), "rendered document");
        }
        None => {
            render_to(&document, io::stdout().lock())?;
            info!(fields = field_count, "rendered document to stdout");
        }
    }

    Ok(())
}

fn render_to<W: Write>(document: &Value, writer: W) -> Result<()> {
    let mut renderer = Renderer::new(writer);
    renderer.render_document(document)?;
    renderer.into_inner().flush()?;
    Ok(())
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}
