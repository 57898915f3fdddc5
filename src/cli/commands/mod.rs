//! Command dispatch.

pub mod render;
pub mod validate;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;

/// Executes the parsed command.
///
/// # Errors
///
/// Propagates the executed command's error.
pub fn execute(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Render(args) => render::execute(args),
        Commands::Validate(args) => validate::execute(args),
    }
}
