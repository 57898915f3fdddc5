//! CLI argument definitions.
//!
//! All Clap derive structs for `mockdown` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Render YAML wireframe documents to static HTML mockups.
#[derive(Parser, Debug)]
#[command(name = "mockdown", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "MOCKDOWN_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

// ============================================================================
// Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a wireframe document to HTML.
    Render(RenderArgs),

    /// Check wireframe documents without writing any markup.
    Validate(ValidateArgs),
}

/// Arguments for `render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Wireframe input file; `-` or absent reads stdin.
    pub input: Option<PathBuf>,

    /// HTML output file; `-` or absent writes stdout.
    pub output: Option<PathBuf>,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Wireframe files to check.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_paths_defaults_to_stdio() {
        let cli = Cli::try_parse_from(["mockdown", "render"]).unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("Expected RenderArgs");
        };
        assert!(args.input.is_none());
        assert!(args.output.is_none());
    }

    #[test]
    fn test_render_with_paths() {
        let cli = Cli::try_parse_from(["mockdown", "render", "mock.yaml", "out.html"]).unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("Expected RenderArgs");
        };
        assert_eq!(args.input, Some(PathBuf::from("mock.yaml")));
        assert_eq!(args.output, Some(PathBuf::from("out.html")));
    }

    #[test]
    fn test_validate_requires_files() {
        let result = Cli::try_parse_from(["mockdown", "validate"]);
        assert!(result.is_err(), "Expected error for missing files");
    }

    #[test]
    fn test_validate_format_parses() {
        for format in ["human", "json"] {
            let cli = Cli::try_parse_from(["mockdown", "validate", "a.yaml", "--format", format]);
            assert!(cli.is_ok(), "Failed to parse format={format}");
        }
    }

    #[test]
    fn test_help_output() {
        let result = Cli::try_parse_from(["mockdown", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let result = Cli::try_parse_from(["mockdown", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_color_choices_parse() {
        for variant in ["auto", "always", "never"] {
            let cli = Cli::try_parse_from(["mockdown", "--color", variant, "render"]);
            assert!(cli.is_ok(), "Failed to parse color={variant}");
        }
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["mockdown", "-vvv", "render"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_quiet_flag() {
        let cli = Cli::try_parse_from(["mockdown", "--quiet", "render"]).unwrap();
        assert!(cli.quiet);
    }
}
