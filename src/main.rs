//! mockdown binary entry point.

use clap::Parser;

use mockdown::cli::{Cli, commands};
use mockdown::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    if let Err(err) = commands::execute(&cli) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}
