//! workout CLI
//!
//! One-shot importer that loads the free-exercise-db catalog into the
//! exercise database.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::Parser;

use crate::cli_types::Cli;
pub(crate) use crate::error::CliError;
pub(crate) use crate::logger::log_blank;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = commands::import::run_import(&cli) {
        log::error!("{e}");
        log::logger().flush();
        std::process::exit(1);
    }

    log::logger().flush();
}
