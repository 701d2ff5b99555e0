//! typenv CLI entry point.

use clap::Parser;

use typenv::cli::commands::execute;
use typenv::cli::output::output;
use typenv::cli::{handle_error, Cli};
use typenv::{EnvReader, LoggerImpl};

fn main() {
    let cli = Cli::parse();
    let reader = EnvReader::new();

    if let Err(err) = LoggerImpl::init_from_env(&reader, cli.log_level.as_deref()) {
        handle_error(err, cli.json);
    }

    let resolution = execute(&cli.command, &reader);
    output(&resolution, cli.json);
}
