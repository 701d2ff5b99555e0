//! Command-line interface for resolving a single environment variable.

pub mod commands;
pub mod output;

use chrono::Duration;
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::domain::duration::parse_duration;

/// Resolve typed environment variables with default fallback
#[derive(Parser, Debug)]
#[command(name = "typenv", version, about, long_about = None)]
pub struct Cli {
    /// Print the result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error); overrides TYPENV_LOG_LEVEL
    #[arg(
        long,
        global = true,
        ignore_case = true,
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    pub log_level: Option<String>,

    /// Accessor to run
    #[command(subcommand)]
    pub command: Commands,
}

/// One subcommand per typed accessor
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Read a string variable
    String(StringArgs),
    /// Read a bool variable (true/t/1 or false/f/0)
    Bool(BoolArgs),
    /// Read a base-10 integer variable
    Int(IntArgs),
    /// Read a 64-bit float variable
    Float(FloatArgs),
    /// Read a duration variable such as 1h30m or 500ms
    Duration(DurationArgs),
}

/// Arguments for `typenv string`
#[derive(Args, Debug, Clone)]
pub struct StringArgs {
    /// Variable name
    pub key: String,

    /// Value used when the variable is unset or empty
    #[arg(long, default_value = "")]
    pub default: String,
}

/// Arguments for `typenv bool`
#[derive(Args, Debug, Clone)]
pub struct BoolArgs {
    /// Variable name
    pub key: String,

    /// Value used when the variable is unset, empty or malformed
    #[arg(long, default_value_t = false, action = ArgAction::Set)]
    pub default: bool,
}

/// Arguments for `typenv int`
#[derive(Args, Debug, Clone)]
pub struct IntArgs {
    /// Variable name
    pub key: String,

    /// Value used when the variable is unset, empty or malformed
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub default: i64,
}

/// Arguments for `typenv float`
#[derive(Args, Debug, Clone)]
pub struct FloatArgs {
    /// Variable name
    pub key: String,

    /// Value used when the variable is unset, empty or malformed
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub default: f64,
}

/// Arguments for `typenv duration`
#[derive(Args, Debug, Clone)]
pub struct DurationArgs {
    /// Variable name
    pub key: String,

    /// Value used when the variable is unset, empty or malformed
    #[arg(long, default_value = "0s", value_parser = parse_duration, allow_hyphen_values = true)]
    pub default: Duration,
}

/// Print an error in the requested format and exit with status 1
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{body}");
    } else {
        eprintln!("error: {err:#}");
    }
    std::process::exit(1)
}
