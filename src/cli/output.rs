//! Output formatting utilities for the CLI.

use serde::Serialize;

/// A command result that can be printed for people or as JSON.
pub trait CommandOutput: Serialize {
    /// Plain text form.
    fn to_human(&self) -> String;
    /// JSON form, printed with `--json`.
    fn to_json(&self) -> serde_json::Value;
}

/// Print `result` to stdout in the requested format.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    println!("{}", render(result, json_mode));
}

/// The text [`output`] prints, without the trailing newline.
pub fn render<T: CommandOutput>(result: &T, json_mode: bool) -> String {
    if json_mode {
        serde_json::to_string(&result.to_json()).unwrap_or_default()
    } else {
        result.to_human()
    }
}
