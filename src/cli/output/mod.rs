//! CLI output formatting module
//!
//! Every command produces a value that renders either for humans or as JSON.

pub mod progress;
pub mod render;
pub mod table;

pub use progress::{create_spinner, create_spinner_with_message};
pub use table::TableFormatter;

use serde::Serialize;

/// Result of a command, printable in both output modes.
pub trait CommandOutput: Serialize {
    /// Terminal rendering
    fn to_human(&self) -> String;

    /// Machine-readable rendering
    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print `result` to stdout in the requested mode.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}
