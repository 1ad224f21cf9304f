//! Command-line front end.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands, ConfigCommands};

use console::style;

use crate::domain::{AnalysisError, RemediationHint};

/// Report a failed command and terminate with a non-zero status.
///
/// Analysis failures carry their remediation hint; everything else is
/// reported as a generic abort.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    let analysis = err.downcast_ref::<AnalysisError>();
    let kind = analysis.map_or("error", AnalysisError::kind);
    let hint = analysis.map_or(RemediationHint::Generic, AnalysisError::hint);

    if json_mode {
        let body = serde_json::json!({
            "error": {
                "kind": kind,
                "message": format!("{err:#}"),
                "hint": hint.message(),
            }
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    } else {
        eprintln!("{} {err:#}", style("OPERATION ABORTED:").red().bold());
        eprintln!("{}", style(hint.message()).dim());
    }

    std::process::exit(1)
}
