//! Implementation of the `sentinel config` commands.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::ConfigCommands;
use crate::domain::models::Config;
use crate::infrastructure::logging::SecretScrubber;

/// Effective configuration with the credential redacted
#[derive(Debug, Serialize)]
pub struct ConfigShowOutput {
    /// Redacted configuration
    pub config: Config,
}

impl ConfigShowOutput {
    /// Copy `config`, masking the credential
    pub fn redacted(config: &Config) -> Self {
        let mut config = config.clone();
        config.api_key = config
            .default_credential()
            .map(SecretScrubber::redact_credential);
        Self { config }
    }
}

impl CommandOutput for ConfigShowOutput {
    fn to_human(&self) -> String {
        serde_yaml::to_string(&self.config).unwrap_or_default()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or_default()
    }
}

/// Dispatch a `config` subcommand.
pub fn execute(command: ConfigCommands, config: &Config, json_mode: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            output(&ConfigShowOutput::redacted(config), json_mode);
        }
    }
    Ok(())
}
