//! Figment-based loader and validation for [`Config`].

use anyhow::{bail, Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;
use crate::infrastructure::logging::logger::parse_log_level;
use crate::infrastructure::logging::LogFormat;

/// Project-local configuration directory.
pub const CONFIG_DIR: &str = ".sentinel";

/// Reasons a merged configuration is rejected
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// No model to call
    #[error("Model chain cannot be empty")]
    EmptyModelChain,

    /// Chain entry at this index has no model id
    #[error("Model chain entry {0} is blank")]
    BlankModelId(usize),

    /// Zero-second transport timeout
    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    /// Missing API base URL
    #[error("Base URL cannot be empty")]
    EmptyBaseUrl,

    /// Unrecognized `logging.level`
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unrecognized `logging.format`
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Builds a [`Config`] from defaults, project YAML files and the environment
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the project configuration.
    ///
    /// Later sources override earlier ones:
    /// 1. Built-in defaults
    /// 2. .sentinel/config.yaml
    /// 3. .sentinel/local.yaml (optional developer overrides)
    /// 4. `GEMINI_API_KEY` (credential only)
    /// 5. Environment variables (SENTINEL_* prefix, `__` for nesting)
    pub fn load() -> Result<Config> {
        Self::load_from_dir(CONFIG_DIR)
    }

    /// Same as [`ConfigLoader::load`] with an explicit configuration directory.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Config> {
        let dir = dir.as_ref();
        let config: Config = Self::base()
            .merge(Yaml::file(dir.join("config.yaml")))
            .merge(Yaml::file(dir.join("local.yaml")))
            .merge(Self::credential_env())
            .merge(Env::prefixed("SENTINEL_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring the environment.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        if !path.as_ref().is_file() {
            bail!("Config file not found: {}", path.as_ref().display());
        }

        let config: Config = Self::base()
            .merge(Yaml::file(path.as_ref()))
            .merge(Self::credential_env())
            .merge(Env::prefixed("SENTINEL_").split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn base() -> Figment {
        Figment::new().merge(Serialized::defaults(Config::default()))
    }

    fn credential_env() -> Env {
        Env::raw()
            .only(&["GEMINI_API_KEY"])
            .map(|_| "api_key".into())
    }

    /// Reject configurations the invoker or logger cannot run with
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let gemini = &config.gemini;

        if gemini.model_chain.is_empty() {
            return Err(ConfigError::EmptyModelChain);
        }

        if let Some(index) = gemini.model_chain.iter().position(|m| m.trim().is_empty()) {
            return Err(ConfigError::BlankModelId(index));
        }

        if gemini.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(gemini.timeout_secs));
        }

        if gemini.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        if parse_log_level(&config.logging.level).is_err() {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        if LogFormat::parse(&config.logging.format).is_err() {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}
