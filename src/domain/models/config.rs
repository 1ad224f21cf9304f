//! Configuration model merged by the loader from defaults, YAML and environment.

use serde::{Deserialize, Deserializer, Serialize};

use super::module::Language;

/// Main configuration structure for Sentinel
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Process-wide default credential for the model service.
    ///
    /// Only ever sourced from deployment configuration; there is no built-in value.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Default response language when the caller does not choose one.
    ///
    /// Unrecognized codes fall back to the default language.
    #[serde(default, deserialize_with = "lenient_language")]
    pub language: Language,

    /// Remote model service configuration
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            language: Language::default(),
            gemini: GeminiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn lenient_language<'de, D>(deserializer: D) -> Result<Language, D::Error>
where
    D: Deserializer<'de>,
{
    let code = String::deserialize(deserializer)?;
    Ok(Language::from_code_lossy(&code))
}

impl Config {
    /// Configured credential, treating blank values as absent.
    pub fn default_credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Remote model service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GeminiConfig {
    /// Base URL of the generative language API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request transport timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Models to try in order; the next one is used only after a rate-limit failure
    #[serde(default = "default_model_chain")]
    pub model_chain: Vec<String>,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    120
}

/// Default fallback chain: newest model first, most available last.
pub fn default_model_chain() -> Vec<String> {
    vec![
        "gemini-3-flash-preview".to_string(),
        "gemini-2.0-flash-exp".to_string(),
        "gemini-flash-latest".to_string(),
    ]
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            model_chain: default_model_chain(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling JSON log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_credential() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert!(config.default_credential().is_none());
    }

    #[test]
    fn test_blank_credential_is_absent() {
        let config = Config {
            api_key: Some("   ".to_string()),
            ..Config::default()
        };
        assert!(config.default_credential().is_none());
    }

    #[test]
    fn test_unknown_language_falls_back_to_default() {
        let config: Config = serde_json::from_str(r#"{"language": "fr"}"#).unwrap();
        assert_eq!(config.language, Language::Es);

        let config: Config = serde_json::from_str(r#"{"language": "EN"}"#).unwrap();
        assert_eq!(config.language, Language::En);
    }

    #[test]
    fn test_default_chain_order() {
        let chain = GeminiConfig::default().model_chain;
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[0], "gemini-3-flash-preview");
        assert_eq!(chain[2], "gemini-flash-latest");
    }
}
