//! Per-action analysis request.

use super::module::{Language, Module};

/// One user action: free text plus the capability and language to use.
///
/// Created per submission and dropped once the call resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// User-supplied text (code, question, scenario)
    pub input: String,

    /// Selected capability
    pub module: Module,

    /// Language for the generated prose
    pub language: Language,

    /// Caller-supplied credential that takes precedence over configuration
    pub credential_override: Option<String>,
}

impl AnalysisRequest {
    /// Request without a credential override.
    pub fn new(input: impl Into<String>, module: Module, language: Language) -> Self {
        Self {
            input: input.into(),
            module,
            language,
            credential_override: None,
        }
    }

    /// Attach a per-call credential.
    #[must_use]
    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential_override = Some(credential.into());
        self
    }
}

impl std::fmt::Display for AnalysisRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print input or credential.
        write!(
            f,
            "AnalysisRequest(module={}, language={}, input_len={})",
            self.module,
            self.language,
            self.input.len()
        )
    }
}
