//! Failure taxonomy of the orchestration core.

use thiserror::Error;

use super::models::Module;

/// Every way an analysis can fail.
///
/// Nothing here is recovered silently. Rate-limit failures are retried against the
/// next model internally and only surface as [`AnalysisError::CapacityExceeded`]
/// once the whole chain is exhausted.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalysisError {
    /// The module has no prompt policy (the static `about` view)
    #[error("module '{0}' is not supported for analysis")]
    UnsupportedModule(Module),

    /// Neither a per-call override nor a configured default credential was found
    #[error("API key missing: supply one per request or set SENTINEL_API_KEY / GEMINI_API_KEY")]
    MissingCredential,

    /// Every model in the chain answered with a rate-limit failure
    #[error("SYSTEM OVERLOAD: all {attempts} models are at maximum capacity; wait about 60 seconds and retry")]
    CapacityExceeded {
        /// Number of models attempted
        attempts: usize,
    },

    /// A non-rate-limit failure from the model service
    #[error("upstream failure{}: {message}", model.as_deref().map(|m| format!(" on {m}")).unwrap_or_default())]
    UpstreamFailure {
        /// Model that produced the failure, when one was attempted
        model: Option<String>,
        /// Provider message (secrets scrubbed)
        message: String,
    },

    /// The call succeeded but carried no output text
    #[error("model {model} returned an empty response")]
    EmptyResponse {
        /// Model that answered
        model: String,
    },

    /// Schema-bound output did not match the structured result shape
    #[error("malformed structured result: {0}")]
    MalformedStructuredResult(String),
}

/// What the presentation layer should suggest next to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemediationHint {
    /// Transient capacity problem
    WaitAndRetry,
    /// Credential or module selection is wrong
    CheckConfiguration,
    /// Anything else
    Generic,
}

impl RemediationHint {
    /// Short user-facing text.
    pub const fn message(self) -> &'static str {
        match self {
            Self::WaitAndRetry => "Wait a moment and try again.",
            Self::CheckConfiguration => "Check your API key and module selection.",
            Self::Generic => "The operation could not be completed.",
        }
    }
}

impl AnalysisError {
    /// Suggested follow-up for this failure.
    pub const fn hint(&self) -> RemediationHint {
        match self {
            Self::CapacityExceeded { .. } => RemediationHint::WaitAndRetry,
            Self::MissingCredential | Self::UnsupportedModule(_) => {
                RemediationHint::CheckConfiguration
            }
            Self::UpstreamFailure { .. }
            | Self::EmptyResponse { .. }
            | Self::MalformedStructuredResult(_) => RemediationHint::Generic,
        }
    }

    /// Stable machine-readable kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedModule(_) => "unsupported_module",
            Self::MissingCredential => "missing_credential",
            Self::CapacityExceeded { .. } => "capacity_exceeded",
            Self::UpstreamFailure { .. } => "upstream_failure",
            Self::EmptyResponse { .. } => "empty_response",
            Self::MalformedStructuredResult(_) => "malformed_structured_result",
        }
    }
}
