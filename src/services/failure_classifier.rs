//! Rate-limit classification of transport failures.
//!
//! The only place that inspects a [`ModelCallError`] to decide whether another
//! model may be tried.

use crate::domain::ports::ModelCallError;

/// HTTP "too many requests".
pub const TOO_MANY_REQUESTS: u16 = 429;

/// Message fragments the model service uses for quota exhaustion.
pub const QUOTA_MARKERS: [&str; 4] = ["429", "Quota exceeded", "quota", "RESOURCE_EXHAUSTED"];

/// Outcome of classifying a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Quota or rate limit; another model may succeed
    RateLimited,
    /// Anything else; terminal
    Other,
}

/// Classify a failure reported by a model client.
pub fn classify(error: &ModelCallError) -> FailureClass {
    if error.status == Some(TOO_MANY_REQUESTS) {
        return FailureClass::RateLimited;
    }

    if QUOTA_MARKERS
        .iter()
        .any(|marker| error.message.contains(marker))
    {
        return FailureClass::RateLimited;
    }

    FailureClass::Other
}
