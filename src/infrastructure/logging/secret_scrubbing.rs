use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// Google API keys: "AIza" + 35 URL-safe characters
static GOOGLE_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"AIza[0-9A-Za-z_\-]{20,}").expect("valid regex"));

// ?key=... / &key=... query parameters
static KEY_PARAM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([?&]key=)[^&\s]+").expect("valid regex"));

// `"x-goog-api-key": "..."`, `token=...` and similar; group 1 keeps the field name
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"((?i:api_key|apikey|x-goog-api-key|token|secret)["']?\s*[:=]\s*["']?)[a-zA-Z0-9\-_.]{20,}"#)
        .expect("valid regex")
});

static BEARER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Bearer\s+[a-zA-Z0-9-_\.]+").expect("valid regex"));

/// Redacts credentials from text before it is logged or shown to a user
#[derive(Clone, Copy, Default)]
pub struct SecretScrubber;

impl SecretScrubber {
    /// Create a new scrubber
    pub const fn new() -> Self {
        Self
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let mut scrubbed = GOOGLE_KEY_PATTERN
            .replace_all(message, "[API_KEY_REDACTED]")
            .to_string();
        scrubbed = KEY_PARAM_PATTERN
            .replace_all(&scrubbed, "${1}[REDACTED]")
            .to_string();
        scrubbed = BEARER_PATTERN
            .replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]")
            .to_string();
        scrubbed = TOKEN_PATTERN
            .replace_all(&scrubbed, "${1}[REDACTED]")
            .to_string();
        scrubbed
    }

    /// Display form of a credential: first four characters only
    pub fn redact_credential(credential: &str) -> String {
        if credential.chars().count() > 8 {
            let prefix: String = credential.chars().take(4).collect();
            format!("{prefix}...[REDACTED]")
        } else {
            "[REDACTED]".to_string()
        }
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}
