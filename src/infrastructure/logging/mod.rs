//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or compact console output on stderr
//! - Optional daily-rotated JSON log files
//! - Secret scrubbing for messages that may echo credentials

pub mod logger;
pub mod secret_scrubbing;

pub use logger::{LogFormat, LoggerImpl};
pub use secret_scrubbing::SecretScrubber;
