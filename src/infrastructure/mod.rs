//! Infrastructure layer module
//!
//! - Generative language API client (`ModelClient` adapter)
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod gemini;
pub mod logging;
