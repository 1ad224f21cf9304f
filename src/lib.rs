//! Sentinel - request orchestration for model-backed security analysis
//!
//! Turns one user action (free text, a module, a language) into a single
//! normalized [`AnalysisResponse`]: a scored structured report or a narrative,
//! plus the web sources the model cited.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, the [`ModelClient`] port and the error taxonomy
//! - **Service Layer** (`services`): prompt policy, model fallback, normalization
//! - **Infrastructure Layer** (`infrastructure`): HTTP client, configuration, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use sentinel::{AnalysisRequest, AnalysisService, ConfigLoader, Language, Module};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let service = AnalysisService::from_config(&config)?;
//!
//!     let request = AnalysisRequest::new("How do I harden SSH?", Module::AdvisoryChat, Language::En);
//!     let response = service.analyze(request).await?;
//!     println!("{}", serde_json::to_string_pretty(&response)?);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    AnalysisRequest, AnalysisResponse, AnalysisResult, Citation, Config, Finding, Language,
    Module, Severity, StructuredResult, TextResult,
};
pub use domain::ports::{ModelCall, ModelCallError, ModelClient, ModelReply};
pub use domain::{AnalysisError, RemediationHint};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::gemini::GeminiClient;
pub use services::{AnalysisService, PromptBuilder, ResilientInvoker};
