//! Domain models
//!
//! Request-scoped values flowing through the orchestration core.

pub mod config;
pub mod module;
pub mod report;
pub mod request;
pub mod schema;

pub use config::{Config, GeminiConfig, LoggingConfig};
pub use module::{Language, Module};
pub use report::{
    AnalysisResponse, AnalysisResult, Citation, Finding, ScoreBand, Segment, Severity,
    StructuredResult, TextResult,
};
pub use request::AnalysisRequest;
pub use schema::structured_result_schema;
