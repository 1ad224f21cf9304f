//! Service layer
//!
//! Orchestration of one analysis: prompt policy, model fallback, response
//! normalization.

pub mod analysis_service;
pub mod failure_classifier;
pub mod invoker;
pub mod prompt_builder;
pub mod response_normalizer;

pub use analysis_service::{resolve_credential, AnalysisService};
pub use failure_classifier::{classify, FailureClass};
pub use invoker::ResilientInvoker;
pub use prompt_builder::{ModulePolicy, PromptBuilder, PromptPlan, POLICIES};
pub use response_normalizer::{extract_citations, normalize, parse_structured};
