//! Domain layer for the Sentinel orchestration core
//!
//! Request/response models, the model-client port and the failure taxonomy.

pub mod error;
pub mod models;
pub mod ports;

pub use error::{AnalysisError, RemediationHint};
