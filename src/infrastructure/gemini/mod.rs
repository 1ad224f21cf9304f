//! Generative language API adapter
//!
//! Implements the `ModelClient` port over HTTP with reqwest.

pub mod client;
pub mod types;

pub use client::{GeminiClient, API_KEY_HEADER};
pub use types::{GenerateContentRequest, GenerateContentResponse};
