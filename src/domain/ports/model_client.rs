//! Remote model port: one call, one reply or one transport error.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Output shape requested from the model.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseFormat {
    /// Unconstrained prose
    FreeForm,
    /// JSON validated by the service against `schema`
    Structured {
        /// OpenAPI-subset schema of the expected object
        schema: Value,
    },
}

impl ResponseFormat {
    /// Whether a schema is attached.
    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::Structured { .. })
    }
}

/// One outbound call to one model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCall {
    /// Model identifier, e.g. `gemini-flash-latest`
    pub model: String,

    /// Persona and language directive; never contains user text
    pub system_instruction: String,

    /// Module prefix followed by the user input
    pub prompt: String,

    /// Free-form or schema-bound output
    pub response_format: ResponseFormat,

    /// Attach the web-grounded search tool
    pub retrieval: bool,
}

/// Raw reply from the model service, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelReply {
    /// Concatenated output text of the first candidate
    pub text: Option<String>,

    /// Retrieval metadata of the first candidate
    pub grounding: Option<GroundingMetadata>,
}

/// Retrieval metadata attached to a reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroundingMetadata {
    /// Retrieved chunks in model order
    pub chunks: Vec<GroundingChunk>,
}

/// A retrieved chunk; only web chunks become citations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroundingChunk {
    /// Web source, when the chunk came from web search
    pub web: Option<WebSource>,
}

/// Web page referenced by a grounding chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebSource {
    /// Page URI
    pub uri: Option<String>,
    /// Page title
    pub title: Option<String>,
}

/// Failure reported by a [`ModelClient`].
///
/// Carries whatever the transport knows: an HTTP-like status when there is one,
/// and the provider's message (including provider status strings such as
/// `RESOURCE_EXHAUSTED`).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ModelCallError {
    /// Numeric status or provider code
    pub status: Option<u16>,
    /// Human-readable message
    pub message: String,
}

impl ModelCallError {
    /// Error with a status code.
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Error without a status code (transport failure, decode failure).
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

/// Port for the remote model-invocation capability.
///
/// Adapters perform exactly one request per call; retry and fallback are the
/// caller's concern. Implementations must be `Send + Sync` so a single client can
/// serve successive invocations.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Execute one generation call with the given credential.
    async fn generate(&self, credential: &str, call: &ModelCall)
        -> Result<ModelReply, ModelCallError>;
}
