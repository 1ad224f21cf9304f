//! Request and response types for the generative language `generateContent` API
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::ports::{
    GroundingChunk, GroundingMetadata, ModelCall, ModelReply, ResponseFormat, WebSource,
};

/// Body of a `generateContent` call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns; a single user turn here
    pub contents: Vec<Content>,

    /// System instruction (persona and language directive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,

    /// Output constraints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,

    /// Tools made available to the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
}

impl From<&ModelCall> for GenerateContentRequest {
    fn from(call: &ModelCall) -> Self {
        let generation_config = match &call.response_format {
            ResponseFormat::FreeForm => None,
            ResponseFormat::Structured { schema } => Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema.clone()),
            }),
        };

        Self {
            contents: vec![Content::user(call.prompt.clone())],
            system_instruction: Some(Content::system(call.system_instruction.clone())),
            generation_config,
            tools: call.retrieval.then(|| vec![Tool::google_search()]),
        }
    }
}

/// A turn made of parts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    /// "user" or "model"; omitted for system instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn user(text: String) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: Some(text) }],
        }
    }

    fn system(text: String) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: Some(text) }],
        }
    }
}

/// A content part; only text parts are produced or consumed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    /// Text payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// `application/json` for schema-bound output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,

    /// Expected output schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
}

/// Tool declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Web-grounded search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<GoogleSearch>,
}

impl Tool {
    /// The web search tool
    pub const fn google_search() -> Self {
        Self {
            google_search: Some(GoogleSearch {}),
        }
    }
}

/// Empty marker object for the search tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleSearch {}

/// Successful `generateContent` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidate completions; only the first is used
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Token accounting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any text parts
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let texts: Vec<&str> = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

impl From<GenerateContentResponse> for ModelReply {
    fn from(response: GenerateContentResponse) -> Self {
        let text = response.text();
        let grounding = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.grounding_metadata)
            .map(|metadata| GroundingMetadata {
                chunks: metadata
                    .grounding_chunks
                    .into_iter()
                    .map(|chunk| GroundingChunk {
                        web: chunk.web.map(|web| WebSource {
                            uri: web.uri,
                            title: web.title,
                        }),
                    })
                    .collect(),
            });

        Self { text, grounding }
    }
}

/// A candidate completion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<Content>,

    /// Why generation stopped (STOP, MAX_TOKENS, SAFETY, ...)
    #[serde(default)]
    pub finish_reason: Option<String>,

    /// Retrieval metadata when the search tool was used
    #[serde(default)]
    pub grounding_metadata: Option<WireGroundingMetadata>,
}

/// Grounding metadata as sent on the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireGroundingMetadata {
    /// Retrieved chunks
    #[serde(default)]
    pub grounding_chunks: Vec<WireGroundingChunk>,
}

/// One retrieved chunk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireGroundingChunk {
    /// Web source
    #[serde(default)]
    pub web: Option<WireWebSource>,
}

/// Web source of a chunk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireWebSource {
    /// Page URI
    #[serde(default)]
    pub uri: Option<String>,
    /// Page title
    #[serde(default)]
    pub title: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Prompt tokens
    #[serde(default)]
    pub prompt_token_count: Option<u32>,
    /// Generated tokens
    #[serde(default)]
    pub candidates_token_count: Option<u32>,
    /// Total tokens
    #[serde(default)]
    pub total_token_count: Option<u32>,
}

/// Error envelope returned with non-success HTTP statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    /// Error details
    pub error: ApiErrorBody,
}

/// Error details
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Numeric code (mirrors the HTTP status)
    #[serde(default)]
    pub code: Option<u16>,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Canonical status, e.g. RESOURCE_EXHAUSTED
    #[serde(default)]
    pub status: Option<String>,
}
