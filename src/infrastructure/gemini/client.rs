//! HTTP client for the `generateContent` endpoint.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient, Response};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use crate::domain::models::GeminiConfig;
use crate::domain::ports::{ModelCall, ModelCallError, ModelClient, ModelReply};
use crate::infrastructure::logging::SecretScrubber;

/// Header carrying the credential; keeps it out of URLs and access logs.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// HTTP client for the generative language API
///
/// Performs exactly one request per [`ModelClient::generate`] call. Connection
/// pooling comes from the shared reqwest client; retry and model fallback belong
/// to the caller.
pub struct GeminiClient {
    http_client: ReqwestClient,
    base_url: String,
    scrubber: SecretScrubber,
}

impl GeminiClient {
    /// Create a new client
    ///
    /// # Example
    /// ```no_run
    /// use sentinel::domain::models::GeminiConfig;
    /// use sentinel::infrastructure::gemini::GeminiClient;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let client = GeminiClient::new(&GeminiConfig::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            "initializing model client"
        );

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = ReqwestClient::builder()
            .pool_max_idle_per_host(4)
            .timeout(Duration::from_secs(config.timeout_secs))
            .tcp_nodelay(true)
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            scrubber: SecretScrubber::new(),
        })
    }

    /// Endpoint for `model`
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }

    async fn handle_response(&self, response: Response) -> Result<ModelReply, ModelCallError> {
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(self.handle_error_response(response).await);
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ModelCallError::transport(format!("Failed to decode response: {e}")))?;

        if let Some(usage) = &body.usage_metadata {
            debug!(
                prompt_tokens = ?usage.prompt_token_count,
                output_tokens = ?usage.candidates_token_count,
                "token usage"
            );
        }
        if let Some(reason) = body.candidates.first().and_then(|c| c.finish_reason.as_deref()) {
            debug!(finish_reason = reason, "generation finished");
        }

        Ok(body.into())
    }

    /// Turn a non-success response into a [`ModelCallError`].
    ///
    /// The canonical provider status is folded into the message so the
    /// classifier sees markers such as `RESOURCE_EXHAUSTED`.
    async fn handle_error_response(&self, response: Response) -> ModelCallError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());
        match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => {
                let code = envelope.error.code.unwrap_or_else(|| status.as_u16());
                let message = match envelope.error.status {
                    Some(provider_status) => format!("{provider_status}: {}", envelope.error.message),
                    None => envelope.error.message,
                };
                let message = self.scrubber.scrub_message(&message);
                warn!(status = code, "API error: {}", message);
                ModelCallError::with_status(code, message)
            }
            Err(_) => {
                let body = self.scrubber.scrub_message(&body);
                warn!("API error ({}): {}", status, body);
                ModelCallError::with_status(status.as_u16(), format!("HTTP {status}: {body}"))
            }
        }
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    #[instrument(skip(self, credential, call), fields(model = %call.model))]
    async fn generate(
        &self,
        credential: &str,
        call: &ModelCall,
    ) -> Result<ModelReply, ModelCallError> {
        let url = self.endpoint(&call.model);
        debug!("POST {}", url);

        let mut api_key = header::HeaderValue::from_str(credential)
            .map_err(|_| ModelCallError::transport("API key contains invalid header characters"))?;
        api_key.set_sensitive(true);

        let response = self
            .http_client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&GenerateContentRequest::from(call))
            .send()
            .await
            .map_err(|e| {
                let status = e.status().map(|s| s.as_u16());
                ModelCallError {
                    status,
                    message: self.scrubber.scrub_message(&e.to_string()),
                }
            })?;

        self.handle_response(response).await
    }
}
