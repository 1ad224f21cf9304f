//! Inbound entry point used by the presentation layer.

use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::models::{AnalysisRequest, AnalysisResponse, Config};
use crate::domain::ports::ModelClient;
use crate::domain::AnalysisError;
use crate::infrastructure::gemini::GeminiClient;
use crate::services::invoker::ResilientInvoker;
use crate::services::prompt_builder::PromptBuilder;

/// Pick the credential for one call: a non-blank override wins, then the
/// configured default.
pub fn resolve_credential(
    override_key: Option<&str>,
    default_key: Option<&str>,
) -> Option<String> {
    [override_key, default_key]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|key| !key.is_empty())
        .map(str::to_string)
}

/// Builds the prompt plan, resolves the credential and runs the invoker.
///
/// Holds no per-request state; the same service can be invoked again
/// immediately after a failure.
pub struct AnalysisService {
    invoker: ResilientInvoker,
    default_credential: Option<String>,
}

impl AnalysisService {
    /// Service over an arbitrary model client.
    pub fn new(
        client: Arc<dyn ModelClient>,
        model_chain: Vec<String>,
        default_credential: Option<String>,
    ) -> Self {
        Self {
            invoker: ResilientInvoker::new(client, model_chain),
            default_credential,
        }
    }

    /// Service wired to the HTTP client described by `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = GeminiClient::new(&config.gemini)?;
        Ok(Self::new(
            Arc::new(client),
            config.gemini.model_chain.clone(),
            config.default_credential().map(str::to_string),
        ))
    }

    /// Models tried, in order.
    pub fn model_chain(&self) -> &[String] {
        self.invoker.model_chain()
    }

    /// Analyze `request`.
    ///
    /// The non-analytical `about` module is rejected before credentials are
    /// looked at; a missing credential is rejected before any network call.
    #[instrument(
        skip(self, request),
        fields(module = %request.module, request_id = %Uuid::new_v4())
    )]
    pub async fn analyze(
        &self,
        request: AnalysisRequest,
    ) -> Result<AnalysisResponse, AnalysisError> {
        let plan = PromptBuilder::build(request.module, request.language)?;

        let credential = resolve_credential(
            request.credential_override.as_deref(),
            self.default_credential.as_deref(),
        )
        .unwrap_or_default();

        let response = self
            .invoker
            .invoke(&request, &plan, &credential)
            .await?;

        info!(
            kind = response.result.kind(),
            citations = response.grounding_sources.len(),
            "analysis complete"
        );
        Ok(response)
    }
}
