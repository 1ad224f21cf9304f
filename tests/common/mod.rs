//! Common test utilities for integration tests
//!
//! Provides shared fixtures, helpers, and test utilities used across
//! multiple integration test files.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use sentinel::domain::ports::{
    GroundingChunk, GroundingMetadata, ModelCall, ModelCallError, ModelClient, ModelReply,
    WebSource,
};

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Model client that answers from a script, one entry per call.
///
/// Once the script runs out, every further call gets `fallback`.
pub struct ScriptedClient {
    script: Mutex<VecDeque<Result<ModelReply, ModelCallError>>>,
    fallback: Result<ModelReply, ModelCallError>,
    calls: Mutex<Vec<(String, ModelCall)>>,
}

impl ScriptedClient {
    pub fn new(script: Vec<Result<ModelReply, ModelCallError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback: Err(ModelCallError::transport("script exhausted")),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call gets the same outcome.
    pub fn always(outcome: Result<ModelReply, ModelCallError>) -> Self {
        Self {
            fallback: outcome,
            ..Self::new(Vec::new())
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Model identifiers in call order.
    pub fn models(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, call)| call.model.clone())
            .collect()
    }

    /// Credentials in call order.
    pub fn credentials(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(credential, _)| credential.clone())
            .collect()
    }

    pub fn calls(&self) -> Vec<ModelCall> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, call)| call.clone())
            .collect()
    }
}

#[async_trait]
impl ModelClient for ScriptedClient {
    async fn generate(
        &self,
        credential: &str,
        call: &ModelCall,
    ) -> Result<ModelReply, ModelCallError> {
        self.calls
            .lock()
            .unwrap()
            .push((credential.to_string(), call.clone()));
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

pub fn text_reply(text: &str) -> Result<ModelReply, ModelCallError> {
    Ok(ModelReply {
        text: Some(text.to_string()),
        grounding: None,
    })
}

pub fn grounded_reply(text: &str, sources: &[(&str, Option<&str>)]) -> Result<ModelReply, ModelCallError> {
    Ok(ModelReply {
        text: Some(text.to_string()),
        grounding: Some(GroundingMetadata {
            chunks: sources
                .iter()
                .map(|(uri, title)| GroundingChunk {
                    web: Some(WebSource {
                        uri: Some((*uri).to_string()),
                        title: title.map(str::to_string),
                    }),
                })
                .collect(),
        }),
    })
}

pub fn rate_limited() -> Result<ModelReply, ModelCallError> {
    Err(ModelCallError::with_status(
        429,
        "RESOURCE_EXHAUSTED: Quota exceeded for metric generate_content_requests",
    ))
}

pub fn rejected(message: &str) -> Result<ModelReply, ModelCallError> {
    Err(ModelCallError::with_status(400, message))
}

pub fn chain(models: &[&str]) -> Vec<String> {
    models.iter().map(|m| (*m).to_string()).collect()
}

/// A schema-conforming audit report.
pub fn audit_json() -> String {
    serde_json::json!({
        "securityScore": 35,
        "executiveSummary": "The login handler builds SQL from user input.",
        "vulnerabilities": [
            {
                "id": "V-001",
                "name": "SQL Injection",
                "severity": "CRITICAL",
                "description": "User input concatenated into a query.",
                "impact": "Full database read.",
                "remediationSteps": "1. Use bound parameters.",
                "remediationCode": "db.query(\"SELECT * FROM users WHERE id = $1\", [id])",
                "lineNumbers": "12"
            },
            {
                "id": "V-002",
                "name": "Verbose errors",
                "severity": "LOW",
                "description": "Stack traces returned to clients.",
                "impact": "Information disclosure.",
                "remediationSteps": "1. Return generic errors.",
                "remediationCode": "app.use(errorHandler)"
            }
        ],
        "detailedReportMarkdown": "EXECUTIVE SUMMARY\n..."
    })
    .to_string()
}
