//! Turns a raw [`ModelReply`] into an [`AnalysisResponse`].

use crate::domain::models::{AnalysisResponse, AnalysisResult, Citation, StructuredResult, TextResult};
use crate::domain::ports::{GroundingMetadata, ModelReply};
use crate::domain::AnalysisError;

/// Title used for web sources the model returned without one.
pub const FALLBACK_CITATION_TITLE: &str = "Intelligence Source";

/// Normalize a successful reply from `model`.
///
/// Empty output text is an error even when the call itself succeeded.
pub fn normalize(
    reply: ModelReply,
    model: &str,
    requires_schema: bool,
) -> Result<AnalysisResponse, AnalysisError> {
    let text = reply
        .text
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| AnalysisError::EmptyResponse {
            model: model.to_string(),
        })?;

    let result = if requires_schema {
        AnalysisResult::Structured(parse_structured(&text)?)
    } else {
        AnalysisResult::Text(TextResult(text))
    };

    Ok(AnalysisResponse {
        result,
        grounding_sources: extract_citations(reply.grounding.as_ref()),
    })
}

/// Strictly parse schema-bound output.
///
/// A single surrounding ```json fence is tolerated; nothing else is coerced.
pub fn parse_structured(text: &str) -> Result<StructuredResult, AnalysisError> {
    let body = strip_json_fence(text);

    let result: StructuredResult = serde_json::from_str(body)
        .map_err(|e| AnalysisError::MalformedStructuredResult(e.to_string()))?;
    result
        .validate()
        .map_err(AnalysisError::MalformedStructuredResult)?;

    Ok(result)
}

/// Web citations in model order; missing metadata yields none.
pub fn extract_citations(grounding: Option<&GroundingMetadata>) -> Vec<Citation> {
    let Some(grounding) = grounding else {
        return Vec::new();
    };

    grounding
        .chunks
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .filter_map(|web| {
            let uri = web.uri.as_deref().filter(|uri| !uri.is_empty())?;
            let title = web
                .title
                .as_deref()
                .filter(|title| !title.trim().is_empty())
                .unwrap_or(FALLBACK_CITATION_TITLE);
            Some(Citation {
                title: title.to_string(),
                uri: uri.to_string(),
            })
        })
        .collect()
}

fn strip_json_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening line.
    match inner.split_once('\n') {
        Some((info, body)) if !info.contains('{') => body.trim(),
        _ => inner.trim(),
    }
}
