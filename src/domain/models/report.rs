//! Normalized analysis results returned to the presentation layer.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Finding severity, ordered `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Low impact
    Low,
    /// Medium impact
    Medium,
    /// High impact
    High,
    /// Critical impact
    Critical,
}

impl Severity {
    /// All levels, ascending.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single vulnerability reported by the audit module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Model-assigned identifier (may be empty)
    #[serde(default)]
    pub id: String,

    /// Short vulnerability name
    pub name: String,

    /// Severity level
    pub severity: Severity,

    /// What the vulnerability is
    pub description: String,

    /// What an attacker gains
    #[serde(default)]
    pub impact: String,

    /// Step-by-step manual fix
    pub remediation_steps: String,

    /// Patched code or configuration command
    pub remediation_code: String,

    /// Affected location, e.g. "12-18"
    #[serde(default, rename = "lineNumbers", skip_serializing_if = "Option::is_none")]
    pub affected_location: Option<String>,
}

/// Scored audit report produced by schema-bound modules.
///
/// Field names follow the wire schema so the same value serializes back to
/// exactly what the remote model was asked to emit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredResult {
    /// Security score, 0 (insecure) to 100 (no findings)
    #[serde(rename = "securityScore")]
    pub score: f64,

    /// Executive summary
    #[serde(rename = "executiveSummary")]
    pub executive_summary: String,

    /// Findings in the order the model reported them
    #[serde(rename = "vulnerabilities")]
    pub findings: Vec<Finding>,

    /// Full narrative report
    #[serde(rename = "detailedReportMarkdown")]
    pub report: String,
}

impl StructuredResult {
    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if !self.score.is_finite() || !(0.0..=100.0).contains(&self.score) {
            return Err(format!("securityScore {} outside [0, 100]", self.score));
        }
        for (index, finding) in self.findings.iter().enumerate() {
            let blank = [
                ("name", &finding.name),
                ("remediationSteps", &finding.remediation_steps),
                ("remediationCode", &finding.remediation_code),
            ]
            .into_iter()
            .find(|(_, value)| value.trim().is_empty());
            if let Some((field, _)) = blank {
                return Err(format!("vulnerabilities[{index}].{field} is blank"));
            }
        }
        Ok(())
    }

    /// Number of findings per severity; every level is present.
    pub fn severity_counts(&self) -> BTreeMap<Severity, usize> {
        let mut counts: BTreeMap<Severity, usize> =
            Severity::ALL.into_iter().map(|s| (s, 0)).collect();
        for finding in &self.findings {
            *counts.entry(finding.severity).or_default() += 1;
        }
        counts
    }

    /// Worst severity among the findings, if any.
    pub fn highest_severity(&self) -> Option<Severity> {
        self.findings.iter().map(|f| f.severity).max()
    }

    /// Presentation band for the score.
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// Coarse rating used to color the score gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 50 and below
    Critical,
    /// Above 50, up to 80
    Elevated,
    /// Above 80
    Secure,
}

impl ScoreBand {
    /// Classify a score.
    pub fn from_score(score: f64) -> Self {
        if score > 80.0 {
            Self::Secure
        } else if score > 50.0 {
            Self::Elevated
        } else {
            Self::Critical
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Critical => "CRITICAL",
            Self::Elevated => "ELEVATED",
            Self::Secure => "SECURE",
        };
        f.write_str(label)
    }
}

static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```([A-Za-z0-9_+-]+)?[ \t]*\r?\n(.*?)```").expect("fence pattern is valid")
});

/// Free-form narrative returned by non-schema modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextResult(pub String);

impl TextResult {
    /// Raw narrative.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split the narrative into prose and fenced code blocks, in order.
    ///
    /// A fence without a closing marker stays part of the prose.
    pub fn segments(&self) -> Vec<Segment> {
        let text = self.0.as_str();
        let mut segments = Vec::new();
        let mut cursor = 0;

        for caps in FENCE.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            if whole.start() > cursor {
                segments.push(Segment::Prose(text[cursor..whole.start()].to_string()));
            }
            segments.push(Segment::Code {
                lang: caps.get(1).map(|m| m.as_str().to_string()),
                code: caps.get(2).map_or_else(String::new, |m| m.as_str().to_string()),
            });
            cursor = whole.end();
        }

        if cursor < text.len() {
            segments.push(Segment::Prose(text[cursor..].to_string()));
        }

        segments
    }
}

/// Piece of a [`TextResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Ordinary narrative text
    Prose(String),
    /// Fenced code block
    Code {
        /// Language tag following the opening fence
        lang: Option<String>,
        /// Block body without the fences
        code: String,
    },
}

/// Source surfaced by web-grounded retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Page title, or a generic label when the model supplied none
    pub title: String,
    /// Web URI
    pub uri: String,
}

/// Result payload, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "result", rename_all = "lowercase")]
pub enum AnalysisResult {
    /// Schema-bound scored report
    Structured(StructuredResult),
    /// Free-form narrative
    Text(TextResult),
}

impl AnalysisResult {
    /// Discriminant as it appears in the `type` field.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Structured(_) => "structured",
            Self::Text(_) => "text",
        }
    }
}

/// The only value the orchestration core hands back on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// Structured or text result plus its `type` tag
    #[serde(flatten)]
    pub result: AnalysisResult,

    /// Retrieval citations in model order
    pub grounding_sources: Vec<Citation>,
}
