//! Response schema sent with schema-bound requests.
//!
//! Mirrors [`StructuredResult`](super::StructuredResult) field for field, in the
//! OpenAPI subset the generative language API accepts.

use serde_json::{json, Value};

use super::report::Severity;

/// Required top-level keys of a structured result.
pub const REQUIRED_FIELDS: [&str; 4] = [
    "securityScore",
    "executiveSummary",
    "vulnerabilities",
    "detailedReportMarkdown",
];

/// Schema for the audit report.
pub fn structured_result_schema() -> Value {
    let severities: Vec<&str> = Severity::ALL.iter().map(|s| s.as_str()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "securityScore": {
                "type": "NUMBER",
                "description": "A security score from 0 to 100, where 100 is perfectly secure."
            },
            "executiveSummary": {
                "type": "STRING",
                "description": "A concise executive summary of the findings."
            },
            "detailedReportMarkdown": {
                "type": "STRING",
                "description": "The full detailed report. MUST include a Risk Table and Proof of Concept (PoC) steps for each vulnerability. Use CLEAN formatting."
            },
            "vulnerabilities": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "name": { "type": "STRING" },
                        "severity": { "type": "STRING", "enum": severities },
                        "description": { "type": "STRING" },
                        "impact": { "type": "STRING" },
                        "remediationSteps": {
                            "type": "STRING",
                            "description": "Detailed step-by-step instructions on how to fix the vulnerability manually."
                        },
                        "remediationCode": {
                            "type": "STRING",
                            "description": "The corrected/patched code snippet or configuration command."
                        },
                        "lineNumbers": {
                            "type": "STRING",
                            "description": "Affected line numbers if applicable."
                        }
                    },
                    "required": ["name", "severity", "description", "remediationCode", "remediationSteps"]
                }
            }
        },
        "required": REQUIRED_FIELDS
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_all_top_level_fields() {
        let schema = structured_result_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(required, REQUIRED_FIELDS);
    }

    #[test]
    fn test_schema_severity_enum_matches_levels() {
        let schema = structured_result_schema();
        let levels = &schema["properties"]["vulnerabilities"]["items"]["properties"]["severity"]["enum"];
        assert_eq!(levels, &json!(["LOW", "MEDIUM", "HIGH", "CRITICAL"]));
    }
}
