//! Table output formatting for CLI commands
//!
//! Findings and the module catalog rendered with comfy-table, colored by
//! severity when the terminal supports it.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

use crate::domain::models::{Finding, Module, Severity};
use crate::services::ModulePolicy;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Create a new table formatter with custom settings
    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format audit findings, worst first
    pub fn format_findings(&self, findings: &[Finding]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Severity").add_attribute(Attribute::Bold),
            Cell::new("Vulnerability").add_attribute(Attribute::Bold),
            Cell::new("Location").add_attribute(Attribute::Bold),
            Cell::new("Impact").add_attribute(Attribute::Bold),
        ]);

        let mut sorted: Vec<&Finding> = findings.iter().collect();
        sorted.sort_by(|a, b| b.severity.cmp(&a.severity));

        for finding in sorted {
            let severity_cell = if self.use_colors {
                Cell::new(finding.severity.as_str()).fg(severity_color(finding.severity))
            } else {
                Cell::new(format!(
                    "{} {}",
                    severity_icon(finding.severity),
                    finding.severity
                ))
            };

            let id = if finding.id.is_empty() { "-" } else { finding.id.as_str() };

            table.add_row(vec![
                Cell::new(id),
                severity_cell,
                Cell::new(truncate_text(&finding.name, 40)),
                Cell::new(finding.affected_location.as_deref().unwrap_or("-")),
                Cell::new(truncate_text(&finding.impact, 60)),
            ]);
        }

        table.to_string()
    }

    /// Format the module catalog with each module's call policy
    pub fn format_modules(&self, modules: &[Module]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Title").add_attribute(Attribute::Bold),
            Cell::new("Output").add_attribute(Attribute::Bold),
            Cell::new("Web Search").add_attribute(Attribute::Bold),
        ]);

        for module in modules {
            let (output, retrieval) = match ModulePolicy::lookup(*module) {
                Some(policy) => (
                    if policy.requires_schema { "structured" } else { "text" },
                    if policy.use_retrieval { "yes" } else { "no" },
                ),
                None => ("static", "-"),
            };

            let id_cell = if self.use_colors && !module.is_analytical() {
                Cell::new(module.id()).fg(Color::DarkGrey)
            } else {
                Cell::new(module.id())
            };

            table.add_row(vec![
                id_cell,
                Cell::new(module.title()),
                Cell::new(output),
                Cell::new(retrieval),
            ]);
        }

        table.to_string()
    }

    /// Create a base table with common settings
    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if color output is supported
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    !matches!(env::var("TERM").as_deref(), Ok("dumb"))
}

/// Map severity to color
pub const fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => Color::Red,
        Severity::High => Color::DarkYellow,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Blue,
    }
}

/// Map severity to icon
const fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "✗",
        Severity::High => "!",
        Severity::Medium => "●",
        Severity::Low => "○",
    }
}

/// Truncate text to max length (in characters) with ellipsis
fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
