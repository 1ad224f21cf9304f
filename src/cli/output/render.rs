//! Human-readable analysis reports.

use chrono::{DateTime, Utc};
use console::{style, StyledObject};
use std::fmt::Display;

use super::table::TableFormatter;
use crate::domain::models::{
    AnalysisResponse, AnalysisResult, Citation, Module, ScoreBand, Segment, Severity,
    StructuredResult, TextResult,
};

const RULE: &str = "────────────────────────────────────────────────────────────";

/// Render a full response: header, body and sources.
pub fn render_response(
    module: Module,
    response: &AnalysisResponse,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    push_line(
        &mut out,
        format!(
            "{} // {}",
            style(module.title()).cyan().bold(),
            style(generated_at.format("%Y-%m-%d %H:%M:%S UTC")).dim()
        ),
    );
    push_line(&mut out, RULE);

    match &response.result {
        AnalysisResult::Structured(report) => render_structured(&mut out, report),
        AnalysisResult::Text(text) => render_text(&mut out, text),
    }

    render_citations(&mut out, &response.grounding_sources);
    out.trim_end().to_string()
}

fn push_line(out: &mut String, line: impl Display) {
    out.push_str(&line.to_string());
    out.push('\n');
}

fn band_style<D>(band: ScoreBand, value: D) -> StyledObject<D> {
    match band {
        ScoreBand::Critical => style(value).red().bold(),
        ScoreBand::Elevated => style(value).yellow().bold(),
        ScoreBand::Secure => style(value).green().bold(),
    }
}

fn render_structured(out: &mut String, report: &StructuredResult) {
    let band = report.band();
    push_line(
        out,
        format!(
            "SECURITY SCORE: {} [{}]",
            band_style(band, format!("{:.0}/100", report.score)),
            band_style(band, band)
        ),
    );

    let tally: Vec<String> = report
        .severity_counts()
        .iter()
        .rev()
        .map(|(severity, count)| format!("{severity}: {count}"))
        .collect();
    push_line(out, style(tally.join("  ")).dim());
    out.push('\n');

    push_line(out, style("EXECUTIVE SUMMARY").bold());
    push_line(out, report.executive_summary.trim());
    out.push('\n');

    if report.findings.is_empty() {
        push_line(out, style("No vulnerabilities reported.").green());
        out.push('\n');
    } else {
        push_line(out, style("VULNERABILITIES").bold());
        push_line(out, TableFormatter::new().format_findings(&report.findings));
        out.push('\n');

        push_line(out, style("REMEDIATION").bold());
        for finding in &report.findings {
            push_line(
                out,
                format!(
                    "[{}] {}",
                    severity_style(finding.severity),
                    style(&finding.name).bold()
                ),
            );
            push_line(out, finding.remediation_steps.trim());
            if !finding.remediation_code.trim().is_empty() {
                render_code(out, None, &finding.remediation_code);
            }
            out.push('\n');
        }
    }

    if !report.report.trim().is_empty() {
        push_line(out, style("DETAILED REPORT").bold());
        render_text(out, &TextResult(report.report.clone()));
    }
}

fn severity_style(severity: Severity) -> StyledObject<&'static str> {
    let label = severity.as_str();
    match severity {
        Severity::Critical => style(label).red(),
        Severity::High => style(label).yellow(),
        Severity::Medium => style(label).yellow().dim(),
        Severity::Low => style(label).blue(),
    }
}

fn render_text(out: &mut String, text: &TextResult) {
    for segment in text.segments() {
        match segment {
            Segment::Prose(prose) => out.push_str(&prose),
            Segment::Code { lang, code } => render_code(out, lang.as_deref(), &code),
        }
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
}

fn render_code(out: &mut String, lang: Option<&str>, code: &str) {
    let label = lang.unwrap_or("code");
    push_line(out, style(format!("┌─ {label}")).dim());
    for line in code.trim_end().lines() {
        push_line(out, format!("{} {}", style("│").dim(), style(line).cyan()));
    }
    push_line(out, style("└─").dim());
}

fn render_citations(out: &mut String, citations: &[Citation]) {
    if citations.is_empty() {
        return;
    }
    out.push('\n');
    push_line(out, style("INTELLIGENCE SOURCES").bold());
    for (index, citation) in citations.iter().enumerate() {
        push_line(out, format!("[{}] {}", index + 1, citation.title));
        push_line(out, format!("    {}", style(&citation.uri).underlined()));
    }
}
