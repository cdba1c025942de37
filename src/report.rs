// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report rendering for audit results.
//!
//! Formats:
//! - **Text**: sectioned console report with score and top recommendations
//! - **Markdown**: the same structure, suitable for PR comments and docs
//! - **Json**: the structured result for programmatic consumption

use crate::engine::AuditResult;
use crate::finding::Finding;

/// Findings listed per section before truncation.
const SECTION_LIMIT: usize = 5;

/// Recommendations listed at the end of a report.
const RECOMMENDATION_LIMIT: usize = 3;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

/// Render an audit result in the requested format.
pub fn render(result: &AuditResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Markdown => render_markdown(result),
        OutputFormat::Json => render_json(result),
    }
}

fn render_text(result: &AuditResult) -> String {
    let mut output = String::new();
    output.push_str("=== Accessibility Audit Report ===\n\n");

    text_section(&mut output, "CRITICAL ISSUES", &result.criticals(), true);
    text_section(&mut output, "WARNINGS", &result.warnings(), true);
    text_section(&mut output, "PASSED CHECKS", &result.passed(), false);

    output.push_str(&format!("OVERALL SCORE: {:.1}/10\n", result.score));

    output.push_str("\nTOP RECOMMENDATIONS:\n");
    let recommendations = top_recommendations(result);
    if recommendations.is_empty() {
        output.push_str("  1. Great job! Continue monitoring accessibility.\n");
    } else {
        for (index, recommendation) in recommendations.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", index + 1, recommendation));
        }
    }

    output
}

fn text_section(output: &mut String, title: &str, findings: &[&Finding], show_empty: bool) {
    output.push_str(&format!("{} ({})\n", title, findings.len()));

    if findings.is_empty() && show_empty {
        output.push_str("  None found!\n");
    }

    for finding in findings.iter().take(SECTION_LIMIT) {
        output.push_str(&format!(
            "  - {}{}\n",
            finding.description,
            instance_suffix(finding)
        ));
        if finding.category.is_issue() {
            output.push_str(&format!("    at {}{}\n", finding.location, wcag_suffix(finding)));
        }
    }

    if findings.len() > SECTION_LIMIT {
        output.push_str(&format!("  ... and {} more\n", findings.len() - SECTION_LIMIT));
    }

    output.push('\n');
}

fn render_markdown(result: &AuditResult) -> String {
    let mut output = String::new();
    output.push_str("# Accessibility Audit\n\n");
    output.push_str(&format!("**Overall score:** {:.1}/10\n\n", result.score));

    markdown_section(&mut output, "Critical issues", &result.criticals());
    markdown_section(&mut output, "Warnings", &result.warnings());
    markdown_section(&mut output, "Passed checks", &result.passed());

    let recommendations = top_recommendations(result);
    if !recommendations.is_empty() {
        output.push_str("## Top recommendations\n\n");
        for (index, recommendation) in recommendations.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", index + 1, recommendation));
        }
        output.push('\n');
    }

    output
}

fn markdown_section(output: &mut String, title: &str, findings: &[&Finding]) {
    output.push_str(&format!("## {} ({})\n\n", title, findings.len()));

    if findings.is_empty() {
        output.push_str("_None found._\n\n");
        return;
    }

    for finding in findings.iter().take(SECTION_LIMIT) {
        if finding.category.is_issue() {
            output.push_str(&format!(
                "- **{}**{} at `{}`{}\n",
                finding.description,
                instance_suffix(finding),
                finding.location,
                wcag_suffix(finding)
            ));
        } else {
            output.push_str(&format!("- {}\n", finding.description));
        }
    }

    if findings.len() > SECTION_LIMIT {
        output.push_str(&format!("- ... and {} more\n", findings.len() - SECTION_LIMIT));
    }

    output.push('\n');
}

fn render_json(result: &AuditResult) -> String {
    serde_json::to_string_pretty(result)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize report: {}\"}}", e))
}

/// " (N instances)" for collapsed issue findings, empty otherwise.
fn instance_suffix(finding: &Finding) -> String {
    if finding.category.is_issue() && finding.instance_count > 1 {
        format!(" ({} instances)", finding.instance_count)
    } else {
        String::new()
    }
}

/// " [WCAG <guideline>, Level <level>]" when both are known.
fn wcag_suffix(finding: &Finding) -> String {
    match (&finding.wcag_level, finding.guideline.as_str()) {
        (Some(level), guideline) if !guideline.is_empty() => {
            format!(" [WCAG {}, Level {}]", guideline, level)
        }
        _ => String::new(),
    }
}

/// First distinct recommendations from issues, in finding order.
fn top_recommendations(result: &AuditResult) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();
    for finding in &result.findings {
        if !finding.category.is_issue() {
            continue;
        }
        if let Some(recommendation) = &finding.recommendation {
            if !recommendations.contains(recommendation) {
                recommendations.push(recommendation.clone());
            }
        }
        if recommendations.len() == RECOMMENDATION_LIMIT {
            break;
        }
    }
    recommendations
}
