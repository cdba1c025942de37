// SPDX-License-Identifier: PMPL-1.0-or-later
//! Audit engine: runs every registered check against one document and
//! aggregates the findings into a scored result.
//!
//! The engine is read-only over the document and holds no mutable state
//! across runs, so one engine can audit any number of documents and the same
//! document twice yields the same result. A check that panics on an
//! unexpected document shape is isolated: the panic becomes a single
//! critical finding and the remaining checks still run.

use crate::checks::{default_checks, Check};
use crate::config::AuditConfig;
use crate::finding::{Category, Finding};
use crate::score::{score, CategoryCounts};
use scraper::Html;
use serde::Serialize;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, error, info};

/// Immutable result of auditing one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditResult {
    /// All findings, in check registration order
    pub findings: Vec<Finding>,
    /// Finding tallies per category
    pub counts: CategoryCounts,
    /// Audit score in 0.0..=10.0
    pub score: f64,
}

impl AuditResult {
    /// Critical findings, in document order.
    pub fn criticals(&self) -> Vec<&Finding> {
        self.by_category(Category::Critical)
    }

    /// Warning findings, in document order.
    pub fn warnings(&self) -> Vec<&Finding> {
        self.by_category(Category::Warning)
    }

    /// Passed findings, in document order.
    pub fn passed(&self) -> Vec<&Finding> {
        self.by_category(Category::Passed)
    }

    /// Findings of one category.
    pub fn by_category(&self, category: Category) -> Vec<&Finding> {
        self.findings.iter().filter(|f| f.category == category).collect()
    }

    /// Whether the audit produced any critical finding.
    pub fn has_criticals(&self) -> bool {
        self.counts.critical > 0
    }

    /// Whether the audit produced no issues at all.
    pub fn is_clean(&self) -> bool {
        self.counts.critical == 0 && self.counts.warning == 0
    }
}

/// Runs checks over a parsed document and scores the findings.
pub struct AuditEngine {
    checks: Vec<Box<dyn Check>>,
    config: AuditConfig,
}

impl AuditEngine {
    /// Engine with the default checks and default configuration.
    pub fn new() -> Self {
        Self::with_config(AuditConfig::default())
    }

    /// Engine with the default checks and a custom configuration.
    pub fn with_config(config: AuditConfig) -> Self {
        Self {
            checks: default_checks(),
            config,
        }
    }

    /// Append a check. Findings follow registration order.
    pub fn register(&mut self, check: Box<dyn Check>) {
        self.checks.push(check);
    }

    /// Run every check exactly once and aggregate the findings.
    pub fn run(&self, document: &Html) -> AuditResult {
        let mut findings = Vec::new();

        for check in &self.checks {
            debug!("Running check: {}", check.name());
            match catch_unwind(AssertUnwindSafe(|| check.run(document, &self.config))) {
                Ok(check_findings) => {
                    debug!(
                        "Check {} produced {} finding(s)",
                        check.name(),
                        check_findings.len()
                    );
                    findings.extend(check_findings);
                }
                Err(panic) => {
                    error!("Check {} panicked: {}", check.name(), panic_message(&panic));
                    findings.push(check_failure(check.name()));
                }
            }
        }

        let (counts, score) = score(&findings, &self.config.weights);
        info!(
            "Audit complete: {} critical, {} warning, {} passed, score {:.1}",
            counts.critical, counts.warning, counts.passed, score
        );

        AuditResult {
            findings,
            counts,
            score,
        }
    }
}

impl Default for AuditEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Audit one parsed document with the default engine.
pub fn run_audit(document: &Html) -> AuditResult {
    AuditEngine::new().run(document)
}

/// Synthetic critical finding for a check that could not evaluate the document.
fn check_failure(name: &str) -> Finding {
    Finding {
        category: Category::Critical,
        wcag_level: None,
        guideline: "internal".to_string(),
        description: format!("{} check failed to evaluate this document", name),
        location: name.to_string(),
        recommendation: Some("Re-run the audit; report this as a bug if it persists".to_string()),
        instance_count: 1,
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PanickingCheck;

    impl Check for PanickingCheck {
        fn name(&self) -> &str {
            "Panicking"
        }

        fn description(&self) -> &str {
            "Always panics"
        }

        fn run(&self, _document: &Html, _config: &AuditConfig) -> Vec<Finding> {
            panic!("boom");
        }
    }

    fn clean_document() -> Html {
        Html::parse_document(
            r#"<html lang="en"><head></head><body><h1>Title</h1></body></html>"#,
        )
    }

    #[test]
    fn test_panicking_check_becomes_one_critical_finding() {
        let mut engine = AuditEngine::new();
        engine.register(Box::new(PanickingCheck));
        let result = engine.run(&clean_document());

        let internal: Vec<_> = result
            .findings
            .iter()
            .filter(|f| f.guideline == "internal")
            .collect();
        assert_eq!(internal.len(), 1);
        assert_eq!(internal[0].category, Category::Critical);
        assert_eq!(internal[0].location, "Panicking");
    }

    #[test]
    fn test_other_checks_still_run_after_a_panic() {
        let mut engine = AuditEngine::new();
        engine.register(Box::new(PanickingCheck));
        let result = engine.run(&clean_document());

        // Default checks contribute their findings despite the panicking one.
        assert!(result
            .findings
            .iter()
            .any(|f| f.description.contains("Heading hierarchy intact")));
    }

    #[test]
    fn test_findings_follow_registration_order() {
        let document = Html::parse_document(
            r#"<html><head></head><body>
                <img src="x.png">
                <button></button>
                <a href="/m">more</a>
                <input type="text">
                <h1>A</h1><h3>B</h3>
            </body></html>"#,
        );
        let result = AuditEngine::new().run(&document);

        let guidelines: Vec<&str> =
            result.findings.iter().map(|f| f.guideline.as_str()).collect();
        assert_eq!(
            guidelines,
            vec![
                "1.1.1 Non-text Content",
                "4.1.2 Name, Role, Value",
                "2.4.4 Link Purpose (In Context)",
                "1.3.1 Info and Relationships",
                "1.3.1 Info and Relationships",
                "3.1.1 Language of Page",
            ]
        );
    }

    #[test]
    fn test_counts_match_findings() {
        let document = Html::parse_document(
            r#"<html><body><img src="x.png"><h1>A</h1></body></html>"#,
        );
        let result = run_audit(&document);
        assert_eq!(result.counts.total(), result.findings.len());
        assert_eq!(result.counts.critical, result.criticals().len());
        assert_eq!(result.counts.warning, result.warnings().len());
        assert_eq!(result.counts.passed, result.passed().len());
    }

    #[test]
    fn test_clean_document_is_clean() {
        let result = run_audit(&clean_document());
        assert!(result.is_clean());
        assert!(!result.has_criticals());
        assert_eq!(result.score, 10.0);
    }
}
