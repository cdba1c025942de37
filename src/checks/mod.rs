// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibility checks run against a parsed document.
//!
//! Each check covers one WCAG success criterion or a small group of related
//! criteria. Checks are pure: they read the document tree and the audit
//! configuration, emit findings, and touch nothing else.

pub mod controls;
pub mod forms;
pub mod headings;
pub mod images;
pub mod language;
pub mod links;

use crate::config::AuditConfig;
use crate::finding::Finding;
use scraper::{ElementRef, Html};

/// Trait implemented by all checks.
pub trait Check: Send + Sync {
    /// Short name of this check, used in logs and failure findings.
    fn name(&self) -> &str;

    /// One-line description of what this check verifies.
    fn description(&self) -> &str;

    /// Evaluate one document and return findings.
    fn run(&self, document: &Html, config: &AuditConfig) -> Vec<Finding>;
}

/// All checks in reporting order.
pub fn default_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(images::ImageAltCheck),
        Box::new(controls::ControlLabelCheck),
        Box::new(links::LinkTextCheck),
        Box::new(forms::FormLabelCheck),
        Box::new(headings::HeadingHierarchyCheck),
        Box::new(language::DocumentLanguageCheck),
    ]
}

/// Short locator for an element: tag name plus id when present.
pub(crate) fn locator(element: ElementRef<'_>) -> String {
    let tag = element.value().name();
    match element.value().attr("id") {
        Some(id) if !id.is_empty() => format!("{}#{}", tag, id),
        _ => tag.to_string(),
    }
}

/// Lowercase and collapse runs of whitespace, for text comparisons.
pub(crate) fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Attribute lookup that treats whitespace-only values as absent.
pub(crate) fn non_empty_attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name).filter(|v| !v.trim().is_empty())
}

/// Whether an element exposes an accessible name through labeling attributes.
pub(crate) fn has_accessible_name(element: ElementRef<'_>) -> bool {
    non_empty_attr(element, "aria-label").is_some()
        || non_empty_attr(element, "aria-labelledby").is_some()
        || non_empty_attr(element, "title").is_some()
}

/// Plural suffix for instance counts.
pub(crate) fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
