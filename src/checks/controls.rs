// SPDX-License-Identifier: PMPL-1.0-or-later
//! Interactive element labeling check, WCAG 4.1.2 Name, Role, Value (Level A).
//!
//! `<button>` elements and anything with `role="button"` need an accessible
//! name: visible text content, `aria-label`, `aria-labelledby`, or `title`.
//! Icon-only buttons with none of these are announced as just "button" by
//! screen readers.

use crate::checks::{has_accessible_name, locator, Check};
use crate::config::AuditConfig;
use crate::finding::{Category, Finding, WcagLevel};
use scraper::{Html, Selector};

const GUIDELINE: &str = "4.1.2 Name, Role, Value";

/// Check for accessible names on interactive controls.
pub struct ControlLabelCheck;

impl Check for ControlLabelCheck {
    fn name(&self) -> &str {
        "Interactive element labeling"
    }

    fn description(&self) -> &str {
        "Checks buttons and role=\"button\" elements for accessible names (WCAG 4.1.2)"
    }

    fn run(&self, document: &Html, _config: &AuditConfig) -> Vec<Finding> {
        let control_sel = Selector::parse("button, [role=\"button\"]").expect("valid selector");

        let mut unlabeled = 0usize;
        let mut first_location: Option<String> = None;

        for control in document.select(&control_sel) {
            let text = control.text().collect::<String>();
            if text.trim().is_empty() && !has_accessible_name(control) {
                unlabeled += 1;
                first_location.get_or_insert_with(|| locator(control));
            }
        }

        match first_location {
            Some(location) => vec![Finding::issue(
                Category::Critical,
                WcagLevel::A,
                GUIDELINE,
                "Interactive control without accessible label",
                &location,
                "Give every button visible text or an aria-label so assistive technology can announce it",
            )
            .with_instances(unlabeled)],
            None => Vec::new(),
        }
    }
}
