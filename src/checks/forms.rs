// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form label association check, WCAG 1.3.1 Info and Relationships (Level A).
//!
//! Every label-requiring control must be referenced by a `<label for="...">`,
//! wrapped in a `<label>`, or carry a labeling attribute. Input types that
//! render no user-editable field (hidden, submit, reset, button, image) are
//! exempt. Controls are collected document-wide, not only inside `<form>`.

use crate::checks::{has_accessible_name, locator, plural, Check};
use crate::config::AuditConfig;
use crate::finding::{Category, Finding, WcagLevel};
use scraper::{ElementRef, Html, Selector};

const GUIDELINE: &str = "1.3.1 Info and Relationships";

/// Input types that need no visible label.
const EXEMPT_INPUT_TYPES: &[&str] = &["hidden", "submit", "reset", "button", "image"];

/// Check for label association on form controls.
pub struct FormLabelCheck;

impl Check for FormLabelCheck {
    fn name(&self) -> &str {
        "Form label association"
    }

    fn description(&self) -> &str {
        "Checks inputs, selects and textareas for associated labels (WCAG 1.3.1)"
    }

    fn run(&self, document: &Html, _config: &AuditConfig) -> Vec<Finding> {
        let control_sel = Selector::parse("input, select, textarea").expect("valid selector");
        let label_sel = Selector::parse("label").expect("valid selector");

        let label_fors: Vec<&str> = document
            .select(&label_sel)
            .filter_map(|label| label.value().attr("for"))
            .filter(|target| !target.is_empty())
            .collect();

        let mut labeled = 0usize;
        let mut unlabeled = 0usize;
        let mut first_location: Option<String> = None;

        for control in document.select(&control_sel) {
            if control.value().name() == "input" {
                let input_type = control.value().attr("type").unwrap_or("text");
                if EXEMPT_INPUT_TYPES.contains(&input_type) {
                    continue;
                }
            }

            if is_labeled(control, &label_fors) {
                labeled += 1;
            } else {
                unlabeled += 1;
                first_location.get_or_insert_with(|| control_locator(control));
            }
        }

        let mut findings = Vec::new();

        if let Some(location) = first_location {
            findings.push(
                Finding::issue(
                    Category::Critical,
                    WcagLevel::A,
                    GUIDELINE,
                    "Form input without associated label",
                    &location,
                    "Associate a <label for=\"...\"> with the input's id, wrap the input in a <label>, or add aria-label",
                )
                .with_instances(unlabeled),
            );
        }

        if labeled > 0 {
            findings.push(
                Finding::passed(&format!(
                    "Form Label Association ({} instance{})",
                    labeled,
                    plural(labeled)
                ))
                .with_guideline(GUIDELINE)
                .with_instances(labeled),
            );
        }

        findings
    }
}

/// Labeled via a for/id reference, a wrapping label, or a labeling attribute.
fn is_labeled(control: ElementRef<'_>, label_fors: &[&str]) -> bool {
    if let Some(id) = control.value().attr("id") {
        if label_fors.contains(&id) {
            return true;
        }
    }
    if has_accessible_name(control) {
        return true;
    }
    control
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().name() == "label")
}

fn control_locator(control: ElementRef<'_>) -> String {
    if control.value().name() == "input" {
        let input_type = control.value().attr("type").unwrap_or("text");
        match control.value().attr("id") {
            Some(id) if !id.is_empty() => format!("input[type=\"{}\"]#{}", input_type, id),
            _ => format!("input[type=\"{}\"]", input_type),
        }
    } else {
        locator(control)
    }
}
