// SPDX-License-Identifier: PMPL-1.0-or-later
//! Document language check, WCAG 3.1.1 Language of Page (Level A).
//!
//! Screen readers pick pronunciation rules from the `lang` attribute on the
//! root element; without it they guess. A missing or blank attribute is a
//! critical issue. The check also records a responsive viewport meta tag as
//! a pass when one is present.

use crate::checks::Check;
use crate::config::AuditConfig;
use crate::finding::{Category, Finding, WcagLevel};
use scraper::{Html, Selector};

const GUIDELINE: &str = "3.1.1 Language of Page";

/// Check for the root language attribute.
pub struct DocumentLanguageCheck;

impl Check for DocumentLanguageCheck {
    fn name(&self) -> &str {
        "Document language"
    }

    fn description(&self) -> &str {
        "Checks the <html> element for a lang attribute (WCAG 3.1.1)"
    }

    fn run(&self, document: &Html, _config: &AuditConfig) -> Vec<Finding> {
        let html_sel = Selector::parse("html").expect("valid selector");
        let viewport_sel = Selector::parse("meta[name=\"viewport\"]").expect("valid selector");

        let lang = document
            .select(&html_sel)
            .next()
            .and_then(|root| root.value().attr("lang"))
            .map(str::trim)
            .filter(|lang| !lang.is_empty());

        let mut findings = vec![match lang {
            Some(lang) => {
                Finding::passed(&format!("Page language attribute set (lang=\"{}\")", lang))
                    .with_guideline(GUIDELINE)
                    .with_location("html")
            }
            None => Finding::issue(
                Category::Critical,
                WcagLevel::A,
                GUIDELINE,
                "Missing page language attribute",
                "html",
                "Add lang=\"en\" (or the appropriate BCP 47 tag) to the <html> element",
            ),
        }];

        if document.select(&viewport_sel).next().is_some() {
            findings.push(
                Finding::passed("Responsive viewport meta tag present")
                    .with_location("meta[name=\"viewport\"]"),
            );
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Vec<Finding> {
        let document = Html::parse_document(html);
        DocumentLanguageCheck.run(&document, &AuditConfig::default())
    }

    #[test]
    fn test_lang_attribute_passes() {
        let findings = run(r#"<html lang="en"><body></body></html>"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, Category::Passed);
        assert!(findings[0].description.contains("lang=\"en\""));
    }

    #[test]
    fn test_missing_lang_is_critical() {
        let findings = run(r#"<html><body></body></html>"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, Category::Critical);
        assert!(findings[0].guideline.contains("3.1.1"));
    }

    #[test]
    fn test_empty_lang_is_critical() {
        let findings = run(r#"<html lang=""><body></body></html>"#);
        assert_eq!(findings[0].category, Category::Critical);
    }

    #[test]
    fn test_whitespace_lang_is_critical() {
        let findings = run(r#"<html lang="   "><body></body></html>"#);
        assert_eq!(findings[0].category, Category::Critical);
    }

    #[test]
    fn test_viewport_meta_adds_a_pass() {
        let findings = run(
            r#"<html lang="en"><head><meta name="viewport" content="width=device-width"></head><body></body></html>"#,
        );
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[1].category, Category::Passed);
        assert!(findings[1].description.contains("viewport"));
    }

    #[test]
    fn test_missing_viewport_adds_nothing() {
        let findings = run(r#"<html lang="en"><head></head><body></body></html>"#);
        assert_eq!(findings.len(), 1);
    }
}
