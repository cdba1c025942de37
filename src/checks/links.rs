// SPDX-License-Identifier: PMPL-1.0-or-later
//! Link text quality check, WCAG 2.4.4 Link Purpose (Level A).
//!
//! Vague link texts such as "click here" force screen reader users to read
//! the surrounding context to learn where a link goes. Matching is exact
//! after normalization, never substring, so descriptive text that merely
//! contains a flagged phrase is not reported.

use crate::checks::{normalize_text, Check};
use crate::config::AuditConfig;
use crate::finding::{Category, Finding, WcagLevel};
use scraper::{ElementRef, Html, Selector};

const GUIDELINE: &str = "2.4.4 Link Purpose (In Context)";

/// Check for vague link texts.
pub struct LinkTextCheck;

impl Check for LinkTextCheck {
    fn name(&self) -> &str {
        "Link text quality"
    }

    fn description(&self) -> &str {
        "Checks link texts against a list of vague phrases (WCAG 2.4.4)"
    }

    fn run(&self, document: &Html, config: &AuditConfig) -> Vec<Finding> {
        let link_sel = Selector::parse("a").expect("valid selector");

        let phrases: Vec<String> = config
            .vague_link_phrases
            .iter()
            .map(|p| normalize_text(p))
            .collect();

        // One entry per matched phrase, in first-seen document order.
        let mut matched: Vec<(String, usize, String)> = Vec::new();

        for link in document.select(&link_sel) {
            let text = normalize_text(&link.text().collect::<String>());
            if text.is_empty() || !phrases.iter().any(|p| p == &text) {
                continue;
            }
            match matched.iter_mut().find(|(phrase, _, _)| phrase == &text) {
                Some((_, count, _)) => *count += 1,
                None => matched.push((text, 1, link_locator(link))),
            }
        }

        matched
            .into_iter()
            .map(|(phrase, count, location)| {
                Finding::issue(
                    Category::Warning,
                    WcagLevel::A,
                    GUIDELINE,
                    &format!("Link with vague text: \"{}\"", phrase),
                    &location,
                    "Rewrite the link text to describe its destination, e.g. \"view pricing details\" instead of \"click here\"",
                )
                .with_instances(count)
            })
            .collect()
    }
}

/// Locator built from the link target, truncated for stable display.
fn link_locator(link: ElementRef<'_>) -> String {
    match link.value().attr("href") {
        Some(href) if !href.is_empty() => {
            let short: String = href.chars().take(50).collect();
            format!("a[href=\"{}\"]", short)
        }
        _ => "a".to_string(),
    }
}
