// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading hierarchy check, WCAG 1.3.1 Info and Relationships (Level A).
//!
//! A page needs at least one heading to have a navigable outline, and levels
//! must not skip when nesting deeper (h2 followed directly by h4). Returning
//! to a shallower level by any distance is fine. The first heading does not
//! have to be an h1.

use crate::checks::{plural, Check};
use crate::config::AuditConfig;
use crate::finding::{Category, Finding, WcagLevel};
use scraper::{Html, Selector};

const GUIDELINE: &str = "1.3.1 Info and Relationships";

/// Check for a sound heading outline.
pub struct HeadingHierarchyCheck;

impl Check for HeadingHierarchyCheck {
    fn name(&self) -> &str {
        "Heading hierarchy"
    }

    fn description(&self) -> &str {
        "Checks for headings and for skipped levels in the outline (WCAG 1.3.1)"
    }

    fn run(&self, document: &Html, _config: &AuditConfig) -> Vec<Finding> {
        let heading_sel = Selector::parse("h1, h2, h3, h4, h5, h6").expect("valid selector");

        let levels: Vec<u8> = document
            .select(&heading_sel)
            .filter_map(|heading| {
                heading
                    .value()
                    .name()
                    .strip_prefix('h')
                    .and_then(|level| level.parse().ok())
            })
            .collect();

        if levels.is_empty() {
            return vec![Finding::issue(
                Category::Critical,
                WcagLevel::A,
                GUIDELINE,
                "No headings found, the page has no document outline",
                "document",
                "Structure the page with h1-h6 headings so assistive technology can navigate by section",
            )];
        }

        let mut skips = 0usize;
        let mut first_skip: Option<(u8, u8)> = None;
        for window in levels.windows(2) {
            if window[1] > window[0] + 1 {
                skips += 1;
                first_skip.get_or_insert((window[0], window[1]));
            }
        }

        match first_skip {
            Some((from, to)) => vec![Finding::issue(
                Category::Warning,
                WcagLevel::A,
                GUIDELINE,
                &format!("Heading level skipped from h{} to h{}", from, to),
                &format!("h{}", to),
                "Keep heading levels sequential when nesting deeper; do not jump past a level",
            )
            .with_instances(skips)],
            None => vec![Finding::passed(&format!(
                "Heading hierarchy intact ({} heading{})",
                levels.len(),
                plural(levels.len())
            ))
            .with_guideline(GUIDELINE)],
        }
    }
}
