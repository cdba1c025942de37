// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text check, WCAG 1.1.1 Non-text Content (Level A).
//!
//! Every `<img>` must carry an `alt` attribute:
//! - missing `alt` is a critical issue
//! - `alt=""` is the documented decorative pattern and is accepted
//! - alt text longer than the configured threshold is flagged as too verbose
//!
//! Offenders of the same kind collapse into one finding with an instance
//! count; the locator names the first offender in document order.

use crate::checks::{plural, Check};
use crate::config::AuditConfig;
use crate::finding::{Category, Finding, WcagLevel};
use scraper::{ElementRef, Html, Selector};

const GUIDELINE: &str = "1.1.1 Non-text Content";

/// Check for image alternative text.
pub struct ImageAltCheck;

impl Check for ImageAltCheck {
    fn name(&self) -> &str {
        "Image alt text"
    }

    fn description(&self) -> &str {
        "Checks <img> elements for alt attributes (WCAG 1.1.1)"
    }

    fn run(&self, document: &Html, config: &AuditConfig) -> Vec<Finding> {
        let img_sel = Selector::parse("img").expect("valid selector");

        let mut total = 0usize;
        let mut missing = 0usize;
        let mut missing_location: Option<String> = None;
        let mut verbose = 0usize;
        let mut verbose_location: Option<String> = None;

        for img in document.select(&img_sel) {
            total += 1;
            match img.value().attr("alt") {
                None => {
                    missing += 1;
                    missing_location.get_or_insert_with(|| img_locator(img));
                }
                Some(alt) if alt.trim().chars().count() > config.max_alt_length => {
                    verbose += 1;
                    verbose_location.get_or_insert_with(|| img_locator(img));
                }
                Some(_) => {}
            }
        }

        let mut findings = Vec::new();

        if let Some(location) = missing_location {
            findings.push(
                Finding::issue(
                    Category::Critical,
                    WcagLevel::A,
                    GUIDELINE,
                    "Image missing alt text",
                    &location,
                    "Add descriptive alt text to every image; use alt=\"\" only for purely decorative images",
                )
                .with_instances(missing),
            );
        }

        if let Some(location) = verbose_location {
            findings.push(
                Finding::issue(
                    Category::Warning,
                    WcagLevel::A,
                    GUIDELINE,
                    &format!(
                        "Image alt text longer than {} characters",
                        config.max_alt_length
                    ),
                    &location,
                    "Shorten alt text to a concise description and move detail into the surrounding content",
                )
                .with_instances(verbose),
            );
        }

        // No images at all still counts as a pass: nothing required alt text.
        if findings.is_empty() {
            let description = if total == 0 {
                "No images requiring alternative text".to_string()
            } else {
                format!("Image alt text present ({} instance{})", total, plural(total))
            };
            findings.push(Finding::passed(&description).with_guideline(GUIDELINE));
        }

        findings
    }
}

/// Locator built from the image source, truncated for stable display.
fn img_locator(img: ElementRef<'_>) -> String {
    let src = img.value().attr("src").unwrap_or("unknown");
    let short: String = src.chars().take(50).collect();
    format!("img[src=\"{}\"]", short)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Vec<Finding> {
        let document = Html::parse_document(html);
        ImageAltCheck.run(&document, &AuditConfig::default())
    }

    #[test]
    fn test_missing_alt_is_critical() {
        let findings = run(r#"<html><body><img src="photo.jpg"></body></html>"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, Category::Critical);
        assert_eq!(findings[0].instance_count, 1);
        assert!(findings[0].location.contains("photo.jpg"));
    }

    #[test]
    fn test_empty_alt_is_accepted_as_decorative() {
        let findings = run(r#"<html><body><img src="divider.png" alt=""></body></html>"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, Category::Passed);
    }

    #[test]
    fn test_verbose_alt_is_warning() {
        let long_alt = "a".repeat(126);
        let html = format!(r#"<html><body><img src="x.png" alt="{}"></body></html>"#, long_alt);
        let document = Html::parse_document(&html);
        let findings = ImageAltCheck.run(&document, &AuditConfig::default());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, Category::Warning);
    }

    #[test]
    fn test_alt_at_threshold_passes() {
        let alt = "a".repeat(125);
        let html = format!(r#"<html><body><img src="x.png" alt="{}"></body></html>"#, alt);
        let document = Html::parse_document(&html);
        let findings = ImageAltCheck.run(&document, &AuditConfig::default());
        assert_eq!(findings[0].category, Category::Passed);
    }

    #[test]
    fn test_repeated_offenders_collapse_into_one_finding() {
        let findings = run(
            r#"<html><body>
                <img src="a.png">
                <img src="b.png">
                <img src="c.png" alt="A cat on a sofa">
            </body></html>"#,
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].instance_count, 2);
        assert!(
            findings[0].location.contains("a.png"),
            "locator names the first offender in document order"
        );
    }

    #[test]
    fn test_missing_and_verbose_are_separate_findings() {
        let long_alt = "b".repeat(130);
        let html = format!(
            r#"<html><body><img src="a.png"><img src="b.png" alt="{}"></body></html>"#,
            long_alt
        );
        let document = Html::parse_document(&html);
        let findings = ImageAltCheck.run(&document, &AuditConfig::default());
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].category, Category::Critical);
        assert_eq!(findings[1].category, Category::Warning);
    }

    #[test]
    fn test_no_images_still_passes() {
        let findings = run(r#"<html><body><p>text only</p></body></html>"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, Category::Passed);
        assert!(findings[0].description.contains("No images"));
    }

    #[test]
    fn test_long_src_is_truncated_in_locator() {
        let src = format!("https://cdn.example.com/{}.png", "x".repeat(80));
        let html = format!(r#"<html><body><img src="{}"></body></html>"#, src);
        let document = Html::parse_document(&html);
        let findings = ImageAltCheck.run(&document, &AuditConfig::default());
        assert!(findings[0].location.len() <= "img[src=\"\"]".len() + 50);
    }

    #[test]
    fn test_missing_src_reports_unknown() {
        let findings = run(r#"<html><body><img></body></html>"#);
        assert!(findings[0].location.contains("unknown"));
    }
}
