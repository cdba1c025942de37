// SPDX-License-Identifier: PMPL-1.0-or-later
//! Integration tests: full audits over realistic documents.

use std::path::Path;

use scraper::Html;

use a11ycheck::engine::{run_audit, AuditResult};
use a11ycheck::report::{render, OutputFormat};

fn audit(html: &str) -> AuditResult {
    run_audit(&Html::parse_document(html))
}

fn audit_fixture(name: &str) -> AuditResult {
    let path = Path::new("tests/fixtures").join(name);
    let html = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    audit(&html)
}

#[test]
fn test_accessible_fixture_scores_ten() {
    let result = audit_fixture("accessible.html");

    assert!(result.is_clean(), "unexpected issues: {:#?}", result.findings);
    assert_eq!(result.counts.critical, 0);
    assert_eq!(result.counts.warning, 0);
    assert_eq!(result.score, 10.0);

    // Alt text, labeled form fields, headings, lang and viewport all pass.
    assert!(result.counts.passed >= 5);
}

#[test]
fn test_inaccessible_fixture_hits_the_floor() {
    let result = audit_fixture("inaccessible.html");

    // Missing alt texts, unlabeled buttons, unlabeled inputs, missing lang.
    assert_eq!(result.counts.critical, 4);
    // Three vague link phrases plus one skipped heading level.
    assert_eq!(result.counts.warning, 4);
    assert_eq!(result.counts.passed, 0);
    assert_eq!(result.score, 0.0);
}

#[test]
fn test_mixed_document_counts_and_score() {
    let result = audit(
        r#"<html>
        <head><title>Test</title></head>
        <body>
            <img src="hero.png">
            <h1>Title</h1>
            <h2>Section</h2>
            <form>
                <label for="name">Name</label>
                <input type="text" id="name">
            </form>
        </body>
        </html>"#,
    );

    // Missing alt and missing lang are critical; labeled form field and
    // intact heading hierarchy pass.
    assert_eq!(result.counts.critical, 2);
    assert_eq!(result.counts.warning, 0);
    assert_eq!(result.counts.passed, 2);
    assert_eq!(result.score, 6.0);

    assert!(result
        .passed()
        .iter()
        .any(|f| f.description.contains("Form Label Association (1 instance)")));
}

#[test]
fn test_vague_link_matching_is_exact_not_substring() {
    let result = audit(
        r#"<html lang="en"><body>
            <h1>Links</h1>
            <a href="/a">  Click HERE </a>
            <a href="/b">click here for pricing details</a>
        </body></html>"#,
    );

    let warnings = result.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].guideline.contains("2.4.4"));
    assert_eq!(warnings[0].instance_count, 1);
}

#[test]
fn test_unlabeled_buttons_collapse_into_one_critical() {
    let result = audit(
        r#"<html lang="en"><body>
            <h1>Buttons</h1>
            <button></button>
            <button></button>
            <button></button>
        </body></html>"#,
    );

    let criticals = result.criticals();
    assert_eq!(criticals.len(), 1);
    assert_eq!(criticals[0].instance_count, 3);
    assert!(criticals[0].guideline.contains("4.1.2"));
    assert_eq!(result.score, 8.0);
}

#[test]
fn test_audits_are_idempotent() {
    let html = std::fs::read_to_string("tests/fixtures/inaccessible.html").unwrap();
    let document = Html::parse_document(&html);

    let first = run_audit(&document);
    let second = run_audit(&document);
    assert_eq!(first, second);
}

#[test]
fn test_counts_always_sum_to_findings_len() {
    for fixture in ["accessible.html", "inaccessible.html"] {
        let result = audit_fixture(fixture);
        assert_eq!(result.counts.total(), result.findings.len());
    }
}

#[test]
fn test_score_stays_within_bounds() {
    for fixture in ["accessible.html", "inaccessible.html"] {
        let result = audit_fixture(fixture);
        assert!((0.0..=10.0).contains(&result.score));
    }
}

#[test]
fn test_every_finding_has_at_least_one_instance() {
    let result = audit_fixture("inaccessible.html");
    assert!(result.findings.iter().all(|f| f.instance_count >= 1));
}

#[test]
fn test_issues_always_carry_recommendations() {
    let result = audit_fixture("inaccessible.html");
    assert!(result
        .findings
        .iter()
        .filter(|f| f.category.is_issue())
        .all(|f| f.recommendation.is_some()));
}

#[test]
fn test_json_report_is_valid_and_complete() {
    let result = audit_fixture("inaccessible.html");
    let report = render(&result, OutputFormat::Json);

    let parsed: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
    assert_eq!(
        parsed["findings"].as_array().map(Vec::len),
        Some(result.findings.len())
    );
    assert_eq!(parsed["counts"]["critical"].as_u64(), Some(4));
    assert_eq!(parsed["score"].as_f64(), Some(0.0));
}

#[test]
fn test_text_report_renders_the_fixture() {
    let result = audit_fixture("inaccessible.html");
    let report = render(&result, OutputFormat::Text);

    assert!(report.contains("CRITICAL ISSUES (4)"));
    assert!(report.contains("WARNINGS (4)"));
    assert!(report.contains("OVERALL SCORE: 0.0/10"));
    assert!(report.contains("Image missing alt text (2 instances)"));
}

#[test]
fn test_decorative_images_do_not_fail_the_audit() {
    let result = audit(
        r#"<html lang="en"><body>
            <h1>Gallery</h1>
            <img src="spacer.gif" alt="">
        </body></html>"#,
    );
    assert!(result.is_clean());
}

#[test]
fn test_empty_like_document_still_produces_a_complete_result() {
    // The parser always yields a tree; the audit reports what is missing.
    let result = audit("<html></html>");
    assert!(result.has_criticals());
    assert!(result.findings.iter().any(|f| f.guideline.contains("3.1.1")));
    assert!(result.findings.iter().any(|f| f.guideline.contains("1.3.1")));
    assert_eq!(result.counts.total(), result.findings.len());
}
