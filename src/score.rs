// SPDX-License-Identifier: PMPL-1.0-or-later
//! Scoring and aggregation of findings.
//!
//! Deduct-from-baseline model: a fixed penalty per critical or warning
//! finding, clamped to the 0..=10 range. The finding is the scoring unit;
//! occurrences collapsed into one finding never compound the penalty.

use crate::config::ScoreWeights;
use crate::finding::{Category, Finding};
use serde::{Deserialize, Serialize};

/// Highest (and starting) score.
pub const BASELINE_SCORE: f64 = 10.0;

/// Finding tallies per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub critical: usize,
    pub warning: usize,
    pub passed: usize,
}

impl CategoryCounts {
    /// Count findings per category. Instance counts do not inflate this.
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = Self::default();
        for finding in findings {
            match finding.category {
                Category::Critical => counts.critical += 1,
                Category::Warning => counts.warning += 1,
                Category::Passed => counts.passed += 1,
            }
        }
        counts
    }

    /// Total number of findings counted.
    pub fn total(&self) -> usize {
        self.critical + self.warning + self.passed
    }
}

/// Compute category counts and the clamped audit score.
pub fn score(findings: &[Finding], weights: &ScoreWeights) -> (CategoryCounts, f64) {
    let counts = CategoryCounts::from_findings(findings);
    let raw = BASELINE_SCORE
        - counts.critical as f64 * weights.critical_penalty
        - counts.warning as f64 * weights.warning_penalty;
    (counts, raw.clamp(0.0, BASELINE_SCORE))
}
