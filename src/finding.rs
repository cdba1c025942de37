// SPDX-License-Identifier: PMPL-1.0-or-later
//! Finding model shared by all checks.
//!
//! Every check emits zero or more [`Finding`]s. A finding is either an issue
//! (critical or warning, carrying a WCAG reference and remediation guidance)
//! or a record of a passed check. Repeated occurrences of the same violation
//! collapse into one finding with an instance count.

use serde::{Deserialize, Serialize};

/// Audit weight of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Must be fixed, heavy score penalty
    Critical,
    /// Should be fixed, light score penalty
    Warning,
    /// Check passed, no penalty
    Passed,
}

impl Category {
    /// Whether findings of this category represent something to fix.
    pub fn is_issue(&self) -> bool {
        matches!(self, Category::Critical | Category::Warning)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Critical => write!(f, "CRITICAL"),
            Category::Warning => write!(f, "WARNING"),
            Category::Passed => write!(f, "PASSED"),
        }
    }
}

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    A,
    AA,
    AAA,
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WcagLevel::A => write!(f, "A"),
            WcagLevel::AA => write!(f, "AA"),
            WcagLevel::AAA => write!(f, "AAA"),
        }
    }
}

/// One detected accessibility condition, positive or negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Audit category
    pub category: Category,
    /// WCAG conformance level, absent on informational passes
    pub wcag_level: Option<WcagLevel>,
    /// WCAG guideline reference, e.g. "1.1.1 Non-text Content"
    pub guideline: String,
    /// Human-readable explanation of the condition
    pub description: String,
    /// Locator for the offending node, stable across runs
    pub location: String,
    /// Remediation guidance, absent on passed findings
    pub recommendation: Option<String>,
    /// Number of occurrences this finding represents, always at least one
    pub instance_count: usize,
}

impl Finding {
    /// Create an issue finding. `category` must be critical or warning.
    pub fn issue(
        category: Category,
        level: WcagLevel,
        guideline: &str,
        description: &str,
        location: &str,
        recommendation: &str,
    ) -> Self {
        Self {
            category,
            wcag_level: Some(level),
            guideline: guideline.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            recommendation: Some(recommendation.to_string()),
            instance_count: 1,
        }
    }

    /// Create a passed finding.
    pub fn passed(description: &str) -> Self {
        Self {
            category: Category::Passed,
            wcag_level: None,
            guideline: String::new(),
            description: description.to_string(),
            location: "document".to_string(),
            recommendation: None,
            instance_count: 1,
        }
    }

    /// Set the guideline reference.
    pub fn with_guideline(mut self, guideline: &str) -> Self {
        self.guideline = guideline.to_string();
        self
    }

    /// Set the locator.
    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    /// Set the occurrence count, clamped to at least one.
    pub fn with_instances(mut self, count: usize) -> Self {
        self.instance_count = count.max(1);
        self
    }
}
