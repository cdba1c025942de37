// SPDX-License-Identifier: PMPL-1.0-or-later
//! Audit configuration.
//!
//! Thresholds and pattern lists are handed to the engine at construction
//! instead of living in the checks, so two engines with different settings
//! can run side by side.

use serde::{Deserialize, Serialize};

/// Link texts flagged as vague by default.
const DEFAULT_VAGUE_PHRASES: &[&str] = &["click here", "read more", "here", "link", "more"];

/// Alt text longer than this many characters is flagged as too verbose.
const DEFAULT_MAX_ALT_LENGTH: usize = 125;

/// Tuning knobs for the audit engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Maximum accepted alt text length in characters
    pub max_alt_length: usize,
    /// Link texts that match one of these after normalization are flagged
    pub vague_link_phrases: Vec<String>,
    /// Score penalties per finding category
    pub weights: ScoreWeights,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            max_alt_length: DEFAULT_MAX_ALT_LENGTH,
            vague_link_phrases: DEFAULT_VAGUE_PHRASES.iter().map(|p| p.to_string()).collect(),
            weights: ScoreWeights::default(),
        }
    }
}

/// Fixed per-finding score penalties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Deducted once per critical finding
    pub critical_penalty: f64,
    /// Deducted once per warning finding
    pub warning_penalty: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            critical_penalty: 2.0,
            warning_penalty: 0.5,
        }
    }
}
