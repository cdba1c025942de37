// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for a11ycheck.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AuditError>;

/// Errors raised while obtaining a document to audit.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("document is empty: {0}")]
    EmptyDocument(String),
}
