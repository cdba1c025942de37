// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page fetching for the CLI host.
//!
//! The engine itself never touches the network; this module turns a URL into
//! the raw markup handed to the parser.

use crate::error::{AuditError, Result};
use std::time::Duration;
use tracing::info;

/// User agent sent with fetch requests.
const USER_AGENT: &str = "Mozilla/5.0 (a11ycheck accessibility checker)";

/// Prepend https:// when the URL carries no scheme.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Fetch a page over HTTP and return its body.
pub fn fetch_page(url: &str, timeout: Duration) -> Result<String> {
    info!("Fetching {}", url);

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;

    let body = client.get(url).send()?.error_for_status()?.text()?;

    if body.trim().is_empty() {
        return Err(AuditError::EmptyDocument(url.to_string()));
    }

    Ok(body)
}
