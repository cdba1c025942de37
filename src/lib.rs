// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11ycheck audits single web pages for common accessibility problems.
//!
//! A fixed set of WCAG-derived checks runs against a parsed HTML document
//! and produces findings classified as critical, warning, or passed, plus an
//! overall 0-10 score.
//!
//! ## Checks
//!
//! - **Image alt text** (1.1.1): every image needs alternative text
//! - **Interactive element labeling** (4.1.2): buttons need accessible names
//! - **Link text quality** (2.4.4): no vague link texts like "click here"
//! - **Form label association** (1.3.1): inputs need associated labels
//! - **Heading hierarchy** (1.3.1): an outline without skipped levels
//! - **Document language** (3.1.1): root lang attribute present
//!
//! The entry point is [`engine::run_audit`]. The engine works on an already
//! parsed tree and never fetches, renders, or prints; [`fetch`] and
//! [`report`] cover those for the CLI.

pub mod checks;
pub mod config;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod finding;
pub mod report;
pub mod score;
