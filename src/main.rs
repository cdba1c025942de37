// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11ycheck CLI: audit web pages or local HTML files for accessibility
//! issues and print a scored report.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use scraper::Html;
use tracing_subscriber::EnvFilter;

use a11ycheck::engine::{run_audit, AuditResult};
use a11ycheck::error::AuditError;
use a11ycheck::fetch;
use a11ycheck::report::{render, OutputFormat};

/// WCAG-style accessibility checker for single web pages
#[derive(Parser)]
#[command(name = "a11ycheck")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a URL and audit it
    Check {
        /// Page URL; https:// is assumed when no scheme is given
        url: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 10)]
        timeout: u64,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Audit a local HTML file
    File {
        /// Path to an HTML file
        path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Output format CLI argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Markdown,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("a11ycheck=debug")
    } else {
        EnvFilter::new("a11ycheck=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            url,
            timeout,
            format,
            output,
            verbose,
        } => {
            init_logging(verbose);

            let url = fetch::normalize_url(&url);
            let body = match fetch::fetch_page(&url, Duration::from_secs(timeout)) {
                Ok(body) => body,
                Err(AuditError::Http(e)) if e.is_timeout() => {
                    anyhow::bail!(
                        "request timed out, {} took longer than {}s to respond",
                        url,
                        timeout
                    );
                }
                Err(e) => return Err(e).context(format!("failed to fetch {}", url)),
            };

            audit_and_report(&body, format.into(), output.as_deref())?
        }

        Commands::File {
            path,
            format,
            output,
            verbose,
        } => {
            init_logging(verbose);

            let body = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            if body.trim().is_empty() {
                return Err(AuditError::EmptyDocument(path.display().to_string()).into());
            }

            audit_and_report(&body, format.into(), output.as_deref())?
        }
    };

    // Criticals fail the run so CI pipelines can gate on the exit code.
    if result.has_criticals() {
        std::process::exit(1);
    }

    Ok(())
}

fn audit_and_report(
    body: &str,
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<AuditResult> {
    let document = Html::parse_document(body);
    let result = run_audit(&document);
    write_output(&render(&result, format), output)?;
    Ok(result)
}

/// Write a rendered report to a file or stdout.
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Report written to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
