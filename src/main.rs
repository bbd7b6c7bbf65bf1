//! get-papers-list - fetch PubMed papers with industry-affiliated authors
//!
//! ## Usage
//!
//! ```bash
//! get-papers-list "cancer immunotherapy"
//! get-papers-list "cancer immunotherapy" --file results.csv --debug
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use pubmed_fetcher::pipeline::{self, PipelineOptions};
use pubmed_fetcher::pubmed::{PubMedClient, EUTILS_BASE_URL};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

// ============================================================================
// CLI Definition
// ============================================================================

/// Fetch research papers from PubMed and flag non-academic authors
#[derive(Parser)]
#[command(name = "get-papers-list")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Search query for PubMed
    query: String,

    /// Enable debug mode
    #[arg(short, long)]
    debug: bool,

    /// Save results to the specified CSV file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// E-utilities base URL
    #[arg(long, default_value = EUTILS_BASE_URL)]
    base_url: String,
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let client = PubMedClient::with_base_url(&cli.base_url)
        .context("Failed to create PubMed client")?;

    let options = PipelineOptions {
        query: cli.query,
        debug: cli.debug,
        output: cli.file,
    };

    let outcome = pipeline::run(&client, &options, std::io::stdout().lock())
        .await
        .context("Failed to fetch papers")?;

    Ok(ExitCode::from(outcome.exit_code()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from(["get-papers-list", "q", "-d", "-f", "out.csv"])
            .expect("parse args");
        assert_eq!(cli.query, "q");
        assert!(cli.debug);
        assert_eq!(cli.file, Some(PathBuf::from("out.csv")));
        assert_eq!(cli.base_url, EUTILS_BASE_URL);
    }

    #[test]
    fn test_parse_long_flags() {
        let cli = Cli::try_parse_from([
            "get-papers-list",
            "cancer therapy",
            "--debug",
            "--file",
            "papers.csv",
            "--base-url",
            "http://127.0.0.1:8080/eutils",
        ])
        .expect("parse args");
        assert_eq!(cli.query, "cancer therapy");
        assert!(cli.debug);
        assert_eq!(cli.file, Some(PathBuf::from("papers.csv")));
        assert_eq!(cli.base_url, "http://127.0.0.1:8080/eutils");
    }

    #[test]
    fn test_defaults_and_missing_query() {
        let cli = Cli::try_parse_from(["get-papers-list", "q"]).expect("parse args");
        assert!(!cli.debug);
        assert!(cli.file.is_none());

        assert!(Cli::try_parse_from(["get-papers-list"]).is_err());
    }
}
