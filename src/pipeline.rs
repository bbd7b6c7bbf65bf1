//! One end-to-end run: search, fetch each record, export.

use crate::error::Result;
use crate::export;
use crate::pubmed::PubMedClient;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Settings for a single run
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// PubMed search term, passed through unchanged
    pub query: String,
    /// Echo the query before searching
    pub debug: bool,
    /// CSV destination; console output when `None`
    pub output: Option<PathBuf>,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The search returned no IDs; nothing was fetched or written
    NoResults,
    /// Records were written to a CSV file
    Exported { count: usize, path: PathBuf },
    /// Records were printed to the console writer
    Printed { count: usize },
}

impl Outcome {
    /// Process exit status for this outcome; an empty search is a failure
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::NoResults => 1,
            Outcome::Exported { .. } | Outcome::Printed { .. } => 0,
        }
    }
}

/// Run the pipeline, writing user-facing messages and records to `out`.
pub async fn run<W: Write>(
    client: &PubMedClient,
    options: &PipelineOptions,
    mut out: W,
) -> Result<Outcome> {
    if options.debug {
        writeln!(out, "Searching PubMed for: {}", options.query)?;
    }

    let ids = client.search_ids(&options.query).await?;
    if ids.is_empty() {
        writeln!(out, "No papers found.")?;
        return Ok(Outcome::NoResults);
    }

    let papers = client.fetch_details(&ids).await?;
    info!(count = papers.len(), "Exporting records");

    match &options.output {
        Some(path) => {
            export::write_csv(&papers, path)?;
            writeln!(out, "Results saved to {}", path.display())?;
            Ok(Outcome::Exported {
                count: papers.len(),
                path: path.clone(),
            })
        }
        None => {
            export::print_records(&papers, &mut out)?;
            Ok(Outcome::Printed {
                count: papers.len(),
            })
        }
    }
}
