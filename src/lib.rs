//! # pubmed-fetcher
//!
//! Fetch PubMed papers for a query and flag authors affiliated with
//! pharmaceutical or biotech companies.
//!
//! ## Modules
//!
//! - [`pubmed`] - E-utilities search and fetch client
//! - [`extract`] - Field extraction from raw record XML
//! - [`date`] - Publication date normalization
//! - [`export`] - CSV and console output
//! - [`pipeline`] - One complete search/fetch/export run
//! - [`error`] - Custom error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pubmed_fetcher::pubmed::PubMedClient;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PubMedClient::new()?;
//!     let ids = client.search_ids("cancer immunotherapy").await?;
//!     let papers = client.fetch_details(&ids).await?;
//!     println!("Found {} papers", papers.len());
//!     Ok(())
//! }
//! ```

pub mod date;
pub mod error;
pub mod export;
pub mod extract;
pub mod pipeline;
pub mod pubmed;

pub use error::{FetchError, Result};
pub use extract::PaperRecord;
