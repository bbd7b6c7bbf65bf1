//! PubMed E-utilities client.
//!
//! Two endpoints are used:
//! - `esearch.fcgi` (JSON) to turn a keyword query into PubMed IDs
//! - `efetch.fcgi` (XML) to pull the full record of a single ID
//!
//! Requests are issued one at a time. There is no retry and no timeout: the
//! first failure aborts the run.

use crate::error::{FetchError, Result};
use crate::extract::{parse_record, PaperRecord};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

/// Default E-utilities base URL
pub const EUTILS_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/";

/// Maximum number of IDs requested from esearch
pub const MAX_RESULTS: usize = 10;

const USER_AGENT: &str = concat!("pubmed-fetcher/", env!("CARGO_PKG_VERSION"));

/// Client for the PubMed search and fetch endpoints
pub struct PubMedClient {
    client: Client,
    search_url: Url,
    fetch_url: Url,
}

impl PubMedClient {
    /// Create a client against the public E-utilities service
    pub fn new() -> Result<Self> {
        Self::with_base_url(EUTILS_BASE_URL)
    }

    /// Create a client against a custom E-utilities base URL
    ///
    /// A missing trailing slash is added so endpoint names join under the
    /// base path.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        let base = Url::parse(&normalized)
            .map_err(|e| FetchError::Config(format!("Invalid base URL {}: {}", base_url, e)))?;
        let search_url = join_endpoint(&base, "esearch.fcgi")?;
        let fetch_url = join_endpoint(&base, "efetch.fcgi")?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            search_url,
            fetch_url,
        })
    }

    /// Search PubMed and return up to [`MAX_RESULTS`] IDs, in service order.
    ///
    /// A response without `esearchresult.idlist` yields an empty list.
    pub async fn search_ids(&self, query: &str) -> Result<Vec<String>> {
        let retmax = MAX_RESULTS.to_string();
        debug!(query, url = %self.search_url, "Searching PubMed");

        let response = self
            .client
            .get(self.search_url.clone())
            .query(&[
                ("db", "pubmed"),
                ("term", query),
                ("retmax", retmax.as_str()),
                ("retmode", "json"),
            ])
            .send()
            .await?;

        let body = check_status(response, "esearch").await?.text().await?;
        let ids = parse_search_response(&body)?;

        info!(query, count = ids.len(), "PubMed search complete");
        Ok(ids)
    }

    /// Fetch the raw XML record for one PubMed ID
    pub async fn fetch_raw_record(&self, pubmed_id: &str) -> Result<String> {
        debug!(pubmed_id, "Fetching PubMed record");

        let response = self
            .client
            .get(self.fetch_url.clone())
            .query(&[("db", "pubmed"), ("id", pubmed_id), ("retmode", "xml")])
            .send()
            .await?;

        Ok(check_status(response, "efetch").await?.text().await?)
    }

    /// Fetch and parse every ID in order.
    ///
    /// Any failed request aborts the batch; nothing is returned for the IDs
    /// fetched before it.
    pub async fn fetch_details(&self, ids: &[String]) -> Result<Vec<PaperRecord>> {
        let mut papers = Vec::with_capacity(ids.len());

        for pubmed_id in ids {
            let raw = self.fetch_raw_record(pubmed_id).await?;
            papers.push(parse_record(pubmed_id, &raw));
        }

        info!(count = papers.len(), "Fetched PubMed records");
        Ok(papers)
    }
}

// === E-utilities Response Types ===

#[derive(Debug, Deserialize)]
struct ESearchResponse {
    #[serde(default)]
    esearchresult: Option<ESearchResult>,
}

#[derive(Debug, Deserialize)]
struct ESearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

/// Pull the ID list out of an esearch JSON body
fn parse_search_response(body: &str) -> Result<Vec<String>> {
    let data: ESearchResponse = serde_json::from_str(body)?;
    Ok(data.esearchresult.map(|r| r.idlist).unwrap_or_default())
}

async fn check_status(response: reqwest::Response, endpoint: &str) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    Err(FetchError::Api {
        code: status.as_u16(),
        message: format!("PubMed {} error: {}", endpoint, status),
    })
}

fn join_endpoint(base: &Url, endpoint: &str) -> Result<Url> {
    base.join(endpoint)
        .map_err(|e| FetchError::Config(format!("Invalid endpoint {}: {}", endpoint, e)))
}
