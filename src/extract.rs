//! Field extraction from raw PubMed `efetch` XML.
//!
//! Extraction is plain pattern matching over the record text. A missing
//! element is never an error: it becomes the [`PLACEHOLDER`] value or an empty
//! list.

use crate::date::format_pub_date;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Value used for any field that could not be extracted
pub const PLACEHOLDER: &str = "N/A";

/// Affiliation keywords (lowercase) marking an industry author
const COMPANY_KEYWORDS: &[&str] = &["pharma", "biotech"];

/// CSV column order for exported records
pub const RECORD_COLUMNS: &[&str] = &[
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<ArticleTitle>(.*?)</ArticleTitle>").expect("valid title regex")
});
static PUB_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<PubDate>(.*?)</PubDate>").expect("valid date regex"));
static AUTHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<Author>(.*?)</Author>").expect("valid author regex"));
static AFFILIATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<Affiliation>(.*?)</Affiliation>").expect("valid affiliation regex")
});
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+").expect("valid email regex"));

/// One parsed PubMed record, ready for export.
///
/// Every field is always populated; absent data holds [`PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperRecord {
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    /// Authors paired with a company affiliation, joined with ", "
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,
    /// The matching affiliations, in the same order as the authors
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: String,
}

impl fmt::Display for PaperRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PubmedID: {} | Title: {} | Publication Date: {} | Non-academic Author(s): {} | Company Affiliation(s): {} | Corresponding Author Email: {}",
            self.pubmed_id,
            self.title,
            self.publication_date,
            self.non_academic_authors,
            self.company_affiliations,
            self.corresponding_email
        )
    }
}

/// Parse one raw `efetch` response into a [`PaperRecord`].
pub fn parse_record(pubmed_id: &str, raw: &str) -> PaperRecord {
    let title = first_capture(&TITLE_RE, raw)
        .map(str::to_string)
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let publication_date = first_capture(&PUB_DATE_RE, raw)
        .map(format_pub_date)
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let authors = all_captures(&AUTHOR_RE, raw);
    let affiliations = all_captures(&AFFILIATION_RE, raw);

    // Pairing is positional; the longer list is truncated.
    let (company_authors, company_affiliations): (Vec<&str>, Vec<&str>) = authors
        .iter()
        .zip(affiliations.iter())
        .filter(|(_, affiliation)| is_company_affiliation(affiliation))
        .map(|(author, affiliation)| (*author, *affiliation))
        .unzip();

    let corresponding_email = EMAIL_RE
        .find(raw)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    PaperRecord {
        pubmed_id: pubmed_id.to_string(),
        title,
        publication_date,
        non_academic_authors: join_or_placeholder(&company_authors),
        company_affiliations: join_or_placeholder(&company_affiliations),
        corresponding_email,
    }
}

/// Whether an affiliation names a pharmaceutical or biotech company.
pub fn is_company_affiliation(affiliation: &str) -> bool {
    let lower = affiliation.to_lowercase();
    COMPANY_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

fn first_capture<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn all_captures<'a>(re: &Regex, text: &'a str) -> Vec<&'a str> {
    re.captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect()
}

fn join_or_placeholder(items: &[&str]) -> String {
    if items.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        items.join(", ")
    }
}
