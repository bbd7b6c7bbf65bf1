//! Publication date normalization.
//!
//! PubMed's `<PubDate>` carries optional `<Year>`, `<Month>` and `<Day>`
//! children. Missing parts fall back to `0000`, January and the 1st.

use chrono::Month;
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<Year>([0-9]{4})</Year>").expect("valid year regex"));
static MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<Month>(\w+)</Month>").expect("valid month regex"));
static DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<Day>([0-9]{1,2})</Day>").expect("valid day regex"));

/// Format the inside of a `<PubDate>` element as `YYYY-MM-DD`.
///
/// Never fails: an unknown month name maps to month 1.
pub fn format_pub_date(fragment: &str) -> String {
    let year = first_capture(&YEAR_RE, fragment).unwrap_or("0000");
    let month = first_capture(&MONTH_RE, fragment)
        .map(month_number)
        .unwrap_or(1);
    let day = first_capture(&DAY_RE, fragment)
        .and_then(|d| d.parse::<u32>().ok())
        .unwrap_or(1);

    format!("{}-{:02}-{:02}", year, month, day)
}

/// Month number (1-12) for a 3-letter English abbreviation, any case.
///
/// Full names ("December") and other spellings ("Sept") map to 1.
fn month_number(name: &str) -> u32 {
    if name.len() != 3 {
        return 1;
    }
    name.parse::<Month>()
        .map(|m| m.number_from_month())
        .unwrap_or(1)
}

fn first_capture<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}
