//! Output of parsed records: CSV file or one console line per record.

use crate::error::Result;
use crate::extract::{PaperRecord, RECORD_COLUMNS};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write records as CSV to `path`, replacing any existing file.
///
/// The header row is written even when `records` is empty.
pub fn write_csv(records: &[PaperRecord], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv_to(records, file)?;
    info!(path = %path.display(), count = records.len(), "Saved CSV");
    Ok(())
}

/// Write records as CSV to any writer
pub fn write_csv_to<W: Write>(records: &[PaperRecord], writer: W) -> Result<()> {
    // Headers are emitted by hand; serialize() would skip them for an empty slice.
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(RECORD_COLUMNS)?;
    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Print one human readable line per record
pub fn print_records<W: Write>(records: &[PaperRecord], mut out: W) -> Result<()> {
    for record in records {
        writeln!(out, "{}", record)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::parse_record;
    use tempfile::NamedTempFile;

    const HEADER: &str = "PubmedID,Title,Publication Date,Non-academic Author(s),Company Affiliation(s),Corresponding Author Email";

    #[test]
    fn test_empty_csv_has_only_header() -> Result<()> {
        let temp = NamedTempFile::new()?;
        write_csv(&[], temp.path())?;

        let content = std::fs::read_to_string(temp.path())?;
        assert_eq!(content, format!("{}\n", HEADER));
        Ok(())
    }

    #[test]
    fn test_csv_quotes_joined_fields() -> Result<()> {
        let raw = "<ArticleTitle>A study</ArticleTitle>\
                   <Author>Jane Doe</Author><Author>Max Mustermann</Author>\
                   <Affiliation>Acme Biotech Inc.</Affiliation><Affiliation>Beta Pharma</Affiliation>";
        let records = vec![parse_record("42", raw)];

        let mut buf = Vec::new();
        write_csv_to(&records, &mut buf)?;
        let text = String::from_utf8(buf).expect("utf8");

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(HEADER));
        assert_eq!(
            lines.next(),
            Some(r#"42,A study,N/A,"Jane Doe, Max Mustermann","Acme Biotech Inc., Beta Pharma",N/A"#)
        );
        assert_eq!(lines.next(), None);
        Ok(())
    }

    #[test]
    fn test_write_csv_to_missing_dir_fails() {
        let path = Path::new("/nonexistent/pubmed-fetcher/out.csv");
        assert!(write_csv(&[], path).is_err());
    }

    #[test]
    fn test_print_records_one_line_each() -> Result<()> {
        let records = vec![parse_record("1", ""), parse_record("2", "")];
        let mut buf = Vec::new();
        print_records(&records, &mut buf)?;

        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("PubmedID: 1 |"));
        assert!(lines[1].starts_with("PubmedID: 2 |"));
        Ok(())
    }
}
