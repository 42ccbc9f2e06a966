//! OVER/XOVER overview row parsing

use crate::error::{NntpError, Result};

/// One tab-delimited overview row (RFC 3977 §8.3)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewRecord {
    /// Article number within the group
    pub article_number: u64,
    /// Subject header
    pub subject: String,
    /// From header
    pub from: String,
    /// Date header, as sent (not normalized)
    pub date: String,
    /// Message-ID header
    pub message_id: String,
    /// References header (threading)
    pub references: String,
    /// Article size in bytes; 0 when absent or non-numeric
    pub bytes: u64,
    /// Line count; 0 when absent or non-numeric
    pub lines: u64,
}

/// Parse one overview row: 8 tab-separated fields.
///
/// A row whose article-number field is missing or non-numeric is useless
/// and fails the parse; the trailing numeric fields degrade to 0 so one
/// sloppy server field does not discard an otherwise good record.
pub fn parse_overview_record(line: &str) -> Result<OverviewRecord> {
    let mut fields = line.split('\t');
    let article_number = fields
        .next()
        .and_then(|f| f.trim().parse().ok())
        .ok_or_else(|| {
            NntpError::MalformedResponse(format!(
                "overview row without an article number: {:?}",
                line.chars().take(100).collect::<String>()
            ))
        })?;

    let mut text = || fields.next().unwrap_or("").to_string();
    let subject = text();
    let from = text();
    let date = text();
    let message_id = text();
    let references = text();
    let bytes = fields.next().and_then(|f| f.trim().parse().ok()).unwrap_or(0);
    let lines = fields.next().and_then(|f| f.trim().parse().ok()).unwrap_or(0);

    Ok(OverviewRecord {
        article_number,
        subject,
        from,
        date,
        message_id,
        references,
        bytes,
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_row() {
        let row = "5\tHello\talice@x\tMon\t<id5@x>\t\t100\t10";
        let rec = parse_overview_record(row).unwrap();
        assert_eq!(rec.article_number, 5);
        assert_eq!(rec.subject, "Hello");
        assert_eq!(rec.from, "alice@x");
        assert_eq!(rec.date, "Mon");
        assert_eq!(rec.message_id, "<id5@x>");
        assert_eq!(rec.references, "");
        assert_eq!(rec.bytes, 100);
        assert_eq!(rec.lines, 10);
    }

    #[test]
    fn test_non_numeric_counts_default_to_zero() {
        let row = "5\tHello\talice@x\tMon\t<id5@x>\t\tnot-a-number\t";
        let rec = parse_overview_record(row).unwrap();
        assert_eq!(rec.bytes, 0);
        assert_eq!(rec.lines, 0);
    }

    #[test]
    fn test_short_row_degrades() {
        let rec = parse_overview_record("7\tSubject only").unwrap();
        assert_eq!(rec.article_number, 7);
        assert_eq!(rec.subject, "Subject only");
        assert_eq!(rec.from, "");
        assert_eq!(rec.bytes, 0);
    }

    #[test]
    fn test_missing_article_number_is_fatal() {
        assert!(parse_overview_record("").is_err());
        assert!(parse_overview_record("x\tHello").is_err());
        assert!(parse_overview_record("\tHello\talice@x").is_err());
    }
}
