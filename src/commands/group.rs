//! GROUP/LISTGROUP status-line parsing

use crate::error::{NntpError, Result};

/// Group summary from a 211 status line
///
/// The watermark convention `high == low - 1` denotes a group that exists
/// but currently holds no articles; it is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupStatus {
    /// Newsgroup name as echoed by the server
    pub name: String,
    /// Estimated number of articles in the group
    pub count: u64,
    /// Lowest valid article number
    pub low: u64,
    /// Highest valid article number
    pub high: u64,
}

impl GroupStatus {
    /// True when the group currently holds no articles
    pub fn is_empty(&self) -> bool {
        self.high + 1 == self.low
    }
}

fn numeric_token(tokens: &[&str], idx: usize, what: &str, line: &str) -> Result<u64> {
    tokens
        .get(idx)
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| {
            NntpError::MalformedResponse(format!(
                "cannot parse {} from GROUP status line: {:?}",
                what, line
            ))
        })
}

/// Parse the 4-token payload of a 211 response: `count low high name`
pub fn parse_group_status(message: &str) -> Result<GroupStatus> {
    let tokens: Vec<&str> = message.split_whitespace().collect();
    let count = numeric_token(&tokens, 0, "count", message)?;
    let low = numeric_token(&tokens, 1, "low watermark", message)?;
    let high = numeric_token(&tokens, 2, "high watermark", message)?;
    let name = tokens
        .get(3)
        .ok_or_else(|| {
            NntpError::MalformedResponse(format!("GROUP status line has no name: {:?}", message))
        })?
        .to_string();

    Ok(GroupStatus {
        name,
        count,
        low,
        high,
    })
}

/// Parse the LISTGROUP body: one article number per line, in order
pub fn parse_article_numbers(lines: &[String]) -> Result<Vec<u64>> {
    lines
        .iter()
        .map(|line| {
            line.trim().parse().map_err(|_| {
                NntpError::MalformedResponse(format!("bad article number in LISTGROUP: {:?}", line))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_group_status() {
        let status = parse_group_status("10 1 10 comp.test").unwrap();
        assert_eq!(status.count, 10);
        assert_eq!(status.low, 1);
        assert_eq!(status.high, 10);
        assert_eq!(status.name, "comp.test");
        assert!(!status.is_empty());
    }

    #[test]
    fn test_empty_group_watermarks() {
        // high == low - 1 marks an empty group, not an error
        let status = parse_group_status("0 5 4 alt.empty").unwrap();
        assert!(status.is_empty());
    }

    #[test]
    fn test_malformed_status_is_an_error() {
        assert!(parse_group_status("x 1 10 comp.test").is_err());
        assert!(parse_group_status("10 y 10 comp.test").is_err());
        assert!(parse_group_status("10 1 z comp.test").is_err());
        assert!(parse_group_status("10 1 10").is_err());
        assert!(parse_group_status("").is_err());
    }

    #[test]
    fn test_parse_article_numbers() {
        let lines: Vec<String> = ["1", "2", "5", "30"].iter().map(|s| s.to_string()).collect();
        assert_eq!(parse_article_numbers(&lines).unwrap(), vec![1, 2, 5, 30]);

        let bad: Vec<String> = vec!["1".into(), "oops".into()];
        assert!(parse_article_numbers(&bad).is_err());
    }
}
