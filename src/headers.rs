//! Header extraction from ARTICLE/HEAD response bodies
//!
//! The header section of an article runs from the first line to the first
//! empty line; everything after that is body text and ignored here. Header
//! lines split at the first `": "` into name and value. Repeated names
//! (multiple `Received:` lines, say) are all kept, in original order.

/// Ordered sequence of (name, value) header pairs
#[derive(Debug, Clone, Default)]
pub struct HeaderBlock {
    entries: Vec<(String, String)>,
}

impl HeaderBlock {
    /// Extract headers from response lines.
    ///
    /// Lines without a `": "` separator inside the header section are
    /// skipped rather than treated as an error; real-world articles carry
    /// the odd malformed line and losing one header beats losing the batch.
    pub fn parse(lines: &[String]) -> Self {
        let mut entries = Vec::new();
        for line in lines {
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(": ") {
                entries.push((name.to_string(), value.to_string()));
            }
        }
        HeaderBlock { entries }
    }

    /// First value for a header name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// All values for a header name, in original order (case-insensitive)
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// All (name, value) pairs in original order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of header entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no headers were found
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(lines: &[&str]) -> HeaderBlock {
        HeaderBlock::parse(&lines.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_body_excluded() {
        let h = block(&["Subject: Hi", "Message-ID: <a@b>", "", "body line"]);
        assert_eq!(h.get("Subject"), Some("Hi"));
        assert_eq!(h.get("Message-ID"), Some("<a@b>"));
        assert_eq!(h.len(), 2);
        // "body line" is after the separator and must not appear
        assert_eq!(h.get("body line"), None);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let h = block(&["Subject: Hi"]);
        assert_eq!(h.get("subject"), Some("Hi"));
        assert_eq!(h.get("SUBJECT"), Some("Hi"));
        assert_eq!(h.get("From"), None);
    }

    #[test]
    fn test_repeated_headers_survive_in_order() {
        let h = block(&[
            "Received: from a",
            "Subject: Hi",
            "Received: from b",
            "",
        ]);
        let received: Vec<&str> = h.get_all("received").collect();
        assert_eq!(received, vec!["from a", "from b"]);
        assert_eq!(h.get("Received"), Some("from a"));
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let h = block(&["Subject: Re: the: thing"]);
        assert_eq!(h.get("Subject"), Some("Re: the: thing"));
    }

    #[test]
    fn test_malformed_line_skipped() {
        let h = block(&["Subject: Hi", "not a header", "From: x@y", ""]);
        assert_eq!(h.len(), 2);
        assert_eq!(h.get("From"), Some("x@y"));
    }

    #[test]
    fn test_headers_only_no_separator() {
        let h = block(&["Subject: Hi", "From: x@y"]);
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let h = block(&[]);
        assert!(h.is_empty());
        assert_eq!(h.get("Subject"), None);
    }
}
