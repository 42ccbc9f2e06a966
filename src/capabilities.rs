//! Server capability list (RFC 3977 Section 5.2)
//!
//! The CAPABILITIES response is an ordered list of capability labels, each
//! optionally followed by arguments. Order is preserved as advertised;
//! lookups are case-insensitive.

/// Capabilities advertised by an NNTP server
#[derive(Debug, Clone, Default)]
pub struct Capabilities {
    /// Capability lines in advertised order, e.g. `["VERSION 2", "READER"]`
    tokens: Vec<String>,
}

impl Capabilities {
    /// Parse capabilities from the CAPABILITIES response body
    pub fn parse(lines: &[String]) -> Self {
        let tokens = lines
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        Capabilities { tokens }
    }

    /// Check whether a capability label is advertised (case-insensitive).
    ///
    /// Only the label (first token of each line) is matched, so
    /// `has("COMPRESS")` matches a `COMPRESS DEFLATE` line.
    pub fn has(&self, label: &str) -> bool {
        self.tokens.iter().any(|line| {
            line.split_whitespace()
                .next()
                .is_some_and(|l| l.eq_ignore_ascii_case(label))
        })
    }

    /// Arguments of a capability line, if the label is advertised
    pub fn args(&self, label: &str) -> Option<Vec<&str>> {
        self.tokens.iter().find_map(|line| {
            let mut parts = line.split_whitespace();
            match parts.next() {
                Some(l) if l.eq_ignore_ascii_case(label) => Some(parts.collect()),
                _ => None,
            }
        })
    }

    /// Capability lines in advertised order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Number of advertised capability lines
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the server advertised no capabilities at all
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
