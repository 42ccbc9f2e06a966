//! Catalog row grammars: LIST ACTIVE / NEWGROUPS, LIST ACTIVE.TIMES,
//! LIST NEWSGROUPS

use crate::error::{NntpError, Result};

/// One `group high low status` row (LIST ACTIVE, NEWGROUPS)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveGroup {
    /// Newsgroup name
    pub name: String,
    /// Highest article number
    pub high: u64,
    /// Lowest article number
    pub low: u64,
    /// Posting status field ("y", "n", "m", or an "=alias" form)
    pub status: String,
}

/// One `group epoch creator` row (LIST ACTIVE.TIMES)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTimesEntry {
    /// Newsgroup name
    pub name: String,
    /// Creation time as seconds since the Unix epoch
    pub created_epoch: i64,
    /// Who created the group
    pub creator: String,
}

/// One `group description` row (LIST NEWSGROUPS)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsgroupEntry {
    /// Newsgroup name
    pub name: String,
    /// Free-text description (may be empty)
    pub description: String,
}

/// Parse a LIST ACTIVE / NEWGROUPS body into rows
pub fn parse_active_groups(lines: &[String]) -> Result<Vec<ActiveGroup>> {
    lines.iter().map(|l| parse_active_row(l)).collect()
}

fn parse_active_row(line: &str) -> Result<ActiveGroup> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err(NntpError::MalformedResponse(format!(
            "active-group row needs 4 tokens: {:?}",
            line
        )));
    }
    let high = tokens[1].parse().map_err(|_| {
        NntpError::MalformedResponse(format!("bad high watermark in row: {:?}", line))
    })?;
    let low = tokens[2].parse().map_err(|_| {
        NntpError::MalformedResponse(format!("bad low watermark in row: {:?}", line))
    })?;

    Ok(ActiveGroup {
        name: tokens[0].to_string(),
        high,
        low,
        status: tokens[3].to_string(),
    })
}

/// Parse a LIST ACTIVE.TIMES body into rows
pub fn parse_active_times(lines: &[String]) -> Result<Vec<ActiveTimesEntry>> {
    lines
        .iter()
        .map(|line| {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < 3 {
                return Err(NntpError::MalformedResponse(format!(
                    "active.times row needs 3 tokens: {:?}",
                    line
                )));
            }
            let created_epoch = tokens[1].parse().map_err(|_| {
                NntpError::MalformedResponse(format!("bad epoch in active.times row: {:?}", line))
            })?;
            Ok(ActiveTimesEntry {
                name: tokens[0].to_string(),
                created_epoch,
                creator: tokens[2].to_string(),
            })
        })
        .collect()
}

/// Parse a LIST NEWSGROUPS body into rows.
///
/// The name ends at the first run of whitespace; everything after it is
/// the description, verbatim. A row with no description yields an empty
/// one.
pub fn parse_newsgroup_descriptions(lines: &[String]) -> Vec<NewsgroupEntry> {
    lines
        .iter()
        .filter_map(|line| {
            let name = line.split([' ', '\t']).next()?;
            if name.is_empty() {
                return None;
            }
            let description = line[name.len()..].trim_start().to_string();
            Some(NewsgroupEntry {
                name: name.to_string(),
                description,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_active_groups() {
        let rows = lines(&["comp.lang.rust 12345 1000 y", "alt.mod 9 1 m"]);
        let groups = parse_active_groups(&rows).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "comp.lang.rust");
        assert_eq!(groups[0].high, 12345);
        assert_eq!(groups[0].low, 1000);
        assert_eq!(groups[0].status, "y");
        assert_eq!(groups[1].status, "m");
    }

    #[test]
    fn test_active_alias_status() {
        let rows = lines(&["junk.old 0 1 =junk.new"]);
        let groups = parse_active_groups(&rows).unwrap();
        assert_eq!(groups[0].status, "=junk.new");
    }

    #[test]
    fn test_active_malformed_row() {
        assert!(parse_active_groups(&lines(&["comp.test 10 1"])).is_err());
        assert!(parse_active_groups(&lines(&["comp.test ten 1 y"])).is_err());
    }

    #[test]
    fn test_parse_active_times() {
        let rows = lines(&["misc.test 930445408 <creatme@isc.org>"]);
        let entries = parse_active_times(&rows).unwrap();
        assert_eq!(entries[0].name, "misc.test");
        assert_eq!(entries[0].created_epoch, 930445408);
        assert_eq!(entries[0].creator, "<creatme@isc.org>");

        assert!(parse_active_times(&lines(&["misc.test soon <x@y>"])).is_err());
    }

    #[test]
    fn test_parse_newsgroup_descriptions() {
        let rows = lines(&[
            "comp.lang.rust\tThe Rust programming language",
            "misc.test General test group",
            "alt.silent",
        ]);
        let entries = parse_newsgroup_descriptions(&rows);
        assert_eq!(entries[0].name, "comp.lang.rust");
        assert_eq!(entries[0].description, "The Rust programming language");
        assert_eq!(entries[1].description, "General test group");
        assert_eq!(entries[2].description, "");
    }
}
