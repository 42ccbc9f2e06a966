//! NNTP command builders and response payload parsers
//!
//! Builders produce complete CRLF-terminated request lines; the parsers
//! interpret the per-command payload grammars (status-line tokens,
//! tab-delimited overview rows, catalog rows).

pub mod group;
pub mod list;
pub mod over;
pub mod response;

pub use group::{GroupStatus, parse_group_status};
pub use list::{ActiveGroup, ActiveTimesEntry, NewsgroupEntry};
pub use over::{OverviewRecord, parse_overview_record};
pub use response::{parse_response_line, parse_single_response, sanitize_message};

use crate::error::{NntpError, Result};

/// Reject blank command arguments before anything hits the wire
pub(crate) fn require_arg<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        Err(NntpError::InvalidArgument(format!(
            "{} must not be blank",
            name
        )))
    } else {
        Ok(value)
    }
}

// Session negotiation

/// Build CAPABILITIES command (RFC 3977 §5.2)
pub fn capabilities() -> &'static str {
    "CAPABILITIES\r\n"
}

/// Build MODE READER command (RFC 3977 §5.3)
pub fn mode_reader() -> &'static str {
    "MODE READER\r\n"
}

/// Build QUIT command
pub fn quit() -> &'static str {
    "QUIT\r\n"
}

/// Build DATE command (RFC 3977 §7.1)
pub fn date() -> &'static str {
    "DATE\r\n"
}

// Group selection and navigation

/// Build GROUP command
pub fn group(newsgroup: &str) -> String {
    format!("GROUP {}\r\n", newsgroup)
}

/// Build LISTGROUP command, optionally constrained to a range (RFC 3977 §6.1.2)
pub fn listgroup(newsgroup: &str, range: Option<&str>) -> String {
    match range {
        Some(r) => format!("LISTGROUP {} {}\r\n", newsgroup, r),
        None => format!("LISTGROUP {}\r\n", newsgroup),
    }
}

/// Build LAST command
pub fn last() -> &'static str {
    "LAST\r\n"
}

/// Build NEXT command
pub fn next() -> &'static str {
    "NEXT\r\n"
}

// Article retrieval, three addressing forms each

/// Build ARTICLE command addressing a number or message-id
pub fn article(arg: &str) -> String {
    format!("ARTICLE {}\r\n", arg)
}

/// Build ARTICLE command for the current article
pub fn article_current() -> &'static str {
    "ARTICLE\r\n"
}

/// Build HEAD command addressing a number or message-id
pub fn head(arg: &str) -> String {
    format!("HEAD {}\r\n", arg)
}

/// Build HEAD command for the current article
pub fn head_current() -> &'static str {
    "HEAD\r\n"
}

/// Build BODY command addressing a number or message-id
pub fn body(arg: &str) -> String {
    format!("BODY {}\r\n", arg)
}

/// Build BODY command for the current article
pub fn body_current() -> &'static str {
    "BODY\r\n"
}

/// Build STAT command addressing a number or message-id
pub fn stat(arg: &str) -> String {
    format!("STAT {}\r\n", arg)
}

/// Build STAT command for the current article
pub fn stat_current() -> &'static str {
    "STAT\r\n"
}

/// Build OVER or XOVER command for an article range (RFC 3977 §8.3)
///
/// The two names are a historical alias for identical wire behavior.
pub fn over(xover: bool, low: u64, high: u64) -> String {
    let name = if xover { "XOVER" } else { "OVER" };
    format!("{} {}-{}\r\n", name, low, high)
}

// Catalogs

/// Build LIST command, optionally with a keyword and argument
///
/// `list(None, None)` is the bare LIST; keywords like `ACTIVE`,
/// `ACTIVE.TIMES`, and `NEWSGROUPS` select other catalogs, with an
/// optional wildmat filter.
pub fn list(keyword: Option<&str>, argument: Option<&str>) -> String {
    match (keyword, argument) {
        (None, _) => "LIST\r\n".to_string(),
        (Some(k), None) => format!("LIST {}\r\n", k),
        (Some(k), Some(a)) => format!("LIST {} {}\r\n", k, a),
    }
}

/// Build NEWGROUPS command (RFC 3977 §7.3)
pub fn newgroups(date: &str, time: &str) -> String {
    format!("NEWGROUPS {} {} GMT\r\n", date, time)
}

/// Build NEWNEWS command (RFC 3977 §7.4)
pub fn newnews(wildmat: &str, date: &str, time: &str) -> String {
    format!("NEWNEWS {} {} {} GMT\r\n", wildmat, date, time)
}

// Authentication and posting

/// Build AUTHINFO USER command (RFC 4643 §2.3)
pub fn authinfo_user(username: &str) -> String {
    format!("AUTHINFO USER {}\r\n", username)
}

/// Build AUTHINFO PASS command (RFC 4643 §2.3)
pub fn authinfo_pass(password: &str) -> String {
    format!("AUTHINFO PASS {}\r\n", password)
}

/// Build AUTHINFO SASL command with an initial response (RFC 4643 §2.4)
pub fn authinfo_sasl_ir(mechanism: &str, initial_response: &str) -> String {
    format!("AUTHINFO SASL {} {}\r\n", mechanism, initial_response)
}

/// Build POST command (RFC 3977 §6.3.1)
pub fn post() -> &'static str {
    "POST\r\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_builders() {
        assert_eq!(group("misc.test"), "GROUP misc.test\r\n");
        assert_eq!(
            listgroup("misc.test", Some("1-")),
            "LISTGROUP misc.test 1-\r\n"
        );
        assert_eq!(listgroup("misc.test", None), "LISTGROUP misc.test\r\n");
        assert_eq!(article("<123@example>"), "ARTICLE <123@example>\r\n");
        assert_eq!(article("42"), "ARTICLE 42\r\n");
        assert_eq!(article_current(), "ARTICLE\r\n");
        assert_eq!(head("<123@example>"), "HEAD <123@example>\r\n");
        assert_eq!(body_current(), "BODY\r\n");
        assert_eq!(stat("7"), "STAT 7\r\n");
        assert_eq!(over(false, 1, 100), "OVER 1-100\r\n");
        assert_eq!(over(true, 1, 100), "XOVER 1-100\r\n");
        assert_eq!(authinfo_user("alice"), "AUTHINFO USER alice\r\n");
        assert_eq!(authinfo_pass("secret"), "AUTHINFO PASS secret\r\n");
        assert_eq!(quit(), "QUIT\r\n");
    }

    #[test]
    fn test_list_variants() {
        assert_eq!(list(None, None), "LIST\r\n");
        assert_eq!(list(Some("ACTIVE"), None), "LIST ACTIVE\r\n");
        assert_eq!(
            list(Some("ACTIVE"), Some("comp.*")),
            "LIST ACTIVE comp.*\r\n"
        );
        assert_eq!(list(Some("ACTIVE.TIMES"), None), "LIST ACTIVE.TIMES\r\n");
        assert_eq!(list(Some("NEWSGROUPS"), None), "LIST NEWSGROUPS\r\n");
    }

    #[test]
    fn test_time_based_builders() {
        assert_eq!(
            newgroups("20240101", "000000"),
            "NEWGROUPS 20240101 000000 GMT\r\n"
        );
        assert_eq!(
            newnews("comp.*", "20240101", "120000"),
            "NEWNEWS comp.* 20240101 120000 GMT\r\n"
        );
    }

    #[test]
    fn test_require_arg() {
        assert!(require_arg("newsgroup", "misc.test").is_ok());
        assert!(require_arg("newsgroup", "").is_err());
        assert!(require_arg("newsgroup", "   ").is_err());
    }
}
