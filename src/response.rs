//! NNTP response types and status codes

/// Classification of a response code by its leading digit (RFC 3977 §3.2)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// 1xx - Informative message
    Informative,
    /// 2xx - Command completed successfully
    Success,
    /// 3xx - Command accepted so far, send the rest
    Continue,
    /// 4xx - Command correct but could not be performed
    CommandError,
    /// 5xx - Command unknown, unsupported, or a server fault
    ServerError,
}

impl ResponseKind {
    /// Classify a 3-digit response code by its first digit.
    ///
    /// Codes outside 100-599 never reach this point; the status-line
    /// parser rejects them as malformed.
    pub fn from_code(code: u16) -> ResponseKind {
        match code / 100 {
            1 => ResponseKind::Informative,
            2 => ResponseKind::Success,
            3 => ResponseKind::Continue,
            4 => ResponseKind::CommandError,
            _ => ResponseKind::ServerError,
        }
    }
}

/// Single-line NNTP response: a 3-digit status code plus message text
///
/// The message has had NUL, CR, and LF stripped (RFC 3977 §3.1.1 forbids
/// them inside a line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NntpResponse {
    /// 3-digit NNTP response code (100-599)
    pub code: u16,
    /// Status message from the server
    pub message: String,
}

impl NntpResponse {
    /// Classification band for this response's code
    pub fn kind(&self) -> ResponseKind {
        ResponseKind::from_code(self.code)
    }

    /// Check if the response indicates success (2xx)
    pub fn is_success(&self) -> bool {
        self.kind() == ResponseKind::Success
    }

    /// Check if the response indicates continuation (3xx)
    pub fn is_continuation(&self) -> bool {
        self.kind() == ResponseKind::Continue
    }

    /// Check if the response indicates an error (4xx or 5xx)
    pub fn is_error(&self) -> bool {
        matches!(
            self.kind(),
            ResponseKind::CommandError | ResponseKind::ServerError
        )
    }
}

impl std::fmt::Display for NntpResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code, self.message)
    }
}

/// Multi-line NNTP response: a status line plus the dot-terminated block
///
/// `lines` is fully materialized, in wire order, with dot-stuffing already
/// undone and the `.` terminator excluded. It is empty when the status
/// code did not carry a body.
#[derive(Debug, Clone)]
pub struct NntpMultilineResponse {
    /// The status line
    pub response: NntpResponse,
    /// Content lines of the dot-terminated block
    pub lines: Vec<String>,
}

impl NntpMultilineResponse {
    /// Response code shorthand
    pub fn code(&self) -> u16 {
        self.response.code
    }
}

/// NNTP response codes (RFC 3977, RFC 4643)
#[allow(dead_code)]
pub mod codes {
    // 1xx - Informational
    /// Capability list follows (RFC 3977 Section 5.2)
    pub const CAPABILITY_LIST: u16 = 101;
    /// Server date/time (RFC 3977 Section 7.1)
    pub const SERVER_DATE: u16 = 111;

    // 2xx - Success
    /// Service available, posting allowed
    pub const READY_POSTING_ALLOWED: u16 = 200;
    /// Service available, posting prohibited
    pub const READY_NO_POSTING: u16 = 201;
    /// Closing connection (QUIT)
    pub const CLOSING_CONNECTION: u16 = 205;
    /// Group selected
    pub const GROUP_SELECTED: u16 = 211;
    /// List information follows (RFC 3977 Section 7.6)
    pub const LIST_INFORMATION_FOLLOWS: u16 = 215;
    /// Article follows
    pub const ARTICLE_FOLLOWS: u16 = 220;
    /// Headers follow
    pub const HEAD_FOLLOWS: u16 = 221;
    /// Body follows
    pub const BODY_FOLLOWS: u16 = 222;
    /// Article exists and is selected
    pub const ARTICLE_STAT: u16 = 223;
    /// Overview information follows
    pub const OVERVIEW_INFO_FOLLOWS: u16 = 224;
    /// List of new articles follows (RFC 3977 Section 7.4)
    pub const NEW_ARTICLE_LIST_FOLLOWS: u16 = 230;
    /// List of new newsgroups follows (RFC 3977 Section 7.3)
    pub const NEW_NEWSGROUPS_FOLLOW: u16 = 231;
    /// Article posted successfully (RFC 3977 Section 6.3.1)
    pub const ARTICLE_POSTED: u16 = 240;
    /// Authentication accepted
    pub const AUTH_ACCEPTED: u16 = 281;

    // 3xx - Continuation
    /// Send article to be posted
    pub const SEND_ARTICLE: u16 = 340;
    /// Password required
    pub const AUTH_CONTINUE: u16 = 381;

    // 4xx - Command errors
    /// Service temporarily unavailable
    pub const SERVICE_UNAVAILABLE: u16 = 400;
    /// No such newsgroup
    pub const NO_SUCH_GROUP: u16 = 411;
    /// No newsgroup selected
    pub const NO_GROUP_SELECTED: u16 = 412;
    /// Current article number is invalid
    pub const NO_CURRENT_ARTICLE: u16 = 420;
    /// No next article in this group
    pub const NO_NEXT_ARTICLE: u16 = 421;
    /// No previous article in this group
    pub const NO_PREV_ARTICLE: u16 = 422;
    /// No article with that number
    pub const NO_SUCH_ARTICLE_NUMBER: u16 = 423;
    /// No article with that message-id
    pub const NO_SUCH_ARTICLE_ID: u16 = 430;
    /// Posting not permitted (RFC 3977 Section 6.3.1)
    pub const POSTING_NOT_PERMITTED: u16 = 440;
    /// Posting failed (RFC 3977 Section 6.3.1)
    pub const POSTING_FAILED: u16 = 441;
    /// Authentication rejected
    pub const AUTH_REJECTED: u16 = 481;
    /// Authentication commands issued out of sequence
    pub const AUTH_OUT_OF_SEQUENCE: u16 = 482;
    /// Encryption or stronger authentication required (RFC 4643)
    pub const ENCRYPTION_REQUIRED: u16 = 483;

    // 5xx - Server errors
    /// Access denied / command unavailable
    pub const ACCESS_DENIED: u16 = 502;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resp(code: u16) -> NntpResponse {
        NntpResponse {
            code,
            message: String::new(),
        }
    }

    #[test]
    fn test_kind_bands() {
        assert_eq!(resp(101).kind(), ResponseKind::Informative);
        assert_eq!(resp(200).kind(), ResponseKind::Success);
        assert_eq!(resp(340).kind(), ResponseKind::Continue);
        assert_eq!(resp(412).kind(), ResponseKind::CommandError);
        assert_eq!(resp(502).kind(), ResponseKind::ServerError);
    }

    #[test]
    fn test_is_success() {
        assert!(resp(200).is_success());
        assert!(resp(299).is_success());
        assert!(!resp(199).is_success());
        assert!(!resp(300).is_success());
    }

    #[test]
    fn test_is_continuation() {
        assert!(resp(381).is_continuation());
        assert!(!resp(281).is_continuation());
    }

    #[test]
    fn test_is_error() {
        assert!(resp(481).is_error());
        assert!(resp(500).is_error());
        assert!(!resp(223).is_error());
        assert!(!resp(111).is_error());
    }

    #[test]
    fn test_display() {
        let r = NntpResponse {
            code: 211,
            message: "10 1 10 misc.test".to_string(),
        };
        assert_eq!(r.to_string(), "211 10 1 10 misc.test");
    }
}
