//! NNTP error types
//!
//! Expected negative protocol outcomes (no such article, authentication
//! rejected, empty catalog, ...) are *not* errors; they come back as typed
//! results carrying the server's response. This enum covers the genuinely
//! exceptional cases: caller misuse, broken framing, non-conformant
//! payloads, and response codes a command's definition does not allow.

use thiserror::Error;

/// NNTP protocol and connection errors
#[derive(Error, Debug)]
pub enum NntpError {
    /// IO error during network operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TLS error during secure connection
    #[error("TLS error: {0}")]
    Tls(String),

    /// Caller supplied a blank or malformed parameter; nothing was sent
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Stream closed mid-response or a line exceeded the size limit
    #[error("framing error: {0}")]
    Framing(String),

    /// Response code was well-formed but its payload does not match the
    /// command's grammar
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Operation is invalid given the current session state
    #[error("protocol state error: {0}")]
    ProtocolState(String),

    /// Response code outside the set this command's specification defines
    #[error("unexpected response code {code}: {message}")]
    UnexpectedResponse {
        /// NNTP response code
        code: u16,
        /// Message text from the server
        message: String,
    },
}

/// Result type alias using NntpError
pub type Result<T> = std::result::Result<T, NntpError>;

impl NntpError {
    pub(crate) fn unexpected(code: u16, message: impl Into<String>) -> Self {
        NntpError::UnexpectedResponse {
            code,
            message: message.into(),
        }
    }
}
