//! Status-line parsing and message sanitization

use crate::error::{NntpError, Result};
use crate::response::NntpResponse;

/// Strip octets that RFC 3977 §3.1.1 forbids inside a line.
///
/// A conforming server never sends these, but a smuggled NUL/CR/LF in a
/// status message must not survive into results that callers may log or
/// re-emit. They are stripped, not rejected.
pub fn sanitize_message(message: &str) -> String {
    if message.contains(['\0', '\r', '\n']) {
        message.replace(['\0', '\r', '\n'], "")
    } else {
        message.to_string()
    }
}

/// Parse an NNTP status line into code and sanitized message
///
/// The first token must be exactly three ASCII digits with a leading digit
/// of 1-5; anything else is a malformed response, including over-long
/// codes like "99999" that would otherwise truncate-parse.
pub fn parse_response_line(line: &str) -> Result<(u16, String)> {
    let bytes = line.as_bytes();
    if bytes.len() < 3 || !bytes[..3].iter().all(u8::is_ascii_digit) {
        return Err(NntpError::MalformedResponse(format!(
            "status line does not start with a 3-digit code: {:?}",
            line.chars().take(100).collect::<String>()
        )));
    }
    if bytes.len() > 3 && bytes[3] != b' ' {
        return Err(NntpError::MalformedResponse(format!(
            "status code not followed by a space: {:?}",
            line.chars().take(100).collect::<String>()
        )));
    }

    // Safe to slice: the first 3 bytes are ASCII digits
    let code: u16 = line[..3]
        .parse()
        .map_err(|_| NntpError::MalformedResponse(line.to_string()))?;
    if !(100..=599).contains(&code) {
        return Err(NntpError::MalformedResponse(format!(
            "response code {} outside 100-599",
            code
        )));
    }

    let message = if line.len() > 4 { &line[4..] } else { "" };
    Ok((code, sanitize_message(message)))
}

/// Parse a single-line NNTP response
pub fn parse_single_response(line: &str) -> Result<NntpResponse> {
    let (code, message) = parse_response_line(line)?;
    Ok(NntpResponse { code, message })
}
