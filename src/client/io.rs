//! Line framing over the transport stream
//!
//! Outbound: one CRLF-terminated command line per write. Inbound: either a
//! single status line, or a status line followed by a dot-terminated block
//! with dot-stuffing undone. Lines are length-capped so a misbehaving peer
//! cannot grow a single line without bound.

use super::NntpClient;
use crate::commands;
use crate::error::{NntpError, Result};
use crate::response::{NntpMultilineResponse, NntpResponse};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::trace;

/// Upper bound on a single wire line, terminator included
const MAX_LINE_LENGTH: usize = 32 * 1024;

/// Undo NNTP dot-stuffing on a received content line (leading ".." → ".")
fn strip_dot_stuffing(line: &str) -> &str {
    if line.starts_with("..") { &line[1..] } else { line }
}

impl<S: AsyncRead + AsyncWrite + Unpin> NntpClient<S> {
    /// Send one command line (already CRLF-terminated)
    pub(super) async fn send_command(&mut self, command: &str) -> Result<()> {
        trace!("C: {}", command.trim_end());
        self.stream.get_mut().write_all(command.as_bytes()).await?;
        self.stream.get_mut().flush().await?;
        Ok(())
    }

    /// Read one CRLF-terminated line, returned without the terminator
    async fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::with_capacity(512);
        let mut limited = (&mut self.stream).take((MAX_LINE_LENGTH) as u64);
        let n = limited.read_until(b'\n', &mut buf).await?;

        if n == 0 {
            return Err(NntpError::Framing(
                "connection closed while awaiting a line".to_string(),
            ));
        }
        if !buf.ends_with(b"\n") {
            return if buf.len() >= MAX_LINE_LENGTH {
                Err(NntpError::Framing(format!(
                    "line exceeds {} bytes",
                    MAX_LINE_LENGTH
                )))
            } else {
                Err(NntpError::Framing(
                    "connection closed mid-line".to_string(),
                ))
            };
        }

        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        let line = String::from_utf8_lossy(&buf).into_owned();
        trace!("S: {}", line);
        Ok(line)
    }

    /// Read a single-line response
    pub(super) async fn read_response(&mut self) -> Result<NntpResponse> {
        let line = self.read_line().await?;
        commands::parse_single_response(&line)
    }

    /// Read a response that may carry a dot-terminated block.
    ///
    /// The block is consumed only when the status code is one of
    /// `data_codes` — the codes whose definition promises a body. Any
    /// other code yields the status line with an empty body, leaving the
    /// stream positioned at the next response.
    pub(super) async fn read_data_response(
        &mut self,
        data_codes: &[u16],
    ) -> Result<NntpMultilineResponse> {
        let response = self.read_response().await?;

        let mut lines = Vec::new();
        if data_codes.contains(&response.code) {
            loop {
                let line = self.read_line().await?;
                if line == "." {
                    break;
                }
                lines.push(strip_dot_stuffing(&line).to_string());
            }
        }

        Ok(NntpMultilineResponse { response, lines })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_dot_stuffing() {
        assert_eq!(strip_dot_stuffing("plain line"), "plain line");
        assert_eq!(strip_dot_stuffing("..starts with dot"), ".starts with dot");
        assert_eq!(strip_dot_stuffing("..."), "..");
        assert_eq!(strip_dot_stuffing(".."), ".");
        // A lone "." is the terminator; it never reaches this function
        assert_eq!(strip_dot_stuffing(".x"), ".x");
    }

    #[test]
    fn test_max_line_length_is_generous() {
        // Overview rows and header lines fit comfortably; only a peer
        // streaming garbage without a terminator trips the cap.
        assert!(MAX_LINE_LENGTH >= 8 * 1024);
    }
}
