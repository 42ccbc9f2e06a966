//! Article submission (POST)
//!
//! POST is the one two-phase command besides authentication: the server
//! first consents with 340, then the article travels as a dot-stuffed
//! block, then 240 confirms acceptance. Refusal at either phase (440,
//! 441) is a result; a greeting that already denied posting fails before
//! anything is written.

use super::NntpClient;
use crate::commands;
use crate::error::{NntpError, Result};
use crate::response::{NntpResponse, codes};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::debug;

/// Outcome of a POST exchange
#[derive(Debug, Clone)]
pub struct PostResponse {
    /// The final status line (340-phase refusal or the post-article verdict)
    pub response: NntpResponse,
    /// Whether the article was accepted (240)
    pub posted: bool,
}

impl PostResponse {
    /// True when the server accepted the article
    pub fn is_posted(&self) -> bool {
        self.posted
    }
}

/// Render an article as wire lines: headers, separator, dot-stuffed body,
/// terminator. Body line breaks of any flavor are normalized to CRLF.
fn render_article(newsgroup: &str, subject: &str, from: &str, content: &str) -> String {
    let mut wire = String::with_capacity(content.len() + 128);
    wire.push_str(&format!("From: {}\r\n", from));
    wire.push_str(&format!("Newsgroups: {}\r\n", newsgroup));
    wire.push_str(&format!("Subject: {}\r\n", subject));
    wire.push_str("\r\n");

    for line in content.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.starts_with('.') {
            wire.push('.');
        }
        wire.push_str(line);
        wire.push_str("\r\n");
    }
    wire.push_str(".\r\n");
    wire
}

impl<S: AsyncRead + AsyncWrite + Unpin> NntpClient<S> {
    /// Post an article.
    ///
    /// The header section is built from the three required fields; the
    /// content becomes the body with dot-stuffing applied. Calling this
    /// after a greeting or MODE READER that denied posting is a
    /// [`NntpError::ProtocolState`] fault.
    pub async fn post(
        &mut self,
        newsgroup: &str,
        subject: &str,
        from: &str,
        content: &str,
    ) -> Result<PostResponse> {
        let newsgroup = commands::require_arg("newsgroup", newsgroup)?;
        let subject = commands::require_arg("subject", subject)?;
        let from = commands::require_arg("from", from)?;

        if !self.session.can_post() {
            return Err(NntpError::ProtocolState(
                "server denied posting permission on this session".to_string(),
            ));
        }
        debug!("POST to {}", newsgroup);

        self.send_command(commands::post()).await?;
        let response = self.read_response().await?;
        match response.code {
            codes::SEND_ARTICLE => {}
            codes::POSTING_NOT_PERMITTED => {
                return Ok(PostResponse {
                    response,
                    posted: false,
                });
            }
            _ => return Err(NntpError::unexpected(response.code, response.message)),
        }

        let article = render_article(newsgroup, subject, from, content);
        self.stream.get_mut().write_all(article.as_bytes()).await?;
        self.stream.get_mut().flush().await?;

        let response = self.read_response().await?;
        match response.code {
            codes::ARTICLE_POSTED => Ok(PostResponse {
                response,
                posted: true,
            }),
            codes::POSTING_FAILED => Ok(PostResponse {
                response,
                posted: false,
            }),
            _ => Err(NntpError::unexpected(response.code, response.message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_article_layout() {
        let wire = render_article("misc.test", "hello", "a@b.example", "line one\nline two");
        assert_eq!(
            wire,
            "From: a@b.example\r\n\
             Newsgroups: misc.test\r\n\
             Subject: hello\r\n\
             \r\n\
             line one\r\n\
             line two\r\n\
             .\r\n"
        );
    }

    #[test]
    fn test_render_article_dot_stuffs_body() {
        let wire = render_article("misc.test", "s", "a@b", ".leading dot\n..two dots\nplain");
        assert!(wire.contains("\r\n..leading dot\r\n"));
        assert!(wire.contains("\r\n...two dots\r\n"));
        assert!(wire.contains("\r\nplain\r\n"));
    }

    #[test]
    fn test_render_article_normalizes_crlf_body() {
        let wire = render_article("misc.test", "s", "a@b", "one\r\ntwo");
        assert!(wire.ends_with("one\r\ntwo\r\n.\r\n"));
        assert!(!wire.contains("\r\r"));
    }
}
