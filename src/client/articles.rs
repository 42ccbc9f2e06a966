//! Article retrieval and navigation (ARTICLE, HEAD, BODY, STAT, NEXT, LAST)
//!
//! Each command comes in three addressing forms — by number, by
//! message-id, and by the server's current pointer — kept as distinct
//! methods because their state-update and default-argument rules differ.
//! Negative outcomes (no such article, no group selected, end of group)
//! are results, not errors, and each invalidates exactly the mirrored
//! state its response code says no longer applies.

use super::NntpClient;
use crate::commands;
use crate::error::{NntpError, Result};
use crate::headers::HeaderBlock;
use crate::response::{NntpResponse, codes};
use crate::session::Invalidate;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::debug;

/// Where the server's current pointer landed after a command
///
/// On success at least one field is populated. `number` is `None` when
/// the server reported `0`, the sentinel for an article addressed by
/// message-id outside the selected group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pointer {
    /// Article number within the selected group
    pub number: Option<u64>,
    /// Message identifier
    pub message_id: Option<String>,
}

/// Result of STAT/NEXT/LAST
#[derive(Debug, Clone)]
pub struct PointerResponse {
    /// The status line
    pub response: NntpResponse,
    /// The new pointer; `None` on a negative outcome
    pub pointer: Option<Pointer>,
}

impl PointerResponse {
    /// True when the command selected an article
    pub fn is_found(&self) -> bool {
        self.pointer.is_some()
    }
}

/// Result of ARTICLE/HEAD/BODY
#[derive(Debug, Clone)]
pub struct ArticleResponse {
    /// The status line
    pub response: NntpResponse,
    /// Content lines; `None` on a negative outcome
    pub lines: Option<Vec<String>>,
}

impl ArticleResponse {
    /// True when the server returned article content
    pub fn is_found(&self) -> bool {
        self.lines.is_some()
    }

    /// Extract the header section (meaningful for ARTICLE and HEAD results)
    pub fn headers(&self) -> Option<HeaderBlock> {
        self.lines.as_deref().map(HeaderBlock::parse)
    }
}

/// Map a negative response code to the session state it invalidates.
///
/// This is the transition table for every retrieval and navigation
/// command: "no group selected" drops the group and pointer together,
/// the article-level failures drop only the pointer, and anything else
/// is not an expected outcome for these commands.
fn failure_scope(code: u16) -> Option<Invalidate> {
    match code {
        codes::NO_GROUP_SELECTED => Some(Invalidate::GroupAndArticle),
        codes::NO_CURRENT_ARTICLE
        | codes::NO_NEXT_ARTICLE
        | codes::NO_PREV_ARTICLE
        | codes::NO_SUCH_ARTICLE_NUMBER
        | codes::NO_SUCH_ARTICLE_ID => Some(Invalidate::Article),
        _ => None,
    }
}

/// Parse the `number <message-id>` payload of a success status line
fn parse_pointer(message: &str) -> Result<(u64, Option<String>)> {
    let mut tokens = message.split_whitespace();
    let number = tokens
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| {
            NntpError::MalformedResponse(format!(
                "status line without an article number: {:?}",
                message
            ))
        })?;
    Ok((number, tokens.next().map(str::to_string)))
}

impl<S: AsyncRead + AsyncWrite + Unpin> NntpClient<S> {
    /// ARTICLE by article number (220)
    pub async fn article_by_number(&mut self, number: u64) -> Result<ArticleResponse> {
        let cmd = commands::article(&number.to_string());
        self.fetch_by_number(cmd, codes::ARTICLE_FOLLOWS, number).await
    }

    /// ARTICLE by message-id (220); never touches the selected group
    pub async fn article_by_id(&mut self, message_id: &str) -> Result<ArticleResponse> {
        let id = commands::require_arg("message-id", message_id)?;
        self.fetch_by_id(commands::article(id), codes::ARTICLE_FOLLOWS)
            .await
    }

    /// ARTICLE for the server's current pointer (220)
    pub async fn article_current(&mut self) -> Result<ArticleResponse> {
        self.fetch_current(commands::article_current(), codes::ARTICLE_FOLLOWS)
            .await
    }

    /// HEAD by article number (221)
    pub async fn head_by_number(&mut self, number: u64) -> Result<ArticleResponse> {
        let cmd = commands::head(&number.to_string());
        self.fetch_by_number(cmd, codes::HEAD_FOLLOWS, number).await
    }

    /// HEAD by message-id (221); never touches the selected group
    pub async fn head_by_id(&mut self, message_id: &str) -> Result<ArticleResponse> {
        let id = commands::require_arg("message-id", message_id)?;
        self.fetch_by_id(commands::head(id), codes::HEAD_FOLLOWS).await
    }

    /// HEAD for the server's current pointer (221)
    pub async fn head_current(&mut self) -> Result<ArticleResponse> {
        self.fetch_current(commands::head_current(), codes::HEAD_FOLLOWS)
            .await
    }

    /// BODY by article number (222)
    pub async fn body_by_number(&mut self, number: u64) -> Result<ArticleResponse> {
        let cmd = commands::body(&number.to_string());
        self.fetch_by_number(cmd, codes::BODY_FOLLOWS, number).await
    }

    /// BODY by message-id (222); never touches the selected group
    pub async fn body_by_id(&mut self, message_id: &str) -> Result<ArticleResponse> {
        let id = commands::require_arg("message-id", message_id)?;
        self.fetch_by_id(commands::body(id), codes::BODY_FOLLOWS).await
    }

    /// BODY for the server's current pointer (222)
    pub async fn body_current(&mut self) -> Result<ArticleResponse> {
        self.fetch_current(commands::body_current(), codes::BODY_FOLLOWS)
            .await
    }

    /// STAT by article number (223): existence check, no content
    pub async fn stat_by_number(&mut self, number: u64) -> Result<PointerResponse> {
        debug!("STAT {}", number);
        self.send_command(&commands::stat(&number.to_string())).await?;
        let response = self.read_response().await?;

        if response.code == codes::ARTICLE_STAT {
            let (_, message_id) = parse_pointer(&response.message)?;
            self.session.set_current_article(number);
            return Ok(PointerResponse {
                response,
                pointer: Some(Pointer {
                    number: Some(number),
                    message_id,
                }),
            });
        }
        self.pointer_failure(response)
    }

    /// STAT by message-id (223); never touches the selected group, and
    /// only advances the numeric pointer when the reported number is
    /// positive
    pub async fn stat_by_id(&mut self, message_id: &str) -> Result<PointerResponse> {
        let id = commands::require_arg("message-id", message_id)?;
        debug!("STAT {}", id);
        self.send_command(&commands::stat(id)).await?;
        let response = self.read_response().await?;

        if response.code == codes::ARTICLE_STAT {
            return self.pointer_success(response);
        }
        self.pointer_failure(response)
    }

    /// STAT for the server's current pointer (223)
    pub async fn stat_current(&mut self) -> Result<PointerResponse> {
        debug!("STAT");
        self.send_command(commands::stat_current()).await?;
        let response = self.read_response().await?;

        if response.code == codes::ARTICLE_STAT {
            return self.pointer_success(response);
        }
        self.pointer_failure(response)
    }

    /// NEXT: advance the current pointer within the selected group (223)
    pub async fn next(&mut self) -> Result<PointerResponse> {
        debug!("NEXT");
        self.send_command(commands::next()).await?;
        let response = self.read_response().await?;

        if response.code == codes::ARTICLE_STAT {
            return self.pointer_success(response);
        }
        self.pointer_failure(response)
    }

    /// LAST: step the current pointer back within the selected group (223)
    pub async fn last(&mut self) -> Result<PointerResponse> {
        debug!("LAST");
        self.send_command(commands::last()).await?;
        let response = self.read_response().await?;

        if response.code == codes::ARTICLE_STAT {
            return self.pointer_success(response);
        }
        self.pointer_failure(response)
    }

    async fn fetch_by_number(
        &mut self,
        cmd: String,
        success: u16,
        number: u64,
    ) -> Result<ArticleResponse> {
        debug!("{}", cmd.trim_end());
        self.send_command(&cmd).await?;
        let data = self.read_data_response(&[success]).await?;

        if data.code() == success {
            self.session.set_current_article(number);
            return Ok(ArticleResponse {
                response: data.response,
                lines: Some(data.lines),
            });
        }
        self.article_failure(data.response)
    }

    async fn fetch_by_id(&mut self, cmd: String, success: u16) -> Result<ArticleResponse> {
        debug!("{}", cmd.trim_end());
        self.send_command(&cmd).await?;
        let data = self.read_data_response(&[success]).await?;

        if data.code() == success {
            let (number, _) = parse_pointer(&data.response.message)?;
            // 0 is the sentinel for "not in the selected group"
            if number > 0 {
                self.session.set_current_article(number);
            }
            return Ok(ArticleResponse {
                response: data.response,
                lines: Some(data.lines),
            });
        }
        self.article_failure(data.response)
    }

    async fn fetch_current(&mut self, cmd: &str, success: u16) -> Result<ArticleResponse> {
        debug!("{}", cmd.trim_end());
        self.send_command(cmd).await?;
        let data = self.read_data_response(&[success]).await?;

        if data.code() == success {
            let (number, _) = parse_pointer(&data.response.message)?;
            self.session.set_current_article(number);
            return Ok(ArticleResponse {
                response: data.response,
                lines: Some(data.lines),
            });
        }
        self.article_failure(data.response)
    }

    fn article_failure(&mut self, response: NntpResponse) -> Result<ArticleResponse> {
        match failure_scope(response.code) {
            Some(scope) => {
                self.session.invalidate(scope);
                Ok(ArticleResponse {
                    response,
                    lines: None,
                })
            }
            None => Err(NntpError::unexpected(response.code, response.message)),
        }
    }

    fn pointer_success(&mut self, response: NntpResponse) -> Result<PointerResponse> {
        let (number, message_id) = parse_pointer(&response.message)?;
        if number > 0 {
            self.session.set_current_article(number);
        }
        Ok(PointerResponse {
            response,
            pointer: Some(Pointer {
                number: (number > 0).then_some(number),
                message_id,
            }),
        })
    }

    fn pointer_failure(&mut self, response: NntpResponse) -> Result<PointerResponse> {
        match failure_scope(response.code) {
            Some(scope) => {
                self.session.invalidate(scope);
                Ok(PointerResponse {
                    response,
                    pointer: None,
                })
            }
            None => Err(NntpError::unexpected(response.code, response.message)),
        }
    }
}
