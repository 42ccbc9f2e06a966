//! Group selection (GROUP, LISTGROUP) and MODE READER
//!
//! GROUP and LISTGROUP are the only commands that change the selected
//! group. An unknown group (411) leaves the previous selection in place,
//! so it surfaces as a result with no status rather than touching state.

use super::NntpClient;
use crate::commands;
use crate::commands::group::{GroupStatus, parse_article_numbers, parse_group_status};
use crate::error::{NntpError, Result};
use crate::response::{NntpResponse, codes};
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::debug;

/// Outcome of a GROUP command
#[derive(Debug, Clone)]
pub struct GroupResponse {
    /// The status line
    pub response: NntpResponse,
    /// Parsed group status; `None` when the group does not exist (411)
    pub status: Option<GroupStatus>,
}

impl GroupResponse {
    /// True when the group was selected
    pub fn is_selected(&self) -> bool {
        self.status.is_some()
    }
}

/// Outcome of a LISTGROUP command
#[derive(Debug, Clone)]
pub struct GroupListing {
    /// The status line
    pub response: NntpResponse,
    /// Parsed group status; `None` when the group does not exist (411)
    pub status: Option<GroupStatus>,
    /// Article numbers present in the group (or the requested range)
    pub article_numbers: Vec<u64>,
}

impl GroupListing {
    /// True when the group was selected
    pub fn is_selected(&self) -> bool {
        self.status.is_some()
    }
}

/// Render a LISTGROUP range argument: `(low, Some(high))` is `low-high`,
/// `(low, None)` is the open-ended `low-`
fn format_range(range: (u64, Option<u64>)) -> String {
    match range {
        (low, Some(high)) => format!("{}-{}", low, high),
        (low, None) => format!("{}-", low),
    }
}

impl<S: AsyncRead + AsyncWrite + Unpin> NntpClient<S> {
    /// Select a newsgroup with GROUP (211).
    ///
    /// On success the mirrored selection is replaced and the current
    /// article pointer cleared. A 411 leaves both untouched.
    pub async fn select_group(&mut self, newsgroup: &str) -> Result<GroupResponse> {
        let newsgroup = commands::require_arg("newsgroup", newsgroup)?;
        debug!("GROUP {}", newsgroup);

        self.send_command(&commands::group(newsgroup)).await?;
        let response = self.read_response().await?;

        match response.code {
            codes::GROUP_SELECTED => {
                let status = parse_group_status(&response.message)?;
                self.session.select_group(&status.name);
                Ok(GroupResponse {
                    response,
                    status: Some(status),
                })
            }
            codes::NO_SUCH_GROUP => Ok(GroupResponse {
                response,
                status: None,
            }),
            _ => Err(NntpError::unexpected(response.code, response.message)),
        }
    }

    /// Select a newsgroup and list its article numbers with LISTGROUP
    /// (211), optionally constrained to a range.
    pub async fn list_group(
        &mut self,
        newsgroup: &str,
        range: Option<(u64, Option<u64>)>,
    ) -> Result<GroupListing> {
        let newsgroup = commands::require_arg("newsgroup", newsgroup)?;
        let range = range.map(format_range);
        debug!("LISTGROUP {} {:?}", newsgroup, range);

        let cmd = commands::listgroup(newsgroup, range.as_deref());
        self.send_command(&cmd).await?;
        let data = self.read_data_response(&[codes::GROUP_SELECTED]).await?;

        match data.code() {
            codes::GROUP_SELECTED => {
                let status = parse_group_status(&data.response.message)?;
                let article_numbers = parse_article_numbers(&data.lines)?;
                self.session.select_group(&status.name);
                Ok(GroupListing {
                    response: data.response,
                    status: Some(status),
                    article_numbers,
                })
            }
            codes::NO_SUCH_GROUP => Ok(GroupListing {
                response: data.response,
                status: None,
                article_numbers: Vec::new(),
            }),
            _ => Err(NntpError::unexpected(data.response.code, data.response.message)),
        }
    }

    /// Switch the server into reader mode with MODE READER.
    ///
    /// Allowed at most once per session, and only when a fetched
    /// capability set advertises MODE-READER; both misuses are caught
    /// before any request line is written. 200/201 refresh the mirrored
    /// posting permission; a 502 means reading service is permanently
    /// refused.
    pub async fn mode_reader(&mut self) -> Result<NntpResponse> {
        if self.session.mode_reader_issued() {
            return Err(NntpError::ProtocolState(
                "MODE READER was already issued on this session".to_string(),
            ));
        }
        if let Some(caps) = self.session.capabilities() {
            if !caps.has("MODE-READER") {
                return Err(NntpError::ProtocolState(
                    "server does not advertise MODE-READER".to_string(),
                ));
            }
        }
        debug!("MODE READER");

        self.send_command(commands::mode_reader()).await?;
        let response = self.read_response().await?;
        self.session.mark_mode_reader_issued();

        match response.code {
            codes::READY_POSTING_ALLOWED => self.session.set_can_post(true),
            codes::READY_NO_POSTING => self.session.set_can_post(false),
            codes::ACCESS_DENIED => {}
            _ => return Err(NntpError::unexpected(response.code, response.message)),
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_range() {
        assert_eq!(format_range((1, None)), "1-");
        assert_eq!(format_range((10, Some(20))), "10-20");
        assert_eq!(format_range((5, Some(5))), "5-5");
    }
}
