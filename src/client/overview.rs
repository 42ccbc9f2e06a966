//! Overview retrieval (OVER / XOVER)

use super::NntpClient;
use crate::commands;
use crate::commands::over::{OverviewRecord, parse_overview_record};
use crate::error::{NntpError, Result};
use crate::response::{NntpResponse, codes};
use crate::session::Invalidate;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::debug;

/// Outcome of an OVER/XOVER command
#[derive(Debug, Clone)]
pub struct OverviewResponse {
    /// The status line
    pub response: NntpResponse,
    /// One record per article in the range; empty when the range holds
    /// nothing or no group is selected
    pub records: Vec<OverviewRecord>,
}

impl<S: AsyncRead + AsyncWrite + Unpin> NntpClient<S> {
    /// OVER (224): overview records for an article number range
    pub async fn over(&mut self, low: u64, high: u64) -> Result<OverviewResponse> {
        self.overview(false, low, high).await
    }

    /// XOVER: the pre-standard spelling of [`over`](Self::over), for
    /// servers that never adopted RFC 3977
    pub async fn xover(&mut self, low: u64, high: u64) -> Result<OverviewResponse> {
        self.overview(true, low, high).await
    }

    async fn overview(&mut self, xover: bool, low: u64, high: u64) -> Result<OverviewResponse> {
        let cmd = commands::over(xover, low, high);
        debug!("{}", cmd.trim_end());

        self.send_command(&cmd).await?;
        let data = self
            .read_data_response(&[codes::OVERVIEW_INFO_FOLLOWS])
            .await?;

        match data.code() {
            codes::OVERVIEW_INFO_FOLLOWS => {
                let records = data
                    .lines
                    .iter()
                    .map(|line| parse_overview_record(line))
                    .collect::<Result<Vec<_>>>()?;
                Ok(OverviewResponse {
                    response: data.response,
                    records,
                })
            }
            codes::NO_GROUP_SELECTED => {
                self.session.invalidate(Invalidate::GroupAndArticle);
                Ok(OverviewResponse {
                    response: data.response,
                    records: Vec::new(),
                })
            }
            // Nothing in the requested range; selection stays intact
            codes::NO_CURRENT_ARTICLE | codes::NO_SUCH_ARTICLE_NUMBER => Ok(OverviewResponse {
                response: data.response,
                records: Vec::new(),
            }),
            _ => Err(NntpError::unexpected(data.response.code, data.response.message)),
        }
    }
}
