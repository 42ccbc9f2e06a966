//! Discovery commands: CAPABILITIES, the LIST catalogs, NEWGROUPS,
//! NEWNEWS, and DATE
//!
//! The catalog commands share one outcome shape: a success code carries a
//! dot-terminated block of rows, any other code yields the status line
//! with an empty catalog so the caller can inspect the refusal without a
//! control-flow detour. A malformed row inside a success block is still a
//! fault.

use super::NntpClient;
use crate::capabilities::Capabilities;
use crate::commands;
use crate::commands::list::{
    ActiveGroup, ActiveTimesEntry, NewsgroupEntry, parse_active_groups, parse_active_times,
    parse_newsgroup_descriptions,
};
use crate::error::{NntpError, Result};
use crate::response::{NntpResponse, codes};
use chrono::{DateTime, NaiveDateTime, Utc};
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::debug;

/// Compact timestamp format used by DATE and the NEWGROUPS/NEWNEWS
/// arguments (yyyymmddhhmmss, UTC)
const COMPACT_DATE: &str = "%Y%m%d";
const COMPACT_TIME: &str = "%H%M%S";
const COMPACT_DATETIME: &str = "%Y%m%d%H%M%S";

/// Newsgroup names from a bare LIST
#[derive(Debug, Clone)]
pub struct NewsgroupNames {
    /// The status line
    pub response: NntpResponse,
    /// Group names, one per row; empty when the catalog was refused
    pub names: Vec<String>,
}

/// Active-group rows from LIST ACTIVE or NEWGROUPS
#[derive(Debug, Clone)]
pub struct GroupCatalog {
    /// The status line
    pub response: NntpResponse,
    /// Catalog rows; empty when the catalog was refused
    pub groups: Vec<ActiveGroup>,
}

/// Creation records from LIST ACTIVE.TIMES
#[derive(Debug, Clone)]
pub struct ActiveTimesCatalog {
    /// The status line
    pub response: NntpResponse,
    /// Catalog rows; empty when the catalog was refused
    pub entries: Vec<ActiveTimesEntry>,
}

/// Descriptions from LIST NEWSGROUPS
#[derive(Debug, Clone)]
pub struct NewsgroupsCatalog {
    /// The status line
    pub response: NntpResponse,
    /// Catalog rows; empty when the catalog was refused
    pub entries: Vec<NewsgroupEntry>,
}

/// Message-ids of new articles from NEWNEWS
#[derive(Debug, Clone)]
pub struct NewNewsResponse {
    /// The status line
    pub response: NntpResponse,
    /// Message identifiers, one per row; empty when refused
    pub message_ids: Vec<String>,
}

/// Server clock reading from DATE
#[derive(Debug, Clone)]
pub struct DateResponse {
    /// The status line
    pub response: NntpResponse,
    /// The server's UTC clock, decoded from the compact timestamp.
    /// `None` when the 111 text did not parse; the code alone already
    /// signalled success, so an odd clock rendering is not a fault.
    pub timestamp: Option<DateTime<Utc>>,
}

/// Decode a compact `yyyymmddhhmmss` timestamp as UTC
fn parse_compact_timestamp(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s.trim(), COMPACT_DATETIME)
        .map(|naive| naive.and_utc())
        .ok()
}

impl<S: AsyncRead + AsyncWrite + Unpin> NntpClient<S> {
    /// Query CAPABILITIES (101) and refresh the session's cached set.
    ///
    /// Re-querying overwrites the cache; servers may advertise a
    /// different set after MODE READER or authentication.
    pub async fn capabilities(&mut self) -> Result<Capabilities> {
        debug!("CAPABILITIES");
        self.send_command(commands::capabilities()).await?;
        let data = self
            .read_data_response(&[codes::CAPABILITY_LIST])
            .await?;

        if data.code() != codes::CAPABILITY_LIST {
            return Err(NntpError::unexpected(data.response.code, data.response.message));
        }
        let caps = Capabilities::parse(&data.lines);
        self.session.set_capabilities(caps.clone());
        Ok(caps)
    }

    /// Bare LIST (215): every newsgroup the server carries, names only.
    ///
    /// The rows are full `name high low status` records; only the name
    /// column is retained here. Use [`list_active`](Self::list_active)
    /// for the watermarks.
    pub async fn list(&mut self) -> Result<NewsgroupNames> {
        debug!("LIST");
        self.send_command(&commands::list(None, None)).await?;
        let data = self
            .read_data_response(&[codes::LIST_INFORMATION_FOLLOWS])
            .await?;

        let names = data
            .lines
            .iter()
            .filter_map(|line| line.split_whitespace().next())
            .map(str::to_string)
            .collect();
        Ok(NewsgroupNames {
            response: data.response,
            names,
        })
    }

    /// LIST ACTIVE (215), optionally filtered by a wildmat
    pub async fn list_active(&mut self, wildmat: Option<&str>) -> Result<GroupCatalog> {
        debug!("LIST ACTIVE {:?}", wildmat);
        self.send_command(&commands::list(Some("ACTIVE"), wildmat))
            .await?;
        let data = self
            .read_data_response(&[codes::LIST_INFORMATION_FOLLOWS])
            .await?;

        let groups = parse_active_groups(&data.lines)?;
        Ok(GroupCatalog {
            response: data.response,
            groups,
        })
    }

    /// LIST ACTIVE.TIMES (215), optionally filtered by a wildmat
    pub async fn list_active_times(
        &mut self,
        wildmat: Option<&str>,
    ) -> Result<ActiveTimesCatalog> {
        debug!("LIST ACTIVE.TIMES {:?}", wildmat);
        self.send_command(&commands::list(Some("ACTIVE.TIMES"), wildmat))
            .await?;
        let data = self
            .read_data_response(&[codes::LIST_INFORMATION_FOLLOWS])
            .await?;

        let entries = parse_active_times(&data.lines)?;
        Ok(ActiveTimesCatalog {
            response: data.response,
            entries,
        })
    }

    /// LIST NEWSGROUPS (215), optionally filtered by a wildmat
    pub async fn list_newsgroups(
        &mut self,
        wildmat: Option<&str>,
    ) -> Result<NewsgroupsCatalog> {
        debug!("LIST NEWSGROUPS {:?}", wildmat);
        self.send_command(&commands::list(Some("NEWSGROUPS"), wildmat))
            .await?;
        let data = self
            .read_data_response(&[codes::LIST_INFORMATION_FOLLOWS])
            .await?;

        let entries = parse_newsgroup_descriptions(&data.lines);
        Ok(NewsgroupsCatalog {
            response: data.response,
            entries,
        })
    }

    /// NEWGROUPS (231): groups created since the given instant
    pub async fn new_groups(&mut self, since: DateTime<Utc>) -> Result<GroupCatalog> {
        let date = since.format(COMPACT_DATE).to_string();
        let time = since.format(COMPACT_TIME).to_string();
        debug!("NEWGROUPS {} {}", date, time);

        self.send_command(&commands::newgroups(&date, &time)).await?;
        let data = self
            .read_data_response(&[codes::NEW_NEWSGROUPS_FOLLOW])
            .await?;

        let groups = parse_active_groups(&data.lines)?;
        Ok(GroupCatalog {
            response: data.response,
            groups,
        })
    }

    /// NEWNEWS (230): message-ids of articles posted to groups matching
    /// the wildmat since the given instant.
    ///
    /// Some servers answer with 231 here; both codes are accepted as the
    /// success that carries the block.
    pub async fn new_news(
        &mut self,
        wildmat: &str,
        since: DateTime<Utc>,
    ) -> Result<NewNewsResponse> {
        let wildmat = commands::require_arg("wildmat", wildmat)?;
        let date = since.format(COMPACT_DATE).to_string();
        let time = since.format(COMPACT_TIME).to_string();
        debug!("NEWNEWS {} {} {}", wildmat, date, time);

        self.send_command(&commands::newnews(wildmat, &date, &time))
            .await?;
        let data = self
            .read_data_response(&[
                codes::NEW_ARTICLE_LIST_FOLLOWS,
                codes::NEW_NEWSGROUPS_FOLLOW,
            ])
            .await?;

        Ok(NewNewsResponse {
            message_ids: data.lines,
            response: data.response,
        })
    }

    /// DATE (111): the server's UTC clock
    pub async fn date(&mut self) -> Result<DateResponse> {
        debug!("DATE");
        self.send_command(commands::date()).await?;
        let response = self.read_response().await?;

        if response.code != codes::SERVER_DATE {
            return Err(NntpError::unexpected(response.code, response.message));
        }
        let timestamp = parse_compact_timestamp(&response.message);
        Ok(DateResponse {
            response,
            timestamp,
        })
    }
}
