//! NNTP client: one session over one connection
//!
//! The client owns the framed stream and the [`Session`] state, and is the
//! only component that mutates the session. Commands are strictly
//! request-then-response; each method is a single round trip (POST and the
//! AUTHINFO exchange are the two-step exceptions) and must not be invoked
//! concurrently on the same client — `&mut self` enforces that at compile
//! time. Cancelling a method mid-flight (dropping its future) leaves the
//! connection in an indeterminate state; reconnect rather than retry.

mod articles;
mod auth;
mod connection;
mod group_ops;
mod io;
mod listing;
mod overview;
mod posting;

pub use articles::{ArticleResponse, Pointer, PointerResponse};
pub use auth::AuthenticateResponse;
pub use connection::ConnectResponse;
pub use group_ops::{GroupListing, GroupResponse};
pub use listing::{
    ActiveTimesCatalog, DateResponse, GroupCatalog, NewNewsResponse, NewsgroupNames,
    NewsgroupsCatalog,
};
pub use overview::OverviewResponse;
pub use posting::PostResponse;

use crate::session::Session;
use tokio::io::BufReader;

/// Async NNTP client over an arbitrary byte stream
///
/// The stream parameter is the transport seam: production code uses
/// [`TcpStream`](tokio::net::TcpStream) or a TLS stream via the
/// [`connect`](NntpClient::connect) / [`connect_tls`](NntpClient::connect_tls)
/// constructors, tests drive the client through an in-memory duplex pipe.
///
/// # Example
///
/// ```no_run
/// use nntp_session::{NntpClient, ServerConfig};
///
/// # async fn example() -> nntp_session::Result<()> {
/// let config = ServerConfig::plain("news.example.com");
/// let (mut client, greeting) = NntpClient::connect(&config).await?;
/// if !greeting.accepted {
///     return Ok(()); // server is shutting the connection down
/// }
///
/// let group = client.select_group("comp.lang.rust").await?;
/// if let Some(status) = &group.status {
///     println!("{} articles ({}-{})", status.count, status.low, status.high);
/// }
/// client.quit().await?;
/// # Ok(())
/// # }
/// ```
#[must_use]
#[derive(Debug)]
pub struct NntpClient<S> {
    /// Buffered transport stream
    stream: BufReader<S>,
    /// Mirrored server-side session state
    session: Session,
}

impl<S> NntpClient<S> {
    /// The session state mirrored from server responses
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The newsgroup currently selected, if any
    pub fn current_group(&self) -> Option<&str> {
        self.session.current_group()
    }

    /// The mirrored current-article pointer, if any
    pub fn current_article(&self) -> Option<u64> {
        self.session.current_article()
    }

    /// Whether the greeting advertised posting permission
    pub fn can_post(&self) -> bool {
        self.session.can_post()
    }
}
