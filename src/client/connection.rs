//! Connection establishment and teardown
//!
//! The greeting is the first transaction of a session: 200/201 accept the
//! connection and fix posting permission, 400/502 mean the server is about
//! to close the connection. A refusal is still a result the caller must
//! observe, so it comes back as [`ConnectResponse`] with `accepted =
//! false`, not as an error.

use super::NntpClient;
use crate::config::ServerConfig;
use crate::error::{NntpError, Result};
use crate::response::{NntpResponse, codes};
use crate::session::Session;
use crate::commands;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite, BufReader};
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;
use tokio_rustls::client::TlsStream;
use tokio_rustls::rustls::pki_types::ServerName;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tracing::debug;

/// Outcome of the connection greeting
#[derive(Debug, Clone)]
pub struct ConnectResponse {
    /// The greeting status line
    pub response: NntpResponse,
    /// False when the server refused service (400/502) and will close the
    /// connection
    pub accepted: bool,
    /// Whether the greeting advertised posting permission
    pub can_post: bool,
}

impl NntpClient<TcpStream> {
    /// Connect over plain TCP and read the greeting
    pub async fn connect(config: &ServerConfig) -> Result<(Self, ConnectResponse)> {
        debug!("connecting to {}:{}", config.host, config.port);

        let stream = TcpStream::connect((config.host.as_str(), config.port)).await?;
        // Request/response protocol; don't let Nagle hold command lines
        stream.set_nodelay(true)?;

        NntpClient::from_stream(stream).await
    }
}

impl NntpClient<TlsStream<TcpStream>> {
    /// Connect over TLS (certificates validated against the webpki roots)
    /// and read the greeting
    pub async fn connect_tls(config: &ServerConfig) -> Result<(Self, ConnectResponse)> {
        debug!("connecting to {}:{} (TLS)", config.host, config.port);

        let tcp = TcpStream::connect((config.host.as_str(), config.port)).await?;
        tcp.set_nodelay(true)?;

        use tokio_rustls::rustls::crypto::{CryptoProvider, ring};
        let _ = CryptoProvider::install_default(ring::default_provider());

        let mut root_store = RootCertStore::empty();
        root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        let tls_config = ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        let connector = TlsConnector::from(Arc::new(tls_config));
        let server_name = ServerName::try_from(config.host.as_str())
            .map_err(|e| NntpError::Tls(format!("invalid server name: {}", e)))?
            .to_owned();
        let tls_stream = connector
            .connect(server_name, tcp)
            .await
            .map_err(|e| NntpError::Tls(format!("TLS handshake failed: {}", e)))?;

        NntpClient::from_stream(tls_stream).await
    }
}

impl<S: AsyncRead + AsyncWrite + Unpin> NntpClient<S> {
    /// Wrap an established stream and read the greeting.
    ///
    /// This is the transport seam: anything that reads and writes bytes
    /// works, including an in-memory pipe in tests.
    pub async fn from_stream(stream: S) -> Result<(Self, ConnectResponse)> {
        let mut client = NntpClient {
            stream: BufReader::new(stream),
            session: Session::new(),
        };

        let response = client.read_response().await?;
        debug!("greeting: {}", response);

        let (accepted, can_post) = match response.code {
            codes::READY_POSTING_ALLOWED => (true, true),
            codes::READY_NO_POSTING => (true, false),
            // The server MUST close the connection after these
            codes::SERVICE_UNAVAILABLE | codes::ACCESS_DENIED => (false, false),
            _ => return Err(NntpError::unexpected(response.code, response.message)),
        };
        client.session.set_can_post(can_post);

        Ok((
            client,
            ConnectResponse {
                response,
                accepted,
                can_post,
            },
        ))
    }

    /// Send QUIT and consume the client
    pub async fn quit(mut self) -> Result<NntpResponse> {
        debug!("closing session");
        self.send_command(commands::quit()).await?;
        self.read_response().await
    }
}
