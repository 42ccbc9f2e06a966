//! NNTP server endpoint configuration

/// Default NNTP port for plain connections
pub const DEFAULT_PORT: u16 = 119;

/// Default NNTP port for implicit-TLS connections
pub const DEFAULT_TLS_PORT: u16 = 563;

/// Where and how to reach an NNTP server
///
/// # Example
///
/// ```
/// use nntp_session::ServerConfig;
///
/// let config = ServerConfig::tls("news.example.com");
/// assert_eq!(config.port, 563);
/// assert!(config.use_tls());
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server hostname
    pub host: String,

    /// Server port (typically 119 for plain, 563 for TLS)
    pub port: u16,

    /// Force TLS on or off; `None` infers it from the port (563 = TLS)
    pub tls: Option<bool>,
}

impl ServerConfig {
    /// Create a configuration with an explicit port; TLS is inferred from it
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        ServerConfig {
            host: host.into(),
            port,
            tls: None,
        }
    }

    /// Plain connection on the standard port (119)
    pub fn plain(host: impl Into<String>) -> Self {
        ServerConfig::new(host, DEFAULT_PORT)
    }

    /// TLS connection on the standard secure port (563)
    pub fn tls(host: impl Into<String>) -> Self {
        ServerConfig::new(host, DEFAULT_TLS_PORT)
    }

    /// Whether this endpoint should be reached over TLS
    pub fn use_tls(&self) -> bool {
        self.tls.unwrap_or(self.port == DEFAULT_TLS_PORT)
    }
}
