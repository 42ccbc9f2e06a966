//! Authentication (RFC 4643)
//!
//! Two flows: the legacy AUTHINFO USER/PASS exchange, and AUTHINFO SASL
//! with the PLAIN mechanism sent as an initial response. A rejection is a
//! result the caller inspects, not an error; only codes outside the
//! documented outcome set become faults.

use super::NntpClient;
use crate::commands;
use crate::error::{NntpError, Result};
use crate::response::{NntpResponse, codes};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::debug;

/// Authorization identity sent in the SASL PLAIN initial response
const SASL_AUTHZID: &str = "nntp";

/// Outcome of an authentication exchange
#[derive(Debug, Clone)]
pub struct AuthenticateResponse {
    /// The final status line of the exchange
    pub response: NntpResponse,
    /// Whether the server accepted the credentials (281)
    pub accepted: bool,
}

impl AuthenticateResponse {
    /// True when the server accepted the credentials
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

/// Codes that terminate an authentication exchange as a rejection
fn is_auth_rejection(code: u16) -> bool {
    matches!(
        code,
        codes::AUTH_REJECTED
            | codes::AUTH_OUT_OF_SEQUENCE
            | codes::ENCRYPTION_REQUIRED
            | codes::ACCESS_DENIED
    )
}

impl<S: AsyncRead + AsyncWrite + Unpin> NntpClient<S> {
    /// Authenticate with AUTHINFO USER / AUTHINFO PASS.
    ///
    /// The password is only sent if the server asks for it with 381. A
    /// 381 with no password available is a [`NntpError::ProtocolState`]
    /// fault: the exchange cannot be completed.
    pub async fn authenticate(
        &mut self,
        username: &str,
        password: Option<&str>,
    ) -> Result<AuthenticateResponse> {
        let username = commands::require_arg("username", username)?;
        debug!("authenticating as {}", username);

        self.send_command(&commands::authinfo_user(username)).await?;
        let response = self.read_response().await?;

        match response.code {
            codes::AUTH_ACCEPTED => Ok(AuthenticateResponse {
                response,
                accepted: true,
            }),
            codes::AUTH_CONTINUE => {
                let Some(password) = password else {
                    return Err(NntpError::ProtocolState(
                        "server requested a password but none was provided".to_string(),
                    ));
                };
                self.send_command(&commands::authinfo_pass(password)).await?;
                let response = self.read_response().await?;
                match response.code {
                    codes::AUTH_ACCEPTED => Ok(AuthenticateResponse {
                        response,
                        accepted: true,
                    }),
                    code if is_auth_rejection(code) => Ok(AuthenticateResponse {
                        response,
                        accepted: false,
                    }),
                    _ => Err(NntpError::unexpected(response.code, response.message)),
                }
            }
            code if is_auth_rejection(code) => Ok(AuthenticateResponse {
                response,
                accepted: false,
            }),
            _ => Err(NntpError::unexpected(response.code, response.message)),
        }
    }

    /// Authenticate with AUTHINFO SASL PLAIN, credentials carried in the
    /// initial response.
    ///
    /// PLAIN joins the identity fields with NUL bytes, so a NUL inside
    /// either credential cannot be represented and is rejected before
    /// anything is written to the wire.
    pub async fn authenticate_sasl_plain(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticateResponse> {
        let username = commands::require_arg("username", username)?;
        if username.contains('\0') || password.contains('\0') {
            return Err(NntpError::InvalidArgument(
                "SASL PLAIN credentials must not contain NUL".to_string(),
            ));
        }
        debug!("authenticating as {} (SASL PLAIN)", username);

        let message = format!("{}\0{}\0{}", SASL_AUTHZID, username, password);
        let initial_response = STANDARD.encode(message);

        self.send_command(&commands::authinfo_sasl_ir("PLAIN", &initial_response))
            .await?;
        let response = self.read_response().await?;

        match response.code {
            codes::AUTH_ACCEPTED => Ok(AuthenticateResponse {
                response,
                accepted: true,
            }),
            code if is_auth_rejection(code) => Ok(AuthenticateResponse {
                response,
                accepted: false,
            }),
            _ => Err(NntpError::unexpected(response.code, response.message)),
        }
    }
}
