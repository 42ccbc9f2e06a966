#![doc = include_str!("../README.md")]

mod capabilities;
mod client;
/// NNTP command builders and response payload parsers
pub mod commands;
mod config;
mod error;
/// Article header block parsing
pub mod headers;
mod response;
mod session;

pub use capabilities::Capabilities;
pub use client::{
    ActiveTimesCatalog, ArticleResponse, AuthenticateResponse, ConnectResponse, DateResponse,
    GroupCatalog, GroupListing, GroupResponse, NewNewsResponse, NewsgroupNames, NewsgroupsCatalog,
    NntpClient, OverviewResponse, Pointer, PointerResponse, PostResponse,
};
pub use commands::{ActiveGroup, ActiveTimesEntry, GroupStatus, NewsgroupEntry, OverviewRecord};
pub use config::{DEFAULT_PORT, DEFAULT_TLS_PORT, ServerConfig};
pub use error::{NntpError, Result};
pub use headers::HeaderBlock;
pub use response::{NntpMultilineResponse, NntpResponse, ResponseKind, codes};
pub use session::Session;
