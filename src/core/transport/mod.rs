//! Transport layer for the MCP server.
//!
//! - **STDIO**: standard input/output, the default MCP mode - feature: `stdio`
//! - **HTTP**: JSON-RPC over POST requests - feature: `http`
//!
//! Both hand tool calls to the same [`McpServer`](crate::core::McpServer).

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
