//! Core module containing shared infrastructure components.
//!
//! Configuration, error handling, the broker management client, server
//! lifecycle and the transport layer.

pub mod broker;
pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
