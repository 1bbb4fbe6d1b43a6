//! Broker MCP Server Library
//!
//! Exposes a message broker's HTTP management API (queues, messages,
//! exchanges) as Model Context Protocol tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the broker management client,
//!   the MCP server and its transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the declarative tool table, validation, registry and router
//!
//! # Example
//!
//! ```rust,no_run
//! use broker_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
