//! Transport service - starts the configured transport.

#[cfg(feature = "stdio")]
use rmcp::ServiceExt;
use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

#[cfg(feature = "stdio")]
use super::TransportError;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Runs an [`McpServer`] on the configured transport.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Start the transport with the given MCP server.
    ///
    /// This method blocks until the transport is shut down.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description());

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => run_stdio(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(server).await,
        }
    }
}

/// Serve a single MCP session over stdin/stdout until the client disconnects.
#[cfg(feature = "stdio")]
async fn run_stdio(server: McpServer) -> TransportResult<()> {
    info!("Ready - communicating via stdin/stdout");

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| TransportError::init(e.to_string()))?;

    service
        .waiting()
        .await
        .map_err(|e| TransportError::service(e.to_string()))?;

    info!("STDIO session finished");
    Ok(())
}
