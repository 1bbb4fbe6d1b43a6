//! MCP Server implementation and lifecycle management.
//!
//! The server owns the tool registry and the rmcp router built from it.
//! Tools themselves live in `domains/tools/definitions/`; adding one does not
//! touch this file.

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::{CallToolResult, JsonObject, ServerCapabilities, ServerInfo, Tool},
    tool_handler,
};
use std::sync::Arc;
use tracing::info;

use super::broker::{HttpManagementClient, ManagementClient};
use super::config::Config;
use super::error::Error;
use crate::domains::tools::{ToolError, ToolRegistry, build_tool_router};

const INSTRUCTIONS: &str = "Tools for the message broker's HTTP management API: inspect, \
create, delete, purge, pause and resume queues, read queue messages and bindings, manage \
exchanges and publish messages. Vhost and resource names are passed verbatim; the default \
vhost is \"/\".";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Descriptor table and management client.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a server talking to the broker described in `config.broker`.
    pub fn new(config: Config) -> super::error::Result<Self> {
        reqwest::Url::parse(&config.broker.base_url).map_err(|e| {
            Error::config(format!("invalid broker URL '{}': {}", config.broker.base_url, e))
        })?;

        let client = HttpManagementClient::new(&config.broker)?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Create a server that sends every request through `client`.
    pub fn with_client(config: Config, client: Arc<dyn ManagementClient>) -> Self {
        let registry = Arc::new(ToolRegistry::new(client));
        info!("Serving {} tools", registry.tool_names().len());

        Self {
            tool_router: build_tool_router::<Self>(registry.clone()),
            config: Arc::new(config),
            registry,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Usage notes sent to clients on initialization.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<&JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        self.registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::broker::testing::RecordingClient;
    use serde_json::json;

    fn test_server() -> McpServer {
        McpServer::with_client(
            Config::default(),
            Arc::new(RecordingClient::responding(json!({"routed": false}))),
        )
    }

    #[test]
    fn test_new_rejects_invalid_broker_url() {
        let mut config = Config::default();
        config.broker.base_url = "not a url".to_string();
        let result = McpServer::new(config);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_new_with_default_config() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "broker-mcp-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_get_info_enables_tools() {
        let info = test_server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("vhost"));
    }

    #[test]
    fn test_list_tools_matches_registry() {
        let server = test_server();
        assert_eq!(server.list_tools().len(), server.registry.tool_names().len());
    }

    #[tokio::test]
    async fn test_dot_segment_never_reaches_broker() {
        use wiremock::matchers::any;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let broker = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"password_hash": "SECRET"})))
            .expect(0)
            .mount(&broker)
            .await;

        let mut config = Config::default();
        config.broker.base_url = format!("{}/api", broker.uri());
        let server = McpServer::new(config).unwrap();

        let arguments = json!({"vhost": "..", "name": "users"});
        let result = server.call_tool("get-queue", arguments.as_object()).await;
        assert!(matches!(result, Err(ToolError::Validation(_))));
        assert!(broker.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_call_tool_through_server() {
        let server = test_server();
        let arguments = json!({"vhost": "/", "exchange": "amq.default", "payload": "hi"});
        let result = server
            .call_tool("publish-message", arguments.as_object())
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));
    }
}
