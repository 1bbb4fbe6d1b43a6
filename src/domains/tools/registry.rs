//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry owns the immutable descriptor table and the management client.
//! [`ToolRegistry::call_tool`] is the single dispatch path used by every
//! transport.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject};
use tracing::{debug, info, instrument, warn};

use super::definitions::all_tools;
use super::descriptor::ToolDescriptor;
use super::error::ToolError;
use crate::core::broker::ManagementClient;

/// Tool registry - the descriptor table plus the client tools send requests through.
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    client: Arc<dyn ManagementClient>,
}

impl ToolRegistry {
    /// Create a registry holding every defined tool.
    pub fn new(client: Arc<dyn ManagementClient>) -> Self {
        Self::with_tools(all_tools(), client)
    }

    /// Create a registry over an explicit descriptor table.
    pub fn with_tools(tools: Vec<ToolDescriptor>, client: Arc<dyn ManagementClient>) -> Self {
        info!("Registered {} tools", tools.len());
        Self { tools, client }
    }

    /// Get all tool names, in publication order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|tool| tool.name).collect()
    }

    /// All descriptors, in publication order.
    pub fn descriptors(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Look up a descriptor by tool name.
    pub fn descriptor(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|tool| tool.name == name)
    }

    /// Validate, send the one request, and render the response.
    ///
    /// Validation failures return before anything is sent.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<&JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let descriptor = self.descriptor(name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            ToolError::not_found(name)
        })?;

        let params = descriptor.validate(arguments).inspect_err(|e| {
            warn!("Rejected arguments: {}", e);
        })?;
        let request = descriptor.build_request(&params)?;

        debug!("{} {}", request.method, request.path);
        let response = self.client.send(request).await.inspect_err(|e| {
            warn!("Broker call failed: {}", e);
        })?;

        Ok(CallToolResult::success(vec![Content::text(
            descriptor.render_response(&response),
        )]))
    }
}
