//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! One route per descriptor, each delegating to
//! [`ToolRegistry::call_tool`]. Nothing here is tool-specific.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::descriptor::ToolDescriptor;
use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: Arc<ToolRegistry>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .descriptors()
        .iter()
        .fold(ToolRouter::new(), |router, descriptor| {
            router.with_route(create_route(descriptor, registry.clone()))
        })
}

/// Create a ToolRoute that dispatches through the registry.
fn create_route<S>(descriptor: &ToolDescriptor, registry: Arc<ToolRegistry>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let name = descriptor.name;
    ToolRoute::new_dyn(descriptor.to_tool(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone();
        let registry = registry.clone();
        async move {
            registry
                .call_tool(name, args.as_ref())
                .await
                .map_err(McpError::from)
        }
        .boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::broker::testing::RecordingClient;
    use serde_json::Value;

    struct TestServer {}

    fn test_registry() -> Arc<ToolRegistry> {
        Arc::new(ToolRegistry::new(Arc::new(RecordingClient::responding(Value::Null))))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_registry());
        let tools = router.list_all();
        assert_eq!(tools.len(), 20);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"list-queues"));
        assert!(names.contains(&"put-queue"));
        assert!(names.contains(&"purge-queue"));
        assert!(names.contains(&"get-queue-messages"));
        assert!(names.contains(&"publish-message"));
        assert!(names.contains(&"resume-queue"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry = test_registry();
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(registry);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_routes_carry_annotations() {
        let router: ToolRouter<TestServer> = build_tool_router(test_registry());
        let tools = router.list_all();

        let list = tools.iter().find(|t| t.name == "list-queues").unwrap();
        let hints = list.annotations.as_ref().unwrap();
        assert_eq!(hints.read_only_hint, Some(true));
        assert_eq!(hints.destructive_hint, Some(false));

        let purge = tools.iter().find(|t| t.name == "purge-queue").unwrap();
        let hints = purge.annotations.as_ref().unwrap();
        assert_eq!(hints.read_only_hint, Some(false));
        assert_eq!(hints.destructive_hint, Some(true));
        assert_eq!(hints.idempotent_hint, Some(true));

        let publish = tools.iter().find(|t| t.name == "publish-message").unwrap();
        let hints = publish.annotations.as_ref().unwrap();
        assert_eq!(hints.idempotent_hint, Some(false));
    }
}
