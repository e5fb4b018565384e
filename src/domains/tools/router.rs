//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; every route shares the one
//! API client created at startup.

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::dub::DubClient;

use super::definitions::{
    CreateLinkTool, DeleteLinkTool, ListDomainsTool, UpdateLinkTool, UpsertLinkTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: DubClient) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CreateLinkTool::create_route(client.clone()))
        .with_route(UpdateLinkTool::create_route(client.clone()))
        .with_route(UpsertLinkTool::create_route(client.clone()))
        .with_route(DeleteLinkTool::create_route(client.clone()))
        .with_route(ListDomainsTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::domains::dub::DEFAULT_BASE_URL;

    struct TestServer {}

    fn test_client() -> DubClient {
        DubClient::new("test-key", DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 5);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"create_link"));
        assert!(names.contains(&"update_link"));
        assert!(names.contains(&"upsert_link"));
        assert!(names.contains(&"delete_link"));
        assert!(names.contains(&"list_domains"));
    }

    #[test]
    fn test_required_fields() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let required = |name: &str| {
            router
                .list_all()
                .into_iter()
                .find(|t| t.name == name)
                .and_then(|t| t.input_schema.get("required").cloned())
        };

        assert_eq!(required("create_link"), Some(serde_json::json!(["url"])));
        assert_eq!(required("upsert_link"), Some(serde_json::json!(["url"])));
        assert_eq!(required("update_link"), Some(serde_json::json!(["linkId"])));
        assert_eq!(required("delete_link"), Some(serde_json::json!(["linkId"])));
        assert!(
            required("list_domains")
                .map_or(true, |r| r.as_array().is_some_and(|a| a.is_empty()))
        );
    }

    #[test]
    fn test_every_tool_has_description_and_object_schema() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        for tool in router.list_all() {
            assert!(tool.description.is_some(), "{} has no description", tool.name);
            assert_eq!(
                tool.input_schema.get("type"),
                Some(&serde_json::json!("object")),
                "{} schema is not an object",
                tool.name
            );
        }
    }

    #[test]
    fn test_registry_matches_router() {
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
