//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler. It implements the MCP
//! protocol with rmcp and exposes the same tools to the HTTP transport.
//!
//! ## Tool Architecture
//!
//! Tools live in `domains/tools/definitions/` and are registered in the
//! [`ToolRegistry`]. Every call, from either transport, goes through the
//! [`ToolBridge`]. The rmcp `ToolRouter` is built from the registry, so
//! adding a tool never requires touching this file.

use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool_handler,
};
use serde_json::{Map, Value};

use super::config::Config;
use crate::domains::tools::{
    InvocationResult, ToolBridge, ToolDescriptor, ToolRegistry, build_tool_router,
};

const INSTRUCTIONS: &str =
    "Example MCP server exposing a mock weather lookup tool. Call get_weather with a location.";

/// The main MCP server handler.
///
/// Cloning is cheap: the configuration and the registry are shared.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Invocation bridge over the tool registry.
    bridge: ToolBridge,

    /// Tool router for handling MCP tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the default tool set.
    pub fn new(config: Config) -> super::Result<Self> {
        let registry = ToolRegistry::with_default_tools()?;
        Ok(Self::with_registry(config, registry))
    }

    /// Create a new MCP server over an explicit registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        let config = Arc::new(config);
        let bridge = ToolBridge::new(Arc::new(registry), config.tools.timeout());

        Self {
            tool_router: build_tool_router::<Self>(&bridge),
            bridge,
            config,
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

    /// Get the invocation bridge.
    pub fn bridge(&self) -> &ToolBridge {
        &self.bridge
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools as descriptors.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.bridge.list()
    }

    /// List all available tools in MCP `tools/list` shape.
    pub fn list_mcp_tools(&self) -> Vec<Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                let mut tool = serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                });
                if let (Some(output), Some(obj)) = (t.output_schema, tool.as_object_mut()) {
                    obj.insert("outputSchema".to_string(), Value::Object((*output).clone()));
                }
                tool
            })
            .collect()
    }

    /// Call a tool by name through the invocation bridge.
    pub async fn call_tool(&self, name: &str, arguments: Map<String, Value>) -> InvocationResult {
        self.bridge.invoke(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolError;
    use serde_json::json;

    fn test_server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    #[test]
    fn test_server_identity() {
        let mut config = Config::default();
        config.server.name = "weather-test".to_string();
        let server = McpServer::new(config).unwrap();

        assert_eq!(server.name(), "weather-test");
        let info = server.get_info();
        assert_eq!(info.server_info.name, "weather-test");
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn test_list_tools() {
        let names: Vec<_> = test_server()
            .list_tools()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["get_weather"]);
    }

    #[test]
    fn test_list_mcp_tools_shape() {
        let tools = test_server().list_mcp_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], "get_weather");
        assert_eq!(tools[0]["inputSchema"]["type"], "object");
        assert!(tools[0].get("outputSchema").is_some());
    }

    #[tokio::test]
    async fn test_call_tool() {
        let mut args = Map::new();
        args.insert("location".to_string(), json!("London"));

        let result = test_server().call_tool("get_weather", args).await.unwrap();
        assert_eq!(result["location"], "London");
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let err = test_server()
            .call_tool("nonexistent_tool", Map::new())
            .await
            .unwrap_err();
        assert_eq!(err.source, ToolError::not_found("nonexistent_tool"));
    }
}
