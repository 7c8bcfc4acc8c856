//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Each registered tool gets one dynamic route. Every route calls through the
//! [`ToolBridge`], so MCP clients see the same validation, timeout and error
//! conversion as HTTP clients.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::{CallToolResult, Content},
};

use super::{InvocationError, ToolBridge, ToolError};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(bridge: &ToolBridge) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    bridge
        .registry()
        .iter()
        .fold(ToolRouter::new(), |router, tool| {
            router.with_route(create_route(bridge.clone(), tool.to_tool()))
        })
}

/// Create a ToolRoute that dispatches through the bridge.
fn create_route<S>(bridge: ToolBridge, tool: rmcp::model::Tool) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let name = tool.name.to_string();
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let bridge = bridge.clone();
        let name = name.clone();
        async move {
            match bridge.invoke(&name, args).await {
                Ok(value) => Ok(CallToolResult::structured(value)),
                Err(err) => into_call_result(err),
            }
        }
        .boxed()
    })
}

/// Map a failed invocation onto MCP semantics.
///
/// Bad input is a protocol-level error; a tool that ran and failed is
/// reported as an error result the model can read.
pub fn into_call_result(err: InvocationError) -> Result<CallToolResult, McpError> {
    match err.source {
        ToolError::InvalidParameters(_) => Err(McpError::invalid_params(err.to_string(), None)),
        ToolError::NotFound(_) => Err(McpError::invalid_params(err.to_string(), None)),
        ToolError::ExecutionFailed(_) | ToolError::Timeout(_) => {
            Ok(CallToolResult::error(vec![Content::text(err.to_string())]))
        }
        ToolError::Duplicate(_) => Err(McpError::internal_error(err.to_string(), None)),
    }
}
