//! STDIO transport implementation.
//!
//! Serves the MCP server over stdin/stdout for clients that spawn it as a
//! subprocess. Logging must never write to stdout in this mode.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the client closes the stream.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let tool_count = server.bridge().registry().len();
        info!(
            "Ready - serving {} v{} ({} tools) via stdin/stdout",
            server.name(),
            server.version(),
            tool_count
        );

        let running = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        let reason = running
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("STDIO session ended: {:?}", reason);
        Ok(())
    }
}
