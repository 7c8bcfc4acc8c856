//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients to perform
//! specific actions or computations.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The `ToolHandler` trait and tool descriptors
//! - `params.rs` - Typed argument parsing against each tool's parameter struct
//! - `registry.rs` - Central tool registry
//! - `bridge.rs` - Invocation bridge used by every transport
//! - `router.rs` - Dynamic rmcp ToolRouter built from the registry
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define a params struct deriving `Deserialize` + `JsonSchema` and
//!    implement `ToolHandler`, parsing arguments with `parse_arguments`
//! 3. Export it in `definitions/mod.rs`
//! 4. Register it in `ToolRegistry::with_default_tools()`
//!
//! Both the MCP router and the HTTP endpoints pick it up from the registry.

mod bridge;
pub mod definitions;
mod error;
mod handlers;
mod params;
mod registry;
pub mod router;
#[cfg(test)]
pub(crate) mod test_tools;

pub use bridge::{InvocationResult, ToolBridge};
pub use error::{InvocationError, ToolError};
pub use handlers::{ToolDescriptor, ToolHandler};
pub use params::parse_arguments;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
