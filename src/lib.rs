//! MCP Weather Server Library
//!
//! This crate exposes a mock weather lookup tool through a Model Context
//! Protocol (MCP) server, reachable over a small HTTP API or over STDIO.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: tool registry, invocation bridge and tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use mcp_weather_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let (config, _warnings) = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
