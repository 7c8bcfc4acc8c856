//! Tool-specific error types.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur during tool registration and invocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// Invalid parameters were provided to the tool.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The tool execution failed.
    #[error("{0}")]
    ExecutionFailed(String),

    /// The tool did not complete within the invocation timeout.
    #[error("Tool execution timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    /// A tool with the same name is already registered.
    #[error("Tool already registered: {0}")]
    Duplicate(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid parameters" error.
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }

    /// Create a new "duplicate" error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::Duplicate(name.into())
    }
}

/// A failed invocation, carrying the name of the tool that was called.
///
/// This is the uniform error value handed back to clients: whatever went
/// wrong, the message reads `Error invoking tool <name>: <reason>`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Error invoking tool {tool}: {source}")]
pub struct InvocationError {
    /// Name of the tool the client asked for.
    pub tool: String,

    /// The underlying failure.
    #[source]
    pub source: ToolError,
}

impl InvocationError {
    pub fn new(tool: impl Into<String>, source: ToolError) -> Self {
        Self {
            tool: tool.into(),
            source,
        }
    }

    /// The client-facing JSON body: `{"error": "<message>"}`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.to_string() })
    }
}
