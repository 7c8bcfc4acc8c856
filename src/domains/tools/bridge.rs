//! Invocation bridge between callers and registered tools.
//!
//! The bridge is the single entry point used by every transport to run a
//! tool. It resolves the name and runs the tool under a timeout. Each tool
//! parses its arguments into its typed parameter struct before doing any
//! work. Every failure becomes an [`InvocationError`] value instead of
//! escaping.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use serde_json::{Map, Value};
use tracing::{error, info, instrument, warn};

use super::{InvocationError, ToolDescriptor, ToolError, ToolRegistry};

/// Result of a tool invocation.
pub type InvocationResult = Result<Value, InvocationError>;

/// Dispatches invocation requests to tools in a [`ToolRegistry`].
#[derive(Clone)]
pub struct ToolBridge {
    registry: Arc<ToolRegistry>,
    timeout: Option<Duration>,
}

impl ToolBridge {
    /// Create a bridge over a registry. `timeout` bounds every invocation;
    /// `None` lets tools run for as long as they need.
    pub fn new(registry: Arc<ToolRegistry>, timeout: Option<Duration>) -> Self {
        Self { registry, timeout }
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// List the descriptors of every registered tool.
    pub fn list(&self) -> Vec<ToolDescriptor> {
        self.registry.list()
    }

    /// Invoke a tool by name.
    ///
    /// On success the tool's value is returned unchanged.
    #[instrument(skip(self, arguments))]
    pub async fn invoke(&self, name: &str, arguments: Map<String, Value>) -> InvocationResult {
        self.try_invoke(name, arguments).await.map_err(|source| {
            match &source {
                ToolError::ExecutionFailed(_) | ToolError::Timeout(_) => {
                    error!("Tool {} failed: {}", name, source)
                }
                _ => warn!("Rejected call to tool {}: {}", name, source),
            }
            InvocationError::new(name, source)
        })
    }

    async fn try_invoke(&self, name: &str, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        if name.is_empty() {
            return Err(ToolError::invalid_parameters("tool name must not be empty"));
        }

        let tool = self.registry.lookup(name)?;

        info!("Invoking tool {}", name);

        let call = AssertUnwindSafe(tool.execute(arguments)).catch_unwind();

        let outcome = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| ToolError::Timeout(limit))?,
            None => call.await,
        };

        outcome.map_err(|panic| ToolError::execution_failed(panic_message(panic.as_ref())))?
    }
}

/// Best-effort text of a panic payload.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("tool panicked: {}", msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("tool panicked: {}", msg)
    } else {
        "tool panicked".to_string()
    }
}
