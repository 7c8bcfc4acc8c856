//! Tool handler trait and listable tool metadata.
//!
//! Every tool served by this crate implements [`ToolHandler`]. The registry
//! stores handlers as trait objects, and the bridge drives them.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ToolError;

/// Trait for implementing tools.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Get the name of this tool.
    fn name(&self) -> &str;

    /// Get the description of this tool.
    fn description(&self) -> &str;

    /// JSON Schema of the accepted parameters, derived from the tool's
    /// parameter struct.
    fn input_schema(&self) -> Arc<JsonObject>;

    /// JSON Schema of the structured result, if the tool publishes one.
    fn output_schema(&self) -> Option<Arc<JsonObject>> {
        None
    }

    /// Execute the tool. Implementations parse `arguments` with
    /// [`parse_arguments`](super::parse_arguments) before doing any work.
    async fn execute(&self, arguments: Map<String, Value>) -> Result<Value, ToolError>;

    /// Listable metadata for this tool.
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: Value::Object((*self.input_schema()).clone()),
        }
    }

    /// Create a Tool model for this tool (MCP metadata).
    fn to_tool(&self) -> Tool {
        Tool {
            name: self.name().to_string().into(),
            description: Some(self.description().to_string().into()),
            input_schema: self.input_schema(),
            annotations: None,
            output_schema: self.output_schema(),
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// The non-executable metadata of a tool, as listed to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    /// JSON Schema object describing the accepted parameters.
    pub parameters: Value,
}
