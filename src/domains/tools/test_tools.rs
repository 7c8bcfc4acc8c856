//! Tools used by unit tests across the crate.

use std::sync::Arc;
use std::time::Duration;

use rmcp::{handler::server::tool::cached_schema_for_type, model::JsonObject};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::{ToolError, ToolHandler, parse_arguments};

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NoParams {}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SleepParams {
    pub millis: u64,
}

/// Echoes its arguments back; the name is configurable.
pub struct EchoTool(pub &'static str);

#[async_trait::async_trait]
impl ToolHandler for EchoTool {
    fn name(&self) -> &str {
        self.0
    }

    fn description(&self) -> &str {
        "Echo the arguments back"
    }

    fn input_schema(&self) -> Arc<JsonObject> {
        cached_schema_for_type::<NoParams>()
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        Ok(Value::Object(arguments))
    }
}

/// Always fails with an execution error.
pub struct FailingTool;

#[async_trait::async_trait]
impl ToolHandler for FailingTool {
    fn name(&self) -> &str {
        "failing"
    }

    fn description(&self) -> &str {
        "Always fails"
    }

    fn input_schema(&self) -> Arc<JsonObject> {
        cached_schema_for_type::<NoParams>()
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let _: NoParams = parse_arguments(arguments)?;
        Err(ToolError::execution_failed("upstream unavailable"))
    }
}

/// Panics when called.
pub struct PanickingTool;

#[async_trait::async_trait]
impl ToolHandler for PanickingTool {
    fn name(&self) -> &str {
        "panicking"
    }

    fn description(&self) -> &str {
        "Panics when called"
    }

    fn input_schema(&self) -> Arc<JsonObject> {
        cached_schema_for_type::<NoParams>()
    }

    async fn execute(&self, _arguments: Map<String, Value>) -> Result<Value, ToolError> {
        panic!("kaboom");
    }
}

/// Sleeps for the requested number of milliseconds.
pub struct SlowTool;

#[async_trait::async_trait]
impl ToolHandler for SlowTool {
    fn name(&self) -> &str {
        "slow"
    }

    fn description(&self) -> &str {
        "Sleeps for the requested number of milliseconds"
    }

    fn input_schema(&self) -> Arc<JsonObject> {
        cached_schema_for_type::<SleepParams>()
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let params: SleepParams = parse_arguments(arguments)?;
        tokio::time::sleep(Duration::from_millis(params.millis)).await;
        Ok(json!({ "slept": params.millis }))
    }
}
