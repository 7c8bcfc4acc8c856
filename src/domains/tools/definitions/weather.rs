//! Weather lookup tool definition.
//!
//! A mock tool that reports fixed weather conditions for any location.
//! It exists to exercise the registry, bridge and HTTP adapter end to end.

use std::sync::Arc;

use rmcp::{handler::server::tool::cached_schema_for_type, model::JsonObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::domains::tools::{ToolError, ToolHandler, parse_arguments};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the weather tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetWeatherParams {
    /// Name of the location to report on.
    #[schemars(description = "Location to get the weather for (e.g. a city name)")]
    pub location: String,
}

/// Structured weather report returned by the tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReport {
    pub location: String,
    /// Temperature in degrees Celsius.
    pub temperature: i64,
    pub condition: String,
    /// Relative humidity in percent.
    pub humidity: u8,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Weather tool - returns mock weather data for a location.
#[derive(Debug, Clone, Default)]
pub struct GetWeatherTool;

impl GetWeatherTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_weather";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get weather information for a location.";

    const TEMPERATURE: i64 = 20;
    const CONDITION: &'static str = "sunny";
    const HUMIDITY: u8 = 65;

    pub fn new() -> Self {
        Self
    }

    /// Produce the report for a location.
    #[instrument(skip_all, fields(location = %params.location))]
    pub async fn report(params: GetWeatherParams) -> WeatherReport {
        info!("Weather tool called for location: {}", params.location);

        WeatherReport {
            location: params.location,
            temperature: Self::TEMPERATURE,
            condition: Self::CONDITION.to_string(),
            humidity: Self::HUMIDITY,
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for GetWeatherTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> Arc<JsonObject> {
        cached_schema_for_type::<GetWeatherParams>()
    }

    fn output_schema(&self) -> Option<Arc<JsonObject>> {
        Some(cached_schema_for_type::<WeatherReport>())
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let params: GetWeatherParams = parse_arguments(arguments)?;

        let report = Self::report(params).await;

        serde_json::to_value(report).map_err(|e| ToolError::execution_failed(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
