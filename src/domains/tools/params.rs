//! Typed tool arguments.
//!
//! Each tool declares its parameters as a struct deriving `Deserialize` and
//! `JsonSchema`. The derived schema is what clients see; deserializing into
//! the same struct is what enforces it, so the two cannot drift apart.
//! Parameter structs should use `#[serde(deny_unknown_fields)]`.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::ToolError;

/// Deserialize raw arguments into a tool's parameter struct.
///
/// Missing, mistyped and unexpected fields all become
/// [`ToolError::InvalidParameters`].
pub fn parse_arguments<P>(arguments: Map<String, Value>) -> Result<P, ToolError>
where
    P: DeserializeOwned + JsonSchema,
{
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_parameters(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, JsonSchema)]
    #[serde(deny_unknown_fields)]
    struct ForecastParams {
        location: String,
        #[serde(default)]
        days: Option<u32>,
    }

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected object"),
        }
    }

    fn invalid_message(value: Value) -> String {
        match parse_arguments::<ForecastParams>(args(value)) {
            Err(ToolError::InvalidParameters(msg)) => msg,
            other => panic!("Expected invalid parameters, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_required_only() {
        let params: ForecastParams = parse_arguments(args(json!({ "location": "London" }))).unwrap();
        assert_eq!(params.location, "London");
        assert_eq!(params.days, None);
    }

    #[test]
    fn test_parse_optional_null() {
        let params: ForecastParams =
            parse_arguments(args(json!({ "location": "Paris", "days": null }))).unwrap();
        assert_eq!(params.days, None);
    }

    #[test]
    fn test_parse_missing_required() {
        assert!(invalid_message(json!({})).contains("location"));
    }

    #[test]
    fn test_parse_required_null() {
        assert!(invalid_message(json!({ "location": null })).contains("null"));
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        assert!(invalid_message(json!({ "location": "Berlin", "units": "metric" })).contains("units"));
    }

    #[test]
    fn test_parse_type_mismatch() {
        invalid_message(json!({ "location": 42 }));
        invalid_message(json!({ "location": "Oslo", "days": 1.5 }));
    }
}
