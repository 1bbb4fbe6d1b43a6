//! Typed tool parameters.
//!
//! Each tool declares its arguments as one `#[derive(Deserialize, Serialize,
//! JsonSchema)]` struct. schemars turns the struct into the published input
//! schema; deserializing into it is the validation step and applies the
//! declared `#[serde(default)]`s. The result is serialized back into a
//! normalized [`Params`] map that the descriptor builds the request from.

use std::borrow::Cow;
use std::sync::Arc;

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::JsonObject;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::error::ValidationError;

/// Input schema and argument parser of one tool, both derived from `P`.
#[derive(Debug, Clone, Copy)]
pub struct ToolInput {
    schema: fn() -> Arc<JsonObject>,
    parse: fn(JsonObject) -> Result<Params, ValidationError>,
}

impl ToolInput {
    pub const fn of<P>() -> Self
    where
        P: DeserializeOwned + Serialize + JsonSchema + 'static,
    {
        Self {
            schema: cached_schema_for_type::<P>,
            parse: parse::<P>,
        }
    }

    /// JSON schema published as the tool's `inputSchema`.
    pub fn schema(&self) -> Arc<JsonObject> {
        (self.schema)()
    }

    /// Validate raw arguments and apply defaults.
    ///
    /// `null` counts as absent. Undeclared keys are dropped.
    pub fn parse(&self, arguments: Option<&JsonObject>) -> Result<Params, ValidationError> {
        let present = arguments
            .into_iter()
            .flatten()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        (self.parse)(present)
    }
}

fn parse<P>(arguments: JsonObject) -> Result<Params, ValidationError>
where
    P: DeserializeOwned + Serialize,
{
    let params: P = serde_json::from_value(Value::Object(arguments))?;
    match serde_json::to_value(params)? {
        Value::Object(map) => Ok(Params(map)),
        _ => Ok(Params::default()),
    }
}

/// Validated and normalized arguments for one invocation.
///
/// Holds only declared parameters, with defaults applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.0.get(name).and_then(Value::as_bool)
    }

    /// Object made of the named parameters that are present, in the given order.
    pub fn select(&self, names: &[&str]) -> Map<String, Value> {
        names
            .iter()
            .filter_map(|name| self.0.get(*name).map(|v| (name.to_string(), v.clone())))
            .collect()
    }

    /// Object made of every parameter except the named ones.
    pub fn without(&self, names: &[&str]) -> Map<String, Value> {
        self.0
            .iter()
            .filter(|(key, _)| !names.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

/// Non-negative integer that may also arrive as a decimal string.
///
/// Always serialized as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Count(pub u64);

impl<'de> Deserialize<'de> for Count {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_u64().map(Count).ok_or_else(|| {
                D::Error::custom(format!("expected a non-negative integer, got {}", n))
            }),
            Value::String(s) => s.trim().parse().map(Count).map_err(|_| {
                D::Error::custom(format!("expected a non-negative integer, got \"{}\"", s))
            }),
            other => Err(D::Error::custom(format!(
                "expected a non-negative integer or numeric string, got {}",
                other
            ))),
        }
    }
}

impl JsonSchema for Count {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> Cow<'static, str> {
        "Count".into()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": ["integer", "string"],
            "minimum": 0,
            "pattern": "^[0-9]+$"
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, Serialize, JsonSchema)]
    #[serde(rename_all = "snake_case")]
    enum Mode {
        Get,
        RejectRequeueTrue,
    }

    /// Sample parameters.
    #[derive(Debug, Deserialize, Serialize, JsonSchema)]
    struct SampleParams {
        /// Virtual host.
        vhost: String,

        /// Durable.
        #[serde(default = "yes")]
        durable: bool,

        #[serde(default = "one")]
        truncate: Count,

        #[serde(default = "get")]
        mode: Mode,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        arguments: Option<JsonObject>,
    }

    fn yes() -> bool {
        true
    }

    fn one() -> Count {
        Count(1)
    }

    fn get() -> Mode {
        Mode::Get
    }

    const SAMPLE: ToolInput = ToolInput::of::<SampleParams>();

    fn parse_json(value: Value) -> Result<Params, ValidationError> {
        match value {
            Value::Object(map) => SAMPLE.parse(Some(&map)),
            _ => panic!("test arguments must be an object"),
        }
    }

    fn message(result: Result<Params, ValidationError>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_defaults_applied() {
        let params = parse_json(json!({"vhost": "/"})).unwrap();
        assert_eq!(params.str("vhost"), Some("/"));
        assert_eq!(params.bool("durable"), Some(true));
        assert_eq!(params.get("truncate"), Some(&json!(1)));
        assert_eq!(params.str("mode"), Some("get"));
        assert!(params.get("arguments").is_none());
    }

    #[test]
    fn test_missing_required() {
        assert!(message(parse_json(json!({"durable": false}))).contains("missing field `vhost`"));
        assert!(message(SAMPLE.parse(None)).contains("missing field `vhost`"));
    }

    #[test]
    fn test_null_counts_as_absent() {
        assert!(message(parse_json(json!({"vhost": null}))).contains("missing field `vhost`"));

        let params = parse_json(json!({"vhost": "/", "durable": null})).unwrap();
        assert_eq!(params.bool("durable"), Some(true));
    }

    #[test]
    fn test_wrong_types_rejected() {
        assert!(message(parse_json(json!({"vhost": 7}))).contains("invalid type"));
        assert!(message(parse_json(json!({"vhost": "/", "durable": "yes"}))).contains("invalid type"));
        assert!(message(parse_json(json!({"vhost": "/", "arguments": [1]}))).contains("invalid type"));
    }

    #[test]
    fn test_enum_rejects_unknown_value() {
        let message = message(parse_json(json!({"vhost": "/", "mode": "nack"})));
        assert!(message.contains("unknown variant `nack`"));
        assert!(message.contains("reject_requeue_true"));
    }

    #[test]
    fn test_count_coerces_numeric_string() {
        let params = parse_json(json!({"vhost": "/", "truncate": "100"})).unwrap();
        assert_eq!(params.get("truncate"), Some(&json!(100)));

        let params = parse_json(json!({"vhost": "/", "truncate": 250})).unwrap();
        assert_eq!(params.get("truncate"), Some(&json!(250)));
    }

    #[test]
    fn test_count_rejects_garbage() {
        for bad in [json!("ten"), json!(-1), json!("-1"), json!(1.5), json!(true)] {
            let message = message(parse_json(json!({"vhost": "/", "truncate": bad})));
            assert!(message.contains("non-negative integer"), "{}", message);
        }
    }

    #[test]
    fn test_undeclared_keys_dropped() {
        let params = parse_json(json!({"vhost": "/", "extra": 1})).unwrap();
        assert!(params.get("extra").is_none());
    }

    #[test]
    fn test_select_and_without() {
        let params = parse_json(json!({"vhost": "/"})).unwrap();
        let selected = params.select(&["durable", "arguments"]);
        assert_eq!(Value::Object(selected), json!({"durable": true}));

        let rest = params.without(&["vhost", "truncate", "mode"]);
        assert_eq!(Value::Object(rest), json!({"durable": true}));
    }

    #[test]
    fn test_input_schema() {
        let schema = Value::Object(SAMPLE.schema().as_ref().clone());
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["vhost"]));
        assert_eq!(schema["properties"]["vhost"]["type"], "string");
        assert_eq!(schema["properties"]["vhost"]["description"], "Virtual host.");
        assert_eq!(schema["properties"]["durable"]["default"], true);
        assert_eq!(schema["properties"]["truncate"]["type"], json!(["integer", "string"]));
        assert_eq!(schema["properties"]["truncate"]["default"], 1);
        assert!(schema["properties"]["arguments"].get("default").is_none());
    }
}
