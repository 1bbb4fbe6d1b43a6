//! Exchange tools.

use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{EXCHANGE_PATH, ExchangeParams, NoParams, VhostParams, default_true};
use crate::core::broker::HttpMethod;
use crate::domains::tools::descriptor::{PathSegment, QueryFlag, ResponseFormat, ToolDescriptor};
use crate::domains::tools::schema::{Params, ToolInput};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Routing behaviour of an exchange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeType {
    #[default]
    Direct,
    Fanout,
    Topic,
    Headers,
}

/// Parameters for declaring an exchange.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct PutExchangeParams {
    /// Virtual host name (the default vhost is "/").
    pub vhost: String,

    /// Exchange name.
    pub name: String,

    /// Exchange type.
    #[serde(rename = "type", default)]
    pub kind: ExchangeType,

    /// Whether the exchange survives a broker restart.
    #[serde(default = "default_true")]
    pub durable: bool,

    /// Whether the exchange is deleted once its last binding is removed.
    #[serde(default)]
    pub auto_delete: bool,

    /// Internal exchanges cannot be published to directly.
    #[serde(default)]
    pub internal: bool,

    /// Optional broker arguments (e.g. alternate-exchange).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<JsonObject>,
}

/// Parameters for deleting an exchange.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct DeleteExchangeParams {
    /// Virtual host name (the default vhost is "/").
    pub vhost: String,

    /// Exchange name.
    pub name: String,

    /// Only delete the exchange if it has no bindings.
    #[serde(default)]
    pub if_unused: bool,
}

// ============================================================================
// Tool Definitions
// ============================================================================

pub const LIST_EXCHANGES: ToolDescriptor = ToolDescriptor {
    name: "list-exchanges",
    title: "List exchanges",
    description: "List all exchanges across every virtual host.",
    input: ToolInput::of::<NoParams>(),
    method: HttpMethod::Get,
    path: &[PathSegment::Literal("exchanges")],
    query: &[],
    body: None,
    response: ResponseFormat::PrettyJson,
    destructive: false,
};

pub const LIST_EXCHANGES_VHOST: ToolDescriptor = ToolDescriptor {
    name: "list-exchanges-vhost",
    title: "List exchanges in a virtual host",
    description: "List the exchanges of a single virtual host.",
    input: ToolInput::of::<VhostParams>(),
    method: HttpMethod::Get,
    path: &[PathSegment::Literal("exchanges"), PathSegment::Param("vhost")],
    query: &[],
    body: None,
    response: ResponseFormat::PrettyJson,
    destructive: false,
};

pub const GET_EXCHANGE: ToolDescriptor = ToolDescriptor {
    name: "get-exchange",
    title: "Get exchange",
    description: "Get details of an exchange: type, flags, arguments and message rates.",
    input: ToolInput::of::<ExchangeParams>(),
    method: HttpMethod::Get,
    path: EXCHANGE_PATH,
    query: &[],
    body: None,
    response: ResponseFormat::PrettyJson,
    destructive: false,
};

fn put_exchange_body(params: &Params) -> Value {
    Value::Object(params.select(&["type", "durable", "auto_delete", "internal", "arguments"]))
}

pub const PUT_EXCHANGE: ToolDescriptor = ToolDescriptor {
    name: "put-exchange",
    title: "Create or update exchange",
    description: "Declare an exchange. Creates it if missing; re-declaring with the same settings is a no-op.",
    input: ToolInput::of::<PutExchangeParams>(),
    method: HttpMethod::Put,
    path: EXCHANGE_PATH,
    query: &[],
    body: Some(put_exchange_body),
    response: ResponseFormat::PrettyJson,
    destructive: false,
};

pub const DELETE_EXCHANGE: ToolDescriptor = ToolDescriptor {
    name: "delete-exchange",
    title: "Delete exchange",
    description: "Delete an exchange and its bindings.",
    input: ToolInput::of::<DeleteExchangeParams>(),
    method: HttpMethod::Delete,
    path: EXCHANGE_PATH,
    query: &[QueryFlag {
        param: "if_unused",
        key: "if-unused",
    }],
    body: None,
    response: ResponseFormat::PrettyJson,
    destructive: true,
};

pub const LIST_EXCHANGE_BINDINGS: ToolDescriptor = ToolDescriptor {
    name: "list-exchange-bindings",
    title: "List exchange bindings",
    description: "List the bindings in which an exchange is the source.",
    input: ToolInput::of::<ExchangeParams>(),
    method: HttpMethod::Get,
    path: &[
        PathSegment::Literal("exchanges"),
        PathSegment::Param("vhost"),
        PathSegment::Param("name"),
        PathSegment::Literal("bindings"),
        PathSegment::Literal("source"),
    ],
    query: &[],
    body: None,
    response: ResponseFormat::PrettyJson,
    destructive: false,
};

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::JsonObject;
    use serde_json::json;

    fn args(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("test arguments must be an object"),
        }
    }

    fn request_for(tool: &ToolDescriptor, value: Value) -> crate::core::broker::BrokerRequest {
        let params = tool.validate(Some(&args(value))).unwrap();
        tool.build_request(&params).unwrap()
    }

    #[test]
    fn test_put_exchange_defaults() {
        let request = request_for(&PUT_EXCHANGE, json!({"vhost": "/", "name": "events"}));
        assert_eq!(request.path, "/exchanges/%2F/events");
        assert_eq!(
            request.body,
            Some(json!({
                "type": "direct",
                "durable": true,
                "auto_delete": false,
                "internal": false
            }))
        );
    }

    #[test]
    fn test_put_exchange_rejects_unknown_type() {
        let result = PUT_EXCHANGE.validate(Some(&args(
            json!({"vhost": "/", "name": "events", "type": "x-delayed"}),
        )));
        assert!(result.is_err());
    }

    #[test]
    fn test_put_exchange_type_is_sent_lowercase() {
        let request = request_for(
            &PUT_EXCHANGE,
            json!({"vhost": "/", "name": "events", "type": "topic", "internal": true}),
        );
        let body = request.body.unwrap();
        assert_eq!(body["type"], "topic");
        assert_eq!(body["internal"], true);
    }

    #[test]
    fn test_delete_exchange_if_unused() {
        let request = request_for(
            &DELETE_EXCHANGE,
            json!({"vhost": "/", "name": "events", "if_unused": true}),
        );
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(
            request.path_and_query().unwrap(),
            "/exchanges/%2F/events?if-unused=true"
        );
    }

    #[test]
    fn test_exchange_bindings_path() {
        let request = request_for(&LIST_EXCHANGE_BINDINGS, json!({"vhost": "a/b", "name": "events"}));
        assert_eq!(request.path, "/exchanges/a%2Fb/events/bindings/source");
    }

    #[test]
    fn test_list_exchanges_paths() {
        assert_eq!(request_for(&LIST_EXCHANGES, json!({})).path, "/exchanges");
        assert_eq!(
            request_for(&LIST_EXCHANGES_VHOST, json!({"vhost": "/"})).path,
            "/exchanges/%2F"
        );
        assert_eq!(
            request_for(&GET_EXCHANGE, json!({"vhost": "/", "name": "amq.topic"})).path,
            "/exchanges/%2F/amq.topic"
        );
    }
}
