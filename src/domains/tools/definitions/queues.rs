//! Queue tools: listing, inspection, lifecycle and flow control.

use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{NoParams, QUEUE_PATH, QueueParams, VhostParams, default_true, queue_action_path};
use crate::core::broker::HttpMethod;
use crate::domains::tools::descriptor::{PathSegment, QueryFlag, ResponseFormat, ToolDescriptor};
use crate::domains::tools::schema::{Params, ToolInput};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for declaring a queue.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct PutQueueParams {
    /// Virtual host name (the default vhost is "/").
    pub vhost: String,

    /// Queue name.
    pub name: String,

    /// Whether the queue survives a broker restart.
    #[serde(default = "default_true")]
    pub durable: bool,

    /// Whether the queue is deleted once its last consumer unsubscribes.
    #[serde(default)]
    pub auto_delete: bool,

    /// Optional broker arguments (e.g. x-message-ttl, x-queue-type).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<JsonObject>,
}

/// Parameters for deleting a queue.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct DeleteQueueParams {
    /// Virtual host name (the default vhost is "/").
    pub vhost: String,

    /// Queue name.
    pub name: String,

    /// Only delete the queue if it has no messages.
    #[serde(default)]
    pub if_empty: bool,

    /// Only delete the queue if it has no consumers.
    #[serde(default)]
    pub if_unused: bool,
}

// ============================================================================
// Tool Definitions
// ============================================================================

const PURGE_PATH: [PathSegment; 4] = queue_action_path("contents");
const BINDINGS_PATH: [PathSegment; 4] = queue_action_path("bindings");
const UNACKED_PATH: [PathSegment; 4] = queue_action_path("unacked");
const PAUSE_PATH: [PathSegment; 4] = queue_action_path("pause");
const RESUME_PATH: [PathSegment; 4] = queue_action_path("resume");

pub const LIST_QUEUES: ToolDescriptor = ToolDescriptor {
    name: "list-queues",
    title: "List queues",
    description: "List all queues across every virtual host, with their message counts and state.",
    input: ToolInput::of::<NoParams>(),
    method: HttpMethod::Get,
    path: &[PathSegment::Literal("queues")],
    query: &[],
    body: None,
    response: ResponseFormat::PrettyJson,
    destructive: false,
};

pub const LIST_QUEUES_VHOST: ToolDescriptor = ToolDescriptor {
    name: "list-queues-vhost",
    title: "List queues in a virtual host",
    description: "List the queues of a single virtual host.",
    input: ToolInput::of::<VhostParams>(),
    method: HttpMethod::Get,
    path: &[PathSegment::Literal("queues"), PathSegment::Param("vhost")],
    query: &[],
    body: None,
    response: ResponseFormat::PrettyJson,
    destructive: false,
};

pub const GET_QUEUE: ToolDescriptor = ToolDescriptor {
    name: "get-queue",
    title: "Get queue",
    description: "Get details of a queue: arguments, consumers, message rates and counts.",
    input: ToolInput::of::<QueueParams>(),
    method: HttpMethod::Get,
    path: QUEUE_PATH,
    query: &[],
    body: None,
    response: ResponseFormat::PrettyJson,
    destructive: false,
};

fn put_queue_body(params: &Params) -> Value {
    Value::Object(params.select(&["durable", "auto_delete", "arguments"]))
}

pub const PUT_QUEUE: ToolDescriptor = ToolDescriptor {
    name: "put-queue",
    title: "Create or update queue",
    description: "Declare a queue. Creates it if missing; re-declaring with the same settings is a no-op.",
    input: ToolInput::of::<PutQueueParams>(),
    method: HttpMethod::Put,
    path: QUEUE_PATH,
    query: &[],
    body: Some(put_queue_body),
    response: ResponseFormat::PrettyJson,
    destructive: false,
};

pub const DELETE_QUEUE: ToolDescriptor = ToolDescriptor {
    name: "delete-queue",
    title: "Delete queue",
    description: "Delete a queue and every message in it.",
    input: ToolInput::of::<DeleteQueueParams>(),
    method: HttpMethod::Delete,
    path: QUEUE_PATH,
    query: &[
        QueryFlag {
            param: "if_empty",
            key: "if-empty",
        },
        QueryFlag {
            param: "if_unused",
            key: "if-unused",
        },
    ],
    body: None,
    response: ResponseFormat::PrettyJson,
    destructive: true,
};

pub const PURGE_QUEUE: ToolDescriptor = ToolDescriptor {
    name: "purge-queue",
    title: "Purge queue",
    description: "Remove all ready messages from a queue, keeping the queue itself.",
    input: ToolInput::of::<QueueParams>(),
    method: HttpMethod::Delete,
    path: &PURGE_PATH,
    query: &[],
    body: None,
    response: ResponseFormat::PrettyJson,
    destructive: true,
};

pub const LIST_QUEUE_BINDINGS: ToolDescriptor = ToolDescriptor {
    name: "list-queue-bindings",
    title: "List queue bindings",
    description: "List the bindings that route messages into a queue.",
    input: ToolInput::of::<QueueParams>(),
    method: HttpMethod::Get,
    path: &BINDINGS_PATH,
    query: &[],
    body: None,
    response: ResponseFormat::PrettyJson,
    destructive: false,
};

pub const GET_QUEUE_UNACKED: ToolDescriptor = ToolDescriptor {
    name: "get-queue-unacked",
    title: "Get unacknowledged messages",
    description: "List messages delivered to consumers of a queue but not yet acknowledged or rejected.",
    input: ToolInput::of::<QueueParams>(),
    method: HttpMethod::Get,
    path: &UNACKED_PATH,
    query: &[],
    body: None,
    response: ResponseFormat::PrettyJson,
    destructive: false,
};

pub const PAUSE_QUEUE: ToolDescriptor = ToolDescriptor {
    name: "pause-queue",
    title: "Pause queue",
    description: "Pause delivery from a queue to its consumers. Messages keep accumulating.",
    input: ToolInput::of::<QueueParams>(),
    method: HttpMethod::Put,
    path: &PAUSE_PATH,
    query: &[],
    body: None,
    response: ResponseFormat::PrettyJson,
    destructive: false,
};

pub const RESUME_QUEUE: ToolDescriptor = ToolDescriptor {
    name: "resume-queue",
    title: "Resume queue",
    description: "Resume delivery from a paused queue.",
    input: ToolInput::of::<QueueParams>(),
    method: HttpMethod::Put,
    path: &RESUME_PATH,
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
    fn test_list_queues() {
        let request = request_for(&LIST_QUEUES, json!({}));
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/queues");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_list_queues_vhost_encodes_default_vhost() {
        let request = request_for(&LIST_QUEUES_VHOST, json!({"vhost": "/"}));
        assert_eq!(request.path, "/queues/%2F");
    }

    #[test]
    fn test_put_queue_defaults() {
        let request = request_for(&PUT_QUEUE, json!({"vhost": "/", "name": "q1"}));
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.path, "/queues/%2F/q1");
        assert_eq!(request.body, Some(json!({"durable": true, "auto_delete": false})));
    }

    #[test]
    fn test_put_queue_with_arguments() {
        let request = request_for(
            &PUT_QUEUE,
            json!({
                "vhost": "prod",
                "name": "orders",
                "durable": false,
                "auto_delete": true,
                "arguments": {"x-queue-type": "quorum"}
            }),
        );
        assert_eq!(
            request.body,
            Some(json!({
                "durable": false,
                "auto_delete": true,
                "arguments": {"x-queue-type": "quorum"}
            }))
        );
    }

    #[test]
    fn test_put_queue_schema_documents_defaults() {
        let schema = PUT_QUEUE.to_tool().input_schema;
        assert_eq!(schema["required"], json!(["vhost", "name"]));
        assert_eq!(schema["properties"]["durable"]["default"], true);
        assert_eq!(schema["properties"]["auto_delete"]["default"], false);
        assert!(schema["properties"]["name"]["description"].is_string());
    }

    #[test]
    fn test_delete_queue_conditions() {
        let request = request_for(&DELETE_QUEUE, json!({"vhost": "/", "name": "q1"}));
        assert_eq!(request.method, HttpMethod::Delete);
        assert!(request.query.is_empty());

        let request = request_for(
            &DELETE_QUEUE,
            json!({"vhost": "/", "name": "q1", "if_empty": true, "if_unused": true}),
        );
        assert_eq!(
            request.path_and_query().unwrap(),
            "/queues/%2F/q1?if-empty=true&if-unused=true"
        );
    }

    #[test]
    fn test_action_paths() {
        let key = json!({"vhost": "/", "name": "q 1"});
        assert_eq!(request_for(&PURGE_QUEUE, key.clone()).path, "/queues/%2F/q%201/contents");
        assert_eq!(request_for(&PURGE_QUEUE, key.clone()).method, HttpMethod::Delete);
        assert_eq!(
            request_for(&LIST_QUEUE_BINDINGS, key.clone()).path,
            "/queues/%2F/q%201/bindings"
        );
        assert_eq!(
            request_for(&GET_QUEUE_UNACKED, key.clone()).path,
            "/queues/%2F/q%201/unacked"
        );

        let pause = request_for(&PAUSE_QUEUE, key.clone());
        assert_eq!(pause.method, HttpMethod::Put);
        assert_eq!(pause.path, "/queues/%2F/q%201/pause");

        let resume = request_for(&RESUME_QUEUE, key);
        assert_eq!(resume.method, HttpMethod::Put);
        assert_eq!(resume.path, "/queues/%2F/q%201/resume");
    }
}
