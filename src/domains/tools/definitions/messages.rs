//! Message tools: fetching from a queue and publishing to an exchange.

use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::queue_action_path;
use crate::core::broker::HttpMethod;
use crate::domains::tools::descriptor::{PathSegment, ResponseFormat, ToolDescriptor};
use crate::domains::tools::schema::{Count, Params, ToolInput};

// ============================================================================
// Tool Parameters
// ============================================================================

/// How fetched messages are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AckMode {
    /// Leave messages in the queue.
    #[default]
    Get,
    /// Reject and requeue.
    RejectRequeueTrue,
}

impl AckMode {
    /// The broker's name for this mode.
    ///
    /// `get` fetches without consuming: the broker acks and requeues.
    pub fn broker_value(self) -> &'static str {
        match self {
            Self::Get => "ack_requeue_true",
            Self::RejectRequeueTrue => "reject_requeue_true",
        }
    }
}

/// Map a caller-facing ack mode onto the broker's vocabulary.
pub fn broker_ackmode(ackmode: &str) -> &str {
    match ackmode {
        "get" => AckMode::Get.broker_value(),
        other => other,
    }
}

/// Payload encoding of fetched messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MessageEncoding {
    /// Text when possible, otherwise base64.
    #[default]
    Auto,
    Base64,
}

/// Parameters for fetching messages from a queue.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GetMessagesParams {
    /// Virtual host name (the default vhost is "/").
    pub vhost: String,

    /// Queue name.
    pub name: String,

    /// Maximum number of messages to fetch.
    #[serde(default = "default_count")]
    pub count: Count,

    /// 'get' leaves messages in the queue, 'reject_requeue_true' rejects and requeues them.
    #[serde(default)]
    pub ackmode: AckMode,

    /// Payload encoding: 'auto' returns text when possible, otherwise base64.
    #[serde(default)]
    pub encoding: MessageEncoding,

    /// Truncate payloads longer than this many bytes.
    #[serde(default = "default_truncate")]
    pub truncate: Count,
}

fn default_count() -> Count {
    Count(1)
}

fn default_truncate() -> Count {
    Count(50000)
}

/// How a published payload is encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PayloadEncoding {
    #[default]
    String,
    Base64,
}

/// Parameters for publishing a message.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct PublishParams {
    /// Virtual host name (the default vhost is "/").
    pub vhost: String,

    /// Exchange to publish to (use "amq.default" for the default exchange).
    pub exchange: String,

    /// Message payload.
    pub payload: String,

    /// Routing key.
    #[serde(default)]
    pub routing_key: String,

    /// How the payload is encoded.
    #[serde(default)]
    pub payload_encoding: PayloadEncoding,

    /// AMQP message properties such as headers, content_type or delivery_mode.
    #[serde(default)]
    pub properties: JsonObject,
}

// ============================================================================
// Tool Definitions
// ============================================================================

const GET_PATH: [PathSegment; 4] = queue_action_path("get");

fn get_messages_body(params: &Params) -> Value {
    let mut body = params.select(&["count", "ackmode", "encoding", "truncate"]);
    if let Some(ackmode) = params.str("ackmode") {
        body.insert(
            "ackmode".to_string(),
            Value::from(broker_ackmode(ackmode)),
        );
    }
    Value::Object(body)
}

pub const GET_QUEUE_MESSAGES: ToolDescriptor = ToolDescriptor {
    name: "get-queue-messages",
    title: "Get queue messages",
    description: "Fetch messages from a queue for inspection. Messages are requeued after being read.",
    input: ToolInput::of::<GetMessagesParams>(),
    method: HttpMethod::Post,
    path: &GET_PATH,
    query: &[],
    body: Some(get_messages_body),
    response: ResponseFormat::PrettyJson,
    destructive: true,
};

fn publish_body(params: &Params) -> Value {
    Value::Object(params.without(&["vhost", "exchange"]))
}

pub const PUBLISH_MESSAGE: ToolDescriptor = ToolDescriptor {
    name: "publish-message",
    title: "Publish message",
    description: "Publish a message to an exchange and report whether it was routed to at least one queue.",
    input: ToolInput::of::<PublishParams>(),
    method: HttpMethod::Post,
    path: &[
        PathSegment::Literal("exchanges"),
        PathSegment::Param("vhost"),
        PathSegment::Param("exchange"),
        PathSegment::Literal("publish"),
    ],
    query: &[],
    body: Some(publish_body),
    response: ResponseFormat::PublishConfirmation,
    destructive: false,
};
