//! Parameters and paths shared across tool groups.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::tools::descriptor::PathSegment;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Tools that take no arguments.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct NoParams {}

/// Parameters naming a virtual host.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct VhostParams {
    /// Virtual host name (the default vhost is "/").
    pub vhost: String,
}

/// Parameters naming a single queue.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct QueueParams {
    /// Virtual host name (the default vhost is "/").
    pub vhost: String,

    /// Queue name.
    pub name: String,
}

/// Parameters naming a single exchange.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ExchangeParams {
    /// Virtual host name (the default vhost is "/").
    pub vhost: String,

    /// Exchange name.
    pub name: String,
}

pub(crate) fn default_true() -> bool {
    true
}

// ============================================================================
// Paths
// ============================================================================

pub const QUEUE_PATH: &[PathSegment] = &[
    PathSegment::Literal("queues"),
    PathSegment::Param("vhost"),
    PathSegment::Param("name"),
];

pub const EXCHANGE_PATH: &[PathSegment] = &[
    PathSegment::Literal("exchanges"),
    PathSegment::Param("vhost"),
    PathSegment::Param("name"),
];

/// `/queues/{vhost}/{name}/{action}`.
pub const fn queue_action_path(action: &'static str) -> [PathSegment; 4] {
    [
        PathSegment::Literal("queues"),
        PathSegment::Param("vhost"),
        PathSegment::Param("name"),
        PathSegment::Literal(action),
    ]
}
