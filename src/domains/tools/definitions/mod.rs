//! Tool definitions.
//!
//! Every tool is a `const` [`ToolDescriptor`] in one of the group files.
//! [`all_tools`] is the table the registry is built from; adding a tool means
//! writing its descriptor and listing it there.

pub mod cluster;
pub mod common;
pub mod exchanges;
pub mod messages;
pub mod queues;

use super::descriptor::ToolDescriptor;

pub use cluster::{GET_OVERVIEW, LIST_VHOSTS};
pub use exchanges::{
    DELETE_EXCHANGE, GET_EXCHANGE, LIST_EXCHANGE_BINDINGS, LIST_EXCHANGES, LIST_EXCHANGES_VHOST,
    PUT_EXCHANGE,
};
pub use messages::{GET_QUEUE_MESSAGES, PUBLISH_MESSAGE};
pub use queues::{
    DELETE_QUEUE, GET_QUEUE, GET_QUEUE_UNACKED, LIST_QUEUE_BINDINGS, LIST_QUEUES,
    LIST_QUEUES_VHOST, PAUSE_QUEUE, PURGE_QUEUE, PUT_QUEUE, RESUME_QUEUE,
};

/// Every tool, in the order it is published.
pub fn all_tools() -> Vec<ToolDescriptor> {
    vec![
        LIST_QUEUES,
        LIST_QUEUES_VHOST,
        GET_QUEUE,
        PUT_QUEUE,
        DELETE_QUEUE,
        PURGE_QUEUE,
        GET_QUEUE_MESSAGES,
        LIST_QUEUE_BINDINGS,
        GET_QUEUE_UNACKED,
        PAUSE_QUEUE,
        RESUME_QUEUE,
        PUBLISH_MESSAGE,
        LIST_EXCHANGES,
        LIST_EXCHANGES_VHOST,
        GET_EXCHANGE,
        PUT_EXCHANGE,
        DELETE_EXCHANGE,
        LIST_EXCHANGE_BINDINGS,
        GET_OVERVIEW,
        LIST_VHOSTS,
    ]
}
