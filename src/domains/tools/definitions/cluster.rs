//! Broker-wide tools.

use super::common::NoParams;
use crate::core::broker::HttpMethod;
use crate::domains::tools::descriptor::{PathSegment, ResponseFormat, ToolDescriptor};
use crate::domains::tools::schema::ToolInput;

pub const GET_OVERVIEW: ToolDescriptor = ToolDescriptor {
    name: "get-overview",
    title: "Broker overview",
    description: "Get a broker-wide overview: version, cluster name, object totals and message rates.",
    input: ToolInput::of::<NoParams>(),
    method: HttpMethod::Get,
    path: &[PathSegment::Literal("overview")],
    query: &[],
    body: None,
    response: ResponseFormat::PrettyJson,
    destructive: false,
};

pub const LIST_VHOSTS: ToolDescriptor = ToolDescriptor {
    name: "list-vhosts",
    title: "List virtual hosts",
    description: "List the virtual hosts defined on the broker.",
    input: ToolInput::of::<NoParams>(),
    method: HttpMethod::Get,
    path: &[PathSegment::Literal("vhosts")],
    query: &[],
    body: None,
    response: ResponseFormat::PrettyJson,
    destructive: false,
};
