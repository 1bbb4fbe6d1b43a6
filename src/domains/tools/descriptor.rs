//! Declarative tool descriptors.
//!
//! A [`ToolDescriptor`] is a row in the tool table: what the tool accepts and
//! which single management API call it turns into. Descriptors are `const`
//! values in `definitions/` and never change after startup.

use rmcp::model::{JsonObject, Tool, ToolAnnotations};
use serde_json::Value;

use super::error::ValidationError;
use super::schema::{Params, ToolInput};
use crate::core::broker::{BrokerRequest, HttpMethod, build_path};

/// One segment of a resource path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    /// Fixed text such as `queues`.
    Literal(&'static str),
    /// Value of the named parameter, percent-encoded on its own.
    Param(&'static str),
}

/// Boolean parameter sent as `key=true` in the query string when set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryFlag {
    pub param: &'static str,
    pub key: &'static str,
}

/// How a successful response is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// The response JSON, pretty-printed.
    PrettyJson,
    /// One line reporting the `routed` flag of a publish response.
    PublishConfirmation,
}

/// Identifiers the URL parser would resolve as dot segments or collapse.
const RESERVED_IDENTIFIERS: &[&str] = &["", ".", ".."];

/// Reject identifiers that would make the request reach a different resource.
///
/// Percent-encoding does not help here: `%2E%2E` is still a dot segment.
fn check_identifier<'a>(field: &str, value: &'a str) -> Result<&'a str, ValidationError> {
    if RESERVED_IDENTIFIERS.contains(&value) {
        return Err(ValidationError::reserved_name(field, value));
    }
    Ok(value)
}

/// Builds the JSON body from validated parameters.
pub type BodyBuilder = fn(&Params) -> Value;

/// Everything needed to expose and execute one tool.
#[derive(Debug, Clone, Copy)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub input: ToolInput,
    pub method: HttpMethod,
    pub path: &'static [PathSegment],
    pub query: &'static [QueryFlag],
    pub body: Option<BodyBuilder>,
    pub response: ResponseFormat,
    /// Removes or consumes broker state.
    pub destructive: bool,
}

impl ToolDescriptor {
    /// Validate raw arguments against this tool's parameter struct.
    pub fn validate(&self, arguments: Option<&JsonObject>) -> Result<Params, ValidationError> {
        self.input.parse(arguments)
    }

    /// Build the one request this tool issues.
    pub fn build_request(&self, params: &Params) -> Result<BrokerRequest, ValidationError> {
        let segments = self
            .path
            .iter()
            .map(|segment| match segment {
                PathSegment::Literal(text) => Ok(*text),
                PathSegment::Param(name) => {
                    let value = params.str(name).ok_or_else(|| ValidationError::missing(name))?;
                    check_identifier(name, value)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut request = BrokerRequest::new(self.method, build_path(segments));

        for flag in self.query {
            if params.bool(flag.param) == Some(true) {
                request = request.with_query(flag.key, "true");
            }
        }

        if let Some(build_body) = self.body {
            request = request.with_body(build_body(params));
        }

        Ok(request)
    }

    /// Turn a successful response into the text returned to the caller.
    pub fn render_response(&self, response: &Value) -> String {
        match self.response {
            ResponseFormat::PrettyJson => {
                serde_json::to_string_pretty(response).unwrap_or_else(|_| response.to_string())
            }
            ResponseFormat::PublishConfirmation => {
                let routed = response.get("routed").and_then(Value::as_bool).unwrap_or(false);
                format!("Message published (routed: {})", routed)
            }
        }
    }

    /// MCP hints derived from the HTTP method.
    pub fn annotations(&self) -> ToolAnnotations {
        ToolAnnotations {
            title: Some(self.title.to_string()),
            read_only_hint: Some(self.method == HttpMethod::Get),
            destructive_hint: Some(self.destructive),
            idempotent_hint: Some(self.method != HttpMethod::Post),
            open_world_hint: Some(true),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: self.input.schema(),
            annotations: Some(self.annotations()),
            output_schema: None,
            icons: None,
            meta: None,
            title: Some(self.title.to_string()),
        }
    }
}
