//! Request model for the broker management API.
//!
//! A [`BrokerRequest`] is plain data: it is built by the tools domain without
//! touching the network and handed to a
//! [`ManagementClient`](super::ManagementClient) to be sent.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use super::BrokerError;

/// HTTP methods used against the management API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One outgoing call to the management API.
#[derive(Debug, Clone, PartialEq)]
pub struct BrokerRequest {
    /// HTTP method.
    pub method: HttpMethod,

    /// Path relative to the API base URL, already percent-encoded
    /// (e.g. `/queues/%2F/orders`).
    pub path: String,

    /// Query parameters, not yet encoded.
    pub query: Vec<(String, String)>,

    /// JSON body, if any.
    pub body: Option<Value>,
}

impl BrokerRequest {
    /// Create a request with no query and no body.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Append a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// The path followed by the encoded query string, if there is one.
    pub fn path_and_query(&self) -> Result<String, BrokerError> {
        if self.query.is_empty() {
            return Ok(self.path.clone());
        }

        let query = serde_urlencoded::to_string(&self.query)
            .map_err(|e| BrokerError::invalid_request(e.to_string()))?;
        Ok(format!("{}?{}", self.path, query))
    }
}

/// Percent-encode a single path segment.
///
/// Everything outside `A-Z a-z 0-9 - _ . ~` is encoded, so the default vhost
/// `/` becomes `%2F`.
pub fn encode_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::encode(segment)
}

/// Join raw segments into an absolute path, encoding each one independently.
pub fn build_path<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    segments
        .into_iter()
        .map(|segment| format!("/{}", encode_segment(segment)))
        .collect()
}
