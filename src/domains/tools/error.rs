//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::core::broker::BrokerError;

/// Arguments rejected before any request is sent.
///
/// Safe to retry once the input is corrected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The arguments do not match the tool's parameter struct: a required
    /// field is absent, a value has the wrong type or is outside its enum.
    #[error("{0}")]
    Arguments(String),

    /// An identifier that would change the resource path once resolved.
    #[error("'{value}' is not a valid {field}")]
    ReservedName { field: String, value: String },
}

impl ValidationError {
    pub fn missing(field: &str) -> Self {
        Self::Arguments(format!("missing field `{}`", field))
    }

    pub fn reserved_name(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ReservedName {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Arguments(err.to_string())
    }
}

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    Validation(#[from] ValidationError),

    /// The call to the broker failed.
    #[error("{0}")]
    Transport(#[from] BrokerError),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Whether the caller can fix this error by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Validation(_))
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        if err.is_client_error() {
            McpError::invalid_params(err.to_string(), None)
        } else {
            McpError::internal_error(err.to_string(), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ToolError::from(ValidationError::missing("vhost")).to_string(),
            "Invalid arguments: missing field `vhost`"
        );
        assert_eq!(
            ValidationError::reserved_name("vhost", "..").to_string(),
            "'..' is not a valid vhost"
        );
    }

    #[test]
    fn test_from_serde_error_keeps_message() {
        let err = serde_json::from_str::<bool>("\"yes\"").unwrap_err();
        let message = err.to_string();
        assert_eq!(ValidationError::from(err), ValidationError::Arguments(message));
    }

    #[test]
    fn test_transport_error_message_is_verbatim() {
        let err = ToolError::from(BrokerError::status(404, "Not Found"));
        assert_eq!(err.to_string(), "Broker returned HTTP 404: Not Found");
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_mcp_error_codes() {
        let invalid: McpError = ToolError::from(ValidationError::missing("name")).into();
        assert_eq!(invalid.code, rmcp::model::ErrorCode::INVALID_PARAMS);

        let internal: McpError = ToolError::from(BrokerError::status(500, "boom")).into();
        assert_eq!(internal.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
        assert!(internal.message.contains("boom"));
    }
}
