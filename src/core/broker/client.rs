//! Management API clients.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::{BrokerError, BrokerRequest};
use crate::core::config::BrokerConfig;

/// Sends a single request to the broker management API.
///
/// Implementations must not retry. Any failure is returned to the caller
/// unchanged.
#[async_trait]
pub trait ManagementClient: Send + Sync {
    /// Send the request and return the decoded JSON body.
    ///
    /// An empty success body decodes to `Value::Null`.
    async fn send(&self, request: BrokerRequest) -> Result<Value, BrokerError>;
}

/// `reqwest`-backed client authenticating with HTTP basic auth.
#[derive(Clone)]
pub struct HttpManagementClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl std::fmt::Debug for HttpManagementClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpManagementClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl HttpManagementClient {
    /// Build a client from the broker configuration.
    pub fn new(config: &BrokerConfig) -> Result<Self, BrokerError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// Base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, request: &BrokerRequest) -> Result<String, BrokerError> {
        Ok(format!("{}{}", self.base_url, request.path_and_query()?))
    }
}

#[async_trait]
impl ManagementClient for HttpManagementClient {
    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: BrokerRequest) -> Result<Value, BrokerError> {
        let url = self.url_for(&request)?;
        debug!("Sending {} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method.into(), url.as_str())
            .basic_auth(&self.username, Some(&self.password));
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!("Broker returned HTTP {}", status.as_u16());
            return Err(BrokerError::status(status.as_u16(), text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}
