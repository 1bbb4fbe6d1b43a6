//! In-memory [`ManagementClient`] for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{BrokerError, BrokerRequest, ManagementClient};

/// Records every request and answers with a canned response.
pub(crate) struct RecordingClient {
    requests: Mutex<Vec<BrokerRequest>>,
    response: Result<Value, (u16, String)>,
}

impl RecordingClient {
    /// Answer every request with `value`.
    pub(crate) fn responding(value: Value) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: Ok(value),
        }
    }

    /// Fail every request with the given HTTP status and body.
    pub(crate) fn failing(status: u16, body: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: Err((status, body.to_string())),
        }
    }

    pub(crate) fn requests(&self) -> Vec<BrokerRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> Option<BrokerRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ManagementClient for RecordingClient {
    async fn send(&self, request: BrokerRequest) -> Result<Value, BrokerError> {
        self.requests.lock().unwrap().push(request);
        match &self.response {
            Ok(value) => Ok(value.clone()),
            Err((status, body)) => Err(BrokerError::status(*status, body.clone())),
        }
    }
}
