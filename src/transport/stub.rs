use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use super::Transport;
use crate::error::{OsuApiError, Result};

#[derive(Clone, Debug)]
enum Reply {
    Json(Value),
    Fail(String),
}

/// In-memory transport answering every request with the same reply.
///
/// Requested URLs are recorded so callers can check what would have gone out.
#[derive(Debug)]
pub struct StaticTransport {
    reply: Reply,
    requests: Mutex<Vec<String>>,
}

impl StaticTransport {
    pub fn new(response: Value) -> Self {
        Self {
            reply: Reply::Json(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A transport whose every call fails with `OsuApiError::Transport`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Reply::Fail(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

impl Default for StaticTransport {
    fn default() -> Self {
        Self::new(Value::Array(Vec::new()))
    }
}

#[async_trait]
impl Transport for StaticTransport {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        self.requests.lock().push(url.to_string());
        match &self.reply {
            Reply::Json(value) => Ok(value.clone()),
            Reply::Fail(message) => Err(OsuApiError::Transport(message.clone())),
        }
    }
}
