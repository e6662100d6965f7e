//! The network seam: fetch a rendered URL and decode its JSON body.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

#[cfg(feature = "http-transport")]
pub mod http;
pub mod stub;

#[cfg(feature = "http-transport")]
pub use http::HttpTransport;
pub use stub::StaticTransport;

#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one GET against `url` and decodes the body as JSON.
    ///
    /// Connection or HTTP status failures surface as `OsuApiError::Transport`,
    /// an unparseable body as `OsuApiError::Decode`.
    async fn fetch_json(&self, url: &str) -> Result<Value>;
}

pub type DynTransport = Arc<dyn Transport>;
