//! The API client: one method per endpoint, each validating, rendering and
//! optionally dispatching a request.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::instrument;

use crate::endpoint::{
    EndpointRegistry, EndpointSpec, GET_BEATMAPS, GET_MATCH, GET_REPLAY, GET_SCORES, GET_USER,
    GET_USER_BEST, GET_USER_RECENT,
};
use crate::error::Result;
use crate::request::{render, validate, ParameterSet, QueryEncoding};
use crate::transport::DynTransport;
use crate::utils::validation::{ConfigValidator, ENDPOINT_PLACEHOLDER, KEY_PLACEHOLDER};

pub const DEFAULT_BASE_URL: &str = "https://osu.ppy.sh/api/{endpoint}?k={key}";

/// Client for the osu! API v1.
///
/// Immutable once built; clones share the registry and the transport.
#[derive(Clone)]
pub struct OsuApi {
    key: String,
    base_url: String,
    encoding: QueryEncoding,
    registry: Arc<EndpointRegistry>,
    transport: DynTransport,
}

impl fmt::Debug for OsuApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OsuApi")
            .field("key", &"***")
            .field("base_url", &self.base_url)
            .field("encoding", &self.encoding)
            .field("endpoints", &self.registry.len())
            .finish_non_exhaustive()
    }
}

impl OsuApi {
    /// Client with the default endpoint table and the reqwest transport.
    #[cfg(feature = "http-transport")]
    pub fn new(key: impl Into<String>) -> Result<Self> {
        Self::builder(key).build()
    }

    pub fn with_transport(key: impl Into<String>, transport: DynTransport) -> Result<Self> {
        Self::builder(key).transport(transport).build()
    }

    pub fn builder(key: impl Into<String>) -> OsuApiBuilder {
        OsuApiBuilder::new(key)
    }

    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    pub fn encoding(&self) -> QueryEncoding {
        self.encoding
    }

    /// Base URL of `spec` with path segment and credential substituted.
    pub fn endpoint_url(&self, spec: &EndpointSpec) -> String {
        self.substitute(spec, &self.encoding.encode(&self.key))
    }

    fn substitute(&self, spec: &EndpointSpec, key: &str) -> String {
        self.base_url
            .replace(ENDPOINT_PLACEHOLDER, spec.path_segment())
            .replace(KEY_PLACEHOLDER, key)
    }

    /// Validates `params` for `endpoint` and renders the request URL without sending it.
    pub fn url_for(&self, endpoint: &str, params: &ParameterSet) -> Result<String> {
        let spec = self.registry.get(endpoint)?;
        validate(spec, params)?;
        let url = render(&self.endpoint_url(spec), params, self.encoding);
        tracing::trace!(endpoint, url = %self.redact(spec, &url), "url rendered");
        Ok(url)
    }

    /// Validates, renders and dispatches a request, returning the decoded body.
    #[instrument(skip(self, params))]
    pub async fn fetch(&self, endpoint: &str, params: &ParameterSet) -> Result<Value> {
        let url = self.url_for(endpoint, params)?;
        tracing::debug!(params = params.len(), "dispatching request");
        let response = self.transport.fetch_json(&url).await;
        if let Err(err) = &response {
            tracing::debug!(error = %err, "request failed");
        }
        response
    }

    /// Leaderboard scores of a beatmap.
    pub async fn get_scores(&self, params: &ParameterSet) -> Result<Value> {
        self.fetch(GET_SCORES, params).await
    }

    /// Ready-to-fetch URL of a replay; no request is sent.
    ///
    /// Use [`OsuApi::fetch`] with [`GET_REPLAY`] to download the replay data instead.
    pub fn get_replay(&self, params: &ParameterSet) -> Result<String> {
        self.url_for(GET_REPLAY, params)
    }

    pub async fn get_beatmaps(&self, params: &ParameterSet) -> Result<Value> {
        self.fetch(GET_BEATMAPS, params).await
    }

    pub async fn get_user(&self, params: &ParameterSet) -> Result<Value> {
        self.fetch(GET_USER, params).await
    }

    pub async fn get_user_best(&self, params: &ParameterSet) -> Result<Value> {
        self.fetch(GET_USER_BEST, params).await
    }

    pub async fn get_user_recent(&self, params: &ParameterSet) -> Result<Value> {
        self.fetch(GET_USER_RECENT, params).await
    }

    pub async fn get_match(&self, params: &ParameterSet) -> Result<Value> {
        self.fetch(GET_MATCH, params).await
    }

    /// Masks the credential slot of the endpoint URL; the query tail is untouched.
    fn redact(&self, spec: &EndpointSpec, url: &str) -> String {
        let masked = self.substitute(spec, "***");
        match url.strip_prefix(self.endpoint_url(spec).as_str()) {
            Some(query) => format!("{masked}{query}"),
            None => masked,
        }
    }
}

pub struct OsuApiBuilder {
    key: String,
    base_url: String,
    encoding: QueryEncoding,
    registry: Option<Arc<EndpointRegistry>>,
    transport: Option<DynTransport>,
}

impl OsuApiBuilder {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            encoding: QueryEncoding::default(),
            registry: None,
            transport: None,
        }
    }

    /// Overrides the URL template; it must contain `{endpoint}` and `{key}`.
    pub fn base_url(mut self, template: impl Into<String>) -> Self {
        self.base_url = template.into();
        self
    }

    pub fn encoding(mut self, encoding: QueryEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn registry(mut self, registry: impl Into<Arc<EndpointRegistry>>) -> Self {
        self.registry = Some(registry.into());
        self
    }

    pub fn transport(mut self, transport: DynTransport) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<OsuApi> {
        ConfigValidator::validate_api_key(&self.key)?;
        ConfigValidator::validate_base_url(&self.base_url)?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport()?,
        };
        let registry = self
            .registry
            .unwrap_or_else(|| Arc::new(EndpointRegistry::default()));

        tracing::debug!(
            endpoints = registry.len(),
            encoding = ?self.encoding,
            "osu! API client ready"
        );

        Ok(OsuApi {
            key: self.key,
            base_url: self.base_url,
            encoding: self.encoding,
            registry,
            transport,
        })
    }
}

#[cfg(feature = "http-transport")]
fn default_transport() -> Result<DynTransport> {
    Ok(Arc::new(crate::transport::HttpTransport::new()?))
}

#[cfg(not(feature = "http-transport"))]
fn default_transport() -> Result<DynTransport> {
    Err(crate::error::OsuApiError::Config(
        "no transport configured and the `http-transport` feature is disabled".to_string(),
    ))
}
