use std::env;

use crate::client::{OsuApiBuilder, DEFAULT_BASE_URL};
use crate::error::{OsuApiError, Result};
use crate::request::QueryEncoding;

pub const KEY_ENV: &str = "OSU_API_KEY";
pub const BASE_URL_ENV: &str = "OSU_API_BASE_URL";
pub const LEGACY_QUERY_ENV: &str = "OSU_API_LEGACY_QUERY";

/// Client settings read from the process environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub key: String,
    pub base_url: String,
    pub encoding: QueryEncoding,
}

impl ApiConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            encoding: QueryEncoding::default(),
        }
    }

    /// `OSU_API_KEY` is required; `OSU_API_BASE_URL` and `OSU_API_LEGACY_QUERY`
    /// are optional.
    pub fn from_env() -> Result<Self> {
        let key = env::var(KEY_ENV)
            .map_err(|_| OsuApiError::Config(format!("{KEY_ENV} is not set")))?;
        Self::new(key).apply_env_overrides()
    }

    /// Layers the optional environment settings over `self`.
    pub fn apply_env_overrides(mut self) -> Result<Self> {
        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                self.base_url = base_url;
            }
        }
        if let Ok(raw) = env::var(LEGACY_QUERY_ENV) {
            if parse_flag(LEGACY_QUERY_ENV, &raw)? {
                self.encoding = QueryEncoding::Legacy;
            }
        }
        Ok(self)
    }

    pub fn into_builder(self) -> OsuApiBuilder {
        OsuApiBuilder::new(self.key)
            .base_url(self.base_url)
            .encoding(self.encoding)
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(OsuApiError::Config(format!(
            "{name} must be a boolean, got `{other}`"
        ))),
    }
}
