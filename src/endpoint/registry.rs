use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::spec::EndpointSpec;
use crate::error::{OsuApiError, Result};

pub const GET_BEATMAPS: &str = "get_beatmaps";
pub const GET_USER: &str = "get_user";
pub const GET_SCORES: &str = "get_scores";
pub const GET_USER_BEST: &str = "get_user_best";
pub const GET_USER_RECENT: &str = "get_user_recent";
pub const GET_MATCH: &str = "get_match";
pub const GET_REPLAY: &str = "get_replay";

struct EndpointDef {
    name: &'static str,
    required: &'static [&'static str],
    allowed: &'static [&'static str],
}

/// osu! API v1 endpoints; each path segment equals the endpoint name.
const BUILTIN_ENDPOINTS: &[EndpointDef] = &[
    EndpointDef {
        name: GET_BEATMAPS,
        required: &[],
        allowed: &["since", "s", "b", "u", "type", "m", "a", "h", "limit", "mods"],
    },
    EndpointDef {
        name: GET_USER,
        required: &["u"],
        allowed: &["u", "m", "type", "event_days"],
    },
    EndpointDef {
        name: GET_SCORES,
        required: &["b"],
        allowed: &["b", "u", "m", "mods", "type", "limit"],
    },
    EndpointDef {
        name: GET_USER_BEST,
        required: &["u"],
        allowed: &["u", "m", "limit", "type"],
    },
    EndpointDef {
        name: GET_USER_RECENT,
        required: &["u"],
        allowed: &["u", "m", "limit", "type"],
    },
    EndpointDef {
        name: GET_MATCH,
        required: &["mp"],
        allowed: &["mp"],
    },
    EndpointDef {
        name: GET_REPLAY,
        required: &["b", "u"],
        allowed: &["b", "u", "m", "s", "type", "mods"],
    },
];

/// Lookup table from operation identifier to its parameter schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointRegistry {
    endpoints: BTreeMap<String, EndpointSpec>,
}

impl Default for EndpointRegistry {
    fn default() -> Self {
        match Self::builtin() {
            Ok(registry) => registry,
            Err(err) => panic!("builtin endpoint table is malformed: {err}"),
        }
    }
}

impl EndpointRegistry {
    /// The osu! API v1 table. Fails only if a builtin definition is malformed.
    pub fn builtin() -> Result<Self> {
        let mut endpoints = BTreeMap::new();
        for def in BUILTIN_ENDPOINTS {
            let required = def.required.iter().copied();
            let allowed = def.allowed.iter().copied();
            let spec = EndpointSpec::new(def.name, required, allowed)?;
            if endpoints.insert(def.name.to_string(), spec).is_some() {
                return Err(OsuApiError::InvalidRegistry(format!(
                    "builtin endpoint `{}` declared twice",
                    def.name
                )));
            }
        }
        Ok(Self { endpoints })
    }

    /// An empty registry, for callers supplying their own table.
    pub fn empty() -> Self {
        Self {
            endpoints: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, spec: EndpointSpec) {
        let name = name.into();
        tracing::debug!(endpoint = %name, path = spec.path_segment(), "endpoint registered");
        self.endpoints.insert(name, spec);
    }

    pub fn with_endpoint(mut self, name: impl Into<String>, spec: EndpointSpec) -> Self {
        self.register(name, spec);
        self
    }

    pub fn get(&self, name: &str) -> Result<&EndpointSpec> {
        self.endpoints
            .get(name)
            .ok_or_else(|| OsuApiError::UnknownEndpoint(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.endpoints.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.endpoints.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EndpointSpec)> {
        self.endpoints.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Parses a JSON table of the form `{"name": {"path": .., "required": [..], "allowed": [..]}}`.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let endpoints: BTreeMap<String, EndpointSpec> = serde_json::from_str(content)
            .map_err(|err| OsuApiError::InvalidRegistry(err.to_string()))?;
        Ok(Self { endpoints })
    }

    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| {
            OsuApiError::InvalidRegistry(format!("cannot read `{}`: {err}", path.display()))
        })?;
        let registry = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), endpoints = registry.len(), "endpoint table loaded");
        Ok(registry)
    }

    /// Merges `other` into this registry; entries of `other` win.
    pub fn extend(&mut self, other: EndpointRegistry) {
        self.endpoints.extend(other.endpoints);
    }
}
