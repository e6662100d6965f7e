use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OsuApiError>;

/// Why a parameter set was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterErrorKind {
    MissingRequired,
    UnknownParameter,
    UnsupportedValue,
}

impl fmt::Display for ParameterErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ParameterErrorKind::MissingRequired => "missing required parameter",
            ParameterErrorKind::UnknownParameter => "unknown parameter",
            ParameterErrorKind::UnsupportedValue => "unsupported value for parameter",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum OsuApiError {
    #[error("endpoint `{0}` not registered")]
    UnknownEndpoint(String),
    #[error("invalid parameters: {kind} `{name}`")]
    InvalidParameters {
        kind: ParameterErrorKind,
        name: String,
    },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("invalid endpoint registry: {0}")]
    InvalidRegistry(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OsuApiError {
    pub(crate) fn missing(name: impl Into<String>) -> Self {
        OsuApiError::InvalidParameters {
            kind: ParameterErrorKind::MissingRequired,
            name: name.into(),
        }
    }

    pub(crate) fn unknown(name: impl Into<String>) -> Self {
        OsuApiError::InvalidParameters {
            kind: ParameterErrorKind::UnknownParameter,
            name: name.into(),
        }
    }

    /// The offending parameter kind, when this is a validation failure.
    pub fn parameter_kind(&self) -> Option<ParameterErrorKind> {
        match self {
            OsuApiError::InvalidParameters { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
