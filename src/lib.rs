pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod request;
pub mod transport;
pub mod utils;

pub use client::{OsuApi, OsuApiBuilder, DEFAULT_BASE_URL};
pub use config::ApiConfig;
pub use endpoint::{
    EndpointRegistry, EndpointSpec, GET_BEATMAPS, GET_MATCH, GET_REPLAY, GET_SCORES, GET_USER,
    GET_USER_BEST, GET_USER_RECENT,
};
pub use error::{OsuApiError, ParameterErrorKind, Result};
pub use request::{render, validate, ParamValue, ParameterSet, QueryEncoding};
#[cfg(feature = "http-transport")]
pub use transport::HttpTransport;
pub use transport::{DynTransport, StaticTransport, Transport};
pub use utils::{logging, validation};
