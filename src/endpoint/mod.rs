pub mod registry;
pub mod spec;

pub use registry::{
    EndpointRegistry, GET_BEATMAPS, GET_MATCH, GET_REPLAY, GET_SCORES, GET_USER, GET_USER_BEST,
    GET_USER_RECENT,
};
pub use spec::EndpointSpec;
