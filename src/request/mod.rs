pub mod params;
pub mod render;
pub mod validation;

pub use params::{ParamValue, ParameterSet};
pub use render::{render, QueryEncoding};
pub use validation::validate;
