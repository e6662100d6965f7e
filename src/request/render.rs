use std::borrow::Cow;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::params::ParameterSet;

/// How parameter names and values are written into the query string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryEncoding {
    /// Percent-encode everything outside the unreserved set.
    #[default]
    Percent,
    /// Insert names and values verbatim. `&`, `=` and spaces pass through
    /// unescaped and can corrupt the query.
    Legacy,
}

impl QueryEncoding {
    pub fn encode<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        match self {
            QueryEncoding::Percent => urlencoding::encode(raw),
            QueryEncoding::Legacy => Cow::Borrowed(raw),
        }
    }
}

/// Appends `&name=value` to `base_url` for every present parameter, in supply order.
pub fn render(base_url: &str, params: &ParameterSet, encoding: QueryEncoding) -> String {
    let mut url = String::from(base_url);
    for (name, value) in params.present() {
        let value = value.to_string();
        let _ = write!(
            url,
            "&{}={}",
            encoding.encode(name),
            encoding.encode(&value)
        );
    }
    url
}
