use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{OsuApiError, Result};

/// Parameter schema of a single remote operation.
///
/// `required` is always a subset of `allowed`, and neither list repeats a name.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawEndpointSpec")]
pub struct EndpointSpec {
    #[serde(rename = "path")]
    path_segment: String,
    required: Vec<String>,
    allowed: Vec<String>,
}

#[derive(Deserialize)]
struct RawEndpointSpec {
    path: String,
    #[serde(default)]
    required: Vec<String>,
    #[serde(default)]
    allowed: Vec<String>,
}

impl TryFrom<RawEndpointSpec> for EndpointSpec {
    type Error = OsuApiError;

    fn try_from(raw: RawEndpointSpec) -> Result<Self> {
        EndpointSpec::new(raw.path, raw.required, raw.allowed)
    }
}

impl EndpointSpec {
    pub fn new<P, R, A>(path_segment: P, required: R, allowed: A) -> Result<Self>
    where
        P: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        let spec = Self {
            path_segment: path_segment.into(),
            required: required.into_iter().map(Into::into).collect(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        };
        spec.check()?;
        Ok(spec)
    }

    pub fn path_segment(&self) -> &str {
        &self.path_segment
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|candidate| candidate == name)
    }

    pub fn is_allowed(&self, name: &str) -> bool {
        self.allowed.iter().any(|candidate| candidate == name)
    }

    fn check(&self) -> Result<()> {
        let path = &self.path_segment;
        let malformed = path.is_empty()
            || path.contains(['/', '?', '&', '#', '{', '}'])
            || path.contains(char::is_whitespace);
        if malformed {
            return Err(OsuApiError::InvalidRegistry(format!(
                "invalid path segment `{path}`"
            )));
        }

        for (label, names) in [("required", &self.required), ("allowed", &self.allowed)] {
            let mut seen = HashSet::new();
            for name in names {
                if name.is_empty() {
                    return Err(OsuApiError::InvalidRegistry(format!(
                        "empty {label} parameter name for `{path}`"
                    )));
                }
                if !seen.insert(name.as_str()) {
                    return Err(OsuApiError::InvalidRegistry(format!(
                        "duplicate {label} parameter `{name}` for `{path}`"
                    )));
                }
            }
        }

        if let Some(name) = self.required.iter().find(|name| !self.is_allowed(name)) {
            return Err(OsuApiError::InvalidRegistry(format!(
                "required parameter `{name}` is not allowed for `{path}`"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_required_outside_allowed() {
        let err = EndpointSpec::new("get_x", ["a"], ["b"]).unwrap_err();
        assert!(matches!(err, OsuApiError::InvalidRegistry(_)));
    }

    #[test]
    fn rejects_duplicate_names() {
        assert!(EndpointSpec::new("get_x", Vec::<String>::new(), ["a", "a"]).is_err());
    }

    #[test]
    fn rejects_path_with_query_characters() {
        assert!(EndpointSpec::new("get_x?y", Vec::<String>::new(), ["a"]).is_err());
        assert!(EndpointSpec::new("", Vec::<String>::new(), ["a"]).is_err());
    }

    #[test]
    fn rejects_path_with_template_placeholders() {
        for path in ["get_{key}", "{endpoint}", "get_{", "get_}"] {
            let err = EndpointSpec::new(path, Vec::<String>::new(), ["a"]).unwrap_err();
            assert!(matches!(err, OsuApiError::InvalidRegistry(_)), "{path}");
        }
    }

    #[test]
    fn deserializes_and_checks_invariant() {
        let spec: EndpointSpec =
            serde_json::from_str(r#"{"path":"get_x","required":["a"],"allowed":["a","b"]}"#)
                .unwrap();
        assert_eq!(spec.path_segment(), "get_x");
        assert!(spec.is_required("a"));
        assert!(spec.is_allowed("b"));

        let bad = serde_json::from_str::<EndpointSpec>(r#"{"path":"get_x","required":["c"]}"#);
        assert!(bad.is_err());
    }
}
