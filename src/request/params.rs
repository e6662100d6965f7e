use std::fmt;

use serde_json::Value;

use crate::error::{OsuApiError, ParameterErrorKind, Result};

/// A single query value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Integer(i64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(text) => f.write_str(text),
            ParamValue::Integer(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(i64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Integer(i64::from(value))
    }
}

/// Caller-supplied query parameters, kept in supply order.
///
/// An entry whose value is `None` counts as not supplied: it never satisfies a
/// required name, is not checked against the endpoint schema, and is never
/// rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: Vec<(String, Option<ParamValue>)>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, Some(value.into()));
        self
    }

    pub fn omit(mut self, name: impl Into<String>) -> Self {
        self.insert(name, None);
        self
    }

    /// Sets `name`, keeping its original position if it was already supplied.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<ParamValue>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .and_then(|(_, value)| value.as_ref())
    }

    /// Whether `name` is supplied with a value.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Supplied entries with a value, in supply order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries
            .iter()
            .filter_map(|(name, value)| value.as_ref().map(|value| (name.as_str(), value)))
    }

    pub fn len(&self) -> usize {
        self.present().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds a set from a JSON object. `null` marks a parameter as omitted.
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            OsuApiError::Config("parameters must be a JSON object".to_string())
        })?;

        let mut params = ParameterSet::new();
        for (name, raw) in object {
            let value = match raw {
                Value::Null => None,
                Value::String(text) => Some(ParamValue::Text(text.clone())),
                Value::Bool(flag) => Some(ParamValue::from(*flag)),
                Value::Number(number) => Some(match number.as_i64() {
                    Some(integer) => ParamValue::Integer(integer),
                    None => ParamValue::Text(number.to_string()),
                }),
                Value::Array(_) | Value::Object(_) => {
                    return Err(OsuApiError::InvalidParameters {
                        kind: ParameterErrorKind::UnsupportedValue,
                        name: name.clone(),
                    })
                }
            };
            params.insert(name.clone(), value);
        }
        Ok(params)
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = ParameterSet::new();
        for (name, value) in iter {
            params.insert(name, Some(value.into()));
        }
        params
    }
}
