//! Key/value input supplied by the caller.
//!
//! Pairs are kept in the order given. Downstream processing treats the input
//! as a mapping: when a key repeats, the last value wins and the key keeps the
//! position of its first occurrence.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ParseError;

/// Ordered sequence of `(key, value)` pairs. Keys need not be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueInput {
    pairs: Vec<(String, String)>,
}

impl KeyValueInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a single `KEY=VALUE` argument.
    ///
    /// The value may be empty (`key=`). The key may not, and the argument must
    /// contain exactly one `=`.
    pub fn parse_pair(raw: &str) -> Result<(String, String), ParseError> {
        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| ParseError::MissingSeparator(raw.to_string()))?;
        if value.contains('=') {
            return Err(ParseError::AmbiguousSeparator(raw.to_string()));
        }
        if key.is_empty() {
            return Err(ParseError::EmptyKey(raw.to_string()));
        }
        Ok((key.to_string(), value.to_string()))
    }

    /// Parse every `KEY=VALUE` argument, failing on the first malformed one.
    pub fn parse_all<I, S>(raw: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pairs = raw
            .into_iter()
            .map(|s| Self::parse_pair(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { pairs })
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Raw pairs in the order supplied, duplicates included.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Collapse duplicate keys: last value wins, first position kept.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut out: Vec<(&str, &str)> = Vec::with_capacity(self.pairs.len());
        for (key, value) in &self.pairs {
            match out.iter_mut().find(|(k, _)| *k == key.as_str()) {
                Some(slot) => slot.1 = value.as_str(),
                None => out.push((key.as_str(), value.as_str())),
            }
        }
        out
    }

    /// Distinct keys in first-occurrence order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries().into_iter().map(|(k, _)| k).collect()
    }

    /// Value for `key` under the last-value-wins rule.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeyValueInput {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Parse a `-d` argument into a JSON object.
pub fn parse_json_object(raw: &str) -> Result<Map<String, Value>, ParseError> {
    match serde_json::from_str(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ParseError::NotAnObject(json_kind(&other))),
        Err(e) => Err(ParseError::InvalidJson(e.to_string())),
    }
}

/// Name of a JSON value's type, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
