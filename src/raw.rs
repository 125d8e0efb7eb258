//! Raw value-space values (v0.1)
//!
//! A `RawValue` is what a value provider hands back for a key before any
//! element conversion: a single scalar token or an ordered array of tokens.
//!
//! Absence is `Option<RawValue>::None` at the provider boundary. The whole
//! binding design depends on keeping "absent" and "empty array" apart:
//! absent means not-bound, an empty array means bound-with-zero-elements.

use serde::{Deserialize, Serialize};

/// A raw value resolved from the flat key space.
///
/// Tokens are untyped strings; conversion happens later, per element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A single scalar token (`items=42`).
    Scalar(String),
    /// An ordered array of tokens (`items=42&items=100`), possibly empty.
    Array(Vec<String>),
}

impl RawValue {
    /// Create a scalar raw value
    pub fn scalar(token: impl Into<String>) -> Self {
        RawValue::Scalar(token.into())
    }

    /// Create an array raw value from any iterable of tokens
    pub fn array<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RawValue::Array(tokens.into_iter().map(Into::into).collect())
    }

    /// Ordered view of the contained tokens (a scalar is one token)
    pub fn tokens(&self) -> &[String] {
        match self {
            RawValue::Scalar(s) => std::slice::from_ref(s),
            RawValue::Array(items) => items,
        }
    }

    /// First token, if any (scalar itself, or the array head)
    pub fn first(&self) -> Option<&str> {
        self.tokens().first().map(String::as_str)
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens().len()
    }

    /// True for an empty array (a scalar always has one token)
    pub fn is_empty(&self) -> bool {
        self.tokens().is_empty()
    }
}

impl From<&str> for RawValue {
    fn from(token: &str) -> Self {
        RawValue::Scalar(token.to_string())
    }
}

impl From<String> for RawValue {
    fn from(token: String) -> Self {
        RawValue::Scalar(token)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(tokens: Vec<String>) -> Self {
        RawValue::Array(tokens)
    }
}
