//! In-memory value provider over parsed form pairs (v0.1)
//!
//! Built either from a form-urlencoded string (see `crate::query`) or from
//! explicit inserts. Repeated keys accumulate into an array in appearance
//! order, matching how HTTP form posts express multi-valued fields.

use std::collections::HashMap;

use async_trait::async_trait;

use super::ValueProvider;
use crate::raw::RawValue;

/// Value space backed by a key → tokens map.
///
/// A key inserted once resolves to a scalar; inserted repeatedly it resolves
/// to an array in insertion order. [`FormProvider::insert_empty`] plants a
/// present-but-empty array, which binds to an empty collection rather than
/// not-bound.
#[derive(Debug, Clone, Default)]
pub struct FormProvider {
    values: HashMap<String, Entry>,
}

#[derive(Debug, Clone)]
enum Entry {
    /// Key seen exactly once with a single token
    Single(String),
    /// Key seen with multiple tokens, or explicitly multi-valued
    Multi(Vec<String>),
}

impl FormProvider {
    /// Create an empty value space
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one key/token pair; repeats accumulate into an array
    pub fn insert(&mut self, key: impl Into<String>, token: impl Into<String>) {
        let key = key.into();
        let token = token.into();
        match self.values.get_mut(&key) {
            None => {
                self.values.insert(key, Entry::Single(token));
            }
            Some(Entry::Single(first)) => {
                let first = std::mem::take(first);
                self.values.insert(key, Entry::Multi(vec![first, token]));
            }
            Some(Entry::Multi(tokens)) => tokens.push(token),
        }
    }

    /// Add a key holding all given tokens as an array, replacing prior tokens
    pub fn insert_array<I, S>(&mut self, key: impl Into<String>, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.insert(
            key.into(),
            Entry::Multi(tokens.into_iter().map(Into::into).collect()),
        );
    }

    /// Plant a present-but-empty array at `key`
    pub fn insert_empty(&mut self, key: impl Into<String>) {
        self.values.insert(key.into(), Entry::Multi(Vec::new()));
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no keys have been inserted
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether any key for `model_name` exists under the indexed sub-key
    /// convention (`<name>[…]`). Used by convention inspection, not binding.
    pub fn has_indexed_keys(&self, model_name: &str) -> bool {
        let prefix = format!("{model_name}[");
        self.values.keys().any(|k| k.starts_with(&prefix) && k.ends_with(']'))
    }
}

#[async_trait]
impl ValueProvider for FormProvider {
    async fn get_value(&self, key: &str) -> Option<RawValue> {
        match self.values.get(key)? {
            Entry::Single(token) => Some(RawValue::Scalar(token.clone())),
            Entry::Multi(tokens) => Some(RawValue::Array(tokens.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_key_resolves_to_none() {
        let provider = FormProvider::new();
        assert_eq!(provider.get_value("missing").await, None);
    }

    #[tokio::test]
    async fn single_insert_resolves_to_scalar() {
        let mut provider = FormProvider::new();
        provider.insert("items[0]", "42");
        assert_eq!(
            provider.get_value("items[0]").await,
            Some(RawValue::scalar("42"))
        );
    }

    #[tokio::test]
    async fn repeated_inserts_accumulate_in_order() {
        let mut provider = FormProvider::new();
        provider.insert("items", "42");
        provider.insert("items", "100");
        provider.insert("items", "200");
        assert_eq!(
            provider.get_value("items").await,
            Some(RawValue::array(["42", "100", "200"]))
        );
    }

    #[tokio::test]
    async fn empty_array_is_present_not_absent() {
        let mut provider = FormProvider::new();
        provider.insert_empty("items");
        let raw = provider.get_value("items").await.unwrap();
        assert!(raw.is_empty());
    }

    #[tokio::test]
    async fn keys_are_case_sensitive() {
        let mut provider = FormProvider::new();
        provider.insert("Items", "1");
        assert_eq!(provider.get_value("items").await, None);
    }

    #[test]
    fn indexed_key_detection() {
        let mut provider = FormProvider::new();
        provider.insert("items[0]", "1");
        assert!(provider.has_indexed_keys("items"));
        assert!(!provider.has_indexed_keys("item"));
        assert!(!provider.has_indexed_keys("orders"));
    }
}
