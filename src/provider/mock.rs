//! Mock value provider for testing
//!
//! Returns configurable values without a real request behind it, and records
//! every lookup so tests can assert on scan order. Essential for exercising
//! the sequential-scan contract of the collection binder.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::ValueProvider;
use crate::raw::RawValue;

/// Mock provider with preconfigured values and lookup recording
#[derive(Default)]
pub struct MockProvider {
    /// Configured key → value pairs
    values: HashMap<String, RawValue>,
    /// Every key looked up, in call order (for assertions)
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create an empty mock (every lookup misses)
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure a value for a key
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Get all keys looked up so far, in order
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    /// Get the last key looked up
    pub fn last_lookup(&self) -> Option<String> {
        self.lookups.lock().unwrap().last().cloned()
    }

    /// Clear recorded lookups
    pub fn clear_lookups(&self) {
        self.lookups.lock().unwrap().clear();
    }
}

#[async_trait]
impl ValueProvider for MockProvider {
    async fn get_value(&self, key: &str) -> Option<RawValue> {
        self.lookups.lock().unwrap().push(key.to_string());
        self.values.get(key).cloned()
    }
}
