//! Single-pair provider overlay (v0.1)
//!
//! The flat-field strategy binds each array position independently: it hands
//! the element binder one token at the model name, through the same provider
//! interface the binder would use for any other key. `ElementalProvider`
//! exposes exactly that one synthetic pair and defers every other key to the
//! underlying provider.

use async_trait::async_trait;

use super::ValueProvider;
use crate::raw::RawValue;

/// One `(key, token)` pair layered over a fallback provider.
pub struct ElementalProvider<'a> {
    key: String,
    token: String,
    fallback: &'a dyn ValueProvider,
}

impl<'a> ElementalProvider<'a> {
    /// Expose `token` at `key`, deferring all other keys to `fallback`
    pub fn new(
        key: impl Into<String>,
        token: impl Into<String>,
        fallback: &'a dyn ValueProvider,
    ) -> Self {
        Self {
            key: key.into(),
            token: token.into(),
            fallback,
        }
    }
}

#[async_trait]
impl ValueProvider for ElementalProvider<'_> {
    async fn get_value(&self, key: &str) -> Option<RawValue> {
        if key == self.key {
            Some(RawValue::Scalar(self.token.clone()))
        } else {
            self.fallback.get_value(key).await
        }
    }
}
