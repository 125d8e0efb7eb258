//! Per-attempt validation state (v0.1)
//!
//! Conversion failures never abort a collection bind; they are recorded here
//! and the failing position is defaulted or dropped depending on strategy.
//! One `ModelState` lives inside one `BindingContext` and is discarded with
//! it.

/// One recorded conversion failure: the sub-key that held the token, and the
/// raw token that failed to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidValue {
    pub key: String,
    pub raw: String,
}

/// Validation sink for a single bind attempt.
///
/// Entries are kept in recording order, which under the sequential-scan
/// contract is also element order.
#[derive(Debug, Clone, Default)]
pub struct ModelState {
    invalid: Vec<InvalidValue>,
}

impl ModelState {
    /// Create an empty (valid) state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one failed element; never aborts the bind
    pub fn record_invalid(&mut self, key: &str, raw: &str) {
        self.invalid.push(InvalidValue {
            key: key.to_string(),
            raw: raw.to_string(),
        });
    }

    /// True when no element failed conversion
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    /// Recorded failures, in element order
    pub fn invalid_values(&self) -> &[InvalidValue] {
        &self.invalid
    }
}
