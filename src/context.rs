//! Binding context - per-attempt state (v0.1)
//!
//! One `BindingContext` is created per bind attempt, consumed by exactly one
//! logical task, and discarded. It carries the target key name, the element
//! binder, an optional pre-existing destination, and the validation state.
//! Nothing in it is shared across requests.

use crate::element::ElementBinder;
use crate::provider::ValueProvider;
use crate::validation::ModelState;

/// Locale hint for element conversion, as a BCP-47-ish tag (`fr-FR`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Locale(tag.into())
    }

    /// The full tag as given (`fr-FR`)
    pub fn tag(&self) -> &str {
        &self.0
    }

    /// The language subtag (`fr` out of `fr-FR`)
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

/// Per-attempt state for one collection bind.
///
/// `existing` is the in-place destination: when set, bound elements are
/// appended to it and the bind reports `BoundCollection::InPlace` instead of
/// allocating. `is_read_only` is the caller-set capability flag saying the
/// target container cannot be replaced (such callers supply `existing`).
pub struct BindingContext<'a, T> {
    /// Target key name; sub-keys are derived from it (`<name>[<token>]`)
    pub model_name: String,
    /// Resolver for the flat value space
    pub provider: &'a dyn ValueProvider,
    /// Converter for individual elements, injected by the caller
    pub element_binder: &'a dyn ElementBinder<T>,
    /// Pre-existing destination container, mutated in place when present
    pub existing: Option<&'a mut Vec<T>>,
    /// Whether the target container cannot be replaced by the caller.
    /// Read-only callers must also supply `existing`; `bind_model`
    /// debug-asserts the pairing.
    pub is_read_only: bool,
    /// Locale hint forwarded to every element sub-bind
    pub locale: Option<Locale>,
    /// Validation sink for conversion failures
    pub state: ModelState,
}

impl<'a, T> BindingContext<'a, T> {
    /// Create a context binding `model_name` with a fresh destination
    pub fn new(
        model_name: impl Into<String>,
        provider: &'a dyn ValueProvider,
        element_binder: &'a dyn ElementBinder<T>,
    ) -> Self {
        Self {
            model_name: model_name.into(),
            provider,
            element_binder,
            existing: None,
            is_read_only: false,
            locale: None,
            state: ModelState::new(),
        }
    }

    /// Bind into a caller-supplied container instead of allocating
    pub fn with_existing(mut self, dest: &'a mut Vec<T>) -> Self {
        self.existing = Some(dest);
        self
    }

    /// Mark the target container as non-replaceable
    pub fn read_only(mut self) -> Self {
        self.is_read_only = true;
        self
    }

    /// Set the locale hint for element conversion
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }
}
