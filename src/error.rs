//! Error types with fix suggestions (v0.1)
//!
//! Binding itself never errors: "no value" and "conversion failure" are
//! encoded in return types (`BoundCollection`, `ElementOutcome`) and the
//! validation sink. `BindError` covers the surfaces around the core —
//! value-space ingestion and CLI input validation.

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum BindError {
    // ─────────────────────────────────────────────────────────────
    // Value-space ingestion (FB-010 to FB-012)
    // ─────────────────────────────────────────────────────────────

    #[error("FB-010: Invalid query string: {details}")]
    InvalidQuery { details: String },

    #[error("FB-011: Invalid model name '{name}': {reason}")]
    InvalidModelName { name: String, reason: String },

    #[error("FB-012: Unknown element type '{name}' (expected int, float, bool, or string)")]
    UnknownElementType { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FixSuggestion for BindError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            BindError::InvalidQuery { .. } => {
                Some("Pass the value space as form-urlencoded pairs, e.g. 'items[0]=1&items[1]=2'")
            }
            BindError::InvalidModelName { .. } => {
                Some("Model names may not contain brackets or whitespace; use the bare field name, e.g. 'items'")
            }
            BindError::UnknownElementType { .. } => {
                Some("Use one of: --elem-type int | float | bool | string")
            }
            BindError::Io(_) => None,
        }
    }
}
