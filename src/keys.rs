//! Key construction for the flat value space (v0.1)
//!
//! The binding conventions address elements through derived keys:
//!
//! | Key | Meaning |
//! |-----|---------|
//! | `<name>.index` | ordered array of explicit index tokens |
//! | `<name>[<token>]` | element value for an explicit token |
//! | `<name>[0]`, `<name>[1]`, … | element value for an implicit index |
//! | `<name>` | flat scalar or array value |
//!
//! Key construction is case-sensitive and does no escaping: index tokens are
//! opaque and taken as-is.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::BindError;

/// Model names: no brackets, no dots, no whitespace, non-empty.
/// Brackets and `.index` are reserved for derived keys.
static MODEL_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\[\]\s.]+$").expect("model name regex is valid"));

/// Key holding the explicit index token list: `<name>.index`
pub fn index_key(model_name: &str) -> String {
    format!("{model_name}.index")
}

/// Key addressing one element: `<name>[<token>]`
pub fn element_key(model_name: &str, token: &str) -> String {
    format!("{model_name}[{token}]")
}

/// Validate a caller-supplied model name before deriving keys from it
///
/// Derived keys splice the name into `<name>.index` and `<name>[<token>]`,
/// so names containing brackets, dots, or whitespace would alias other keys.
pub fn validate_model_name(name: &str) -> Result<(), BindError> {
    if name.is_empty() {
        return Err(BindError::InvalidModelName {
            name: name.to_string(),
            reason: "cannot be empty".into(),
        });
    }

    if !MODEL_NAME_RE.is_match(name) {
        return Err(BindError::InvalidModelName {
            name: name.to_string(),
            reason: "must not contain brackets, dots, or whitespace".into(),
        });
    }

    Ok(())
}
