//! Value-space ingestion from form-urlencoded input (v0.1)
//!
//! Turns an `application/x-www-form-urlencoded` body or query string into a
//! [`FormProvider`]. Percent-decoding and `+`-as-space follow the form
//! encoding rules (`url::form_urlencoded`); repeated keys accumulate into an
//! array in appearance order, which is what the flat-field binding convention
//! consumes.

use url::form_urlencoded;

use crate::error::BindError;
use crate::provider::FormProvider;

/// Parse a query string / form body into a value provider.
///
/// A leading `?` is tolerated so full request-target tails can be pasted in.
/// Pairs with an empty key are rejected: they can only come from malformed
/// input and would otherwise alias every lookup miss.
pub fn parse_query(input: &str) -> Result<FormProvider, BindError> {
    let trimmed = input.strip_prefix('?').unwrap_or(input);

    let mut provider = FormProvider::new();
    for (position, (key, token)) in form_urlencoded::parse(trimmed.as_bytes()).enumerate() {
        if key.is_empty() {
            return Err(BindError::InvalidQuery {
                details: format!("empty key in pair {}", position + 1),
            });
        }
        provider.insert(key.into_owned(), token.into_owned());
    }

    Ok(provider)
}
