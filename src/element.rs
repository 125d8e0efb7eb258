//! Element binding - one token to one typed value (v0.1)
//!
//! The collection binder never converts tokens itself. It builds a synthetic
//! per-element [`ElementContext`] and hands it to an [`ElementBinder`], which
//! either produces a typed value, reports the token as unparsable, or signals
//! that no value exists at the sub-key at all. That three-way outcome is the
//! whole error taxonomy of the core: absence is not an error, and conversion
//! failure is always recovered locally.

use std::marker::PhantomData;
use std::str::FromStr;

use async_trait::async_trait;

use crate::context::Locale;
use crate::provider::ValueProvider;

/// Outcome of an element sub-bind where a value existed at the sub-key.
///
/// "No value at all" is `None` at the [`ElementBinder::bind`] boundary, not a
/// variant here — the distinction drives gap termination and positional
/// defaulting and must stay visible in the types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementOutcome<T> {
    /// The token converted to a typed element
    Bound(T),
    /// A token was present but did not convert; `raw` is kept for the
    /// validation sink
    Invalid { raw: String },
}

/// Synthetic context for one element sub-bind.
pub struct ElementContext<'a> {
    /// Fully derived sub-key (`items[3]`, `items[foo]`, or the bare name for
    /// flat binding)
    pub key: String,
    /// Value space to resolve the sub-key against
    pub provider: &'a dyn ValueProvider,
    /// Locale hint from the parent binding context
    pub locale: Option<Locale>,
}

/// Converts one raw token into a typed element. May suspend.
///
/// Injected through the binding context so tests can substitute a trivial
/// in-memory double; nothing is discovered at bind time.
#[async_trait]
pub trait ElementBinder<T>: Send + Sync {
    /// Bind the element at `cx.key`.
    ///
    /// Returns `None` when the sub-key is entirely absent, otherwise the
    /// conversion outcome.
    async fn bind(&self, cx: &ElementContext<'_>) -> Option<ElementOutcome<T>>;
}

/// Stock element binder: resolve the sub-key through the provider and parse
/// the first token with `FromStr`.
///
/// Under a decimal-comma locale (`fr-FR`, `de-DE`, …) a token that fails to
/// parse as-is is retried with `,` read as the decimal separator, so
/// `"3,5"` binds as `3.5`. Integer-like tokens are unaffected: they fail both
/// ways and are reported invalid with the original raw token.
pub struct ParseBinder<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> ParseBinder<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for ParseBinder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Languages where `,` is the customary decimal separator
const DECIMAL_COMMA_LANGUAGES: &[&str] = &[
    "de", "es", "fi", "fr", "it", "nl", "pl", "pt", "ru", "sv", "tr",
];

fn uses_decimal_comma(locale: &Locale) -> bool {
    DECIMAL_COMMA_LANGUAGES.contains(&locale.language())
}

#[async_trait]
impl<T> ElementBinder<T> for ParseBinder<T>
where
    T: FromStr + Send + Sync,
{
    async fn bind(&self, cx: &ElementContext<'_>) -> Option<ElementOutcome<T>> {
        let raw = cx.provider.get_value(&cx.key).await?;
        // An empty array at a sub-key carries no token to convert
        let token = raw.first()?.to_string();

        if let Ok(value) = token.parse::<T>() {
            return Some(ElementOutcome::Bound(value));
        }

        if let Some(locale) = cx.locale.as_ref().filter(|l| uses_decimal_comma(l)) {
            let normalized = token.replace(',', ".");
            if let Ok(value) = normalized.parse::<T>() {
                tracing::trace!(
                    key = %cx.key,
                    locale = %locale.tag(),
                    "token parsed after decimal-comma normalization"
                );
                return Some(ElementOutcome::Bound(value));
            }
        }

        Some(ElementOutcome::Invalid { raw: token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::FormProvider;

    fn cx<'a>(key: &str, provider: &'a FormProvider) -> ElementContext<'a> {
        ElementContext {
            key: key.to_string(),
            provider,
            locale: None,
        }
    }

    #[tokio::test]
    async fn absent_key_is_no_value() {
        let provider = FormProvider::new();
        let binder = ParseBinder::<i64>::new();
        assert_eq!(binder.bind(&cx("items[0]", &provider)).await, None);
    }

    #[tokio::test]
    async fn parsable_token_binds() {
        let mut provider = FormProvider::new();
        provider.insert("items[0]", "42");
        let binder = ParseBinder::<i64>::new();
        assert_eq!(
            binder.bind(&cx("items[0]", &provider)).await,
            Some(ElementOutcome::Bound(42))
        );
    }

    #[tokio::test]
    async fn unparsable_token_is_invalid_with_raw() {
        let mut provider = FormProvider::new();
        provider.insert("items[0]", "forty-two");
        let binder = ParseBinder::<i64>::new();
        assert_eq!(
            binder.bind(&cx("items[0]", &provider)).await,
            Some(ElementOutcome::Invalid {
                raw: "forty-two".to_string()
            })
        );
    }

    #[tokio::test]
    async fn decimal_comma_under_french_locale() {
        let mut provider = FormProvider::new();
        provider.insert("price", "3,5");
        let binder = ParseBinder::<f64>::new();

        let mut context = cx("price", &provider);
        context.locale = Some(Locale::new("fr-FR"));
        assert_eq!(
            binder.bind(&context).await,
            Some(ElementOutcome::Bound(3.5))
        );

        // Without the locale hint the comma is not a decimal separator
        let context = cx("price", &provider);
        assert_eq!(
            binder.bind(&context).await,
            Some(ElementOutcome::Invalid {
                raw: "3,5".to_string()
            })
        );
    }

    #[tokio::test]
    async fn array_head_is_the_token() {
        let mut provider = FormProvider::new();
        provider.insert("items[0]", "1");
        provider.insert("items[0]", "2");
        let binder = ParseBinder::<i64>::new();
        assert_eq!(
            binder.bind(&cx("items[0]", &provider)).await,
            Some(ElementOutcome::Bound(1))
        );
    }
}
