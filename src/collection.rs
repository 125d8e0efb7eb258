//! Collection binder - the indexed collection binding algorithm (v0.1)
//!
//! Reconstructs an ordered, typed sequence from the flat value space under
//! one of three conventions, tried in order:
//!
//! 1. **Explicit indexes**: `<name>.index` enumerates sub-key tokens; each
//!    element lives at `<name>[<token>]`. Token order is output order.
//! 2. **Flat field**: a raw scalar/array at the bare `<name>`.
//! 3. **Implicit indexes**: `<name>[0]`, `<name>[1]`, … scanned until the
//!    first gap.
//!
//! Per-element conversion failure never fails the whole bind: index
//! strategies default the failing position (positional alignment with the
//! declared slots must hold), the flat strategy drops it (there are no slots
//! to align with). Both record the failure in the context's `ModelState`.
//!
//! Sub-binds run strictly sequentially. Index order is a correctness
//! dependency: gap detection and positional defaulting both assume it.

use futures::stream::{self, Stream, StreamExt};
use tracing::{debug, trace};

use crate::context::{BindingContext, Locale};
use crate::element::{ElementBinder, ElementContext, ElementOutcome};
use crate::keys;
use crate::provider::{ElementalProvider, ValueProvider};
use crate::raw::RawValue;

/// Result of a collection bind attempt.
///
/// Never a partial state: either nothing was found under any convention, or
/// a fully materialized sequence (possibly empty — bound-empty and not-bound
/// are distinct outcomes and callers must treat them as such).
#[derive(Debug, PartialEq)]
pub enum BoundCollection<T> {
    /// No value existed for the model name under any convention
    NotBound,
    /// A newly allocated sequence
    Fresh(Vec<T>),
    /// Elements were appended, in order, to the context's `existing`
    /// container; the caller's instance is the result
    InPlace,
}

impl<T> BoundCollection<T> {
    /// True for `Fresh` and `InPlace`, including bound-empty
    pub fn is_bound(&self) -> bool {
        !matches!(self, BoundCollection::NotBound)
    }

    /// The freshly allocated sequence, if any
    pub fn into_vec(self) -> Option<Vec<T>> {
        match self {
            BoundCollection::Fresh(items) => Some(items),
            _ => None,
        }
    }
}

/// Binds one ordered collection of `T` per call. Stateless; all per-attempt
/// state lives in the [`BindingContext`].
pub struct CollectionBinder<T> {
    _marker: std::marker::PhantomData<fn() -> T>,
}

impl<T> Default for CollectionBinder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectionBinder<T> {
    pub fn new() -> Self {
        Self {
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> CollectionBinder<T>
where
    T: Default + Send,
{
    /// Bind the collection named by the context, selecting the convention
    /// from what the value space exposes.
    ///
    /// Returns [`BoundCollection::NotBound`] only when no value at all was
    /// found for the model name; an empty sequence is a valid bound outcome.
    pub async fn bind_model(&self, cx: &mut BindingContext<'_, T>) -> BoundCollection<T> {
        // A read-only target cannot be replaced, so it must come with its
        // pre-allocated container
        debug_assert!(
            !cx.is_read_only || cx.existing.is_some(),
            "read-only target must supply an existing destination"
        );

        let index_key = keys::index_key(&cx.model_name);
        let bound = if let Some(raw) = cx.provider.get_value(&index_key).await {
            debug!(model = %cx.model_name, "binding with explicit index list");
            let tokens = raw.tokens().to_vec();
            self.bind_complex_from_indexes(cx, Some(&tokens)).await
        } else if let Some(raw) = cx.provider.get_value(&cx.model_name).await {
            debug!(model = %cx.model_name, "binding flat field");
            self.bind_simple_collection(cx, Some(&raw)).await
        } else {
            debug!(model = %cx.model_name, "scanning implicit indexes");
            self.bind_complex_from_indexes(cx, None).await
        };

        match bound {
            None => BoundCollection::NotBound,
            Some(items) => match cx.existing.as_deref_mut() {
                Some(dest) => {
                    dest.extend(items);
                    BoundCollection::InPlace
                }
                None => BoundCollection::Fresh(items),
            },
        }
    }

    /// Bind under the indexed conventions.
    ///
    /// `Some(tokens)` is the explicit strategy: every token yields exactly
    /// one output position, in token order. A token whose sub-key is absent
    /// takes `T::default()`; a token whose value fails conversion is recorded
    /// invalid and also defaulted. Tokens are never dropped.
    ///
    /// `None` is the implicit strategy: `<name>[0]`, `<name>[1]`, … scanned
    /// until the first absent index. Returns `None` iff index 0 is absent.
    pub async fn bind_complex_from_indexes(
        &self,
        cx: &mut BindingContext<'_, T>,
        index_tokens: Option<&[String]>,
    ) -> Option<Vec<T>> {
        match index_tokens {
            Some(tokens) => Some(self.bind_explicit(cx, tokens).await),
            None => self.bind_implicit(cx).await,
        }
    }

    async fn bind_explicit(&self, cx: &mut BindingContext<'_, T>, tokens: &[String]) -> Vec<T> {
        let mut out = Vec::with_capacity(tokens.len());
        for token in tokens {
            let key = keys::element_key(&cx.model_name, token);
            let sub = ElementContext {
                key: key.clone(),
                provider: cx.provider,
                locale: cx.locale.clone(),
            };
            match cx.element_binder.bind(&sub).await {
                Some(ElementOutcome::Bound(value)) => out.push(value),
                Some(ElementOutcome::Invalid { raw }) => {
                    trace!(%key, %raw, "element failed conversion, defaulting position");
                    cx.state.record_invalid(&key, &raw);
                    out.push(T::default());
                }
                // Sub-key absent: the position stays, with the zero value
                None => out.push(T::default()),
            }
        }
        out
    }

    async fn bind_implicit(&self, cx: &mut BindingContext<'_, T>) -> Option<Vec<T>> {
        let elements = implicit_elements(
            &cx.model_name,
            cx.provider,
            cx.element_binder,
            cx.locale.as_ref(),
        );
        futures::pin_mut!(elements);

        let mut out = Vec::new();
        let mut visited = false;
        while let Some((key, outcome)) = elements.next().await {
            visited = true;
            match outcome {
                ElementOutcome::Bound(value) => out.push(value),
                ElementOutcome::Invalid { raw } => {
                    trace!(%key, %raw, "element failed conversion, defaulting position");
                    cx.state.record_invalid(&key, &raw);
                    out.push(T::default());
                }
            }
        }

        // Index 0 absent: nothing to bind under this convention
        if visited {
            Some(out)
        } else {
            None
        }
    }

    /// Bind a flat scalar/array raw value.
    ///
    /// Absent raw value propagates as `None` (leave the model untouched). A
    /// present-but-empty array materializes an empty sequence. Otherwise each
    /// token is bound independently, in array order, through an elemental
    /// provider exposing that token at the model name; tokens that fail
    /// conversion are dropped from the output (not defaulted — flat binding
    /// has no positional slots to hold open) while still being recorded.
    pub async fn bind_simple_collection(
        &self,
        cx: &mut BindingContext<'_, T>,
        raw_value: Option<&RawValue>,
    ) -> Option<Vec<T>> {
        let raw_value = raw_value?;

        let tokens = raw_value.tokens();
        let mut out = Vec::with_capacity(tokens.len());
        for token in tokens {
            let elemental = ElementalProvider::new(cx.model_name.clone(), token.clone(), cx.provider);
            let sub = ElementContext {
                key: cx.model_name.clone(),
                provider: &elemental,
                locale: cx.locale.clone(),
            };
            match cx.element_binder.bind(&sub).await {
                Some(ElementOutcome::Bound(value)) => out.push(value),
                Some(ElementOutcome::Invalid { raw }) => {
                    trace!(key = %cx.model_name, %raw, "element failed conversion, dropping");
                    cx.state.record_invalid(&cx.model_name, &raw);
                }
                None => {}
            }
        }
        Some(out)
    }
}

/// The implicit-index scan as a bounded lazy sequence.
///
/// Yields `(sub_key, outcome)` for `<name>[0]`, `<name>[1]`, … and terminates
/// at the first index whose sub-key is entirely absent. Conversion failures
/// do not terminate the scan; only absence does. An index past the first gap
/// is never resolved.
pub fn implicit_elements<'a, T>(
    model_name: &'a str,
    provider: &'a dyn ValueProvider,
    element_binder: &'a dyn ElementBinder<T>,
    locale: Option<&'a Locale>,
) -> impl Stream<Item = (String, ElementOutcome<T>)> + 'a
where
    T: 'a,
{
    stream::unfold(0usize, move |index| async move {
        let key = keys::element_key(model_name, &index.to_string());
        let sub = ElementContext {
            key: key.clone(),
            provider,
            locale: locale.cloned(),
        };
        element_binder
            .bind(&sub)
            .await
            .map(|outcome| ((key, outcome), index + 1))
    })
}
