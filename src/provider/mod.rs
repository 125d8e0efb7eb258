//! # Value Provider Abstraction Layer
//!
//! Trait and implementations for resolving keys against the flat value space.
//!
//! ## Overview
//!
//! A value provider answers one question: what raw value, if any, lives at a
//! given key? It never converts tokens and never mutates anything.
//!
//! - [`ValueProvider`] - Core trait for key resolution
//! - [`FormProvider`] - In-memory space built from form-urlencoded pairs
//! - [`ElementalProvider`] - Single-pair overlay used by flat-field binding
//! - [`MockProvider`] - Test provider with recorded lookups
//!
//! ## Provider Trait
//!
//! All providers implement the `ValueProvider` trait:
//!
//! ```rust,ignore
//! #[async_trait]
//! pub trait ValueProvider: Send + Sync {
//!     async fn get_value(&self, key: &str) -> Option<RawValue>;
//! }
//! ```
//!
//! Resolution is async because a provider may sit in front of a request body
//! that is still being read. `None` means the key is entirely absent, which
//! is distinct from a present-but-empty array — the collection binder's
//! not-bound signal depends on that distinction.
//!
//! ## Available Providers
//!
//! | Provider | Use Case | Features |
//! |----------|----------|----------|
//! | `form` | Production | Parsed form/query pairs, repeat accumulation |
//! | `elemental` | Internal | One synthetic pair over a fallback provider |
//! | `mock` | Testing | Configurable responses, lookup recording |

mod elemental;
mod form;
mod mock;

pub use elemental::ElementalProvider;
pub use form::FormProvider;
pub use mock::MockProvider;

use async_trait::async_trait;

use crate::raw::RawValue;

/// Read-only resolver for the flat, stringly-keyed value space.
///
/// Keys are case-sensitive. Lookups are side-effect free and may suspend.
#[async_trait]
pub trait ValueProvider: Send + Sync {
    /// Resolve a key to its raw value, or `None` if the key is absent
    async fn get_value(&self, key: &str) -> Option<RawValue>;
}
