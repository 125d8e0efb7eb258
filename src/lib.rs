//! formbind - indexed collection binding for flat HTTP value spaces

pub mod collection;
pub mod context;
pub mod element;
pub mod error;
pub mod keys;
pub mod provider;
pub mod query;
pub mod raw;
pub mod validation;

pub use collection::{implicit_elements, BoundCollection, CollectionBinder};
pub use context::{BindingContext, Locale};
pub use element::{ElementBinder, ElementContext, ElementOutcome, ParseBinder};
pub use error::{BindError, FixSuggestion};
pub use provider::{ElementalProvider, FormProvider, MockProvider, ValueProvider};
pub use query::parse_query;
pub use raw::RawValue;
pub use validation::{InvalidValue, ModelState};
