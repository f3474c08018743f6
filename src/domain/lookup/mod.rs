//! Lookup key domain types

mod key;
mod language;

pub use key::LookupKey;
pub use language::{Language, DEFAULT_LANGUAGE};
