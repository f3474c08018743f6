//! Forvo infrastructure module
//!
//! Everything that depends on the upstream page layout lives here.

pub mod markup;
mod resolver;

pub use resolver::{ForvoResolver, InvalidEndpointError};
