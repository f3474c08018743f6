//! Audio payload domain types

mod payload;

pub use payload::AudioPayload;
