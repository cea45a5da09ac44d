//! Traits shared across the bitecc crates

pub mod serialize;

pub use serialize::Serialize;
