//! Trait definitions shared across the bls381 crates

pub mod serialize;

pub use serialize::{Serialize, SerializeSecret};
