//! Public API traits and types for the bls381 library
//!
//! This crate holds the error type every bls381 crate converts into and the
//! byte-serialization traits implemented by the field, scalar and point types.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

pub use error::{Error, ErrorKind, Result, ResultExt};
pub use traits::{serialize, Serialize, SerializeSecret};
