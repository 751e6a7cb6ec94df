//! Test support for the bls381 library
//!
//! - [`constant_time`]: a timing harness comparing two input classes with
//!   Welch's t-test
//! - [`vectors`]: known-answer vectors for encodings and the pairing
pub mod constant_time;
pub mod vectors;
