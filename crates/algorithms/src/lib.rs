//! BLS12-381 field tower, curve groups and optimal ate pairing
//!
//! Arithmetic on secret-dependent values runs in constant time: equality,
//! selection and fallible results go through [`subtle`], and no routine
//! branches on limb values. Variable-time helpers carry a `_vartime` suffix.
//!
//! # Layout
//!
//! - [`bls12_381::field`]: Fp, Fp2, Fp6 and Fp12
//! - [`bls12_381::Scalar`]: the prime-order scalar field
//! - [`bls12_381::G1Affine`], [`bls12_381::G2Affine`] and their projective forms
//! - [`bls12_381::pairing`] and the target group [`bls12_381::Gt`]

#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[macro_use]
mod macros;

mod arith;

pub mod error;
pub use error::{validate, Error, Result, ResultExt};

pub mod bls12_381;
pub use bls12_381::{G1Affine, G1Projective, G2Affine, G2Projective, Scalar};

#[cfg(feature = "pairings")]
pub use bls12_381::{miller_loop, pairing, Gt, MillerLoopResult};

#[cfg(all(feature = "pairings", feature = "alloc"))]
pub use bls12_381::{multi_miller_loop, G2Prepared};
