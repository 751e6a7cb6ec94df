//! # bls381
//!
//! A constant-time implementation of the BLS12-381 pairing-friendly curve.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bls381 = "0.3"
//! ```
//!
//! ```
//! use bls381::prelude::*;
//!
//! let a = Scalar::from(5u64);
//! let b = Scalar::from(7u64);
//! let p = G1Affine::from(G1Affine::generator() * a);
//! let q = G2Affine::from(G2Affine::generator() * b);
//!
//! assert_eq!(pairing(&p, &q), Gt::generator() * (a * b));
//! ```
//!
//! ## Features
//!
//! - `pairings` (default): the target group, Miller loop and pairing
//! - `alloc` (default): prepared G2 points and multi-pairings
//! - `full`: all features enabled, plus a `rand` re-export
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`bls381-api`]: public error type and encoding traits
//! - [`bls381-internal`]: constant-time limb helpers
//! - [`bls381-algorithms`]: field tower, groups and pairing

// Core re-exports (always available)
pub use bls381_algorithms as algorithms;
pub use bls381_api as api;
pub use bls381_internal as internal;

pub use bls381_algorithms::bls12_381;

#[cfg(feature = "rand")]
pub use rand;

/// Common imports for bls381 users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, ErrorKind, Result, ResultExt};

    // Re-export encoding traits
    pub use crate::api::{Serialize, SerializeSecret};

    // Field, scalar and group types
    pub use crate::bls12_381::{
        Fp, Fp12, Fp2, Fp6, G1Affine, G1Projective, G2Affine, G2Projective, Scalar,
    };

    #[cfg(feature = "pairings")]
    pub use crate::bls12_381::{miller_loop, pairing, Gt, MillerLoopResult};

    #[cfg(all(feature = "pairings", feature = "alloc"))]
    pub use crate::bls12_381::{multi_miller_loop, G2Prepared};

    // Constant-time primitives used throughout the API
    pub use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
}
