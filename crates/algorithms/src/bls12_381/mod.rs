//! BLS12-381 pairing-friendly elliptic curve
//!
//! G₁ lives on y² = x³ + 4 over Fp and G₂ on its sextic twist
//! y² = x³ + 4(u + 1) over Fp2. Both have prime order r, the modulus of
//! [`Scalar`]. The optimal ate pairing maps G₁ × G₂ into [`Gt`].
//!
//! **Warning:** Unaudited implementation. Use at your own risk.

pub mod field;
mod g1;
mod g2;
#[cfg(feature = "pairings")]
mod pairings;
mod scalar;

#[cfg(test)]
mod tests;

pub use field::fp::{Fp, FP_BYTES};
pub use field::fp12::{Fp12, FP12_BYTES};
pub use field::fp2::{Fp2, FP2_BYTES};
pub use field::fp6::Fp6;
pub use g1::{G1Affine, G1Projective, G1_COMPRESSED_BYTES, G1_UNCOMPRESSED_BYTES};
pub use g2::{G2Affine, G2Projective, G2_COMPRESSED_BYTES, G2_UNCOMPRESSED_BYTES};
pub use scalar::{Scalar, SCALAR_BYTES};

#[cfg(feature = "pairings")]
pub use pairings::{miller_loop, pairing, Gt, MillerLoopResult, GT_BYTES};

#[cfg(all(feature = "pairings", feature = "alloc"))]
pub use pairings::{multi_miller_loop, G2Prepared};

/// |x| for the curve parameter x = -0xd201000000010000
pub(crate) const BLS_X: u64 = 0xd201_0000_0001_0000;
/// Sign of the curve parameter x
pub(crate) const BLS_X_IS_NEGATIVE: bool = true;
