//! The BLS12-381 extension tower
//!
//! Fp2 = Fp[u]/(u² + 1), Fp6 = Fp2[v]/(v³ - (u + 1)), Fp12 = Fp6[w]/(w² - v)

pub mod fp; // base field
pub mod fp2;
pub mod fp6;
pub mod fp12; // target field
