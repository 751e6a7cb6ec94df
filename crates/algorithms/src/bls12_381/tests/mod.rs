//! BLS12-381 test suite
//!
//! Tests are organized by layer: field tower, scalar field, curve groups,
//! pairing and byte encodings.

mod scalar;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic RNG so failures reproduce
pub(crate) fn test_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
