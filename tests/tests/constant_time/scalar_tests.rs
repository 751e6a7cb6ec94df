// Timing tests for scalar field arithmetic

use super::assert_constant_time;
use bls381_algorithms::bls12_381::Scalar;
use bls381_tests::constant_time::TestConfig;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::hint::black_box;

#[test]
#[ignore]
fn test_scalar_invert_constant_time() {
    let config = TestConfig::for_field().with_samples_and_iterations(20, 100);
    let mut rng = ChaCha20Rng::seed_from_u64(0x5c01);
    let small = Scalar::from(2u64);
    let dense = Scalar::random(&mut rng);

    assert_constant_time(
        "Scalar inversion (small vs dense)",
        &config,
        || {
            black_box(black_box(&small).invert());
        },
        || {
            black_box(black_box(&dense).invert());
        },
    );
}

#[test]
#[ignore]
fn test_scalar_pow_constant_time() {
    let config = TestConfig::for_field().with_samples_and_iterations(20, 100);
    let mut rng = ChaCha20Rng::seed_from_u64(0x5c02);
    let base = Scalar::random(&mut rng);
    let sparse = [1u64, 0, 0, 0];
    let dense = [u64::MAX, u64::MAX, u64::MAX, 0x0fff_ffff_ffff_ffff];

    assert_constant_time(
        "Scalar pow (sparse vs dense exponent)",
        &config,
        || {
            black_box(black_box(&base).pow(black_box(&sparse)));
        },
        || {
            black_box(black_box(&base).pow(black_box(&dense)));
        },
    );
}
