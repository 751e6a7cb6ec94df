// Timing tests for scalar multiplication in G1 and G2

use super::assert_constant_time;
use bls381_algorithms::bls12_381::{G1Projective, G2Projective, Scalar};
use bls381_tests::constant_time::TestConfig;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::hint::black_box;

#[test]
#[ignore]
fn test_g1_scalar_mul_constant_time() {
    let config = TestConfig::for_group();
    let g = G1Projective::generator();
    let low_weight = Scalar::from(1u64);
    let dense = -Scalar::one();

    assert_constant_time(
        "G1 scalar multiplication (1 vs r - 1)",
        &config,
        || {
            black_box(black_box(&g) * black_box(&low_weight));
        },
        || {
            black_box(black_box(&g) * black_box(&dense));
        },
    );
}

#[test]
#[ignore]
fn test_g2_scalar_mul_constant_time() {
    let config = TestConfig::for_group();
    let mut rng = ChaCha20Rng::seed_from_u64(0x6201);
    let g = G2Projective::generator();
    let a = Scalar::random(&mut rng);
    let zero = Scalar::zero();

    assert_constant_time(
        "G2 scalar multiplication (0 vs random)",
        &config,
        || {
            black_box(black_box(&g) * black_box(&zero));
        },
        || {
            black_box(black_box(&g) * black_box(&a));
        },
    );
}
