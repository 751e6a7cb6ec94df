// Timing tests for base field arithmetic

use super::assert_constant_time;
use bls381_algorithms::bls12_381::Fp;
use bls381_tests::constant_time::TestConfig;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::hint::black_box;
use subtle::{Choice, ConditionallySelectable};

#[test]
#[ignore]
fn test_fp_mul_constant_time() {
    let config = TestConfig::for_field();
    let mut rng = ChaCha20Rng::seed_from_u64(0xf001);
    let x = Fp::random(&mut rng);
    let zero = Fp::zero();
    let dense = Fp::random(&mut rng);

    assert_constant_time(
        "Fp multiplication (zero vs dense operand)",
        &config,
        || {
            black_box(black_box(&x) * black_box(&zero));
        },
        || {
            black_box(black_box(&x) * black_box(&dense));
        },
    );
}

#[test]
#[ignore]
fn test_fp_invert_constant_time() {
    let config = TestConfig::for_field().with_samples_and_iterations(20, 50);
    let mut rng = ChaCha20Rng::seed_from_u64(0xf002);
    let one = Fp::one();
    let dense = Fp::random(&mut rng);

    assert_constant_time(
        "Fp inversion (one vs dense)",
        &config,
        || {
            black_box(black_box(&one).invert());
        },
        || {
            black_box(black_box(&dense).invert());
        },
    );
}

#[test]
#[ignore]
fn test_fp_conditional_select_constant_time() {
    let config = TestConfig::for_field();
    let mut rng = ChaCha20Rng::seed_from_u64(0xf003);
    let a = Fp::random(&mut rng);
    let b = Fp::random(&mut rng);

    assert_constant_time(
        "Fp conditional select (choice 0 vs 1)",
        &config,
        || {
            black_box(Fp::conditional_select(&a, &b, black_box(Choice::from(0u8))));
        },
        || {
            black_box(Fp::conditional_select(&a, &b, black_box(Choice::from(1u8))));
        },
    );
}
