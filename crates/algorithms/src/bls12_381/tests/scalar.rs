//! Scalar field tests for BLS12-381

use super::super::scalar::{Scalar, SCALAR_BYTES};
use super::test_rng;
use crate::error::Error;

use bls381_api::{Serialize, SerializeSecret};
use subtle::ConstantTimeEq;

/// r, little-endian
const MODULUS_BYTES: [u8; SCALAR_BYTES] = [
    1, 0, 0, 0, 255, 255, 255, 255, 254, 91, 254, 255, 2, 164, 189, 83, 5, 216, 161, 9, 8, 216, 57,
    51, 72, 125, 157, 41, 83, 167, 237, 115,
];

/// 2^512 mod r, little-endian
const R2_BYTES: [u8; SCALAR_BYTES] = [
    254, 255, 255, 255, 1, 0, 0, 0, 2, 72, 3, 0, 250, 183, 132, 88, 245, 79, 188, 236, 239, 79,
    140, 153, 111, 5, 197, 172, 89, 177, 36, 24,
];

/// r - 1 as little-endian limbs
const MODULUS_MINUS_ONE: [u64; 4] = [
    0xffff_ffff_0000_0000,
    0x53bd_a402_fffe_5bfe,
    0x3339_d808_09a1_d805,
    0x73ed_a753_299d_7d48,
];

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn test_scalar_display() {
    assert_eq!(
        Scalar::zero().to_string(),
        "0x0000000000000000000000000000000000000000000000000000000000000000"
    );
    assert_eq!(
        Scalar::one().to_string(),
        "0x0000000000000000000000000000000000000000000000000000000000000001"
    );
    assert_eq!(
        Scalar::from_bytes(&R2_BYTES).unwrap().to_string(),
        "0x1824b159acc5056f998c4fefecbc4ff55884b7fa0003480200000001fffffffe"
    );
    assert_eq!(format!("{:?}", Scalar::one()), Scalar::one().to_string());
}

#[test]
fn test_scalar_from_bytes() {
    assert_eq!(Scalar::from_bytes(&[0; 32]).unwrap(), Scalar::zero());

    let mut one = [0u8; 32];
    one[0] = 1;
    assert_eq!(Scalar::from_bytes(&one).unwrap(), Scalar::one());

    // r - 1
    let mut minus_one = MODULUS_BYTES;
    minus_one[0] = 0;
    assert_eq!(Scalar::from_bytes(&minus_one).unwrap(), -Scalar::one());
    assert_eq!((-Scalar::one()).to_bytes(), minus_one);

    // r itself and r + 1 are rejected
    assert!(bool::from(Scalar::from_bytes(&MODULUS_BYTES).is_none()));
    let mut r_plus_one = MODULUS_BYTES;
    r_plus_one[0] = 2;
    assert!(bool::from(Scalar::from_bytes(&r_plus_one).is_none()));

    // high bit set
    let mut high = [0u8; 32];
    high[31] = 0x80;
    assert!(bool::from(Scalar::from_bytes(&high).is_none()));
}

#[test]
fn test_scalar_from_slice_errors() {
    assert!(matches!(
        Scalar::from_slice(&[0u8; 31]),
        Err(Error::Length {
            context: "Scalar",
            expected: 32,
            actual: 31
        })
    ));
    assert!(matches!(
        Scalar::from_slice(&MODULUS_BYTES),
        Err(Error::Format {
            context: "Scalar",
            ..
        })
    ));
}

#[test]
fn test_scalar_from_bytes_wide() {
    let mut wide = [0u8; 64];
    wide[..32].copy_from_slice(&R2_BYTES);
    assert_eq!(
        Scalar::from_bytes_wide(&wide),
        Scalar::from_bytes(&R2_BYTES).unwrap()
    );

    // r - 1 in the low half
    let mut wide = [0u8; 64];
    wide[..32].copy_from_slice(&MODULUS_BYTES);
    wide[0] = 0;
    assert_eq!(Scalar::from_bytes_wide(&wide), -Scalar::one());

    // r reduces to zero
    let mut wide = [0u8; 64];
    wide[..32].copy_from_slice(&MODULUS_BYTES);
    assert_eq!(Scalar::from_bytes_wide(&wide), Scalar::zero());

    // 2^512 - 1
    assert_eq!(
        Scalar::from_bytes_wide(&[0xff; 64]),
        Scalar([
            0xc62c_1805_439b_73b1,
            0xc2b9_551e_8ced_218e,
            0xda44_ec81_daf9_a422,
            0x5605_aa60_1c16_2e79,
        ])
    );
}

#[test]
fn test_scalar_serialize_traits() {
    let mut rng = test_rng(0x5ca1_0001);
    let a = Scalar::random(&mut rng);

    let encoded = Serialize::to_bytes(&a);
    assert_eq!(encoded.len(), SCALAR_BYTES);
    assert_eq!(<Scalar as Serialize>::from_bytes(&encoded).unwrap(), a);

    let secret = a.to_bytes_zeroizing();
    assert_eq!(&secret[..], &a.to_bytes()[..]);
    assert_eq!(<Scalar as SerializeSecret>::from_bytes(&secret).unwrap(), a);

    assert_eq!(
        <Scalar as Serialize>::from_bytes(&encoded[..31]).unwrap_err().kind(),
        bls381_api::ErrorKind::Format
    );
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_scalar_from_u64_and_raw() {
    assert_eq!(Scalar::from(0u64), Scalar::zero());
    assert_eq!(Scalar::from(1u64), Scalar::one());
    assert_eq!(Scalar::from(2u64), Scalar::one().double());
    assert_eq!(Scalar::from_raw([7, 0, 0, 0]), Scalar::from(7u64));
    assert_eq!(Scalar::from_raw(MODULUS_MINUS_ONE), -Scalar::one());
}

#[test]
fn test_scalar_add_sub_neg() {
    let mut rng = test_rng(0x5ca1_0002);

    for _ in 0..50 {
        let a = Scalar::random(&mut rng);
        let b = Scalar::random(&mut rng);

        assert_eq!(a + b, b + a);
        assert_eq!((a + b) - b, a);
        assert_eq!(a + (-a), Scalar::zero());
        assert_eq!(a.double(), a + a);
    }

    assert_eq!(-Scalar::zero(), Scalar::zero());
    assert_eq!(-Scalar::one() + Scalar::one(), Scalar::zero());
}

#[test]
fn test_scalar_mul_square() {
    let mut rng = test_rng(0x5ca1_0003);

    for _ in 0..50 {
        let a = Scalar::random(&mut rng);
        let b = Scalar::random(&mut rng);
        let c = Scalar::random(&mut rng);

        assert_eq!(a.square(), a * a);
        assert_eq!(a * (b + c), a * b + a * c);
        assert_eq!((a * b) * c, a * (b * c));
    }

    assert_eq!(Scalar::from(6u64) * Scalar::from(7u64), Scalar::from(42u64));
}

#[test]
fn test_scalar_inversion() {
    let mut rng = test_rng(0x5ca1_0004);

    assert!(bool::from(Scalar::zero().invert().is_none()));
    assert_eq!(
        Scalar::zero().try_invert(),
        Err(Error::DivideByZero { context: "Scalar" })
    );
    assert_eq!(Scalar::one().invert().unwrap(), Scalar::one());
    assert_eq!((-Scalar::one()).invert().unwrap(), -Scalar::one());

    for _ in 0..20 {
        let a = Scalar::random(&mut rng);
        let inv = a.try_invert().unwrap();
        assert_eq!(a * inv, Scalar::one());
        assert_eq!(inv.invert().unwrap(), a);
    }
}

#[test]
fn test_scalar_pow_matches_pow_vartime() {
    let mut rng = test_rng(0x5ca1_0005);

    for _ in 0..10 {
        let a = Scalar::random(&mut rng);
        let e = Scalar::random(&mut rng).to_bytes();
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(e.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(buf);
        }

        assert_eq!(a.pow(&limbs), a.pow_vartime(&limbs));
    }

    let a = Scalar::from(3u64);
    assert_eq!(a.pow(&[0, 0, 0, 0]), Scalar::one());
    assert_eq!(a.pow(&[4, 0, 0, 0]), Scalar::from(81u64));

    // Fermat: a^(r-1) = 1
    assert_eq!(a.pow(&MODULUS_MINUS_ONE), Scalar::one());
}

#[test]
fn test_scalar_sqrt() {
    let mut rng = test_rng(0x5ca1_0006);

    assert_eq!(Scalar::zero().sqrt().unwrap(), Scalar::zero());
    for _ in 0..20 {
        let a = Scalar::random(&mut rng);
        let root = a.square().sqrt().unwrap();
        assert!(root == a || root == -a);
    }

    // 7 generates the multiplicative group, so it is a non-residue
    let seven = Scalar::from(7u64);
    assert!(bool::from(seven.sqrt().is_none()));
    assert_eq!(
        seven.try_sqrt(),
        Err(Error::NoSquareRoot { context: "Scalar" })
    );

    // a non-residue times a residue stays a non-residue
    let a = Scalar::random(&mut rng);
    assert!(bool::from((a.square() * seven).sqrt().is_none()));
}

#[test]
fn test_scalar_sqrt_deep_two_adic() {
    // r = 1 mod 4, so -1 is a residue whose roots have order four
    let minus_one = -Scalar::one();
    let i = minus_one.sqrt().unwrap();
    assert_eq!(i.square(), minus_one);
    assert_eq!(minus_one.try_sqrt(), Ok(i));

    // -7 = -1 * 7 is a non-residue
    let minus_seven = -Scalar::from(7u64);
    assert!(bool::from(minus_seven.sqrt().is_none()));
    assert_eq!(
        minus_seven.try_sqrt(),
        Err(Error::NoSquareRoot { context: "Scalar" })
    );

    // a primitive 2^S-th root of unity has no root, its square does
    assert!(bool::from(Scalar::ROOT_OF_UNITY.sqrt().is_none()));
    let w2 = Scalar::ROOT_OF_UNITY.square();
    let root = w2.sqrt().unwrap();
    assert!(root == Scalar::ROOT_OF_UNITY || root == -Scalar::ROOT_OF_UNITY);

    // every power of the root of unity of order up to 2^(S-1) is a square
    let mut t = w2;
    for _ in 0..(Scalar::S - 1) {
        assert_eq!(t.sqrt().unwrap().square(), t);
        t = t.square();
    }
    assert_eq!(t, Scalar::one());
}

#[test]
fn test_scalar_root_of_unity() {
    let mut t = Scalar::ROOT_OF_UNITY;
    for _ in 0..(Scalar::S - 1) {
        t = t.square();
    }
    // order exactly 2^S
    assert_eq!(t, -Scalar::one());
    assert_eq!(t.square(), Scalar::one());
}

#[test]
fn test_scalar_sum_and_product() {
    let values: Vec<Scalar> = (1..=5u64).map(Scalar::from).collect();

    assert_eq!(values.iter().sum::<Scalar>(), Scalar::from(15u64));
    assert_eq!(values.iter().product::<Scalar>(), Scalar::from(120u64));
    assert_eq!(values.into_iter().sum::<Scalar>(), Scalar::from(15u64));
    assert_eq!(Vec::<Scalar>::new().iter().product::<Scalar>(), Scalar::one());
}

#[test]
fn test_scalar_ct_eq_and_zeroize() {
    use zeroize::Zeroize;

    let a = Scalar::from(42u64);
    assert!(bool::from(a.ct_eq(&Scalar::from(42u64))));
    assert!(!bool::from(a.ct_eq(&Scalar::from(43u64))));

    let mut b = a;
    b.zeroize();
    assert!(bool::from(b.is_zero()));
}
