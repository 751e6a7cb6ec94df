//! Property-based tests for BLS12-381 scalars, groups and the pairing

use bls381_algorithms::bls12_381::{
    pairing, Fp, G1Affine, G1Projective, G2Affine, G2Projective, Gt, Scalar, FP_BYTES,
};
use proptest::prelude::*;

/// Uniform scalars via wide reduction of 64 random bytes
fn scalar() -> impl Strategy<Value = Scalar> {
    any::<[u8; 32]>()
        .prop_flat_map(|lo| any::<[u8; 32]>().prop_map(move |hi| (lo, hi)))
        .prop_map(|(lo, hi)| {
            let mut wide = [0u8; 64];
            wide[..32].copy_from_slice(&lo);
            wide[32..].copy_from_slice(&hi);
            Scalar::from_bytes_wide(&wide)
        })
}

fn nonzero_scalar() -> impl Strategy<Value = Scalar> {
    scalar().prop_filter("nonzero", |s| !bool::from(s.is_zero()))
}

proptest! {
    #[test]
    fn scalar_field_laws(a in scalar(), b in scalar(), c in scalar()) {
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!(a * b, b * a);
        prop_assert_eq!((a + b) + c, a + (b + c));
        prop_assert_eq!(a * (b + c), a * b + a * c);
        prop_assert_eq!(a - a, Scalar::zero());
        prop_assert_eq!(a.square(), a * a);
    }

    #[test]
    fn scalar_inverse(a in nonzero_scalar()) {
        let inv = a.invert().unwrap();
        prop_assert_eq!(a * inv, Scalar::one());
    }

    #[test]
    fn scalar_bytes_roundtrip(a in scalar()) {
        let bytes = a.to_bytes();
        prop_assert_eq!(Scalar::from_bytes(&bytes).unwrap(), a);
    }

    #[test]
    fn scalar_from_bytes_rejects_high_values(bytes in any::<[u8; 32]>()) {
        // anything at or above 2^255 is out of range for r < 2^255
        let mut high = bytes;
        high[31] |= 0x80;
        prop_assert!(bool::from(Scalar::from_bytes(&high).is_none()));
    }

    #[test]
    fn fp_bytes_roundtrip(bytes in any::<[u8; FP_BYTES]>()) {
        // top byte below 0x1a keeps every input below p
        let mut b = bytes;
        b[0] &= 0x0f;
        let decoded = Fp::from_bytes(&b);
        prop_assert!(bool::from(decoded.is_some()));
        prop_assert_eq!(decoded.unwrap().to_bytes(), b);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn g1_scalar_multiplication_is_linear(a in scalar(), b in scalar()) {
        let g = G1Projective::generator();
        prop_assert_eq!(g * a + g * b, g * (a + b));
        prop_assert_eq!((g * a) * b, g * (a * b));
    }

    #[test]
    fn g1_encoding_roundtrip(a in scalar()) {
        let p = G1Affine::from(G1Projective::generator() * a);
        prop_assert_eq!(G1Affine::from_compressed(&p.to_compressed()).unwrap(), p);
        prop_assert_eq!(G1Affine::from_uncompressed(&p.to_uncompressed()).unwrap(), p);
        prop_assert!(bool::from(p.is_on_curve() & p.is_torsion_free()));
    }

    #[test]
    fn g2_scalar_multiplication_is_linear(a in scalar(), b in scalar()) {
        let g = G2Projective::generator();
        prop_assert_eq!(g * a + g * b, g * (a + b));
    }

    #[test]
    fn g2_encoding_roundtrip(a in scalar()) {
        let p = G2Affine::from(G2Projective::generator() * a);
        prop_assert_eq!(G2Affine::from_compressed(&p.to_compressed()).unwrap(), p);
        prop_assert_eq!(G2Affine::from_uncompressed(&p.to_uncompressed()).unwrap(), p);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn pairing_is_bilinear(a in scalar(), b in scalar()) {
        let p = G1Affine::from(G1Projective::generator() * a);
        let q = G2Affine::from(G2Projective::generator() * b);
        prop_assert_eq!(pairing(&p, &q), Gt::generator() * (a * b));
    }

    #[test]
    fn gt_bytes_roundtrip(a in scalar()) {
        let x = Gt::generator() * a;
        prop_assert_eq!(Gt::from_bytes(&x.to_bytes()).unwrap(), x);
    }
}
