//! Known-answer tests against the bundled BLS12-381 vectors

use bls381_algorithms::bls12_381::{
    Fp12, G1Affine, G1Projective, G2Affine, G2Projective, Gt, Scalar, FP12_BYTES,
    G1_COMPRESSED_BYTES, G1_UNCOMPRESSED_BYTES, G2_COMPRESSED_BYTES, G2_UNCOMPRESSED_BYTES,
    SCALAR_BYTES,
};
use bls381_tests::vectors::{decode_hex, load};

fn scalar(hex: &str) -> Scalar {
    let bytes = decode_hex::<SCALAR_BYTES>(hex).unwrap();
    Scalar::from_bytes(&bytes).unwrap()
}

#[test]
fn test_g1_multiples() {
    let vectors = load().unwrap();

    for (i, v) in vectors.g1_multiples.iter().enumerate() {
        let k = scalar(&v.scalar);
        let compressed = decode_hex::<G1_COMPRESSED_BYTES>(&v.compressed).unwrap();
        let uncompressed = decode_hex::<G1_UNCOMPRESSED_BYTES>(&v.uncompressed).unwrap();

        let point = G1Affine::from(G1Projective::generator() * k);
        assert_eq!(point.to_compressed(), compressed, "g1 vector {i} compressed");
        assert_eq!(point.to_uncompressed(), uncompressed, "g1 vector {i} uncompressed");

        assert_eq!(G1Affine::from_compressed(&compressed).unwrap(), point);
        assert_eq!(G1Affine::from_uncompressed(&uncompressed).unwrap(), point);

        // affine-scalar multiplication agrees with projective
        assert_eq!(G1Affine::generator() * k, G1Projective::generator() * k);
    }
}

#[test]
fn test_g2_multiples() {
    let vectors = load().unwrap();

    for (i, v) in vectors.g2_multiples.iter().enumerate() {
        let k = scalar(&v.scalar);
        let compressed = decode_hex::<G2_COMPRESSED_BYTES>(&v.compressed).unwrap();
        let uncompressed = decode_hex::<G2_UNCOMPRESSED_BYTES>(&v.uncompressed).unwrap();

        let point = G2Affine::from(G2Projective::generator() * k);
        assert_eq!(point.to_compressed(), compressed, "g2 vector {i} compressed");
        assert_eq!(point.to_uncompressed(), uncompressed, "g2 vector {i} uncompressed");

        assert_eq!(G2Affine::from_compressed(&compressed).unwrap(), point);
        assert_eq!(G2Affine::from_uncompressed(&uncompressed).unwrap(), point);
    }
}

#[test]
fn test_scalar_arithmetic() {
    let vectors = load().unwrap();

    for v in &vectors.scalar_arithmetic {
        let a = scalar(&v.a);
        let b = scalar(&v.b);

        assert_eq!(a + b, scalar(&v.sum));
        assert_eq!(a * b, scalar(&v.product));
        assert_eq!(a.invert().unwrap(), scalar(&v.a_inverse));
        assert_eq!((a + b) - b, a);
    }
}

#[test]
fn test_scalar_wide_reduction() {
    let vectors = load().unwrap();

    for v in &vectors.scalar_wide_reduction {
        let input = decode_hex::<64>(&v.input).unwrap();
        assert_eq!(Scalar::from_bytes_wide(&input), scalar(&v.reduced));
    }
}

#[test]
fn test_gt_generator_encoding() {
    let vectors = load().unwrap();
    let expected = decode_hex::<FP12_BYTES>(&vectors.gt_generator).unwrap();

    assert_eq!(Gt::generator().to_bytes(), expected);
    assert_eq!(Gt::from_bytes(&expected).unwrap(), Gt::generator());
    assert_eq!(
        Fp12::from_bytes(&expected).unwrap(),
        *Gt::generator().as_fp12()
    );
}
