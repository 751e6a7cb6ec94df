//! Known-answer vectors for BLS12-381, stored as hex strings in JSON
//!
//! Group vectors are multiples `k * G` of the standard generators.
//! Scalars are 32-byte little-endian; point encodings follow the
//! compressed/uncompressed flag-bit format.

use serde::Deserialize;

const VECTORS_JSON: &str = include_str!("bls12_381.json");

#[derive(Debug, Clone, Deserialize)]
pub struct MultipleVector {
    pub scalar: String,
    pub compressed: String,
    pub uncompressed: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScalarArithmeticVector {
    pub a: String,
    pub b: String,
    pub sum: String,
    pub product: String,
    pub a_inverse: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WideReductionVector {
    pub input: String,
    pub reduced: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Bls12381Vectors {
    pub g1_multiples: Vec<MultipleVector>,
    pub g2_multiples: Vec<MultipleVector>,
    pub scalar_arithmetic: Vec<ScalarArithmeticVector>,
    pub scalar_wide_reduction: Vec<WideReductionVector>,
    pub gt_generator: String,
}

/// Parse the bundled vector file
pub fn load() -> Result<Bls12381Vectors, serde_json::Error> {
    serde_json::from_str(VECTORS_JSON)
}

/// Decode a hex string into a fixed-size array
pub fn decode_hex<const N: usize>(s: &str) -> Result<[u8; N], String> {
    let bytes = hex::decode(s).map_err(|e| format!("invalid hex: {e}"))?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| format!("expected {N} bytes, got {len}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_file_parses() {
        let vectors = load().unwrap();
        assert!(!vectors.g1_multiples.is_empty());
        assert!(!vectors.g2_multiples.is_empty());
        assert_eq!(vectors.gt_generator.len(), 2 * 576);
    }

    #[test]
    fn test_decode_hex_length() {
        assert_eq!(decode_hex::<2>("0102").unwrap(), [1, 2]);
        assert!(decode_hex::<3>("0102").is_err());
        assert!(decode_hex::<1>("zz").is_err());
    }
}
