//! Conversions between 64-bit limb arrays and byte strings
//!
//! Limb arrays are always least-significant limb first. The byte side is
//! either big-endian (field encodings) or little-endian (scalar encodings).

/// Convert a u64 from big-endian byte order to native byte order
#[inline]
pub fn u64_from_be_bytes(bytes: &[u8]) -> u64 {
    u64::from_be_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Convert a u64 from little-endian byte order to native byte order
#[inline]
pub fn u64_from_le_bytes(bytes: &[u8]) -> u64 {
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Read `N` limbs from a big-endian byte string of exactly `8 * N` bytes
pub fn limbs_from_be_bytes<const N: usize>(bytes: &[u8]) -> [u64; N] {
    debug_assert_eq!(bytes.len(), 8 * N);
    let mut limbs = [0u64; N];
    for (i, chunk) in bytes.chunks_exact(8).enumerate() {
        limbs[N - 1 - i] = u64_from_be_bytes(chunk);
    }
    limbs
}

/// Read `N` limbs from a little-endian byte string of exactly `8 * N` bytes
pub fn limbs_from_le_bytes<const N: usize>(bytes: &[u8]) -> [u64; N] {
    debug_assert_eq!(bytes.len(), 8 * N);
    let mut limbs = [0u64; N];
    for (i, chunk) in bytes.chunks_exact(8).enumerate() {
        limbs[i] = u64_from_le_bytes(chunk);
    }
    limbs
}

/// Write limbs as a big-endian byte string into `out` (length `8 * N`)
pub fn limbs_to_be_bytes<const N: usize>(limbs: &[u64; N], out: &mut [u8]) {
    debug_assert_eq!(out.len(), 8 * N);
    for (i, chunk) in out.chunks_exact_mut(8).enumerate() {
        chunk.copy_from_slice(&limbs[N - 1 - i].to_be_bytes());
    }
}

/// Write limbs as a little-endian byte string into `out` (length `8 * N`)
pub fn limbs_to_le_bytes<const N: usize>(limbs: &[u64; N], out: &mut [u8]) {
    debug_assert_eq!(out.len(), 8 * N);
    for (i, chunk) in out.chunks_exact_mut(8).enumerate() {
        chunk.copy_from_slice(&limbs[i].to_le_bytes());
    }
}
