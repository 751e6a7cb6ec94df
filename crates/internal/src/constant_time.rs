//! Constant-time helpers over fixed-width limb arrays

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Full-width equality of two limb arrays
///
/// Every limb is folded into the result, so the position of the first
/// differing limb does not affect timing.
#[inline]
pub fn limbs_ct_eq<const N: usize>(a: &[u64; N], b: &[u64; N]) -> Choice {
    let mut acc = Choice::from(1u8);
    for i in 0..N {
        acc &= a[i].ct_eq(&b[i]);
    }
    acc
}

/// Returns `a` when `choice` is 0 and `b` when it is 1
#[inline]
pub fn limbs_select<const N: usize>(a: &[u64; N], b: &[u64; N], choice: Choice) -> [u64; N] {
    let mut out = [0u64; N];
    for i in 0..N {
        out[i] = u64::conditional_select(&a[i], &b[i], choice);
    }
    out
}

/// Whether every limb is zero
#[inline]
pub fn limbs_is_zero<const N: usize>(a: &[u64; N]) -> Choice {
    let mut acc = 0u64;
    for limb in a.iter() {
        acc |= limb;
    }
    acc.ct_eq(&0)
}

/// All-ones word when the top bit of `borrow` is set, zero otherwise
///
/// Subtraction chains leave the borrow in the high bit, so this turns the
/// final borrow into a selection mask without branching.
#[inline(always)]
pub const fn borrow_mask(borrow: u64) -> u64 {
    0u64.wrapping_sub(borrow >> 63)
}
