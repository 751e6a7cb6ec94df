//! Multi-precision limb arithmetic shared by the base and scalar fields
//!
//! Every routine works on little-endian arrays of 64-bit limbs and is generic
//! over the limb count, so `Fp` (6 limbs) and `Scalar` (4 limbs) share one
//! Montgomery implementation. No routine branches on limb values.
//!
//! The moduli used with these routines must leave the top bit of the top limb
//! clear (`2m < 2^(64N)`); both BLS12-381 moduli do.

use bls381_internal::constant_time::borrow_mask;
use subtle::Choice;

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow)
///
/// The returned borrow is either zero or all ones.
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// `a - m` when `a >= m`, otherwise `a`. Requires `a < 2m`.
#[inline]
const fn reduce_once<const N: usize>(a: &[u64; N], m: &[u64; N]) -> [u64; N] {
    let mut diff = [0u64; N];
    let mut borrow = 0;
    let mut i = 0;
    while i < N {
        let (d, b) = sbb(a[i], m[i], borrow);
        diff[i] = d;
        borrow = b;
        i += 1;
    }

    // all ones iff a < m
    let keep = borrow_mask(borrow);
    let mut out = [0u64; N];
    let mut i = 0;
    while i < N {
        out[i] = (a[i] & keep) | (diff[i] & !keep);
        i += 1;
    }
    out
}

/// `(a + b) mod m` for `a, b < m`
#[inline]
pub(crate) const fn add_mod<const N: usize>(a: &[u64; N], b: &[u64; N], m: &[u64; N]) -> [u64; N] {
    let mut sum = [0u64; N];
    let mut carry = 0;
    let mut i = 0;
    while i < N {
        let (s, c) = adc(a[i], b[i], carry);
        sum[i] = s;
        carry = c;
        i += 1;
    }
    reduce_once(&sum, m)
}

/// `(a - b) mod m` for `a, b < m`
#[inline]
pub(crate) const fn sub_mod<const N: usize>(a: &[u64; N], b: &[u64; N], m: &[u64; N]) -> [u64; N] {
    let mut diff = [0u64; N];
    let mut borrow = 0;
    let mut i = 0;
    while i < N {
        let (d, b2) = sbb(a[i], b[i], borrow);
        diff[i] = d;
        borrow = b2;
        i += 1;
    }

    // add the modulus back if we wrapped
    let mut carry = 0;
    let mut i = 0;
    while i < N {
        let (s, c) = adc(diff[i], m[i] & borrow, carry);
        diff[i] = s;
        carry = c;
        i += 1;
    }
    diff
}

/// `-a mod m` for `a < m`; zero maps to zero
#[inline]
pub(crate) const fn neg_mod<const N: usize>(a: &[u64; N], m: &[u64; N]) -> [u64; N] {
    let mut out = [0u64; N];
    let mut borrow = 0;
    let mut nonzero = 0;
    let mut i = 0;
    while i < N {
        let (d, b) = sbb(m[i], a[i], borrow);
        out[i] = d;
        borrow = b;
        nonzero |= a[i];
        i += 1;
    }

    let mask = ((nonzero == 0) as u64).wrapping_sub(1);
    let mut i = 0;
    while i < N {
        out[i] &= mask;
        i += 1;
    }
    out
}

/// Montgomery product `a * b * 2^(-64N) mod m` (CIOS)
///
/// `inv` is `-m^(-1) mod 2^64`. Accepts any `a < 2^(64N)` as long as `b < m`,
/// which lets wide reductions feed raw limbs straight in.
#[inline]
pub(crate) const fn mont_mul<const N: usize>(
    a: &[u64; N],
    b: &[u64; N],
    m: &[u64; N],
    inv: u64,
) -> [u64; N] {
    let mut t = [0u64; N];
    let mut hi = 0u64;

    let mut i = 0;
    while i < N {
        let mut carry = 0;
        let mut j = 0;
        while j < N {
            let (v, c) = mac(t[j], a[j], b[i], carry);
            t[j] = v;
            carry = c;
            j += 1;
        }
        let (top, top_carry) = adc(hi, carry, 0);

        let k = t[0].wrapping_mul(inv);
        let (_, mut carry) = mac(t[0], k, m[0], 0);
        let mut j = 1;
        while j < N {
            let (v, c) = mac(t[j], k, m[j], carry);
            t[j - 1] = v;
            carry = c;
            j += 1;
        }
        let (v, c) = adc(top, carry, 0);
        t[N - 1] = v;
        hi = top_carry + c;

        i += 1;
    }

    reduce_once(&t, m)
}

/// Leave Montgomery form: `a * 2^(-64N) mod m`
#[inline]
pub(crate) const fn from_montgomery<const N: usize>(a: &[u64; N], m: &[u64; N], inv: u64) -> [u64; N] {
    let mut one = [0u64; N];
    one[0] = 1;
    mont_mul(a, &one, m, inv)
}

/// Whether `a < b` as integers, in constant time
#[inline]
pub(crate) fn ct_lt<const N: usize>(a: &[u64; N], b: &[u64; N]) -> Choice {
    let mut borrow = 0;
    for i in 0..N {
        let (_, b2) = sbb(a[i], b[i], borrow);
        borrow = b2;
    }
    Choice::from((borrow & 1) as u8)
}
