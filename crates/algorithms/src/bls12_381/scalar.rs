//! BLS12-381 scalar field F_r where r = 0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001

use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{Add, Mul, Neg, Sub};

use bls381_api::{Serialize, SerializeSecret};
use bls381_internal::{constant_time, endian};
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroizing;

use crate::arith;
use crate::error::{validate, Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Group order r
const MODULUS: [u64; 4] = [
    0xffff_ffff_0000_0001,
    0x53bd_a402_fffe_5bfe,
    0x3339_d808_09a1_d805,
    0x73ed_a753_299d_7d48,
];

/// INV = -(r^{-1} mod 2^64) mod 2^64
const INV: u64 = 0xffff_fffe_ffff_ffff;

/// R = 2^256 mod r
const R: [u64; 4] = [
    0x0000_0001_ffff_fffe,
    0x5884_b7fa_0003_4802,
    0x998c_4fef_ecbc_4ff5,
    0x1824_b159_acc5_056f,
];

/// R^2 = 2^512 mod r
const R2: [u64; 4] = [
    0xc999_e990_f3f2_9c6d,
    0x2b6c_edcb_8792_5c23,
    0x05d3_1496_7254_398f,
    0x0748_d9d9_9f59_ff11,
];

/// R^3 = 2^768 mod r
const R3: [u64; 4] = [
    0xc62c_1807_439b_73af,
    0x1b3e_0d18_8cf0_6990,
    0x73d1_3c71_c7b5_f418,
    0x6e2a_5bb9_c8db_33e9,
];

/// r - 2
const INVERT_EXP: [u64; 4] = [
    0xffff_fffe_ffff_ffff,
    0x53bd_a402_fffe_5bfe,
    0x3339_d808_09a1_d805,
    0x73ed_a753_299d_7d48,
];

// (T - 1) / 2 where T = (r - 1) / 2^S is the odd part
const SQRT_W_EXP: [u64; 4] = [
    0x7fff_2dff_7fff_ffff,
    0x04d0_ec02_a9de_d201,
    0x94ce_bea4_199c_ec04,
    0x0000_0000_39f6_d3a9,
];

/// Size of an encoded scalar in bytes
pub const SCALAR_BYTES: usize = 32;

// ============================================================================
// Scalar Type
// ============================================================================

/// Scalar field element of BLS12-381
///
/// Four 64-bit limbs in little-endian Montgomery form.
#[derive(Clone, Copy)]
pub struct Scalar(pub(crate) [u64; 4]);

impl Scalar {
    /// 2-adicity of r - 1
    pub const S: u32 = 32;

    /// Primitive 2^S-th root of unity, 7^T with T the odd part of r - 1
    pub const ROOT_OF_UNITY: Scalar = Scalar([
        0xb9b5_8d8c_5f0e_466a,
        0x5b1b_4c80_1819_d7ec,
        0x0af5_3ae3_52a3_1e64,
        0x5bf3_adda_19e9_b27b,
    ]);

    /// Additive identity
    #[inline]
    pub const fn zero() -> Scalar {
        Scalar([0, 0, 0, 0])
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Scalar {
        Scalar(R)
    }

    /// Check if element is zero
    #[inline]
    pub fn is_zero(&self) -> Choice {
        constant_time::limbs_is_zero(&self.0)
    }

    /// Creates a scalar from four canonical little-endian limbs, converting
    /// them into Montgomery form
    pub const fn from_raw(val: [u64; 4]) -> Self {
        Scalar(arith::mont_mul(&val, &R2, &MODULUS, INV))
    }

    /// Addition
    #[inline]
    pub const fn add(&self, rhs: &Scalar) -> Scalar {
        Scalar(arith::add_mod(&self.0, &rhs.0, &MODULUS))
    }

    /// Subtraction
    #[inline]
    pub const fn sub(&self, rhs: &Scalar) -> Scalar {
        Scalar(arith::sub_mod(&self.0, &rhs.0, &MODULUS))
    }

    /// Negation
    #[inline]
    pub const fn neg(&self) -> Scalar {
        Scalar(arith::neg_mod(&self.0, &MODULUS))
    }

    /// Multiplication
    #[inline]
    pub const fn mul(&self, rhs: &Scalar) -> Scalar {
        Scalar(arith::mont_mul(&self.0, &rhs.0, &MODULUS, INV))
    }

    /// Squaring
    #[inline]
    pub const fn square(&self) -> Scalar {
        self.mul(self)
    }

    /// Doubling
    #[inline]
    pub const fn double(&self) -> Scalar {
        self.add(self)
    }

    /// Constant-time exponentiation by a little-endian exponent
    pub fn pow(&self, by: &[u64; 4]) -> Self {
        let mut res = Self::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                let tmp = res * self;
                res.conditional_assign(&tmp, Choice::from(((*e >> i) & 1) as u8));
            }
        }
        res
    }

    /// Variable-time exponentiation; only use with public exponents
    pub fn pow_vartime(&self, by: &[u64; 4]) -> Self {
        let mut res = Self::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }

    /// Multiplicative inverse, none for zero
    pub fn invert(&self) -> CtOption<Self> {
        // a^(r-2)
        let t = self.pow_vartime(&INVERT_EXP);
        CtOption::new(t, !self.is_zero())
    }

    /// Checked inverse
    pub fn try_invert(&self) -> Result<Self> {
        Option::from(self.invert()).ok_or(Error::DivideByZero { context: "Scalar" })
    }

    /// Square root by constant-time Tonelli-Shanks, if one exists
    ///
    /// Algorithm 5 of https://eprint.iacr.org/2012/685.pdf, run for a fixed
    /// number of iterations with every branch replaced by a selection.
    pub fn sqrt(&self) -> CtOption<Self> {
        // w = self^((T - 1) / 2), public exponent
        let w = self.pow_vartime(&SQRT_W_EXP);

        let mut v = Scalar::S;
        let mut x = self * w;
        let mut b = x * w;

        // 2^S-th root of unity
        let mut z = Scalar::ROOT_OF_UNITY;

        for max_v in (1..=Scalar::S).rev() {
            let mut k = 1;
            let mut tmp = b.square();
            let mut j_less_than_v = Choice::from(1u8);

            for j in 2..max_v {
                let tmp_is_one = tmp.ct_eq(&Scalar::one());
                let squared = Scalar::conditional_select(&tmp, &z, tmp_is_one).square();
                tmp = Scalar::conditional_select(&squared, &tmp, tmp_is_one);
                let new_z = Scalar::conditional_select(&z, &squared, tmp_is_one);
                j_less_than_v &= !j.ct_eq(&v);
                k = u32::conditional_select(&j, &k, tmp_is_one);
                z = Scalar::conditional_select(&z, &new_z, j_less_than_v);
            }

            let result = x * z;
            x = Scalar::conditional_select(&result, &x, b.ct_eq(&Scalar::one()));
            z = z.square();
            b *= z;
            v = k;
        }

        CtOption::new(x, x.square().ct_eq(self))
    }

    /// Checked square root
    pub fn try_sqrt(&self) -> Result<Self> {
        Option::from(self.sqrt()).ok_or(Error::NoSquareRoot { context: "Scalar" })
    }

    /// Uniformly random scalar
    pub fn random(mut rng: impl RngCore) -> Self {
        let mut buf = [0u8; 64];
        rng.fill_bytes(&mut buf);
        Self::from_bytes_wide(&buf)
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl Scalar {
    /// Create from 32 little-endian bytes if canonical
    pub fn from_bytes(bytes: &[u8; SCALAR_BYTES]) -> CtOption<Scalar> {
        let raw: [u64; 4] = endian::limbs_from_le_bytes(bytes);
        let is_canonical = arith::ct_lt(&raw, &MODULUS);

        CtOption::new(Scalar::from_raw(raw), is_canonical)
    }

    /// Decode from a byte slice, reporting length and range problems
    pub fn from_slice(bytes: &[u8]) -> Result<Scalar> {
        validate::length("Scalar", bytes.len(), SCALAR_BYTES)?;
        let mut buf = [0u8; SCALAR_BYTES];
        buf.copy_from_slice(bytes);
        Option::from(Scalar::from_bytes(&buf))
            .ok_or_else(|| Error::format("Scalar", "value is not less than the group order"))
    }

    /// Convert to 32 little-endian bytes
    pub fn to_bytes(&self) -> [u8; SCALAR_BYTES] {
        let canonical = arith::from_montgomery(&self.0, &MODULUS, INV);
        let mut res = [0u8; SCALAR_BYTES];
        endian::limbs_to_le_bytes(&canonical, &mut res);
        res
    }

    /// Reduce a 512-bit little-endian integer mod r
    pub fn from_bytes_wide(bytes: &[u8; 64]) -> Scalar {
        let lo: [u64; 4] = endian::limbs_from_le_bytes(&bytes[..32]);
        let hi: [u64; 4] = endian::limbs_from_le_bytes(&bytes[32..]);

        // lo * R and (hi * 2^256) * R
        let d0 = Scalar(arith::mont_mul(&lo, &R2, &MODULUS, INV));
        let d1 = Scalar(arith::mont_mul(&hi, &R3, &MODULUS, INV));
        d0 + d1
    }
}

impl Serialize for Scalar {
    fn from_bytes(bytes: &[u8]) -> bls381_api::Result<Self> {
        Ok(Scalar::from_slice(bytes)?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        Scalar::to_bytes(self).to_vec()
    }
}

impl SerializeSecret for Scalar {
    fn from_bytes(bytes: &[u8]) -> bls381_api::Result<Self> {
        Ok(Scalar::from_slice(bytes)?)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(Scalar::to_bytes(self).to_vec())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tmp = self.to_bytes();
        write!(f, "0x")?;
        for &b in tmp.iter().rev() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl From<u64> for Scalar {
    fn from(val: u64) -> Scalar {
        Scalar::from_raw([val, 0, 0, 0])
    }
}

impl Default for Scalar {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl zeroize::DefaultIsZeroes for Scalar {}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        constant_time::limbs_ct_eq(&self.0, &other.0)
    }
}

impl Eq for Scalar {}
impl PartialEq for Scalar {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Scalar(constant_time::limbs_select(&a.0, &b.0, choice))
    }
}

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;

    #[inline]
    fn neg(self) -> Scalar {
        Scalar::neg(self)
    }
}

impl<'a, 'b> Add<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    #[inline]
    fn add(self, rhs: &'b Scalar) -> Scalar {
        Scalar::add(self, rhs)
    }
}

impl<'a, 'b> Sub<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    #[inline]
    fn sub(self, rhs: &'b Scalar) -> Scalar {
        Scalar::sub(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    #[inline]
    fn mul(self, rhs: &'b Scalar) -> Scalar {
        Scalar::mul(self, rhs)
    }
}

impl_owned_neg!(Scalar);
impl_additive_ops!(Scalar);
impl_multiplicative_ops!(Scalar);

impl<T> Sum<T> for Scalar
where
    T: core::borrow::Borrow<Scalar>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::zero(), |acc, item| acc + item.borrow())
    }
}

impl<T> Product<T> for Scalar
where
    T: core::borrow::Borrow<Scalar>,
{
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::one(), |acc, item| acc * item.borrow())
    }
}
