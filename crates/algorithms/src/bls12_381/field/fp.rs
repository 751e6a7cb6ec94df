//! BLS12-381 base field `GF(p)` where p = 0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use bls381_internal::{constant_time, endian};
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::arith;
use crate::error::{validate, Error, Result};

// ============================================================================
// Field Constants
// ============================================================================

/// Field modulus p
const MODULUS: [u64; 6] = [
    0xb9fe_ffff_ffff_aaab,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];

/// INV = -(p^{-1} mod 2^64) mod 2^64
const INV: u64 = 0x89f3_fffc_fffc_fffd;

/// R = 2^384 mod p
const R: [u64; 6] = [
    0x7609_0000_0002_fffd,
    0xebf4_000b_c40c_0002,
    0x5f48_9857_53c7_58ba,
    0x77ce_5853_7052_5745,
    0x5c07_1a97_a256_ec6d,
    0x15f6_5ec3_fa80_e493,
];

/// R^2 = 2^768 mod p
const R2: [u64; 6] = [
    0xf4df_1f34_1c34_1746,
    0x0a76_e6a6_09d1_04f1,
    0x8de5_476c_4c95_b6d5,
    0x67eb_88a9_939d_83c0,
    0x9a79_3e85_b519_952d,
    0x1198_8fe5_92ca_e3aa,
];

/// R^3 = 2^1152 mod p
const R3: [u64; 6] = [
    0xed48_ac6b_d94c_a1e0,
    0x315f_831e_03a7_adf8,
    0x9a53_352a_615e_29dd,
    0x34c0_4e5e_921e_1761,
    0x2512_d435_6572_4728,
    0x0aa6_3460_9175_5d4d,
];

/// (p - 1) / 2
const HALF_MODULUS: [u64; 6] = [
    0xdcff_7fff_ffff_d555,
    0x0f55_ffff_58a9_ffff,
    0xb398_6950_7b58_7b12,
    0xb23b_a5c2_79c2_895f,
    0x258d_d3db_21a5_d66b,
    0x0d00_88f5_1cbf_f34d,
];

/// (p + 1) / 4
const SQRT_EXP: [u64; 6] = [
    0xee7f_bfff_ffff_eaab,
    0x07aa_ffff_ac54_ffff,
    0xd9cc_34a8_3dac_3d89,
    0xd91d_d2e1_3ce1_44af,
    0x92c6_e9ed_90d2_eb35,
    0x0680_447a_8e5f_f9a6,
];

/// p - 2
const INVERT_EXP: [u64; 6] = [
    0xb9fe_ffff_ffff_aaa9,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];

/// Size of an encoded element in bytes
pub const FP_BYTES: usize = 48;

// ============================================================================
// Field Element Type
// ============================================================================

/// Element in Montgomery form: Fp(a) = aR mod p, with R = 2^384
#[derive(Copy, Clone)]
pub struct Fp(pub(crate) [u64; 6]);

impl Fp {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp {
        Fp([0; 6])
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp {
        Fp(R)
    }

    /// Check if zero
    #[inline]
    pub fn is_zero(&self) -> Choice {
        constant_time::limbs_is_zero(&self.0)
    }

    /// Wrap limbs that are already in Montgomery form, without reduction
    ///
    /// The caller guarantees the limbs encode a value below the modulus.
    pub const fn from_raw_unchecked(v: [u64; 6]) -> Fp {
        Fp(v)
    }

    /// Addition
    #[inline]
    pub const fn add(&self, rhs: &Fp) -> Fp {
        Fp(arith::add_mod(&self.0, &rhs.0, &MODULUS))
    }

    /// Subtraction
    #[inline]
    pub const fn sub(&self, rhs: &Fp) -> Fp {
        Fp(arith::sub_mod(&self.0, &rhs.0, &MODULUS))
    }

    /// Negation
    #[inline]
    pub const fn neg(&self) -> Fp {
        Fp(arith::neg_mod(&self.0, &MODULUS))
    }

    /// Multiplication
    #[inline]
    pub const fn mul(&self, rhs: &Fp) -> Fp {
        Fp(arith::mont_mul(&self.0, &rhs.0, &MODULUS, INV))
    }

    /// Squaring
    #[inline]
    pub const fn square(&self) -> Fp {
        self.mul(self)
    }

    /// Doubling
    #[inline]
    pub const fn double(&self) -> Fp {
        self.add(self)
    }

    /// Variable-time exponentiation by a little-endian exponent
    ///
    /// Timing depends on the exponent only, never on `self`.
    pub fn pow_vartime(&self, by: &[u64; 6]) -> Self {
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

    /// Square root, if one exists
    ///
    /// Since p = 3 mod 4 the root is a^((p+1)/4); which of the two roots is
    /// returned is unspecified.
    #[inline]
    pub fn sqrt(&self) -> CtOption<Self> {
        let sqrt = self.pow_vartime(&SQRT_EXP);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    /// Multiplicative inverse, none for zero
    #[inline]
    pub fn invert(&self) -> CtOption<Self> {
        // Fermat: a^(p-2)
        let t = self.pow_vartime(&INVERT_EXP);
        CtOption::new(t, !self.is_zero())
    }

    /// Checked inverse
    pub fn try_invert(&self) -> Result<Self> {
        Option::from(self.invert()).ok_or(Error::DivideByZero { context: "Fp" })
    }

    /// Checked square root
    pub fn try_sqrt(&self) -> Result<Self> {
        Option::from(self.sqrt()).ok_or(Error::NoSquareRoot { context: "Fp" })
    }

    /// Whether the canonical value is strictly greater than (p-1)/2
    pub fn lexicographically_largest(&self) -> Choice {
        let canonical = arith::from_montgomery(&self.0, &MODULUS, INV);
        arith::ct_lt(&HALF_MODULUS, &canonical)
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl Fp {
    /// Decode from 48 big-endian bytes; none if the value is not below p
    pub fn from_bytes(bytes: &[u8; FP_BYTES]) -> CtOption<Fp> {
        let raw: [u64; 6] = endian::limbs_from_be_bytes(bytes);
        let is_canonical = arith::ct_lt(&raw, &MODULUS);

        // aR = a * R^2 / R
        let tmp = Fp(arith::mont_mul(&raw, &R2, &MODULUS, INV));

        CtOption::new(tmp, is_canonical)
    }

    /// Decode from a byte slice, reporting length and range problems
    pub fn from_slice(bytes: &[u8]) -> Result<Fp> {
        validate::length("Fp", bytes.len(), FP_BYTES)?;
        let mut buf = [0u8; FP_BYTES];
        buf.copy_from_slice(bytes);
        Option::from(Fp::from_bytes(&buf))
            .ok_or_else(|| Error::format("Fp", "value is not less than the field modulus"))
    }

    /// Encode to 48 big-endian bytes
    pub fn to_bytes(&self) -> [u8; FP_BYTES] {
        let canonical = arith::from_montgomery(&self.0, &MODULUS, INV);
        let mut res = [0u8; FP_BYTES];
        endian::limbs_to_be_bytes(&canonical, &mut res);
        res
    }

    /// Uniformly random element
    pub fn random(mut rng: impl RngCore) -> Fp {
        let mut bytes = [0u8; 2 * FP_BYTES];
        rng.fill_bytes(&mut bytes);

        let hi: [u64; 6] = endian::limbs_from_be_bytes(&bytes[..FP_BYTES]);
        let lo: [u64; 6] = endian::limbs_from_be_bytes(&bytes[FP_BYTES..]);
        Fp::from_u768(lo, hi)
    }

    /// Reduce lo + hi * 2^384 modulo p
    fn from_u768(lo: [u64; 6], hi: [u64; 6]) -> Fp {
        // lo * R^2 / R = lo * R and hi * R^3 / R = (hi * 2^384) * R
        let d0 = Fp(arith::mont_mul(&lo, &R2, &MODULUS, INV));
        let d1 = Fp(arith::mont_mul(&hi, &R3, &MODULUS, INV));
        d0 + d1
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x")?;
        for b in self.to_bytes().iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl Default for Fp {
    fn default() -> Self {
        Fp::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp {}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        constant_time::limbs_ct_eq(&self.0, &other.0)
    }
}

impl Eq for Fp {}
impl PartialEq for Fp {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp(constant_time::limbs_select(&a.0, &b.0, choice))
    }
}

impl<'a> Neg for &'a Fp {
    type Output = Fp;

    #[inline]
    fn neg(self) -> Fp {
        Fp::neg(self)
    }
}

impl<'a, 'b> Add<&'b Fp> for &'a Fp {
    type Output = Fp;

    #[inline]
    fn add(self, rhs: &'b Fp) -> Fp {
        Fp::add(self, rhs)
    }
}

impl<'a, 'b> Sub<&'b Fp> for &'a Fp {
    type Output = Fp;

    #[inline]
    fn sub(self, rhs: &'b Fp) -> Fp {
        Fp::sub(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp> for &'a Fp {
    type Output = Fp;

    #[inline]
    fn mul(self, rhs: &'b Fp) -> Fp {
        Fp::mul(self, rhs)
    }
}

impl_owned_neg!(Fp);
impl_additive_ops!(Fp);
impl_multiplicative_ops!(Fp);
