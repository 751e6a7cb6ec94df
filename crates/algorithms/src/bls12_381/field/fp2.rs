//! Quadratic extension `Fp2 = Fp[u] / (u^2 + 1)`

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::{Fp, FP_BYTES};
use crate::error::{validate, Error, Result};

/// Size of an encoded element in bytes
pub const FP2_BYTES: usize = 2 * FP_BYTES;

/// (p - 3) / 4
const SQRT_EXP_1: [u64; 6] = [
    0xee7f_bfff_ffff_eaaa,
    0x07aa_ffff_ac54_ffff,
    0xd9cc_34a8_3dac_3d89,
    0xd91d_d2e1_3ce1_44af,
    0x92c6_e9ed_90d2_eb35,
    0x0680_447a_8e5f_f9a6,
];

/// (p - 1) / 2
const SQRT_EXP_2: [u64; 6] = [
    0xdcff_7fff_ffff_d555,
    0x0f55_ffff_58a9_ffff,
    0xb398_6950_7b58_7b12,
    0xb23b_a5c2_79c2_895f,
    0x258d_d3db_21a5_d66b,
    0x0d00_88f5_1cbf_f34d,
];

/// `c0 + c1 * u`
#[derive(Copy, Clone)]
pub struct Fp2 {
    /// Real part
    pub c0: Fp,
    /// Coefficient of u
    pub c1: Fp,
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

impl Default for Fp2 {
    fn default() -> Self {
        Fp2::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp2 {}

impl From<Fp> for Fp2 {
    fn from(f: Fp) -> Fp2 {
        Fp2 {
            c0: f,
            c1: Fp::zero(),
        }
    }
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp2 {}
impl PartialEq for Fp2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl Fp2 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp2 {
        Fp2 {
            c0: Fp::one(),
            c1: Fp::zero(),
        }
    }

    /// Check if zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Uniformly random element
    pub fn random(mut rng: impl RngCore) -> Fp2 {
        Fp2 {
            c0: Fp::random(&mut rng),
            c1: Fp::random(&mut rng),
        }
    }

    /// Raise to the power p; in Fp2 this is conjugation
    #[inline(always)]
    pub fn frobenius_map(&self) -> Self {
        self.conjugate()
    }

    /// `c0 - c1 * u`
    #[inline(always)]
    pub fn conjugate(&self) -> Self {
        Fp2 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Multiply by the sextic non-residue `u + 1`
    #[inline(always)]
    pub fn mul_by_nonresidue(&self) -> Fp2 {
        // (a + bu)(u + 1) = (a - b) + (a + b)u
        Fp2 {
            c0: self.c0 - self.c1,
            c1: self.c0 + self.c1,
        }
    }

    /// Whether this element is the larger of itself and its negation,
    /// comparing c1 first and falling back to c0 when c1 is zero
    #[inline]
    pub fn lexicographically_largest(&self) -> Choice {
        self.c1.lexicographically_largest()
            | (self.c1.is_zero() & self.c0.lexicographically_largest())
    }

    /// Squaring
    pub const fn square(&self) -> Fp2 {
        // (a + bu)^2 = (a + b)(a - b) + 2ab u
        let a = Fp::add(&self.c0, &self.c1);
        let b = Fp::sub(&self.c0, &self.c1);
        let c = Fp::add(&self.c0, &self.c0);

        Fp2 {
            c0: Fp::mul(&a, &b),
            c1: Fp::mul(&c, &self.c1),
        }
    }

    /// Multiplication with three base-field products (Karatsuba)
    pub const fn mul(&self, rhs: &Fp2) -> Fp2 {
        let aa = Fp::mul(&self.c0, &rhs.c0);
        let bb = Fp::mul(&self.c1, &rhs.c1);
        let sum = Fp::mul(
            &Fp::add(&self.c0, &self.c1),
            &Fp::add(&rhs.c0, &rhs.c1),
        );

        Fp2 {
            c0: Fp::sub(&aa, &bb),
            c1: Fp::sub(&Fp::sub(&sum, &aa), &bb),
        }
    }

    /// Addition
    pub const fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: Fp::add(&self.c0, &rhs.c0),
            c1: Fp::add(&self.c1, &rhs.c1),
        }
    }

    /// Subtraction
    pub const fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: Fp::sub(&self.c0, &rhs.c0),
            c1: Fp::sub(&self.c1, &rhs.c1),
        }
    }

    /// Negation
    pub const fn neg(&self) -> Fp2 {
        Fp2 {
            c0: Fp::neg(&self.c0),
            c1: Fp::neg(&self.c1),
        }
    }

    /// Square root, if one exists
    ///
    /// Algorithm 9 of https://eprint.iacr.org/2012/685.pdf, relying on
    /// p = 3 mod 4.
    pub fn sqrt(&self) -> CtOption<Self> {
        CtOption::new(Fp2::zero(), self.is_zero()).or_else(|| {
            let a1 = self.pow_vartime(&SQRT_EXP_1);
            let alpha = a1.square() * self;
            let x0 = self * a1;

            // alpha = -1 means x0 * u is the root
            CtOption::new(
                Fp2 {
                    c0: -x0.c1,
                    c1: x0.c0,
                },
                alpha.ct_eq(&-Fp2::one()),
            )
            .or_else(|| {
                CtOption::new(
                    (alpha + Fp2::one()).pow_vartime(&SQRT_EXP_2) * x0,
                    Choice::from(1),
                )
            })
            .and_then(|sqrt| CtOption::new(sqrt, sqrt.square().ct_eq(self)))
        })
    }

    /// Multiplicative inverse, none for zero
    pub fn invert(&self) -> CtOption<Self> {
        // 1 / (a + bu) = (a - bu) / (a^2 + b^2)
        (self.c0.square() + self.c1.square()).invert().map(|t| Fp2 {
            c0: self.c0 * t,
            c1: self.c1 * -t,
        })
    }

    /// Checked inverse
    pub fn try_invert(&self) -> Result<Self> {
        Option::from(self.invert()).ok_or(Error::DivideByZero { context: "Fp2" })
    }

    /// Checked square root
    pub fn try_sqrt(&self) -> Result<Self> {
        Option::from(self.sqrt()).ok_or(Error::NoSquareRoot { context: "Fp2" })
    }

    /// Variable-time exponentiation by a little-endian exponent
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

    /// Decode from `c1 || c0`, each 48 bytes big-endian
    pub fn from_bytes(bytes: &[u8; FP2_BYTES]) -> CtOption<Fp2> {
        let mut c1 = [0u8; FP_BYTES];
        let mut c0 = [0u8; FP_BYTES];
        c1.copy_from_slice(&bytes[..FP_BYTES]);
        c0.copy_from_slice(&bytes[FP_BYTES..]);

        Fp::from_bytes(&c1).and_then(|c1| Fp::from_bytes(&c0).map(|c0| Fp2 { c0, c1 }))
    }

    /// Decode from a byte slice, reporting length and range problems
    pub fn from_slice(bytes: &[u8]) -> Result<Fp2> {
        validate::length("Fp2", bytes.len(), FP2_BYTES)?;
        let mut buf = [0u8; FP2_BYTES];
        buf.copy_from_slice(bytes);
        Option::from(Fp2::from_bytes(&buf))
            .ok_or_else(|| Error::format("Fp2", "coefficient is not less than the field modulus"))
    }

    /// Encode as `c1 || c0`
    pub fn to_bytes(&self) -> [u8; FP2_BYTES] {
        let mut res = [0u8; FP2_BYTES];
        res[..FP_BYTES].copy_from_slice(&self.c1.to_bytes());
        res[FP_BYTES..].copy_from_slice(&self.c0.to_bytes());
        res
    }
}

impl<'a> Neg for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn neg(self) -> Fp2 {
        Fp2::neg(self)
    }
}

impl<'a, 'b> Add<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn add(self, rhs: &'b Fp2) -> Fp2 {
        Fp2::add(self, rhs)
    }
}

impl<'a, 'b> Sub<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn sub(self, rhs: &'b Fp2) -> Fp2 {
        Fp2::sub(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn mul(self, rhs: &'b Fp2) -> Fp2 {
        Fp2::mul(self, rhs)
    }
}

impl_owned_neg!(Fp2);
impl_additive_ops!(Fp2);
impl_multiplicative_ops!(Fp2);
