//! G₂ group implementation for BLS48-581.
//!
//! G₂ is represented on the D-type sextic twist `y^2 = x^3 + 1/s` over Fp8.

use core::borrow::Borrow;
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul, Neg, Sub};

use bls48_api::{Result as ApiResult, Serialize};
use bls48_params::bls48_581::{G2_UNCOMPRESSED_SIZE, G2_X, G2_Y, ORDER_BITS, SEED, SEED_SIGN};
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::field::fp::Fp;
use super::field::fp16::FROB_T;
use super::field::fp2::Fp2;
use super::field::fp4::Fp4;
use super::field::fp48::FROB_W2;
use super::field::fp8::Fp8;
use super::g1::SEED_BITS;
use super::Scalar;
use crate::error::validate;

use alloc::vec::Vec;

/// G₂ affine point representation.
#[derive(Copy, Clone, Debug)]
pub struct G2Affine {
    pub(crate) x: Fp8,
    pub(crate) y: Fp8,
    infinity: Choice,
}

impl Default for G2Affine {
    fn default() -> G2Affine {
        G2Affine::identity()
    }
}

impl zeroize::DefaultIsZeroes for G2Affine {}

impl fmt::Display for G2Affine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl<'a> From<&'a G2Projective> for G2Affine {
    fn from(p: &'a G2Projective) -> G2Affine {
        let zinv = p.z.invert().unwrap_or(Fp8::zero());
        let x = p.x * zinv;
        let y = p.y * zinv;

        let tmp = G2Affine {
            x,
            y,
            infinity: Choice::from(0u8),
        };

        G2Affine::conditional_select(&tmp, &G2Affine::identity(), zinv.is_zero())
    }
}

impl From<G2Projective> for G2Affine {
    fn from(p: G2Projective) -> G2Affine {
        G2Affine::from(&p)
    }
}

impl ConstantTimeEq for G2Affine {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.infinity & other.infinity)
            | ((!self.infinity)
                & (!other.infinity)
                & self.x.ct_eq(&other.x)
                & self.y.ct_eq(&other.y))
    }
}

impl ConditionallySelectable for G2Affine {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G2Affine {
            x: Fp8::conditional_select(&a.x, &b.x, choice),
            y: Fp8::conditional_select(&a.y, &b.y, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl Eq for G2Affine {}
impl PartialEq for G2Affine {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G2Affine {
    type Output = G2Affine;

    #[inline]
    fn neg(self) -> G2Affine {
        G2Affine {
            x: self.x,
            y: Fp8::conditional_select(&-self.y, &Fp8::one(), self.infinity),
            infinity: self.infinity,
        }
    }
}

impl Neg for G2Affine {
    type Output = G2Affine;

    #[inline]
    fn neg(self) -> G2Affine {
        -&self
    }
}

impl<'a, 'b> Add<&'b G2Projective> for &'a G2Affine {
    type Output = G2Projective;

    #[inline]
    fn add(self, rhs: &'b G2Projective) -> G2Projective {
        rhs.add_mixed(self)
    }
}

impl<'a, 'b> Add<&'b G2Affine> for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn add(self, rhs: &'b G2Affine) -> G2Projective {
        self.add_mixed(rhs)
    }
}

impl<'a, 'b> Sub<&'b G2Projective> for &'a G2Affine {
    type Output = G2Projective;

    #[inline]
    fn sub(self, rhs: &'b G2Projective) -> G2Projective {
        self + &(-rhs)
    }
}

impl<'a, 'b> Sub<&'b G2Affine> for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn sub(self, rhs: &'b G2Affine) -> G2Projective {
        self + &(-rhs)
    }
}

impl<T> Sum<T> for G2Projective
where
    T: Borrow<G2Projective>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::identity(), |acc, item| acc + item.borrow())
    }
}

impl_binops_additive!(G2Projective, G2Affine);
impl_binops_additive_specify_output!(G2Affine, G2Projective, G2Projective);

const HALF: Fp = Fp::one().div2();

/// Twisted curve coefficient `b' = 1/s = ((1 - i)/2)·v·s`
const B: Fp8 = Fp8 {
    c0: Fp4::zero(),
    c1: Fp4 {
        c0: Fp2::zero(),
        c1: Fp2 {
            c0: HALF,
            c1: (&HALF).neg(),
        },
    },
};

#[inline(always)]
fn mul_by_3b(a: Fp8) -> Fp8 {
    (a + a + a).div_by_nonresidue()
}

impl G2Affine {
    /// Point at infinity.
    pub fn identity() -> G2Affine {
        G2Affine {
            x: Fp8::zero(),
            y: Fp8::one(),
            infinity: Choice::from(1u8),
        }
    }

    /// Fixed generator.
    pub fn generator() -> G2Affine {
        G2Affine {
            x: Fp8::from_canonical(&G2_X),
            y: Fp8::from_canonical(&G2_Y),
            infinity: Choice::from(0u8),
        }
    }

    /// Check if point at infinity.
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    /// Affine x-coordinate (zero for the identity)
    pub fn x(&self) -> Fp8 {
        self.x
    }

    /// Affine y-coordinate (one for the identity)
    pub fn y(&self) -> Fp8 {
        self.y
    }

    /// Curve membership check.
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() - (self.x.square() * self.x)).ct_eq(&B) | self.infinity
    }

    /// Subgroup check: on G₂ the endomorphism ψ acts as `[u]`.
    pub fn is_torsion_free(&self) -> Choice {
        let p = G2Projective::from(self);
        p.psi().ct_eq(&p.mul_by_seed_signed())
    }

    /// Serialize to 1168 bytes uncompressed.
    pub fn to_uncompressed(&self) -> [u8; G2_UNCOMPRESSED_SIZE] {
        let mut res = [0; G2_UNCOMPRESSED_SIZE];
        res[..Fp8::BYTES].copy_from_slice(
            &Fp8::conditional_select(&self.x, &Fp8::zero(), self.infinity).to_bytes()[..],
        );
        res[Fp8::BYTES..].copy_from_slice(
            &Fp8::conditional_select(&self.y, &Fp8::zero(), self.infinity).to_bytes()[..],
        );
        res[0] |= u8::conditional_select(&0u8, &(1u8 << 6), self.infinity);
        res
    }

    /// Deserialize from uncompressed bytes, checking curve and subgroup membership.
    pub fn from_uncompressed(bytes: &[u8; G2_UNCOMPRESSED_SIZE]) -> CtOption<Self> {
        Self::from_uncompressed_unchecked(bytes)
            .and_then(|p| CtOption::new(p, p.is_on_curve() & p.is_torsion_free()))
    }

    /// Deserialize without validation.
    pub fn from_uncompressed_unchecked(bytes: &[u8; G2_UNCOMPRESSED_SIZE]) -> CtOption<Self> {
        let compression_flag_set = Choice::from((bytes[0] >> 7) & 1);
        let infinity_flag_set = Choice::from((bytes[0] >> 6) & 1);
        let sort_flag_set = Choice::from((bytes[0] >> 5) & 1);
        let x = {
            let mut tmp = [0; Fp8::BYTES];
            tmp.copy_from_slice(&bytes[..Fp8::BYTES]);
            tmp[0] &= 0b0001_1111;
            Fp8::from_bytes(&tmp)
        };
        let y = {
            let mut tmp = [0; Fp8::BYTES];
            tmp.copy_from_slice(&bytes[Fp8::BYTES..]);
            Fp8::from_bytes(&tmp)
        };

        x.and_then(|x| {
            y.and_then(|y| {
                let p = G2Affine::conditional_select(
                    &G2Affine {
                        x,
                        y,
                        infinity: infinity_flag_set,
                    },
                    &G2Affine::identity(),
                    infinity_flag_set,
                );
                CtOption::new(
                    p,
                    ((!infinity_flag_set) | (infinity_flag_set & x.is_zero() & y.is_zero()))
                        & (!compression_flag_set)
                        & (!sort_flag_set),
                )
            })
        })
    }
}

impl Serialize for G2Affine {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::length("G2Affine::from_bytes", bytes.len(), G2_UNCOMPRESSED_SIZE)?;

        let mut array = [0u8; G2_UNCOMPRESSED_SIZE];
        array.copy_from_slice(bytes);
        let p = G2Affine::from_uncompressed(&array).into_option();
        validate::point(p.is_some(), "G2", "invalid encoding or not in subgroup")?;
        Ok(p.unwrap_or_default())
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_uncompressed().to_vec()
    }
}

/// G₂ projective point representation.
#[derive(Copy, Clone, Debug)]
pub struct G2Projective {
    pub(crate) x: Fp8,
    pub(crate) y: Fp8,
    pub(crate) z: Fp8,
}

impl Default for G2Projective {
    fn default() -> G2Projective {
        G2Projective::identity()
    }
}

impl zeroize::DefaultIsZeroes for G2Projective {}

impl fmt::Display for G2Projective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl<'a> From<&'a G2Affine> for G2Projective {
    fn from(p: &'a G2Affine) -> G2Projective {
        G2Projective {
            x: p.x,
            y: p.y,
            z: Fp8::conditional_select(&Fp8::one(), &Fp8::zero(), p.infinity),
        }
    }
}

impl From<G2Affine> for G2Projective {
    fn from(p: G2Affine) -> G2Projective {
        G2Projective::from(&p)
    }
}

impl ConstantTimeEq for G2Projective {
    fn ct_eq(&self, other: &Self) -> Choice {
        let x1 = self.x * other.z;
        let x2 = other.x * self.z;
        let y1 = self.y * other.z;
        let y2 = other.y * self.z;
        let self_is_zero = self.z.is_zero();
        let other_is_zero = other.z.is_zero();

        (self_is_zero & other_is_zero)
            | ((!self_is_zero) & (!other_is_zero) & x1.ct_eq(&x2) & y1.ct_eq(&y2))
    }
}

impl ConditionallySelectable for G2Projective {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G2Projective {
            x: Fp8::conditional_select(&a.x, &b.x, choice),
            y: Fp8::conditional_select(&a.y, &b.y, choice),
            z: Fp8::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl Eq for G2Projective {}
impl PartialEq for G2Projective {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn neg(self) -> G2Projective {
        G2Projective {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl Neg for G2Projective {
    type Output = G2Projective;

    #[inline]
    fn neg(self) -> G2Projective {
        -&self
    }
}

impl<'a, 'b> Add<&'b G2Projective> for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn add(self, rhs: &'b G2Projective) -> G2Projective {
        self.add(rhs)
    }
}

impl<'a, 'b> Sub<&'b G2Projective> for &'a G2Projective {
    type Output = G2Projective;

    #[inline]
    fn sub(self, rhs: &'b G2Projective) -> G2Projective {
        self + &(-rhs)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a G2Projective {
    type Output = G2Projective;

    fn mul(self, other: &'b Scalar) -> Self::Output {
        self.multiply(&other.reduce(&Scalar::ORDER))
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a G2Affine {
    type Output = G2Projective;

    fn mul(self, other: &'b Scalar) -> Self::Output {
        G2Projective::from(self) * other
    }
}

impl_binops_additive!(G2Projective, G2Projective);
impl_binops_multiplicative!(G2Projective, Scalar);
impl_binops_multiplicative_mixed!(G2Affine, Scalar, G2Projective);

impl G2Projective {
    /// Point at infinity.
    pub fn identity() -> G2Projective {
        G2Projective {
            x: Fp8::zero(),
            y: Fp8::one(),
            z: Fp8::zero(),
        }
    }

    /// Fixed generator.
    pub fn generator() -> G2Projective {
        G2Projective::from(G2Affine::generator())
    }

    /// Random point of the prime-order subgroup.
    pub fn random(mut rng: impl RngCore) -> Self {
        loop {
            let k = Scalar::random(&mut rng);
            if !bool::from(k.is_zero()) {
                return G2Projective::generator().multiply(&k);
            }
        }
    }

    /// Point doubling.
    pub fn double(&self) -> G2Projective {
        // Algorithm 9 from https://eprint.iacr.org/2015/1060.pdf
        let t0 = self.y.square();
        let z3 = t0 + t0;
        let z3 = z3 + z3;
        let z3 = z3 + z3;
        let t1 = self.y * self.z;
        let t2 = self.z.square();
        let t2 = mul_by_3b(t2);
        let x3 = t2 * z3;
        let y3 = t0 + t2;
        let z3 = t1 * z3;
        let t1 = t2 + t2;
        let t2 = t1 + t2;
        let t0 = t0 - t2;
        let y3 = t0 * y3;
        let y3 = x3 + y3;
        let t1 = self.x * self.y;
        let x3 = t0 * t1;
        let x3 = x3 + x3;

        let tmp = G2Projective {
            x: x3,
            y: y3,
            z: z3,
        };
        G2Projective::conditional_select(&tmp, &G2Projective::identity(), self.is_identity())
    }

    /// Point addition.
    pub fn add(&self, rhs: &G2Projective) -> G2Projective {
        // Algorithm 7 from https://eprint.iacr.org/2015/1060.pdf
        let t0 = self.x * rhs.x;
        let t1 = self.y * rhs.y;
        let t2 = self.z * rhs.z;
        let t3 = self.x + self.y;
        let t4 = rhs.x + rhs.y;
        let t3 = t3 * t4;
        let t4 = t0 + t1;
        let t3 = t3 - t4;
        let t4 = self.y + self.z;
        let x3 = rhs.y + rhs.z;
        let t4 = t4 * x3;
        let x3 = t1 + t2;
        let t4 = t4 - x3;
        let x3 = self.x + self.z;
        let y3 = rhs.x + rhs.z;
        let x3 = x3 * y3;
        let y3 = t0 + t2;
        let y3 = x3 - y3;
        let x3 = t0 + t0;
        let t0 = x3 + t0;
        let t2 = mul_by_3b(t2);
        let z3 = t1 + t2;
        let t1 = t1 - t2;
        let y3 = mul_by_3b(y3);
        let x3 = t4 * y3;
        let t2 = t3 * t1;
        let x3 = t2 - x3;
        let y3 = y3 * t0;
        let t1 = t1 * z3;
        let y3 = t1 + y3;
        let t0 = t0 * t3;
        let z3 = z3 * t4;
        let z3 = z3 + t0;

        G2Projective {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Mixed addition with affine point.
    pub fn add_mixed(&self, rhs: &G2Affine) -> G2Projective {
        // Algorithm 8 from https://eprint.iacr.org/2015/1060.pdf
        let t0 = self.x * rhs.x;
        let t1 = self.y * rhs.y;
        let t3 = rhs.x + rhs.y;
        let t4 = self.x + self.y;
        let t3 = t3 * t4;
        let t4 = t0 + t1;
        let t3 = t3 - t4;
        let t4 = rhs.y * self.z;
        let t4 = t4 + self.y;
        let y3 = rhs.x * self.z;
        let y3 = y3 + self.x;
        let x3 = t0 + t0;
        let t0 = x3 + t0;
        let t2 = mul_by_3b(self.z);
        let z3 = t1 + t2;
        let t1 = t1 - t2;
        let y3 = mul_by_3b(y3);
        let x3 = t4 * y3;
        let t2 = t3 * t1;
        let x3 = t2 - x3;
        let y3 = y3 * t0;
        let t1 = t1 * z3;
        let y3 = t1 + y3;
        let t0 = t0 * t3;
        let z3 = z3 * t4;
        let z3 = z3 + t0;

        let tmp = G2Projective {
            x: x3,
            y: y3,
            z: z3,
        };
        G2Projective::conditional_select(&tmp, self, rhs.is_identity())
    }

    /// Constant-time double-and-add over the low `ORDER_BITS` bits of `by`
    pub(crate) fn multiply(&self, by: &Scalar) -> G2Projective {
        let mut acc = G2Projective::identity();
        for i in (0..ORDER_BITS).rev() {
            acc = acc.double();
            let bit = Choice::from(by.bit(i));
            acc = G2Projective::conditional_select(&acc, &(acc + self), bit);
        }
        acc
    }

    /// Multiply by the signed seed `u`. Variable time in the public seed.
    fn mul_by_seed_signed(&self) -> G2Projective {
        let mut acc = G2Projective::identity();
        for i in (0..SEED_BITS).rev() {
            acc = acc.double();
            if (SEED >> i) & 1 == 1 {
                acc += self;
            }
        }
        if SEED_SIGN.is_negative() {
            acc = -acc;
        }
        acc
    }

    /// Untwist-Frobenius-twist endomorphism.
    ///
    /// On G₂ this acts as multiplication by `u`, and `ψ^16 = [u^16] = [u^8 - 1]`.
    pub fn psi(&self) -> G2Projective {
        G2Projective {
            x: self.x.frobenius_map() * FROB_W2,
            y: self.y.frobenius_map() * FROB_T,
            z: self.z.frobenius_map(),
        }
    }

    /// Batch affine conversion.
    ///
    /// # Panics
    /// Panics if `p.len() != q.len()`.
    pub fn batch_normalize(p: &[Self], q: &mut [G2Affine]) {
        assert_eq!(p.len(), q.len());

        let mut acc = Fp8::one();
        for (p, q) in p.iter().zip(q.iter_mut()) {
            q.x = acc;
            acc = Fp8::conditional_select(&(acc * p.z), &acc, p.is_identity());
        }

        // acc is a product of nonzero values
        acc = acc.invert().unwrap_or(Fp8::zero());

        for (p, q) in p.iter().rev().zip(q.iter_mut().rev()) {
            let skip = p.is_identity();
            let tmp = q.x * acc;
            acc = Fp8::conditional_select(&(acc * p.z), &acc, skip);
            q.x = p.x * tmp;
            q.y = p.y * tmp;
            q.infinity = Choice::from(0u8);
            *q = G2Affine::conditional_select(q, &G2Affine::identity(), skip);
        }
    }

    /// Convert to affine coordinates.
    pub fn to_affine(&self) -> G2Affine {
        G2Affine::from(self)
    }

    /// Check if point at infinity.
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Curve membership check.
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() * self.z)
            .ct_eq(&(self.x.square() * self.x + self.z.square() * self.z * B))
            | self.z.is_zero()
    }
}
