//! G₁ group implementation for BLS48-581.

use core::borrow::Borrow;
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul, Neg, Sub};

use bls48_api::{Result as ApiResult, Serialize};
use bls48_params::bls48_581::{
    CUBE_ROOT_OF_UNITY, G1_COMPRESSED_SIZE, G1_UNCOMPRESSED_SIZE, G1_X, G1_Y, ORDER_BITS, SEED,
    SEED_SIGN,
};
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::field::fp::Fp;
use super::Scalar;
use crate::error::validate;

use alloc::vec::Vec;

/// G₁ affine point representation.
#[derive(Copy, Clone, Debug)]
pub struct G1Affine {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    infinity: Choice,
}

impl Default for G1Affine {
    fn default() -> G1Affine {
        G1Affine::identity()
    }
}

impl zeroize::DefaultIsZeroes for G1Affine {}

impl fmt::Display for G1Affine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl<'a> From<&'a G1Projective> for G1Affine {
    fn from(p: &'a G1Projective) -> G1Affine {
        let zinv = p.z.invert().unwrap_or(Fp::zero());
        let x = p.x * zinv;
        let y = p.y * zinv;

        let tmp = G1Affine {
            x,
            y,
            infinity: Choice::from(0u8),
        };

        G1Affine::conditional_select(&tmp, &G1Affine::identity(), zinv.is_zero())
    }
}

impl From<G1Projective> for G1Affine {
    fn from(p: G1Projective) -> G1Affine {
        G1Affine::from(&p)
    }
}

impl ConstantTimeEq for G1Affine {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.infinity & other.infinity)
            | ((!self.infinity)
                & (!other.infinity)
                & self.x.ct_eq(&other.x)
                & self.y.ct_eq(&other.y))
    }
}

impl ConditionallySelectable for G1Affine {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G1Affine {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl Eq for G1Affine {}
impl PartialEq for G1Affine {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G1Affine {
    type Output = G1Affine;

    #[inline]
    fn neg(self) -> G1Affine {
        G1Affine {
            x: self.x,
            y: Fp::conditional_select(&-self.y, &Fp::one(), self.infinity),
            infinity: self.infinity,
        }
    }
}

impl Neg for G1Affine {
    type Output = G1Affine;

    #[inline]
    fn neg(self) -> G1Affine {
        -&self
    }
}

impl<'a, 'b> Add<&'b G1Projective> for &'a G1Affine {
    type Output = G1Projective;

    #[inline]
    fn add(self, rhs: &'b G1Projective) -> G1Projective {
        rhs.add_mixed(self)
    }
}

impl<'a, 'b> Add<&'b G1Affine> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn add(self, rhs: &'b G1Affine) -> G1Projective {
        self.add_mixed(rhs)
    }
}

impl<'a, 'b> Sub<&'b G1Projective> for &'a G1Affine {
    type Output = G1Projective;

    #[inline]
    fn sub(self, rhs: &'b G1Projective) -> G1Projective {
        self + &(-rhs)
    }
}

impl<'a, 'b> Sub<&'b G1Affine> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn sub(self, rhs: &'b G1Affine) -> G1Projective {
        self + &(-rhs)
    }
}

impl<T> Sum<T> for G1Projective
where
    T: Borrow<G1Projective>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::identity(), |acc, item| acc + item.borrow())
    }
}

impl_binops_additive!(G1Projective, G1Affine);
impl_binops_additive_specify_output!(G1Affine, G1Projective, G1Projective);

// Curve parameter b = 1
const B: Fp = Fp::one();

/// Cube root of unity in Fp
pub(crate) const BETA: Fp = Fp::from_canonical(&CUBE_ROOT_OF_UNITY);

/// Bit length of `|u|`
pub(crate) const SEED_BITS: usize = (64 - SEED.leading_zeros()) as usize;

impl G1Affine {
    /// Point at infinity.
    pub fn identity() -> G1Affine {
        G1Affine {
            x: Fp::zero(),
            y: Fp::one(),
            infinity: Choice::from(1u8),
        }
    }

    /// Fixed generator.
    pub fn generator() -> G1Affine {
        G1Affine {
            x: Fp::from_canonical(&G1_X),
            y: Fp::from_canonical(&G1_Y),
            infinity: Choice::from(0u8),
        }
    }

    /// Check if point at infinity.
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    /// Affine x-coordinate (zero for the identity)
    pub fn x(&self) -> Fp {
        self.x
    }

    /// Affine y-coordinate (one for the identity)
    pub fn y(&self) -> Fp {
        self.y
    }

    /// Curve membership check.
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() - (self.x.square() * self.x)).ct_eq(&B) | self.infinity
    }

    /// The order-3 endomorphism `(x, y) -> (β·x, y)`, acting as `-[u^8]`
    pub fn endomorphism(&self) -> G1Affine {
        let mut res = *self;
        res.x *= BETA;
        res
    }

    /// Subgroup check using the endomorphism.
    pub fn is_torsion_free(&self) -> Choice {
        let mut minus_u8_p = G1Projective::from(self);
        for _ in 0..8 {
            minus_u8_p = minus_u8_p.mul_by_seed();
        }
        // u^8 = |u|^8, so the sign of the seed drops out
        G1Projective::from(self.endomorphism()).ct_eq(&-minus_u8_p)
    }

    /// Compress to 73 bytes.
    pub fn to_compressed(&self) -> [u8; G1_COMPRESSED_SIZE] {
        let mut res = Fp::conditional_select(&self.x, &Fp::zero(), self.infinity).to_bytes();
        res[0] |= 1u8 << 7; // compression flag
        res[0] |= u8::conditional_select(&0u8, &(1u8 << 6), self.infinity); // infinity flag
        res[0] |= u8::conditional_select(
            &0u8,
            &(1u8 << 5),
            (!self.infinity) & self.y.lexicographically_largest(), // sign flag
        );
        res
    }

    /// Serialize to 146 bytes uncompressed.
    pub fn to_uncompressed(&self) -> [u8; G1_UNCOMPRESSED_SIZE] {
        let mut res = [0; G1_UNCOMPRESSED_SIZE];
        res[..G1_COMPRESSED_SIZE].copy_from_slice(
            &Fp::conditional_select(&self.x, &Fp::zero(), self.infinity).to_bytes()[..],
        );
        res[G1_COMPRESSED_SIZE..].copy_from_slice(
            &Fp::conditional_select(&self.y, &Fp::zero(), self.infinity).to_bytes()[..],
        );
        res[0] |= u8::conditional_select(&0u8, &(1u8 << 6), self.infinity);
        res
    }

    /// Deserialize from uncompressed bytes, checking curve and subgroup membership.
    pub fn from_uncompressed(bytes: &[u8; G1_UNCOMPRESSED_SIZE]) -> CtOption<Self> {
        Self::from_uncompressed_unchecked(bytes)
            .and_then(|p| CtOption::new(p, p.is_on_curve() & p.is_torsion_free()))
    }

    /// Deserialize without validation.
    pub fn from_uncompressed_unchecked(bytes: &[u8; G1_UNCOMPRESSED_SIZE]) -> CtOption<Self> {
        let compression_flag_set = Choice::from((bytes[0] >> 7) & 1);
        let infinity_flag_set = Choice::from((bytes[0] >> 6) & 1);
        let sort_flag_set = Choice::from((bytes[0] >> 5) & 1);
        let x = {
            let mut tmp = [0; G1_COMPRESSED_SIZE];
            tmp.copy_from_slice(&bytes[..G1_COMPRESSED_SIZE]);
            tmp[0] &= 0b0001_1111;
            Fp::from_bytes(&tmp)
        };
        let y = {
            let mut tmp = [0; G1_COMPRESSED_SIZE];
            tmp.copy_from_slice(&bytes[G1_COMPRESSED_SIZE..]);
            Fp::from_bytes(&tmp)
        };

        x.and_then(|x| {
            y.and_then(|y| {
                let p = G1Affine::conditional_select(
                    &G1Affine {
                        x,
                        y,
                        infinity: infinity_flag_set,
                    },
                    &G1Affine::identity(),
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

    /// Deserialize from compressed bytes, checking subgroup membership.
    pub fn from_compressed(bytes: &[u8; G1_COMPRESSED_SIZE]) -> CtOption<Self> {
        Self::from_compressed_unchecked(bytes).and_then(|p| CtOption::new(p, p.is_torsion_free()))
    }

    /// Deserialize from compressed bytes without the subgroup check.
    pub fn from_compressed_unchecked(bytes: &[u8; G1_COMPRESSED_SIZE]) -> CtOption<Self> {
        let compression_flag_set = Choice::from((bytes[0] >> 7) & 1);
        let infinity_flag_set = Choice::from((bytes[0] >> 6) & 1);
        let sort_flag_set = Choice::from((bytes[0] >> 5) & 1);
        let x = {
            let mut tmp = *bytes;
            tmp[0] &= 0b0001_1111;
            Fp::from_bytes(&tmp)
        };

        x.and_then(|x| {
            CtOption::new(
                G1Affine::identity(),
                infinity_flag_set & compression_flag_set & (!sort_flag_set) & x.is_zero(),
            )
            .or_else(|| {
                ((x.square() * x) + B).sqrt().and_then(|y| {
                    let y = Fp::conditional_select(
                        &y,
                        &-y,
                        y.lexicographically_largest() ^ sort_flag_set,
                    );
                    CtOption::new(
                        G1Affine {
                            x,
                            y,
                            infinity: infinity_flag_set,
                        },
                        (!infinity_flag_set) & compression_flag_set,
                    )
                })
            })
        })
    }
}

impl Serialize for G1Affine {
    /// Accepts either the 73-byte compressed or the 146-byte uncompressed form.
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let decoded = match bytes.len() {
            G1_COMPRESSED_SIZE => {
                let mut array = [0u8; G1_COMPRESSED_SIZE];
                array.copy_from_slice(bytes);
                G1Affine::from_compressed(&array)
            }
            _ => {
                validate::length("G1Affine::from_bytes", bytes.len(), G1_UNCOMPRESSED_SIZE)?;
                let mut array = [0u8; G1_UNCOMPRESSED_SIZE];
                array.copy_from_slice(bytes);
                G1Affine::from_uncompressed(&array)
            }
        };

        let p = decoded.into_option();
        validate::point(p.is_some(), "G1", "invalid encoding or not in subgroup")?;
        Ok(p.unwrap_or_default())
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_compressed().to_vec()
    }
}

/// G₁ projective point representation.
#[derive(Copy, Clone, Debug)]
pub struct G1Projective {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    pub(crate) z: Fp,
}

impl Default for G1Projective {
    fn default() -> G1Projective {
        G1Projective::identity()
    }
}

impl zeroize::DefaultIsZeroes for G1Projective {}

impl fmt::Display for G1Projective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl<'a> From<&'a G1Affine> for G1Projective {
    fn from(p: &'a G1Affine) -> G1Projective {
        G1Projective {
            x: p.x,
            y: p.y,
            z: Fp::conditional_select(&Fp::one(), &Fp::zero(), p.infinity),
        }
    }
}

impl From<G1Affine> for G1Projective {
    fn from(p: G1Affine) -> G1Projective {
        G1Projective::from(&p)
    }
}

impl ConstantTimeEq for G1Projective {
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

impl ConditionallySelectable for G1Projective {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G1Projective {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            z: Fp::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl Eq for G1Projective {}
impl PartialEq for G1Projective {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn neg(self) -> G1Projective {
        G1Projective {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl Neg for G1Projective {
    type Output = G1Projective;

    #[inline]
    fn neg(self) -> G1Projective {
        -&self
    }
}

impl<'a, 'b> Add<&'b G1Projective> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn add(self, rhs: &'b G1Projective) -> G1Projective {
        self.add(rhs)
    }
}

impl<'a, 'b> Sub<&'b G1Projective> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn sub(self, rhs: &'b G1Projective) -> G1Projective {
        self + &(-rhs)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a G1Projective {
    type Output = G1Projective;

    fn mul(self, other: &'b Scalar) -> Self::Output {
        self.multiply(&other.reduce(&Scalar::ORDER))
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a G1Affine {
    type Output = G1Projective;

    fn mul(self, other: &'b Scalar) -> Self::Output {
        G1Projective::from(self) * other
    }
}

impl_binops_additive!(G1Projective, G1Projective);
impl_binops_multiplicative!(G1Projective, Scalar);
impl_binops_multiplicative_mixed!(G1Affine, Scalar, G1Projective);

#[inline(always)]
fn mul_by_3b(a: Fp) -> Fp {
    a + a + a
}

impl G1Projective {
    /// Point at infinity.
    pub fn identity() -> G1Projective {
        G1Projective {
            x: Fp::zero(),
            y: Fp::one(),
            z: Fp::zero(),
        }
    }

    /// Fixed generator.
    pub fn generator() -> G1Projective {
        G1Projective::from(G1Affine::generator())
    }

    /// Random point of the prime-order subgroup.
    pub fn random(mut rng: impl RngCore) -> Self {
        loop {
            let x = Fp::random(&mut rng);
            let flip_sign = rng.next_u32() % 2 != 0;

            let p = ((x.square() * x) + B).sqrt().map(|y| G1Affine {
                x,
                y: if flip_sign { -y } else { y },
                infinity: 0.into(),
            });

            if let Some(p) = p.into_option() {
                let p_cleared = G1Projective::from(p).clear_cofactor();
                if !bool::from(p_cleared.is_identity()) {
                    return p_cleared;
                }
            }
        }
    }

    /// Point doubling.
    pub fn double(&self) -> G1Projective {
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

        let tmp = G1Projective {
            x: x3,
            y: y3,
            z: z3,
        };
        G1Projective::conditional_select(&tmp, &G1Projective::identity(), self.is_identity())
    }

    /// Point addition.
    pub fn add(&self, rhs: &G1Projective) -> G1Projective {
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

        G1Projective {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Mixed addition with affine point.
    pub fn add_mixed(&self, rhs: &G1Affine) -> G1Projective {
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

        let tmp = G1Projective {
            x: x3,
            y: y3,
            z: z3,
        };
        G1Projective::conditional_select(&tmp, self, rhs.is_identity())
    }

    /// Constant-time double-and-add over the low `ORDER_BITS` bits of `by`
    pub(crate) fn multiply(&self, by: &Scalar) -> G1Projective {
        let mut acc = G1Projective::identity();
        for i in (0..ORDER_BITS).rev() {
            acc = acc.double();
            let bit = Choice::from(by.bit(i));
            acc = G1Projective::conditional_select(&acc, &(acc + self), bit);
        }
        acc
    }

    /// Multiply by `|u|`. The seed is public, so this runs in variable time.
    pub(crate) fn mul_by_seed(&self) -> G1Projective {
        let mut acc = G1Projective::identity();
        for i in (0..SEED_BITS).rev() {
            acc = acc.double();
            if (SEED >> i) & 1 == 1 {
                acc += self;
            }
        }
        acc
    }

    /// The order-3 endomorphism on projective coordinates
    pub fn endomorphism(&self) -> G1Projective {
        G1Projective {
            x: self.x * BETA,
            y: self.y,
            z: self.z,
        }
    }

    /// Clear the cofactor `h1 = (u - 1)^2 / 3`.
    pub fn clear_cofactor(&self) -> G1Projective {
        // |u - 1| = |u| + 1 when u < 0
        let m = if SEED_SIGN.is_negative() {
            SEED + 1
        } else {
            SEED - 1
        };
        let h = (m as u128 / 3) * m as u128;

        let mut acc = G1Projective::identity();
        for i in (0..128 - h.leading_zeros()).rev() {
            acc = acc.double();
            if (h >> i) & 1 == 1 {
                acc += self;
            }
        }
        acc
    }

    /// Batch affine conversion.
    ///
    /// # Panics
    /// Panics if `p.len() != q.len()`.
    pub fn batch_normalize(p: &[Self], q: &mut [G1Affine]) {
        assert_eq!(p.len(), q.len());

        let mut acc = Fp::one();
        for (p, q) in p.iter().zip(q.iter_mut()) {
            q.x = acc;
            acc = Fp::conditional_select(&(acc * p.z), &acc, p.is_identity());
        }

        // acc is a product of nonzero values
        acc = acc.invert().unwrap_or(Fp::zero());

        for (p, q) in p.iter().rev().zip(q.iter_mut().rev()) {
            let skip = p.is_identity();
            let tmp = q.x * acc;
            acc = Fp::conditional_select(&(acc * p.z), &acc, skip);
            q.x = p.x * tmp;
            q.y = p.y * tmp;
            q.infinity = Choice::from(0u8);
            *q = G1Affine::conditional_select(q, &G1Affine::identity(), skip);
        }
    }

    /// Convert to affine coordinates.
    pub fn to_affine(&self) -> G1Affine {
        G1Affine::from(self)
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
