//! Degree-48 extension `Fp48 = Fp16[w] / (w^3 - t)`, home of the target group

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use bls48_params::bls48_581::{FROB_FP48, FROB_FP48_SQ};
use bls48_params::TwistType;
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp2::Fp2;
use super::fp4::Fp4;
use super::fp8::Fp8;
use super::fp16::Fp16;

/// `t^((p - 1) / 3) = e·v·s`, so that `w^p = FROB_W · w`
const FROB_W: Fp8 = Fp8 {
    c0: Fp4::zero(),
    c1: Fp4 {
        c0: Fp2::zero(),
        c1: Fp2::from_canonical(&FROB_FP48),
    },
};

/// `t^(2(p - 1) / 3) = e'·v`, so that `(w^2)^p = FROB_W2 · w^2`
pub(crate) const FROB_W2: Fp8 = Fp8 {
    c0: Fp4 {
        c0: Fp2::zero(),
        c1: Fp2::from_canonical(&FROB_FP48_SQ),
    },
    c1: Fp4::zero(),
};

/// Element `c0 + c1·w + c2·w^2` of Fp48
#[derive(Copy, Clone)]
pub struct Fp48 {
    /// Constant coefficient
    pub c0: Fp16,
    /// Coefficient of `w`
    pub c1: Fp16,
    /// Coefficient of `w^2`
    pub c2: Fp16,
}

impl fmt::Debug for Fp48 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + ({:?})*w + ({:?})*w^2", self.c0, self.c1, self.c2)
    }
}

impl From<Fp16> for Fp48 {
    fn from(f: Fp16) -> Fp48 {
        Fp48 {
            c0: f,
            c1: Fp16::zero(),
            c2: Fp16::zero(),
        }
    }
}

impl Default for Fp48 {
    fn default() -> Self {
        Fp48::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp48 {}

impl ConstantTimeEq for Fp48 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl ConditionallySelectable for Fp48 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp48 {
            c0: Fp16::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp16::conditional_select(&a.c1, &b.c1, choice),
            c2: Fp16::conditional_select(&a.c2, &b.c2, choice),
        }
    }
}

impl Eq for Fp48 {}
impl PartialEq for Fp48 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Fp48 {
    /// Size of the big-endian encoding
    pub const BYTES: usize = 3 * Fp16::BYTES;

    /// Additive identity
    #[inline]
    pub const fn zero() -> Self {
        Fp48 {
            c0: Fp16::zero(),
            c1: Fp16::zero(),
            c2: Fp16::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Self {
        Fp48 {
            c0: Fp16::one(),
            c1: Fp16::zero(),
            c2: Fp16::zero(),
        }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    /// Check if element is one
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Fp48::one())
    }

    /// Random element
    pub fn random(mut rng: impl RngCore) -> Self {
        Fp48 {
            c0: Fp16::random(&mut rng),
            c1: Fp16::random(&mut rng),
            c2: Fp16::random(&mut rng),
        }
    }

    /// The `p^24` Frobenius map.
    ///
    /// On the cyclotomic subgroup reached after the easy part of the final
    /// exponentiation this is the group inverse.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Fp48 {
            c0: self.c0.conjugate(),
            c1: self.c1.conjugate().neg(),
            c2: self.c2.conjugate(),
        }
    }

    /// Raise to the p-th power
    pub fn frobenius_map(&self) -> Self {
        Fp48 {
            c0: self.c0.frobenius_map(),
            c1: self.c1.frobenius_map().mul_by_fp8(&FROB_W),
            c2: self.c2.frobenius_map().mul_by_fp8(&FROB_W2),
        }
    }

    /// Raise to the `p^k`-th power
    pub fn frobenius_map_pow(&self, k: usize) -> Self {
        (0..k).fold(*self, |acc, _| acc.frobenius_map())
    }

    /// Multiply two elements (Karatsuba over the cubic extension)
    pub fn mul(&self, rhs: &Self) -> Self {
        let v0 = self.c0.mul(&rhs.c0);
        let v1 = self.c1.mul(&rhs.c1);
        let v2 = self.c2.mul(&rhs.c2);

        let t0 = self
            .c1
            .add(&self.c2)
            .mul(&rhs.c1.add(&rhs.c2))
            .sub(&v1)
            .sub(&v2);
        let t1 = self.c0.add(&self.c1).mul(&rhs.c0.add(&rhs.c1)).sub(&v0).sub(&v1);
        let t2 = self.c0.add(&self.c2).mul(&rhs.c0.add(&rhs.c2)).sub(&v0);

        Fp48 {
            c0: v0.add(&t0.mul_by_nonresidue()),
            c1: t1.add(&v2.mul_by_nonresidue()),
            c2: t2.add(&v1).sub(&v2),
        }
    }

    /// Square this element (Chung-Hasan SQR2)
    pub fn square(&self) -> Self {
        let s0 = self.c0.square();
        let s1 = self.c0.mul(&self.c1).double();
        let s2 = self.c0.sub(&self.c1).add(&self.c2).square();
        let s3 = self.c1.mul(&self.c2).double();
        let s4 = self.c2.square();

        Fp48 {
            c0: s0.add(&s3.mul_by_nonresidue()),
            c1: s1.add(&s4.mul_by_nonresidue()),
            c2: s1.add(&s2).add(&s3).sub(&s0).sub(&s4),
        }
    }

    /// Multiply by a line evaluation with one zero Fp16 slot.
    ///
    /// D-type lines are `l0 + l1·w`, M-type lines are `l0 + l2·w^2`.
    pub fn mul_by_line(&self, line: &Fp48, twist: TwistType) -> Self {
        match twist {
            TwistType::D => {
                let (l0, l1) = (&line.c0, &line.c1);
                let v0 = self.c0.mul(l0);
                let v1 = self.c1.mul(l1);

                let t0 = self.c1.add(&self.c2).mul(l1).sub(&v1);
                let t1 = self.c0.add(&self.c1).mul(&l0.add(l1)).sub(&v0).sub(&v1);
                let t2 = self.c0.add(&self.c2).mul(l0).sub(&v0);

                Fp48 {
                    c0: v0.add(&t0.mul_by_nonresidue()),
                    c1: t1,
                    c2: t2.add(&v1),
                }
            }
            TwistType::M => {
                let (l0, l2) = (&line.c0, &line.c2);
                let v0 = self.c0.mul(l0);
                let v2 = self.c2.mul(l2);

                let t0 = self.c1.add(&self.c2).mul(l2).sub(&v2);
                let t1 = self.c0.add(&self.c1).mul(l0).sub(&v0);
                let t2 = self.c0.add(&self.c2).mul(&l0.add(l2)).sub(&v0).sub(&v2);

                Fp48 {
                    c0: v0.add(&t0.mul_by_nonresidue()),
                    c1: t1.add(&v2.mul_by_nonresidue()),
                    c2: t2,
                }
            }
        }
    }

    /// Add two elements
    #[inline]
    pub fn add(&self, rhs: &Self) -> Self {
        Fp48 {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
            c2: self.c2.add(&rhs.c2),
        }
    }

    /// Subtract two elements
    #[inline]
    pub fn sub(&self, rhs: &Self) -> Self {
        Fp48 {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
            c2: self.c2.sub(&rhs.c2),
        }
    }

    /// Negate this element
    #[inline]
    pub fn neg(&self) -> Self {
        Fp48 {
            c0: self.c0.neg(),
            c1: self.c1.neg(),
            c2: self.c2.neg(),
        }
    }

    /// Multiplicative inverse
    pub fn invert(&self) -> CtOption<Self> {
        let a = self.c0.square().sub(&self.c1.mul(&self.c2).mul_by_nonresidue());
        let b = self.c2.square().mul_by_nonresidue().sub(&self.c0.mul(&self.c1));
        let c = self.c1.square().sub(&self.c0.mul(&self.c2));

        let norm = self
            .c0
            .mul(&a)
            .add(&self.c2.mul(&b).add(&self.c1.mul(&c)).mul_by_nonresidue());

        norm.invert().map(|t| Fp48 {
            c0: a.mul(&t),
            c1: b.mul(&t),
            c2: c.mul(&t),
        })
    }

    /// Variable-time exponentiation by little-endian limbs
    pub fn pow_vartime(&self, by: &[u64]) -> Self {
        let mut res = Self::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res = res.mul(self);
                }
            }
        }
        res
    }

    /// Encode as `c2 || c1 || c0`, big-endian
    pub fn to_bytes(&self) -> [u8; Fp48::BYTES] {
        let mut res = [0u8; Fp48::BYTES];
        res[..Fp16::BYTES].copy_from_slice(&self.c2.to_bytes());
        res[Fp16::BYTES..2 * Fp16::BYTES].copy_from_slice(&self.c1.to_bytes());
        res[2 * Fp16::BYTES..].copy_from_slice(&self.c0.to_bytes());
        res
    }

    /// Decode `c2 || c1 || c0`
    pub fn from_bytes(bytes: &[u8; Fp48::BYTES]) -> CtOption<Self> {
        let mut c2 = [0u8; Fp16::BYTES];
        let mut c1 = [0u8; Fp16::BYTES];
        let mut c0 = [0u8; Fp16::BYTES];
        c2.copy_from_slice(&bytes[..Fp16::BYTES]);
        c1.copy_from_slice(&bytes[Fp16::BYTES..2 * Fp16::BYTES]);
        c0.copy_from_slice(&bytes[2 * Fp16::BYTES..]);

        Fp16::from_bytes(&c2).and_then(|c2| {
            Fp16::from_bytes(&c1)
                .and_then(|c1| Fp16::from_bytes(&c0).map(|c0| Fp48 { c0, c1, c2 }))
        })
    }
}

impl<'a> Neg for &'a Fp48 {
    type Output = Fp48;

    #[inline]
    fn neg(self) -> Fp48 {
        self.neg()
    }
}

impl Neg for Fp48 {
    type Output = Fp48;

    #[inline]
    fn neg(self) -> Fp48 {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fp48> for &'a Fp48 {
    type Output = Fp48;

    #[inline]
    fn sub(self, rhs: &'b Fp48) -> Fp48 {
        self.sub(rhs)
    }
}

impl<'a, 'b> Add<&'b Fp48> for &'a Fp48 {
    type Output = Fp48;

    #[inline]
    fn add(self, rhs: &'b Fp48) -> Fp48 {
        self.add(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp48> for &'a Fp48 {
    type Output = Fp48;

    #[inline]
    fn mul(self, rhs: &'b Fp48) -> Fp48 {
        self.mul(rhs)
    }
}

impl_binops_additive!(Fp48, Fp48);
impl_binops_multiplicative!(Fp48, Fp48);
