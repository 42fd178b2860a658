//! Quartic extension `Fp4 = Fp2[v] / (v^2 - (1 + i))`

use core::fmt;

use bls48_params::bls48_581::FROB_FP4;
use rand::RngCore;
use subtle::{Choice, CtOption};

use super::fp::Fp;
use super::fp2::Fp2;

/// `(1 + i)^((p - 1) / 2)`, so that `v^p = FROB_V · v`
const FROB_V: Fp2 = Fp2::from_canonical(&FROB_FP4);

/// Element `c0 + c1·v` of Fp4
#[derive(Copy, Clone)]
pub struct Fp4 {
    /// Constant coefficient
    pub c0: Fp2,
    /// Coefficient of `v`
    pub c1: Fp2,
}

impl fmt::Debug for Fp4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + ({:?})*v", self.c0, self.c1)
    }
}

impl From<Fp2> for Fp4 {
    fn from(f: Fp2) -> Fp4 {
        Fp4 {
            c0: f,
            c1: Fp2::zero(),
        }
    }
}

impl Fp4 {
    /// Size of the big-endian encoding
    pub const BYTES: usize = 2 * Fp2::BYTES;

    /// Additive identity
    #[inline]
    pub const fn zero() -> Self {
        Fp4 {
            c0: Fp2::zero(),
            c1: Fp2::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Self {
        Fp4 {
            c0: Fp2::one(),
            c1: Fp2::zero(),
        }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Random element
    pub fn random(mut rng: impl RngCore) -> Self {
        Fp4 {
            c0: Fp2::random(&mut rng),
            c1: Fp2::random(&mut rng),
        }
    }

    /// Conjugation over Fp2 (`v -> -v`), equal to the `p^2` Frobenius map
    #[inline]
    pub fn conjugate(&self) -> Self {
        Fp4 {
            c0: self.c0,
            c1: self.c1.neg(),
        }
    }

    /// Raise to the p-th power
    pub fn frobenius_map(&self) -> Self {
        Fp4 {
            c0: self.c0.frobenius_map(),
            c1: self.c1.frobenius_map().mul(&FROB_V),
        }
    }

    /// Multiply by `v`
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Self {
        Fp4 {
            c0: self.c1.mul_by_nonresidue(),
            c1: self.c0,
        }
    }

    /// Divide by `v`
    #[inline]
    pub fn div_by_nonresidue(&self) -> Self {
        Fp4 {
            c0: self.c1,
            c1: self.c0.div_by_nonresidue(),
        }
    }

    /// Multiply both coefficients by an Fp2 element
    #[inline]
    pub fn mul_by_fp2(&self, k: &Fp2) -> Self {
        Fp4 {
            c0: self.c0.mul(k),
            c1: self.c1.mul(k),
        }
    }

    /// Multiply every coefficient by a base field element
    #[inline]
    pub fn mul_by_fp(&self, k: &Fp) -> Self {
        Fp4 {
            c0: self.c0.mul_by_fp(k),
            c1: self.c1.mul_by_fp(k),
        }
    }

    /// Multiply two elements (Karatsuba)
    pub fn mul(&self, rhs: &Self) -> Self {
        let aa = self.c0.mul(&rhs.c0);
        let bb = self.c1.mul(&rhs.c1);
        let s = self.c0.add(&self.c1);
        let t = rhs.c0.add(&rhs.c1);

        Fp4 {
            c0: aa.add(&bb.mul_by_nonresidue()),
            c1: s.mul(&t).sub(&aa).sub(&bb),
        }
    }

    /// Square this element
    pub fn square(&self) -> Self {
        // (a + b v)^2 = (a + b)(a + b ξ) - ab - ab ξ + 2ab v
        let ab = self.c0.mul(&self.c1);
        let s = self.c0.add(&self.c1);
        let t = self.c0.add(&self.c1.mul_by_nonresidue());

        Fp4 {
            c0: s.mul(&t).sub(&ab).sub(&ab.mul_by_nonresidue()),
            c1: ab.double(),
        }
    }

    /// Add two elements
    #[inline]
    pub fn add(&self, rhs: &Self) -> Self {
        Fp4 {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
        }
    }

    /// Subtract two elements
    #[inline]
    pub fn sub(&self, rhs: &Self) -> Self {
        Fp4 {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
        }
    }

    /// Negate this element
    #[inline]
    pub fn neg(&self) -> Self {
        Fp4 {
            c0: self.c0.neg(),
            c1: self.c1.neg(),
        }
    }

    /// Double this element
    #[inline]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Multiplicative inverse
    pub fn invert(&self) -> CtOption<Self> {
        // 1/(a + b v) = (a - b v)/(a^2 - ξ b^2)
        let norm = self.c0.square().sub(&self.c1.square().mul_by_nonresidue());
        norm.invert().map(|t| Fp4 {
            c0: self.c0.mul(&t),
            c1: self.c1.mul(&t).neg(),
        })
    }

    /// Encode as `c1 || c0`, big-endian
    pub fn to_bytes(&self) -> [u8; Fp4::BYTES] {
        let mut res = [0u8; Fp4::BYTES];
        res[..Fp2::BYTES].copy_from_slice(&self.c1.to_bytes());
        res[Fp2::BYTES..].copy_from_slice(&self.c0.to_bytes());
        res
    }

    /// Decode `c1 || c0`
    pub fn from_bytes(bytes: &[u8; Fp4::BYTES]) -> CtOption<Self> {
        let mut c1 = [0u8; Fp2::BYTES];
        let mut c0 = [0u8; Fp2::BYTES];
        c1.copy_from_slice(&bytes[..Fp2::BYTES]);
        c0.copy_from_slice(&bytes[Fp2::BYTES..]);

        Fp2::from_bytes(&c1).and_then(|c1| Fp2::from_bytes(&c0).map(|c0| Fp4 { c0, c1 }))
    }
}

impl_quadratic_extension_traits!(Fp4);
