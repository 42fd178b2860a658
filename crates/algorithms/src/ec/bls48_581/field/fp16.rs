//! Degree-16 extension `Fp16 = Fp8[t] / (t^2 - s)`

use core::fmt;

use bls48_params::bls48_581::FROB_FP16;
use rand::RngCore;
use subtle::{Choice, CtOption};

use super::fp2::Fp2;
use super::fp4::Fp4;
use super::fp8::Fp8;

/// `s^((p - 1) / 2)`, so that `t^p = FROB_T · t`
pub(crate) const FROB_T: Fp8 = Fp8 {
    c0: Fp4::zero(),
    c1: Fp4 {
        c0: Fp2::from_canonical(&FROB_FP16),
        c1: Fp2::zero(),
    },
};

/// Element `c0 + c1·t` of Fp16
#[derive(Copy, Clone)]
pub struct Fp16 {
    /// Constant coefficient
    pub c0: Fp8,
    /// Coefficient of `t`
    pub c1: Fp8,
}

impl fmt::Debug for Fp16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + ({:?})*t", self.c0, self.c1)
    }
}

impl From<Fp8> for Fp16 {
    fn from(f: Fp8) -> Fp16 {
        Fp16 {
            c0: f,
            c1: Fp8::zero(),
        }
    }
}

impl Fp16 {
    /// Size of the big-endian encoding
    pub const BYTES: usize = 2 * Fp8::BYTES;

    /// Additive identity
    #[inline]
    pub const fn zero() -> Self {
        Fp16 {
            c0: Fp8::zero(),
            c1: Fp8::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Self {
        Fp16 {
            c0: Fp8::one(),
            c1: Fp8::zero(),
        }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Random element
    pub fn random(mut rng: impl RngCore) -> Self {
        Fp16 {
            c0: Fp8::random(&mut rng),
            c1: Fp8::random(&mut rng),
        }
    }

    /// Conjugation over Fp8 (`t -> -t`), equal to the `p^8` Frobenius map
    #[inline]
    pub fn conjugate(&self) -> Self {
        Fp16 {
            c0: self.c0,
            c1: self.c1.neg(),
        }
    }

    /// Raise to the p-th power
    pub fn frobenius_map(&self) -> Self {
        Fp16 {
            c0: self.c0.frobenius_map(),
            c1: self.c1.frobenius_map().mul(&FROB_T),
        }
    }

    /// Multiply by `t`
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Self {
        Fp16 {
            c0: self.c1.mul_by_nonresidue(),
            c1: self.c0,
        }
    }

    /// Multiply both coefficients by an Fp8 element
    #[inline]
    pub fn mul_by_fp8(&self, k: &Fp8) -> Self {
        Fp16 {
            c0: self.c0.mul(k),
            c1: self.c1.mul(k),
        }
    }

    /// Multiply two elements (Karatsuba)
    pub fn mul(&self, rhs: &Self) -> Self {
        let aa = self.c0.mul(&rhs.c0);
        let bb = self.c1.mul(&rhs.c1);
        let s = self.c0.add(&self.c1);
        let t = rhs.c0.add(&rhs.c1);

        Fp16 {
            c0: aa.add(&bb.mul_by_nonresidue()),
            c1: s.mul(&t).sub(&aa).sub(&bb),
        }
    }

    /// Square this element
    pub fn square(&self) -> Self {
        let ab = self.c0.mul(&self.c1);
        let s = self.c0.add(&self.c1);
        let t = self.c0.add(&self.c1.mul_by_nonresidue());

        Fp16 {
            c0: s.mul(&t).sub(&ab).sub(&ab.mul_by_nonresidue()),
            c1: ab.double(),
        }
    }

    /// Add two elements
    #[inline]
    pub fn add(&self, rhs: &Self) -> Self {
        Fp16 {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
        }
    }

    /// Subtract two elements
    #[inline]
    pub fn sub(&self, rhs: &Self) -> Self {
        Fp16 {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
        }
    }

    /// Negate this element
    #[inline]
    pub fn neg(&self) -> Self {
        Fp16 {
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
        let norm = self.c0.square().sub(&self.c1.square().mul_by_nonresidue());
        norm.invert().map(|t| Fp16 {
            c0: self.c0.mul(&t),
            c1: self.c1.mul(&t).neg(),
        })
    }

    /// Encode as `c1 || c0`, big-endian
    pub fn to_bytes(&self) -> [u8; Fp16::BYTES] {
        let mut res = [0u8; Fp16::BYTES];
        res[..Fp8::BYTES].copy_from_slice(&self.c1.to_bytes());
        res[Fp8::BYTES..].copy_from_slice(&self.c0.to_bytes());
        res
    }

    /// Decode `c1 || c0`
    pub fn from_bytes(bytes: &[u8; Fp16::BYTES]) -> CtOption<Self> {
        let mut c1 = [0u8; Fp8::BYTES];
        let mut c0 = [0u8; Fp8::BYTES];
        c1.copy_from_slice(&bytes[..Fp8::BYTES]);
        c0.copy_from_slice(&bytes[Fp8::BYTES..]);

        Fp8::from_bytes(&c1).and_then(|c1| Fp8::from_bytes(&c0).map(|c0| Fp16 { c0, c1 }))
    }
}

impl_quadratic_extension_traits!(Fp16);
