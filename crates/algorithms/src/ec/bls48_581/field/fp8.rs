//! Octic extension `Fp8 = Fp4[s] / (s^2 - v)`, the coordinate field of G2

use core::fmt;

use bls48_params::bls48_581::FROB_FP8;
use rand::RngCore;
use subtle::{Choice, CtOption};

use super::fp::Fp;
use super::fp2::Fp2;
use super::fp4::Fp4;

/// `v^((p - 1) / 2)`, so that `s^p = FROB_S · s`
const FROB_S: Fp4 = Fp4 {
    c0: Fp2::zero(),
    c1: Fp2::from_canonical(&FROB_FP8),
};

/// Element `c0 + c1·s` of Fp8
#[derive(Copy, Clone)]
pub struct Fp8 {
    /// Constant coefficient
    pub c0: Fp4,
    /// Coefficient of `s`
    pub c1: Fp4,
}

impl fmt::Debug for Fp8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + ({:?})*s", self.c0, self.c1)
    }
}

impl From<Fp4> for Fp8 {
    fn from(f: Fp4) -> Fp8 {
        Fp8 {
            c0: f,
            c1: Fp4::zero(),
        }
    }
}

impl From<Fp> for Fp8 {
    fn from(f: Fp) -> Fp8 {
        Fp8::from(Fp4::from(Fp2::from(f)))
    }
}

impl Fp8 {
    /// Size of the big-endian encoding
    pub const BYTES: usize = 2 * Fp4::BYTES;

    /// Additive identity
    #[inline]
    pub const fn zero() -> Self {
        Fp8 {
            c0: Fp4::zero(),
            c1: Fp4::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Self {
        Fp8 {
            c0: Fp4::one(),
            c1: Fp4::zero(),
        }
    }

    /// Build from eight canonical Fp coefficients, lowest tower slot first
    pub const fn from_canonical(v: &[[u64; 10]; 8]) -> Self {
        Fp8 {
            c0: Fp4 {
                c0: Fp2 {
                    c0: Fp::from_canonical(&v[0]),
                    c1: Fp::from_canonical(&v[1]),
                },
                c1: Fp2 {
                    c0: Fp::from_canonical(&v[2]),
                    c1: Fp::from_canonical(&v[3]),
                },
            },
            c1: Fp4 {
                c0: Fp2 {
                    c0: Fp::from_canonical(&v[4]),
                    c1: Fp::from_canonical(&v[5]),
                },
                c1: Fp2 {
                    c0: Fp::from_canonical(&v[6]),
                    c1: Fp::from_canonical(&v[7]),
                },
            },
        }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Random element
    pub fn random(mut rng: impl RngCore) -> Self {
        Fp8 {
            c0: Fp4::random(&mut rng),
            c1: Fp4::random(&mut rng),
        }
    }

    /// Conjugation over Fp4 (`s -> -s`), equal to the `p^4` Frobenius map
    #[inline]
    pub fn conjugate(&self) -> Self {
        Fp8 {
            c0: self.c0,
            c1: self.c1.neg(),
        }
    }

    /// Raise to the p-th power
    pub fn frobenius_map(&self) -> Self {
        Fp8 {
            c0: self.c0.frobenius_map(),
            c1: self.c1.frobenius_map().mul(&FROB_S),
        }
    }

    /// Multiply by `s`
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Self {
        Fp8 {
            c0: self.c1.mul_by_nonresidue(),
            c1: self.c0,
        }
    }

    /// Divide by `s`
    #[inline]
    pub fn div_by_nonresidue(&self) -> Self {
        Fp8 {
            c0: self.c1,
            c1: self.c0.div_by_nonresidue(),
        }
    }

    /// Multiply every coefficient by a base field element
    #[inline]
    pub fn mul_by_fp(&self, k: &Fp) -> Self {
        Fp8 {
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

        Fp8 {
            c0: aa.add(&bb.mul_by_nonresidue()),
            c1: s.mul(&t).sub(&aa).sub(&bb),
        }
    }

    /// Square this element
    pub fn square(&self) -> Self {
        let ab = self.c0.mul(&self.c1);
        let s = self.c0.add(&self.c1);
        let t = self.c0.add(&self.c1.mul_by_nonresidue());

        Fp8 {
            c0: s.mul(&t).sub(&ab).sub(&ab.mul_by_nonresidue()),
            c1: ab.double(),
        }
    }

    /// Add two elements
    #[inline]
    pub fn add(&self, rhs: &Self) -> Self {
        Fp8 {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
        }
    }

    /// Subtract two elements
    #[inline]
    pub fn sub(&self, rhs: &Self) -> Self {
        Fp8 {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
        }
    }

    /// Negate this element
    #[inline]
    pub fn neg(&self) -> Self {
        Fp8 {
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
        norm.invert().map(|t| Fp8 {
            c0: self.c0.mul(&t),
            c1: self.c1.mul(&t).neg(),
        })
    }

    /// Encode as `c1 || c0`, big-endian
    pub fn to_bytes(&self) -> [u8; Fp8::BYTES] {
        let mut res = [0u8; Fp8::BYTES];
        res[..Fp4::BYTES].copy_from_slice(&self.c1.to_bytes());
        res[Fp4::BYTES..].copy_from_slice(&self.c0.to_bytes());
        res
    }

    /// Decode `c1 || c0`
    pub fn from_bytes(bytes: &[u8; Fp8::BYTES]) -> CtOption<Self> {
        let mut c1 = [0u8; Fp4::BYTES];
        let mut c0 = [0u8; Fp4::BYTES];
        c1.copy_from_slice(&bytes[..Fp4::BYTES]);
        c0.copy_from_slice(&bytes[Fp4::BYTES..]);

        Fp4::from_bytes(&c1).and_then(|c1| Fp4::from_bytes(&c0).map(|c0| Fp8 { c0, c1 }))
    }
}

impl_quadratic_extension_traits!(Fp8);
