//! Quadratic extension `Fp2 = Fp[i] / (i^2 + 1)`

use core::fmt;

use bls48_params::bls48_581::FP_SIZE;
use rand::RngCore;
use subtle::{Choice, CtOption};

use super::fp::Fp;

/// Element `c0 + c1·i` of Fp2
#[derive(Copy, Clone)]
pub struct Fp2 {
    /// Real part
    pub c0: Fp,
    /// Imaginary part
    pub c1: Fp,
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

impl From<Fp> for Fp2 {
    fn from(f: Fp) -> Fp2 {
        Fp2 {
            c0: f,
            c1: Fp::zero(),
        }
    }
}

impl Fp2 {
    /// Size of the big-endian encoding
    pub const BYTES: usize = 2 * FP_SIZE;

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

    /// Build from canonical limbs of both coefficients
    pub const fn from_canonical(v: &[[u64; 10]; 2]) -> Fp2 {
        Fp2 {
            c0: Fp::from_canonical(&v[0]),
            c1: Fp::from_canonical(&v[1]),
        }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Random element
    pub fn random(mut rng: impl RngCore) -> Fp2 {
        Fp2 {
            c0: Fp::random(&mut rng),
            c1: Fp::random(&mut rng),
        }
    }

    /// Complex conjugation, which is also the p-power Frobenius map
    #[inline(always)]
    pub fn conjugate(&self) -> Self {
        Fp2 {
            c0: self.c0,
            c1: (&self.c1).neg(),
        }
    }

    /// Raise to the p-th power
    #[inline(always)]
    pub fn frobenius_map(&self) -> Self {
        self.conjugate()
    }

    /// Multiply by the non-residue `1 + i` that defines Fp4
    #[inline(always)]
    pub fn mul_by_nonresidue(&self) -> Fp2 {
        // (c0 + c1 i)(1 + i) = (c0 - c1) + (c0 + c1) i
        Fp2 {
            c0: (&self.c0).sub(&self.c1),
            c1: (&self.c0).add(&self.c1),
        }
    }

    /// Divide by the non-residue `1 + i`
    #[inline(always)]
    pub fn div_by_nonresidue(&self) -> Fp2 {
        // (c0 + c1 i)(1 - i) / 2 = ((c0 + c1) + (c1 - c0) i) / 2
        Fp2 {
            c0: (&self.c0).add(&self.c1).div2(),
            c1: (&self.c1).sub(&self.c0).div2(),
        }
    }

    /// Multiply both coefficients by a base field element
    #[inline]
    pub fn mul_by_fp(&self, k: &Fp) -> Fp2 {
        Fp2 {
            c0: (&self.c0).mul(k),
            c1: (&self.c1).mul(k),
        }
    }

    /// Square this element
    #[inline]
    pub fn square(&self) -> Fp2 {
        // (a + bi)^2 = (a + b)(a - b) + 2ab i
        let a = (&self.c0).add(&self.c1);
        let b = (&self.c0).sub(&self.c1);
        let c = (&self.c0).double();

        Fp2 {
            c0: (&a).mul(&b),
            c1: (&c).mul(&self.c1),
        }
    }

    /// Multiply two elements (Karatsuba)
    #[inline]
    pub fn mul(&self, rhs: &Fp2) -> Fp2 {
        let aa = (&self.c0).mul(&rhs.c0);
        let bb = (&self.c1).mul(&rhs.c1);
        let s = (&self.c0).add(&self.c1);
        let t = (&rhs.c0).add(&rhs.c1);

        Fp2 {
            c0: (&aa).sub(&bb),
            c1: (&s).mul(&t).sub(&aa).sub(&bb),
        }
    }

    /// Add two elements
    #[inline]
    pub fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: (&self.c0).add(&rhs.c0),
            c1: (&self.c1).add(&rhs.c1),
        }
    }

    /// Subtract two elements
    #[inline]
    pub fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: (&self.c0).sub(&rhs.c0),
            c1: (&self.c1).sub(&rhs.c1),
        }
    }

    /// Negate this element
    #[inline]
    pub fn neg(&self) -> Fp2 {
        Fp2 {
            c0: (&self.c0).neg(),
            c1: (&self.c1).neg(),
        }
    }

    /// Double this element
    #[inline]
    pub fn double(&self) -> Fp2 {
        self.add(self)
    }

    /// Multiplicative inverse
    pub fn invert(&self) -> CtOption<Self> {
        // 1/(a + bi) = (a - bi)/(a^2 + b^2)
        (&self.c0.square())
            .add(&self.c1.square())
            .invert()
            .map(|t| Fp2 {
                c0: (&self.c0).mul(&t),
                c1: (&self.c1).mul(&t).neg(),
            })
    }

    /// Encode as `c1 || c0`, big-endian
    pub fn to_bytes(&self) -> [u8; 2 * FP_SIZE] {
        let mut res = [0u8; 2 * FP_SIZE];
        res[..FP_SIZE].copy_from_slice(&self.c1.to_bytes());
        res[FP_SIZE..].copy_from_slice(&self.c0.to_bytes());
        res
    }

    /// Decode `c1 || c0`, rejecting non-canonical coefficients
    pub fn from_bytes(bytes: &[u8; 2 * FP_SIZE]) -> CtOption<Fp2> {
        let mut c1 = [0u8; FP_SIZE];
        let mut c0 = [0u8; FP_SIZE];
        c1.copy_from_slice(&bytes[..FP_SIZE]);
        c0.copy_from_slice(&bytes[FP_SIZE..]);

        Fp::from_bytes(&c1).and_then(|c1| Fp::from_bytes(&c0).map(|c0| Fp2 { c0, c1 }))
    }
}

impl_quadratic_extension_traits!(Fp2);
