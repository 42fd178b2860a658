//! Fixed-width integers used as exponents and scalar multipliers
//!
//! A `Scalar` is a plain (non-Montgomery) little-endian 640-bit integer.
//! Caller supplied scalars are reduced modulo the group order `r`; the
//! endomorphism decompositions produce short sub-scalars that live in the
//! same type unreduced.

use core::cmp::Ordering;
use core::fmt;

use bls48_api::{Result as ApiResult, SerializeSecret};
use bls48_params::bls48_581::{ORDER as ORDER_LIMBS, ORDER_BITS, SCALAR_SIZE};
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroizing;

use super::field::fp::{adc, sbb};
use crate::error::{validate, Error};

use alloc::vec::Vec;

const LIMBS: usize = 10;

/// Unsigned 640-bit integer, little-endian limbs
#[derive(Clone, Copy, Default)]
pub struct Scalar(pub(crate) [u64; LIMBS]);

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tmp = self.to_bytes_be();
        write!(f, "0x")?;
        for &b in tmp.iter() {
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
        Scalar::from_u64(val)
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(Choice::from(1u8), |acc, (a, b)| acc & a.ct_eq(b))
    }
}

impl Eq for Scalar {}
impl PartialEq for Scalar {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

/// Variable-time; only for public values such as decomposition outputs
impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..LIMBS).rev() {
            match self.0[i].cmp(&other.0[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut r = [0u64; LIMBS];
        for (i, limb) in r.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Scalar(r)
    }
}

impl zeroize::DefaultIsZeroes for Scalar {}

impl Scalar {
    /// Prime order `r` of G1, G2 and GT
    pub const ORDER: Scalar = Scalar(ORDER_LIMBS);

    /// Zero
    #[inline]
    pub const fn zero() -> Scalar {
        Scalar([0; LIMBS])
    }

    /// One
    #[inline]
    pub const fn one() -> Scalar {
        Scalar::from_u64(1)
    }

    /// Embed a single word
    pub const fn from_u64(val: u64) -> Scalar {
        let mut limbs = [0u64; LIMBS];
        limbs[0] = val;
        Scalar(limbs)
    }

    /// Create from little-endian limbs
    pub const fn from_raw(val: [u64; LIMBS]) -> Scalar {
        Scalar(val)
    }

    /// Check if zero
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Scalar::zero())
    }

    /// Bit length; zero has length zero. Variable time.
    pub fn nbits(&self) -> usize {
        for i in (0..LIMBS).rev() {
            if self.0[i] != 0 {
                return 64 * i + 64 - self.0[i].leading_zeros() as usize;
            }
        }
        0
    }

    /// Bit `i` as 0 or 1
    #[inline]
    pub fn bit(&self, i: usize) -> u8 {
        if i >= 64 * LIMBS {
            return 0;
        }
        ((self.0[i / 64] >> (i % 64)) & 1) as u8
    }

    /// Wrapping addition
    pub fn add(&self, rhs: &Scalar) -> Scalar {
        let mut r = [0u64; LIMBS];
        let mut carry = 0;
        for (i, limb) in r.iter_mut().enumerate() {
            let (s, c) = adc(self.0[i], rhs.0[i], carry);
            *limb = s;
            carry = c;
        }
        Scalar(r)
    }

    /// Wrapping subtraction
    pub fn sub(&self, rhs: &Scalar) -> Scalar {
        self.sub_with_borrow(rhs).0
    }

    /// Subtraction returning the final borrow word (all ones on underflow)
    fn sub_with_borrow(&self, rhs: &Scalar) -> (Scalar, u64) {
        let mut r = [0u64; LIMBS];
        let mut borrow = 0;
        for (i, limb) in r.iter_mut().enumerate() {
            let (d, b) = sbb(self.0[i], rhs.0[i], borrow);
            *limb = d;
            borrow = b;
        }
        (Scalar(r), borrow)
    }

    /// `self - m` when `self >= m`, otherwise `self`
    fn sub_if_ge(&self, m: &Scalar) -> Scalar {
        let (d, borrow) = self.sub_with_borrow(m);
        Scalar::conditional_select(&d, self, Choice::from((borrow & 1) as u8))
    }

    /// Wrapping multiplication by a single word
    pub fn mul_u64(&self, k: u64) -> Scalar {
        let mut r = [0u64; LIMBS];
        let mut carry = 0u64;
        for (i, limb) in r.iter_mut().enumerate() {
            let t = (self.0[i] as u128) * (k as u128) + (carry as u128);
            *limb = t as u64;
            carry = (t >> 64) as u64;
        }
        Scalar(r)
    }

    /// Quotient and remainder by a nonzero word. Variable time.
    pub fn div_rem_u64(&self, d: u64) -> (Scalar, u64) {
        debug_assert!(d != 0);
        let mut q = [0u64; LIMBS];
        let mut rem = 0u64;
        for i in (0..LIMBS).rev() {
            let cur = ((rem as u128) << 64) | (self.0[i] as u128);
            q[i] = (cur / d as u128) as u64;
            rem = (cur % d as u128) as u64;
        }
        (Scalar(q), rem)
    }

    /// `m - self` for `0 < self < m`, and zero for zero
    pub fn modneg(&self, m: &Scalar) -> Scalar {
        Scalar::conditional_select(&m.sub(self), &Scalar::zero(), self.is_zero())
    }

    /// Remainder modulo `m`, for `0 < m < 2^639`
    pub fn reduce(&self, m: &Scalar) -> Scalar {
        let mut rem = Scalar::zero();
        for i in (0..64 * LIMBS).rev() {
            // rem < m, so the shift cannot overflow
            let mut shifted = [0u64; LIMBS];
            shifted[0] = (rem.0[0] << 1) | self.bit(i) as u64;
            for j in 1..LIMBS {
                shifted[j] = (rem.0[j] << 1) | (rem.0[j - 1] >> 63);
            }
            rem = Scalar(shifted).sub_if_ge(m);
        }
        rem
    }

    /// `(self + rhs) mod m` for reduced operands
    pub fn mod_add(&self, rhs: &Scalar, m: &Scalar) -> Scalar {
        self.add(rhs).sub_if_ge(m)
    }

    /// `(self * rhs) mod m`, double-and-add over the bits of `rhs`
    pub fn mod_mul(&self, rhs: &Scalar, m: &Scalar) -> Scalar {
        let a = self.reduce(m);
        let mut acc = Scalar::zero();
        for i in (0..64 * LIMBS).rev() {
            acc = acc.mod_add(&acc, m);
            let with = acc.mod_add(&a, m);
            acc = Scalar::conditional_select(&acc, &with, Choice::from(rhs.bit(i)));
        }
        acc
    }

    /// Uniformly random scalar in `[0, r)`
    pub fn random(mut rng: impl RngCore) -> Scalar {
        let top_bits = ORDER_BITS % 64;
        let top_limb = ORDER_BITS / 64;
        loop {
            let mut limbs = [0u64; LIMBS];
            for limb in limbs.iter_mut().take(top_limb + 1) {
                *limb = rng.next_u64();
            }
            limbs[top_limb] &= (1u64 << top_bits) - 1;

            let s = Scalar(limbs);
            if s < Scalar::ORDER {
                return s;
            }
        }
    }

    /// Decode 80 big-endian bytes
    pub fn from_bytes_be(bytes: &[u8; SCALAR_SIZE]) -> Scalar {
        let mut limbs = [0u64; LIMBS];
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            limbs[LIMBS - 1 - i] = u64::from_be_bytes(word);
        }
        Scalar(limbs)
    }

    /// Encode as 80 big-endian bytes
    pub fn to_bytes_be(&self) -> [u8; SCALAR_SIZE] {
        let mut res = [0u8; SCALAR_SIZE];
        for (i, chunk) in res.chunks_exact_mut(8).enumerate() {
            chunk.copy_from_slice(&self.0[LIMBS - 1 - i].to_be_bytes());
        }
        res
    }
}

impl SerializeSecret for Scalar {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::length("Scalar::from_bytes", bytes.len(), SCALAR_SIZE)?;

        let mut array = [0u8; SCALAR_SIZE];
        array.copy_from_slice(bytes);
        let s = Scalar::from_bytes_be(&array);
        zeroize::Zeroize::zeroize(&mut array);

        if s >= Scalar::ORDER {
            return Err(Error::param("scalar", "not reduced modulo the group order").into());
        }
        Ok(s)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.to_bytes_be().to_vec())
    }
}
