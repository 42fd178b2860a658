//! BLS48-581 base field `GF(p)`, p a 581-bit prime with p = 3 (mod 4)

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use bls48_params::bls48_581::{FP_SIZE, MODULUS};
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

// ============================================================================
// Arithmetic Helper Functions
// ============================================================================

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow)
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

// ============================================================================
// Field Constants
// ============================================================================

const LIMBS: usize = 10;

/// Montgomery parameter INV = -(p^{-1} mod 2^64) mod 2^64
const INV: u64 = 0xa148_b81f_c39d_5a7d;

/// Montgomery R = 2^640 mod p
const R: Fp = Fp([
    0x9f32_6b4f_4369_1557,
    0xc906_de3b_7dd9_c36b,
    0x2a05_1559_8c2e_2357,
    0xbc7e_9eb0_8a2a_83b6,
    0x10e7_c969_b3ef_5ba7,
    0x6406_1504_33b8_fbb0,
    0xa335_40d8_f639_ccf5,
    0xc97a_b11b_bd6e_9bf3,
    0x13de_1b48_76fb_5061,
    0x0000_0000_0000_0002,
]);

/// Montgomery R^2 = 2^1280 mod p
const R2: Fp = Fp([
    0xf36b_bf20_89e7_65f6,
    0x755a_0271_c039_067c,
    0xfc7d_832e_d0f8_1e69,
    0x3620_c740_7448_c4cb,
    0xa0c7_ecb0_2a69_3c4a,
    0xdeeb_59df_773a_9e7e,
    0x5720_5897_2c6f_c5c4,
    0x0575_9d0a_cabb_030f,
    0xd5bc_b5f1_4f6d_a60b,
    0x0000_0000_0000_0007,
]);

/// Montgomery R^3 = 2^1920 mod p
const R3: Fp = Fp([
    0x1d0b_2289_7d56_323b,
    0x6d36_d8b0_7347_9804,
    0x3c6c_a0d0_c4b7_1ba3,
    0xfde7_633c_f8bf_bc1b,
    0x34dc_017d_f854_745a,
    0xe919_572f_fe3e_087d,
    0x5ef5_bda9_aa3d_90b1,
    0x2e9c_22b8_3ceb_7b76,
    0x03ef_6613_522a_d377,
    0x0000_0000_0000_0003,
]);

/// p - 2, the inversion exponent
const P_MINUS_2: [u64; LIMBS] = [
    0x3edc_154e_6565_9129,
    0x578f_df72_1a4a_48ac,
    0x8367_a551_3170_ee0a,
    0xcd30_394f_4736_daf6,
    0x8ae4_3af6_e082_acd9,
    0xe6c0_f1f3_9754_44a4,
    0xe84f_8d12_2131_bb3b,
    0x24e3_1d47_012a_0056,
    0x80f7_3ff3_476f_3138,
    0x0000_0000_0000_0012,
];

/// (p + 1) / 4, the square root exponent
const P_PLUS_1_DIV_4: [u64; LIMBS] = [
    0x0fb7_0553_9959_644b,
    0x95e3_f7dc_8692_922b,
    0xa0d9_e954_4c5c_3b82,
    0x734c_0e53_d1cd_b6bd,
    0x22b9_0ebd_b820_ab36,
    0xf9b0_3c7c_e5d5_1129,
    0xba13_e344_884c_6ece,
    0x0938_c751_c04a_8015,
    0xa03d_cffc_d1db_cc4e,
    0x0000_0000_0000_0004,
];

/// (p + 1) / 2, the smallest "lexicographically largest" value
const P_PLUS_1_DIV_2: [u64; LIMBS] = [
    0x1f6e_0aa7_32b2_c896,
    0x2bc7_efb9_0d25_2456,
    0x41b3_d2a8_98b8_7705,
    0xe698_1ca7_a39b_6d7b,
    0x4572_1d7b_7041_566c,
    0xf360_78f9_cbaa_2252,
    0x7427_c689_1098_dd9d,
    0x1271_8ea3_8095_002b,
    0x407b_9ff9_a3b7_989c,
    0x0000_0000_0000_0009,
];

// ============================================================================
// Field Element Type
// ============================================================================

/// Element in Montgomery form: Fp(a) = aR mod p, with R = 2^640
#[derive(Copy, Clone)]
pub struct Fp(pub(crate) [u64; LIMBS]);

impl Fp {
    /// Conditionally subtract p so the result lies in [0, p)
    #[inline]
    const fn subtract_p(&self) -> Fp {
        let mut r = [0u64; LIMBS];
        let mut borrow = 0;
        let mut i = 0;
        while i < LIMBS {
            let (d, b) = sbb(self.0[i], MODULUS[i], borrow);
            r[i] = d;
            borrow = b;
            i += 1;
        }

        // borrow is all ones if self < p
        let mut i = 0;
        while i < LIMBS {
            r[i] = (self.0[i] & borrow) | (r[i] & !borrow);
            i += 1;
        }

        Fp(r)
    }

    /// Montgomery multiplication, coarsely integrated operand scanning.
    ///
    /// p < R/4, so the running total never needs more than two extra words
    /// and one final subtraction suffices.
    #[inline]
    const fn montgomery_mul(a: &[u64; LIMBS], b: &[u64; LIMBS]) -> Fp {
        let mut t = [0u64; LIMBS + 2];
        let mut i = 0;
        while i < LIMBS {
            let mut carry = 0;
            let mut j = 0;
            while j < LIMBS {
                let (lo, hi) = mac(t[j], a[j], b[i], carry);
                t[j] = lo;
                carry = hi;
                j += 1;
            }
            let (lo, hi) = adc(t[LIMBS], carry, 0);
            t[LIMBS] = lo;
            t[LIMBS + 1] = hi;

            let k = t[0].wrapping_mul(INV);
            let (_, mut carry) = mac(t[0], k, MODULUS[0], 0);
            let mut j = 1;
            while j < LIMBS {
                let (lo, hi) = mac(t[j], k, MODULUS[j], carry);
                t[j - 1] = lo;
                carry = hi;
                j += 1;
            }
            let (lo, hi) = adc(t[LIMBS], carry, 0);
            t[LIMBS - 1] = lo;
            t[LIMBS] = t[LIMBS + 1] + hi;
            i += 1;
        }

        let mut r = [0u64; LIMBS];
        let mut i = 0;
        while i < LIMBS {
            r[i] = t[i];
            i += 1;
        }
        Fp(r).subtract_p()
    }

    /// Convert out of Montgomery form into canonical limbs
    #[inline]
    pub(crate) const fn to_canonical(&self) -> [u64; LIMBS] {
        let mut one = [0u64; LIMBS];
        one[0] = 1;
        Self::montgomery_mul(&self.0, &one).0
    }

    /// Check if value is greater than (p-1)/2
    fn is_lexicographically_largest(&self) -> bool {
        let tmp = self.to_canonical();

        let mut borrow = 0;
        for i in 0..LIMBS {
            let (_, b) = sbb(tmp[i], P_PLUS_1_DIV_2[i], borrow);
            borrow = b;
        }

        borrow == 0
    }
}

// ============================================================================
// Core Field Operations
// ============================================================================

impl Fp {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp {
        Fp([0; LIMBS])
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp {
        R
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Fp::zero())
    }

    /// Create from Montgomery-form limbs without checking canonicity
    pub const fn from_raw_unchecked(v: [u64; LIMBS]) -> Fp {
        Fp(v)
    }

    /// Convert canonical little-endian limbs (value < p) into Montgomery form
    pub const fn from_canonical(v: &[u64; LIMBS]) -> Fp {
        Self::montgomery_mul(v, &R2.0)
    }

    /// Embed a small integer
    pub const fn from_u64(v: u64) -> Fp {
        let mut limbs = [0u64; LIMBS];
        limbs[0] = v;
        Self::from_canonical(&limbs)
    }

    /// Add two field elements
    #[inline]
    pub const fn add(&self, rhs: &Fp) -> Fp {
        let mut d = [0u64; LIMBS];
        let mut carry = 0;
        let mut i = 0;
        while i < LIMBS {
            let (s, c) = adc(self.0[i], rhs.0[i], carry);
            d[i] = s;
            carry = c;
            i += 1;
        }

        Fp(d).subtract_p()
    }

    /// Subtract two field elements
    #[inline]
    pub const fn sub(&self, rhs: &Fp) -> Fp {
        (&rhs.neg()).add(self)
    }

    /// Negate a field element
    #[inline]
    pub const fn neg(&self) -> Fp {
        let mut d = [0u64; LIMBS];
        let mut borrow = 0;
        let mut acc = 0;
        let mut i = 0;
        while i < LIMBS {
            let (s, b) = sbb(MODULUS[i], self.0[i], borrow);
            d[i] = s;
            borrow = b;
            acc |= self.0[i];
            i += 1;
        }

        // Mask if zero
        let mask = ((acc == 0) as u64).wrapping_sub(1);
        let mut i = 0;
        while i < LIMBS {
            d[i] &= mask;
            i += 1;
        }

        Fp(d)
    }

    /// Double a field element
    #[inline]
    pub const fn double(&self) -> Fp {
        self.add(self)
    }

    /// Halve a field element: add p when odd, then shift right by one bit
    #[inline]
    pub const fn div2(&self) -> Fp {
        let mask = 0u64.wrapping_sub(self.0[0] & 1);
        let mut d = [0u64; LIMBS];
        let mut carry = 0;
        let mut i = 0;
        while i < LIMBS {
            let (s, c) = adc(self.0[i], MODULUS[i] & mask, carry);
            d[i] = s;
            carry = c;
            i += 1;
        }

        // p < 2^581, so the sum never carries out of the top limb
        let mut i = 0;
        while i < LIMBS - 1 {
            d[i] = (d[i] >> 1) | (d[i + 1] << 63);
            i += 1;
        }
        d[LIMBS - 1] >>= 1;

        Fp(d)
    }

    /// Multiply two field elements
    #[inline]
    pub const fn mul(&self, rhs: &Fp) -> Fp {
        Self::montgomery_mul(&self.0, &rhs.0)
    }

    /// Square this element
    #[inline]
    pub const fn square(&self) -> Self {
        Self::montgomery_mul(&self.0, &self.0)
    }
}

// ============================================================================
// Advanced Field Operations
// ============================================================================

impl Fp {
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

    /// Compute square root if it exists
    #[inline]
    pub fn sqrt(&self) -> CtOption<Self> {
        // p = 3 (mod 4), compute a^((p+1)/4)
        let sqrt = self.pow_vartime(&P_PLUS_1_DIV_4);

        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    /// Multiplicative inverse
    #[inline]
    pub fn invert(&self) -> CtOption<Self> {
        // Fermat's little theorem: a^(p-2)
        let t = self.pow_vartime(&P_MINUS_2);

        CtOption::new(t, !self.is_zero())
    }

    /// Check if element > (p-1)/2
    pub fn lexicographically_largest(&self) -> Choice {
        Choice::from(self.is_lexicographically_largest() as u8)
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl Fp {
    /// Decode from big-endian bytes, rejecting values >= p
    pub fn from_bytes(bytes: &[u8; FP_SIZE]) -> CtOption<Fp> {
        // Left-pad to the full limb width
        let mut wide = [0u8; 8 * LIMBS];
        wide[8 * LIMBS - FP_SIZE..].copy_from_slice(bytes);

        let mut tmp = [0u64; LIMBS];
        for (i, chunk) in wide.chunks_exact(8).enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            tmp[LIMBS - 1 - i] = u64::from_be_bytes(word);
        }

        // Check if < modulus
        let mut borrow = 0;
        for i in 0..LIMBS {
            let (_, b) = sbb(tmp[i], MODULUS[i], borrow);
            borrow = b;
        }
        let is_some = (borrow as u8) & 1;

        CtOption::new(Fp::from_canonical(&tmp), Choice::from(is_some))
    }

    /// Encode to big-endian bytes
    pub fn to_bytes(self) -> [u8; FP_SIZE] {
        let tmp = self.to_canonical();

        let mut wide = [0u8; 8 * LIMBS];
        for (i, chunk) in wide.chunks_exact_mut(8).enumerate() {
            chunk.copy_from_slice(&tmp[LIMBS - 1 - i].to_be_bytes());
        }

        let mut res = [0u8; FP_SIZE];
        res.copy_from_slice(&wide[8 * LIMBS - FP_SIZE..]);
        res
    }

    /// Create a uniformly random field element
    pub fn random(mut rng: impl RngCore) -> Fp {
        let mut limbs = [0u64; 2 * LIMBS];
        for limb in limbs.iter_mut() {
            *limb = rng.next_u64();
        }

        // d0 + d1 * 2^640 with negligible bias
        let mut d0 = [0u64; LIMBS];
        let mut d1 = [0u64; LIMBS];
        d0.copy_from_slice(&limbs[..LIMBS]);
        d1.copy_from_slice(&limbs[LIMBS..]);
        Self::montgomery_mul(&d0, &R2.0) + Self::montgomery_mul(&d1, &R3.0)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tmp = self.to_bytes();
        write!(f, "0x")?;
        for &b in tmp.iter() {
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
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(Choice::from(1u8), |acc, (a, b)| acc & a.ct_eq(b))
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
        let mut r = [0u64; LIMBS];
        for (i, limb) in r.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Fp(r)
    }
}

impl<'a> Neg for &'a Fp {
    type Output = Fp;
    #[inline]
    fn neg(self) -> Fp {
        self.neg()
    }
}

impl Neg for Fp {
    type Output = Fp;
    #[inline]
    fn neg(self) -> Fp {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn sub(self, rhs: &'b Fp) -> Fp {
        self.sub(rhs)
    }
}

impl<'a, 'b> Add<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn add(self, rhs: &'b Fp) -> Fp {
        self.add(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn mul(self, rhs: &'b Fp) -> Fp {
        self.mul(rhs)
    }
}

impl_binops_additive!(Fp, Fp);
impl_binops_multiplicative!(Fp, Fp);
