//! Scalar multiplication in G₁ and G₂ and exponentiation in Gₜ.
//!
//! Every group has a plain constant-time double-and-add path. The fast
//! paths split the scalar along an efficient endomorphism:
//!
//! * G₁ uses GLV with `φ(x, y) = (βx, y)`, which acts as `-[n^8]` for
//!   `n = |u|`, giving two halves of about 260 bits.
//! * G₂ uses ψ and Gₜ uses the p-power Frobenius, both acting as `[u]`, so
//!   the scalar is written in base `n` with sixteen 33-bit digits
//!   (Galbraith-Scott).
//!
//! The fast paths combine the pieces with a joint double-and-add that reads
//! one entry from a 16-entry subset-sum table per group of four bases.
//! Table reads scan every entry, but the split itself divides by `n` and
//! compares bit lengths in variable time, so only the plain paths are
//! constant time in the scalar.

use bls48_params::bls48_581::ORDER_BITS;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::config::{Bls48Engine, PairingConfig};
use super::field::fp48::Fp48;
use super::{G1Projective, G2Projective, Gt, Scalar};

/// Bound on the bit length of every GS digit: the bit length of `|u|`
fn gs_bits(config: &PairingConfig) -> usize {
    (64 - config.seed.leading_zeros()) as usize
}

/// Bound on the bit length of both GLV halves
fn glv_bits(config: &PairingConfig) -> usize {
    8 * gs_bits(config)
}

/// Group operations the joint double-and-add needs
trait Group: Copy + ConditionallySelectable {
    fn identity() -> Self;
    fn double(&self) -> Self;
    fn add(&self, rhs: &Self) -> Self;
    fn negate(&self) -> Self;
}

impl Group for G1Projective {
    fn identity() -> Self {
        G1Projective::identity()
    }
    fn double(&self) -> Self {
        G1Projective::double(self)
    }
    fn add(&self, rhs: &Self) -> Self {
        G1Projective::add(self, rhs)
    }
    fn negate(&self) -> Self {
        -self
    }
}

impl Group for G2Projective {
    fn identity() -> Self {
        G2Projective::identity()
    }
    fn double(&self) -> Self {
        G2Projective::double(self)
    }
    fn add(&self, rhs: &Self) -> Self {
        G2Projective::add(self, rhs)
    }
    fn negate(&self) -> Self {
        -self
    }
}

// Gₜ written multiplicatively; inversion of a unitary element is conjugation
impl Group for Fp48 {
    fn identity() -> Self {
        Fp48::one()
    }
    fn double(&self) -> Self {
        self.square()
    }
    fn add(&self, rhs: &Self) -> Self {
        Fp48::mul(self, rhs)
    }
    fn negate(&self) -> Self {
        self.conjugate()
    }
}

/// Entry `k` is the sum of the bases whose bit is set in `k`.
fn subset_table<T: Group>(bases: &[T]) -> [T; 16] {
    debug_assert!(bases.len() <= 4);
    let mut table = [T::identity(); 16];
    for k in 1..(1usize << bases.len()) {
        let low = k.trailing_zeros() as usize;
        table[k] = table[k & (k - 1)].add(&bases[low]);
    }
    table
}

fn lookup<T: Group>(table: &[T; 16], idx: u8) -> T {
    let mut res = T::identity();
    for (k, entry) in table.iter().enumerate() {
        res.conditional_assign(entry, (k as u8).ct_eq(&idx));
    }
    res
}

/// `Σ k_i·B_i` for up to sixteen bases whose scalars fit in `bits` bits.
fn multi_mul<T: Group>(bases: &[T], scalars: &[Scalar], bits: usize) -> T {
    debug_assert_eq!(bases.len(), scalars.len());
    debug_assert!(bases.len() <= 16);

    let mut tables = [[T::identity(); 16]; 4];
    for (table, chunk) in tables.iter_mut().zip(bases.chunks(4)) {
        *table = subset_table(chunk);
    }

    let mut acc = T::identity();
    for i in (0..bits).rev() {
        acc = acc.double();
        for (table, chunk) in tables.iter().zip(scalars.chunks(4)) {
            let mut idx = 0u8;
            for (j, k) in chunk.iter().enumerate() {
                idx |= k.bit(i) << j;
            }
            acc = acc.add(&lookup(table, idx));
        }
    }
    acc
}

/// Picks the shorter of `k` and `r - k`; the choice is set when the
/// matching base must be negated.
fn shorten(k: &Scalar) -> (Scalar, Choice) {
    let alt = Scalar::ORDER.sub(k);
    let flip = Choice::from((alt.nbits() < k.nbits()) as u8);
    (Scalar::conditional_select(k, &alt, flip), flip)
}

/// Splits a reduced scalar as `e = k0 + k1·λ (mod r)` where φ acts as `[λ]`
/// on G₁. Both halves are below `n^8`.
pub(crate) fn glv_split(config: &PairingConfig, e: &Scalar) -> [Scalar; 2] {
    let mut q = *e;
    for _ in 0..8 {
        q = q.div_rem_u64(config.seed).0;
    }
    let mut qn8 = q;
    for _ in 0..8 {
        qn8 = qn8.mul_u64(config.seed);
    }

    // e = k0 + q·n^8 and n^8 acts as -φ, so k1 = -q
    [e.sub(&qn8), q.modneg(&Scalar::ORDER)]
}

/// Writes a reduced scalar as `Σ k_i·u^i (mod r)` for `i < 16`, each `k_i`
/// below `n` before the sign fix-up of odd positions.
pub(crate) fn gs_split(config: &PairingConfig, e: &Scalar) -> [Scalar; 16] {
    let mut digits = [Scalar::zero(); 16];
    let mut w = *e;
    for digit in digits.iter_mut().take(15) {
        let (q, rem) = w.div_rem_u64(config.seed);
        *digit = Scalar::from_u64(rem);
        w = q;
    }
    digits[15] = w;

    // n^i = (-u)^i
    if config.seed_sign.is_negative() {
        for digit in digits.iter_mut().skip(1).step_by(2) {
            *digit = digit.modneg(&Scalar::ORDER);
        }
    }
    digits
}

/// GS over sixteen endomorphism images produced by `next` from `base`.
fn gs_mul<T: Group>(
    config: &PairingConfig,
    base: &T,
    e: &Scalar,
    next: impl Fn(&T) -> T,
) -> T {
    let mut digits = gs_split(config, e);
    let mut bases = [T::identity(); 16];

    let mut q = *base;
    for (b, digit) in bases.iter_mut().zip(digits.iter_mut()) {
        let (k, flip) = shorten(digit);
        *digit = k;
        *b = T::conditional_select(&q, &q.negate(), flip);
        q = next(&q);
    }
    multi_mul(&bases, &digits, gs_bits(config))
}

/// `[e]P` in G₁, through GLV when `glv` is set.
pub(crate) fn g1(
    config: &PairingConfig,
    p: &G1Projective,
    e: &Scalar,
    glv: bool,
) -> G1Projective {
    let e = e.reduce(&Scalar::ORDER);
    if !glv {
        return p.multiply(&e);
    }

    let [k0, k1] = glv_split(config, &e);
    let (k1, flip) = shorten(&k1);
    let phi = p.endomorphism();
    let phi = G1Projective::conditional_select(&phi, &-phi, flip);

    multi_mul(&[*p, phi], &[k0, k1], glv_bits(config))
}

/// `[e]P` in G₂, through the 16-way ψ decomposition when `gs` is set.
pub(crate) fn g2(
    config: &PairingConfig,
    p: &G2Projective,
    e: &Scalar,
    gs: bool,
) -> G2Projective {
    let e = e.reduce(&Scalar::ORDER);
    if !gs {
        return p.multiply(&e);
    }
    gs_mul(config, p, &e, G2Projective::psi)
}

/// `x^e` for `x` in Gₜ, through the 16-way Frobenius decomposition when
/// `gs` is set.
pub(crate) fn gt(config: &PairingConfig, x: &Fp48, e: &Scalar, gs: bool) -> Fp48 {
    let e = e.reduce(&Scalar::ORDER);
    if !gs {
        return pow_plain(x, &e);
    }
    gs_mul(config, x, &e, Fp48::frobenius_map)
}

/// `[e]P` in G₁ under the default engine configuration.
pub fn mul_g1(p: &G1Projective, e: &Scalar) -> G1Projective {
    Bls48Engine::default().mul_g1(p, e)
}

/// `[e]P` in G₂ under the default engine configuration.
pub fn mul_g2(p: &G2Projective, e: &Scalar) -> G2Projective {
    Bls48Engine::default().mul_g2(p, e)
}

/// `x^e` in Gₜ under the default engine configuration.
pub fn pow_gt(x: &Gt, e: &Scalar) -> Gt {
    Bls48Engine::default().pow_gt(x, e)
}

/// Constant-time square-and-multiply over `ORDER_BITS` bits
fn pow_plain(x: &Fp48, e: &Scalar) -> Fp48 {
    let mut acc = Fp48::one();
    for i in (0..ORDER_BITS).rev() {
        acc = acc.square();
        let prod = acc * x;
        acc = Fp48::conditional_select(&acc, &prod, Choice::from(e.bit(i)));
    }
    acc
}
