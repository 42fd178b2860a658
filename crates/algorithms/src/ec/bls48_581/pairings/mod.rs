//! Optimal Ate pairing on BLS48-581 and the target group Gₜ.

use core::borrow::Borrow;
use core::fmt;
use core::iter::Product;
use core::ops::Mul;

use bls48_api::{Result as ApiResult, Serialize};
use bls48_params::bls48_581::GT_SIZE;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::config::Bls48Engine;
use super::field::fp48::Fp48;
use super::{G1Affine, G2Affine, Scalar};
use crate::error::validate;

use alloc::vec::Vec;

pub(crate) mod final_exp;
pub mod line;
pub(crate) mod miller_loop;

/// Output of a Miller loop, before the final exponentiation.
///
/// Only the final exponentiation maps this into Gₜ, so equality is not
/// offered here.
#[derive(Copy, Clone, Debug)]
pub struct MillerLoopResult(pub(crate) Fp48);

impl Default for MillerLoopResult {
    fn default() -> Self {
        MillerLoopResult(Fp48::one())
    }
}

impl zeroize::DefaultIsZeroes for MillerLoopResult {}

impl ConditionallySelectable for MillerLoopResult {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        MillerLoopResult(Fp48::conditional_select(&a.0, &b.0, choice))
    }
}

impl MillerLoopResult {
    /// Final exponentiation under the default engine configuration.
    pub fn final_exponentiation(&self) -> Gt {
        Bls48Engine::default().final_exp(self)
    }
}

impl<'a, 'b> Mul<&'b MillerLoopResult> for &'a MillerLoopResult {
    type Output = MillerLoopResult;

    #[inline]
    fn mul(self, rhs: &'b MillerLoopResult) -> MillerLoopResult {
        MillerLoopResult(self.0 * rhs.0)
    }
}

impl_binops_multiplicative!(MillerLoopResult, MillerLoopResult);

/// Element of the order-`r` subgroup Gₜ of Fp48*.
#[derive(Copy, Clone, Debug)]
pub struct Gt(pub(crate) Fp48);

impl Default for Gt {
    fn default() -> Self {
        Self::identity()
    }
}

impl zeroize::DefaultIsZeroes for Gt {}

impl fmt::Display for Gt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl ConstantTimeEq for Gt {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Gt {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Gt(Fp48::conditional_select(&a.0, &b.0, choice))
    }
}

impl Eq for Gt {}
impl PartialEq for Gt {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Gt {
    /// Group identity, the element 1 of Fp48
    pub fn identity() -> Gt {
        Gt(Fp48::one())
    }

    /// `e(G1, G2)` for the fixed generators. This runs a full pairing.
    pub fn generator() -> Gt {
        pairing(&G2Affine::generator(), &G1Affine::generator())
    }

    /// Check for the identity
    pub fn is_identity(&self) -> Choice {
        self.0.is_one()
    }

    /// Group inverse; elements of Gₜ are unitary, so this is conjugation
    pub fn conjugate(&self) -> Gt {
        Gt(self.0.conjugate())
    }

    /// `self^2`
    pub fn square(&self) -> Gt {
        Gt(self.0.square())
    }

    /// `self^e` under the default engine configuration.
    ///
    /// The default configuration takes the Galbraith-Scott path, whose scalar
    /// split runs in variable time in `e`. Use an engine built with
    /// [`MulConfig::plain`](super::MulConfig::plain) when `e` is secret.
    pub fn pow(&self, e: &Scalar) -> Gt {
        Bls48Engine::default().pow_gt(self, e)
    }

    /// Underlying Fp48 value
    pub fn as_fp48(&self) -> &Fp48 {
        &self.0
    }

    /// Encode as the 3504-byte Fp48 encoding
    pub fn to_bytes(&self) -> [u8; GT_SIZE] {
        self.0.to_bytes()
    }

    /// Decode and check membership: the value must satisfy `x^r = 1`.
    pub fn from_bytes(bytes: &[u8; GT_SIZE]) -> CtOption<Gt> {
        Fp48::from_bytes(bytes).and_then(|x| {
            let in_group = x.pow_vartime(&Scalar::ORDER.0).is_one();
            CtOption::new(Gt(x), in_group)
        })
    }
}

impl<'a, 'b> Mul<&'b Gt> for &'a Gt {
    type Output = Gt;

    #[inline]
    fn mul(self, rhs: &'b Gt) -> Gt {
        Gt(self.0 * rhs.0)
    }
}

impl<T> Product<T> for Gt
where
    T: Borrow<Gt>,
{
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::identity(), |acc, item| acc * item.borrow())
    }
}

impl_binops_multiplicative!(Gt, Gt);

impl Serialize for Gt {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::length("Gt::from_bytes", bytes.len(), GT_SIZE)?;
        let mut array = [0u8; GT_SIZE];
        array.copy_from_slice(bytes);

        let x = Gt::from_bytes(&array).into_option();
        validate::point(x.is_some(), "Gt", "invalid encoding or not in subgroup")?;
        Ok(x.unwrap_or_default())
    }

    fn to_bytes(&self) -> Vec<u8> {
        Gt::to_bytes(self).to_vec()
    }
}

/// Optimal Ate pairing `e(Q, P)` for `Q` in G₂ and `P` in G₁.
pub fn pairing(q: &G2Affine, p: &G1Affine) -> Gt {
    Bls48Engine::default().pairing(q, p)
}

/// `e(Q1, P1) · e(Q2, P2)` with a single shared Miller loop.
pub fn pairing2(q1: &G2Affine, p1: &G1Affine, q2: &G2Affine, p2: &G1Affine) -> Gt {
    Bls48Engine::default().pairing2(q1, p1, q2, p2)
}

/// Miller loop of `e(Q, P)` without the final exponentiation.
pub fn miller_loop(q: &G2Affine, p: &G1Affine) -> MillerLoopResult {
    Bls48Engine::default().miller_loop(q, p)
}

/// Miller loop of `e(Q1, P1) · e(Q2, P2)` without the final exponentiation.
pub fn double_miller_loop(
    q1: &G2Affine,
    p1: &G1Affine,
    q2: &G2Affine,
    p2: &G1Affine,
) -> MillerLoopResult {
    Bls48Engine::default().double_miller_loop(q1, p1, q2, p2)
}

/// Product of the Miller loops of all `(Q, P)` terms.
pub fn multi_miller_loop(terms: &[(&G2Affine, &G1Affine)]) -> MillerLoopResult {
    Bls48Engine::default().multi_miller_loop(terms)
}
