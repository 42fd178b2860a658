//! Engine configuration.
//!
//! A [`Bls48Engine`] bundles the pairing parameters and the scalar
//! multiplication fast-path switches. It is a small `Copy` value passed
//! explicitly to every operation, so engines with different settings can be
//! used side by side.

use bls48_params::{CurveParams, SeedSign, TwistType, BLS48_581};
use tracing::{debug, trace};

use super::mul;
use super::pairings::{final_exp, miller_loop, Gt, MillerLoopResult};
use super::{G1Affine, G1Projective, G2Affine, G2Projective, Scalar};
use crate::error::{validate, Result};

use alloc::vec::Vec;

/// Parameters threaded through the line evaluator, the Miller loop and the
/// final exponentiation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairingConfig {
    /// How line values are embedded into Fp48
    pub twist: TwistType,
    /// `|u|`
    pub seed: u64,
    /// Sign of `u`
    pub seed_sign: SeedSign,
}

impl PairingConfig {
    /// Read the pairing parameters of a curve table entry
    pub const fn from_params(params: &CurveParams) -> Self {
        PairingConfig {
            twist: params.twist,
            seed: params.seed,
            seed_sign: params.seed_sign,
        }
    }
}

impl Default for PairingConfig {
    fn default() -> Self {
        PairingConfig::from_params(&BLS48_581)
    }
}

/// Which scalar-multiplication fast paths are enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MulConfig {
    /// GLV split for G₁
    pub glv: bool,
    /// Galbraith-Scott split for G₂
    pub gs_g2: bool,
    /// Galbraith-Scott split for Gₜ
    pub gs_gt: bool,
}

impl MulConfig {
    /// Every fast path off
    pub const fn plain() -> Self {
        MulConfig {
            glv: false,
            gs_g2: false,
            gs_gt: false,
        }
    }

    /// Every fast path on
    pub const fn all() -> Self {
        MulConfig {
            glv: true,
            gs_g2: true,
            gs_gt: true,
        }
    }
}

impl Default for MulConfig {
    /// GS on; GLV only with the `glv` feature.
    fn default() -> Self {
        MulConfig {
            glv: cfg!(feature = "glv"),
            gs_g2: true,
            gs_gt: true,
        }
    }
}

/// Pairing and scalar multiplication over BLS48-581.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bls48Engine {
    pairing: PairingConfig,
    mul: MulConfig,
}

impl Bls48Engine {
    /// Build an engine, checking the pairing parameters against the curve
    /// constants compiled into this crate.
    pub fn new(pairing: PairingConfig, mul: MulConfig) -> Result<Self> {
        validate::parameter(
            pairing.twist == BLS48_581.twist,
            "twist",
            "the G2 constants of this curve are for a D-type twist",
        )?;
        validate::parameter(
            pairing.seed == BLS48_581.seed && pairing.seed_sign == BLS48_581.seed_sign,
            "seed",
            "does not match the curve seed",
        )?;
        Ok(Bls48Engine { pairing, mul })
    }

    /// Replace the fast-path switches
    pub const fn with_mul_config(mut self, mul: MulConfig) -> Self {
        self.mul = mul;
        self
    }

    /// Turn the G₁ GLV path on or off
    pub const fn with_glv(mut self, glv: bool) -> Self {
        self.mul.glv = glv;
        self
    }

    /// Pairing parameters in use
    pub fn pairing_config(&self) -> &PairingConfig {
        &self.pairing
    }

    /// Fast-path switches in use
    pub fn mul_config(&self) -> &MulConfig {
        &self.mul
    }

    /// Miller loop of `e(Q, P)`.
    pub fn miller_loop(&self, q: &G2Affine, p: &G1Affine) -> MillerLoopResult {
        MillerLoopResult(miller_loop::miller_loop(&self.pairing, q, p))
    }

    /// Miller loop of `e(Q1, P1) · e(Q2, P2)` with shared squarings.
    pub fn double_miller_loop(
        &self,
        q1: &G2Affine,
        p1: &G1Affine,
        q2: &G2Affine,
        p2: &G1Affine,
    ) -> MillerLoopResult {
        MillerLoopResult(miller_loop::double_miller_loop(&self.pairing, q1, p1, q2, p2))
    }

    /// Miller loop over any number of `(Q, P)` terms with shared squarings.
    pub fn multi_miller_loop(&self, terms: &[(&G2Affine, &G1Affine)]) -> MillerLoopResult {
        debug!(pairs = terms.len(), "multi miller loop");
        let mut acc = Vec::with_capacity(terms.len());
        acc.resize(terms.len(), G2Projective::identity());
        MillerLoopResult(miller_loop::miller_loop_core(&self.pairing, terms, &mut acc))
    }

    /// Map a Miller loop output into Gₜ.
    pub fn final_exp(&self, f: &MillerLoopResult) -> Gt {
        Gt(final_exp::final_exponentiation(&self.pairing, &f.0))
    }

    /// `e(Q, P)`
    pub fn pairing(&self, q: &G2Affine, p: &G1Affine) -> Gt {
        self.final_exp(&self.miller_loop(q, p))
    }

    /// `e(Q1, P1) · e(Q2, P2)` with one final exponentiation
    pub fn pairing2(&self, q1: &G2Affine, p1: &G1Affine, q2: &G2Affine, p2: &G1Affine) -> Gt {
        self.final_exp(&self.double_miller_loop(q1, p1, q2, p2))
    }

    /// `[e]P` in G₁
    pub fn mul_g1(&self, p: &G1Projective, e: &Scalar) -> G1Projective {
        trace!(glv = self.mul.glv, "G1 scalar multiplication");
        mul::g1(&self.pairing, p, e, self.mul.glv)
    }

    /// `[e]P` in G₂
    pub fn mul_g2(&self, p: &G2Projective, e: &Scalar) -> G2Projective {
        trace!(gs = self.mul.gs_g2, "G2 scalar multiplication");
        mul::g2(&self.pairing, p, e, self.mul.gs_g2)
    }

    /// `x^e` in Gₜ
    pub fn pow_gt(&self, x: &Gt, e: &Scalar) -> Gt {
        trace!(gs = self.mul.gs_gt, "GT exponentiation");
        Gt(mul::gt(&self.pairing, &x.0, e, self.mul.gs_gt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_matches_curve_table() {
        let engine = Bls48Engine::default();
        assert_eq!(engine.pairing_config().twist, TwistType::D);
        assert_eq!(engine.pairing_config().seed, 0x1_4000_0381);
        assert!(engine.pairing_config().seed_sign.is_negative());
        assert!(engine.mul_config().gs_g2);
        assert!(engine.mul_config().gs_gt);
        assert_eq!(engine.mul_config().glv, cfg!(feature = "glv"));
    }

    #[test]
    fn test_new_rejects_m_twist() {
        let pairing = PairingConfig {
            twist: TwistType::M,
            ..PairingConfig::default()
        };
        let err = Bls48Engine::new(pairing, MulConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Parameter { .. }));

        let pairing = PairingConfig {
            seed_sign: SeedSign::Positive,
            ..PairingConfig::default()
        };
        assert!(Bls48Engine::new(pairing, MulConfig::default()).is_err());
        assert!(Bls48Engine::new(PairingConfig::default(), MulConfig::plain()).is_ok());
    }

    #[test]
    fn test_builders() {
        let engine = Bls48Engine::default().with_mul_config(MulConfig::plain());
        assert_eq!(*engine.mul_config(), MulConfig::plain());
        let engine = engine.with_glv(true);
        assert!(engine.mul_config().glv);
        assert!(!engine.mul_config().gs_g2);
    }
}
