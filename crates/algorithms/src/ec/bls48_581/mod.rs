//! BLS48-581 pairing-friendly elliptic curve implementation.
//!
//! G₁ lives on `y^2 = x^3 + 1` over Fp, G₂ on the D-type sextic twist over
//! Fp8, and Gₜ is the order-`r` subgroup of Fp48*. The pairing is the
//! optimal Ate pairing with loop parameter `u = -0x140000381`.
//!
//! **Warning:** Unaudited implementation. Use at your own risk.

#[macro_use]
mod macros;

pub mod field;
mod scalar;
mod g1;
mod g2;
mod pairings;
mod mul;
mod config;

#[cfg(test)]
mod tests;

pub use config::{Bls48Engine, MulConfig, PairingConfig};
pub use g1::{G1Affine, G1Projective};
pub use g2::{G2Affine, G2Projective};
pub use mul::{mul_g1, mul_g2, pow_gt};
pub use pairings::line::{add_step, double_step};
pub use pairings::{
    double_miller_loop, miller_loop, multi_miller_loop, pairing, pairing2, Gt,
    MillerLoopResult,
};
pub use scalar::Scalar;
