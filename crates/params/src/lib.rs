//! Constant values for the BLS48 pairing library
//!
//! This crate holds the read-only curve parameter table shared by every
//! component of the pairing stack. Everything here is a `const`, so the
//! table needs no initialization and can be read from any thread.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod bls48_581;

pub use bls48_581::BLS48_581;

/// Which of the two sextic twists carries G2.
///
/// The twist decides how a Miller-loop line is embedded into the 48-degree
/// tower and how `3b` is transported onto the twisted curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TwistType {
    /// Divisive twist: `E': y^2 = x^3 + b/s`
    D,
    /// Multiplicative twist: `E': y^2 = x^3 + b·s`
    M,
}

/// Sign of the curve seed `u`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeedSign {
    /// `u > 0`
    Positive,
    /// `u < 0`
    Negative,
}

impl SeedSign {
    /// Whether the seed is negative
    pub const fn is_negative(self) -> bool {
        matches!(self, SeedSign::Negative)
    }
}

/// One row of the curve parameter table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveParams {
    /// Human readable curve name
    pub name: &'static str,
    /// Base field modulus, little-endian limbs
    pub modulus: &'static [u64; 10],
    /// Prime subgroup order, little-endian limbs
    pub order: &'static [u64; 10],
    /// Bit length of `order`
    pub order_bits: usize,
    /// Absolute value of the seed
    pub seed: u64,
    /// Sign of the seed
    pub seed_sign: SeedSign,
    /// Twist type of G2
    pub twist: TwistType,
    /// Curve coefficient `b` in `y^2 = x^3 + b`
    pub b: u64,
}

/// All curves known to this crate
pub const CURVES: &[CurveParams] = &[BLS48_581];

/// Looks up a curve by name, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<&'static CurveParams> {
    CURVES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}
