//! Pairing primitives over BLS48-581 with constant-time implementation
//!
//! This crate provides the field tower, the three pairing groups, the
//! optimal Ate pairing and endomorphism-accelerated scalar multiplication.
//! The library is designed to be usable in both `std` and `no_std`
//! environments; an allocator is required.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Elliptic curve groups and pairings
pub mod ec;
pub use ec::bls48_581::{
    pairing, pairing2, Bls48Engine, G1Affine, G1Projective, G2Affine, G2Projective, Gt,
    MillerLoopResult, MulConfig, PairingConfig, Scalar,
};
