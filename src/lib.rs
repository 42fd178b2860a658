//! # bls48
//!
//! Optimal Ate pairing on the BLS48-581 curve.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bls48 = "0.3"
//! ```
//!
//! ```no_run
//! use bls48::prelude::*;
//!
//! let p = G1Affine::generator();
//! let q = G2Affine::generator();
//! let e = pairing(&q, &p);
//! assert!(!bool::from(e.is_identity()));
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `glv`: Enable the G1 GLV fast path in the default engine
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`bls48-api`]: Error type and serialization traits
//! - [`bls48-params`]: Curve constants
//! - [`bls48-algorithms`]: Field tower, groups, pairing and scalar multiplication

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use bls48_algorithms as algorithms;
pub use bls48_api as api;
pub use bls48_params as params;

// Types returned by the group and field APIs
pub use subtle;
pub use zeroize;

/// Common imports for bls48 users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Serialize, SerializeSecret};

    // Groups, pairing and configuration
    pub use crate::algorithms::ec::bls48_581::{
        mul_g1, mul_g2, pairing, pairing2, pow_gt, Bls48Engine, G1Affine, G1Projective,
        G2Affine, G2Projective, Gt, MillerLoopResult, MulConfig, PairingConfig, Scalar,
    };

    // Curve parameters
    pub use crate::params::{CurveParams, SeedSign, TwistType, BLS48_581};

    // Constant-time results
    pub use crate::subtle::{Choice, ConstantTimeEq, CtOption};
}
