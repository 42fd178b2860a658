//! Public API traits and types for the BLS48 pairing library
//!
//! This crate provides the error type shared by every crate in the workspace
//! and the byte-serialization traits implemented by the group types.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;

pub use error::{Error, Result, ResultExt};
pub use traits::{Serialize, SerializeSecret};
