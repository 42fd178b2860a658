//! Field tower used by BLS48-581
//!
//! `Fp -> Fp2 -> Fp4 -> Fp8 -> Fp16 -> Fp48`. G1 lives over `Fp`, G2 over
//! `Fp8`, and the target group inside `Fp48`.

pub mod fp; // Base field
pub mod fp2; // Quadratic extension
pub mod fp4; // Quartic extension
pub mod fp8; // Octic extension (twist field)
pub mod fp16; // Degree-16 extension
pub mod fp48; // Degree-48 extension (target field)
