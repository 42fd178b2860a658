//! Elliptic curve groups and pairings

pub mod bls48_581;

pub use bls48_581::{
    pairing as bls48_581_pairing, G1Projective as Bls48_581G1, G2Projective as Bls48_581G2,
    Gt as Bls48_581Gt, Scalar as Bls48_581Scalar,
};
