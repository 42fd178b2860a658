//! Miller-loop line functions fused with the matching G₂ group operation.
//!
//! Each step evaluates the tangent (doubling) or chord (addition) through
//! the running G₂ point at a G₁ point `(xp, yp)` and returns the sparse
//! Fp48 line value together with the updated point. A D-type line fills the
//! `w^0` and `w^1` slots, an M-type line fills `w^0` and `w^2`.

use bls48_params::bls48_581::CURVE_B;
use bls48_params::TwistType;

use super::super::field::fp::Fp;
use super::super::field::fp16::Fp16;
use super::super::field::fp48::Fp48;
use super::super::field::fp8::Fp8;
use super::super::{G2Affine, G2Projective};

const FOUR: Fp = Fp::from_u64(4);
const SIX: Fp = Fp::from_u64(6);
const SIX_B: Fp = Fp::from_u64(6 * CURVE_B);

/// Place the `(a, b)` pair of a line into the slots selected by the twist.
#[inline]
fn embed(a: Fp16, b: Fp8, twist: TwistType) -> Fp48 {
    match twist {
        TwistType::D => Fp48 {
            c0: a,
            c1: Fp16::from(b),
            c2: Fp16::zero(),
        },
        TwistType::M => Fp48 {
            c0: a,
            c1: Fp16::zero(),
            c2: Fp16 {
                c0: Fp8::zero(),
                c1: b,
            },
        },
    }
}

/// Tangent line at `a` evaluated at `(xp, yp)`, and `2a`.
pub fn double_step(a: &G2Projective, xp: &Fp, yp: &Fp, twist: TwistType) -> (Fp48, G2Projective) {
    let mut yz = a.y * a.z;
    let xx = a.x.square().mul_by_fp(&SIX).mul_by_fp(xp);
    let yy = a.y.square();
    let mut zz = a.z.square().mul_by_fp(&SIX_B);

    yz = -(yz.mul_by_fp(&FOUR).mul_by_fp(yp));

    match twist {
        TwistType::D => zz = zz.div_by_nonresidue(),
        TwistType::M => {
            zz = zz.mul_by_nonresidue();
            yz = yz.mul_by_nonresidue();
        }
    }
    zz -= yy.double();

    let line = embed(Fp16 { c0: yz, c1: zz }, xx, twist);
    (line, a.double())
}

/// Chord through `a` and the affine point `b` evaluated at `(xp, yp)`, and `a + b`.
pub fn add_step(
    a: &G2Projective,
    b: &G2Affine,
    xp: &Fp,
    yp: &Fp,
    twist: TwistType,
) -> (Fp48, G2Projective) {
    let dx = a.x - a.z * b.x;
    let dy = a.y - a.z * b.y;

    let mut x1 = dx.mul_by_fp(yp);
    if twist == TwistType::M {
        x1 = x1.mul_by_nonresidue();
    }
    let t2 = dy * b.x - dx * b.y;
    let y1 = -(dy.mul_by_fp(xp));

    let line = embed(Fp16 { c0: x1, c1: t2 }, y1, twist);
    (line, a.add_mixed(b))
}
