//! Endomorphism-accelerated scalar multiplication tests
//!
//! Every fast path is checked against the plain double-and-add path.

use super::super::{
    mul_g1, mul_g2, pairing, pow_gt, Bls48Engine, G1Affine, G1Projective, G2Affine,
    G2Projective, Gt, MulConfig, Scalar,
};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn engines() -> (Bls48Engine, Bls48Engine) {
    let fast = Bls48Engine::default().with_mul_config(MulConfig::all());
    let plain = Bls48Engine::default().with_mul_config(MulConfig::plain());
    (fast, plain)
}

/// Scalars that stress the decompositions: zero, one, `r - 1`, `r`, the
/// seed, a multiple of `r` plus a small offset and values above `r`.
fn edge_scalars() -> [Scalar; 7] {
    let r = Scalar::ORDER;
    [
        Scalar::zero(),
        Scalar::one(),
        Scalar::one().modneg(&r),
        r,
        Scalar::from(0x1_4000_0381u64),
        r.add(&r).add(&Scalar::from(9u64)),
        Scalar::from_raw([u64::MAX; 10]),
    ]
}

// ============================================================================
// G1 Tests
// ============================================================================

#[test]
fn test_g1_glv_matches_plain() {
    let (fast, plain) = engines();
    let mut rng = ChaCha20Rng::seed_from_u64(100);
    let p = G1Projective::random(&mut rng);

    for _ in 0..5 {
        let e = Scalar::random(&mut rng);
        assert_eq!(fast.mul_g1(&p, &e), plain.mul_g1(&p, &e));
    }
    for e in edge_scalars().iter() {
        assert_eq!(fast.mul_g1(&p, e), plain.mul_g1(&p, e));
    }
}

#[test]
fn test_g1_known_multiples() {
    let (fast, _) = engines();
    let g = G1Projective::generator();

    assert_eq!(fast.mul_g1(&g, &Scalar::zero()), G1Projective::identity());
    assert_eq!(fast.mul_g1(&g, &Scalar::one()), g);
    assert_eq!(fast.mul_g1(&g, &Scalar::from(2u64)), g.double());
    assert_eq!(fast.mul_g1(&g, &Scalar::ORDER), G1Projective::identity());
    assert_eq!(fast.mul_g1(&G1Projective::identity(), &Scalar::from(5u64)), G1Projective::identity());
}

#[test]
fn test_g1_default_path() {
    let g = G1Projective::generator();
    let e = Scalar::from(0xdead_beefu64);
    assert_eq!(mul_g1(&g, &e), g * e);
    assert_eq!(Bls48Engine::default().with_glv(true).mul_g1(&g, &e), g * e);
}

#[test]
fn test_g1_additive_in_scalar() {
    let (fast, plain) = engines();
    let mut rng = ChaCha20Rng::seed_from_u64(110);
    let p = G1Projective::random(&mut rng);

    // the unreduced sum of two scalars below r may exceed r
    let pairs = [
        (Scalar::one().modneg(&Scalar::ORDER), Scalar::random(&mut rng)),
        (Scalar::random(&mut rng), Scalar::random(&mut rng)),
        (Scalar::random(&mut rng), Scalar::random(&mut rng)),
    ];

    for engine in [fast, plain].iter() {
        for (e1, e2) in pairs.iter() {
            assert_eq!(
                engine.mul_g1(&p, &e1.add(e2)),
                engine.mul_g1(&p, e1) + engine.mul_g1(&p, e2)
            );
        }
    }
}

// ============================================================================
// G2 Tests
// ============================================================================

#[test]
fn test_g2_gs_matches_plain() {
    let (fast, plain) = engines();
    let mut rng = ChaCha20Rng::seed_from_u64(200);
    let p = G2Projective::random(&mut rng);

    for _ in 0..3 {
        let e = Scalar::random(&mut rng);
        assert_eq!(fast.mul_g2(&p, &e), plain.mul_g2(&p, &e));
    }
    for e in edge_scalars().iter() {
        assert_eq!(fast.mul_g2(&p, e), plain.mul_g2(&p, e));
    }
}

#[test]
fn test_g2_known_multiples() {
    let (fast, _) = engines();
    let g = G2Projective::generator();

    assert_eq!(fast.mul_g2(&g, &Scalar::zero()), G2Projective::identity());
    assert_eq!(fast.mul_g2(&g, &Scalar::one()), g);
    assert_eq!(fast.mul_g2(&g, &Scalar::from(3u64)), g.double() + g);
    assert_eq!(mul_g2(&g, &Scalar::from(3u64)), g * Scalar::from(3u64));
}

#[test]
fn test_g2_additive_in_scalar() {
    let (fast, plain) = engines();
    let mut rng = ChaCha20Rng::seed_from_u64(210);
    let p = G2Projective::random(&mut rng);

    let pairs = [
        (Scalar::one().modneg(&Scalar::ORDER), Scalar::random(&mut rng)),
        (Scalar::random(&mut rng), Scalar::random(&mut rng)),
    ];

    for engine in [fast, plain].iter() {
        for (e1, e2) in pairs.iter() {
            assert_eq!(
                engine.mul_g2(&p, &e1.add(e2)),
                engine.mul_g2(&p, e1) + engine.mul_g2(&p, e2)
            );
        }
    }
}

// ============================================================================
// Gt Tests
// ============================================================================

#[test]
fn test_gt_gs_matches_plain() {
    let (fast, plain) = engines();
    let mut rng = ChaCha20Rng::seed_from_u64(300);
    let x = Gt::generator();

    for _ in 0..2 {
        let e = Scalar::random(&mut rng);
        assert_eq!(fast.pow_gt(&x, &e), plain.pow_gt(&x, &e));
    }
    for e in edge_scalars().iter() {
        assert_eq!(fast.pow_gt(&x, e), plain.pow_gt(&x, e));
    }
    assert_eq!(pow_gt(&x, &Scalar::from(5u64)), plain.pow_gt(&x, &Scalar::from(5u64)));
}

#[test]
fn test_gt_gs_matches_plain_on_random_element() {
    let (fast, plain) = engines();
    let mut rng = ChaCha20Rng::seed_from_u64(310);
    let q = G2Affine::from(G2Projective::random(&mut rng));
    let p = G1Affine::from(G1Projective::random(&mut rng));
    let x = pairing(&q, &p);
    assert_ne!(x, Gt::generator());

    let e1 = Scalar::random(&mut rng);
    let e2 = Scalar::random(&mut rng);
    assert_eq!(fast.pow_gt(&x, &e1), plain.pow_gt(&x, &e1));
    assert_eq!(
        fast.pow_gt(&x, &e1.add(&e2)),
        fast.pow_gt(&x, &e1) * fast.pow_gt(&x, &e2)
    );
}
