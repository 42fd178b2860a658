//! Group operation tests for BLS48-581 G1 and G2

use super::super::{G1Affine, G1Projective, G2Affine, G2Projective, Scalar};

use bls48_params::bls48_581::{SEED, SEED_SIGN};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x6121)
}

/// `u mod r`
fn seed_scalar() -> Scalar {
    let n = Scalar::from(SEED);
    if SEED_SIGN.is_negative() {
        n.modneg(&Scalar::ORDER)
    } else {
        n
    }
}

// ============================================================================
// G1 Group Tests
// ============================================================================

#[test]
fn test_g1_generator() {
    let g = G1Affine::generator();
    assert!(bool::from(g.is_on_curve()));
    assert!(bool::from(g.is_torsion_free()));
    assert!(!bool::from(g.is_identity()));
    assert!(!bool::from(G1Projective::from(g).double().is_identity()));
}

#[test]
fn test_g1_identity_operations() {
    let identity = G1Projective::identity();
    let g = G1Projective::generator();
    let point = g * Scalar::from(42u64);

    assert_eq!(identity + point, point);
    assert_eq!(point + identity, point);
    assert_eq!(identity * Scalar::from(42u64), identity);
    assert_eq!(identity.double(), identity);
    assert_eq!(-identity, identity);
    assert_eq!(point - point, identity);
    assert!(bool::from(G1Affine::identity().is_on_curve()));
}

#[test]
fn test_g1_group_laws() {
    let g = G1Projective::generator();
    let p = g * Scalar::from(2u64);
    let q = g * Scalar::from(3u64);
    let r = g * Scalar::from(5u64);

    assert_eq!((p + q) + r, p + (q + r));
    assert_eq!(p + q, q + p);
    assert_eq!(p + q, r);
    assert_eq!(p.double(), p + p);
    assert_eq!(p + G1Affine::from(q), r);
}

#[test]
fn test_g1_order() {
    let g = G1Projective::generator();
    assert!(bool::from(g.multiply(&Scalar::ORDER).is_identity()));

    let minus_one = Scalar::one().modneg(&Scalar::ORDER);
    assert_eq!(g * minus_one, -g);
    assert_eq!(g * Scalar::ORDER.add(&Scalar::one()), g);
}

#[test]
fn test_g1_endomorphism() {
    // φ(P) = -[u^8]P on the prime-order subgroup
    let g = G1Projective::generator();
    let mut expected = g;
    for _ in 0..8 {
        expected = expected.mul_by_seed();
    }
    assert_eq!(g.endomorphism(), -expected);

    let e = g.endomorphism();
    assert_eq!(e.endomorphism().endomorphism(), g);
}

#[test]
fn test_g1_random_is_in_subgroup() {
    let mut rng = rng();
    for _ in 0..3 {
        let p = G1Affine::from(G1Projective::random(&mut rng));
        assert!(bool::from(p.is_on_curve()));
        assert!(bool::from(p.is_torsion_free()));
    }
}

#[test]
fn test_g1_batch_normalize() {
    let g = G1Projective::generator();
    let points = [g, g.double(), G1Projective::identity(), g * Scalar::from(7u64)];
    let mut affine = [G1Affine::identity(); 4];
    G1Projective::batch_normalize(&points, &mut affine);

    for (p, a) in points.iter().zip(affine.iter()) {
        assert_eq!(G1Affine::from(p), *a);
    }
    assert!(bool::from(affine[2].is_identity()));
}

#[test]
fn test_g1_sum() {
    let g = G1Projective::generator();
    let total: G1Projective = [g, g, g].iter().sum();
    assert_eq!(total, g * Scalar::from(3u64));
}

// ============================================================================
// G2 Group Tests
// ============================================================================

#[test]
fn test_g2_generator() {
    let g = G2Affine::generator();
    assert!(bool::from(g.is_on_curve()));
    assert!(bool::from(g.is_torsion_free()));
    assert!(!bool::from(g.is_identity()));
}

#[test]
fn test_g2_identity_operations() {
    let identity = G2Projective::identity();
    let g = G2Projective::generator();
    let point = g * Scalar::from(42u64);

    assert_eq!(identity + point, point);
    assert_eq!(point + identity, point);
    assert_eq!(identity.double(), identity);
    assert_eq!(-identity, identity);
    assert_eq!(point - point, identity);
}

#[test]
fn test_g2_group_laws() {
    let g = G2Projective::generator();
    let p = g * Scalar::from(2u64);
    let q = g * Scalar::from(3u64);
    let r = g * Scalar::from(5u64);

    assert_eq!((p + q) + r, p + (q + r));
    assert_eq!(p + q, q + p);
    assert_eq!(p + q, r);
    assert_eq!(p.double(), p + p);
    assert_eq!(p + G2Affine::from(q), r);
}

#[test]
fn test_g2_order() {
    let g = G2Projective::generator();
    assert!(bool::from(g.multiply(&Scalar::ORDER).is_identity()));

    let minus_one = Scalar::one().modneg(&Scalar::ORDER);
    assert_eq!(g * minus_one, -g);
}

#[test]
fn test_g2_psi_acts_as_seed() {
    let g = G2Projective::generator();
    assert_eq!(g.psi(), g * seed_scalar());

    // ψ^16 = [u^16] = [u^8 - 1]
    let mut p16 = g;
    for _ in 0..16 {
        p16 = p16.psi();
    }
    let mut p8 = g;
    for _ in 0..8 {
        p8 = p8.psi();
    }
    assert_eq!(p16, p8 - g);
}

#[test]
fn test_g2_random_is_in_subgroup() {
    let mut rng = rng();
    for _ in 0..3 {
        let p = G2Affine::from(G2Projective::random(&mut rng));
        assert!(bool::from(p.is_on_curve()));
        assert!(bool::from(p.is_torsion_free()));
    }
}

#[test]
fn test_g2_batch_normalize() {
    let g = G2Projective::generator();
    let points = [g.double(), G2Projective::identity(), g];
    let mut affine = [G2Affine::identity(); 3];
    G2Projective::batch_normalize(&points, &mut affine);

    for (p, a) in points.iter().zip(affine.iter()) {
        assert_eq!(G2Affine::from(p), *a);
    }
}

#[test]
fn test_conditional_selection() {
    use subtle::{Choice, ConditionallySelectable};

    let a = G1Projective::generator();
    let b = G1Projective::identity();
    assert_eq!(G1Projective::conditional_select(&a, &b, Choice::from(0u8)), a);
    assert_eq!(G1Projective::conditional_select(&a, &b, Choice::from(1u8)), b);

    let a = G2Affine::generator();
    let b = G2Affine::identity();
    assert_eq!(G2Affine::conditional_select(&a, &b, Choice::from(1u8)), b);
}
