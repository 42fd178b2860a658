//! Pairing tests for BLS48-581

use super::super::field::fp48::Fp48;
use super::super::pairings::{
    double_miller_loop, miller_loop, multi_miller_loop, pairing, pairing2, Gt, MillerLoopResult,
};
use super::super::{
    Bls48Engine, G1Affine, G1Projective, G2Affine, G2Projective, MulConfig, Scalar,
};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn in_gt(x: &Fp48) -> bool {
    x.pow_vartime(&Scalar::ORDER.0) == Fp48::one()
}

// ============================================================================
// Known Answer
// ============================================================================

#[test]
fn test_pairing_of_generators_known_answer() {
    let e = pairing(&G2Affine::generator(), &G1Affine::generator());

    let c000 = &e.as_fp48().c0.c0.c0.c0;
    assert_eq!(
        hex::encode(c000.c0.to_bytes()),
        "0874e88d39432a8c1a58924e372abb4fb6ef064ea23b13b0de4a7f2d365e8a0d8840a829dc20baf5d78decd4a8e06314b193558c982a4216033f0ba15f18f1f46ac06d2648f011a99b"
    );
    assert_eq!(
        hex::encode(c000.c1.to_bytes()),
        "0dd8ba2c58d1511e11244ddb8f43b7a33063a4334c0a69243314f9d1b8823d03386e9956b618cd5c6c73603315c93eb1809269e8663b430c88a9bd2e658c7bb0967ff4fe6f4bcf3a03"
    );

    let c2111 = &e.as_fp48().c2.c1.c1.c1;
    assert_eq!(
        hex::encode(c2111.c0.to_bytes()),
        "0f8504edf8fa7152b15d48e98438c145cf81252e70aa29a1a1b580227912ac42dc7058b7863db5cc922ec2dc23035e6994666cd26bcf6a8faaa9cd0ee8eecf6f9b6003e30a8b814163"
    );
}

// ============================================================================
// Basic Pairing Tests
// ============================================================================

#[test]
fn test_pairing_non_degeneracy() {
    let e = pairing(&G2Affine::generator(), &G1Affine::generator());
    assert!(!bool::from(e.is_identity()));
    assert!(in_gt(e.as_fp48()));
}

#[test]
fn test_pairing_with_identity() {
    let p = G1Affine::generator();
    let q = G2Affine::generator();

    assert_eq!(pairing(&q, &G1Affine::identity()), Gt::identity());
    assert_eq!(pairing(&G2Affine::identity(), &p), Gt::identity());
    assert_eq!(pairing(&G2Affine::identity(), &G1Affine::identity()), Gt::identity());
}

#[test]
fn test_pairing_bilinearity() {
    let g1 = G1Projective::generator();
    let g2 = G2Projective::generator();

    let p1 = G1Affine::from(g1 * Scalar::from(2u64));
    let p2 = G1Affine::from(g1 * Scalar::from(3u64));
    let q1 = G2Affine::from(g2 * Scalar::from(5u64));
    let q2 = G2Affine::from(g2 * Scalar::from(7u64));

    // e(Q, P1 + P2) == e(Q, P1) * e(Q, P2)
    let left = pairing(&q1, &G1Affine::from(G1Projective::from(p1) + p2));
    let right = pairing(&q1, &p1) * pairing(&q1, &p2);
    assert_eq!(left, right);

    // e(Q1 + Q2, P) == e(Q1, P) * e(Q2, P)
    let left = pairing(&G2Affine::from(G2Projective::from(q1) + q2), &p1);
    let right = pairing(&q1, &p1) * pairing(&q2, &p1);
    assert_eq!(left, right);
}

#[test]
fn test_pairing_scalar_multiplication() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let a = Scalar::random(&mut rng);
    let b = Scalar::random(&mut rng);

    let p = G1Affine::generator();
    let q = G2Affine::generator();

    // e([a]Q, [b]P) == e(Q, P)^(a·b)
    let left = pairing(&G2Affine::from(q * a), &G1Affine::from(p * b));
    let right = pairing(&q, &p).pow(&a.mod_mul(&b, &Scalar::ORDER));
    assert_eq!(left, right);

    // e([a]Q, P) == e(Q, [a]P)
    assert_eq!(pairing(&G2Affine::from(q * a), &p), pairing(&q, &G1Affine::from(p * a)));
}

#[test]
fn test_pairing_negation() {
    let p = G1Affine::generator();
    let q = G2Affine::generator();

    let e = pairing(&q, &p);
    assert_eq!(pairing(&q, &-p), e.conjugate());
    assert_eq!(pairing(&-q, &p), e.conjugate());
    assert_eq!(e * e.conjugate(), Gt::identity());
}

// ============================================================================
// Multi-Pairing Tests
// ============================================================================

#[test]
fn test_pairing2_consistency() {
    let g1 = G1Projective::generator();
    let g2 = G2Projective::generator();

    let p1 = G1Affine::from(g1 * Scalar::from(11u64));
    let p2 = G1Affine::from(g1 * Scalar::from(13u64));
    let q1 = G2Affine::from(g2 * Scalar::from(17u64));
    let q2 = G2Affine::from(g2 * Scalar::from(19u64));

    let joint = pairing2(&q1, &p1, &q2, &p2);
    assert_eq!(joint, pairing(&q1, &p1) * pairing(&q2, &p2));

    let joint = double_miller_loop(&q1, &p1, &q2, &p2).final_exponentiation();
    let separate = (miller_loop(&q1, &p1) * miller_loop(&q2, &p2)).final_exponentiation();
    assert_eq!(joint, separate);
}

#[test]
fn test_pairing2_equality_check() {
    // e(Q, [k]P) · e(-[k]Q, P) == 1
    let k = Scalar::from(1234567u64);
    let p = G1Affine::generator();
    let q = G2Affine::generator();
    let kp = G1Affine::from(p * k);
    let kq = G2Affine::from(-(q * k));

    assert_eq!(pairing2(&q, &kp, &kq, &p), Gt::identity());
}

#[test]
fn test_pairing2_with_identity() {
    let p = G1Affine::generator();
    let q = G2Affine::generator();

    let e = pairing(&q, &p);
    assert_eq!(pairing2(&q, &p, &G2Affine::identity(), &p), e);
    assert_eq!(pairing2(&q, &G1Affine::identity(), &q, &p), e);
}

#[test]
fn test_multi_miller_loop_consistency() {
    let g1 = G1Projective::generator();
    let g2 = G2Projective::generator();

    let p1 = G1Affine::from(g1 * Scalar::from(2u64));
    let p2 = G1Affine::from(g1 * Scalar::from(3u64));
    let p3 = G1Affine::identity();
    let q1 = G2Affine::from(g2 * Scalar::from(5u64));
    let q2 = G2Affine::from(g2 * Scalar::from(7u64));

    let multi =
        multi_miller_loop(&[(&q1, &p1), (&q2, &p2), (&q1, &p3)]).final_exponentiation();
    assert_eq!(multi, pairing2(&q1, &p1, &q2, &p2));

    assert_eq!(multi_miller_loop(&[]).final_exponentiation(), Gt::identity());
}

// ============================================================================
// Final Exponentiation Tests
// ============================================================================

#[test]
fn test_final_exponentiation_lands_in_gt() {
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    let f = MillerLoopResult(Fp48::random(&mut rng));
    let g = f.final_exponentiation();
    assert!(in_gt(g.as_fp48()));

    // a second finalization stays in Gₜ
    let g2 = MillerLoopResult(g.0).final_exponentiation();
    assert!(in_gt(g2.as_fp48()));
}

#[test]
fn test_final_exponentiation_kills_subfield_factors() {
    // elements of Fp16 have order dividing p^16 - 1, which the exponent clears
    let mut rng = ChaCha20Rng::seed_from_u64(10);
    let f = Fp48::from(super::super::field::fp16::Fp16::random(&mut rng));
    assert_eq!(MillerLoopResult(f).final_exponentiation(), Gt::identity());
}

#[test]
fn test_engine_matches_free_functions() {
    let engine = Bls48Engine::default();
    let p = G1Affine::generator();
    let q = G2Affine::generator();

    let f = engine.miller_loop(&q, &p);
    assert_eq!(engine.final_exp(&f), pairing(&q, &p));
    assert_eq!(engine.pairing(&q, &p), pairing(&q, &p));
}

// ============================================================================
// Gt Group Tests
// ============================================================================

#[test]
fn test_gt_identity() {
    let identity = Gt::identity();
    let g = Gt::generator();

    assert_eq!(identity * g, g);
    assert_eq!(g * identity, g);
    assert_eq!(identity.pow(&Scalar::from(42u64)), identity);
    assert!(bool::from(identity.is_identity()));
}

#[test]
fn test_gt_order() {
    let g = Gt::generator();
    // raise to the unreduced r; `pow` would reduce it to zero first
    assert_eq!(g.as_fp48().pow_vartime(&Scalar::ORDER.0), Fp48::one());
    assert!(g.as_fp48().pow_vartime(&Scalar::ORDER.sub(&Scalar::one()).0) != Fp48::one());
    assert_eq!(g.pow(&Scalar::ORDER), Gt::identity());
    assert_eq!(g.pow(&Scalar::one()), g);
    assert_eq!(g.pow(&Scalar::from(2u64)), g.square());
    assert_eq!(g.pow(&Scalar::one().modneg(&Scalar::ORDER)), g.conjugate());
}

#[test]
fn test_gt_pow_matches_plain_engine() {
    let plain = Bls48Engine::default().with_mul_config(MulConfig::plain());
    let g = Gt::generator();
    let e = Scalar::random(&mut ChaCha20Rng::seed_from_u64(12));
    assert_eq!(g.pow(&e), plain.pow_gt(&g, &e));
}

#[test]
fn test_gt_product() {
    let g = Gt::generator();
    let total: Gt = [g, g, g].iter().product();
    assert_eq!(total, g.pow(&Scalar::from(3u64)));
}
