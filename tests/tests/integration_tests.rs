//! Cross-crate integration tests

use bls48_algorithms::ec::bls48_581::{
    multi_miller_loop, pairing, pairing2, Bls48Engine, G1Affine, G1Projective, G2Affine,
    G2Projective, Gt, MulConfig, PairingConfig, Scalar,
};
use bls48_api::{Error as ApiError, Serialize, SerializeSecret};
use bls48_params::{lookup, SeedSign, TwistType, BLS48_581, CURVES};
use bls48_tests::{init_tracing, test_rng};

#[test]
fn test_parameter_table() {
    assert_eq!(CURVES.len(), 1);
    assert_eq!(lookup("bls48-581"), Some(&BLS48_581));
    assert!(lookup("bls12-381").is_none());

    assert_eq!(BLS48_581.order_bits, 518);
    assert_eq!(BLS48_581.twist, TwistType::D);
    assert_eq!(BLS48_581.seed_sign, SeedSign::Negative);
    assert_eq!(PairingConfig::from_params(&BLS48_581), PairingConfig::default());
}

#[test]
fn test_engine_error_converts_to_api_error() {
    let config = PairingConfig {
        twist: TwistType::M,
        ..PairingConfig::default()
    };
    let err: ApiError = Bls48Engine::new(config, MulConfig::default()).unwrap_err().into();
    assert!(matches!(err, ApiError::InvalidParameter { .. }));
}

/// BLS-style check: a signature `σ = [sk]H` verifies as
/// `e(G2, σ) · e(-pk, H) == 1` with `pk = [sk]G2`.
#[test]
fn test_signature_style_verification() {
    init_tracing();
    let mut rng = test_rng(0x5167);

    let sk = Scalar::random(&mut rng);
    let pk = G2Affine::from(G2Projective::generator() * sk);
    let h = G1Affine::from(G1Projective::random(&mut rng));
    let sig = G1Affine::from(h * sk);

    let g2 = G2Affine::generator();
    assert_eq!(pairing2(&g2, &sig, &-pk, &h), Gt::identity());

    // a signature under another key fails
    let forged = G1Affine::from(h * Scalar::random(&mut rng));
    assert_ne!(pairing2(&g2, &forged, &-pk, &h), Gt::identity());
}

#[test]
fn test_aggregate_verification_with_multi_miller_loop() {
    init_tracing();
    let mut rng = test_rng(0xa66);

    let g2 = G2Affine::generator();
    let keys: Vec<Scalar> = (0..3).map(|_| Scalar::random(&mut rng)).collect();
    let pks: Vec<G2Affine> = keys.iter().map(|k| G2Affine::from(g2 * *k)).collect();
    let msgs: Vec<G1Affine> = (0..3)
        .map(|_| G1Affine::from(G1Projective::random(&mut rng)))
        .collect();

    let aggregate: G1Projective = keys.iter().zip(msgs.iter()).map(|(k, m)| m * k).sum();
    let aggregate = G1Affine::from(aggregate);

    let neg_pks: Vec<G2Affine> = pks.iter().map(|pk| -pk).collect();
    let mut terms = vec![(&g2, &aggregate)];
    for (pk, m) in neg_pks.iter().zip(msgs.iter()) {
        terms.push((pk, m));
    }

    assert_eq!(multi_miller_loop(&terms).final_exponentiation(), Gt::identity());
}

#[test]
fn test_encodings_survive_the_api_traits() {
    let e = pairing(&G2Affine::generator(), &G1Affine::generator());
    let bytes = Serialize::to_bytes(&e);
    assert_eq!(<Gt as Serialize>::from_bytes(&bytes).unwrap(), e);

    let q = G2Affine::generator();
    let bytes = Serialize::to_bytes(&q);
    assert_eq!(<G2Affine as Serialize>::from_bytes(&bytes).unwrap(), q);

    let s = Scalar::from(0x1234_5678u64);
    let bytes = s.to_bytes_zeroizing();
    assert_eq!(<Scalar as SerializeSecret>::from_bytes(&bytes).unwrap(), s);
}
