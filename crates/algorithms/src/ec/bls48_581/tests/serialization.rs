//! Serialization and deserialization tests for BLS48-581

use super::super::field::fp::Fp;
use super::super::field::fp48::Fp48;
use super::super::{G1Affine, G1Projective, G2Affine, G2Projective, Gt, Scalar};

use bls48_api::{Error as ApiError, Serialize, SerializeSecret};
use bls48_params::bls48_581::{
    FP_SIZE, G1_COMPRESSED_SIZE, G1_UNCOMPRESSED_SIZE, G2_UNCOMPRESSED_SIZE, GT_SIZE,
    SCALAR_SIZE,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// A point on `y^2 = x^3 + 1` outside the order-`r` subgroup
fn g1_point_off_subgroup() -> [u8; G1_UNCOMPRESSED_SIZE] {
    let mut x = Fp::from_u64(2);
    loop {
        if let Some(y) = (x.square() * x + Fp::one()).sqrt().into_option() {
            let mut bytes = [0u8; G1_UNCOMPRESSED_SIZE];
            bytes[..FP_SIZE].copy_from_slice(&x.to_bytes());
            bytes[FP_SIZE..].copy_from_slice(&y.to_bytes());
            let p = G1Affine::from_uncompressed_unchecked(&bytes).unwrap();
            if !bool::from(p.is_torsion_free()) {
                return bytes;
            }
        }
        x += Fp::one();
    }
}

// ============================================================================
// G1 Serialization Tests
// ============================================================================

#[test]
fn test_g1_compression_round_trip() {
    let g = G1Projective::generator();
    for i in 1..=5 {
        let original = G1Affine::from(g * Scalar::from(i as u64));
        let compressed = original.to_compressed();
        let decompressed = G1Affine::from_compressed(&compressed).unwrap();
        assert_eq!(original, decompressed);
    }

    let special_points = [G1Affine::identity(), G1Affine::generator(), -G1Affine::generator()];
    for point in special_points.iter() {
        let compressed = point.to_compressed();
        assert_eq!(G1Affine::from_compressed(&compressed).unwrap(), *point);
    }
}

#[test]
fn test_g1_uncompressed_round_trip() {
    let g = G1Projective::generator();
    for i in 1..=5 {
        let original = G1Affine::from(g * Scalar::from(i as u64));
        let bytes = original.to_uncompressed();
        assert_eq!(G1Affine::from_uncompressed(&bytes).unwrap(), original);
    }

    let bytes = G1Affine::identity().to_uncompressed();
    assert_eq!(bytes[0], 0x40);
    assert_eq!(G1Affine::from_uncompressed(&bytes).unwrap(), G1Affine::identity());
}

#[test]
fn test_g1_flags() {
    let compressed = G1Affine::generator().to_compressed();
    assert_eq!(compressed[0] >> 7, 1);

    // the compression flag is not allowed on the uncompressed form
    let mut bytes = G1Affine::generator().to_uncompressed();
    bytes[0] |= 0x80;
    assert!(bool::from(G1Affine::from_uncompressed(&bytes).is_none()));

    // and required on the compressed form
    let mut bytes = compressed;
    bytes[0] &= 0x7f;
    assert!(bool::from(G1Affine::from_compressed(&bytes).is_none()));

    // flipping the sort flag selects the other root
    let mut bytes = compressed;
    bytes[0] ^= 0x20;
    assert_eq!(G1Affine::from_compressed(&bytes).unwrap(), -G1Affine::generator());
}

#[test]
fn test_g1_subgroup_check() {
    let bytes = g1_point_off_subgroup();
    let unchecked = G1Affine::from_uncompressed_unchecked(&bytes).unwrap();
    assert!(bool::from(unchecked.is_on_curve()));
    assert!(bool::from(G1Affine::from_uncompressed(&bytes).is_none()));

    let compressed = unchecked.to_compressed();
    assert!(bool::from(G1Affine::from_compressed_unchecked(&compressed).is_some()));
    assert!(bool::from(G1Affine::from_compressed(&compressed).is_none()));
}

#[test]
fn test_g1_serialize_trait() {
    let p = G1Affine::generator();
    let bytes = Serialize::to_bytes(&p);
    assert_eq!(bytes.len(), G1_COMPRESSED_SIZE);
    assert_eq!(<G1Affine as Serialize>::from_bytes(&bytes).unwrap(), p);

    let bytes = p.to_uncompressed();
    assert_eq!(<G1Affine as Serialize>::from_bytes(&bytes).unwrap(), p);

    let err = <G1Affine as Serialize>::from_bytes(&[0u8; 10]).unwrap_err();
    assert!(matches!(err, ApiError::InvalidLength { .. }));

    let err = <G1Affine as Serialize>::from_bytes(&g1_point_off_subgroup()).unwrap_err();
    assert!(matches!(err, ApiError::InvalidPoint { .. }));
}

// ============================================================================
// G2 Serialization Tests
// ============================================================================

#[test]
fn test_g2_uncompressed_round_trip() {
    let mut rng = ChaCha20Rng::seed_from_u64(77);
    let points = [
        G2Affine::generator(),
        G2Affine::identity(),
        G2Affine::from(G2Projective::random(&mut rng)),
    ];
    for p in points.iter() {
        let bytes = p.to_uncompressed();
        assert_eq!(bytes.len(), G2_UNCOMPRESSED_SIZE);
        assert_eq!(G2Affine::from_uncompressed(&bytes).unwrap(), *p);
        assert_eq!(<G2Affine as Serialize>::from_bytes(&bytes).unwrap(), *p);
    }
}

#[test]
fn test_g2_rejects_invalid() {
    // y tweaked off the curve
    let mut bytes = G2Affine::generator().to_uncompressed();
    bytes[G2_UNCOMPRESSED_SIZE - 1] ^= 1;
    assert!(bool::from(G2Affine::from_uncompressed(&bytes).is_none()));

    // infinity flag with nonzero coordinates
    let mut bytes = G2Affine::generator().to_uncompressed();
    bytes[0] |= 0x40;
    assert!(bool::from(G2Affine::from_uncompressed(&bytes).is_none()));

    let err = <G2Affine as Serialize>::from_bytes(&[0u8; 73]).unwrap_err();
    assert!(matches!(err, ApiError::InvalidLength { .. }));
}

// ============================================================================
// Gt and Scalar Serialization Tests
// ============================================================================

#[test]
fn test_gt_round_trip_and_membership() {
    let g = Gt::generator();
    let bytes = g.to_bytes();
    assert_eq!(bytes.len(), GT_SIZE);
    assert_eq!(Gt::from_bytes(&bytes).unwrap(), g);
    assert_eq!(<Gt as Serialize>::from_bytes(&bytes).unwrap(), g);

    let mut rng = ChaCha20Rng::seed_from_u64(78);
    let outside = Fp48::random(&mut rng).to_bytes();
    assert!(bool::from(Gt::from_bytes(&outside).is_none()));
    let err = <Gt as Serialize>::from_bytes(&outside).unwrap_err();
    assert!(matches!(err, ApiError::InvalidPoint { .. }));
}

#[test]
fn test_scalar_serialize_secret() {
    let mut rng = ChaCha20Rng::seed_from_u64(79);
    let s = Scalar::random(&mut rng);
    let bytes = s.to_bytes_zeroizing();
    assert_eq!(bytes.len(), SCALAR_SIZE);
    assert_eq!(<Scalar as SerializeSecret>::from_bytes(&bytes).unwrap(), s);

    let order = Scalar::ORDER.to_bytes_be();
    assert!(<Scalar as SerializeSecret>::from_bytes(&order).is_err());
    assert!(<Scalar as SerializeSecret>::from_bytes(&order[1..]).is_err());
}
