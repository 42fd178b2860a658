//! Property-based tests for the BLS48-581 pairing and scalar multiplication

use bls48_algorithms::ec::bls48_581::{
    pairing, pairing2, Bls48Engine, G1Affine, G1Projective, G2Affine, G2Projective, Gt,
    MulConfig, Scalar,
};
use bls48_tests::{g1_mul, g2_mul};
use proptest::prelude::*;

/// Arbitrary 640-bit integers, including values far above the group order
fn any_scalar() -> impl Strategy<Value = Scalar> {
    prop::array::uniform10(any::<u64>()).prop_map(Scalar::from_raw)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn pairing_is_bilinear(a in 1u64..1000, b in 1u64..1000) {
        let p = G1Affine::generator();
        let q = G2Affine::generator();

        let left = pairing(&g2_mul(a), &g1_mul(b));
        let right = pairing(&q, &p).pow(&Scalar::from(a).mod_mul(&Scalar::from(b), &Scalar::ORDER));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn pairing2_matches_product(a in 1u64..1000, b in 1u64..1000) {
        let (q1, p1) = (g2_mul(a), G1Affine::generator());
        let (q2, p2) = (G2Affine::generator(), g1_mul(b));

        prop_assert_eq!(pairing2(&q1, &p1, &q2, &p2), pairing(&q1, &p1) * pairing(&q2, &p2));
    }

    #[test]
    fn g2_decomposition_matches_plain(e in any_scalar()) {
        let fast = Bls48Engine::default().with_mul_config(MulConfig::all());
        let plain = Bls48Engine::default().with_mul_config(MulConfig::plain());
        let p = G2Projective::generator();

        prop_assert_eq!(fast.mul_g2(&p, &e), plain.mul_g2(&p, &e));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn g1_decomposition_matches_plain(e in any_scalar(), k in 1u64..u64::MAX) {
        let fast = Bls48Engine::default().with_mul_config(MulConfig::all());
        let plain = Bls48Engine::default().with_mul_config(MulConfig::plain());
        let p = G1Projective::from(g1_mul(k));

        prop_assert_eq!(fast.mul_g1(&p, &e), plain.mul_g1(&p, &e));
    }

    #[test]
    fn g1_compression_round_trips(k in 0u64..u64::MAX) {
        let p = g1_mul(k);
        prop_assert_eq!(G1Affine::from_compressed(&p.to_compressed()).unwrap(), p);
    }

    #[test]
    fn scalar_bytes_round_trip(e in any_scalar()) {
        prop_assert_eq!(Scalar::from_bytes_be(&e.to_bytes_be()), e);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2))]

    #[test]
    fn gt_decomposition_matches_plain(e in any_scalar()) {
        let fast = Bls48Engine::default().with_mul_config(MulConfig::all());
        let plain = Bls48Engine::default().with_mul_config(MulConfig::plain());
        let x = Gt::generator();

        prop_assert_eq!(fast.pow_gt(&x, &e), plain.pow_gt(&x, &e));
    }
}
