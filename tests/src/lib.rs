//! Shared helpers for the BLS48 integration and property tests

use bls48_algorithms::ec::bls48_581::{G1Affine, G1Projective, G2Affine, G2Projective, Scalar};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing_subscriber::EnvFilter;

/// Deterministic RNG so failures reproduce
pub fn test_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// `[k]` times the G1 generator
pub fn g1_mul(k: u64) -> G1Affine {
    G1Affine::from(G1Projective::generator() * Scalar::from(k))
}

/// `[k]` times the G2 generator
pub fn g2_mul(k: u64) -> G2Affine {
    G2Affine::from(G2Projective::generator() * Scalar::from(k))
}

/// Install a test-writer subscriber once. Filtering follows `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
