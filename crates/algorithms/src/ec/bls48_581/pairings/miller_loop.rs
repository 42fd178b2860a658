//! Optimal Ate Miller loop over the ternary expansion of `3|u|`.

use alloc::vec::Vec;

use subtle::{Choice, ConditionallySelectable};

use super::super::config::PairingConfig;
use super::super::field::fp48::Fp48;
use super::super::{G1Affine, G2Affine, G2Projective};
use super::line::{add_step, double_step};

/// Signed digit of `3|u|` at position `i`, read as `bit(3n, i) - bit(n, i)`.
#[inline]
fn naf_digit(n: u64, i: u32) -> i8 {
    let n3 = 3 * n;
    ((n3 >> i) & 1) as i8 - ((n >> i) & 1) as i8
}

/// Runs the Miller loop for every `(Q, P)` pair in lockstep, squaring the
/// shared accumulator once per iteration.
///
/// `acc` holds the running G₂ point of each pair and must have the same
/// length as `pairs`. A pair with an identity on either side contributes 1.
pub(crate) fn miller_loop_core(
    config: &PairingConfig,
    pairs: &[(&G2Affine, &G1Affine)],
    acc: &mut [G2Projective],
) -> Fp48 {
    debug_assert_eq!(pairs.len(), acc.len());

    let n = config.seed;
    let top = 64 - (3 * n).leading_zeros();
    let twist = config.twist;

    let mut skip: Vec<Choice> = Vec::with_capacity(pairs.len());
    for ((q, p), a) in pairs.iter().zip(acc.iter_mut()) {
        *a = G2Projective::from(*q);
        skip.push(q.is_identity() | p.is_identity());
    }

    let mut f = Fp48::one();
    for i in (1..top - 1).rev() {
        f = f.square();

        for (j, (q, p)) in pairs.iter().enumerate() {
            let (line, next) = double_step(&acc[j], &p.x, &p.y, twist);
            acc[j] = next;
            let g = f.mul_by_line(&line, twist);
            f = Fp48::conditional_select(&g, &f, skip[j]);

            let digit = naf_digit(n, i);
            if digit != 0 {
                let b = if digit > 0 { **q } else { -*q };
                let (line, next) = add_step(&acc[j], &b, &p.x, &p.y, twist);
                acc[j] = next;
                let g = f.mul_by_line(&line, twist);
                f = Fp48::conditional_select(&g, &f, skip[j]);
            }
        }
    }

    if config.seed_sign.is_negative() {
        f = f.conjugate();
    }
    f
}

/// Miller loop of a single pair.
pub(crate) fn miller_loop(config: &PairingConfig, q: &G2Affine, p: &G1Affine) -> Fp48 {
    let mut acc = [G2Projective::identity()];
    miller_loop_core(config, &[(q, p)], &mut acc)
}

/// Product of two Miller loops sharing the squarings.
pub(crate) fn double_miller_loop(
    config: &PairingConfig,
    q1: &G2Affine,
    p1: &G1Affine,
    q2: &G2Affine,
    p2: &G1Affine,
) -> Fp48 {
    let mut acc = [G2Projective::identity(); 2];
    miller_loop_core(config, &[(q1, p1), (q2, p2)], &mut acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naf_digits_reconstruct_seed() {
        let n = PairingConfig::default().seed;
        let top = 64 - (3 * n).leading_zeros();

        // the leading digit of 3n is implicit in the starting point
        let mut acc: i128 = 1;
        for i in (1..top - 1).rev() {
            acc = 2 * acc + naf_digit(n, i) as i128;
        }
        acc = 2 * acc + naf_digit(n, 0) as i128;
        assert_eq!(acc, 2 * n as i128);
    }

    #[test]
    fn test_identity_pairs_contribute_one() {
        let config = PairingConfig::default();
        let p = G1Affine::generator();
        let q = G2Affine::generator();

        let f = miller_loop(&config, &q, &G1Affine::identity());
        assert_eq!(f, Fp48::one());
        let f = miller_loop(&config, &G2Affine::identity(), &p);
        assert_eq!(f, Fp48::one());

        let single = miller_loop(&config, &q, &p);
        let double = double_miller_loop(&config, &q, &p, &q, &G1Affine::identity());
        assert_eq!(single, double);
    }
}
