//! Final exponentiation `f^((p^48 - 1) / r)` for BLS48.
//!
//! The easy part is `(p^24 - 1)(p^8 + 1)`. The hard part `Φ48(p) / r` is
//! written in base `p` with coefficients that are polynomials in the seed,
//! so it costs 17 exponentiations by `|u|` and a handful of Frobenius maps.

use super::super::config::PairingConfig;
use super::super::field::fp48::Fp48;

/// `f^u` for an element of the cyclotomic subgroup, where inversion is
/// conjugation.
fn exp_by_seed(config: &PairingConfig, f: &Fp48) -> Fp48 {
    let t = exp_by_abs_seed(config, f);
    if config.seed_sign.is_negative() {
        t.conjugate()
    } else {
        t
    }
}

/// `f^|u|`. Variable time in the public seed.
fn exp_by_abs_seed(config: &PairingConfig, f: &Fp48) -> Fp48 {
    f.pow_vartime(&[config.seed])
}

pub(crate) fn final_exponentiation(config: &PairingConfig, f: &Fp48) -> Fp48 {
    //////////////////
    // The easy part
    //////////////////

    // f^(p^24 - 1)
    let inv = f.invert().unwrap_or(Fp48::zero());
    let m = f.conjugate() * inv;
    // m^(p^8 + 1)
    let mut r = m.frobenius_map_pow(8) * m;

    //////////////////
    // The hard part
    //////////////////

    let t7 = r.square();
    let (mut t1, mut t2);
    if config.seed & 1 == 1 {
        t2 = exp_by_abs_seed(config, &r);
        t1 = t2.square();
        t2 = exp_by_abs_seed(config, &t2);
    } else {
        t1 = exp_by_abs_seed(config, &t7);
        t2 = t1.pow_vartime(&[config.seed >> 1]);
    }
    if config.seed_sign.is_negative() {
        t1 = t1.conjugate();
    }

    // t2 = r^(u^2 - 2u + 1)
    t2 = t2 * t1.conjugate() * r;
    r *= t7;

    // Coefficients of p^14 down to p^8
    t1 = exp_by_seed(config, &t2);
    r *= t1.frobenius_map_pow(14);
    for k in (8..14).rev() {
        t1 = exp_by_seed(config, &t1);
        r *= t1.frobenius_map_pow(k);
    }

    // p^7 picks up an extra -t2
    t1 = exp_by_seed(config, &t1);
    t1 *= t2.conjugate();
    r *= t1.frobenius_map_pow(7);

    for k in (1..7).rev() {
        t1 = exp_by_seed(config, &t1);
        r *= t1.frobenius_map_pow(k);
    }

    t1 = exp_by_seed(config, &t1);
    r *= t1;
    r * t2.frobenius_map_pow(15)
}
