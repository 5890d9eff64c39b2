//! Orthonormal associated Legendre functions via three-term recurrence.
//!
//! The sectoral seed `P̄_k^k` is built from `sin θ` directly and the
//! degree is then raised with the standard normalized recurrence, so no
//! factorial ratios are ever formed. Values are carried as `p · 2^exp`
//! while the seed is below `2^-500`, so `sin^k θ` near the poles does not
//! underflow before the recurrence brings it back into range.

use std::f64::consts::PI;

const RESCALE_EXP: i64 = 500;
/// `2^500`
const BIG: f64 = f64::from_bits((1023 + RESCALE_EXP as u64) << 52);
/// `2^-500`
const SMALL: f64 = f64::from_bits((1023 - RESCALE_EXP as u64) << 52);

/// Evaluate the orthonormal associated Legendre function `P̄_l^k(cos θ)`.
///
/// ```text
/// P̄_l^k = sqrt((2l+1)/(4π) · (l-k)!/(l+k)!) · P_l^k(cos θ)
/// ```
///
/// `P_l^k` carries the Condon–Shortley phase `(-1)^k`. The caller must
/// ensure `k <= l`; for `k > l` the function returns `0.0`.
///
/// Seed and recurrence:
/// ```text
/// P̄_0^0     = 1 / sqrt(4π)
/// P̄_i^i     = -sqrt((2i+1)/(2i)) · sin θ · P̄_{i-1}^{i-1}
/// P̄_{k+1}^k = sqrt(2k+3) · cos θ · P̄_k^k
/// P̄_n^k     = a_n (cos θ · P̄_{n-1}^k - b_n P̄_{n-2}^k)
///   a_n = sqrt((4n²-1)/(n²-k²)),  b_n = sqrt(((n-1)²-k²)/(4(n-1)²-1))
/// ```
pub(crate) fn normalized_legendre_unchecked(l: u32, k: u32, theta: f64) -> f64 {
    if k > l {
        return 0.0;
    }

    let (sin_t, cos_t) = theta.sin_cos();
    if k > 0 && sin_t == 0.0 {
        return 0.0;
    }

    // Every value below is p · 2^exp, with exp a non-positive multiple of 500.
    let (sin_scaled, sin_exp) = if sin_t.abs() < SMALL {
        (sin_t * BIG, RESCALE_EXP)
    } else {
        (sin_t, 0)
    };
    let mut exp: i64 = 0;

    let mut p_kk = (0.25 / PI).sqrt();
    for i in 1..=k {
        let i = f64::from(i);
        p_kk *= -((2.0 * i + 1.0) / (2.0 * i)).sqrt() * sin_scaled;
        exp -= sin_exp;
        if p_kk.abs() < SMALL {
            p_kk *= BIG;
            exp -= RESCALE_EXP;
        }
    }
    if l == k {
        return scale_by_pow2(p_kk, exp);
    }

    let kf = f64::from(k);
    let mut p_prev2 = p_kk; // P̄_{n-2}^k
    let mut p_prev1 = (2.0 * kf + 3.0).sqrt() * cos_t * p_kk; // P̄_{n-1}^k

    for n in (u64::from(k) + 2)..=u64::from(l) {
        let n = n as f64;
        let n1 = n - 1.0;
        let a = ((4.0 * n * n - 1.0) / (n * n - kf * kf)).sqrt();
        let b = ((n1 * n1 - kf * kf) / (4.0 * n1 * n1 - 1.0)).sqrt();
        let p_n = a * (cos_t * p_prev1 - b * p_prev2);
        p_prev2 = p_prev1;
        p_prev1 = p_n;
        if exp < 0 && p_prev1.abs() > BIG {
            p_prev1 *= SMALL;
            p_prev2 *= SMALL;
            exp += RESCALE_EXP;
        }
    }

    scale_by_pow2(p_prev1, exp)
}

/// `value · 2^exp` for `exp <= 0`, applied in steps that stay normal.
fn scale_by_pow2(mut value: f64, mut exp: i64) -> f64 {
    while exp < 0 && value != 0.0 && value.is_finite() {
        let step = exp.max(-1000);
        value *= 2f64.powi(step as i32);
        exp -= step;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-14;

    fn check(got: f64, expected: f64) {
        assert!(
            (got - expected).abs() < EPS,
            "got {got:.17e}, expected {expected:.17e}"
        );
    }

    #[test]
    fn degree_zero_is_constant() {
        for &theta in &[0.0, 0.3, 1.2, 2.9] {
            check(normalized_legendre_unchecked(0, 0, theta), 0.5 / PI.sqrt());
        }
    }

    #[test]
    fn degree_one() {
        let theta: f64 = 0.7;
        let c = (0.75 / PI).sqrt();
        check(normalized_legendre_unchecked(1, 0, theta), c * theta.cos());
        // Condon–Shortley phase makes P̄_1^1 negative on (0, π).
        check(
            normalized_legendre_unchecked(1, 1, theta),
            -(3.0 / (8.0 * PI)).sqrt() * theta.sin(),
        );
    }

    #[test]
    fn degree_two() {
        let theta: f64 = 1.1;
        let (s, c) = theta.sin_cos();
        check(
            normalized_legendre_unchecked(2, 0, theta),
            0.25 * (5.0 / PI).sqrt() * (3.0 * c * c - 1.0),
        );
        check(
            normalized_legendre_unchecked(2, 1, theta),
            -(15.0 / (8.0 * PI)).sqrt() * s * c,
        );
        check(
            normalized_legendre_unchecked(2, 2, theta),
            (15.0 / (32.0 * PI)).sqrt() * s * s,
        );
    }

    #[test]
    fn degree_three_zonal() {
        let theta: f64 = 0.45;
        let c = theta.cos();
        check(
            normalized_legendre_unchecked(3, 0, theta),
            0.25 * (7.0 / PI).sqrt() * (5.0 * c * c * c - 3.0 * c),
        );
    }

    #[test]
    fn poles_vanish_for_nonzero_order() {
        for l in 1..8 {
            for k in 1..=l {
                assert_eq!(normalized_legendre_unchecked(l, k, 0.0), 0.0);
            }
        }
    }

    #[test]
    fn zonal_at_north_pole() {
        // P_l(1) = 1, so P̄_l^0(0) = sqrt((2l+1)/(4π)).
        for l in 0..20u32 {
            let expected = ((2.0 * f64::from(l) + 1.0) / (4.0 * PI)).sqrt();
            let got = normalized_legendre_unchecked(l, 0, 0.0);
            assert!((got - expected).abs() < 1e-12, "l={l}: {got} vs {expected}");
        }
    }

    #[test]
    fn order_above_degree_is_zero() {
        assert_eq!(normalized_legendre_unchecked(2, 3, 0.5), 0.0);
    }

    #[test]
    fn high_degree_stays_bounded() {
        // |P̄_l^k| <= sqrt((2l+1)/(4π)) on the whole sphere.
        let l = 500;
        let bound = ((2.0 * f64::from(l) + 1.0) / (4.0 * PI)).sqrt();
        for &k in &[0, 1, 50, 250, 499, 500] {
            for i in 0..16 {
                let theta = PI * f64::from(i) / 16.0;
                let v = normalized_legendre_unchecked(l, k, theta);
                assert!(v.is_finite());
                assert!(v.abs() <= bound * (1.0 + 1e-10), "l={l} k={k} θ={theta}: {v}");
            }
        }
    }

    #[test]
    fn deep_sectoral_seed_does_not_underflow() {
        // sin^200(0.02) is ~1e-340; the result itself is representable.
        // Reference values from an 80-digit evaluation of the same recurrence.
        for &(l, k, expected) in &[
            (2048, 200, 3.981_332_010_822_051e-113),
            (1000, 200, 2.807_719_632_810_116e-175),
            (400, 200, 3.769_245_031_832_449e-258),
        ] {
            let got = normalized_legendre_unchecked(l, k, 0.02);
            assert!(got.is_normal(), "l={l} k={k}: {got:e}");
            let rel = ((got - expected) / expected).abs();
            assert!(rel < 1e-9, "l={l} k={k}: {got:e} vs {expected:e}");
        }
    }

    #[test]
    fn tiny_sine_is_rescaled() {
        let theta = 1e-160;
        let expected = -(3.0 / (8.0 * PI)).sqrt() * theta;
        let got = normalized_legendre_unchecked(1, 1, theta);
        assert!(((got - expected) / expected).abs() < EPS, "{got:e} vs {expected:e}");
    }

    #[test]
    fn nan_angle_propagates() {
        assert!(normalized_legendre_unchecked(5, 2, f64::NAN).is_nan());
    }
}
