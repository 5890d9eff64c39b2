//! Structural properties of the real harmonic basis.
//!
//! No closed forms needed: these hold for every degree.

use std::f64::consts::PI;

use sph_core::{HarmonicError, LegendreBackend, LegendreConfig, real_spherical_harmonic, sph_harm};

fn four_pi_inv(l: u32) -> f64 {
    (2.0 * f64::from(l) + 1.0) / (4.0 * PI)
}

#[test]
fn zonal_harmonics_ignore_azimuth() {
    for l in 0..12 {
        for i in 0..25 {
            let theta = PI * f64::from(i) / 25.0;
            let reference = sph_harm(l, 0, theta, 0.0).unwrap();
            for j in 1..40 {
                let phi = 2.0 * PI * f64::from(j) / 40.0;
                let v = sph_harm(l, 0, theta, phi).unwrap();
                assert!(
                    (v - reference).abs() <= 1e-12 * reference.abs().max(1.0),
                    "l={l} θ={theta} φ={phi}: {v} != {reference}"
                );
            }
        }
    }
}

#[test]
fn opposite_orders_are_distinct_functions() {
    let (theta, phi) = (0.9, 0.4);
    for l in 1..8i32 {
        for m in 1..=l {
            let pos = sph_harm(l as u32, m, theta, phi).unwrap();
            let neg = sph_harm(l as u32, -m, theta, phi).unwrap();
            assert!((pos - neg).abs() > 1e-6, "l={l} m={m}: {pos} vs {neg}");
        }
    }
}

#[test]
fn addition_theorem() {
    for l in 0..16u32 {
        let li = l as i32;
        for &(theta, phi) in &[(0.0, 0.0), (0.3, 1.1), (1.5707963, 3.0), (2.8, 5.9)] {
            let sum: f64 = (-li..=li)
                .map(|m| sph_harm(l, m, theta, phi).unwrap().powi(2))
                .sum();
            let expected = four_pi_inv(l);
            assert!(
                (sum - expected).abs() < 1e-11 * expected,
                "l={l} θ={theta} φ={phi}: {sum} != {expected}"
            );
        }
    }
}

#[test]
fn orthonormal_under_quadrature() {
    // Midpoint rule in θ, uniform in φ (exact for the trigonometric
    // polynomials in φ that appear up to l = 3).
    const N_THETA: usize = 2000;
    const N_PHI: usize = 16;
    let basis: Vec<(u32, i32)> = (0..=3u32)
        .flat_map(|l| (-(l as i32)..=l as i32).map(move |m| (l, m)))
        .collect();

    let mut gram = vec![vec![0.0_f64; basis.len()]; basis.len()];
    let d_theta = PI / N_THETA as f64;
    let d_phi = 2.0 * PI / N_PHI as f64;
    for i in 0..N_THETA {
        let theta = (i as f64 + 0.5) * d_theta;
        let weight = theta.sin() * d_theta * d_phi;
        for j in 0..N_PHI {
            let phi = j as f64 * d_phi;
            let values: Vec<f64> = basis
                .iter()
                .map(|&(l, m)| sph_harm(l, m, theta, phi).unwrap())
                .collect();
            for a in 0..basis.len() {
                for b in 0..basis.len() {
                    gram[a][b] += weight * values[a] * values[b];
                }
            }
        }
    }

    for a in 0..basis.len() {
        for b in 0..basis.len() {
            let expected = if a == b { 1.0 } else { 0.0 };
            assert!(
                (gram[a][b] - expected).abs() < 1e-4,
                "<{:?}, {:?}> = {}",
                basis[a],
                basis[b],
                gram[a][b]
            );
        }
    }
}

#[test]
fn negative_polar_angle_is_antipodal_rotation() {
    // (−θ, φ) and (θ, φ + π) name the same point on the sphere.
    for l in 0..6i32 {
        for m in -l..=l {
            let a = sph_harm(l as u32, m, -0.7, 0.3).unwrap();
            let b = sph_harm(l as u32, m, 0.7, 0.3 + PI).unwrap();
            assert!((a - b).abs() < 1e-12, "l={l} m={m}: {a} vs {b}");
        }
    }
}

#[test]
fn invalid_order_rejected() {
    assert_eq!(
        sph_harm(1, 2, 0.5, 0.5),
        Err(HarmonicError::InvalidOrder { l: 1, m: 2 })
    );
    assert_eq!(
        sph_harm(3, -4, 0.5, 0.5),
        Err(HarmonicError::InvalidOrder { l: 3, m: -4 })
    );
}

#[test]
fn configured_backend_matches_default_within_limit() {
    let backend = LegendreBackend::new(LegendreConfig::with_max_degree(10)).unwrap();
    for m in -10..=10 {
        let a = real_spherical_harmonic(&backend, 10, m, 1.0, 2.0).unwrap();
        let b = sph_harm(10, m, 1.0, 2.0).unwrap();
        assert_eq!(a, b);
    }
    assert!(real_spherical_harmonic(&backend, 11, 0, 1.0, 2.0).is_err());
}

#[test]
fn concurrent_evaluation_is_deterministic() {
    let expected: Vec<f64> = (-4..=4).map(|m| sph_harm(4, m, 1.2, 0.8).unwrap()).collect();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    (-4..=4)
                        .map(|m| sph_harm(4, m, 1.2, 0.8).unwrap())
                        .collect::<Vec<f64>>()
                })
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
