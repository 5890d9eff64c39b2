//! Complex spherical harmonic backend.
//!
//! Evaluates the orthonormal complex spherical harmonic
//! `Y_l^k(θ, φ) = P̄_l^k(cos θ) · e^{ikφ}` for non-negative order `k`,
//! using the Condon–Shortley phase convention. `P̄` is the associated
//! Legendre function scaled so that `Y_l^k` is orthonormal on the unit
//! sphere.
//!
//! θ is the polar angle measured from +z, φ the azimuth measured from +x
//! toward +y. Angles are taken as given; no range reduction is applied.
//!
//! The public surface is the provider pair `real_part` / `imag_part`. The
//! complex value and the Legendre factor stay inside the crate:
//!
//! ```compile_fail
//! let y = sph_legendre::LegendreBackend::DEFAULT.spherical_harmonic(1, 1, 0.5, 0.2);
//! ```
//!
//! ```compile_fail
//! let p = sph_legendre::LegendreBackend::DEFAULT.normalized_legendre(1, 1, 0.5);
//! ```
//!
//! ```
//! let backend = sph_legendre::LegendreBackend::DEFAULT;
//! let re = backend.real_part(1, 1, 0.5, 0.2).unwrap();
//! let im = backend.imag_part(1, 1, 0.5, 0.2).unwrap();
//! let amp = -(3.0 / (8.0 * std::f64::consts::PI)).sqrt() * 0.5f64.sin();
//! assert!((re - amp * 0.2f64.cos()).abs() < 1e-14);
//! assert!((im - amp * 0.2f64.sin()).abs() < 1e-14);
//! ```

pub mod config;
pub mod error;
pub mod harmonic;
mod recurrence;

pub use config::{DEFAULT_MAX_DEGREE, LegendreConfig};
pub use error::LegendreError;
pub use harmonic::LegendreBackend;
