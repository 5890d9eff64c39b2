//! Real spherical harmonics.
//!
//! Maps the complex spherical harmonic basis onto the real basis used in
//! physics and graphics:
//!
//! ```text
//! Y_l^m(θ,φ) = √2 · (-1)^m · Re[Y_l^{|m|}(θ,φ)]   m > 0
//!              √2 · (-1)^m · Im[Y_l^{|m|}(θ,φ)]   m < 0
//!              Re[Y_l^0(θ,φ)]                      m = 0
//! ```
//!
//! The complex values come from a [`ComplexHarmonicProvider`]. The default
//! provider is [`sph_legendre::LegendreBackend`], used by [`sph_harm`].
//!
//! ```rust
//! use std::f64::consts::PI;
//!
//! let y = sph_core::sph_harm(1, 0, 0.0, 0.0).unwrap();
//! assert!((y - (0.75 / PI).sqrt()).abs() < 1e-12);
//! ```

pub mod error;
pub mod provider;
pub mod real;

pub use error::{HarmonicError, ProviderError};
pub use provider::ComplexHarmonicProvider;
pub use real::{
    OrderSign, check_order, condon_shortley_sign, real_spherical_harmonic, sph_harm,
};

// Re-export the backend so callers can configure it without a direct dependency.
pub use sph_legendre::{LegendreBackend, LegendreConfig, LegendreError};
