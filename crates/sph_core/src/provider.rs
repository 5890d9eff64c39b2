//! The complex harmonic capability the real conversion is built on.

use sph_legendre::LegendreBackend;

use crate::error::ProviderError;

/// Source of the complex spherical harmonic `Y_l^k(θ, φ)` for `k >= 0`.
///
/// Implementations must use the orthonormal physics convention with the
/// Condon–Shortley phase, θ polar and φ azimuthal. A provider with a
/// different convention changes the real harmonics silently; nothing in
/// this crate compensates for it.
pub trait ComplexHarmonicProvider {
    /// `Re[Y_l^k(θ, φ)]`.
    fn real_part(&self, l: u32, k: u32, theta: f64, phi: f64) -> Result<f64, ProviderError>;

    /// `Im[Y_l^k(θ, φ)]`.
    fn imag_part(&self, l: u32, k: u32, theta: f64, phi: f64) -> Result<f64, ProviderError>;
}

impl ComplexHarmonicProvider for LegendreBackend {
    fn real_part(&self, l: u32, k: u32, theta: f64, phi: f64) -> Result<f64, ProviderError> {
        Ok(LegendreBackend::real_part(self, l, k, theta, phi)?)
    }

    fn imag_part(&self, l: u32, k: u32, theta: f64, phi: f64) -> Result<f64, ProviderError> {
        Ok(LegendreBackend::imag_part(self, l, k, theta, phi)?)
    }
}

impl<P: ComplexHarmonicProvider + ?Sized> ComplexHarmonicProvider for &P {
    fn real_part(&self, l: u32, k: u32, theta: f64, phi: f64) -> Result<f64, ProviderError> {
        (**self).real_part(l, k, theta, phi)
    }

    fn imag_part(&self, l: u32, k: u32, theta: f64, phi: f64) -> Result<f64, ProviderError> {
        (**self).imag_part(l, k, theta, phi)
    }
}
