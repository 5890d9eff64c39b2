//! Complex spherical harmonic evaluation.

use num_complex::Complex64;

use crate::config::LegendreConfig;
use crate::error::LegendreError;
use crate::recurrence::normalized_legendre_unchecked;

/// Evaluator for `Y_l^k(θ, φ)` with non-negative order.
///
/// Immutable and `Copy`; safe to share across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendreBackend {
    config: LegendreConfig,
}

impl LegendreBackend {
    /// Backend with [`LegendreConfig::DEFAULT`].
    pub const DEFAULT: Self = Self {
        config: LegendreConfig::DEFAULT,
    };

    /// Build a backend from a validated config.
    pub fn new(config: LegendreConfig) -> Result<Self, LegendreError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LegendreConfig {
        &self.config
    }

    fn check_indices(&self, l: u32, k: u32) -> Result<(), LegendreError> {
        if k > l {
            return Err(LegendreError::OrderExceedsDegree { l, k });
        }
        if l > self.config.max_degree {
            return Err(LegendreError::DegreeTooLarge {
                l,
                max: self.config.max_degree,
            });
        }
        Ok(())
    }

    /// Orthonormal associated Legendre value `P̄_l^k(cos θ)`.
    pub(crate) fn normalized_legendre(&self, l: u32, k: u32, theta: f64) -> Result<f64, LegendreError> {
        self.check_indices(l, k)?;
        let value = normalized_legendre_unchecked(l, k, theta);
        if theta.is_finite() && !value.is_finite() {
            return Err(LegendreError::NonFinite { l, k });
        }
        Ok(value)
    }

    /// Complex spherical harmonic `Y_l^k(θ, φ) = P̄_l^k(cos θ) · e^{ikφ}`.
    ///
    /// Only its parts leave the crate, through [`real_part`](Self::real_part)
    /// and [`imag_part`](Self::imag_part).
    pub(crate) fn spherical_harmonic(
        &self,
        l: u32,
        k: u32,
        theta: f64,
        phi: f64,
    ) -> Result<Complex64, LegendreError> {
        let p = self.normalized_legendre(l, k, theta)?;
        if k == 0 {
            return Ok(Complex64::new(p, 0.0));
        }
        let (sin_kphi, cos_kphi) = (f64::from(k) * phi).sin_cos();
        let value = Complex64::new(p * cos_kphi, p * sin_kphi);
        let inputs_finite = theta.is_finite() && phi.is_finite();
        if inputs_finite && !(value.re.is_finite() && value.im.is_finite()) {
            return Err(LegendreError::NonFinite { l, k });
        }
        Ok(value)
    }

    /// `Re[Y_l^k(θ, φ)]`.
    pub fn real_part(&self, l: u32, k: u32, theta: f64, phi: f64) -> Result<f64, LegendreError> {
        self.spherical_harmonic(l, k, theta, phi).map(|y| y.re)
    }

    /// `Im[Y_l^k(θ, φ)]`.
    pub fn imag_part(&self, l: u32, k: u32, theta: f64, phi: f64) -> Result<f64, LegendreError> {
        self.spherical_harmonic(l, k, theta, phi).map(|y| y.im)
    }
}

impl Default for LegendreBackend {
    fn default() -> Self {
        Self::DEFAULT
    }
}
