//! Complex → real spherical harmonic conversion.

use std::f64::consts::SQRT_2;

use sph_legendre::LegendreBackend;
use tracing::{debug, trace};

use crate::error::HarmonicError;
use crate::provider::ComplexHarmonicProvider;

/// Provider used by [`sph_harm`].
const DEFAULT_BACKEND: LegendreBackend = LegendreBackend::DEFAULT;

/// Sign of the order `m`, selecting the row of the conversion table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderSign {
    Negative,
    Zero,
    Positive,
}

impl OrderSign {
    pub const fn of(m: i32) -> Self {
        if m < 0 {
            Self::Negative
        } else if m == 0 {
            Self::Zero
        } else {
            Self::Positive
        }
    }
}

/// `(-1)^m` for signed `m`.
///
/// `%` truncates toward zero, so an odd negative `m` gives `-1` and the
/// comparison with zero classifies it as odd, same as `|m|`.
pub const fn condon_shortley_sign(m: i32) -> f64 {
    if m % 2 == 0 { 1.0 } else { -1.0 }
}

/// Reject `|m| > l`.
pub fn check_order(l: u32, m: i32) -> Result<(), HarmonicError> {
    if m.unsigned_abs() > l {
        debug!(l, m, "rejecting order outside [-l, l]");
        return Err(HarmonicError::InvalidOrder { l, m });
    }
    Ok(())
}

/// Real spherical harmonic `Y_l^m(θ, φ)` against an arbitrary provider.
///
/// The provider is called with `|m|`. Angles are passed through untouched.
/// Provider errors are returned as [`HarmonicError::Provider`] without
/// modification.
pub fn real_spherical_harmonic<P>(
    provider: &P,
    l: u32,
    m: i32,
    theta: f64,
    phi: f64,
) -> Result<f64, HarmonicError>
where
    P: ComplexHarmonicProvider + ?Sized,
{
    check_order(l, m)?;
    let k = m.unsigned_abs();

    let value = match OrderSign::of(m) {
        OrderSign::Positive => {
            SQRT_2 * condon_shortley_sign(m) * provider.real_part(l, k, theta, phi)?
        }
        OrderSign::Negative => {
            SQRT_2 * condon_shortley_sign(m) * provider.imag_part(l, k, theta, phi)?
        }
        OrderSign::Zero => provider.real_part(l, 0, theta, phi)?,
    };

    trace!(l, m, theta, phi, value, "real spherical harmonic");
    Ok(value)
}

/// Real spherical harmonic `Y_l^m(θ, φ)` using the default Legendre backend.
pub fn sph_harm(l: u32, m: i32, theta: f64, phi: f64) -> Result<f64, HarmonicError> {
    real_spherical_harmonic(&DEFAULT_BACKEND, l, m, theta, phi)
}
