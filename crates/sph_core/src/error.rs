//! Error types for real spherical harmonic evaluation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sph_legendre::LegendreError;

/// Failure reported by a [`ComplexHarmonicProvider`](crate::ComplexHarmonicProvider).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProviderError {
    /// Arguments outside the provider's domain.
    Domain(String),
    /// A value could not be represented (overflow, non-finite result).
    Overflow(String),
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain(msg) => write!(f, "domain error: {msg}"),
            Self::Overflow(msg) => write!(f, "overflow: {msg}"),
        }
    }
}

impl Error for ProviderError {}

impl From<LegendreError> for ProviderError {
    fn from(e: LegendreError) -> Self {
        match e {
            LegendreError::DegreeTooLarge { .. } | LegendreError::NonFinite { .. } => {
                Self::Overflow(e.to_string())
            }
            _ => Self::Domain(e.to_string()),
        }
    }
}

/// Errors from real spherical harmonic evaluation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum HarmonicError {
    /// `|m| > l`; rejected before the provider is consulted.
    InvalidOrder { l: u32, m: i32 },
    /// Error raised by the provider, passed through unchanged.
    Provider(ProviderError),
}

impl Display for HarmonicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOrder { l, m } => {
                write!(f, "invalid order: |m| = {} exceeds l = {l}", m.unsigned_abs())
            }
            Self::Provider(e) => write!(f, "provider error: {e}"),
        }
    }
}

impl Error for HarmonicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Provider(e) => Some(e),
            Self::InvalidOrder { .. } => None,
        }
    }
}

impl From<ProviderError> for HarmonicError {
    fn from(e: ProviderError) -> Self {
        Self::Provider(e)
    }
}
