//! Error types for the Legendre backend.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from backend configuration or harmonic evaluation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LegendreError {
    /// Backend configuration was rejected.
    InvalidConfig(&'static str),
    /// Order `k` is larger than degree `l`.
    OrderExceedsDegree { l: u32, k: u32 },
    /// Degree exceeds the configured `max_degree`.
    DegreeTooLarge { l: u32, max: u32 },
    /// Finite angles produced a non-finite value.
    NonFinite { l: u32, k: u32 },
}

impl Display for LegendreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::OrderExceedsDegree { l, k } => {
                write!(f, "order {k} exceeds degree {l}")
            }
            Self::DegreeTooLarge { l, max } => {
                write!(f, "degree {l} exceeds configured maximum {max}")
            }
            Self::NonFinite { l, k } => {
                write!(f, "non-finite harmonic value for l={l}, k={k}")
            }
        }
    }
}

impl Error for LegendreError {}
