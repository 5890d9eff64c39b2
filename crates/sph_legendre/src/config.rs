//! Backend configuration.

use crate::error::LegendreError;

/// Default upper bound on the degree accepted by the backend.
pub const DEFAULT_MAX_DEGREE: u32 = 2048;

/// Configuration for [`LegendreBackend`](crate::LegendreBackend).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendreConfig {
    /// Largest degree `l` the backend will evaluate. Each evaluation runs
    /// `l - k` recurrence steps, so this bounds the work per call.
    pub max_degree: u32,
}

impl LegendreConfig {
    pub const DEFAULT: Self = Self {
        max_degree: DEFAULT_MAX_DEGREE,
    };

    pub const fn with_max_degree(max_degree: u32) -> Self {
        Self { max_degree }
    }

    pub(crate) fn validate(&self) -> Result<(), LegendreError> {
        if self.max_degree == 0 {
            return Err(LegendreError::InvalidConfig(
                "max_degree must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for LegendreConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
