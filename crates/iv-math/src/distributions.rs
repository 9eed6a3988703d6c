//! Probability distributions, delegating to the `statrs` crate.

use iv_core::Real;
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

/// The standard normal distribution N(0, 1).
///
/// Wraps the `statrs` normal implementation with unit parameters fixed at
/// construction.
#[derive(Debug, Clone)]
pub struct StandardNormal {
    dist: Normal,
}

impl StandardNormal {
    /// Create the standard normal distribution.
    pub fn new() -> Self {
        Self {
            dist: Normal::new(0.0, 1.0).expect("unit normal parameters are valid"),
        }
    }

    /// Cumulative distribution function Φ(x).
    pub fn cdf(&self, x: Real) -> Real {
        self.dist.cdf(x)
    }

    /// Probability density function φ(x).
    pub fn pdf(&self, x: Real) -> Real {
        self.dist.pdf(x)
    }
}

impl Default for StandardNormal {
    fn default() -> Self {
        Self::new()
    }
}

/// The standard normal cumulative distribution function Φ(x).
#[inline]
pub fn normal_cdf(x: Real) -> Real {
    StandardNormal::new().cdf(x)
}

/// The standard normal probability density function φ(x).
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    StandardNormal::new().pdf(x)
}
