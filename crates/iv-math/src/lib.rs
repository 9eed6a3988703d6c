//! # iv-math
//!
//! Mathematical utilities for the implied-volatility workspace: the
//! standard normal distribution (delegating to the `statrs` crate) and
//! bracketed 1-D root search with hard iteration caps.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Probability distributions.
pub mod distributions;

/// 1-D root-finding: bracket expansion and target bisection.
pub mod solvers1d;

pub use distributions::{normal_cdf, normal_pdf, StandardNormal};
pub use solvers1d::{bisect_to_target, bracket_increasing};
