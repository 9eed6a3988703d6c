//! # iv-instruments
//!
//! Contract-level vocabulary for the implied-volatility workspace: the
//! call/put option type, the plain vanilla payoff, and the exercise
//! style. Contracts here carry no calendar dates; maturities enter the
//! pricers directly as year fractions.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Exercise styles.
pub mod exercise;

/// Option types and payoffs.
pub mod payoff;

pub use exercise::ExerciseStyle;
pub use payoff::{OptionType, PlainVanillaPayoff};
