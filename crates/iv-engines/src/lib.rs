//! # iv-engines
//!
//! The two pricing primitives behind the implied-volatility solver:
//!
//! * [`black_scholes`] — closed-form European valuation
//! * [`BinomialTreeEngine`] — lattice valuation with optional early
//!   exercise (American options)
//!
//! Both report a theoretical value that is monotonically increasing in
//! volatility over their valid domain, which is what makes the bracketed
//! inversion in `iv-solver` sound.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Lattice pricing engine.
pub mod binomial_engine;

/// Closed-form Black-Scholes valuation.
pub mod black_scholes;

pub use binomial_engine::BinomialTreeEngine;
pub use black_scholes::black_scholes;
