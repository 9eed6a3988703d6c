//! # impliedvol
//!
//! Implied-volatility inversion for vanilla options.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `iv-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use impliedvol::solver::{ImpliedVolSolver, SolverConfig};
//!
//! // Black-Scholes engine, call, European — the defaults.
//! let solver = ImpliedVolSolver::new(
//!     100.0,  // spot
//!     0.05,   // risk-free rate
//!     1.0,    // time to expiry (years)
//!     0.0,    // dividend yield
//!     250,    // lattice steps (binomial engine only)
//!     1e-6,   // price resolution
//!     SolverConfig::default(),
//! )?;
//!
//! let observed = solver.price(105.0, 0.3)?;
//! let vol = solver.implied_vol(105.0, observed)?;
//! assert!((vol - 0.3).abs() < 1e-4);
//! # Ok::<(), impliedvol::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use iv_core as core;

/// Mathematical utilities: distributions, 1-D root search.
pub use iv_math as math;

/// Option types, payoffs, and exercise styles.
pub use iv_instruments as instruments;

/// Binomial lattice and backward-induction pricing.
pub use iv_lattice as lattice;

/// Pricing engines.
pub use iv_engines as engines;

/// The implied-volatility solver.
pub use iv_solver as solver;
