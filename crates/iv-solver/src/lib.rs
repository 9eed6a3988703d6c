//! # iv-solver
//!
//! Implied-volatility inversion: given observed market prices for one or
//! more strikes, recover the volatility that reproduces each price under
//! the configured pricing engine (closed-form Black-Scholes or binomial
//! lattice with optional early exercise).
//!
//! ## Quick start
//!
//! ```
//! use iv_solver::{EngineKind, ImpliedVolSolver, SolverConfig};
//!
//! let config = SolverConfig {
//!     engine: EngineKind::BinomialTree,
//!     ..SolverConfig::default()
//! };
//! let solver = ImpliedVolSolver::new(151.76, 0.04, 0.0465753, 0.0061, 250, 1e-3, config)?;
//! let vols = solver.implied_vols(&[138.0], &[15.575])?;
//! assert_eq!(vols.len(), 1);
//! assert!(vols[0].is_ok());
//! # Ok::<(), iv_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Solver configuration: option type, exercise style, engine selection.
pub mod config;

/// The implied-volatility solver.
pub mod solver;

pub use config::{EngineKind, SolverConfig};
pub use solver::ImpliedVolSolver;
