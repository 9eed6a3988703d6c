//! Solver configuration.
//!
//! The contract flags and the engine selector are an explicit struct with
//! named fields and documented defaults, validated once at construction
//! of the solver rather than read ad hoc.

use iv_instruments::{ExerciseStyle, OptionType};

/// Which pricing engine drives both forward valuation and the
/// implied-volatility inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    /// Closed-form Black-Scholes valuation.
    BlackScholes,
    /// Recombining binomial lattice (supports American exercise).
    BinomialTree,
}

/// Contract and engine configuration, fixed at solver construction.
///
/// The closed-form engine prices European exercise only; the exercise
/// style affects the binomial engine alone.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Call or put. Defaults to [`OptionType::Call`].
    pub option_type: OptionType,
    /// European or American exercise. Defaults to
    /// [`ExerciseStyle::European`].
    pub exercise: ExerciseStyle,
    /// Pricing engine. Defaults to [`EngineKind::BlackScholes`].
    pub engine: EngineKind,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            option_type: OptionType::Call,
            exercise: ExerciseStyle::European,
            engine: EngineKind::BlackScholes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.option_type, OptionType::Call);
        assert_eq!(config.exercise, ExerciseStyle::European);
        assert_eq!(config.engine, EngineKind::BlackScholes);
    }
}
