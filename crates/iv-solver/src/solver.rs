//! Implied-volatility inversion by bracketed bisection.
//!
//! The solver holds the immutable market and contract configuration and
//! inverts observed prices strike by strike: expand a volatility bracket
//! around an initial guess interval until it straddles the observed
//! price, then bisect until the repriced value is within the configured
//! resolution of the observation. Each strike is solved independently;
//! nothing is shared across strikes except the read-only configuration.

use iv_core::{
    ensure,
    errors::{Error, Result},
    Price, Rate, Real, Time, Volatility,
};
use iv_engines::{black_scholes, BinomialTreeEngine};
use iv_math::{bisect_to_target, bracket_increasing};

use crate::config::{EngineKind, SolverConfig};

/// Initial lower volatility bound for the bracket search.
const INITIAL_LOWER_VOL: Volatility = 0.1;

/// Initial upper volatility bound for the bracket search.
const INITIAL_UPPER_VOL: Volatility = 1.0;

/// Inverts observed option prices to implied volatilities.
///
/// Constructed once with the market parameters and engine configuration;
/// holds no mutable state, so a single instance can serve any number of
/// strike batches.
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver {
    spot: Real,
    rate: Rate,
    expiry: Time,
    dividend_yield: Rate,
    steps: usize,
    resolution: Price,
    config: SolverConfig,
}

impl ImpliedVolSolver {
    /// Create a solver for the given market.
    ///
    /// `spot` is the current underlying price, `rate` and
    /// `dividend_yield` continuously-compounded annual rates, `expiry`
    /// the time to maturity in years. `steps` sets the lattice
    /// granularity of the binomial engine (ignored by the closed form),
    /// and `resolution` the absolute price error accepted as converged.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: Real,
        rate: Rate,
        expiry: Time,
        dividend_yield: Rate,
        steps: usize,
        resolution: Price,
        config: SolverConfig,
    ) -> Result<Self> {
        ensure!(spot > 0.0, "spot must be positive, got {spot}");
        ensure!(expiry > 0.0, "time to expiry must be positive, got {expiry}");
        ensure!(steps > 0, "lattice step count must be positive");
        ensure!(
            resolution > 0.0,
            "resolution must be positive, got {resolution}"
        );

        Ok(Self {
            spot,
            rate,
            expiry,
            dividend_yield,
            steps,
            resolution,
            config,
        })
    }

    /// Theoretical value of the configured contract at `(strike, sigma)`
    /// under the selected engine.
    pub fn price(&self, strike: Real, sigma: Volatility) -> Result<Price> {
        match self.config.engine {
            EngineKind::BlackScholes => black_scholes(
                self.config.option_type,
                self.spot,
                strike,
                self.rate,
                self.dividend_yield,
                sigma,
                self.expiry,
            ),
            EngineKind::BinomialTree => BinomialTreeEngine::new(
                self.spot,
                strike,
                self.rate,
                self.expiry,
                self.steps,
                self.dividend_yield,
                sigma,
                self.config.option_type,
                self.config.exercise,
            )?
            .price(),
        }
    }

    /// Implied volatility reproducing `observed` at `strike`.
    ///
    /// # Errors
    /// [`Error::NotBracketable`] when no positive volatility can reach
    /// the observed price; engine errors (degenerate lattice
    /// probabilities, numeric-domain violations) propagate unchanged.
    pub fn implied_vol(&self, strike: Real, observed: Price) -> Result<Volatility> {
        ensure!(strike > 0.0, "strike must be positive, got {strike}");
        if observed <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "observed price must be positive, got {observed}"
            )));
        }

        let (a, b) = bracket_increasing(
            |sigma| self.price(strike, sigma),
            observed,
            INITIAL_LOWER_VOL,
            INITIAL_UPPER_VOL,
        )?;
        bisect_to_target(
            |sigma| self.price(strike, sigma),
            observed,
            a,
            b,
            self.resolution,
        )
    }

    /// Implied volatilities for a batch of `(strike, observed)` pairs.
    ///
    /// Pairs are solved independently and in order; the output has the
    /// same length and positional correspondence as the inputs. A strike
    /// that fails carries its error in place without disturbing the
    /// results of the other strikes.
    ///
    /// # Errors
    /// The outer error covers only the length-mismatch precondition.
    pub fn implied_vols(
        &self,
        strikes: &[Real],
        observed: &[Price],
    ) -> Result<Vec<Result<Volatility>>> {
        ensure!(
            strikes.len() == observed.len(),
            "strikes ({}) and observed prices ({}) must have equal length",
            strikes.len(),
            observed.len()
        );

        Ok(strikes
            .iter()
            .zip(observed)
            .map(|(&strike, &price)| self.implied_vol(strike, price))
            .collect())
    }
}
