//! Binomial-lattice pricing engine for vanilla options.
//!
//! Wraps the recombining CRR tree from `iv-lattice` behind the pricing
//! contract the implied-volatility solver consumes: construct with the
//! full parameter set, call [`BinomialTreeEngine::price`]. European
//! options roll the discounted risk-neutral expectation back through the
//! tree; American options additionally compare continuation against
//! immediate exercise at every interior node.

use iv_core::{
    ensure,
    errors::{Error, Result},
    Price, Rate, Real, Time, Volatility,
};
use iv_instruments::{ExerciseStyle, OptionType, PlainVanillaPayoff};
use iv_lattice::{price_american, price_european, BinomialTree};

/// Lattice pricing engine for a single vanilla option contract.
///
/// Holds the complete contract and market parameter set; the lattice
/// itself is built per [`price`](Self::price) call so that one engine
/// value corresponds to one `(strike, sigma)` candidate during the
/// volatility search.
#[derive(Debug, Clone)]
pub struct BinomialTreeEngine {
    spot: Real,
    strike: Real,
    rate: Rate,
    expiry: Time,
    steps: usize,
    dividend_yield: Rate,
    sigma: Volatility,
    option_type: OptionType,
    exercise: ExerciseStyle,
}

impl BinomialTreeEngine {
    /// Create an engine for the given contract.
    ///
    /// Contract parameters are validated here; the candidate volatility
    /// is validated when the lattice is built, so that degenerate sigmas
    /// surface as errors from [`price`](Self::price).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: Real,
        strike: Real,
        rate: Rate,
        expiry: Time,
        steps: usize,
        dividend_yield: Rate,
        sigma: Volatility,
        option_type: OptionType,
        exercise: ExerciseStyle,
    ) -> Result<Self> {
        ensure!(spot > 0.0, "spot must be positive, got {spot}");
        ensure!(strike > 0.0, "strike must be positive, got {strike}");
        ensure!(expiry > 0.0, "expiry must be positive, got {expiry}");
        ensure!(steps > 0, "step count must be positive");

        Ok(Self {
            spot,
            strike,
            rate,
            expiry,
            steps,
            dividend_yield,
            sigma,
            option_type,
            exercise,
        })
    }

    /// Theoretical value of the contract on the lattice.
    pub fn price(&self) -> Result<Price> {
        let tree = BinomialTree::new(
            self.spot,
            self.rate,
            self.dividend_yield,
            self.sigma,
            self.expiry,
            self.steps,
        )?;
        let discount = (-self.rate * tree.dt()).exp();
        let payoff = PlainVanillaPayoff::new(self.option_type, self.strike);
        let value = match self.exercise {
            ExerciseStyle::European => price_european(&tree, &|s| payoff.value(s), discount),
            ExerciseStyle::American => price_american(&tree, &|s| payoff.value(s), discount),
        };
        if !value.is_finite() {
            return Err(Error::NumericDomain(format!(
                "lattice produced a non-finite value for strike {}",
                self.strike
            )));
        }
        Ok(value)
    }
}
