//! Recombining binomial tree over a lognormal underlying.
//!
//! Cox-Ross-Rubinstein parameterisation with a continuous dividend
//! yield: up factor `u = exp(σ√Δt)`, down factor `d = 1/u`, risk-neutral
//! up-probability `p = (exp((r − q)Δt) − d) / (u − d)`.

use iv_core::{
    ensure,
    errors::{Error, Result},
    Rate, Real, Time, Volatility,
};

/// A recombining multiplicative binomial tree.
///
/// The tree has `steps + 1` time layers, with layer `i` holding `i + 1`
/// nodes. Node `(i, j)` represents the state after `j` up-moves and
/// `i − j` down-moves, so the underlying there is `S₀ · d^(i−j) · u^j`.
///
/// Construction validates the market parameters and the resulting
/// lattice: an up factor that overflows, or a risk-neutral probability
/// outside `[0, 1]`, is rejected with an error.
#[derive(Debug, Clone)]
pub struct BinomialTree {
    spot: Real,
    dt: Time,
    steps: usize,
    up: Real,
    down: Real,
    pu: Real,
    pd: Real,
}

impl BinomialTree {
    /// Build a CRR tree for the given market parameters.
    ///
    /// `rate` and `dividend_yield` are continuously-compounded annual
    /// rates; `expiry` is the time to maturity in years.
    pub fn new(
        spot: Real,
        rate: Rate,
        dividend_yield: Rate,
        sigma: Volatility,
        expiry: Time,
        steps: usize,
    ) -> Result<Self> {
        ensure!(spot > 0.0, "spot must be positive, got {spot}");
        ensure!(expiry > 0.0, "expiry must be positive, got {expiry}");
        ensure!(steps > 0, "step count must be positive");
        if sigma <= 0.0 {
            return Err(Error::NumericDomain(format!(
                "volatility must be positive, got {sigma}"
            )));
        }

        let dt = expiry / steps as Real;
        let up = (sigma * dt.sqrt()).exp();
        if !up.is_finite() {
            return Err(Error::NumericDomain(format!(
                "up factor overflows for volatility {sigma} at dt {dt}"
            )));
        }
        let down = 1.0 / up;
        let growth = ((rate - dividend_yield) * dt).exp();
        let pu = (growth - down) / (up - down);
        ensure!(
            (0.0..=1.0).contains(&pu),
            "risk-neutral probability {pu} outside [0, 1] (volatility too small for the drift; increase sigma or steps)"
        );

        Ok(Self {
            spot,
            dt,
            steps,
            up,
            down,
            pu,
            pd: 1.0 - pu,
        })
    }

    /// Number of time steps.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Time increment per step.
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// Number of nodes at time step `i` (always `i + 1`).
    pub fn size(&self, i: usize) -> usize {
        i + 1
    }

    /// Index of the descendant node at step `i+1` for a given `branch`.
    ///
    /// `branch = 0` → down, `branch = 1` → up.
    pub fn descendant(&self, _i: usize, index: usize, branch: usize) -> usize {
        index + branch
    }

    /// Underlying value at node `(i, index)`.
    pub fn underlying(&self, i: usize, index: usize) -> Real {
        self.spot * self.down.powi((i - index) as i32) * self.up.powi(index as i32)
    }

    /// Transition probability for `branch` (0 = down, 1 = up).
    pub fn probability(&self, _i: usize, _index: usize, branch: usize) -> Real {
        if branch == 1 {
            self.pu
        } else {
            self.pd
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_tree() -> BinomialTree {
        // S=100, r=5%, q=0%, σ=20%, T=1, 4 steps
        BinomialTree::new(100.0, 0.05, 0.0, 0.20, 1.0, 4).unwrap()
    }

    #[test]
    fn node_layout() {
        let tree = test_tree();
        assert_eq!(tree.steps(), 4);
        assert_eq!(tree.size(0), 1);
        assert_eq!(tree.size(4), 5);
        assert_eq!(tree.descendant(2, 1, 0), 1);
        assert_eq!(tree.descendant(2, 1, 1), 2);
        assert!((tree.dt() - 0.25).abs() < 1e-15);
    }

    #[test]
    fn tree_recombines() {
        let tree = test_tree();
        // up-then-down equals down-then-up equals spot
        assert!((tree.underlying(2, 1) - 100.0).abs() < 1e-10);
        assert!((tree.underlying(0, 0) - 100.0).abs() < 1e-15);
        // nodes are ordered low to high within a layer
        assert!(tree.underlying(4, 0) < tree.underlying(4, 4));
    }

    #[test]
    fn probabilities_sum_to_one() {
        let tree = test_tree();
        let pu = tree.probability(0, 0, 1);
        let pd = tree.probability(0, 0, 0);
        assert!((pu + pd - 1.0).abs() < 1e-15);
        assert!(pu > 0.0 && pu < 1.0);
    }

    #[test]
    fn martingale_per_step() {
        // E[S(dt)] under the risk-neutral measure equals S·exp(r·dt)
        let tree = test_tree();
        let pu = tree.probability(0, 0, 1);
        let pd = tree.probability(0, 0, 0);
        let expected = pu * tree.underlying(1, 1) + pd * tree.underlying(1, 0);
        let forward = 100.0 * (0.05_f64 * tree.dt()).exp();
        assert!(
            (expected - forward).abs() < 1e-10,
            "E[S] = {expected}, forward = {forward}"
        );
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(BinomialTree::new(-1.0, 0.05, 0.0, 0.2, 1.0, 10).is_err());
        assert!(BinomialTree::new(100.0, 0.05, 0.0, 0.2, 0.0, 10).is_err());
        assert!(BinomialTree::new(100.0, 0.05, 0.0, 0.2, 1.0, 0).is_err());
        assert!(BinomialTree::new(100.0, 0.05, 0.0, 0.0, 1.0, 10).is_err());
        assert!(BinomialTree::new(100.0, 0.05, 0.0, -0.2, 1.0, 10).is_err());
    }

    #[test]
    fn rejects_degenerate_probability() {
        // σ√Δt far below the drift per step forces p > 1
        let err = BinomialTree::new(100.0, 0.5, 0.0, 1e-4, 1.0, 2).unwrap_err();
        assert!(matches!(err, Error::Precondition(_)), "got {err}");
    }

    #[test]
    fn rejects_overflowing_up_factor() {
        let err = BinomialTree::new(100.0, 0.05, 0.0, 1e6, 1.0, 10).unwrap_err();
        assert!(matches!(err, Error::NumericDomain(_)), "got {err}");
    }
}
