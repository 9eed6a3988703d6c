//! # iv-lattice
//!
//! Lattice pricing for the implied-volatility workspace.
//!
//! * [`BinomialTree`] — recombining CRR binomial tree with continuous
//!   dividend yield
//! * [`price_european`] / [`price_american`] — backward-induction pricing
//!   over a tree

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Recombining binomial tree construction.
pub mod binomial_tree;

pub use binomial_tree::BinomialTree;

use iv_core::{DiscountFactor, Price, Real};

/// Price a European option by backward induction on a binomial tree.
///
/// # Arguments
/// * `tree` — the binomial tree (already constructed)
/// * `payoff` — payoff function `S → value` (e.g. `|s| (s - K).max(0.0)`)
/// * `discount` — per-step discount factor, typically `exp(−r · Δt)`
pub fn price_european(
    tree: &BinomialTree,
    payoff: &dyn Fn(Real) -> Real,
    discount: DiscountFactor,
) -> Price {
    let n = tree.steps();

    // Terminal values at maturity
    let mut values: Vec<Real> = (0..tree.size(n))
        .map(|j| payoff(tree.underlying(n, j)))
        .collect();

    // Roll back through the tree
    for i in (0..n).rev() {
        for j in 0..tree.size(i) {
            let pu = tree.probability(i, j, 1);
            let pd = tree.probability(i, j, 0);
            let d_up = tree.descendant(i, j, 1);
            let d_down = tree.descendant(i, j, 0);
            values[j] = discount * (pu * values[d_up] + pd * values[d_down]);
        }
    }

    values[0]
}

/// Price an American option by backward induction on a binomial tree.
///
/// Same as European pricing, but compares continuation value against
/// immediate exercise at every interior node.
pub fn price_american(
    tree: &BinomialTree,
    payoff: &dyn Fn(Real) -> Real,
    discount: DiscountFactor,
) -> Price {
    let n = tree.steps();

    let mut values: Vec<Real> = (0..tree.size(n))
        .map(|j| payoff(tree.underlying(n, j)))
        .collect();

    for i in (0..n).rev() {
        for j in 0..tree.size(i) {
            let pu = tree.probability(i, j, 1);
            let pd = tree.probability(i, j, 0);
            let d_up = tree.descendant(i, j, 1);
            let d_down = tree.descendant(i, j, 0);
            let hold = discount * (pu * values[d_up] + pd * values[d_down]);
            let exercise = payoff(tree.underlying(i, j));
            values[j] = hold.max(exercise);
        }
    }

    values[0]
}
