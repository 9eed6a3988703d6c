//! Bracketed 1-D root search for monotone functions.
//!
//! The implied-volatility inversion reduces to finding `x` with
//! `f(x) = target` for a pricing function `f` that is monotonically
//! increasing in `x`. [`bracket_increasing`] expands an initial guess
//! interval until it straddles the target; [`bisect_to_target`] then
//! halves the bracket until the *function value* is within tolerance of
//! the target. Both loops carry hard iteration caps so that a
//! non-monotone or out-of-range input produces an error instead of a
//! hang.
//!
//! The searched function is fallible: pricing primitives can reject a
//! candidate volatility (degenerate lattice probabilities, overflow), and
//! such errors propagate out of the search via `?`.

use iv_core::{
    ensure,
    errors::{Error, Result},
    Real,
};

const MAX_BRACKET_ITERATIONS: u32 = 64;
const MAX_ITERATIONS: u32 = 100;

/// Expand `(lower, upper)` until `f(lower) < target < f(upper)`.
///
/// Assumes `f` is monotonically increasing over the searched range. The
/// lower bound is halved while `f(lower) >= target`; the upper bound is
/// doubled while `f(upper) <= target`. Exceeding the expansion cap on
/// either side yields [`Error::NotBracketable`].
///
/// # Errors
/// Any error returned by `f` propagates unchanged.
pub fn bracket_increasing<F>(
    mut f: F,
    target: Real,
    lower: Real,
    upper: Real,
) -> Result<(Real, Real)>
where
    F: FnMut(Real) -> Result<Real>,
{
    ensure!(lower > 0.0, "initial lower bound must be positive, got {lower}");
    ensure!(
        upper > lower,
        "initial upper bound {upper} must exceed lower bound {lower}"
    );

    let mut a = lower;
    let mut count = 0;
    while f(a)? >= target {
        if count >= MAX_BRACKET_ITERATIONS {
            return Err(Error::NotBracketable { target });
        }
        a *= 0.5;
        count += 1;
    }

    let mut b = upper;
    let mut count = 0;
    while f(b)? <= target {
        if count >= MAX_BRACKET_ITERATIONS {
            return Err(Error::NotBracketable { target });
        }
        b *= 2.0;
        count += 1;
    }

    Ok((a, b))
}

/// Bisect `[a, b]` until `|f(mid) − target| <= tolerance`.
///
/// The convergence criterion is on the function value, not the interval
/// width: the returned abscissa reproduces the target to within
/// `tolerance`. Requires a bracket from [`bracket_increasing`] (or
/// equivalent) and an increasing `f`.
///
/// # Errors
/// `Error::Runtime` when the iteration cap is reached before the
/// tolerance is met; errors from `f` propagate unchanged.
pub fn bisect_to_target<F>(
    mut f: F,
    target: Real,
    mut a: Real,
    mut b: Real,
    tolerance: Real,
) -> Result<Real>
where
    F: FnMut(Real) -> Result<Real>,
{
    ensure!(
        tolerance > 0.0,
        "tolerance must be positive, got {tolerance}"
    );

    let mut mid = 0.5 * (a + b);
    let mut fm = f(mid)?;
    let mut count = 0;
    while (fm - target).abs() > tolerance {
        if count >= MAX_ITERATIONS {
            return Err(Error::Runtime(
                "bisection: maximum iterations reached without meeting tolerance".into(),
            ));
        }
        if fm > target {
            b = mid;
        } else {
            a = mid;
        }
        mid = 0.5 * (a + b);
        fm = f(mid)?;
        count += 1;
    }

    Ok(mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_within_initial_bounds() {
        // f(x) = x², target 2 is already straddled by [1, 2]
        let (a, b) = bracket_increasing(|x| Ok(x * x), 2.0, 1.0, 2.0).unwrap();
        assert_eq!((a, b), (1.0, 2.0));
    }

    #[test]
    fn bracket_expands_both_sides() {
        let (a, b) = bracket_increasing(|x| Ok(x * x), 25.0, 4.0, 4.5).unwrap();
        assert!(a * a < 25.0, "f(a) = {} not below target", a * a);
        assert!(b * b > 25.0, "f(b) = {} not above target", b * b);
    }

    #[test]
    fn bracket_unreachable_target_fails() {
        // tanh is bounded by 1; target 2 can never be bracketed
        let err = bracket_increasing(|x| Ok(x.tanh()), 2.0, 0.1, 1.0).unwrap_err();
        assert!(matches!(err, Error::NotBracketable { .. }), "got {err}");
    }

    #[test]
    fn bracket_floor_above_target_fails() {
        // f >= 0.5 everywhere, so the lower expansion can never undershoot 0.1
        let err = bracket_increasing(|x| Ok(0.5 + x), 0.1, 0.1, 1.0).unwrap_err();
        assert!(matches!(err, Error::NotBracketable { .. }), "got {err}");
    }

    #[test]
    fn bracket_propagates_function_errors() {
        let err = bracket_increasing(
            |x| {
                if x < 0.05 {
                    Err(Error::NumericDomain("degenerate input".into()))
                } else {
                    Ok(0.5 + x)
                }
            },
            0.1,
            0.1,
            1.0,
        )
        .unwrap_err();
        assert!(matches!(err, Error::NumericDomain(_)), "got {err}");
    }

    #[test]
    fn bisect_sqrt2() {
        let root = bisect_to_target(|x| Ok(x * x), 2.0, 1.0, 2.0, 1e-10).unwrap();
        assert!((root * root - 2.0).abs() <= 1e-10);
        assert!((root - 2.0_f64.sqrt()).abs() < 1e-9, "got {root}");
    }

    #[test]
    fn bisect_rejects_nonpositive_tolerance() {
        assert!(bisect_to_target(|x| Ok(x), 0.5, 0.0, 1.0, 0.0).is_err());
        assert!(bisect_to_target(|x| Ok(x), 0.5, 0.0, 1.0, -1.0).is_err());
    }

    #[test]
    fn bisect_cap_reached_on_flat_function() {
        // Constant f never meets a tolerance tighter than its offset
        let err = bisect_to_target(|_| Ok(1.0), 2.0, 0.0, 1.0, 1e-6).unwrap_err();
        assert!(matches!(err, Error::Runtime(_)), "got {err}");
    }
}
