//! Closed-form Black-Scholes valuation of European vanilla options.
//!
//! $$C = S e^{-qT} \Phi(d_1) - K e^{-rT} \Phi(d_2)$$
//! $$P = K e^{-rT} \Phi(-d_2) - S e^{-qT} \Phi(-d_1)$$
//!
//! where $d_{1,2} = \frac{\ln(S/K) + (r - q \pm \sigma^2/2)T}{\sigma\sqrt{T}}$.

use iv_core::{
    errors::{Error, Result},
    Price, Rate, Real, Time, Volatility,
};
use iv_instruments::OptionType;
use iv_math::normal_cdf;

/// Compute the Black-Scholes value of a European option.
///
/// `rate` and `dividend_yield` are continuously-compounded annual rates;
/// `expiry` is the time to maturity in years. Both the put/call flag and
/// the dividend yield are honoured: puts use the sign-flipped form of the
/// formula and the yield is subtracted from the drift.
///
/// # Errors
/// `Error::NumericDomain` when `spot`, `strike`, `sigma`, or `expiry` is
/// non-positive; the formula's log and divisions are undefined there and
/// the failure is reported rather than letting NaN propagate.
pub fn black_scholes(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    rate: Rate,
    dividend_yield: Rate,
    sigma: Volatility,
    expiry: Time,
) -> Result<Price> {
    if spot <= 0.0 || strike <= 0.0 {
        return Err(Error::NumericDomain(format!(
            "spot ({spot}) and strike ({strike}) must be positive"
        )));
    }
    if expiry <= 0.0 {
        return Err(Error::NumericDomain(format!(
            "time to expiry must be positive, got {expiry}"
        )));
    }
    if sigma <= 0.0 {
        return Err(Error::NumericDomain(format!(
            "volatility must be positive, got {sigma}"
        )));
    }

    let phi = option_type.sign();
    let std_dev = sigma * expiry.sqrt();
    let df_r = (-rate * expiry).exp();
    let df_q = (-dividend_yield * expiry).exp();

    let d1 = ((spot / strike).ln() + (rate - dividend_yield + 0.5 * sigma * sigma) * expiry)
        / std_dev;
    let d2 = d1 - std_dev;

    Ok(phi * (spot * df_q * normal_cdf(phi * d1) - strike * df_r * normal_cdf(phi * d2)))
}
