//! Error types for the implied-volatility workspace.
//!
//! A single `thiserror`-derived enum covers the failure modes of the
//! pricing primitives and the root search: rejected parameters, numeric
//! domain violations, unbracketable targets, and exhausted iteration caps.
//! The `ensure!` and `fail!` macros keep validation at call sites terse.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An arithmetic operation left its finite domain (log of a
    /// non-positive ratio, division by zero volatility or time, overflow
    /// to a non-finite value).
    #[error("numeric domain error: {0}")]
    NumericDomain(String),

    /// No bracket straddling the target could be found within the
    /// expansion cap; the target is unreachable by the searched function,
    /// or the function is not monotone over the search range.
    #[error("volatility not bracketable: target price {target} outside the attainable range")]
    NotBracketable {
        /// The target value the search failed to straddle.
        target: f64,
    },
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use iv_core::{ensure, errors::Error};
/// fn positive(x: f64) -> iv_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use iv_core::{fail, errors::Error};
/// fn always_err() -> iv_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
