//! Error types for quantbench.
//!
//! A single `thiserror`-derived enum covers the realistic failure modes
//! of a one-shot batch computation: bad input parameters (rejected
//! before any work starts) and unrecoverable runtime failures.  All
//! errors are fatal; nothing is retried.

use thiserror::Error;

/// The top-level error type used throughout quantbench.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A simulation or benchmark parameter failed validation.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout quantbench.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate a precondition, returning `Error::InvalidParameter` if it
/// does not hold.
///
/// # Example
/// ```
/// use qb_core::ensure;
/// fn positive(x: f64) -> qb_core::errors::Result<f64> {
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
            return Err($crate::errors::Error::InvalidParameter(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guarded(n: usize) -> Result<usize> {
        crate::ensure!(n > 0, "count must be positive, got {n}");
        Ok(n)
    }

    #[test]
    fn ensure_passes_and_fails() {
        assert_eq!(guarded(3), Ok(3));
        assert_eq!(
            guarded(0),
            Err(Error::InvalidParameter(
                "count must be positive, got 0".into()
            ))
        );
    }

    #[test]
    fn error_display() {
        let e = Error::InvalidParameter("num_paths must be positive".into());
        assert_eq!(
            e.to_string(),
            "invalid parameter: num_paths must be positive"
        );
    }
}
