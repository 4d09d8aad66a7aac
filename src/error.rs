//! Errors returned by the checked shape constructors.
//!
//! The intersection routines themselves never fail; they report every
//! degenerate case as a miss.

use thiserror::Error;

/// Reasons a checked constructor refuses to build a shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("{what} must not be a zero-length vector")]
    ZeroVector { what: &'static str },

    #[error("{parameter} = {value} must be positive")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("triangle vertices are collinear")]
    DegenerateTriangle,

    #[error("cone half angle {value} is outside (0, pi/2)")]
    HalfAngleOutOfRange { value: f64 },
}

/// Convenience type alias for results using [`ShapeError`].
pub type Result<T> = std::result::Result<T, ShapeError>;

/// Fails with [`ShapeError::NonPositive`] unless `value > 0`.
pub(crate) fn require_positive<T: crate::KernelValue>(parameter: &'static str, value: T) -> Result<()> {
    if value > T::zero() && value.is_finite() {
        Ok(())
    } else {
        let value = value.to_f64().unwrap_or(f64::NAN);
        log::debug!("rejecting {parameter} = {value}");
        Err(ShapeError::NonPositive { parameter, value })
    }
}
