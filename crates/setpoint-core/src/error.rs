//! Configuration errors for control-loop construction.

use thiserror::Error;

/// Errors raised when control-loop parameters fail validation.
///
/// Construction fails fast; an invalid configuration is never silently
/// clamped into a valid one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("min_size {min} exceeds max_size {max}")]
    Bounds { min: u32, max: u32 },

    #[error("rope band ({lower}, {upper}) must satisfy lower <= 0 <= upper")]
    Rope { lower: f64, upper: f64 },

    #[error("time step {0} must be strictly positive")]
    TimeStep(f64),
}
