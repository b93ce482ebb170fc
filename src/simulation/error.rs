//! Error types for building and validating a simulation

use thiserror::Error;

/// Result type for scenario construction and strict validation
pub type SimResult<T> = Result<T, SimError>;

/// Rejected configurations
///
/// Stepping never returns these: the integrator itself is permissive and lets
/// non-finite values propagate. They only come from scenario building and from
/// the opt-in [`crate::System::validate`] check.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("body '{name}': {field} must have 2 components, got {len}")]
    InvalidVector {
        name: String,
        field: &'static str,
        len: usize,
    },

    #[error("system has no bodies")]
    EmptySystem,

    #[error("body '{name}' has non-positive or non-finite mass {mass}")]
    NonPositiveMass { name: String, mass: f64 },

    #[error("time step must be positive and finite, got {0}")]
    NonPositiveTimeStep(f64),

    #[error("bodies '{first}' and '{second}' start at the same position")]
    CoincidentBodies { first: String, second: String },
}
