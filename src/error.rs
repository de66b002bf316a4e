//! Error types for density evaluation.

/// Error returned when distribution parameters or evaluation points are
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DensityError {
    /// A parameter is finite but outside its valid domain
    /// (e.g. `stddev ≤ 0`).
    #[error("invalid parameter `{name}`: {reason}, got {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Constraint the value violates.
        reason: &'static str,
    },

    /// An input is NaN or infinite.
    #[error("non-finite input `{name}`: {value}")]
    NonFiniteInput {
        /// Name of the offending input.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl DensityError {
    /// Name of the parameter or input that caused the error.
    pub fn name(&self) -> &'static str {
        match self {
            DensityError::InvalidParameter { name, .. }
            | DensityError::NonFiniteInput { name, .. } => name,
        }
    }

    /// The rejected value.
    pub fn value(&self) -> f64 {
        match self {
            DensityError::InvalidParameter { value, .. }
            | DensityError::NonFiniteInput { value, .. } => *value,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DensityError>;

// ============================================================================
// Tests
// ============================================================================
