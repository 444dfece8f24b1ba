//! Error types for pose operations.

use thiserror::Error;

/// Errors that can occur when validating pose data.
#[derive(Debug, Error)]
pub enum PoseError {
    /// A pose component contains `NaN` or infinity.
    #[error("non-finite pose component: {0}")]
    NonFinite(String),

    /// Scale is zero, negative, or non-finite.
    #[error("invalid scale: {scale} (must be finite and > 0)")]
    InvalidScale {
        /// The rejected scale value.
        scale: f32,
    },
}

impl PoseError {
    /// Creates a non-finite component error.
    #[must_use]
    pub fn non_finite(component: impl Into<String>) -> Self {
        Self::NonFinite(component.into())
    }

    /// Creates an invalid scale error.
    #[must_use]
    pub const fn invalid_scale(scale: f32) -> Self {
        Self::InvalidScale { scale }
    }
}

/// Result type for pose operations.
pub type Result<T> = std::result::Result<T, PoseError>;
