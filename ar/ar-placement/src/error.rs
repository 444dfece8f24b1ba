//! Error types for the placement core.

use thiserror::Error;

/// Errors that can occur in placement operations.
#[derive(Debug, Error)]
pub enum PlacementError {
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A scale percentage below the minimum of 1.
    #[error("invalid scale percent: {percent} (must be >= 1)")]
    InvalidScalePercent {
        /// The rejected percentage.
        percent: u32,
    },
}

impl PlacementError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }

    /// Creates an invalid scale percent error.
    #[must_use]
    pub const fn invalid_scale_percent(percent: u32) -> Self {
        Self::InvalidScalePercent { percent }
    }
}

/// Errors reported by a platform driver when anchor creation fails.
///
/// Anchor failure is never fatal: the session degrades to a static locked
/// pose and keeps running.
#[derive(Debug, Error)]
pub enum AnchorError {
    /// The platform has no anchor capability.
    #[error("anchors unsupported by platform")]
    Unsupported,

    /// The platform refused or failed the creation request.
    #[error("anchor creation failed: {0}")]
    CreationFailed(String),
}

impl AnchorError {
    /// Creates a creation-failed error.
    #[must_use]
    pub fn creation_failed(reason: impl Into<String>) -> Self {
        Self::CreationFailed(reason.into())
    }
}

/// Result type for placement operations.
pub type Result<T> = std::result::Result<T, PlacementError>;
