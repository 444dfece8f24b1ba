//! Configuration for smoothing, stability scoring, and placement.
//!
//! The defaults are empirically tuned for handheld AR and have no deeper
//! derivation; treat them as starting points and tune per device class.

use serde::{Deserialize, Serialize};

use crate::error::{PlacementError, Result};

/// Exponential pose-smoothing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmootherConfig {
    /// Blend factor toward the raw sample per frame, in `(0, 1)`.
    ///
    /// Higher values track raw poses more tightly; lower values damp
    /// jitter harder. Per-frame jitter amplitude is bounded by roughly
    /// `alpha` times the raw delta.
    pub alpha: f32,
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self { alpha: 0.22 }
    }
}

impl SmootherConfig {
    /// Validates the smoothing factor.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidConfig`] if `alpha` is outside `(0, 1)`.
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(PlacementError::invalid_config(format!(
                "smoother alpha {} must be in (0, 1)",
                self.alpha
            )));
        }
        Ok(())
    }
}

/// Surface stability scoring configuration.
///
/// Frame-to-frame pose deltas are normalized against the reference
/// magnitudes below, clamped at `outlier_clamp`, and combined with the
/// position/angle weights into an instantaneous score in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityConfig {
    /// Reference position delta in meters (a delta of this size is "noisy").
    pub position_ref_m: f32,

    /// Reference angular delta in radians.
    pub angle_ref_rad: f32,

    /// Upper bound on each normalized delta, so one outlier frame cannot
    /// zero the score.
    pub outlier_clamp: f32,

    /// Weight of the normalized position delta.
    pub position_weight: f32,

    /// Weight of the normalized angular delta.
    pub angle_weight: f32,

    /// Blend factor of the running score toward the instantaneous score.
    pub score_alpha: f32,

    /// Running score at or above this classifies as `Good`.
    pub good_threshold: f32,

    /// Running score at or above this (and below `good_threshold`)
    /// classifies as `Medium`.
    pub medium_threshold: f32,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            position_ref_m: 0.008,
            angle_ref_rad: 0.09,
            outlier_clamp: 1.8,
            position_weight: 0.62,
            angle_weight: 0.38,
            score_alpha: 0.22,
            good_threshold: 0.68,
            medium_threshold: 0.42,
        }
    }
}

impl StabilityConfig {
    /// Validates reference magnitudes, weights, and thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidConfig`] if any value is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.position_ref_m <= 0.0 || !self.position_ref_m.is_finite() {
            return Err(PlacementError::invalid_config(
                "position_ref_m must be finite and > 0",
            ));
        }
        if self.angle_ref_rad <= 0.0 || !self.angle_ref_rad.is_finite() {
            return Err(PlacementError::invalid_config(
                "angle_ref_rad must be finite and > 0",
            ));
        }
        if self.outlier_clamp < 1.0 || !self.outlier_clamp.is_finite() {
            return Err(PlacementError::invalid_config(
                "outlier_clamp must be finite and >= 1",
            ));
        }
        if self.position_weight < 0.0 || self.angle_weight < 0.0 {
            return Err(PlacementError::invalid_config(
                "stability weights must be >= 0",
            ));
        }
        if !self.score_alpha.is_finite() || self.score_alpha <= 0.0 || self.score_alpha >= 1.0 {
            return Err(PlacementError::invalid_config(
                "score_alpha must be in (0, 1)",
            ));
        }
        if self.medium_threshold > self.good_threshold {
            return Err(PlacementError::invalid_config(
                "medium_threshold must not exceed good_threshold",
            ));
        }
        Ok(())
    }
}

/// Top-level placement configuration.
///
/// # Example
///
/// ```
/// use ar_placement::PlacementConfig;
///
/// let config = PlacementConfig::default();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PlacementConfig {
    /// Reticle pose smoothing.
    pub reticle: SmootherConfig,

    /// Surface stability scoring.
    pub stability: StabilityConfig,

    /// Anchor-tracked placement settings.
    pub anchor: AnchorConfig,

    /// Manual fallback placement settings.
    pub fallback: FallbackConfig,
}

impl PlacementConfig {
    /// Validates all sections.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidConfig`] if any section is out of range.
    pub fn validate(&self) -> Result<()> {
        self.reticle.validate()?;
        self.stability.validate()?;
        self.anchor.validate()?;
        self.fallback.validate()?;
        Ok(())
    }
}

/// Configuration for blending a locked pose toward a live anchor pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorConfig {
    /// Blend factor of the locked position toward the anchor position per
    /// frame, in `(0, 1)`. The anchor pose is approached, never snapped to,
    /// so drift correction stays invisible.
    pub position_alpha: f32,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            position_alpha: 0.18,
        }
    }
}

impl AnchorConfig {
    /// Validates the blend factor.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidConfig`] if `position_alpha` is
    /// outside `(0, 1)`.
    pub fn validate(&self) -> Result<()> {
        if !self.position_alpha.is_finite()
            || self.position_alpha <= 0.0
            || self.position_alpha >= 1.0
        {
            return Err(PlacementError::invalid_config(format!(
                "anchor position_alpha {} must be in (0, 1)",
                self.position_alpha
            )));
        }
        Ok(())
    }
}

/// Configuration for the no-surface manual placement path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Distance in front of the viewer at which the object is placed when
    /// no surface was ever found, in meters.
    pub place_distance_m: f32,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            place_distance_m: 1.2,
        }
    }
}

impl FallbackConfig {
    /// Validates the placement distance.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidConfig`] if the distance is not
    /// finite and > 0.
    pub fn validate(&self) -> Result<()> {
        if !self.place_distance_m.is_finite() || self.place_distance_m <= 0.0 {
            return Err(PlacementError::invalid_config(
                "fallback place_distance_m must be finite and > 0",
            ));
        }
        Ok(())
    }
}
