//! Render-ready placement transforms.

use glam::{Mat4, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PoseError, Result};
use crate::pose::Pose;

/// A world transform handed to the render sink: pose plus uniform scale.
///
/// Scale is kept as an independent scalar so it can be changed live without
/// touching the pose, and recomposed on demand.
///
/// # Example
///
/// ```
/// use ar_types::{Pose, PlacementTransform};
/// use glam::Vec3;
///
/// let t = PlacementTransform::from_pose(Pose::from_position(Vec3::X), 0.8);
/// let m = t.to_matrix();
/// assert!((m.w_axis.x - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementTransform {
    /// Position and orientation.
    pub pose: Pose,

    /// Uniform scale factor, must be finite and > 0.
    pub scale: f32,
}

impl PlacementTransform {
    /// Creates a transform from a pose and uniform scale.
    #[must_use]
    pub const fn from_pose(pose: Pose, scale: f32) -> Self {
        Self { pose, scale }
    }

    /// Composes the transform into a column-major 4×4 matrix.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.pose.rotation,
            self.pose.position,
        )
    }

    /// Validates pose finiteness and scale positivity.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::NonFinite`] for non-finite pose components and
    /// [`PoseError::InvalidScale`] for a scale that is not finite and > 0.
    pub fn validate(&self) -> Result<()> {
        self.pose.validate()?;
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(PoseError::invalid_scale(self.scale));
        }
        Ok(())
    }
}
