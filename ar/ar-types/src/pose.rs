//! Rigid poses in a tracking reference frame.

use glam::{Quat, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PoseError, Result};

/// A rigid pose: position plus unit-quaternion orientation.
///
/// Raw poses come from a platform hit-test each frame; smoothed and locked
/// poses are derived from them. Scale is deliberately *not* part of a pose —
/// it is carried separately so user scaling never disturbs position or
/// orientation (see [`PlacementTransform`](crate::PlacementTransform)).
///
/// # Example
///
/// ```
/// use ar_types::Pose;
/// use glam::Vec3;
///
/// let a = Pose::from_position(Vec3::ZERO);
/// let b = Pose::from_position(Vec3::new(1.0, 0.0, 0.0));
/// assert!((a.distance_to(&b) - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    /// Position in meters.
    #[cfg_attr(feature = "serde", serde(with = "vec3_serde"))]
    pub position: Vec3,

    /// Orientation as a unit quaternion.
    #[cfg_attr(feature = "serde", serde(with = "quat_serde"))]
    pub rotation: Quat,
}

impl Pose {
    /// The identity pose: origin, no rotation.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Creates a pose from position and rotation.
    #[must_use]
    pub const fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Creates a pose at the given position with identity rotation.
    #[must_use]
    pub const fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Euclidean distance between the two pose positions, in meters.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f32 {
        self.position.distance(other.position)
    }

    /// Angular distance between the two pose orientations, in radians.
    #[must_use]
    pub fn angle_to(&self, other: &Self) -> f32 {
        self.rotation.angle_between(other.rotation)
    }

    /// Blends this pose toward `target` by factor `t`.
    ///
    /// Position is linearly interpolated; orientation is spherically
    /// interpolated. `t = 0` keeps this pose, `t = 1` reaches the target.
    ///
    /// # Example
    ///
    /// ```
    /// use ar_types::Pose;
    /// use glam::Vec3;
    ///
    /// let a = Pose::from_position(Vec3::ZERO);
    /// let b = Pose::from_position(Vec3::new(2.0, 0.0, 0.0));
    /// let mid = a.lerp_toward(&b, 0.5);
    /// assert!((mid.position.x - 1.0).abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn lerp_toward(&self, target: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(target.position, t),
            rotation: self.rotation.slerp(target.rotation, t),
        }
    }

    /// Validates that all components are finite.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::NonFinite`] if position or rotation contains
    /// `NaN` or infinity.
    pub fn validate(&self) -> Result<()> {
        if !self.position.is_finite() {
            return Err(PoseError::non_finite("position"));
        }
        if !self.rotation.is_finite() {
            return Err(PoseError::non_finite("rotation"));
        }
        Ok(())
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The viewer (camera) pose, used for manual-fallback placement.
///
/// Follows the camera convention of looking down −Z: [`ViewerPose::forward`]
/// is the rotated −Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewerPose {
    /// Viewer world position in meters.
    #[cfg_attr(feature = "serde", serde(with = "vec3_serde"))]
    pub position: Vec3,

    /// Viewer world orientation.
    #[cfg_attr(feature = "serde", serde(with = "quat_serde"))]
    pub rotation: Quat,
}

impl ViewerPose {
    /// Creates a viewer pose from position and rotation.
    #[must_use]
    pub const fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// The viewing direction (rotated −Z axis), normalized.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// A point `distance` meters in front of the viewer.
    #[must_use]
    pub fn point_ahead(&self, distance: f32) -> Vec3 {
        self.position + self.forward() * distance
    }
}

#[cfg(feature = "serde")]
mod vec3_serde {
    use glam::Vec3;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Vec3Data {
        x: f32,
        y: f32,
        z: f32,
    }

    pub fn serialize<S: Serializer>(v: &Vec3, s: S) -> std::result::Result<S::Ok, S::Error> {
        Vec3Data {
            x: v.x,
            y: v.y,
            z: v.z,
        }
        .serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Vec3, D::Error> {
        let data = Vec3Data::deserialize(d)?;
        Ok(Vec3::new(data.x, data.y, data.z))
    }
}

#[cfg(feature = "serde")]
mod quat_serde {
    use glam::Quat;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct QuatData {
        x: f32,
        y: f32,
        z: f32,
        w: f32,
    }

    pub fn serialize<S: Serializer>(q: &Quat, s: S) -> std::result::Result<S::Ok, S::Error> {
        QuatData {
            x: q.x,
            y: q.y,
            z: q.z,
            w: q.w,
        }
        .serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Quat, D::Error> {
        let data = QuatData::deserialize(d)?;
        Ok(Quat::from_xyzw(data.x, data.y, data.z, data.w))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn pose_identity() {
        let p = Pose::IDENTITY;
        assert_eq!(p.position, Vec3::ZERO);
        assert_eq!(p.rotation, Quat::IDENTITY);
    }

    #[test]
    fn pose_default_is_identity() {
        assert_eq!(Pose::default(), Pose::IDENTITY);
    }

    #[test]
    fn pose_distance() {
        let a = Pose::from_position(Vec3::new(1.0, 0.0, 0.0));
        let b = Pose::from_position(Vec3::new(1.0, 3.0, 4.0));
        assert_relative_eq!(a.distance_to(&b), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn pose_angle() {
        let a = Pose::IDENTITY;
        let b = Pose::new(Vec3::ZERO, Quat::from_rotation_y(FRAC_PI_2));
        assert_relative_eq!(a.angle_to(&b), FRAC_PI_2, epsilon = 1e-5);
    }

    #[test]
    fn pose_lerp_endpoints() {
        let a = Pose::from_position(Vec3::ZERO);
        let b = Pose::new(Vec3::new(4.0, 0.0, 0.0), Quat::from_rotation_y(1.0));

        let start = a.lerp_toward(&b, 0.0);
        assert_relative_eq!(start.position.x, 0.0, epsilon = 1e-6);

        let end = a.lerp_toward(&b, 1.0);
        assert_relative_eq!(end.position.x, 4.0, epsilon = 1e-6);
        assert_relative_eq!(end.rotation.angle_between(b.rotation), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn pose_lerp_rotation_stays_unit() {
        let a = Pose::IDENTITY;
        let b = Pose::new(Vec3::ZERO, Quat::from_rotation_x(1.2));
        let mid = a.lerp_toward(&b, 0.3);
        assert_relative_eq!(mid.rotation.length(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn pose_validate_finite() {
        assert!(Pose::IDENTITY.validate().is_ok());
    }

    #[test]
    fn pose_validate_nan_position() {
        let p = Pose::from_position(Vec3::new(f32::NAN, 0.0, 0.0));
        assert!(p.validate().is_err());
    }

    #[test]
    fn pose_validate_nan_rotation() {
        let p = Pose::new(Vec3::ZERO, Quat::from_xyzw(f32::NAN, 0.0, 0.0, 1.0));
        assert!(p.validate().is_err());
    }

    #[test]
    fn viewer_forward_identity() {
        let v = ViewerPose::new(Vec3::ZERO, Quat::IDENTITY);
        assert_relative_eq!(v.forward().z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn viewer_forward_rotated() {
        // Yaw 90° left turns −Z into −X.
        let v = ViewerPose::new(Vec3::ZERO, Quat::from_rotation_y(FRAC_PI_2));
        assert_relative_eq!(v.forward().x, -1.0, epsilon = 1e-5);
        assert_relative_eq!(v.forward().z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn viewer_point_ahead() {
        let v = ViewerPose::new(Vec3::new(0.0, 1.6, 0.0), Quat::IDENTITY);
        let p = v.point_ahead(1.2);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 1.6, epsilon = 1e-6);
        assert_relative_eq!(p.z, -1.2, epsilon = 1e-6);
    }
}
