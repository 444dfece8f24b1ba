//! Exponential pose smoothing.

use ar_types::Pose;

use crate::config::SmootherConfig;

/// Exponentially smooths a stream of raw pose samples.
///
/// The first sample after construction, a [`reset`](PoseSmoother::reset), or
/// a detection gap initializes the smoothed pose directly to the raw sample,
/// so reacquisition never blends across a gap. Subsequent samples lerp the
/// position and slerp the orientation toward the raw values by the
/// configured alpha.
///
/// # Example
///
/// ```
/// use ar_placement::{PoseSmoother, SmootherConfig};
/// use ar_types::Pose;
/// use glam::Vec3;
///
/// let mut smoother = PoseSmoother::new(SmootherConfig::default());
///
/// // Cold start: output equals input exactly.
/// let first = smoother.update(&Pose::from_position(Vec3::X));
/// assert_eq!(first.position, Vec3::X);
/// ```
#[derive(Debug, Clone)]
pub struct PoseSmoother {
    config: SmootherConfig,
    smoothed: Option<Pose>,
}

impl PoseSmoother {
    /// Creates a smoother with the given configuration.
    #[must_use]
    pub const fn new(config: SmootherConfig) -> Self {
        Self {
            config,
            smoothed: None,
        }
    }

    /// Feeds one raw sample and returns the new smoothed pose.
    pub fn update(&mut self, raw: &Pose) -> Pose {
        let next = match self.smoothed {
            None => *raw,
            Some(previous) => previous.lerp_toward(raw, self.config.alpha),
        };
        self.smoothed = Some(next);
        next
    }

    /// The current smoothed pose, if any sample has arrived since the last
    /// reset.
    #[must_use]
    pub const fn current(&self) -> Option<Pose> {
        self.smoothed
    }

    /// Whether a smoothed pose is available.
    #[must_use]
    pub const fn has_pose(&self) -> bool {
        self.smoothed.is_some()
    }

    /// Drops the smoothed pose so the next sample re-initializes.
    ///
    /// Called whenever surface detection is lost.
    pub fn reset(&mut self) {
        self.smoothed = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::{Quat, Vec3};

    fn smoother() -> PoseSmoother {
        PoseSmoother::new(SmootherConfig::default())
    }

    #[test]
    fn first_sample_is_copied_exactly() {
        let mut s = smoother();
        let raw = Pose::new(Vec3::new(0.3, 1.0, -0.5), Quat::from_rotation_y(0.4));
        let out = s.update(&raw);
        assert_eq!(out, raw);
    }

    #[test]
    fn second_sample_blends_by_alpha() {
        let mut s = PoseSmoother::new(SmootherConfig { alpha: 0.25 });
        s.update(&Pose::from_position(Vec3::ZERO));
        let out = s.update(&Pose::from_position(Vec3::new(4.0, 0.0, 0.0)));
        assert_relative_eq!(out.position.x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn repeated_samples_converge_to_raw() {
        let mut s = smoother();
        let target = Pose::new(Vec3::new(1.0, 2.0, 3.0), Quat::from_rotation_x(0.8));
        s.update(&Pose::IDENTITY);
        for _ in 0..200 {
            s.update(&target);
        }
        let out = s.current().unwrap();
        assert_relative_eq!(out.position.distance(target.position), 0.0, epsilon = 1e-3);
        assert_relative_eq!(out.rotation.angle_between(target.rotation), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn reset_forces_reinitialization() {
        let mut s = smoother();
        s.update(&Pose::from_position(Vec3::new(10.0, 0.0, 0.0)));
        s.reset();
        assert!(!s.has_pose());

        // After the gap the next sample is copied, not blended toward the
        // stale pre-gap pose.
        let out = s.update(&Pose::from_position(Vec3::ZERO));
        assert_eq!(out.position, Vec3::ZERO);
    }

    #[test]
    fn current_is_none_before_first_sample() {
        assert!(smoother().current().is_none());
    }
}
