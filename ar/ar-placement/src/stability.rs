//! Surface stability scoring from frame-to-frame pose deltas.

use std::fmt;

use ar_types::Pose;
use serde::{Deserialize, Serialize};

use crate::config::StabilityConfig;

/// Three-level stability classification of the running score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StabilityClass {
    /// No surface observed since the last reset.
    #[default]
    Unknown,

    /// The surface pose is steady; placement will look solid.
    Good,

    /// Noticeable jitter; placement works but may wobble.
    Medium,

    /// Heavy jitter; the user should move the camera or improve lighting.
    Poor,
}

impl StabilityClass {
    /// RGB color hint for a surface-highlight overlay.
    ///
    /// Good is green, poor is red, everything else is yellow.
    #[must_use]
    pub const fn color_hint(self) -> [u8; 3] {
        match self {
            Self::Good => [0x17, 0xe6, 0xa1],
            Self::Poor => [0xff, 0x5f, 0x57],
            Self::Medium | Self::Unknown => [0xff, 0xc2, 0x4d],
        }
    }
}

impl fmt::Display for StabilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Good => "good",
            Self::Medium => "medium",
            Self::Poor => "poor",
        };
        write!(f, "{name}")
    }
}

/// The current stability score and its classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityReport {
    /// Running score in `[0, 1]`, exponentially smoothed.
    pub score: f32,

    /// Classification of the running score.
    pub class: StabilityClass,
}

impl Default for StabilityReport {
    fn default() -> Self {
        Self {
            score: 0.0,
            class: StabilityClass::Unknown,
        }
    }
}

/// Scores surface stability from consecutive raw hit poses.
///
/// Position and angular deltas are normalized against small reference
/// magnitudes, clamped so a single outlier frame cannot zero the score, and
/// combined with position weighted more heavily than rotation. The running
/// score is exponentially smoothed across frames.
///
/// The first sample after a reset scores 1.0 / [`StabilityClass::Good`]
/// unconditionally: with no previous pose there is no delta to judge, and a
/// cold-start "poor" flash would mislead the user.
///
/// The score is user feedback and a future lock-worthiness gate; it never
/// blocks placement by itself.
///
/// # Example
///
/// ```
/// use ar_placement::{StabilityScorer, StabilityClass, StabilityConfig};
/// use ar_types::Pose;
/// use glam::Vec3;
///
/// let mut scorer = StabilityScorer::new(StabilityConfig::default());
/// let report = scorer.update(&Pose::from_position(Vec3::ZERO));
/// assert_eq!(report.class, StabilityClass::Good);
/// assert_eq!(report.score, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct StabilityScorer {
    config: StabilityConfig,
    previous: Option<Pose>,
    report: StabilityReport,
}

impl StabilityScorer {
    /// Creates a scorer with the given configuration.
    #[must_use]
    pub const fn new(config: StabilityConfig) -> Self {
        Self {
            config,
            previous: None,
            report: StabilityReport {
                score: 0.0,
                class: StabilityClass::Unknown,
            },
        }
    }

    /// Feeds one raw pose sample and returns the updated report.
    pub fn update(&mut self, raw: &Pose) -> StabilityReport {
        let Some(previous) = self.previous.replace(*raw) else {
            self.report = StabilityReport {
                score: 1.0,
                class: StabilityClass::Good,
            };
            return self.report;
        };

        let instant = self.instantaneous_score(&previous, raw);
        let score = self.report.score
            + (instant - self.report.score) * self.config.score_alpha;
        self.report = StabilityReport {
            score,
            class: self.classify(score),
        };
        self.report
    }

    /// Instantaneous (unsmoothed) score for one pose delta.
    ///
    /// Exposed so the clamping and weighting behavior can be tested
    /// independently of the running average.
    #[must_use]
    pub fn instantaneous_score(&self, previous: &Pose, current: &Pose) -> f32 {
        let normalized_position = (previous.distance_to(current) / self.config.position_ref_m)
            .min(self.config.outlier_clamp);
        let normalized_angle = (previous.angle_to(current) / self.config.angle_ref_rad)
            .min(self.config.outlier_clamp);

        (1.0 - (self.config.position_weight * normalized_position
            + self.config.angle_weight * normalized_angle))
            .max(0.0)
    }

    /// The current report without feeding a sample.
    #[must_use]
    pub const fn report(&self) -> StabilityReport {
        self.report
    }

    /// Clears all continuity state back to unknown / 0.
    ///
    /// Called whenever surface detection is lost.
    pub fn reset(&mut self) {
        self.previous = None;
        self.report = StabilityReport {
            score: 0.0,
            class: StabilityClass::Unknown,
        };
    }

    fn classify(&self, score: f32) -> StabilityClass {
        if score >= self.config.good_threshold {
            StabilityClass::Good
        } else if score >= self.config.medium_threshold {
            StabilityClass::Medium
        } else {
            StabilityClass::Poor
        }
    }
}
