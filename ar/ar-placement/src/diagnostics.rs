//! Throttled diagnostics for an on-screen overlay.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::session::{PlacementMode, PlacementState};
use crate::stability::StabilityReport;

/// Default minimum interval between overlay updates, in seconds.
pub const DEFAULT_DIAG_INTERVAL_SECS: f64 = 0.18;

/// Frame counters and emission throttle for the diagnostics overlay.
#[derive(Debug, Clone)]
pub struct DiagnosticsTracker {
    frames: u64,
    hit_frames: u64,
    interval_secs: f64,
    last_emit_secs: Option<f64>,
}

impl DiagnosticsTracker {
    /// Creates a tracker with the given update interval.
    #[must_use]
    pub const fn new(interval_secs: f64) -> Self {
        Self {
            frames: 0,
            hit_frames: 0,
            interval_secs,
            last_emit_secs: None,
        }
    }

    /// Counts one frame tick.
    pub fn record_frame(&mut self) {
        self.frames += 1;
    }

    /// Counts one frame that produced a surface hit.
    pub fn record_hit(&mut self) {
        self.hit_frames += 1;
    }

    /// Total frames since construction.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames that produced a surface hit.
    #[must_use]
    pub const fn hit_frames(&self) -> u64 {
        self.hit_frames
    }

    /// Whether enough time has passed to emit another snapshot.
    ///
    /// Registers `now_secs` as the emission time when it returns true.
    pub fn should_emit(&mut self, now_secs: f64) -> bool {
        match self.last_emit_secs {
            Some(last) if now_secs - last < self.interval_secs => false,
            _ => {
                self.last_emit_secs = Some(now_secs);
                true
            }
        }
    }
}

impl Default for DiagnosticsTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DIAG_INTERVAL_SECS)
    }
}

/// One snapshot of session internals for the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagSnapshot {
    /// Total frames ticked.
    pub frames: u64,

    /// Frames with a surface hit.
    pub hit_frames: u64,

    /// Current placement state.
    pub state: PlacementState,

    /// How the current locked pose (if any) was derived.
    pub mode: PlacementMode,

    /// Current stability score and class.
    pub stability: StabilityReport,

    /// Whether an anchor is installed.
    pub anchor_active: bool,

    /// Whether the reticle is visible this frame.
    pub reticle_visible: bool,
}

impl fmt::Display for DiagSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "placement: {} ({})",
            self.state, self.mode
        )?;
        writeln!(f, "anchor: {}", if self.anchor_active { "active" } else { "none" })?;
        writeln!(
            f,
            "stability: {} (score {:.2})",
            self.stability.class, self.stability.score
        )?;
        writeln!(
            f,
            "reticle: {}",
            if self.reticle_visible { "visible" } else { "hidden" }
        )?;
        write!(f, "frames: {}, hit-frames: {}", self.frames, self.hit_frames)
    }
}
