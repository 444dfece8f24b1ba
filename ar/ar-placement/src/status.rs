//! Human-readable status events for a UI status line.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stability::StabilityClass;

/// State-transition messages for an observing UI.
///
/// Purely observational: dropping these events changes nothing in the
/// placement lifecycle. Each is also emitted as a `tracing` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusEvent {
    /// AR session started; scanning for surfaces.
    SessionStarted,

    /// AR session ended.
    SessionEnded,

    /// No surface this frame; searching.
    Searching,

    /// A surface is in view with the given stability.
    SurfaceQuality(StabilityClass),

    /// Placed on a detected surface; anchor requested.
    PlacedOnSurface,

    /// No surface was available; placed at a fixed distance in front of
    /// the viewer.
    PlacedInFront,

    /// The platform anchor was installed; tracking improved.
    AnchorInstalled,

    /// Anchor creation failed or is unsupported; the placement is static.
    AnchorUnavailable,

    /// Placement cleared; ready to place again.
    PlacementReset,
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SessionStarted => {
                write!(f, "Scanning surfaces. Pan the camera slowly across the wall.")
            }
            Self::SessionEnded => write!(f, "AR session ended."),
            Self::Searching => {
                write!(f, "Looking for a surface. Tap to place in front of the camera.")
            }
            Self::SurfaceQuality(StabilityClass::Good) => {
                write!(f, "Surface is stable. Ready to place.")
            }
            Self::SurfaceQuality(StabilityClass::Medium) => {
                write!(f, "Surface is fair. Waiting may improve stability.")
            }
            Self::SurfaceQuality(_) => {
                write!(f, "Surface is noisy. Move the camera and improve lighting.")
            }
            Self::PlacedOnSurface => write!(f, "Placed. Stabilizing position."),
            Self::PlacedInFront => {
                write!(f, "No surface found. Placed in front of the camera.")
            }
            Self::AnchorInstalled => write!(f, "Anchored. Stability improved."),
            Self::AnchorUnavailable => {
                write!(f, "Anchor unavailable. Placement is static and may drift slightly.")
            }
            Self::PlacementReset => write!(f, "Point at a wall and tap for a new position."),
        }
    }
}
