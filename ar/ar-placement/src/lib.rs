//! Pose stabilization and placement lifecycle for AR surface placement.
//!
//! This crate is the core of an AR viewer that pins a virtual object to a
//! real-world surface: it smooths noisy per-frame hit-test poses into a
//! usable reticle, scores surface stability, runs the
//! searching → previewing → locked placement lifecycle, races async anchor
//! creation, and projects the placed object's transform every frame.
//!
//! # Components
//!
//! - [`PoseSmoother`] - Exponential smoothing of position/orientation samples
//! - [`StabilityScorer`] - Bounded stability score from frame-to-frame deltas
//! - [`PlacementSession`] - The placement state machine and session context
//! - [`AnchorTracker`] - Generation-guarded async anchor lifecycle
//! - [`project_locked`] - Final transform of the placed object each frame
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero platform dependencies**: no
//! rendering, no session bootstrap, no async runtime. The platform driver
//! owns the frame loop and feeds [`FrameInput`] each tick; anchor creation
//! results are applied opportunistically via
//! [`PlacementSession::resolve_anchor`] whenever they arrive.
//!
//! All state is owned by one [`PlacementSession`]. The model is
//! single-threaded and frame-driven; on a multi-threaded runtime, serialize
//! every mutation through one logical frame-tick lock.
//!
//! # Example
//!
//! ```
//! use ar_placement::{FrameInput, NoAnchor, PlacementConfig, PlacementSession};
//! use ar_types::{Pose, ViewerPose};
//! use glam::{Quat, Vec3};
//!
//! let mut session: PlacementSession<NoAnchor> =
//!     PlacementSession::new(PlacementConfig::default()).unwrap();
//! session.begin();
//!
//! // Frames with a surface hit drive the reticle.
//! let hit = Pose::from_position(Vec3::new(0.0, 1.0, -2.0));
//! let out = session.tick(&FrameInput::with_hit(hit));
//! assert!(out.reticle.is_some());
//!
//! // The user commits; the smoothed pose is locked.
//! let viewer = ViewerPose::new(Vec3::ZERO, Quat::IDENTITY);
//! let outcome = session.place(&viewer);
//! assert!(outcome.anchor_request.is_some());
//! ```
//!
//! # Quality Standards
//!
//! - Zero clippy/doc warnings
//! - Zero `unwrap`/`expect` in library code

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod anchor;
mod config;
mod diagnostics;
mod error;
mod projector;
mod session;
mod smoother;
mod stability;
mod status;

// Re-export anchor lifecycle types
pub use anchor::{AnchorHandle, AnchorRequest, AnchorResolution, AnchorTracker};

// Re-export configuration types
pub use config::{
    AnchorConfig, FallbackConfig, PlacementConfig, SmootherConfig, StabilityConfig,
};

// Re-export diagnostics types
pub use diagnostics::{DiagSnapshot, DiagnosticsTracker, DEFAULT_DIAG_INTERVAL_SECS};

// Re-export error types
pub use error::{AnchorError, PlacementError, Result};

// Re-export projector
pub use projector::project_locked;

// Re-export session types
pub use session::{
    FrameInput, FrameOutput, NoAnchor, PlaceOutcome, PlacementMode, PlacementSession,
    PlacementState,
};

// Re-export smoothing types
pub use smoother::PoseSmoother;

// Re-export stability types
pub use stability::{StabilityClass, StabilityReport, StabilityScorer};

// Re-export status types
pub use status::StatusEvent;

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        AnchorError, AnchorHandle, AnchorRequest, AnchorResolution, AnchorTracker, FrameInput,
        FrameOutput, NoAnchor, PlaceOutcome, PlacementConfig, PlacementError, PlacementMode,
        PlacementSession, PlacementState, PoseSmoother, StabilityClass, StabilityReport,
        StabilityScorer, StatusEvent, project_locked,
    };
    pub use ar_types::{PlacementTransform, Pose, ViewerPose};
}
