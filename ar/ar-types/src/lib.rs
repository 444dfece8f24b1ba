//! Platform-agnostic pose types for AR placement.
//!
//! This crate provides the foundational types shared between a platform
//! driver (`WebXR`, `ARKit`, `ARCore`, or a test harness) and the
//! placement-lifecycle core in `ar-placement`:
//!
//! - [`Pose`] - Position plus unit-quaternion orientation
//! - [`ViewerPose`] - Camera pose with a forward direction
//! - [`PlacementTransform`] - Pose plus independent uniform scale, for the
//!   render sink
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero platform dependencies**. It can be
//! used in:
//! - Real AR session drivers
//! - Offline replay and analysis tools
//! - Deterministic tests
//!
//! # Design Philosophy
//!
//! These are **pure value types**. Smoothing, stability scoring, and the
//! placement state machine belong in `ar-placement`. Scale is deliberately
//! separate from [`Pose`] so user scaling never perturbs position or
//! orientation.
//!
//! # Example
//!
//! ```
//! use ar_types::{Pose, PlacementTransform};
//! use glam::Vec3;
//!
//! let pose = Pose::from_position(Vec3::new(0.0, 1.0, -2.0));
//! let transform = PlacementTransform::from_pose(pose, 0.65);
//! assert!(transform.validate().is_ok());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod pose;
mod transform;

pub use error::{PoseError, Result};
pub use pose::{Pose, ViewerPose};
pub use transform::PlacementTransform;

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{PlacementTransform, Pose, PoseError, ViewerPose};
}
