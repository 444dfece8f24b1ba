//! Final transform projection for a locked placement.

use ar_types::{PlacementTransform, Pose};

/// Computes the transform to render a locked object this frame.
///
/// With a live anchor pose, the locked *position* is blended toward the
/// anchor's position by `anchor_alpha` so drift corrections never snap
/// visibly. The locked *orientation* is never re-derived from the anchor:
/// re-orienting from anchor updates can flip a wall-mounted object.
///
/// Without an anchor pose (static fallback, anchor denied, or the anchor
/// momentarily untracked) the locked pose renders unchanged.
///
/// Scale is the live user scale, applied every frame rather than frozen at
/// lock time.
pub fn project_locked(
    locked: &mut Pose,
    anchor_pose: Option<&Pose>,
    anchor_alpha: f32,
    scale: f32,
) -> PlacementTransform {
    if let Some(anchor) = anchor_pose {
        locked.position = locked.position.lerp(anchor.position, anchor_alpha);
    }
    PlacementTransform::from_pose(*locked, scale)
}
