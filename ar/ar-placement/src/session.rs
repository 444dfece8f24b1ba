//! The placement session: state machine and per-frame tick.
//!
//! All mutable placement state lives in one [`PlacementSession`] owned by
//! the caller's frame loop. UI events (place, reset, scale) mutate the same
//! session between frames; on a multi-threaded runtime all mutations must be
//! serialized through one logical frame-tick lock.

use std::fmt;

use ar_types::{PlacementTransform, Pose, ViewerPose};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::anchor::{AnchorHandle, AnchorRequest, AnchorResolution, AnchorTracker};
use crate::config::PlacementConfig;
use crate::diagnostics::{DiagSnapshot, DiagnosticsTracker};
use crate::error::{AnchorError, PlacementError, Result};
use crate::projector::project_locked;
use crate::smoother::PoseSmoother;
use crate::stability::{StabilityReport, StabilityScorer};
use crate::status::StatusEvent;

/// Where the placement lifecycle currently is.
///
/// Exactly one state holds at any time; the machine cycles indefinitely
/// between the three until session end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlacementState {
    /// No surface in view; hit-testing active, reticle hidden.
    #[default]
    Searching,

    /// A surface is in view; the reticle tracks the smoothed hit pose.
    Previewing,

    /// The object is placed; hit-testing for reticle purposes suspended.
    Locked,
}

impl fmt::Display for PlacementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Searching => "searching",
            Self::Previewing => "previewing",
            Self::Locked => "locked",
        };
        write!(f, "{name}")
    }
}

/// How the current locked pose was derived.
///
/// Set at lock time; may upgrade asynchronously from
/// [`SurfacePending`](PlacementMode::SurfacePending) to
/// [`SurfaceAnchored`](PlacementMode::SurfaceAnchored) when the anchor
/// resolves, or degrade to
/// [`SurfaceStatic`](PlacementMode::SurfaceStatic) when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlacementMode {
    /// Nothing is placed.
    #[default]
    None,

    /// Placed on a surface hit; anchor creation in flight.
    SurfacePending,

    /// Placed on a surface hit and tracked by a platform anchor.
    SurfaceAnchored,

    /// Placed on a surface hit without an anchor; the static pose may
    /// drift under the platform's absolute-pose refinement.
    SurfaceStatic,

    /// Placed at a fixed distance in front of the viewer because no
    /// surface was found.
    ManualFallback,
}

impl fmt::Display for PlacementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::SurfacePending => "surface-pending",
            Self::SurfaceAnchored => "surface-anchored",
            Self::SurfaceStatic => "surface-static",
            Self::ManualFallback => "manual-fallback",
        };
        write!(f, "{name}")
    }
}

/// Per-frame input from the platform driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Best hit-test pose this frame, if any.
    pub hit: Option<Pose>,

    /// The installed anchor's pose this frame, read from the platform
    /// frame. When `None`, the core falls back to asking the handle
    /// directly. Ignored while no anchor is installed.
    pub anchor_pose: Option<Pose>,
}

impl FrameInput {
    /// A frame with no surface hit.
    #[must_use]
    pub const fn no_hit() -> Self {
        Self {
            hit: None,
            anchor_pose: None,
        }
    }

    /// A frame with the given hit pose.
    #[must_use]
    pub const fn with_hit(pose: Pose) -> Self {
        Self {
            hit: Some(pose),
            anchor_pose: None,
        }
    }
}

/// Per-frame output for the render sink.
#[derive(Debug, Clone, Copy)]
pub struct FrameOutput {
    /// State after this tick.
    pub state: PlacementState,

    /// Reticle transform (unit scale), visible only while previewing.
    pub reticle: Option<PlacementTransform>,

    /// Placed-object transform, present only while locked.
    pub placed: Option<PlacementTransform>,

    /// Stability after this tick.
    pub stability: StabilityReport,

    /// Status message if it changed this tick.
    pub status: Option<StatusEvent>,
}

/// Result of a user "place now" trigger.
#[derive(Debug, Clone, Copy)]
pub struct PlaceOutcome {
    /// Mode the placement locked in.
    pub mode: PlacementMode,

    /// Anchor-creation token the driver must fulfil via
    /// [`PlacementSession::resolve_anchor`]. `None` on the manual
    /// fallback path, where no anchor is attempted.
    pub anchor_request: Option<AnchorRequest>,

    /// Status message for the UI.
    pub status: StatusEvent,
}

/// Owns the full placement lifecycle for one AR session.
///
/// Generic over the platform's anchor handle type; tests use a mock.
///
/// # Example
///
/// ```
/// use ar_placement::{FrameInput, PlacementConfig, PlacementSession, PlacementState};
/// use ar_placement::NoAnchor;
/// use ar_types::Pose;
/// use glam::Vec3;
///
/// let mut session: PlacementSession<NoAnchor> =
///     PlacementSession::new(PlacementConfig::default()).unwrap();
/// session.begin();
///
/// let out = session.tick(&FrameInput::with_hit(Pose::from_position(Vec3::NEG_Z)));
/// assert_eq!(out.state, PlacementState::Previewing);
/// assert!(out.reticle.is_some());
/// ```
#[derive(Debug)]
pub struct PlacementSession<A: AnchorHandle> {
    config: PlacementConfig,
    state: PlacementState,
    mode: PlacementMode,
    smoother: PoseSmoother,
    scorer: StabilityScorer,
    anchors: AnchorTracker<A>,
    locked_pose: Option<Pose>,
    scale_percent: u32,
    diagnostics: DiagnosticsTracker,
    last_status: Option<StatusEvent>,
}

impl<A: AnchorHandle> PlacementSession<A> {
    /// Creates a session with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidConfig`] if the configuration is
    /// out of range.
    pub fn new(config: PlacementConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            smoother: PoseSmoother::new(config.reticle),
            scorer: StabilityScorer::new(config.stability),
            anchors: AnchorTracker::new(),
            config,
            state: PlacementState::Searching,
            mode: PlacementMode::None,
            locked_pose: None,
            scale_percent: 100,
            diagnostics: DiagnosticsTracker::default(),
            last_status: None,
        })
    }

    /// Resets for a fresh AR session. User scale survives.
    pub fn begin(&mut self) -> StatusEvent {
        info!("AR session started");
        self.clear_placement_state();
        self.emit(StatusEvent::SessionStarted)
    }

    /// Tears down at session end: releases the anchor and clears all
    /// derived state. User scale survives.
    pub fn end(&mut self) -> StatusEvent {
        info!("AR session ended");
        self.clear_placement_state();
        self.emit(StatusEvent::SessionEnded)
    }

    /// Advances one frame.
    ///
    /// While not locked this drives searching/previewing from the hit-test
    /// input; while locked it projects the placed object's transform.
    pub fn tick(&mut self, input: &FrameInput) -> FrameOutput {
        self.diagnostics.record_frame();

        if self.state == PlacementState::Locked {
            return self.tick_locked(input);
        }

        match input.hit {
            Some(raw) => {
                self.diagnostics.record_hit();
                let stability = self.scorer.update(&raw);
                let smoothed = self.smoother.update(&raw);
                if self.state != PlacementState::Previewing {
                    debug!("surface acquired");
                }
                self.state = PlacementState::Previewing;
                let status = self.emit_changed(StatusEvent::SurfaceQuality(stability.class));
                FrameOutput {
                    state: self.state,
                    reticle: Some(PlacementTransform::from_pose(smoothed, 1.0)),
                    placed: None,
                    stability,
                    status,
                }
            }
            None => {
                if self.state == PlacementState::Previewing {
                    debug!("surface lost");
                }
                // Re-acquisition must restart cleanly rather than smooth
                // across the gap.
                self.smoother.reset();
                self.scorer.reset();
                self.state = PlacementState::Searching;
                let status = self.emit_changed(StatusEvent::Searching);
                FrameOutput {
                    state: self.state,
                    reticle: None,
                    placed: None,
                    stability: self.scorer.report(),
                    status,
                }
            }
        }
    }

    /// Handles the user "place now" trigger.
    ///
    /// With a live reticle, the smoothed pose is snapshotted as the lock
    /// pose and an anchor request is issued. Without one, the object is
    /// placed at a fixed distance in front of the viewer with the viewer's
    /// orientation; no anchor is attempted.
    pub fn place(&mut self, viewer: &ViewerPose) -> PlaceOutcome {
        let reticle_pose = if self.state == PlacementState::Previewing {
            self.smoother.current()
        } else {
            None
        };

        if let Some(pose) = reticle_pose {
            self.locked_pose = Some(pose);
            self.mode = PlacementMode::SurfacePending;
            self.state = PlacementState::Locked;
            let request = self.anchors.begin_request();
            info!(mode = %self.mode, "placed on surface");
            PlaceOutcome {
                mode: self.mode,
                anchor_request: Some(request),
                status: self.emit(StatusEvent::PlacedOnSurface),
            }
        } else {
            // Fallback placements are never anchor-tracked.
            self.anchors.invalidate();
            self.locked_pose = Some(Pose::new(
                viewer.point_ahead(self.config.fallback.place_distance_m),
                viewer.rotation,
            ));
            self.mode = PlacementMode::ManualFallback;
            self.state = PlacementState::Locked;
            info!(mode = %self.mode, "placed in front of viewer");
            PlaceOutcome {
                mode: self.mode,
                anchor_request: None,
                status: self.emit(StatusEvent::PlacedInFront),
            }
        }
    }

    /// Applies the platform's anchor-creation result.
    ///
    /// Stale results are released and discarded; failure degrades the mode
    /// to [`PlacementMode::SurfaceStatic`], which is informational, not
    /// fatal.
    pub fn resolve_anchor(
        &mut self,
        request: AnchorRequest,
        result: std::result::Result<A, AnchorError>,
    ) -> AnchorResolution {
        let resolution = self.anchors.resolve(request, result);
        if self.state == PlacementState::Locked {
            match resolution {
                AnchorResolution::Installed => {
                    self.mode = PlacementMode::SurfaceAnchored;
                    self.emit(StatusEvent::AnchorInstalled);
                }
                AnchorResolution::Failed => {
                    self.mode = PlacementMode::SurfaceStatic;
                    self.emit(StatusEvent::AnchorUnavailable);
                }
                AnchorResolution::Stale => {}
            }
        }
        resolution
    }

    /// Handles the user "place again" trigger: releases any anchor, clears
    /// the lock, and returns to searching. User scale survives.
    pub fn reset_placement(&mut self) -> StatusEvent {
        info!("placement reset");
        self.clear_placement_state();
        self.emit(StatusEvent::PlacementReset)
    }

    /// Sets the user scale as a UI percentage (100 = natural size).
    ///
    /// Scale applies live to every placement transform and is never reset
    /// by placement, lock, or session transitions.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidScalePercent`] for `percent` < 1.
    pub fn set_scale_percent(&mut self, percent: u32) -> Result<()> {
        if percent < 1 {
            return Err(PlacementError::invalid_scale_percent(percent));
        }
        self.scale_percent = percent;
        Ok(())
    }

    /// Current user scale percentage.
    #[must_use]
    pub const fn scale_percent(&self) -> u32 {
        self.scale_percent
    }

    /// Current user scale factor.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn scale_factor(&self) -> f32 {
        self.scale_percent as f32 / 100.0
    }

    /// Current placement state.
    #[must_use]
    pub const fn state(&self) -> PlacementState {
        self.state
    }

    /// How the current locked pose was derived.
    #[must_use]
    pub const fn mode(&self) -> PlacementMode {
        self.mode
    }

    /// Current stability report.
    #[must_use]
    pub const fn stability(&self) -> StabilityReport {
        self.scorer.report()
    }

    /// Current smoothed reticle pose, if previewing.
    #[must_use]
    pub const fn reticle_pose(&self) -> Option<Pose> {
        self.smoother.current()
    }

    /// Whether an anchor is installed.
    #[must_use]
    pub const fn anchor_active(&self) -> bool {
        self.anchors.is_active()
    }

    /// Throttled diagnostics snapshot, at most one per configured
    /// interval.
    pub fn diagnostics(&mut self, now_secs: f64) -> Option<DiagSnapshot> {
        if !self.diagnostics.should_emit(now_secs) {
            return None;
        }
        Some(DiagSnapshot {
            frames: self.diagnostics.frames(),
            hit_frames: self.diagnostics.hit_frames(),
            state: self.state,
            mode: self.mode,
            stability: self.scorer.report(),
            anchor_active: self.anchors.is_active(),
            reticle_visible: self.state == PlacementState::Previewing,
        })
    }

    fn tick_locked(&mut self, input: &FrameInput) -> FrameOutput {
        let anchor_pose = if self.anchors.is_active() {
            input.anchor_pose.or_else(|| self.anchors.active_pose())
        } else {
            None
        };

        let alpha = self.config.anchor.position_alpha;
        let scale = self.scale_factor();
        let placed = self
            .locked_pose
            .as_mut()
            .map(|pose| project_locked(pose, anchor_pose.as_ref(), alpha, scale));

        FrameOutput {
            state: self.state,
            reticle: None,
            placed,
            stability: self.scorer.report(),
            status: None,
        }
    }

    fn clear_placement_state(&mut self) {
        self.anchors.invalidate();
        self.smoother.reset();
        self.scorer.reset();
        self.locked_pose = None;
        self.state = PlacementState::Searching;
        self.mode = PlacementMode::None;
    }

    fn emit(&mut self, event: StatusEvent) -> StatusEvent {
        info!(status = %event, "status");
        self.last_status = Some(event);
        event
    }

    fn emit_changed(&mut self, event: StatusEvent) -> Option<StatusEvent> {
        if self.last_status == Some(event) {
            return None;
        }
        Some(self.emit(event))
    }
}

/// Anchor handle for drivers without anchor capability.
///
/// Such a driver answers every [`AnchorRequest`] with
/// [`AnchorError::Unsupported`], so this type is never instantiated; it
/// only satisfies the session's type parameter.
#[derive(Debug, Clone, Copy)]
pub enum NoAnchor {}

impl AnchorHandle for NoAnchor {
    fn pose(&self) -> Option<Pose> {
        match *self {}
    }

    fn release(&mut self) {
        match *self {}
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::anchor::tests::MockAnchor;
    use crate::stability::StabilityClass;
    use approx::assert_relative_eq;
    use glam::{Quat, Vec3};

    fn session() -> PlacementSession<MockAnchor> {
        let mut s = PlacementSession::new(PlacementConfig::default()).unwrap();
        s.begin();
        s
    }

    fn viewer_at_origin() -> ViewerPose {
        ViewerPose::new(Vec3::ZERO, Quat::IDENTITY)
    }

    fn hit_at(x: f32) -> FrameInput {
        FrameInput::with_hit(Pose::from_position(Vec3::new(x, 0.0, -1.0)))
    }

    #[test]
    fn starts_searching() {
        let s = session();
        assert_eq!(s.state(), PlacementState::Searching);
        assert_eq!(s.mode(), PlacementMode::None);
    }

    #[test]
    fn hit_moves_to_previewing() {
        let mut s = session();
        let out = s.tick(&hit_at(0.0));
        assert_eq!(out.state, PlacementState::Previewing);
        assert!(out.reticle.is_some());
        assert!(out.placed.is_none());
        assert_eq!(out.stability.class, StabilityClass::Good);
    }

    #[test]
    fn detection_loss_resets_continuity() {
        let mut s = session();
        for _ in 0..5 {
            s.tick(&hit_at(0.0));
        }
        assert_eq!(s.state(), PlacementState::Previewing);

        for _ in 0..3 {
            let out = s.tick(&FrameInput::no_hit());
            assert_eq!(out.state, PlacementState::Searching);
            assert!(out.reticle.is_none());
        }
        assert_eq!(s.stability().class, StabilityClass::Unknown);
        assert_eq!(s.stability().score, 0.0);
        assert!(s.reticle_pose().is_none());

        // Reacquisition restarts cleanly: first pose is copied exactly.
        let out = s.tick(&hit_at(3.0));
        assert_eq!(out.reticle.unwrap().pose.position.x, 3.0);
    }

    #[test]
    fn place_from_reticle_locks_smoothed_pose() {
        let mut s = session();
        s.tick(&hit_at(1.0));
        let expected = s.reticle_pose().unwrap();

        let outcome = s.place(&viewer_at_origin());
        assert_eq!(outcome.mode, PlacementMode::SurfacePending);
        assert!(outcome.anchor_request.is_some());
        assert_eq!(s.state(), PlacementState::Locked);

        let out = s.tick(&FrameInput::no_hit());
        assert_eq!(out.placed.unwrap().pose, expected);
    }

    #[test]
    fn place_without_reticle_falls_back_in_front_of_viewer() {
        let mut s = session();
        s.tick(&FrameInput::no_hit());

        let rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let viewer = ViewerPose::new(Vec3::new(0.0, 1.5, 0.0), rotation);
        let outcome = s.place(&viewer);

        assert_eq!(outcome.mode, PlacementMode::ManualFallback);
        assert!(outcome.anchor_request.is_none());

        let out = s.tick(&FrameInput::no_hit());
        let placed = out.placed.unwrap();
        // 1.2 m along the viewer's forward (−X after a 90° yaw), facing as
        // the viewer does.
        assert_relative_eq!(placed.pose.position.x, -1.2, epsilon = 1e-5);
        assert_relative_eq!(placed.pose.position.y, 1.5, epsilon = 1e-5);
        assert_eq!(placed.pose.rotation, rotation);
    }

    #[test]
    fn place_reset_place_yields_second_pose_only() {
        let mut s = session();
        s.tick(&hit_at(1.0));
        s.place(&viewer_at_origin());

        s.reset_placement();
        assert_eq!(s.state(), PlacementState::Searching);

        s.tick(&hit_at(-2.0));
        s.place(&viewer_at_origin());

        let out = s.tick(&FrameInput::no_hit());
        // Pose Q exactly, never a blend of P and Q.
        assert_eq!(out.placed.unwrap().pose.position.x, -2.0);
    }

    #[test]
    fn anchor_install_upgrades_mode() {
        let mut s = session();
        s.tick(&hit_at(0.0));
        let request = s.place(&viewer_at_origin()).anchor_request.unwrap();

        let (anchor, released) = MockAnchor::new(None);
        assert_eq!(s.resolve_anchor(request, Ok(anchor)), AnchorResolution::Installed);
        assert_eq!(s.mode(), PlacementMode::SurfaceAnchored);
        assert!(s.anchor_active());
        assert_eq!(released.get(), 0);
    }

    #[test]
    fn anchor_failure_degrades_to_static() {
        let mut s = session();
        s.tick(&hit_at(0.0));
        let request = s.place(&viewer_at_origin()).anchor_request.unwrap();

        assert_eq!(
            s.resolve_anchor(request, Err(AnchorError::Unsupported)),
            AnchorResolution::Failed
        );
        assert_eq!(s.mode(), PlacementMode::SurfaceStatic);
        assert!(!s.anchor_active());

        // Static placement still renders.
        let out = s.tick(&FrameInput::no_hit());
        assert!(out.placed.is_some());
    }

    #[test]
    fn anchor_resolving_after_reset_is_released_not_installed() {
        let mut s = session();
        s.tick(&hit_at(0.0));
        let request = s.place(&viewer_at_origin()).anchor_request.unwrap();

        s.reset_placement();

        let (anchor, released) = MockAnchor::new(None);
        assert_eq!(s.resolve_anchor(request, Ok(anchor)), AnchorResolution::Stale);
        assert!(!s.anchor_active());
        assert_eq!(released.get(), 1);
        assert_eq!(s.mode(), PlacementMode::None);
    }

    #[test]
    fn locked_with_anchor_blends_position_keeps_orientation() {
        let mut s = session();
        let rotation = Quat::from_rotation_x(0.3);
        s.tick(&FrameInput::with_hit(Pose::new(Vec3::ZERO, rotation)));
        let request = s.place(&viewer_at_origin()).anchor_request.unwrap();

        let anchor_pose = Pose::new(Vec3::new(1.0, 0.0, 0.0), Quat::from_rotation_z(1.0));
        let (anchor, _) = MockAnchor::new(Some(anchor_pose));
        s.resolve_anchor(request, Ok(anchor));

        let out = s.tick(&FrameInput::no_hit());
        let placed = out.placed.unwrap();
        assert_relative_eq!(placed.pose.position.x, 0.18, epsilon = 1e-5);
        assert_eq!(placed.pose.rotation, rotation);
    }

    #[test]
    fn frame_anchor_pose_takes_precedence_over_handle() {
        let mut s = session();
        s.tick(&hit_at(0.0));
        let request = s.place(&viewer_at_origin()).anchor_request.unwrap();
        let (anchor, _) = MockAnchor::new(Some(Pose::from_position(Vec3::new(100.0, 0.0, 0.0))));
        s.resolve_anchor(request, Ok(anchor));

        let input = FrameInput {
            hit: None,
            anchor_pose: Some(Pose::from_position(Vec3::new(1.0, 0.0, -1.0))),
        };
        let out = s.tick(&input);
        // Blended toward 1.0, not 100.0.
        assert!(out.placed.unwrap().pose.position.x < 1.0);
    }

    #[test]
    fn scale_change_while_anchored_only_affects_scale() {
        let mut s = session();
        s.tick(&hit_at(0.5));
        let request = s.place(&viewer_at_origin()).anchor_request.unwrap();
        let (anchor, _) = MockAnchor::new(None);
        s.resolve_anchor(request, Ok(anchor));

        let before = s.tick(&FrameInput::no_hit()).placed.unwrap();
        s.set_scale_percent(180).unwrap();
        let after = s.tick(&FrameInput::no_hit()).placed.unwrap();

        assert_eq!(before.pose, after.pose);
        assert_relative_eq!(after.scale, 1.8, epsilon = 1e-6);
    }

    #[test]
    fn scale_survives_reset_and_session_cycle() {
        let mut s = session();
        s.set_scale_percent(70).unwrap();
        s.tick(&hit_at(0.0));
        s.place(&viewer_at_origin());
        s.reset_placement();
        s.end();
        s.begin();
        assert_eq!(s.scale_percent(), 70);
    }

    #[test]
    fn scale_percent_zero_rejected() {
        let mut s = session();
        assert!(s.set_scale_percent(0).is_err());
        assert_eq!(s.scale_percent(), 100);
    }

    #[test]
    fn hit_input_ignored_while_locked() {
        let mut s = session();
        s.tick(&hit_at(0.0));
        s.place(&viewer_at_origin());

        let out = s.tick(&hit_at(5.0));
        assert_eq!(out.state, PlacementState::Locked);
        assert!(out.reticle.is_none());
        // The lock pose is unmoved by the ignored hit.
        assert_eq!(out.placed.unwrap().pose.position.x, 0.0);
    }

    #[test]
    fn place_while_locked_uses_fallback_path() {
        let mut s = session();
        s.tick(&hit_at(0.0));
        s.place(&viewer_at_origin());

        // Reticle is suspended while locked, so a second trigger re-places
        // in front of the viewer.
        let outcome = s.place(&viewer_at_origin());
        assert_eq!(outcome.mode, PlacementMode::ManualFallback);
        assert!(!s.anchor_active());
    }

    #[test]
    fn session_end_releases_anchor_and_clears() {
        let mut s = session();
        s.tick(&hit_at(0.0));
        let request = s.place(&viewer_at_origin()).anchor_request.unwrap();
        let (anchor, released) = MockAnchor::new(None);
        s.resolve_anchor(request, Ok(anchor));

        s.end();
        assert_eq!(released.get(), 1);
        assert_eq!(s.state(), PlacementState::Searching);
        assert_eq!(s.mode(), PlacementMode::None);
        assert!(!s.anchor_active());
    }

    #[test]
    fn status_only_emitted_on_change() {
        let mut s = session();
        let first = s.tick(&FrameInput::no_hit());
        assert_eq!(first.status, Some(StatusEvent::Searching));
        let second = s.tick(&FrameInput::no_hit());
        assert_eq!(second.status, None);
    }

    #[test]
    fn diagnostics_throttle_and_counters() {
        let mut s = session();
        s.tick(&hit_at(0.0));
        s.tick(&FrameInput::no_hit());

        let snapshot = s.diagnostics(0.0).unwrap();
        assert_eq!(snapshot.frames, 2);
        assert_eq!(snapshot.hit_frames, 1);
        assert!(s.diagnostics(0.05).is_none());
        assert!(s.diagnostics(0.3).is_some());
    }
}
