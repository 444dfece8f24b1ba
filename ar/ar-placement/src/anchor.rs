//! Anchor lifecycle management.
//!
//! Anchor creation is asynchronous on every AR platform: the session asks
//! for an anchor at lock time and the result arrives on a later frame, by
//! which point the user may have reset or re-placed. A monotonically
//! increasing generation counter guards against installing such stale
//! results; there is no hard cancellation of in-flight work, only post-hoc
//! discard.

use ar_types::Pose;
use tracing::{debug, warn};

use crate::error::AnchorError;

/// A platform-tracked anchor resource.
///
/// Implemented by the platform driver; the core only reads the live pose
/// and releases the resource when done. [`release`](AnchorHandle::release)
/// must be idempotent.
pub trait AnchorHandle {
    /// The anchor's live pose this frame, if the tracking system has one.
    fn pose(&self) -> Option<Pose>;

    /// Releases the underlying platform resource.
    fn release(&mut self);
}

/// Token identifying one anchor-creation request.
///
/// Handed to the platform driver when a placement wants an anchor; passed
/// back to [`AnchorTracker::resolve`] together with the creation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorRequest {
    generation: u64,
}

impl AnchorRequest {
    /// The generation this request was issued under.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Outcome of resolving an anchor-creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorResolution {
    /// The anchor was installed and now tracks the placement.
    Installed,

    /// The request was superseded by a newer request or a reset; the
    /// handle, if any, was released and discarded.
    Stale,

    /// The platform failed to create an anchor; the placement stays on its
    /// static locked pose.
    Failed,
}

/// Owns at most one live anchor and races async creation results.
///
/// Every request increments the generation counter; a result whose request
/// generation no longer matches is released immediately and never
/// installed. [`invalidate`](AnchorTracker::invalidate) bumps the counter
/// without issuing a request, which retires any in-flight creation.
#[derive(Debug)]
pub struct AnchorTracker<A: AnchorHandle> {
    generation: u64,
    active: Option<A>,
}

impl<A: AnchorHandle> AnchorTracker<A> {
    /// Creates an empty tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: 0,
            active: None,
        }
    }

    /// Begins a new anchor-creation request.
    ///
    /// The returned token must be passed back to
    /// [`resolve`](AnchorTracker::resolve) with the platform's result.
    pub fn begin_request(&mut self) -> AnchorRequest {
        self.generation += 1;
        debug!(generation = self.generation, "anchor request issued");
        AnchorRequest {
            generation: self.generation,
        }
    }

    /// Applies the result of an anchor-creation request.
    ///
    /// Stale results (issued before a newer request or an
    /// [`invalidate`](AnchorTracker::invalidate)) are released and
    /// discarded. A fresh success replaces, and releases, any previously
    /// active anchor.
    pub fn resolve(
        &mut self,
        request: AnchorRequest,
        result: Result<A, AnchorError>,
    ) -> AnchorResolution {
        if request.generation != self.generation {
            if let Ok(mut handle) = result {
                handle.release();
            }
            debug!(
                generation = request.generation,
                current = self.generation,
                "stale anchor result discarded"
            );
            return AnchorResolution::Stale;
        }

        match result {
            Ok(handle) => {
                if let Some(mut old) = self.active.replace(handle) {
                    old.release();
                }
                debug!(generation = request.generation, "anchor installed");
                AnchorResolution::Installed
            }
            Err(err) => {
                warn!(error = %err, "anchor creation failed, keeping static pose");
                AnchorResolution::Failed
            }
        }
    }

    /// Releases any active anchor and retires in-flight requests.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        if let Some(mut handle) = self.active.take() {
            handle.release();
            debug!("active anchor released");
        }
    }

    /// Whether an anchor is currently installed.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The active anchor's live pose this frame, if any.
    #[must_use]
    pub fn active_pose(&self) -> Option<Pose> {
        self.active.as_ref().and_then(AnchorHandle::pose)
    }
}

impl<A: AnchorHandle> Default for AnchorTracker<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: AnchorHandle> Drop for AnchorTracker<A> {
    fn drop(&mut self) {
        if let Some(mut handle) = self.active.take() {
            handle.release();
        }
    }
}
