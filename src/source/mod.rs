//! Landmark sources and the frame loop that feeds the tracker.
//!
//! - [`LandmarkSource`] — Trait over the external hand-landmark detector
//! - [`FrameLoop`] — Cancellable polling task publishing the stabilized gesture
//! - [`Script`] — Deterministic frame replay
//! - [`Mime`] — Synthetic performer cycling through gestures in real time
//! - [`Pose`] — Canonical 21-point hands for each gesture
mod frames;
mod mime;
mod pose;
mod script;

pub use frames::*;
pub use mime::*;
pub use pose::*;
pub use script::*;

use crate::Timestamp;
use crate::gesture::Hand;

/// Anything that can report hand landmarks per video frame.
///
/// Implementations wrap a detector model, a recorded session, or a
/// simulation; the frame loop does not care which.
pub trait LandmarkSource: Send + 'static {
    /// Time of the frame currently on screen. `None` once the camera is gone.
    fn timestamp(&mut self) -> Option<Timestamp>;
    /// Hands detected in the frame at `timestamp`, at most two, in any order.
    fn detect(&mut self, timestamp: Timestamp) -> Vec<Hand>;
}
