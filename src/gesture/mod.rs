//! Hand perception: from 21 keypoints to a debounced gesture.
//!
//! - [`Hand`] — One detected hand: 21 normalized [`Point`]s plus [`Handedness`]
//! - [`Fingers`] — Extension state of the four non-thumb fingers
//! - [`GestureLabel`] — Discrete gesture, also the move played in battle
//! - [`classify`] — Pure per-frame classifier
//! - [`Stabilizer`] — Majority vote over a short [`History`] of raw labels
//! - [`Tracker`] — Two hand slots with frame admission and slot reuse
mod classifier;
mod finger;
mod hand;
mod history;
mod label;
mod point;
mod stabilizer;
mod tracker;

pub use classifier::*;
pub use finger::*;
pub use hand::*;
pub use history::*;
pub use label::*;
pub use point::*;
pub use stabilizer::*;
pub use tracker::*;
