use super::*;
use crate::gesture::GestureLabel;
use crate::gesture::Handedness;

/// Video frame period used when building scripts.
const FRAME: Timestamp = 1. / 30.;

/// One recorded frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub timestamp: Timestamp,
    pub hands: Vec<Hand>,
}

/// Replays a fixed sequence of frames, one per `timestamp()` poll.
///
/// Each poll advances the cursor whether or not the frame is admitted,
/// so repeated timestamps behave like a poller outrunning the video.
#[derive(Debug, Clone, Default)]
pub struct Script {
    frames: Vec<Frame>,
    cursor: usize,
}

impl Script {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames, cursor: 0 }
    }
    /// Appends `n` frames showing one hand in `label`'s pose.
    pub fn hold(self, label: GestureLabel, side: Handedness, n: usize) -> Self {
        self.extend(n, || vec![Pose::hand(label, side)])
    }
    /// Appends `n` frames with both hands posed.
    pub fn both(self, left: GestureLabel, right: GestureLabel, n: usize) -> Self {
        self.extend(n, || {
            vec![
                Pose::hand(left, Handedness::Left),
                Pose::hand(right, Handedness::Right),
            ]
        })
    }
    /// Appends `n` frames with no hands in view.
    pub fn gap(self, n: usize) -> Self {
        self.extend(n, Vec::new)
    }
    /// Re-presents the last frame `n` more times under the same timestamp.
    pub fn stutter(mut self, n: usize) -> Self {
        if let Some(last) = self.frames.last().cloned() {
            self.frames.extend(std::iter::repeat_n(last, n));
        }
        self
    }
    pub fn len(&self) -> usize {
        self.frames.len()
    }
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
    fn extend<F>(mut self, n: usize, hands: F) -> Self
    where
        F: Fn() -> Vec<Hand>,
    {
        for _ in 0..n {
            let timestamp = self
                .frames
                .last()
                .map(|f| f.timestamp + FRAME)
                .unwrap_or_default();
            self.frames.push(Frame {
                timestamp,
                hands: hands(),
            });
        }
        self
    }
}

impl LandmarkSource for Script {
    fn timestamp(&mut self) -> Option<Timestamp> {
        let frame = self.frames.get(self.cursor)?;
        self.cursor += 1;
        Some(frame.timestamp)
    }
    fn detect(&mut self, timestamp: Timestamp) -> Vec<Hand> {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.frames.get(i))
            .filter(|f| f.timestamp == timestamp)
            .map(|f| f.hands.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn timestamps_advance_per_frame() {
        let mut script = Script::default()
            .hold(GestureLabel::Fist, Handedness::Right, 2)
            .gap(1);
        assert_eq!(script.len(), 3);
        let a = script.timestamp().unwrap();
        let b = script.timestamp().unwrap();
        let c = script.timestamp().unwrap();
        assert!(a < b && b < c);
        assert_eq!(script.timestamp(), None);
    }
    #[test]
    fn stutter_repeats_the_timestamp() {
        let mut script = Script::default()
            .hold(GestureLabel::Peace, Handedness::Left, 1)
            .stutter(2);
        let stamps = (0..3).filter_map(|_| script.timestamp()).collect::<Vec<_>>();
        assert_eq!(stamps, vec![0.0, 0.0, 0.0]);
    }
    #[test]
    fn detect_returns_the_polled_frame() {
        let mut script = Script::default()
            .both(GestureLabel::Fist, GestureLabel::OpenPalm, 1)
            .gap(1);
        let t = script.timestamp().unwrap();
        assert_eq!(script.detect(t).len(), 2);
        let t = script.timestamp().unwrap();
        assert!(script.detect(t).is_empty());
    }
}
