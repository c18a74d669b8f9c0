use super::*;
use crate::gesture::GestureLabel;
use crate::gesture::Handedness;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use tokio::time::Instant;

/// Synthetic player for demos: holds a randomly chosen gesture for a while,
/// then switches, with the occasional misread frame and dropped hand.
///
/// Frame time is the wall clock quantized to the camera rate, so a 60 Hz
/// poller sees each frame twice.
pub struct Mime {
    rng: SmallRng,
    start: Instant,
    hold: f64,
    fps: f64,
    noise: f64,
    side: Handedness,
    segment: Option<(u64, GestureLabel)>,
}

impl Mime {
    pub fn new(seed: u64, hold: f64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            start: Instant::now(),
            hold,
            fps: 30.,
            noise: 0.1,
            side: Handedness::Right,
            segment: None,
        }
    }
    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise.clamp(0., 1.);
        self
    }
    pub fn with_side(mut self, side: Handedness) -> Self {
        self.side = side;
        self
    }
    /// Gesture being performed during the segment containing `timestamp`.
    fn intent(&mut self, timestamp: Timestamp) -> GestureLabel {
        let segment = (timestamp / self.hold).floor() as u64;
        match self.segment {
            Some((s, label)) if s == segment => label,
            _ => {
                let label = *GestureLabel::MOVES
                    .choose(&mut self.rng)
                    .expect("non empty moves");
                log::debug!("[mime] now showing {}", label);
                self.segment = Some((segment, label));
                label
            }
        }
    }
}

impl LandmarkSource for Mime {
    fn timestamp(&mut self) -> Option<Timestamp> {
        let elapsed = self.start.elapsed().as_secs_f64();
        Some((elapsed * self.fps).floor() / self.fps)
    }
    fn detect(&mut self, timestamp: Timestamp) -> Vec<Hand> {
        let intent = self.intent(timestamp);
        if self.rng.random_bool(self.noise / 4.) {
            return Vec::new();
        }
        let shown = if self.rng.random_bool(self.noise) {
            *GestureLabel::ALL
                .choose(&mut self.rng)
                .expect("non empty labels")
        } else {
            intent
        };
        vec![Pose::hand(shown, self.side)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[tokio::test(start_paused = true)]
    async fn holds_one_gesture_per_segment() {
        let mut mime = Mime::new(7, 1.0).with_noise(0.);
        let first = mime.detect(0.1);
        let again = mime.detect(0.9);
        assert_eq!(first, again);
        assert_eq!(first.len(), 1);
    }
    #[tokio::test(start_paused = true)]
    async fn frame_time_is_quantized() {
        let mut mime = Mime::new(7, 1.0);
        tokio::time::sleep(std::time::Duration::from_millis(40)).await;
        let t = mime.timestamp().unwrap();
        assert!((t - 1. / 30.).abs() < 1e-9);
    }
}
