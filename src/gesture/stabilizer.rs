use super::*;

/// Debounces raw per-frame labels into a gesture that is safe to score.
///
/// A label is adopted once it holds `threshold` of the last `window` frames;
/// until then the previous stable value is kept. A single noisy frame can
/// never flip the output, while a sustained change lands within `window` frames.
#[derive(Debug, Clone)]
pub struct Stabilizer {
    history: History,
    threshold: usize,
    stable: GestureLabel,
}

impl Stabilizer {
    pub fn new(window: usize, threshold: usize) -> Self {
        Self {
            history: History::new(window),
            threshold,
            stable: GestureLabel::None,
        }
    }
    /// Records one raw label and returns the stabilized gesture.
    pub fn observe(&mut self, raw: GestureLabel) -> GestureLabel {
        self.history.push(raw);
        match self.history.mode() {
            Some((label, count)) if count >= self.threshold => {
                if label != self.stable {
                    log::trace!("[stabilizer] {} -> {}", self.stable, label);
                }
                self.stable = label;
            }
            _ => {}
        }
        self.stable
    }
    /// Forgets everything; called when the hand leaves the frame.
    pub fn reset(&mut self) {
        self.history.clear();
        self.stable = GestureLabel::None;
    }
    pub fn stable(&self) -> GestureLabel {
        self.stable
    }
    pub fn history(&self) -> &History {
        &self.history
    }
}

impl Default for Stabilizer {
    fn default() -> Self {
        Self::new(crate::HISTORY_WINDOW, crate::HISTORY_THRESHOLD)
    }
}
