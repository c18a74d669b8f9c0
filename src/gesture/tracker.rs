use super::*;
use crate::MAX_HANDS;
use crate::Timestamp;

/// A fixed hand slot: the handedness it last saw and its private stabilizer.
#[derive(Debug, Clone, Default)]
pub struct Slot {
    handedness: Option<Handedness>,
    stabilizer: Stabilizer,
}

impl Slot {
    fn new(window: usize, threshold: usize) -> Self {
        Self {
            handedness: None,
            stabilizer: Stabilizer::new(window, threshold),
        }
    }
    pub fn handedness(&self) -> Option<Handedness> {
        self.handedness
    }
    pub fn is_free(&self) -> bool {
        self.handedness.is_none()
    }
    pub fn gesture(&self) -> GestureLabel {
        self.stabilizer.stable()
    }
    fn occupy(&mut self, handedness: Handedness) {
        if self.handedness != Some(handedness) {
            self.stabilizer.reset();
        }
        self.handedness = Some(handedness);
    }
    fn vacate(&mut self) {
        self.handedness = None;
        self.stabilizer.reset();
    }
}

/// Turns per-frame detections into per-hand stabilized gestures.
///
/// Frames are admitted only when their timestamp strictly advances, so a
/// poller running faster than the video never scores the same frame twice.
///
/// Slot reuse: a hand goes to the slot that last held the same handedness,
/// else to the first free slot, else to the first slot not yet claimed this
/// frame. Slots that receive no hand are vacated, so history never carries
/// across a detection gap.
///
/// The scored hand is sticky: it stays on its slot until that slot is
/// vacated, so a stray hand entering for one frame cannot take over.
#[derive(Debug, Clone)]
pub struct Tracker {
    slots: [Slot; MAX_HANDS],
    primary: Option<usize>,
    last: Option<Timestamp>,
}

impl Tracker {
    pub fn new(window: usize, threshold: usize) -> Self {
        Self {
            slots: std::array::from_fn(|_| Slot::new(window, threshold)),
            primary: None,
            last: None,
        }
    }
    /// Accepts a frame timestamp if it advances past the last admitted one.
    pub fn admit(&mut self, timestamp: Timestamp) -> bool {
        if !timestamp.is_finite() {
            log::trace!("[tracker] dropping frame at {}", timestamp);
            return false;
        }
        match self.last {
            Some(last) if timestamp <= last => {
                log::trace!("[tracker] dropping stale frame {:.3} <= {:.3}", timestamp, last);
                false
            }
            _ => {
                self.last = Some(timestamp);
                true
            }
        }
    }
    /// Feeds one admitted frame and returns the primary stabilized gesture.
    pub fn observe(&mut self, hands: &[Hand]) -> GestureLabel {
        if hands.len() > MAX_HANDS {
            log::debug!("[tracker] ignoring {} extra hands", hands.len() - MAX_HANDS);
        }
        let mut claimed = [false; MAX_HANDS];
        for hand in hands.iter().take(MAX_HANDS) {
            let i = self.route(hand.handedness(), &claimed);
            claimed[i] = true;
            self.slots[i].occupy(hand.handedness());
            self.slots[i].stabilizer.observe(classify(hand));
        }
        for (slot, _) in self
            .slots
            .iter_mut()
            .zip(claimed)
            .filter(|(slot, claimed)| !claimed && !slot.is_free())
        {
            if let Some(side) = slot.handedness {
                log::debug!("[tracker] {} hand left the frame", side);
            }
            slot.vacate();
        }
        if self.primary.is_none_or(|i| self.slots[i].is_free()) {
            self.primary = self.slots.iter().position(|slot| !slot.is_free());
        }
        self.gesture()
    }
    /// Admits and observes in one step. `None` when the frame is stale.
    pub fn process(&mut self, timestamp: Timestamp, hands: &[Hand]) -> Option<GestureLabel> {
        self.admit(timestamp).then(|| self.observe(hands))
    }
    /// Gesture of the primary slot, or `None` with no hands present.
    pub fn gesture(&self) -> GestureLabel {
        self.primary
            .map(|i| self.slots[i].gesture())
            .unwrap_or_default()
    }
    /// Slot whose gesture is scored.
    pub fn primary(&self) -> Option<usize> {
        self.primary
    }
    /// Stabilized gesture of every slot.
    pub fn gestures(&self) -> [GestureLabel; MAX_HANDS] {
        std::array::from_fn(|i| self.slots[i].gesture())
    }
    pub fn slots(&self) -> &[Slot; MAX_HANDS] {
        &self.slots
    }
    /// Drops all hand state and the frame clock.
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(Slot::vacate);
        self.primary = None;
        self.last = None;
    }
    fn route(&self, handedness: Handedness, claimed: &[bool; MAX_HANDS]) -> usize {
        let open = |i: &usize| !claimed[*i];
        (0..MAX_HANDS)
            .filter(open)
            .find(|i| self.slots[*i].handedness == Some(handedness))
            .or_else(|| (0..MAX_HANDS).filter(open).find(|i| self.slots[*i].is_free()))
            .or_else(|| (0..MAX_HANDS).find(open))
            .expect("at most MAX_HANDS hands routed per frame")
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(crate::HISTORY_WINDOW, crate::HISTORY_THRESHOLD)
    }
}
