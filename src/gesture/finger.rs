use super::hand::landmarks::*;
use super::*;

/// The four fingers that take part in classification.
///
/// The thumb is left out on purpose: its extension reads differently for
/// every hand orientation, so counting it would add noise rather than signal.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Self; 4] = [Self::Index, Self::Middle, Self::Ring, Self::Pinky];
    pub fn tip(&self) -> usize {
        match self {
            Self::Index => INDEX_TIP,
            Self::Middle => MIDDLE_TIP,
            Self::Ring => RING_TIP,
            Self::Pinky => PINKY_TIP,
        }
    }
    pub fn pip(&self) -> usize {
        match self {
            Self::Index => INDEX_PIP,
            Self::Middle => MIDDLE_PIP,
            Self::Ring => RING_PIP,
            Self::Pinky => PINKY_PIP,
        }
    }
    /// A finger is extended when its tip lies farther from the wrist than its
    /// middle joint does. Unlike a vertical comparison this holds for any
    /// hand rotation in the image plane.
    pub fn extended(&self, hand: &Hand) -> bool {
        let wrist = hand.wrist();
        hand.point(self.tip()).distance(&wrist) > hand.point(self.pip()).distance(&wrist)
    }
}

/// Extension flags for index, middle, ring and pinky, in that order.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct Fingers([bool; 4]);

impl Fingers {
    pub fn extended(&self, finger: Finger) -> bool {
        self.0[finger as usize]
    }
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&e| e).count()
    }
}

impl From<[bool; 4]> for Fingers {
    fn from(flags: [bool; 4]) -> Self {
        Self(flags)
    }
}

impl From<&Hand> for Fingers {
    fn from(hand: &Hand) -> Self {
        Self(Finger::ALL.map(|f| f.extended(hand)))
    }
}

impl std::fmt::Display for Fingers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for extended in self.0 {
            write!(f, "{}", if extended { '|' } else { '.' })?;
        }
        Ok(())
    }
}
