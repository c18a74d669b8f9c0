use crate::LANDMARKS;
use crate::gesture::*;

const WRIST: (f32, f32) = (0.50, 0.85);
const THUMB: [(f32, f32); 4] = [(0.60, 0.80), (0.66, 0.72), (0.70, 0.66), (0.73, 0.60)];
const COLUMNS: [f32; 4] = [0.40, 0.48, 0.56, 0.63];
const KNUCKLE: f32 = 0.60;
const EXTENDED: [f32; 3] = [0.48, 0.39, 0.30];
const CURLED: [f32; 3] = [0.50, 0.56, 0.62];

/// Builds upright, palm-facing hands in image-normalized coordinates.
/// Left hands are mirrored about the vertical center line.
pub struct Pose;

impl Pose {
    /// A hand whose classification is `label`.
    /// `None` is posed as three extended fingers, which is ambiguous.
    pub fn hand(label: GestureLabel, side: Handedness) -> Hand {
        Self::fingers(Self::flags(label), side)
    }
    /// A hand with the given index, middle, ring, pinky extension.
    pub fn fingers(flags: [bool; 4], side: Handedness) -> Hand {
        let mut points = [Point::default(); LANDMARKS];
        points[landmarks::WRIST] = Point::from(WRIST);
        for (i, p) in THUMB.iter().enumerate() {
            points[landmarks::THUMB_CMC + i] = Point::from(*p);
        }
        for (finger, extended) in Finger::ALL.iter().zip(flags) {
            let x = COLUMNS[*finger as usize];
            let ys = if extended { EXTENDED } else { CURLED };
            let mcp = finger.pip() - 1;
            points[mcp] = Point::from((x, KNUCKLE));
            for (j, y) in ys.iter().enumerate() {
                points[mcp + 1 + j] = Point::from((x, *y));
            }
        }
        if side == Handedness::Left {
            points.iter_mut().for_each(|p| p.x = 1. - p.x);
        }
        Hand::new(points, side)
    }
    fn flags(label: GestureLabel) -> [bool; 4] {
        match label {
            GestureLabel::Fist => [false, false, false, false],
            GestureLabel::OpenPalm => [true, true, true, true],
            GestureLabel::Peace => [true, true, false, false],
            GestureLabel::Swipe => [true, false, false, false],
            GestureLabel::None => [true, true, true, false],
        }
    }
}
