use super::*;

/// Maps one hand to a gesture. Deterministic and side-effect free.
pub fn classify(hand: &Hand) -> GestureLabel {
    GestureLabel::from(hand.fingers())
}

/// Finger combinations that name a gesture. Anything else, including three
/// extended fingers, is ambiguous and maps to `None` rather than a guess.
impl From<Fingers> for GestureLabel {
    fn from(fingers: Fingers) -> Self {
        let index = fingers.extended(Finger::Index);
        let middle = fingers.extended(Finger::Middle);
        let ring = fingers.extended(Finger::Ring);
        let pinky = fingers.extended(Finger::Pinky);
        match (index, middle, ring, pinky) {
            (false, false, false, false) => Self::Fist,
            (true, true, true, true) => Self::OpenPalm,
            (true, true, false, false) => Self::Peace,
            (true, false, false, false) => Self::Swipe,
            _ => Self::None,
        }
    }
}

impl From<&Hand> for GestureLabel {
    fn from(hand: &Hand) -> Self {
        classify(hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Pose;
    #[test]
    fn classify_canonical_poses() {
        for label in GestureLabel::ALL {
            for side in [Handedness::Left, Handedness::Right] {
                assert_eq!(classify(&Pose::hand(label, side)), label);
            }
        }
    }
    #[test]
    fn ambiguous_combinations_are_none() {
        let ambiguous = [
            [true, true, true, false],
            [false, true, false, false],
            [false, false, false, true],
            [true, false, false, true],
            [false, true, true, true],
        ];
        for flags in ambiguous {
            assert_eq!(GestureLabel::from(Fingers::from(flags)), GestureLabel::None);
        }
    }
    #[test]
    fn every_combination_yields_one_label() {
        let named = (0..16u8)
            .map(|bits| std::array::from_fn::<bool, 4, _>(|i| bits & (1 << i) != 0))
            .map(|flags| GestureLabel::from(Fingers::from(flags)))
            .filter(|label| *label != GestureLabel::None)
            .count();
        assert_eq!(named, 4);
    }
    #[test]
    fn classification_ignores_the_thumb() {
        let hand = Pose::hand(GestureLabel::Fist, Handedness::Right);
        let mut points = *hand.points();
        points[landmarks::THUMB_TIP] = Point::from((0.95, 0.05));
        let moved = Hand::new(points, Handedness::Right);
        assert_eq!(classify(&moved), GestureLabel::Fist);
    }
}
