use super::*;
use crate::InputError;
use crate::LANDMARKS;

/// Landmark indices in the 21-point hand model.
#[allow(dead_code)]
pub mod landmarks {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_MCP: usize = 5;
    pub const INDEX_PIP: usize = 6;
    pub const INDEX_DIP: usize = 7;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_MCP: usize = 9;
    pub const MIDDLE_PIP: usize = 10;
    pub const MIDDLE_DIP: usize = 11;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP: usize = 13;
    pub const RING_PIP: usize = 14;
    pub const RING_DIP: usize = 15;
    pub const RING_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;
}

/// Which hand the detector believes it saw.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub enum Handedness {
    Left,
    Right,
}

impl TryFrom<&str> for Handedness {
    type Error = InputError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(InputError::UnknownHandedness(s.to_string())),
        }
    }
}

impl std::fmt::Display for Handedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}

/// One detected hand in one frame. Not retained past stabilization.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    points: [Point; LANDMARKS],
    handedness: Handedness,
}

impl Hand {
    pub fn new(points: [Point; LANDMARKS], handedness: Handedness) -> Self {
        Self { points, handedness }
    }
    pub fn handedness(&self) -> Handedness {
        self.handedness
    }
    pub fn points(&self) -> &[Point; LANDMARKS] {
        &self.points
    }
    pub fn point(&self, index: usize) -> Point {
        self.points[index]
    }
    pub fn wrist(&self) -> Point {
        self.points[landmarks::WRIST]
    }
    pub fn fingers(&self) -> Fingers {
        Fingers::from(self)
    }
}

impl TryFrom<(Vec<Point>, Handedness)> for Hand {
    type Error = InputError;
    fn try_from((points, handedness): (Vec<Point>, Handedness)) -> Result<Self, Self::Error> {
        let n = points.len();
        <[Point; LANDMARKS]>::try_from(points)
            .map(|points| Self::new(points, handedness))
            .map_err(|_| InputError::Landmarks(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn parse_handedness() {
        assert_eq!(Handedness::try_from("Left"), Ok(Handedness::Left));
        assert_eq!(Handedness::try_from("right"), Ok(Handedness::Right));
        assert!(Handedness::try_from("both").is_err());
    }
    #[test]
    fn accepts_exactly_21_points() {
        let points = vec![Point::default(); LANDMARKS];
        let hand = Hand::try_from((points, Handedness::Right)).unwrap();
        assert_eq!(hand.handedness(), Handedness::Right);
        assert_eq!(hand.points().len(), LANDMARKS);
    }
    #[test]
    fn rejects_partial_hands() {
        let points = vec![Point::default(); 20];
        assert_eq!(
            Hand::try_from((points, Handedness::Left)),
            Err(InputError::Landmarks(20))
        );
    }
}
