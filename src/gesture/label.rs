use crate::InputError;

/// A discrete hand shape, and the move it stands for in battle.
///
/// The three playable moves form a cycle:
/// Fist beats Peace, Peace beats OpenPalm, OpenPalm beats Fist.
/// Swipe is recognized but beats nothing. None means no confident gesture.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureLabel {
    Fist,
    OpenPalm,
    Peace,
    Swipe,
    #[default]
    None,
}

impl GestureLabel {
    /// Every label, indexable by `label as usize`.
    pub const ALL: [Self; 5] = [
        Self::Fist,
        Self::OpenPalm,
        Self::Peace,
        Self::Swipe,
        Self::None,
    ];
    /// Moves an opponent may play.
    pub const MOVES: [Self; 3] = [Self::Fist, Self::OpenPalm, Self::Peace];

    /// Whether this label is one of the three cycle moves.
    pub fn is_move(&self) -> bool {
        Self::MOVES.contains(self)
    }
    /// Strict dominance. A cycle move also beats an absent (None) move.
    pub fn beats(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Fist, Self::Peace) => true,
            (Self::Peace, Self::OpenPalm) => true,
            (Self::OpenPalm, Self::Fist) => true,
            (this, Self::None) => this.is_move(),
            _ => false,
        }
    }
    /// Parses a move supplied from outside the perception pipeline.
    /// Only the three cycle moves are accepted.
    pub fn try_move(s: &str) -> Result<Self, InputError> {
        Self::try_from(s)
            .ok()
            .filter(Self::is_move)
            .ok_or_else(|| InputError::UnknownGesture(s.to_string()))
    }
}

impl TryFrom<&str> for GestureLabel {
    type Error = InputError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "fist" | "rock" => Ok(Self::Fist),
            "open_palm" | "palm" | "paper" => Ok(Self::OpenPalm),
            "peace" | "scissors" => Ok(Self::Peace),
            "swipe" => Ok(Self::Swipe),
            "none" => Ok(Self::None),
            _ => Err(InputError::UnknownGesture(s.to_string())),
        }
    }
}

impl std::fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fist => write!(f, "fist"),
            Self::OpenPalm => write!(f, "open_palm"),
            Self::Peace => write!(f, "peace"),
            Self::Swipe => write!(f, "swipe"),
            Self::None => write!(f, "none"),
        }
    }
}
