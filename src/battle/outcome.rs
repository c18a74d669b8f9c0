use crate::gesture::GestureLabel;

/// Turn outcome from the player's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

/// Scores (player, enemy). Equal moves tie; otherwise the player wins only
/// by beating the enemy's move, so a missing or off-cycle gesture loses.
impl From<(GestureLabel, GestureLabel)> for Outcome {
    fn from((player, enemy): (GestureLabel, GestureLabel)) -> Self {
        if player == enemy {
            Self::Tie
        } else if player.beats(&enemy) {
            Self::Win
        } else {
            Self::Loss
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Loss => write!(f, "loss"),
            Self::Tie => write!(f, "tie"),
        }
    }
}
