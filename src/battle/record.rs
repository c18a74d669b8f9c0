use super::*;
use crate::gesture::GestureLabel;

/// One entry of the battle log. Immutable once appended.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TurnRecord {
    turn: u32,
    player: GestureLabel,
    enemy: GestureLabel,
    outcome: Outcome,
    finisher: bool,
    message: String,
}

impl TurnRecord {
    pub fn new(turn: u32, strike: &Strike, message: String) -> Self {
        Self {
            turn,
            player: strike.player,
            enemy: strike.enemy,
            outcome: strike.outcome,
            finisher: strike.finisher,
            message,
        }
    }
    pub fn turn(&self) -> u32 {
        self.turn
    }
    pub fn player(&self) -> GestureLabel {
        self.player
    }
    pub fn enemy(&self) -> GestureLabel {
        self.enemy
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn finisher(&self) -> bool {
        self.finisher
    }
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{:<3} {:>9} vs {:<9} {:<4}{} {}",
            self.turn,
            self.player.to_string(),
            self.enemy.to_string(),
            self.outcome.to_string(),
            if self.finisher { " FINISHER" } else { "" },
            self.message
        )
    }
}
