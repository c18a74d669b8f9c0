use super::*;
use crate::Health;

/// Who came out ahead when the match ended.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Player,
    Enemy,
    Tie,
}

impl From<(Health, Health)> for Winner {
    fn from((player, enemy): (Health, Health)) -> Self {
        match player.cmp(&enemy) {
            std::cmp::Ordering::Greater => Self::Player,
            std::cmp::Ordering::Less => Self::Enemy,
            std::cmp::Ordering::Equal => Self::Tie,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "Victory!"),
            Self::Enemy => write!(f, "Defeat..."),
            Self::Tie => write!(f, "Draw"),
        }
    }
}

/// Terminal summary of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MatchResult {
    pub winner: Winner,
    pub turns: usize,
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
    pub player_hp: Health,
    pub enemy_hp: Health,
}

impl From<&BattleState> for MatchResult {
    fn from(state: &BattleState) -> Self {
        let count = |o: Outcome| state.log().filter(|r| r.outcome() == o).count();
        Self {
            winner: Winner::from((state.player_hp(), state.enemy_hp())),
            turns: state.log().count(),
            wins: count(Outcome::Win),
            losses: count(Outcome::Loss),
            ties: count(Outcome::Tie),
            player_hp: state.player_hp(),
            enemy_hp: state.enemy_hp(),
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}-{} after {} turns ({}W {}L {}T)",
            self.winner, self.player_hp, self.enemy_hp, self.turns, self.wins, self.losses, self.ties
        )
    }
}
