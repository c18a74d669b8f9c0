use crate::battle::*;
use crate::gesture::GestureLabel;
use crate::*;

/// Everything a presentation layer needs to render a match.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Seconds left before this turn's reveal.
    Countdown { turn: u32, seconds: Seconds },
    /// Seconds left in the match.
    Clock { seconds: Seconds },
    Reveal {
        turn: u32,
        player: GestureLabel,
        enemy: GestureLabel,
    },
    Resolved {
        record: TurnRecord,
        finisher: bool,
        player_hp: Health,
        enemy_hp: Health,
        streak: Streak,
    },
    Paused,
    Resumed,
    Restarted,
    Finished(MatchResult),
}

impl Event {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Countdown { turn, seconds } => write!(f, "turn {} in {}", turn, seconds),
            Self::Clock { seconds } => write!(f, "{}s left", seconds),
            Self::Reveal {
                turn,
                player,
                enemy,
            } => write!(f, "turn {}: {} vs {}", turn, player, enemy),
            Self::Resolved {
                record,
                player_hp,
                enemy_hp,
                ..
            } => write!(f, "{} (you {} | foe {})", record, player_hp, enemy_hp),
            Self::Paused => write!(f, "paused"),
            Self::Resumed => write!(f, "resumed"),
            Self::Restarted => write!(f, "restarted"),
            Self::Finished(result) => write!(f, "{}", result),
        }
    }
}
