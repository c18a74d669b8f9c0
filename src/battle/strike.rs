use super::*;
use crate::gesture::GestureLabel;
use crate::*;

/// Damage and streak effects of one scored turn, computed before they are
/// applied so the commentary request can describe them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Strike {
    pub player: GestureLabel,
    pub enemy: GestureLabel,
    pub outcome: Outcome,
    /// Win streak after this turn.
    pub streak: Streak,
    /// Damage taken by the player.
    pub player_damage: Damage,
    /// Damage taken by the enemy.
    pub enemy_damage: Damage,
    pub finisher: bool,
}

impl Strike {
    /// Scores a turn given the win streak going into it.
    ///
    /// - Win: streak grows by one; damage is `20 + (streak - 1) * 10`, plus
    ///   30 once the streak reaches 3 (a finisher).
    /// - Loss: streak resets; the player takes 20, or 10 for showing nothing.
    /// - Tie: streak resets; nobody takes damage.
    pub fn new(player: GestureLabel, enemy: GestureLabel, streak: Streak) -> Self {
        let outcome = Outcome::from((player, enemy));
        let (streak, player_damage, enemy_damage, finisher) = match outcome {
            Outcome::Win => {
                let streak = streak.saturating_add(1);
                let finisher = streak >= FINISHER_STREAK;
                let damage = BASE_DAMAGE
                    .saturating_add(STREAK_DAMAGE.saturating_mul(streak - 1))
                    .saturating_add(if finisher { FINISHER_BONUS } else { 0 });
                (streak, 0, damage, finisher)
            }
            Outcome::Loss if player == GestureLabel::None => (0, FORFEIT_DAMAGE, 0, false),
            Outcome::Loss => (0, LOSS_DAMAGE, 0, false),
            Outcome::Tie => (0, 0, 0, false),
        };
        Self {
            player,
            enemy,
            outcome,
            streak,
            player_damage,
            enemy_damage,
            finisher,
        }
    }
}
