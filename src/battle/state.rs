use super::*;
use crate::*;
use std::collections::VecDeque;

/// Authoritative combat record. Written only by the [`Engine`];
/// everyone else reads clones.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BattleState {
    player_hp: Health,
    enemy_hp: Health,
    streak: Streak,
    turn: u32,
    match_seconds: Seconds,
    turn_seconds: Seconds,
    phase: Phase,
    log: VecDeque<TurnRecord>,
}

impl BattleState {
    pub fn new(match_seconds: Seconds, turn_seconds: Seconds) -> Self {
        Self {
            player_hp: MAX_HP,
            enemy_hp: MAX_HP,
            streak: 0,
            turn: 1,
            match_seconds,
            turn_seconds,
            phase: Phase::Countdown,
            log: VecDeque::new(),
        }
    }
    pub fn player_hp(&self) -> Health {
        self.player_hp
    }
    pub fn enemy_hp(&self) -> Health {
        self.enemy_hp
    }
    pub fn streak(&self) -> Streak {
        self.streak
    }
    pub fn turn(&self) -> u32 {
        self.turn
    }
    pub fn match_seconds(&self) -> Seconds {
        self.match_seconds
    }
    pub fn turn_seconds(&self) -> Seconds {
        self.turn_seconds
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    /// Battle log, newest first.
    pub fn log(&self) -> impl Iterator<Item = &TurnRecord> {
        self.log.iter()
    }
    pub fn latest(&self) -> Option<&TurnRecord> {
        self.log.front()
    }
    /// Someone is out of HP or the match clock ran out.
    pub fn is_decided(&self) -> bool {
        self.player_hp == 0 || self.enemy_hp == 0 || self.match_seconds == 0
    }
}

impl BattleState {
    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
    /// Decrements the match clock, and the turn clock during a countdown.
    pub(crate) fn count_down(&mut self) {
        self.match_seconds = self.match_seconds.saturating_sub(1);
        if self.phase == Phase::Countdown {
            self.turn_seconds = self.turn_seconds.saturating_sub(1);
        }
    }
    pub(crate) fn next_turn(&mut self, turn_seconds: Seconds) {
        self.turn += 1;
        self.turn_seconds = turn_seconds;
        self.phase = Phase::Countdown;
    }
    /// Applies HP deltas, streak and log entry together. HP is clamped to
    /// `0..=MAX_HP`, so no strike can push either fighter out of range.
    pub(crate) fn apply(&mut self, strike: &Strike, message: String) -> &TurnRecord {
        self.player_hp = Self::hurt(self.player_hp, strike.player_damage);
        self.enemy_hp = Self::hurt(self.enemy_hp, strike.enemy_damage);
        self.streak = strike.streak;
        self.log.push_front(TurnRecord::new(self.turn, strike, message));
        self.log.front().expect("just pushed")
    }
    fn hurt(hp: Health, damage: Damage) -> Health {
        let damage = damage.min(MAX_HP as Damage) as Health;
        hp.min(MAX_HP).saturating_sub(damage)
    }
}

impl Default for BattleState {
    fn default() -> Self {
        Self::new(MATCH_SECONDS, TURN_SECONDS)
    }
}

impl std::fmt::Display for BattleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "turn {} [{}] you {:>3} | foe {:>3} | streak {} | {}s left",
            self.turn, self.phase, self.player_hp, self.enemy_hp, self.streak, self.match_seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::GestureLabel::*;
    #[test]
    fn fresh_state() {
        let state = BattleState::default();
        assert_eq!((state.player_hp(), state.enemy_hp()), (100, 100));
        assert_eq!(state.turn(), 1);
        assert_eq!(state.turn_seconds(), TURN_SECONDS);
        assert_eq!(state.phase(), Phase::Countdown);
        assert!(state.latest().is_none());
        assert!(!state.is_decided());
    }
    #[test]
    fn hp_never_leaves_range() {
        let mut state = BattleState::default();
        for before in 0..40 {
            state.apply(&Strike::new(Fist, Peace, before), String::new());
            state.apply(&Strike::new(Peace, Fist, 0), String::new());
            assert!(state.player_hp() <= MAX_HP);
            assert!(state.enemy_hp() <= MAX_HP);
        }
        assert_eq!((state.player_hp(), state.enemy_hp()), (0, 0));
        assert!(state.is_decided());
    }
    #[test]
    fn hp_and_log_move_together() {
        let mut state = BattleState::default();
        let record = state.apply(&Strike::new(Fist, Peace, 0), "hit".into()).clone();
        assert_eq!(state.enemy_hp(), 80);
        assert_eq!(state.latest(), Some(&record));
        assert_eq!(record.message(), "hit");
        assert_eq!(record.turn(), 1);
    }
    #[test]
    fn log_is_newest_first() {
        let mut state = BattleState::default();
        state.apply(&Strike::new(Fist, Peace, 0), "first".into());
        state.next_turn(TURN_SECONDS);
        state.apply(&Strike::new(Fist, Fist, 1), "second".into());
        let messages = state.log().map(TurnRecord::message).collect::<Vec<_>>();
        assert_eq!(messages, vec!["second", "first"]);
    }
    #[test]
    fn turn_clock_only_runs_in_countdown() {
        let mut state = BattleState::default();
        state.count_down();
        assert_eq!(state.turn_seconds(), TURN_SECONDS - 1);
        state.set_phase(Phase::Reveal);
        state.count_down();
        assert_eq!(state.turn_seconds(), TURN_SECONDS - 1);
        assert_eq!(state.match_seconds(), MATCH_SECONDS - 2);
    }
}
