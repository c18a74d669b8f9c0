use super::*;
use crate::gesture::GestureLabel;
use crate::*;

/// What a one-second tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// Paused or finished; nothing moved.
    Idle,
    /// Clocks moved, no transition.
    Running,
    /// The turn countdown hit zero and the engine entered `Reveal`.
    Reveal,
    /// The match clock hit zero and the engine entered `Finished`.
    Expired,
}

/// Functional core of a battle.
///
/// Owns the [`BattleState`] and is its only writer. Each turn walks
/// `Countdown -> Reveal -> Resolving -> Countdown` through explicit calls:
///
/// - [`Engine::tick`] once per second
/// - [`Engine::reveal`] when the countdown reaches zero, committing both moves
/// - [`Engine::resolve`] after the reveal dwell, scoring the turn
/// - [`Engine::commit`] once commentary is in, applying HP and log together
/// - [`Engine::advance`] after the result dwell
///
/// Out-of-order or repeated calls return `false`/`None` and change nothing.
/// Pausing freezes every transition without touching counters.
#[derive(Debug, Clone)]
pub struct Engine {
    state: BattleState,
    match_seconds: Seconds,
    turn_seconds: Seconds,
    paused: Option<Phase>,
    moves: Option<(GestureLabel, GestureLabel)>,
    strike: Option<Strike>,
    scored: bool,
}

impl Engine {
    pub fn new(match_seconds: Seconds, turn_seconds: Seconds) -> Self {
        Self {
            state: BattleState::new(match_seconds, turn_seconds),
            match_seconds,
            turn_seconds,
            paused: None,
            moves: None,
            strike: None,
            scored: false,
        }
    }
    pub fn state(&self) -> &BattleState {
        &self.state
    }
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }
    pub fn is_paused(&self) -> bool {
        self.paused.is_some()
    }
    pub fn is_finished(&self) -> bool {
        self.phase() == Phase::Finished
    }
    /// The strike being resolved, between [`Engine::resolve`] and [`Engine::commit`].
    pub fn pending(&self) -> Option<&Strike> {
        self.strike.as_ref()
    }
    /// Terminal summary, once finished.
    pub fn result(&self) -> Option<MatchResult> {
        self.is_finished().then(|| MatchResult::from(&self.state))
    }
}

impl Engine {
    /// Advances the match clock, and the turn clock during a countdown.
    pub fn tick(&mut self) -> Clock {
        if self.is_paused() || self.is_finished() {
            return Clock::Idle;
        }
        self.state.count_down();
        if self.state.match_seconds() == 0 {
            log::debug!("[engine] match clock expired");
            self.finish();
            Clock::Expired
        } else if self.phase() == Phase::Countdown && self.state.turn_seconds() == 0 {
            self.state.set_phase(Phase::Reveal);
            Clock::Reveal
        } else {
            Clock::Running
        }
    }
    /// Commits both moves for this turn. Only the first call per turn counts.
    pub fn reveal(&mut self, player: GestureLabel, enemy: GestureLabel) -> bool {
        if self.is_paused() || self.phase() != Phase::Reveal || self.moves.is_some() {
            return false;
        }
        log::debug!("[engine] turn {} reveal {} vs {}", self.state.turn(), player, enemy);
        self.moves = Some((player, enemy));
        true
    }
    /// Scores the committed moves and enters `Resolving`.
    pub fn resolve(&mut self) -> Option<Strike> {
        if self.is_paused() || self.phase() != Phase::Reveal {
            return None;
        }
        let (player, enemy) = self.moves?;
        let strike = Strike::new(player, enemy, self.state.streak());
        self.state.set_phase(Phase::Resolving);
        self.strike = Some(strike);
        Some(strike)
    }
    /// Applies the pending strike with its log message. Finishes the match
    /// if either fighter is out of HP.
    pub fn commit(&mut self, message: String) -> Option<TurnRecord> {
        if self.is_paused() || self.phase() != Phase::Resolving {
            return None;
        }
        let strike = self.strike.take()?;
        let record = self.state.apply(&strike, message).clone();
        self.scored = true;
        log::debug!("[engine] {}", record);
        if self.state.player_hp() == 0 || self.state.enemy_hp() == 0 {
            log::debug!("[engine] knockout");
            self.finish();
        }
        Some(record)
    }
    /// Starts the next countdown after a committed turn.
    pub fn advance(&mut self) -> bool {
        if self.is_paused() || self.phase() != Phase::Resolving || !self.scored {
            return false;
        }
        self.moves = None;
        self.scored = false;
        self.state.next_turn(self.turn_seconds);
        true
    }
}

impl Engine {
    pub fn pause(&mut self) -> bool {
        if self.is_paused() || self.is_finished() {
            return false;
        }
        self.paused = Some(self.phase());
        self.state.set_phase(Phase::Paused);
        true
    }
    pub fn resume(&mut self) -> bool {
        match self.paused.take() {
            Some(phase) => {
                self.state.set_phase(phase);
                true
            }
            None => false,
        }
    }
    /// Starts over from full HP. Only honored while paused or finished.
    pub fn restart(&mut self) -> bool {
        if !self.is_paused() && !self.is_finished() {
            return false;
        }
        *self = Self::new(self.match_seconds, self.turn_seconds);
        true
    }
    fn finish(&mut self) {
        self.paused = None;
        self.moves = None;
        self.strike = None;
        self.scored = false;
        self.state.set_phase(Phase::Finished);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(MATCH_SECONDS, TURN_SECONDS)
    }
}
