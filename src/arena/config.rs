use super::*;
use crate::gesture::Tracker;
use crate::*;
use std::time::Duration;

/// Every tunable of a match. Rule constants stay in the crate root.
#[derive(Debug, Clone)]
pub struct Config {
    pub match_seconds: Seconds,
    pub turn_seconds: Seconds,
    pub reveal: Duration,
    pub result: Duration,
    pub finisher: Duration,
    pub commentary: Duration,
    pub frames: Duration,
    pub window: usize,
    pub threshold: usize,
    pub player: Fighter,
    pub enemy: Fighter,
}

impl Config {
    /// Result dwell for a turn, longer after a finisher.
    pub fn dwell(&self, finisher: bool) -> Duration {
        if finisher { self.finisher } else { self.result }
    }
    /// A hand tracker stabilizing with this config's window and threshold.
    pub fn tracker(&self) -> Tracker {
        Tracker::new(self.window, self.threshold)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            match_seconds: MATCH_SECONDS,
            turn_seconds: TURN_SECONDS,
            reveal: REVEAL_DWELL,
            result: RESULT_DWELL,
            finisher: FINISHER_DWELL,
            commentary: COMMENTARY_TIMEOUT,
            frames: FRAME_INTERVAL,
            window: HISTORY_WINDOW,
            threshold: HISTORY_THRESHOLD,
            player: Fighter::from(STARTERS[0]),
            enemy: Fighter::from(STARTERS[1]),
        }
    }
}
