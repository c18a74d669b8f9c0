//! Synchronous battle core: rules, state, and the turn state machine.
//!
//! Nothing here knows about wall-clock time. The caller ticks the
//! [`Engine`] once per second and calls its transitions when dwells end,
//! which keeps every rule testable step by step.
//!
//! - [`Engine`] — Turn state machine and sole writer of [`BattleState`]
//! - [`Strike`] — Outcome and damage of one scored turn
//! - [`TurnRecord`] — Immutable battle-log entry
//! - [`MatchResult`] — Terminal summary
mod engine;
mod outcome;
mod phase;
mod record;
mod result;
mod state;
mod strike;

pub use engine::*;
pub use outcome::*;
pub use phase::*;
pub use record::*;
pub use result::*;
pub use state::*;
pub use strike::*;
