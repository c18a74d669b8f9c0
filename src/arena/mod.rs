//! Async shell that drives the battle [`Engine`](crate::battle::Engine) on
//! wall-clock timers.
//!
//! - [`Arena`] — Owns the engine, timers, and in-flight commentary
//! - [`ArenaHandle`] — Commands in, snapshots and events out
//! - [`Opponent`] — Enemy move source
//! - [`Commentator`] — Async announcer seam with timeout fallback
//! - [`Protocol`] — JSON events and text commands for a presentation layer
mod command;
mod commentary;
mod config;
mod event;
mod fighter;
mod handle;
mod opponent;
mod protocol;
mod runner;
mod timer;

pub use command::*;
pub use commentary::*;
pub use config::*;
pub use event::*;
pub use fighter::*;
pub use handle::*;
pub use opponent::*;
pub use protocol::*;
pub use runner::*;
pub use timer::*;
