use super::*;
use crate::battle::*;
use crate::source::FrameHandle;
use tokio::sync::mpsc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Caller's side of a running [`Arena`].
///
/// Commands are fire-and-forget; the arena applies them in order. Quitting
/// or dropping the handle stops the arena and any attached frame loop.
pub struct ArenaHandle {
    pub(super) commands: mpsc::UnboundedSender<Command>,
    pub(super) snapshot: watch::Receiver<BattleState>,
    pub(super) events: mpsc::UnboundedReceiver<Event>,
    pub(super) task: JoinHandle<()>,
    pub(super) frames: Option<FrameHandle>,
}

impl ArenaHandle {
    /// Takes ownership of the frame loop feeding this arena.
    pub fn with_frames(mut self, frames: FrameHandle) -> Self {
        self.frames = Some(frames);
        self
    }
    pub fn frames(&self) -> Option<&FrameHandle> {
        self.frames.as_ref()
    }
    pub fn pause(&self) {
        self.send(Command::Pause);
    }
    pub fn resume(&self) {
        self.send(Command::Resume);
    }
    pub fn restart(&self) {
        self.send(Command::Restart);
    }
    /// Stops the frame loop and the arena before returning.
    pub fn quit(&self) {
        self.send(Command::Quit);
        self.stop();
    }
    pub fn override_move(&self, label: Option<&str>) {
        self.send(Command::Override(label.map(String::from)));
    }
    pub fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            log::debug!("[arena] closed, command dropped");
        }
    }
    /// Latest published battle state.
    pub fn snapshot(&self) -> BattleState {
        self.snapshot.borrow().clone()
    }
    /// Watch channel of battle states, for renderers that redraw on change.
    pub fn snapshots(&self) -> watch::Receiver<BattleState> {
        self.snapshot.clone()
    }
    pub fn events(&mut self) -> &mut mpsc::UnboundedReceiver<Event> {
        &mut self.events
    }
    pub async fn next(&mut self) -> Option<Event> {
        self.events.recv().await
    }
    /// Consumes events until the match ends.
    pub async fn result(&mut self) -> Option<MatchResult> {
        while let Some(event) = self.next().await {
            if let Event::Finished(result) = event {
                return Some(result);
            }
        }
        None
    }
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl ArenaHandle {
    fn stop(&self) {
        if let Some(frames) = self.frames.as_ref() {
            frames.stop();
        }
        self.task.abort();
    }
}

impl Drop for ArenaHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
