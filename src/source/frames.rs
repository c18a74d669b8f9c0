use super::*;
use crate::gesture::GestureLabel;
use crate::gesture::Tracker;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Polls a [`LandmarkSource`] on its own task and publishes the
/// stabilized gesture on a watch channel.
///
/// The loop never waits on game state. It ends by itself when the source
/// reports no more frames, and is cancelled by [`FrameHandle::stop`] or by
/// dropping the handle.
pub struct FrameLoop;

impl FrameLoop {
    pub fn spawn<S>(source: S, tracker: Tracker, interval: Duration) -> FrameHandle
    where
        S: LandmarkSource,
    {
        let (tx, rx) = watch::channel(GestureLabel::None);
        let task = tokio::spawn(Self::run(source, tracker, interval, tx));
        FrameHandle { task, gestures: rx }
    }
    async fn run<S>(
        mut source: S,
        mut tracker: Tracker,
        interval: Duration,
        tx: watch::Sender<GestureLabel>,
    ) where
        S: LandmarkSource,
    {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        log::debug!("[frames] polling every {:?}", interval);
        loop {
            ticker.tick().await;
            let Some(timestamp) = source.timestamp() else {
                log::info!("[frames] source closed");
                break;
            };
            if !tracker.admit(timestamp) {
                continue;
            }
            let hands = source.detect(timestamp);
            let gesture = tracker.observe(&hands);
            tx.send_if_modified(|current| {
                let changed = *current != gesture;
                if changed {
                    log::debug!("[frames] gesture {} -> {}", current, gesture);
                    *current = gesture;
                }
                changed
            });
        }
        tx.send_replace(GestureLabel::None);
    }
}

/// Owner of a running frame loop.
#[derive(Debug)]
pub struct FrameHandle {
    task: JoinHandle<()>,
    gestures: watch::Receiver<GestureLabel>,
}

impl FrameHandle {
    /// A receiver for the stabilized gesture, for the battle to sample.
    pub fn gestures(&self) -> watch::Receiver<GestureLabel> {
        self.gestures.clone()
    }
    /// Latest stabilized gesture.
    pub fn gesture(&self) -> GestureLabel {
        *self.gestures.borrow()
    }
    /// Cancels the polling task. Takes effect before the next poll.
    pub fn stop(&self) {
        if !self.task.is_finished() {
            log::debug!("[frames] stopping");
            self.task.abort();
        }
    }
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for FrameHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
