use std::time::Duration;
use tokio::time::Instant;

/// A single pausable deadline.
///
/// Pausing freezes the remaining time; resuming re-arms from that
/// remainder, so time spent paused is never caught up.
#[derive(Debug, Default)]
pub struct Timer {
    deadline: Option<Instant>,
    frozen: Option<Duration>,
}

impl Timer {
    pub fn start(&mut self, after: Duration) {
        self.deadline = Some(Instant::now() + after);
        self.frozen = None;
    }
    pub fn clear(&mut self) {
        self.deadline = None;
        self.frozen = None;
    }
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
    pub fn is_frozen(&self) -> bool {
        self.frozen.is_some()
    }
    pub fn expired(&self) -> bool {
        self.deadline.map(|d| Instant::now() >= d).unwrap_or(false)
    }
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
            .or(self.frozen)
    }
    pub fn pause(&mut self) {
        if let Some(deadline) = self.deadline.take() {
            self.frozen = Some(deadline.saturating_duration_since(Instant::now()));
        }
    }
    pub fn resume(&mut self) {
        if let Some(remaining) = self.frozen.take() {
            self.deadline = Some(Instant::now() + remaining);
        }
    }
    /// Sleeps until `deadline`, or forever when there is none.
    pub async fn wait(deadline: Option<Instant>) {
        match deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const SECOND: Duration = Duration::from_secs(1);
    #[test]
    fn timer_starts_cleared() {
        let timer = Timer::default();
        assert!(timer.deadline().is_none());
        assert!(!timer.expired());
        assert!(timer.remaining().is_none());
    }
    #[tokio::test(start_paused = true)]
    async fn timer_expires() {
        let mut timer = Timer::default();
        timer.start(SECOND);
        assert!(!timer.expired());
        tokio::time::advance(SECOND).await;
        assert!(timer.expired());
    }
    #[tokio::test(start_paused = true)]
    async fn pause_freezes_remaining() {
        let mut timer = Timer::default();
        timer.start(SECOND);
        tokio::time::advance(Duration::from_millis(400)).await;
        timer.pause();
        assert!(!timer.is_armed());
        tokio::time::advance(10 * SECOND).await;
        assert_eq!(timer.remaining(), Some(Duration::from_millis(600)));
        timer.resume();
        assert!(!timer.expired());
        tokio::time::advance(Duration::from_millis(600)).await;
        assert!(timer.expired());
    }
    #[tokio::test(start_paused = true)]
    async fn clear_drops_frozen_time() {
        let mut timer = Timer::default();
        timer.start(SECOND);
        timer.pause();
        timer.clear();
        timer.resume();
        assert!(!timer.is_armed());
        assert!(!timer.is_frozen());
    }
    #[tokio::test(start_paused = true)]
    async fn wait_without_deadline_never_fires() {
        let waited = tokio::time::timeout(10 * SECOND, Timer::wait(None)).await;
        assert!(waited.is_err());
    }
}
