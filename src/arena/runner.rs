use super::*;
use crate::battle::*;
use crate::gesture::GestureLabel;
use crate::*;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Imperative shell around the [`Engine`].
///
/// A single task owns the engine, the one-second clock, the current dwell,
/// and at most one in-flight commentary request, and multiplexes them with
/// commands. Perception only reaches the arena through the gesture watch
/// channel, read once per reveal.
pub struct Arena {
    config: Config,
    engine: Engine,
    gestures: watch::Receiver<GestureLabel>,
    opponent: Box<dyn Opponent>,
    commentator: Arc<dyn Commentator>,
    commands: mpsc::UnboundedReceiver<Command>,
    snapshot: watch::Sender<BattleState>,
    events: mpsc::UnboundedSender<Event>,
    clock: Timer,
    dwell: Timer,
    commentary: Option<JoinHandle<String>>,
    forced: Option<GestureLabel>,
}

impl Arena {
    pub fn spawn<O, C>(
        config: Config,
        gestures: watch::Receiver<GestureLabel>,
        opponent: O,
        commentator: C,
    ) -> ArenaHandle
    where
        O: Opponent,
        C: Commentator + 'static,
    {
        let engine = Engine::new(config.match_seconds, config.turn_seconds);
        let (commands, rx) = mpsc::unbounded_channel();
        let (events, events_rx) = mpsc::unbounded_channel();
        let (snapshot, snapshot_rx) = watch::channel(engine.state().clone());
        let arena = Self {
            config,
            engine,
            gestures,
            opponent: Box::new(opponent),
            commentator: Arc::new(commentator),
            commands: rx,
            snapshot,
            events,
            clock: Timer::default(),
            dwell: Timer::default(),
            commentary: None,
            forced: None,
        };
        ArenaHandle {
            commands,
            snapshot: snapshot_rx,
            events: events_rx,
            task: tokio::spawn(arena.run()),
            frames: None,
        }
    }
}

impl Arena {
    async fn run(mut self) {
        log::info!("[arena] {} vs {}", self.config.player, self.config.enemy);
        self.begin();
        loop {
            let paused = self.engine.is_paused();
            tokio::select! {
                biased;
                command = self.commands.recv() => match command {
                    Some(Command::Quit) | None => break,
                    Some(command) => self.command(command),
                },
                _ = Timer::wait(self.clock.deadline()) => self.tick(),
                _ = Timer::wait(self.dwell.deadline()) => self.elapse(),
                line = Self::listen(&mut self.commentary), if !paused => self.narrated(line),
            }
            self.publish();
        }
        self.silence();
        log::info!("[arena] closed");
    }
    async fn listen(task: &mut Option<JoinHandle<String>>) -> String {
        match task {
            Some(handle) => handle
                .await
                .unwrap_or_else(|_| FALLBACK_COMMENTARY.to_string()),
            None => std::future::pending().await,
        }
    }
}

impl Arena {
    fn begin(&mut self) {
        self.clock.start(TICK);
        self.dwell.clear();
        self.countdown();
        self.publish();
    }
    /// One second elapsed on the match clock.
    fn tick(&mut self) {
        self.clock.start(TICK);
        match self.engine.tick() {
            Clock::Idle => {}
            Clock::Running => {
                self.emit(Event::Clock {
                    seconds: self.engine.state().match_seconds(),
                });
                if self.engine.phase() == Phase::Countdown {
                    self.countdown();
                }
            }
            Clock::Reveal => {
                self.emit(Event::Clock {
                    seconds: self.engine.state().match_seconds(),
                });
                self.reveal();
            }
            Clock::Expired => {
                self.emit(Event::Clock { seconds: 0 });
                self.finish();
            }
        }
    }
    /// Commits both moves. The player's is whatever is stable right now.
    fn reveal(&mut self) {
        let player = *self.gestures.borrow();
        let enemy = self.forced.unwrap_or_else(|| self.opponent.choose());
        if self.engine.reveal(player, enemy) {
            self.emit(Event::Reveal {
                turn: self.engine.state().turn(),
                player,
                enemy,
            });
            self.dwell.start(self.config.reveal);
        }
    }
    /// The current dwell ran out: score a revealed turn, or move on from a
    /// displayed result.
    fn elapse(&mut self) {
        self.dwell.clear();
        match self.engine.phase() {
            Phase::Reveal => self.resolve(),
            Phase::Resolving => {
                if self.engine.advance() {
                    self.countdown();
                }
            }
            phase => log::debug!("[arena] dwell ended in {}", phase),
        }
    }
    fn resolve(&mut self) {
        let Some(strike) = self.engine.resolve() else {
            return;
        };
        let prompt = Prompt::new(&self.config, &strike);
        let commentator = self.commentator.clone();
        let timeout = self.config.commentary;
        self.commentary = Some(tokio::spawn(narrate(commentator, prompt, timeout)));
    }
    /// Commentary arrived; apply the pending strike together with it.
    fn narrated(&mut self, line: String) {
        self.commentary = None;
        let Some(record) = self.engine.commit(line) else {
            return;
        };
        log::info!("[arena] {}", record);
        let state = self.engine.state();
        let finisher = record.finisher();
        self.emit(Event::Resolved {
            player_hp: state.player_hp(),
            enemy_hp: state.enemy_hp(),
            streak: state.streak(),
            finisher,
            record,
        });
        if self.engine.is_finished() {
            self.finish();
        } else {
            self.dwell.start(self.config.dwell(finisher));
        }
    }
    fn finish(&mut self) {
        self.clock.clear();
        self.dwell.clear();
        self.silence();
        if let Some(result) = self.engine.result() {
            log::info!("[arena] {}", result);
            self.emit(Event::Finished(result));
        }
    }
}

impl Arena {
    fn command(&mut self, command: Command) {
        log::debug!("[arena] command {}", command);
        match command {
            Command::Pause => {
                if self.engine.pause() {
                    self.clock.pause();
                    self.dwell.pause();
                    self.emit(Event::Paused);
                }
            }
            Command::Resume => {
                if self.engine.resume() {
                    self.clock.resume();
                    self.dwell.resume();
                    self.emit(Event::Resumed);
                }
            }
            Command::Restart => {
                if self.engine.restart() {
                    self.silence();
                    self.emit(Event::Restarted);
                    self.begin();
                } else {
                    log::debug!("[arena] restart ignored while {}", self.engine.phase());
                }
            }
            Command::Override(Some(label)) => {
                let forced = GestureLabel::try_move(&label)
                    .inspect_err(|e| log::debug!("[arena] override rejected: {}", e))
                    .unwrap_or(GestureLabel::None);
                self.forced = Some(forced);
            }
            Command::Override(None) => self.forced = None,
            Command::Quit => {}
        }
    }
    fn countdown(&self) {
        let state = self.engine.state();
        self.emit(Event::Countdown {
            turn: state.turn(),
            seconds: state.turn_seconds(),
        });
    }
    fn silence(&mut self) {
        if let Some(task) = self.commentary.take() {
            task.abort();
        }
    }
    fn publish(&self) {
        self.snapshot.send_if_modified(|state| {
            let changed = state != self.engine.state();
            if changed {
                *state = self.engine.state().clone();
            }
            changed
        });
    }
    fn emit(&self, event: Event) {
        log::trace!("[arena] {}", event);
        let _ = self.events.send(event);
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        self.silence();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use GestureLabel::*;

    struct Sleepy;
    #[async_trait::async_trait]
    impl Commentator for Sleepy {
        async fn line(&self, _: &Prompt) -> anyhow::Result<String> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(String::from("too late"))
        }
    }

    fn arena<C>(
        player: GestureLabel,
        enemy: Vec<GestureLabel>,
        commentator: C,
    ) -> (ArenaHandle, watch::Sender<GestureLabel>)
    where
        C: Commentator + 'static,
    {
        let (tx, rx) = watch::channel(player);
        let handle = Arena::spawn(Config::default(), rx, Scripted::new(enemy), commentator);
        (handle, tx)
    }
    async fn resolved(handle: &mut ArenaHandle) -> TurnRecord {
        loop {
            match handle.next().await {
                Some(Event::Resolved { record, .. }) => return record,
                Some(_) => continue,
                Option::None => panic!("arena closed"),
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn three_wins_knock_out() {
        let (mut handle, _tx) = arena(Fist, vec![Peace], Announcer);
        let result = handle.result().await.expect("finished");
        assert_eq!(result.winner, Winner::Player);
        assert_eq!(result.turns, 3);
        assert_eq!(result.wins, 3);
        assert_eq!(result.enemy_hp, 0);
        let state = handle.snapshot();
        assert_eq!(state.phase(), Phase::Finished);
        assert_eq!(state.turn(), 3);
        assert!(state.latest().expect("logged").finisher());
    }
    #[tokio::test(start_paused = true)]
    async fn first_reveal_after_three_seconds() {
        let start = tokio::time::Instant::now();
        let (mut handle, _tx) = arena(Fist, vec![Peace], Announcer);
        loop {
            if let Some(Event::Reveal { turn, player, enemy }) = handle.next().await {
                assert_eq!((turn, player, enemy), (1, Fist, Peace));
                break;
            }
        }
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }
    #[tokio::test(start_paused = true)]
    async fn reveal_reads_the_current_gesture() {
        let (mut handle, tx) = arena(None, vec![Peace], Announcer);
        tx.send_replace(OpenPalm);
        let record = resolved(&mut handle).await;
        assert_eq!(record.player(), OpenPalm);
        assert_eq!(record.outcome(), Outcome::Loss);
        assert_eq!(handle.snapshot().player_hp(), 80);
    }
    #[tokio::test(start_paused = true)]
    async fn absent_player_forfeits_ten() {
        let (mut handle, _tx) = arena(None, vec![Fist], Announcer);
        let record = resolved(&mut handle).await;
        assert_eq!(record.outcome(), Outcome::Loss);
        assert_eq!(handle.snapshot().player_hp(), 90);
    }
    #[tokio::test(start_paused = true)]
    async fn failed_commentary_falls_back() {
        let (mut handle, _tx) = arena(Fist, vec![Fist], Muted);
        let record = resolved(&mut handle).await;
        assert_eq!(record.message(), FALLBACK_COMMENTARY);
        assert_eq!(record.outcome(), Outcome::Tie);
    }
    #[tokio::test(start_paused = true)]
    async fn slow_commentary_times_out() {
        let start = tokio::time::Instant::now();
        let (mut handle, _tx) = arena(Fist, vec![Peace], Sleepy);
        let record = resolved(&mut handle).await;
        assert_eq!(record.message(), FALLBACK_COMMENTARY);
        assert_eq!(start.elapsed(), Duration::from_millis(3000 + 1500 + 3000));
    }
    #[tokio::test(start_paused = true)]
    async fn pause_freezes_the_match() {
        let (handle, _tx) = arena(Fist, vec![Fist], Announcer);
        tokio::time::sleep(Duration::from_millis(1500)).await;
        handle.pause();
        tokio::time::sleep(Duration::from_millis(10)).await;
        let frozen = handle.snapshot();
        assert_eq!(frozen.phase(), Phase::Paused);
        assert_eq!(frozen.match_seconds(), 59);
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(handle.snapshot(), frozen);
        handle.resume();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(handle.snapshot().phase(), Phase::Countdown);
        assert_eq!(handle.snapshot().match_seconds(), 59);
        // half a second was left on the clock when paused
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(handle.snapshot().match_seconds(), 58);
    }
    #[tokio::test(start_paused = true)]
    async fn pause_twice_is_pause_once() {
        let (mut handle, _tx) = arena(Fist, vec![Fist], Announcer);
        handle.pause();
        handle.pause();
        handle.resume();
        handle.resume();
        let mut seen = Vec::new();
        while seen.len() < 3 {
            match handle.next().await {
                Some(event @ (Event::Paused | Event::Resumed | Event::Clock { .. })) => {
                    seen.push(event)
                }
                Some(_) => continue,
                Option::None => break,
            }
        }
        assert_eq!(seen[0], Event::Paused);
        assert_eq!(seen[1], Event::Resumed);
        assert!(matches!(seen[2], Event::Clock { .. }));
    }
    #[tokio::test(start_paused = true)]
    async fn restart_only_while_paused() {
        let (mut handle, _tx) = arena(Fist, vec![Peace], Announcer);
        resolved(&mut handle).await;
        handle.restart();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(handle.snapshot().enemy_hp(), 80);
        handle.pause();
        handle.restart();
        tokio::time::sleep(Duration::from_millis(10)).await;
        let state = handle.snapshot();
        assert_eq!(state, BattleState::default());
        assert!(state.latest().is_none());
    }
    #[tokio::test(start_paused = true)]
    async fn restart_after_knockout() {
        let (mut handle, _tx) = arena(Fist, vec![Peace], Announcer);
        handle.result().await.expect("finished");
        handle.restart();
        let record = resolved(&mut handle).await;
        assert_eq!(record.turn(), 1);
        assert_eq!(handle.snapshot().enemy_hp(), 80);
    }
    #[tokio::test(start_paused = true)]
    async fn restart_drops_pending_commentary() {
        let (mut handle, _tx) = arena(Fist, vec![Peace], Sleepy);
        loop {
            if let Some(Event::Reveal { .. }) = handle.next().await {
                break;
            }
        }
        // reveal dwell elapses, commentary is now in flight
        tokio::time::sleep(Duration::from_millis(1600)).await;
        handle.pause();
        handle.restart();
        handle.resume();
        tokio::time::sleep(Duration::from_secs(5)).await;
        let state = handle.snapshot();
        assert!(state.latest().is_none());
        assert_eq!(state.enemy_hp(), 100);
    }
    #[tokio::test(start_paused = true)]
    async fn invalid_override_commits_no_move() {
        let (mut handle, _tx) = arena(Fist, vec![Peace], Announcer);
        handle.override_move(Some("swipe"));
        let record = resolved(&mut handle).await;
        assert_eq!(record.enemy(), None);
        assert_eq!(record.outcome(), Outcome::Win);
        handle.override_move(Some("open_palm"));
        let record = resolved(&mut handle).await;
        assert_eq!(record.enemy(), OpenPalm);
        handle.override_move(Option::None);
        let record = resolved(&mut handle).await;
        assert_eq!(record.enemy(), Peace);
    }
    #[tokio::test(start_paused = true)]
    async fn time_out_decides_on_hp() {
        let config = Config {
            match_seconds: 5,
            ..Config::default()
        };
        let (_tx, rx) = watch::channel(Fist);
        let mut handle = Arena::spawn(config, rx, Scripted::new(vec![Peace]), Announcer);
        let result = handle.result().await.expect("finished");
        assert_eq!(result.turns, 1);
        assert_eq!(result.winner, Winner::Player);
        assert_eq!(handle.snapshot().match_seconds(), 0);
    }
    #[tokio::test(start_paused = true)]
    async fn quit_stops_the_frame_loop() {
        use crate::gesture::Handedness;
        use crate::source::*;
        let config = Config::default();
        let script = Script::default().hold(Fist, Handedness::Right, 10_000);
        let frames = FrameLoop::spawn(script, config.tracker(), config.frames);
        let gestures = frames.gestures();
        let handle = Arena::spawn(config, gestures, Scripted::new(vec![Peace]), Announcer)
            .with_frames(frames);
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(handle.frames().map(FrameHandle::is_running), Some(true));
        handle.quit();
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(handle.frames().map(FrameHandle::is_running), Some(false));
        assert!(!handle.is_running());
    }
    #[tokio::test(start_paused = true)]
    async fn quit_stops_the_task() {
        let (handle, _tx) = arena(Fist, vec![Peace], Announcer);
        handle.quit();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!handle.is_running());
    }
}
