use super::*;
use crate::battle::*;
use crate::gesture::GestureLabel;
use crate::*;
use rand::seq::IndexedRandom;
use std::sync::Arc;
use std::time::Duration;

/// Describes a scored turn to an announcer.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Prompt {
    pub player: Fighter,
    pub enemy: Fighter,
    pub player_move: GestureLabel,
    pub enemy_move: GestureLabel,
    pub outcome: Outcome,
    pub finisher: bool,
}

impl Prompt {
    pub fn new(config: &Config, strike: &Strike) -> Self {
        Self {
            player: config.player.clone(),
            enemy: config.enemy.clone(),
            player_move: strike.player,
            enemy_move: strike.enemy,
            outcome: strike.outcome,
            finisher: strike.finisher,
        }
    }
    /// Plain-language verdict.
    pub fn verdict(&self) -> String {
        match self.outcome {
            Outcome::Win if self.finisher => format!("{} lands a finisher", self.player),
            Outcome::Win => format!("{} wins the exchange", self.player),
            Outcome::Loss => format!("{} wins the exchange", self.enemy),
            Outcome::Tie => String::from("a tie"),
        }
    }
    /// Request text for a text-generation announcer.
    pub fn render(&self) -> String {
        format!(
            "Context: A battle between {p} and {e}.\n\
             Action: {p} used {pm}, while {e} used {em}.\n\
             Result: {v}.\n\
             Task: Write a short, hype, 1-sentence commentary in the style of a battle announcer.",
            p = self.player,
            e = self.enemy,
            pm = self.player_move,
            em = self.enemy_move,
            v = self.verdict(),
        )
    }
}

/// Produces one line of commentary per resolved turn.
///
/// Implementations may be slow or fail; the arena bounds every call with a
/// timeout and substitutes [`FALLBACK_COMMENTARY`].
#[async_trait::async_trait]
pub trait Commentator: Send + Sync {
    async fn line(&self, prompt: &Prompt) -> anyhow::Result<String>;
}

/// Local canned lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct Announcer;

impl Announcer {
    const WINS: [&str; 3] = [
        "{p} reads {e} perfectly and strikes!",
        "A clean hit from {p}!",
        "{p} presses the advantage!",
    ];
    const LOSSES: [&str; 3] = [
        "{e} counters and {p} takes the hit!",
        "Ouch! {e} saw that coming!",
        "{e} strikes back hard!",
    ];
    const TIES: [&str; 2] = [
        "{p} and {e} clash with equal force!",
        "Neither fighter gives an inch!",
    ];
    const FINISHERS: [&str; 2] = [
        "{p} unleashes a devastating finisher on {e}!",
        "Three in a row! {p} goes all out!",
    ];

    fn call(&self, prompt: &Prompt) -> String {
        let ref mut rng = rand::rng();
        let lines: &[&str] = match prompt.outcome {
            Outcome::Win if prompt.finisher => &Self::FINISHERS,
            Outcome::Win => &Self::WINS,
            Outcome::Loss => &Self::LOSSES,
            Outcome::Tie => &Self::TIES,
        };
        lines
            .choose(rng)
            .copied()
            .unwrap_or(FALLBACK_COMMENTARY)
            .replace("{p}", prompt.player.name())
            .replace("{e}", prompt.enemy.name())
    }
}

#[async_trait::async_trait]
impl Commentator for Announcer {
    async fn line(&self, prompt: &Prompt) -> anyhow::Result<String> {
        Ok(self.call(prompt))
    }
}

/// Never has anything to say.
#[derive(Debug, Default, Clone, Copy)]
pub struct Muted;

#[async_trait::async_trait]
impl Commentator for Muted {
    async fn line(&self, _: &Prompt) -> anyhow::Result<String> {
        Err(anyhow::anyhow!("commentary unavailable"))
    }
}

/// Asks for a line, falling back on error, empty output, or timeout.
pub async fn narrate(commentator: Arc<dyn Commentator>, prompt: Prompt, timeout: Duration) -> String {
    match tokio::time::timeout(timeout, commentator.line(&prompt)).await {
        Ok(Ok(line)) if !line.trim().is_empty() => line.trim().to_string(),
        Ok(Ok(_)) => {
            log::debug!("[commentary] empty line");
            FALLBACK_COMMENTARY.to_string()
        }
        Ok(Err(e)) => {
            log::warn!("[commentary] {}", e);
            FALLBACK_COMMENTARY.to_string()
        }
        Err(_) => {
            log::warn!("[commentary] no line after {:?}", timeout);
            FALLBACK_COMMENTARY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use GestureLabel::*;
    struct Sleepy;
    #[async_trait::async_trait]
    impl Commentator for Sleepy {
        async fn line(&self, _: &Prompt) -> anyhow::Result<String> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(String::from("too late"))
        }
    }
    struct Blank;
    #[async_trait::async_trait]
    impl Commentator for Blank {
        async fn line(&self, _: &Prompt) -> anyhow::Result<String> {
            Ok(String::from("   "))
        }
    }
    fn prompt(player: GestureLabel, enemy: GestureLabel, streak: Streak) -> Prompt {
        Prompt::new(&Config::default(), &Strike::new(player, enemy, streak))
    }
    #[test]
    fn render_names_fighters_and_moves() {
        let text = prompt(Fist, Peace, 0).render();
        assert!(text.contains("Agumon used fist, while Gabumon used peace"));
        assert!(text.contains("Result: Agumon wins the exchange."));
    }
    #[test]
    fn finisher_verdict() {
        assert_eq!(prompt(Fist, Peace, 2).verdict(), "Agumon lands a finisher");
        assert_eq!(prompt(Fist, Fist, 2).verdict(), "a tie");
    }
    #[tokio::test]
    async fn announcer_fills_names() {
        let line = Announcer.line(&prompt(Peace, Fist, 0)).await.unwrap();
        assert!(!line.contains('{'));
        assert!(!line.is_empty());
    }
    #[tokio::test]
    async fn muted_falls_back() {
        let line = narrate(Arc::new(Muted), prompt(Fist, Fist, 0), COMMENTARY_TIMEOUT).await;
        assert_eq!(line, FALLBACK_COMMENTARY);
    }
    #[tokio::test]
    async fn blank_falls_back() {
        let line = narrate(Arc::new(Blank), prompt(Fist, Fist, 0), COMMENTARY_TIMEOUT).await;
        assert_eq!(line, FALLBACK_COMMENTARY);
    }
    #[tokio::test(start_paused = true)]
    async fn slow_commentator_times_out() {
        let start = tokio::time::Instant::now();
        let line = narrate(Arc::new(Sleepy), prompt(Fist, Peace, 0), COMMENTARY_TIMEOUT).await;
        assert_eq!(line, FALLBACK_COMMENTARY);
        assert_eq!(start.elapsed(), COMMENTARY_TIMEOUT);
    }
}
