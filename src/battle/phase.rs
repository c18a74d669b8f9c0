/// Where the current turn stands. `Paused` overlays any live phase.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Countdown,
    Reveal,
    Resolving,
    Paused,
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Countdown => write!(f, "countdown"),
            Self::Reveal => write!(f, "reveal"),
            Self::Resolving => write!(f, "resolving"),
            Self::Paused => write!(f, "paused"),
            Self::Finished => write!(f, "finished"),
        }
    }
}
