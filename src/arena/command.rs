/// Control input accepted by a running arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pause,
    Resume,
    /// Honored only while paused or after the match ends.
    Restart,
    Quit,
    /// Forces the enemy's move until cleared with `Override(None)`.
    /// Anything but fist, open_palm, or peace commits no move.
    Override(Option<String>),
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pause => write!(f, "pause"),
            Self::Resume => write!(f, "resume"),
            Self::Restart => write!(f, "restart"),
            Self::Quit => write!(f, "quit"),
            Self::Override(Some(label)) => write!(f, "override {}", label),
            Self::Override(None) => write!(f, "override"),
        }
    }
}
