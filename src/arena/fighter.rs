use rand::seq::IndexedRandom;

/// Names the enemy is drawn from when none is chosen.
pub const STARTERS: [&str; 3] = ["Agumon", "Gabumon", "Patamon"];

/// A named combatant. Purely cosmetic: names flow into events and commentary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Fighter(String);

impl Fighter {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
    pub fn name(&self) -> &str {
        &self.0
    }
    pub fn random_starter() -> Self {
        let ref mut rng = rand::rng();
        STARTERS
            .choose(rng)
            .copied()
            .map(Self::from)
            .unwrap_or_default()
    }
}

impl From<&str> for Fighter {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Default for Fighter {
    fn default() -> Self {
        Self::from(STARTERS[0])
    }
}

impl std::fmt::Display for Fighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
