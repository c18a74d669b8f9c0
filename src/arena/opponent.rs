use crate::gesture::GestureLabel;
use rand::seq::IndexedRandom;

/// Picks the enemy's move at each reveal.
pub trait Opponent: Send + 'static {
    fn choose(&mut self) -> GestureLabel;
}

/// Uniformly random among the three cycle moves.
#[derive(Debug, Default, Clone, Copy)]
pub struct Fish;

impl Opponent for Fish {
    fn choose(&mut self) -> GestureLabel {
        let ref mut rng = rand::rng();
        GestureLabel::MOVES
            .choose(rng)
            .copied()
            .expect("non empty move set")
    }
}

/// Plays a fixed sequence of moves, wrapping around.
#[derive(Debug, Clone)]
pub struct Scripted {
    moves: Vec<GestureLabel>,
    cursor: usize,
}

impl Scripted {
    pub fn new(moves: Vec<GestureLabel>) -> Self {
        Self { moves, cursor: 0 }
    }
}

impl Opponent for Scripted {
    fn choose(&mut self) -> GestureLabel {
        let Some(&label) = self.moves.get(self.cursor % self.moves.len().max(1)) else {
            return GestureLabel::None;
        };
        self.cursor += 1;
        label
    }
}
