use super::*;
use std::collections::VecDeque;

/// Bounded FIFO of the most recent raw labels for one hand.
#[derive(Debug, Clone)]
pub struct History {
    labels: VecDeque<GestureLabel>,
    capacity: usize,
}

impl History {
    /// A window of at least one label.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            labels: VecDeque::with_capacity(capacity),
            capacity,
        }
    }
    /// Appends a label, evicting the oldest once full.
    pub fn push(&mut self, label: GestureLabel) {
        if self.labels.len() == self.capacity {
            self.labels.pop_front();
        }
        self.labels.push_back(label);
    }
    pub fn clear(&mut self) {
        self.labels.clear();
    }
    pub fn len(&self) -> usize {
        self.labels.len()
    }
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    /// Occurrences of each label, indexed by `label as usize`.
    pub fn tally(&self) -> [usize; 5] {
        self.labels.iter().fold([0; 5], |mut counts, label| {
            counts[*label as usize] += 1;
            counts
        })
    }
    /// Most frequent label and its count. Ties go to the most recent label.
    pub fn mode(&self) -> Option<(GestureLabel, usize)> {
        let counts = self.tally();
        self.labels
            .iter()
            .rev()
            .map(|label| (*label, counts[*label as usize]))
            .fold(None, |best, (label, count)| match best {
                Some((_, most)) if most >= count => best,
                _ => Some((label, count)),
            })
    }
    pub fn iter(&self) -> impl Iterator<Item = &GestureLabel> {
        self.labels.iter()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(crate::HISTORY_WINDOW)
    }
}
