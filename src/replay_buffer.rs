use crate::types::Transition;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

/// Bounded FIFO store of transitions.
///
/// Holds at most `max_size` transitions; inserting into a full memory evicts the
/// single oldest entry first. Sampling is allowed once at least `train_size`
/// transitions are stored.
#[derive(Clone, Debug)]
pub struct ReplayMemory {
    buffer: VecDeque<Transition>,
    max_size: usize,
    train_size: usize,
}

impl ReplayMemory {
    /// Panics if `max_size` is zero; use `ReplayMemoryBuilder` for a checked
    /// construction.
    pub fn new(max_size: usize, train_size: usize) -> Self {
        assert!(max_size > 0, "Replay memory must hold at least one transition");
        ReplayMemory {
            buffer: VecDeque::with_capacity(max_size),
            max_size,
            train_size,
        }
    }

    /// Appends a transition, evicting the oldest one if the cap is exceeded.
    pub fn add(&mut self, transition: Transition) -> &Transition {
        self.buffer.push_back(transition);
        if self.buffer.len() > self.max_size {
            self.buffer.pop_front();
        }
        &self.buffer[self.buffer.len() - 1]
    }

    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn train_size(&self) -> usize {
        self.train_size
    }

    pub fn can_train(&self) -> bool {
        self.size() >= self.train_size
    }

    /// Stored transitions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Transition> {
        self.buffer.iter()
    }

    /// Every stored transition in a uniformly random order.
    ///
    /// Callers take consecutive chunks of the result as batches, so a single
    /// call never yields the same transition twice.
    pub fn sample_shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&Transition> {
        let mut samples: Vec<&Transition> = self.buffer.iter().collect();
        samples.shuffle(rng);
        samples
    }
}
