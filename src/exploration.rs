//! # Exploration Policies
//!
//! An exploration policy decides, once per action choice, whether the agent
//! should exploit its model (arg-max over predicted action values) or take a
//! uniformly random action.
//!
//! The default [`EpsilonGreedy`] policy decays its exploration probability by a
//! constant factor on every call. Decay is driven by the number of calls, not
//! by the episode number passed in.

use crate::error::{DqnError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Exploit-or-explore decision source used by the agent.
pub trait ExplorationPolicy {
    /// Returns `true` when the agent should act greedily on its model.
    fn should_exploit<R: Rng + ?Sized>(&mut self, episode: usize, rng: &mut R) -> bool;

    /// Current probability of exploring, for logging.
    fn exploration_rate(&self) -> f32;
}

/// Time-decayed ε-greedy policy.
///
/// The effective exploration probability is `base_eps + eps`. While it is at
/// most 1, each call multiplies `eps` by `decay` and then explores with
/// probability `effective` (computed before the decay). Once `effective` is
/// strictly greater than 1 the policy is saturated: it exploits on every call
/// and never mutates again.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpsilonGreedy {
    eps: f32,
    base_eps: f32,
    decay: f32,
}

impl EpsilonGreedy {
    pub fn new(base_eps: f32, initial_eps: f32, decay: f32) -> Result<Self> {
        if !base_eps.is_finite() || base_eps < 0.0 {
            return Err(DqnError::invalid_parameter(
                "base_eps",
                "Must be a finite, non-negative probability",
            ));
        }
        if !initial_eps.is_finite() || initial_eps < 0.0 {
            return Err(DqnError::invalid_parameter(
                "initial_eps",
                "Must be a finite, non-negative probability",
            ));
        }
        if !(decay > 0.0 && decay < 1.0) {
            return Err(DqnError::invalid_parameter(
                "decay",
                "Must lie strictly between 0 and 1",
            ));
        }

        Ok(EpsilonGreedy {
            eps: initial_eps,
            base_eps,
            decay,
        })
    }

    pub fn eps(&self) -> f32 {
        self.eps
    }

    pub fn base_eps(&self) -> f32 {
        self.base_eps
    }

    pub fn decay(&self) -> f32 {
        self.decay
    }

    /// `base_eps + eps`, the probability of exploring on the next call.
    pub fn effective(&self) -> f32 {
        self.base_eps + self.eps
    }

    pub fn is_saturated(&self) -> bool {
        self.effective() > 1.0
    }
}

impl Default for EpsilonGreedy {
    fn default() -> Self {
        EpsilonGreedy {
            eps: 0.5,
            base_eps: 0.0001,
            decay: 0.9,
        }
    }
}

impl ExplorationPolicy for EpsilonGreedy {
    fn should_exploit<R: Rng + ?Sized>(&mut self, _episode: usize, rng: &mut R) -> bool {
        let effective = self.effective();
        if effective > 1.0 {
            return true;
        }

        self.eps *= self.decay;
        effective <= rng.gen::<f32>()
    }

    fn exploration_rate(&self) -> f32 {
        self.effective().min(1.0)
    }
}

/// Always exploits. Useful for evaluation and deterministic tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Greedy;

impl ExplorationPolicy for Greedy {
    fn should_exploit<R: Rng + ?Sized>(&mut self, _episode: usize, _rng: &mut R) -> bool {
        true
    }

    fn exploration_rate(&self) -> f32 {
        0.0
    }
}
