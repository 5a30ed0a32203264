use crate::error::Result;
use crate::types::{Action, StepOutcome};

/// An episodic environment with a discrete action space.
///
/// Sizes are fixed for the lifetime of the environment. `step(None)` is a probe:
/// it must return the current observation without taking an action, and the
/// agent ignores its reward and `done` flag.
pub trait Environment {
    /// Length of every observation vector.
    fn state_size(&self) -> usize;

    /// Number of discrete actions, valid actions are `0..action_size`.
    fn action_size(&self) -> usize;

    /// Upper bound on steps per training episode.
    fn max_step(&self) -> usize;

    fn step(&mut self, action: Option<Action>) -> Result<StepOutcome>;

    fn reset(&mut self) -> Result<()>;

    fn render(&mut self) -> Result<()>;
}
