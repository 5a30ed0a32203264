use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Dense observation vector produced by an environment.
pub type State = Array1<f32>;

/// Index into a discrete action space `[0, action_size)`.
pub type Action = usize;

/// One recorded environment interaction.
///
/// `next_state == None` marks a terminal transition: the episode ended at this
/// step and the target for it never bootstraps from a successor state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub state: State,
    pub action: Action,
    pub reward: f32,
    pub next_state: Option<State>,
}

impl Transition {
    pub fn new(state: State, action: Action, reward: f32, next_state: Option<State>) -> Self {
        Transition {
            state,
            action,
            reward,
            next_state,
        }
    }

    /// Builds a terminal transition (no successor state).
    pub fn terminal(state: State, action: Action, reward: f32) -> Self {
        Self::new(state, action, reward, None)
    }

    pub fn is_terminal(&self) -> bool {
        self.next_state.is_none()
    }
}

/// What an environment returns from a single `step` call.
#[derive(Clone, Debug, PartialEq)]
pub struct StepOutcome {
    pub observation: State,
    pub reward: f32,
    pub done: bool,
}

impl StepOutcome {
    pub fn new(observation: State, reward: f32, done: bool) -> Self {
        StepOutcome {
            observation,
            reward,
            done,
        }
    }
}

/// Index of the largest value, first one wins on ties.
///
/// NaN entries never win against a finite value. Returns `None` for an empty
/// slice.
pub fn argmax<'a, I>(values: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a f32>,
{
    let mut best: Option<(usize, f32)> = None;
    for (idx, &value) in values.into_iter().enumerate() {
        match best {
            None => best = Some((idx, value)),
            Some((_, current)) if value > current || (current.is_nan() && !value.is_nan()) => {
                best = Some((idx, value))
            }
            _ => {}
        }
    }
    best.map(|(idx, _)| idx)
}
