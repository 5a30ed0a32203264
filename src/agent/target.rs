use crate::error::{DqnError, Result};
use crate::model::Model;
use crate::types::{argmax, Transition};
use serde::{Deserialize, Serialize};

/// Which target-network discipline the agent follows during replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Target starts as the online model and is re-snapshotted after every
    /// mini-batch update.
    Dqn,
    /// Target is snapshotted once at the start of each replay call and stays
    /// fixed for every mini-batch in it.
    DoubleDqn,
}

impl Variant {
    pub fn from_ddqn(ddqn: bool) -> Self {
        if ddqn {
            Variant::DoubleDqn
        } else {
            Variant::Dqn
        }
    }
}

/// The model used to evaluate bootstrap actions.
///
/// The slot is only ever replaced as a whole, so the frozen copy can never
/// alias the online model.
#[derive(Debug)]
pub enum TargetSlot<M> {
    /// Evaluate with the online model itself.
    Online,
    /// Evaluate with an owned snapshot.
    Frozen(M),
}

impl<M> TargetSlot<M> {
    pub fn frozen(&self) -> Option<&M> {
        match self {
            TargetSlot::Online => None,
            TargetSlot::Frozen(model) => Some(model),
        }
    }

    /// Resolves the slot against the online model.
    pub fn resolve<'a>(&'a self, online: &'a M) -> &'a M {
        match self {
            TargetSlot::Online => online,
            TargetSlot::Frozen(model) => model,
        }
    }
}

/// Bootstrap target for one transition.
///
/// Terminal transitions return `reward` exactly. Otherwise the next action is
/// picked by `online` and its value is read from `target`:
/// `reward + gamma * target(next)[argmax online(next)]`.
pub fn q_target<M: Model>(
    online: &M,
    target: &M,
    transition: &Transition,
    gamma: f32,
) -> Result<f32> {
    let next_state = match &transition.next_state {
        None => return Ok(transition.reward),
        Some(next_state) => next_state,
    };

    let online_values = online.predict(next_state.view())?;
    let next_action = argmax(online_values.iter())
        .ok_or_else(|| DqnError::Model("Model predicted no action values".to_string()))?;

    let target_values = target.predict(next_state.view())?;
    if target_values.len() != online_values.len() {
        return Err(DqnError::dimension_mismatch(
            format!("{} target action values", online_values.len()),
            format!("{}", target_values.len()),
        ));
    }

    Ok(transition.reward + gamma * target_values[next_action])
}
