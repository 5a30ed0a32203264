use crate::error::{DqnError, Result};
use serde::{Deserialize, Serialize};

/// Training hyperparameters for an [`Agent`](crate::agent::Agent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Hard cap on stored transitions
    pub max_memory_size: usize,

    /// Occupancy required before replay; `None` means `batch_size`
    pub train_memory_size: Option<usize>,

    pub batch_size: usize,

    /// Discount factor in `[0, 1)`
    pub gamma: f32,

    /// Freeze the target once per episode (Double DQN) instead of after every batch
    pub ddqn: bool,

    /// Seed for the agent's random source; `None` seeds from OS entropy
    pub seed: Option<u64>,

    /// Number of episode records kept in the training history
    pub history_size: usize,
}

impl AgentConfig {
    pub fn train_size(&self) -> usize {
        self.train_memory_size.unwrap_or(self.batch_size)
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(DqnError::invalid_parameter(
                "batch_size",
                "Batch size must be greater than 0",
            ));
        }

        if self.max_memory_size == 0 {
            return Err(DqnError::invalid_parameter(
                "max_memory_size",
                "Memory size must be greater than 0",
            ));
        }

        if !self.gamma.is_finite() || self.gamma < 0.0 || self.gamma >= 1.0 {
            return Err(DqnError::InvalidParameter {
                name: "gamma".to_string(),
                reason: format!("Discount factor {} must lie in [0, 1)", self.gamma),
            });
        }

        if self.train_size() > self.max_memory_size {
            return Err(DqnError::InvalidParameter {
                name: "train_memory_size".to_string(),
                reason: format!(
                    "Train size {} exceeds memory size {}",
                    self.train_size(),
                    self.max_memory_size
                ),
            });
        }

        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            max_memory_size: 1024,
            train_memory_size: None,
            batch_size: 64,
            gamma: 0.99,
            ddqn: true,
            seed: None,
            history_size: 1000,
        }
    }
}
