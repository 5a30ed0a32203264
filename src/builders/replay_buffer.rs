use crate::error::{DqnError, Result};
use crate::replay_buffer::ReplayMemory;

/// Builder for ReplayMemory
pub struct ReplayMemoryBuilder {
    max_size: Option<usize>,
    train_size: Option<usize>,
}

impl ReplayMemoryBuilder {
    /// Create a new replay memory builder
    pub fn new() -> Self {
        ReplayMemoryBuilder {
            max_size: None,
            train_size: None,
        }
    }

    /// Set the hard cap on stored transitions
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Set the occupancy required before training may start
    pub fn train_size(mut self, train_size: usize) -> Self {
        self.train_size = Some(train_size);
        self
    }

    /// Build the replay memory
    pub fn build(self) -> Result<ReplayMemory> {
        let max_size = self.max_size.ok_or_else(|| DqnError::InvalidParameter {
            name: "max_size".to_string(),
            reason: "Max size not specified".to_string(),
        })?;

        if max_size == 0 {
            return Err(DqnError::InvalidParameter {
                name: "max_size".to_string(),
                reason: "Max size must be greater than 0".to_string(),
            });
        }

        let train_size = self.train_size.ok_or_else(|| DqnError::InvalidParameter {
            name: "train_size".to_string(),
            reason: "Train size not specified".to_string(),
        })?;

        if train_size > max_size {
            return Err(DqnError::InvalidParameter {
                name: "train_size".to_string(),
                reason: format!(
                    "Train size {} exceeds max size {}; training could never start",
                    train_size, max_size
                ),
            });
        }

        Ok(ReplayMemory::new(max_size, train_size))
    }
}

impl Default for ReplayMemoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_memory_builder() {
        let memory = ReplayMemoryBuilder::new()
            .max_size(1000)
            .train_size(64)
            .build()
            .unwrap();

        assert_eq!(memory.max_size(), 1000);
        assert_eq!(memory.train_size(), 64);
        assert!(memory.is_empty());
    }

    #[test]
    fn test_zero_train_size_is_always_ready() {
        let memory = ReplayMemoryBuilder::new()
            .max_size(4)
            .train_size(0)
            .build()
            .unwrap();

        assert!(memory.can_train());
    }

    #[test]
    fn test_builder_errors() {
        // No max size
        let result = ReplayMemoryBuilder::new().train_size(1).build();
        assert!(result.is_err());

        // Zero max size
        let result = ReplayMemoryBuilder::new().max_size(0).train_size(1).build();
        assert!(result.is_err());

        // Train size above the cap
        let result = ReplayMemoryBuilder::new().max_size(10).train_size(11).build();
        assert!(matches!(result, Err(DqnError::InvalidParameter { .. })));
    }
}
