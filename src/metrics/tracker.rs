use crate::types::{Action, State};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Log entry for one finished training episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub episode: usize,

    /// Step index at which the episode ended
    pub step: usize,

    /// Last non-terminal observation of the episode
    pub observation: Option<State>,

    pub action: Action,

    /// Reward of the terminal transition
    pub reward: f32,

    /// Mean replay loss, `None` when no update ran this episode
    pub loss: Option<f32>,

    /// Exploration probability at the end of the episode
    pub epsilon: f32,
}

/// Bounded history of episode records
pub struct TrainingHistory {
    records: VecDeque<EpisodeRecord>,
    history_size: usize,
}

impl TrainingHistory {
    pub fn new(history_size: usize) -> Self {
        TrainingHistory {
            records: VecDeque::with_capacity(history_size.min(4096)),
            history_size,
        }
    }

    /// Record a finished episode, dropping the oldest one when full
    pub fn push(&mut self, record: EpisodeRecord) {
        if self.history_size == 0 {
            return;
        }
        if self.records.len() >= self.history_size {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub fn records(&self) -> impl Iterator<Item = &EpisodeRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&EpisodeRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get recent average loss over episodes that trained
    pub fn avg_loss(&self, window: usize) -> Option<f32> {
        let losses: Vec<f32> = self
            .records
            .iter()
            .rev()
            .take(window)
            .filter_map(|r| r.loss)
            .collect();
        if losses.is_empty() {
            return None;
        }
        Some(losses.iter().sum::<f32>() / losses.len() as f32)
    }

    /// Get recent average terminal reward
    pub fn avg_reward(&self, window: usize) -> Option<f32> {
        if self.records.is_empty() || window == 0 {
            return None;
        }

        let n = window.min(self.records.len());
        let sum: f32 = self.records.iter().rev().take(n).map(|r| r.reward).sum();
        Some(sum / n as f32)
    }

    /// Save records to a JSON file
    pub fn save(&self, path: &str) -> crate::error::Result<()> {
        let serialized = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    /// Load records from a JSON file, keeping the newest `history_size`
    pub fn load(&mut self, path: &str) -> crate::error::Result<()> {
        let data = std::fs::read_to_string(path)?;
        let records: Vec<EpisodeRecord> = serde_json::from_str(&data)?;
        self.records.clear();
        for record in records {
            self.push(record);
        }
        Ok(())
    }
}

impl Default for TrainingHistory {
    fn default() -> Self {
        Self::new(1000)
    }
}
