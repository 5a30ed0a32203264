//! # deepq - Episodic DQN Training Core
//!
//! deepq implements the training loop of a value-based reinforcement learning
//! agent over a discrete action space: experience replay with FIFO eviction,
//! time-decayed ε-greedy exploration, and DQN / Double-DQN target computation.
//!
//! The value model and the environment are collaborators supplied by the
//! caller through the [`model::Model`] and [`env::Environment`] traits.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use deepq::builders::AgentBuilder;
//! # fn demo<M: deepq::model::Model, E: deepq::env::Environment>(model: M, env: E) -> deepq::error::Result<()> {
//! let mut agent = AgentBuilder::new()
//!     .batch_size(64)
//!     .max_memory_size(1024)
//!     .seed(7)
//!     .build(model, env)?;
//!
//! agent.train(200)?;
//! agent.run(500)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`agent`] - The training agent, its configuration, hooks and target rule
//! - [`builders`] - Builder patterns for the agent and replay memory
//! - [`env`] - Environment interface
//! - [`error`] - Error types and result handling
//! - [`exploration`] - Exploration policies
//! - [`metrics`] - Per-episode records and training history
//! - [`model`] - Value model interface
//! - [`replay_buffer`] - Bounded experience replay memory
//! - [`types`] - States, actions and transitions

pub mod agent;
pub mod builders;
pub mod env;
pub mod error;
pub mod exploration;
pub mod metrics;
pub mod model;
pub mod replay_buffer;
pub mod types;

#[cfg(test)]
mod tests;
