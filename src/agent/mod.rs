//! # DQN Agent Module
//!
//! The agent drives the episodic training loop: it probes the environment for a
//! first observation, picks actions through an exploration policy and the
//! model, stores transitions in a bounded replay memory, and replays that memory
//! after every terminal transition.
//!
//! ## Variants
//!
//! - **Dqn**: the target starts as the online model and is re-snapshotted after
//!   every mini-batch update
//! - **DoubleDqn** (default): the target is snapshotted once per replay call
//!   (once per episode) and held fixed for all its mini-batches
//!
//! In both variants the bootstrap action is chosen by the online model and its
//! value is read from the target model.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use deepq::agent::{Agent, AgentConfig, Hooks};
//! use deepq::exploration::EpsilonGreedy;
//! # fn demo<M: deepq::model::Model, E: deepq::env::Environment>(model: M, env: E) -> deepq::error::Result<()> {
//! let config = AgentConfig { ddqn: true, seed: Some(0), ..Default::default() };
//! let mut agent = Agent::new(model, env, EpsilonGreedy::default(), config)?
//!     .with_hooks(Hooks::new().after_replay(|record| {
//!         if let Some(loss) = record.loss {
//!             println!("episode {} loss {:.4}", record.episode, loss);
//!         }
//!     }));
//! agent.train(1000)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod hooks;
pub mod target;

mod dqn;
pub use config::AgentConfig;
pub use dqn::Agent;
pub use hooks::Hooks;
pub use target::{q_target, TargetSlot, Variant};
