use crate::agent::{Agent, AgentConfig};
use crate::env::Environment;
use crate::error::Result;
use crate::exploration::{EpsilonGreedy, ExplorationPolicy};
use crate::model::Model;

/// Builder pattern for Agent
///
/// ```rust,no_run
/// use deepq::builders::AgentBuilder;
/// use deepq::exploration::EpsilonGreedy;
/// # fn demo<M: deepq::model::Model, E: deepq::env::Environment>(model: M, env: E) -> deepq::error::Result<()> {
/// let mut agent = AgentBuilder::new()
///     .batch_size(32)
///     .max_memory_size(4096)
///     .gamma(0.95)
///     .ddqn(false)
///     .seed(42)
///     .policy(EpsilonGreedy::new(0.01, 0.5, 0.95)?)
///     .build(model, env)?;
/// agent.train(100)?;
/// # Ok(())
/// # }
/// ```
pub struct AgentBuilder<P = EpsilonGreedy> {
    config: AgentConfig,
    policy: P,
}

impl AgentBuilder<EpsilonGreedy> {
    pub fn new() -> Self {
        AgentBuilder {
            config: AgentConfig::default(),
            policy: EpsilonGreedy::default(),
        }
    }
}

impl<P: ExplorationPolicy> AgentBuilder<P> {
    /// Replace every hyperparameter at once
    pub fn config(mut self, config: AgentConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_memory_size(mut self, size: usize) -> Self {
        self.config.max_memory_size = size;
        self
    }

    pub fn train_memory_size(mut self, size: usize) -> Self {
        self.config.train_memory_size = Some(size);
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.config.batch_size = batch_size;
        self
    }

    pub fn gamma(mut self, gamma: f32) -> Self {
        self.config.gamma = gamma;
        self
    }

    pub fn ddqn(mut self, ddqn: bool) -> Self {
        self.config.ddqn = ddqn;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn history_size(mut self, size: usize) -> Self {
        self.config.history_size = size;
        self
    }

    /// Swap in a different exploration policy
    pub fn policy<Q: ExplorationPolicy>(self, policy: Q) -> AgentBuilder<Q> {
        AgentBuilder {
            config: self.config,
            policy,
        }
    }

    pub fn build<M: Model, E: Environment>(self, model: M, env: E) -> Result<Agent<M, E, P>> {
        Agent::new(model, env, self.policy, self.config)
    }
}

impl Default for AgentBuilder<EpsilonGreedy> {
    fn default() -> Self {
        Self::new()
    }
}
