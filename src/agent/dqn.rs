use crate::agent::config::AgentConfig;
use crate::agent::hooks::Hooks;
use crate::agent::target::{q_target, TargetSlot, Variant};
use crate::builders::ReplayMemoryBuilder;
use crate::env::Environment;
use crate::error::{DqnError, Result};
use crate::exploration::{EpsilonGreedy, ExplorationPolicy};
use crate::metrics::{EpisodeRecord, TrainingHistory};
use crate::model::Model;
use crate::replay_buffer::ReplayMemory;
use crate::types::{argmax, Action, State, Transition};
use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace, warn};

/// Episodic DQN / Double-DQN agent.
///
/// The agent owns its model, environment, replay memory, exploration policy and
/// random source. Training runs episodes against the environment, stores every
/// transition, and after each terminal transition replays the whole memory in
/// shuffled mini-batches once it holds enough data.
///
/// # Example
///
/// ```rust,no_run
/// use deepq::agent::{Agent, AgentConfig};
/// use deepq::env::Environment;
/// use deepq::exploration::EpsilonGreedy;
/// use deepq::model::Model;
///
/// fn fit<M: Model, E: Environment>(model: M, env: E) -> deepq::error::Result<()> {
///     let config = AgentConfig { batch_size: 32, seed: Some(7), ..Default::default() };
///     let mut agent = Agent::new(model, env, EpsilonGreedy::default(), config)?;
///     agent.train(500)?;
///     agent.run(200)
/// }
/// ```
pub struct Agent<M, E, P = EpsilonGreedy> {
    model: M,
    target: TargetSlot<M>,
    env: E,
    memory: ReplayMemory,
    policy: P,
    config: AgentConfig,
    variant: Variant,
    hooks: Hooks<E>,
    rng: ChaCha8Rng,
    history: TrainingHistory,
    train_steps: usize,
    episodes: usize,
}

impl<M, E, P> Agent<M, E, P>
where
    M: Model,
    E: Environment,
    P: ExplorationPolicy,
{
    pub fn new(model: M, env: E, policy: P, config: AgentConfig) -> Result<Self> {
        config.validate()?;

        if env.state_size() == 0 {
            return Err(DqnError::invalid_parameter(
                "state_size",
                "Environment must produce non-empty observations",
            ));
        }
        if env.action_size() == 0 {
            return Err(DqnError::invalid_parameter(
                "action_size",
                "Environment must expose at least one action",
            ));
        }

        let memory = ReplayMemoryBuilder::new()
            .max_size(config.max_memory_size)
            .train_size(config.train_size())
            .build()?;

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(Agent {
            model,
            target: TargetSlot::Online,
            env,
            memory,
            policy,
            variant: Variant::from_ddqn(config.ddqn),
            history: TrainingHistory::new(config.history_size),
            config,
            hooks: Hooks::new(),
            rng,
            train_steps: 0,
            episodes: 0,
        })
    }

    pub fn with_hooks(mut self, hooks: Hooks<E>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn set_hooks(&mut self, hooks: Hooks<E>) {
        self.hooks = hooks;
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// The frozen target snapshot, if one has been taken.
    pub fn target_model(&self) -> Option<&M> {
        self.target.frozen()
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    pub fn memory(&self) -> &ReplayMemory {
        &self.memory
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn history(&self) -> &TrainingHistory {
        &self.history
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Number of mini-batch updates applied to the model.
    pub fn train_steps(&self) -> usize {
        self.train_steps
    }

    /// Number of finished training episodes.
    pub fn episodes(&self) -> usize {
        self.episodes
    }

    /// Stores a transition in the replay memory.
    pub fn remember(&mut self, transition: Transition) -> &Transition {
        self.memory.add(transition)
    }

    /// Runs `epochs` training episodes.
    pub fn train(&mut self, epochs: usize) -> Result<()> {
        if epochs == 0 {
            return Err(DqnError::invalid_parameter(
                "epochs",
                "Must train at least one episode",
            ));
        }

        for episode in 0..epochs {
            self.run_episode(episode)?;
        }
        Ok(())
    }

    fn run_episode(&mut self, episode: usize) -> Result<()> {
        self.hooks.fire_pre_episode(&mut self.env, episode)?;

        let max_step = self.env.max_step();
        let mut terminated = false;

        if max_step > 0 {
            // Step 0 only probes for the first observation.
            let mut observation = self.env.step(None)?.observation;

            for step in 1..max_step {
                let action = self.get_action(Some(&observation), episode)?;
                let outcome = self.env.step(Some(action))?;
                trace!(episode, step, action, reward = outcome.reward, done = outcome.done, "step");

                if !outcome.done {
                    let next = outcome.observation;
                    let state = std::mem::replace(&mut observation, next.clone());
                    self.memory.add(Transition::new(state, action, outcome.reward, Some(next)));
                    continue;
                }

                self.memory
                    .add(Transition::terminal(observation.clone(), action, outcome.reward));

                let mut record = EpisodeRecord {
                    episode,
                    step,
                    observation: Some(observation),
                    action,
                    reward: outcome.reward,
                    loss: None,
                    epsilon: self.policy.exploration_rate(),
                };

                self.hooks.fire_before_replay(&record);
                if self.memory.can_train() {
                    record.loss = self.replay()?;
                }
                self.hooks.fire_after_replay(&record);

                info!(
                    episode,
                    step,
                    action,
                    reward = record.reward,
                    observation = ?record.observation,
                    loss = ?record.loss,
                    epsilon = record.epsilon,
                    memory = self.memory.size(),
                    "episode finished"
                );
                self.history.push(record);

                self.env.reset()?;
                terminated = true;
                break;
            }
        }

        if !terminated {
            warn!(episode, max_step, "episode reached the step limit without terminating");
        }

        self.episodes += 1;
        self.hooks.fire_post_episode(&mut self.env, episode)
    }

    /// Chooses an action for `observation`.
    ///
    /// The policy is consulted on every call, so its decay advances even when
    /// there is no observation to act on; in that case the action is random.
    pub fn get_action(&mut self, observation: Option<&State>, episode: usize) -> Result<Action> {
        let exploit = self.policy.should_exploit(episode, &mut self.rng);
        match observation {
            Some(state) if exploit => self.greedy_action(state),
            _ => Ok(self.random_action()),
        }
    }

    fn greedy_action(&self, state: &State) -> Result<Action> {
        let values = self.model.predict(state.view())?;
        let action_size = self.env.action_size();
        if values.len() != action_size {
            return Err(DqnError::dimension_mismatch(
                format!("{} action values", action_size),
                format!("{}", values.len()),
            ));
        }
        argmax(values.iter())
            .ok_or_else(|| DqnError::Model("Model predicted no action values".to_string()))
    }

    fn random_action(&mut self) -> Action {
        self.rng.gen_range(0..self.env.action_size())
    }

    /// Replays the memory in shuffled mini-batches and returns the mean loss.
    ///
    /// Returns `Ok(None)` without touching the model when the memory holds fewer
    /// than `batch_size` transitions.
    pub fn replay(&mut self) -> Result<Option<f32>> {
        let batch_size = self.config.batch_size;
        let steps = self.memory.size() / batch_size;
        if steps == 0 {
            return Ok(None);
        }

        self.target = match self.variant {
            Variant::DoubleDqn => TargetSlot::Frozen(self.model.snapshot()),
            Variant::Dqn => TargetSlot::Online,
        };

        let state_size = self.env.state_size();
        let action_size = self.env.action_size();
        let gamma = self.config.gamma;
        let samples = self.memory.sample_shuffled(&mut self.rng);

        let mut total_loss = 0.0;
        for chunk in samples.chunks(batch_size).take(steps) {
            let (x, y) =
                build_batch(&self.model, &self.target, chunk, gamma, state_size, action_size)?;
            total_loss += self.model.train_on_batch(x.view(), y.view())?;
            self.train_steps += 1;

            if self.variant == Variant::Dqn {
                self.target = TargetSlot::Frozen(self.model.snapshot());
            }
        }

        let loss = total_loss / steps as f32;
        debug!(steps, batch_size, loss, variant = ?self.variant, "replay");
        Ok(Some(loss))
    }

    /// Bootstrap target for `transition` under the current target slot.
    pub fn compute_q_value(&self, transition: &Transition) -> Result<f32> {
        q_target(&self.model, self.target.resolve(&self.model), transition, self.config.gamma)
    }

    /// Greedy evaluation rollout.
    ///
    /// The first action is random since no observation exists yet; afterwards
    /// the agent follows the model's arg-max. Every step is rendered and logged.
    /// Memory, policy, target and model stay untouched.
    pub fn run(&mut self, max_steps: usize) -> Result<()> {
        if max_steps == 0 {
            return Err(DqnError::invalid_parameter(
                "max_steps",
                "Must run at least one step",
            ));
        }

        let mut observation: Option<State> = None;
        for step in 0..max_steps {
            let action = match observation.as_ref() {
                Some(state) => self.greedy_action(state)?,
                None => self.random_action(),
            };

            let outcome = self.env.step(Some(action))?;
            self.env.render()?;
            info!(
                step,
                action,
                reward = outcome.reward,
                observation = ?outcome.observation,
                "evaluation step"
            );

            if outcome.done {
                break;
            }
            observation = Some(outcome.observation);
        }
        Ok(())
    }
}

/// Stacks a chunk of transitions into `(x, y)` training arrays.
///
/// `y` starts from the model's own predictions so only the taken action's
/// entry carries an error signal.
fn build_batch<M: Model>(
    model: &M,
    target: &TargetSlot<M>,
    chunk: &[&Transition],
    gamma: f32,
    state_size: usize,
    action_size: usize,
) -> Result<(Array2<f32>, Array2<f32>)> {
    let mut x = Array2::<f32>::zeros((chunk.len(), state_size));
    let mut y = Array2::<f32>::zeros((chunk.len(), action_size));
    let evaluator = target.resolve(model);

    for (i, transition) in chunk.iter().enumerate() {
        if transition.state.len() != state_size {
            return Err(DqnError::dimension_mismatch(
                format!("state of length {}", state_size),
                format!("{}", transition.state.len()),
            ));
        }
        if transition.action >= action_size {
            return Err(DqnError::InvalidAction {
                action: transition.action,
                max_actions: action_size,
            });
        }

        let mut values = model.predict(transition.state.view())?;
        if values.len() != action_size {
            return Err(DqnError::dimension_mismatch(
                format!("{} action values", action_size),
                format!("{}", values.len()),
            ));
        }
        values[transition.action] = q_target(model, evaluator, transition, gamma)?;

        x.row_mut(i).assign(&transition.state);
        y.row_mut(i).assign(&values);
    }

    Ok((x, y))
}
