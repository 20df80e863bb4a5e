//! Agent with hyper-parameters and a transition buffer.
use super::HyperParamAgentConfig;
use crate::{
    error::HearthError,
    hyper_params::{HyperParamOverrides, HyperParamSpec, HyperParams},
    space::Space,
    transition_buffer::{Transition, TransitionBuffer, TransitionBufferConfig},
    Agent,
};
use anyhow::Result;
use log::{debug, info};

/// Name of the hyper-parameter giving the capacity of the transition buffer.
pub const BUFFER_SIZE: &str = "buffer_size";

/// Base agent holding spaces, resolved hyper-parameters and an optional
/// transition buffer.
///
/// The buffer exists only if [`BUFFER_SIZE`] is declared in the
/// [`HyperParamSpec`]; its capacity is the resolved value.
pub struct HyperParamAgent<O, A> {
    action_space: Space,
    observation_space: Space,
    hyper_params: HyperParams,
    replay_buffer: Option<TransitionBuffer<O, A>>,
}

impl<O, A> HyperParamAgent<O, A> {
    /// Constructs an agent, resolving `spec` against `overrides`.
    ///
    /// Fails if a declared parameter has neither an override nor a default,
    /// or if `overrides` names an undeclared parameter.
    pub fn new(
        action_space: Space,
        observation_space: Space,
        spec: &HyperParamSpec,
        overrides: &HyperParamOverrides,
    ) -> Result<Self> {
        let seed = TransitionBufferConfig::default().seed;
        Self::new_with_seed(action_space, observation_space, spec, overrides, seed)
    }

    /// Builds an agent from a configuration.
    pub fn build(config: &HyperParamAgentConfig, spec: &HyperParamSpec) -> Result<Self> {
        Self::new_with_seed(
            config.action_space.clone(),
            config.observation_space.clone(),
            spec,
            &config.hyper_params,
            config.seed,
        )
    }

    fn new_with_seed(
        action_space: Space,
        observation_space: Space,
        spec: &HyperParamSpec,
        overrides: &HyperParamOverrides,
        seed: u64,
    ) -> Result<Self> {
        let hyper_params = spec.resolve(overrides)?;
        info!("{}", hyper_params.report());

        let replay_buffer = if hyper_params.contains(BUFFER_SIZE) {
            let capacity = hyper_params.get_usize(BUFFER_SIZE)?;
            debug!("Transition buffer with capacity {}", capacity);
            let config = TransitionBufferConfig::default()
                .capacity(capacity)
                .seed(seed);
            Some(TransitionBuffer::build(&config))
        } else {
            None
        };

        Ok(Self {
            action_space,
            observation_space,
            hyper_params,
            replay_buffer,
        })
    }

    /// Returns the action space.
    pub fn action_space(&self) -> &Space {
        &self.action_space
    }

    /// Returns the observation space.
    pub fn observation_space(&self) -> &Space {
        &self.observation_space
    }

    /// Returns the resolved hyper-parameters.
    pub fn hyper_params(&self) -> &HyperParams {
        &self.hyper_params
    }

    /// Returns the transition buffer, if configured.
    pub fn replay_buffer(&self) -> Option<&TransitionBuffer<O, A>> {
        self.replay_buffer.as_ref()
    }

    /// Returns the transition buffer mutably, if configured.
    pub fn replay_buffer_mut(&mut self) -> Option<&mut TransitionBuffer<O, A>> {
        self.replay_buffer.as_mut()
    }

    /// Returns the flattened size of a space.
    pub fn space_size(space: &Space) -> Result<usize> {
        space.flat_size()
    }
}

impl<O: Clone, A: Clone> HyperParamAgent<O, A> {
    /// Adds a transition to the buffer and returns it.
    ///
    /// Fails with [`HearthError::NoBufferConfigured`] if [`BUFFER_SIZE`] was
    /// not declared.
    pub fn buffer_transition(
        &mut self,
        observation: O,
        action: A,
        reward: f64,
        next_observation: O,
    ) -> Result<Transition<O, A>> {
        let buffer = self
            .replay_buffer
            .as_mut()
            .ok_or(HearthError::NoBufferConfigured)?;
        Ok(buffer.record(observation, action, reward, next_observation))
    }
}

impl<O, A> Agent for HyperParamAgent<O, A> {
    type Obs = O;
    type Act = A;
}
