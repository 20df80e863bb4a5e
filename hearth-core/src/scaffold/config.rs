//! Configuration of [`HyperParamAgent`](super::HyperParamAgent).
use crate::{
    hyper_params::{HyperParamOverrides, HyperParamValue},
    space::Space,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`HyperParamAgent`](super::HyperParamAgent).
///
/// ```yaml
/// action_space:
///   type: Discrete
///   n: 2
/// observation_space:
///   type: Box
///   low: -4.8
///   high: 4.8
///   shape: [4]
/// hyper_params:
///   buffer_size: 1000
/// seed: 42
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct HyperParamAgentConfig {
    /// Action space of the environment.
    pub action_space: Space,

    /// Observation space of the environment.
    pub observation_space: Space,

    /// Values overriding the declared defaults.
    #[serde(default)]
    pub hyper_params: HyperParamOverrides,

    /// Random seed of the transition buffer.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_seed() -> u64 {
    42
}

impl HyperParamAgentConfig {
    /// Constructs a configuration without hyper-parameter overrides.
    pub fn new(action_space: Space, observation_space: Space) -> Self {
        Self {
            action_space,
            observation_space,
            hyper_params: HyperParamOverrides::default(),
            seed: default_seed(),
        }
    }

    /// Overrides a hyper-parameter.
    pub fn hyper_param(mut self, name: impl Into<String>, value: impl Into<HyperParamValue>) -> Self {
        self.hyper_params = self.hyper_params.set(name, value);
        self
    }

    /// Sets the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Constructs [`HyperParamAgentConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`HyperParamAgentConfig`] as YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
