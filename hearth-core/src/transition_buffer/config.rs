//! Configuration of [`TransitionBuffer`](super::TransitionBuffer).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`TransitionBuffer`](super::TransitionBuffer).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct TransitionBufferConfig {
    /// Maximum number of transitions kept in the buffer.
    /// When the buffer is full, recording a transition evicts the oldest one.
    pub capacity: usize,

    /// Random seed used when sampling transitions.
    pub seed: u64,
}

impl Default for TransitionBufferConfig {
    fn default() -> Self {
        Self {
            capacity: 10000,
            seed: 42,
        }
    }
}

impl TransitionBufferConfig {
    /// Sets the capacity of the buffer.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the random seed for sampling.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Constructs [`TransitionBufferConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`TransitionBufferConfig`] as YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_serde_transition_buffer_config() -> Result<()> {
        let config = TransitionBufferConfig::default().capacity(100).seed(7);

        let dir = TempDir::new("transition_buffer_config")?;
        let path = dir.path().join("transition_buffer_config.yaml");
        config.save(&path)?;
        let config_ = TransitionBufferConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }
}
