//! Observation and action spaces.
//!
//! Spaces describe the set of valid observations or actions of an
//! environment. Environments themselves live outside this crate; agents
//! only receive the descriptions.
use crate::error::HearthError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Description of an observation or action space.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(tag = "type")]
pub enum Space {
    /// `n` distinct values `0..n`.
    Discrete {
        /// Number of values.
        n: usize,
    },

    /// Continuous, bounded array of the given shape.
    Box {
        /// Lower bound of every element.
        low: f32,
        /// Upper bound of every element.
        high: f32,
        /// Shape of the array.
        shape: Vec<usize>,
    },

    /// Vector of discrete values with `nvec[i]` values at position `i`.
    MultiDiscrete {
        /// Number of values per position.
        nvec: Vec<usize>,
    },

    /// Binary vector of length `n`.
    MultiBinary {
        /// Length of the vector.
        n: usize,
    },

    /// Cartesian product of spaces.
    Tuple {
        /// Component spaces.
        spaces: Vec<Space>,
    },
}

/// Kind of a [`Space`].
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SpaceKind {
    /// [`Space::Discrete`].
    Discrete,
    /// [`Space::Box`].
    Box,
    /// [`Space::MultiDiscrete`].
    MultiDiscrete,
    /// [`Space::MultiBinary`].
    MultiBinary,
    /// [`Space::Tuple`].
    Tuple,
}

impl fmt::Display for SpaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Discrete => "Discrete",
            Self::Box => "Box",
            Self::MultiDiscrete => "MultiDiscrete",
            Self::MultiBinary => "MultiBinary",
            Self::Tuple => "Tuple",
        };
        write!(f, "{}", s)
    }
}

impl Space {
    /// Discrete space with `n` values.
    pub fn discrete(n: usize) -> Self {
        Self::Discrete { n }
    }

    /// Box space with the given bounds and shape.
    pub fn bounded(low: f32, high: f32, shape: Vec<usize>) -> Self {
        Self::Box { low, high, shape }
    }

    /// Returns the kind of the space.
    pub fn kind(&self) -> SpaceKind {
        match self {
            Self::Discrete { .. } => SpaceKind::Discrete,
            Self::Box { .. } => SpaceKind::Box,
            Self::MultiDiscrete { .. } => SpaceKind::MultiDiscrete,
            Self::MultiBinary { .. } => SpaceKind::MultiBinary,
            Self::Tuple { .. } => SpaceKind::Tuple,
        }
    }

    /// Returns the flattened size of the space.
    ///
    /// The number of values for a discrete space and the product of the
    /// dimensions for a box space. Other kinds of spaces are not supported.
    pub fn flat_size(&self) -> Result<usize> {
        match self {
            Self::Discrete { n } => Ok(*n),
            Self::Box { shape, .. } => shape
                .iter()
                .try_fold(1usize, |acc, &d| acc.checked_mul(d))
                .ok_or_else(|| HearthError::SpaceTooLarge(format!("{:?}", shape)).into()),
            _ => Err(HearthError::UnsupportedSpaceKind(self.kind().to_string()).into()),
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discrete { n } => write!(f, "Discrete({})", n),
            Self::Box { low, high, shape } => write!(f, "Box({:?}, {:?}, {:?})", low, high, shape),
            Self::MultiDiscrete { nvec } => write!(f, "MultiDiscrete({:?})", nvec),
            Self::MultiBinary { n } => write!(f, "MultiBinary({})", n),
            Self::Tuple { spaces } => {
                write!(f, "Tuple(")?;
                for (i, s) in spaces.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", s)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Dimensions and kinds of the action and observation spaces of an environment.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct SpaceDescriptor {
    /// Flattened size of the action space.
    pub action_dim: usize,

    /// Flattened size of the observation space.
    pub observation_dim: usize,

    /// Kind of the action space.
    pub action_space_type: SpaceKind,

    /// Kind of the observation space.
    pub observation_space_type: SpaceKind,
}

impl SpaceDescriptor {
    /// Constructs a descriptor from its parts.
    pub fn new(
        action_dim: usize,
        observation_dim: usize,
        action_space_type: SpaceKind,
        observation_space_type: SpaceKind,
    ) -> Self {
        Self {
            action_dim,
            observation_dim,
            action_space_type,
            observation_space_type,
        }
    }

    /// Constructs a descriptor from action and observation spaces.
    ///
    /// Fails if either space cannot be sized by [`Space::flat_size`].
    pub fn from_spaces(action_space: &Space, observation_space: &Space) -> Result<Self> {
        Ok(Self::new(
            action_space.flat_size()?,
            observation_space.flat_size()?,
            action_space.kind(),
            observation_space.kind(),
        ))
    }
}
