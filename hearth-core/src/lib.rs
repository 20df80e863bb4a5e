#![warn(missing_docs)]
//! Agent scaffolding for reinforcement learning.
//!
//! The crate provides the pieces a concrete agent builds on: the [`Agent`]
//! trait, hyper-parameter resolution, a bounded transition buffer and
//! descriptions of observation and action spaces. It contains no learning
//! algorithm.
pub mod error;
pub mod hyper_params;
pub mod scaffold;
pub mod space;
pub mod transition_buffer;

mod base;
pub use base::{Agent, ExperienceBufferBase};
