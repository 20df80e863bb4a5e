//! Base agents to be extended by concrete algorithms.
//!
//! * [`HyperParamAgent`] resolves hyper-parameters, owns an optional
//!   [`TransitionBuffer`](crate::transition_buffer::TransitionBuffer) and
//!   sizes spaces.
//! * [`SpaceAgent`] only stores a
//!   [`SpaceDescriptor`](crate::space::SpaceDescriptor).
//!
//! Both implement [`Agent`](crate::Agent) without overriding its hooks, so
//! `act` and `learn` fail with
//! [`HearthError::NotImplemented`](crate::error::HearthError::NotImplemented).
//! A concrete agent embeds one of them and implements [`Agent`](crate::Agent)
//! itself.
mod config;
mod hyper_param_agent;
mod space_agent;
pub use config::HyperParamAgentConfig;
pub use hyper_param_agent::{HyperParamAgent, BUFFER_SIZE};
pub use space_agent::SpaceAgent;
