//! A bounded buffer of the most recent transitions.
//!
//! [`TransitionBuffer`] keeps the last `capacity` transitions, newest
//! first. Recording a transition beyond the capacity evicts the oldest one.
//!
//! # Examples
//!
//! ```rust
//! use hearth_core::transition_buffer::{TransitionBuffer, TransitionBufferConfig};
//!
//! let config = TransitionBufferConfig::default().capacity(2);
//! let mut buffer = TransitionBuffer::<i32, usize>::build(&config);
//!
//! buffer.record(1, 0, 0.5, 2);
//! buffer.record(2, 1, 1.0, 3);
//! buffer.record(3, 0, 0.0, 4);
//!
//! let obs: Vec<_> = buffer.iter().map(|tr| tr.observation).collect();
//! assert_eq!(obs, vec![3, 2]);
//! ```
mod base;
mod config;
mod transition;
pub use base::TransitionBuffer;
pub use config::TransitionBufferConfig;
pub use transition::Transition;
