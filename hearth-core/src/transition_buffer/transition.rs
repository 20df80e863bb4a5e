//! Transition.
use serde::{Deserialize, Serialize};

/// One step of interaction `(o_t, a_t, r_t, o_t+1)`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Transition<O, A> {
    /// Observation before the action.
    pub observation: O,

    /// Action taken.
    pub action: A,

    /// Reward given after the action.
    pub reward: f64,

    /// Observation following the action.
    pub next_observation: O,
}

impl<O, A> Transition<O, A> {
    /// Constructs a [`Transition`].
    pub fn new(observation: O, action: A, reward: f64, next_observation: O) -> Self {
        Self {
            observation,
            action,
            reward,
            next_observation,
        }
    }

    /// Unpacks the transition into `(o_t, a_t, r_t, o_t+1)`.
    pub fn unpack(self) -> (O, A, f64, O) {
        (
            self.observation,
            self.action,
            self.reward,
            self.next_observation,
        )
    }
}
