//! Agent.
use crate::error::HearthError;
use anyhow::Result;

/// Represents an agent interacting with an environment.
///
/// Both hooks have default bodies that fail with
/// [`HearthError::NotImplemented`]. Concrete agents, e.g. Q-learning or
/// policy gradient, override them. The trait is object safe, so callers can
/// hold a `Box<dyn Agent<Obs = O, Act = A>>`.
pub trait Agent {
    /// Observation of the environment.
    type Obs;

    /// Action of the environment.
    type Act;

    /// Returns an action from the action space given an observation.
    fn act(&mut self, obs: &Self::Obs) -> Result<Self::Act> {
        let _ = obs;
        Err(HearthError::NotImplemented("act").into())
    }

    /// Learns from a transition `(o_t, a_t, r_t, o_t+1)`.
    ///
    /// `reward` is the reward given after taking `act` in `obs`, and
    /// `next_obs` is the observation following the action.
    fn learn(
        &mut self,
        obs: &Self::Obs,
        act: &Self::Act,
        reward: f64,
        next_obs: &Self::Obs,
    ) -> Result<()> {
        let _ = (obs, act, reward, next_obs);
        Err(HearthError::NotImplemented("learn").into())
    }
}
