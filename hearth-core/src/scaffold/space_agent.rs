//! Agent storing space metadata only.
use crate::{
    space::{Space, SpaceDescriptor},
    Agent,
};
use anyhow::Result;
use std::marker::PhantomData;

/// Base agent holding the dimensions and kinds of the spaces of its environment.
pub struct SpaceAgent<O, A> {
    descriptor: SpaceDescriptor,
    phantom: PhantomData<fn(O) -> A>,
}

impl<O, A> SpaceAgent<O, A> {
    /// Constructs an agent from a descriptor.
    pub fn new(descriptor: SpaceDescriptor) -> Self {
        Self {
            descriptor,
            phantom: PhantomData,
        }
    }

    /// Constructs an agent from action and observation spaces.
    pub fn from_spaces(action_space: &Space, observation_space: &Space) -> Result<Self> {
        Ok(Self::new(SpaceDescriptor::from_spaces(
            action_space,
            observation_space,
        )?))
    }

    /// Returns the space descriptor.
    pub fn descriptor(&self) -> &SpaceDescriptor {
        &self.descriptor
    }
}

impl<O, A> Agent for SpaceAgent<O, A> {
    type Obs = O;
    type Act = A;
}
