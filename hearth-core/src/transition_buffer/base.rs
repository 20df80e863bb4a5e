//! Bounded buffer of recent transitions.
use super::{Transition, TransitionBufferConfig};
use crate::{error::HearthError, ExperienceBufferBase};
use anyhow::Result;
use log::{trace, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::{vec_deque::Iter, VecDeque};

/// Bounded buffer holding the most recent transitions, newest first.
pub struct TransitionBuffer<O, A> {
    capacity: usize,
    transitions: VecDeque<Transition<O, A>>,
    rng: StdRng,
}

impl<O, A> TransitionBuffer<O, A> {
    /// Builds an empty buffer.
    pub fn build(config: &TransitionBufferConfig) -> Self {
        if config.capacity == 0 {
            warn!("Transition buffer built with capacity 0; recorded transitions are discarded");
        }

        Self {
            capacity: config.capacity,
            // Grows as transitions arrive; `capacity` is only an upper bound.
            transitions: VecDeque::new(),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// Returns the maximum number of transitions kept in the buffer.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of transitions in the buffer.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Returns `true` if the buffer holds no transition.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Returns an iterator over the transitions, newest first.
    pub fn iter(&self) -> Iter<'_, Transition<O, A>> {
        self.transitions.iter()
    }

    /// Returns the most recent transition.
    pub fn latest(&self) -> Option<&Transition<O, A>> {
        self.transitions.front()
    }

    /// Removes all transitions.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    /// Inserts a transition at the most recent position, evicting the oldest
    /// one if the capacity is exceeded.
    fn insert(&mut self, tr: Transition<O, A>) {
        self.transitions.push_front(tr);
        if self.transitions.len() > self.capacity {
            self.transitions.pop_back();
            trace!("Evicted the oldest transition");
        }
    }
}

impl<O: Clone, A: Clone> TransitionBuffer<O, A> {
    /// Records a transition and returns it.
    pub fn record(
        &mut self,
        observation: O,
        action: A,
        reward: f64,
        next_observation: O,
    ) -> Transition<O, A> {
        let tr = Transition::new(observation, action, reward, next_observation);
        self.insert(tr.clone());
        tr
    }

    /// Samples `batch_size` transitions uniformly with replacement.
    pub fn sample(&mut self, batch_size: usize) -> Result<Vec<Transition<O, A>>> {
        if self.transitions.is_empty() {
            return Err(HearthError::EmptyBuffer.into());
        }

        let Self {
            transitions, rng, ..
        } = self;
        let len = transitions.len();
        Ok((0..batch_size)
            .map(|_| transitions[rng.gen_range(0..len)].clone())
            .collect())
    }
}

impl<O, A> ExperienceBufferBase for TransitionBuffer<O, A> {
    type Item = Transition<O, A>;

    fn push(&mut self, tr: Self::Item) -> Result<()> {
        self.insert(tr);
        Ok(())
    }

    fn len(&self) -> usize {
        self.transitions.len()
    }
}

impl<'a, O, A> IntoIterator for &'a TransitionBuffer<O, A> {
    type Item = &'a Transition<O, A>;
    type IntoIter = Iter<'a, Transition<O, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(capacity: usize) -> TransitionBuffer<&'static str, &'static str> {
        TransitionBuffer::build(&TransitionBufferConfig::default().capacity(capacity))
    }

    #[test]
    fn test_evicts_oldest() {
        let mut buffer = buffer(2);
        buffer.record("o1", "a1", 1.0, "o2");
        buffer.record("o2", "a2", 2.0, "o3");
        let tr = buffer.record("o3", "a3", 3.0, "o4");

        assert_eq!(tr, Transition::new("o3", "a3", 3.0, "o4"));
        assert_eq!(
            buffer.iter().cloned().collect::<Vec<_>>(),
            vec![
                Transition::new("o3", "a3", 3.0, "o4"),
                Transition::new("o2", "a2", 2.0, "o3"),
            ]
        );
    }

    #[test]
    fn test_len_is_bounded() {
        for capacity in 0..5 {
            let mut buffer = buffer(capacity);
            for k in 0..8 {
                buffer.record("o", "a", k as f64, "o");
                assert_eq!(buffer.len(), (k + 1).min(capacity));
            }
            let rewards: Vec<_> = buffer.iter().map(|tr| tr.reward).collect();
            let expected: Vec<_> = (0..8).rev().take(capacity).map(|k| k as f64).collect();
            assert_eq!(rewards, expected);
        }
    }

    #[test]
    fn test_identical_records_are_kept() {
        let mut buffer = buffer(3);
        buffer.record("o", "a", 0.0, "o");
        buffer.record("o", "a", 0.0, "o");
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_zero_capacity() {
        let mut buffer = buffer(0);
        let tr = buffer.record("o1", "a1", 1.0, "o2");
        assert_eq!(tr.unpack(), ("o1", "a1", 1.0, "o2"));
        assert!(buffer.is_empty());
        assert!(buffer.latest().is_none());
    }

    #[test]
    fn test_huge_capacity_is_not_preallocated() {
        let mut buffer = buffer(usize::MAX);
        buffer.record("o1", "a1", 1.0, "o2");
        assert_eq!(buffer.capacity(), usize::MAX);
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_push() -> Result<()> {
        let mut buffer = buffer(1);
        buffer.push(Transition::new("o1", "a1", 1.0, "o2"))?;
        buffer.push(Transition::new("o2", "a2", 2.0, "o3"))?;
        assert_eq!(ExperienceBufferBase::len(&buffer), 1);
        assert_eq!(buffer.latest().map(|tr| tr.action), Some("a2"));
        Ok(())
    }

    #[test]
    fn test_sample() -> Result<()> {
        let mut buffer = buffer(4);
        assert_eq!(
            buffer.sample(1).unwrap_err().downcast_ref::<HearthError>(),
            Some(&HearthError::EmptyBuffer)
        );

        for k in 0..4 {
            buffer.record("o", "a", k as f64, "o");
        }
        let batch = buffer.sample(32)?;
        assert_eq!(batch.len(), 32);
        assert!(batch.iter().all(|tr| (0.0..4.0).contains(&tr.reward)));

        buffer.clear();
        assert!(buffer.is_empty());
        Ok(())
    }
}
