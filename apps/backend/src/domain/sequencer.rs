//! Ordered, non-repeating call sequence for one round.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::phrases::PhrasePool;

/// Remaining calls for the current round.
///
/// Reseeded exactly once per `start()`; strictly decreasing otherwise.
/// Popping from a pre-shuffled vector is a uniform draw without replacement.
#[derive(Debug, Clone, Default)]
pub struct CallSequencer {
    remaining: Vec<String>,
}

impl CallSequencer {
    /// Fresh shuffle of the full pool.
    pub fn reseed<R: Rng + ?Sized>(pool: &PhrasePool, rng: &mut R) -> Self {
        let mut remaining = pool.phrases().to_vec();
        remaining.shuffle(rng);
        Self { remaining }
    }

    /// The next call, or `None` once the pool is exhausted.
    pub fn next_call(&mut self) -> Option<String> {
        self.remaining.pop()
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }
}
