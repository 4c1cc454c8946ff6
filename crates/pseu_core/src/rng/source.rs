//! Seedable random source.
//!
//! This module provides [`PseuRng`], a thin wrapper over `rand::rngs::StdRng`
//! that exposes exactly the operations the generators need.

use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};

use crate::seed::{Seed, SeedValue};
use crate::types::{PseuError, Result};

/// Random source for every generator.
///
/// Built either from a seed value (deterministic) or from OS entropy
/// (non-reproducible). The full 256-bit [`SeedValue`] is the generator
/// key. Two sources built from the same seed and driven through the same
/// sequence of calls produce identical output.
///
/// # Examples
///
/// ```rust
/// use pseu_core::rng::PseuRng;
///
/// let mut a = PseuRng::from_seed(12345);
/// let mut b = PseuRng::from_seed(12345);
///
/// assert_eq!(a.uniform(1, 6), b.uniform(1, 6));
/// assert_eq!(a.shuffle(vec![1, 2, 3]), b.shuffle(vec![1, 2, 3]));
/// ```
#[derive(Debug, Clone)]
pub struct PseuRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation, `None` when seeded from entropy.
    seed: Option<SeedValue>,
}

impl PseuRng {
    /// Creates a deterministic source from a small integer seed.
    ///
    /// Same as [`PseuRng::from_seed_value`] with the value widened.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self::from_seed_value(SeedValue::from(seed))
    }

    /// Creates a deterministic source keyed by `value`.
    pub fn from_seed_value(value: SeedValue) -> Self {
        Self {
            inner: StdRng::from_seed(value.to_bytes()),
            seed: Some(value),
        }
    }

    /// Creates a source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Seeded when `seed` is present, from entropy otherwise.
    pub fn from_optional_seed(seed: Option<&Seed>) -> Self {
        match seed {
            Some(seed) => Self::from_seed_value(seed.value()),
            None => Self::from_entropy(),
        }
    }

    /// Returns the seed used for initialisation, if any.
    ///
    /// ```rust
    /// use pseu_core::rng::PseuRng;
    /// use pseu_core::seed::SeedValue;
    ///
    /// assert_eq!(PseuRng::from_seed(42).seed(), Some(SeedValue::from(42)));
    /// assert_eq!(PseuRng::from_entropy().seed(), None);
    /// ```
    #[inline]
    pub fn seed(&self) -> Option<SeedValue> {
        self.seed
    }

    /// Draws a uniform integer from the closed interval `[lower, upper]`.
    ///
    /// # Panics
    ///
    /// If `lower > upper`. [`Range`](crate::Range) rules this out by
    /// construction.
    #[inline]
    pub fn uniform(&mut self, lower: u64, upper: u64) -> u64 {
        self.inner.gen_range(lower..=upper)
    }

    /// Draws `n` items at distinct positions of `items`, in random order.
    ///
    /// Every `n`-arrangement is equally likely. Duplicate values in `items`
    /// may appear more than once in the result since positions, not values,
    /// are distinct.
    ///
    /// # Errors
    ///
    /// [`PseuError::InsufficientPopulation`] when `n > items.len()`. No
    /// randomness is consumed in that case.
    pub fn sample_without_replacement<T: Clone>(
        &mut self,
        items: &[T],
        n: usize,
    ) -> Result<Vec<T>> {
        if n > items.len() {
            return Err(PseuError::InsufficientPopulation {
                requested: n,
                available: items.len(),
            });
        }
        Ok(index::sample(&mut self.inner, items.len(), n)
            .into_iter()
            .map(|i| items[i].clone())
            .collect())
    }

    /// Returns a uniformly random permutation of `items` (Fisher-Yates).
    pub fn shuffle<T>(&mut self, mut items: Vec<T>) -> Vec<T> {
        items.shuffle(&mut self.inner);
        items
    }

    /// Returns one uniformly chosen element of `items`.
    ///
    /// # Errors
    ///
    /// [`PseuError::EmptyPopulation`] when `items` is empty.
    pub fn choice<T: Clone>(&mut self, items: &[T]) -> Result<T> {
        items
            .choose(&mut self.inner)
            .cloned()
            .ok_or(PseuError::EmptyPopulation)
    }
}
