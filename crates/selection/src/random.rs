//! Randomness source for the selectors.
//!
//! Selection fairness only needs a uniform pseudo-random generator, not a
//! cryptographic one; the permutations produced here are explicitly
//! unsuitable for any security-sensitive shuffling. The source is injected
//! at selector construction so tests can seed it and so concurrent `select`
//! calls never race on a process-global generator.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Uniform random draws for selection walks.
///
/// Implementations must be safe to share across threads; the selectors hold
/// one source for their whole lifetime.
pub trait RandomSource: Send + Sync {
    /// Uniformly random permutation of `0..len`.
    fn permutation(&self, len: usize) -> Vec<usize>;

    /// Uniformly random index in `0..len`. `len` must be non-zero.
    fn index(&self, len: usize) -> usize;
}

/// Default [`RandomSource`]: a PRNG behind a mutex.
///
/// The lock is held only for the duration of a single shuffle or draw.
pub struct LockedRng(Mutex<StdRng>);

impl LockedRng {
    /// Source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self(Mutex::new(StdRng::from_entropy()))
    }

    /// Deterministic source for reproducible selections in tests.
    pub fn seeded(seed: u64) -> Self {
        Self(Mutex::new(StdRng::seed_from_u64(seed)))
    }
}

impl RandomSource for LockedRng {
    fn permutation(&self, len: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(&mut *self.0.lock());
        indices
    }

    fn index(&self, len: usize) -> usize {
        self.0.lock().gen_range(0..len)
    }
}
