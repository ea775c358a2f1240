//! Random Sequence Generator
//!
//! Produces the arrays the visualizer sorts: `len` values drawn uniformly
//! from [`MIN_VALUE`]..=[`MAX_VALUE`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sequence::Sequence;

/// Smallest generated value
pub const MIN_VALUE: u32 = 1;

/// Largest generated value (also the bar scale maximum)
pub const MAX_VALUE: u32 = 100;

/// Smallest array size the controls allow
pub const MIN_SIZE: usize = 5;

/// Largest array size the controls allow
pub const MAX_SIZE: usize = 100;

/// Default array size
pub const DEFAULT_SIZE: usize = 10;

/// Random sequence source
#[derive(Debug)]
pub struct Generator {
    rng: StdRng,
    seed: Option<u64>,
}

impl Generator {
    /// Generator seeded from OS entropy
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Reproducible generator
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Seed used, if this generator is reproducible
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// A fresh sequence of `len` random values
    pub fn generate(&mut self, len: usize) -> Sequence<u32> {
        let values = (0..len)
            .map(|_| self.rng.gen_range(MIN_VALUE..=MAX_VALUE))
            .collect();
        Sequence::new(values)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
