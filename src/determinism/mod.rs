//! Process-wide seeding done once at startup
//!
//! Tokenization itself is deterministic, so this has no effect on the token
//! column. It fixes the seed for `--sample` and pins the environment so that
//! repeated runs over the same input produce byte-identical output.
//!
//! Randomness is handed out through an explicit `SeedContext` instead of a
//! global generator.

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

pub const DEFAULT_SEED: u64 = 2022;

/// Hash-seed variable exported for child processes and downstream tooling
pub const HASH_SEED_ENV: &str = "TITLE_TOKENIZER_HASH_SEED";

/// `tokenizers` reads this to decide whether to use its rayon fast path
pub const TOKENIZERS_PARALLELISM_ENV: &str = "TOKENIZERS_PARALLELISM";

/// Seeded randomness owned by the caller
#[derive(Debug, Clone)]
pub struct SeedContext {
    seed: u64,
    rng: StdRng,
}

impl SeedContext {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick `amount` distinct positions out of `0..len`, sorted ascending.
    /// If `amount >= len` every position is returned.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        if amount >= len {
            return (0..len).collect();
        }
        let mut picked = rand::seq::index::sample(&mut self.rng, len, amount).into_vec();
        picked.sort_unstable();
        picked
    }
}

/// Seed every randomness source this process owns and disable the
/// tokenizer's parallel mode
///
/// Must be called at startup, before any other thread is spawned.
pub fn seed_everything(seed: u64) -> SeedContext {
    // SAFETY: called from `main` before the tokenizer or the progress bar
    // start any thread, so nothing else reads the environment concurrently.
    unsafe {
        std::env::set_var(HASH_SEED_ENV, seed.to_string());
        std::env::set_var(TOKENIZERS_PARALLELISM_ENV, "false");
    }

    // No GPU backend is linked in, so there is no device generator to seed.
    debug!("No GPU backend present, skipping device seeding");

    info!("Seeded all generators with {}", seed);
    SeedContext::new(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_samples() {
        let mut a = SeedContext::new(DEFAULT_SEED);
        let mut b = SeedContext::new(DEFAULT_SEED);
        for _ in 0..4 {
            assert_eq!(a.sample_indices(500, 20), b.sample_indices(500, 20));
        }
    }

    #[test]
    fn test_different_seed_different_samples() {
        let a = SeedContext::new(1).sample_indices(10_000, 50);
        let b = SeedContext::new(2).sample_indices(10_000, 50);
        assert_ne!(a, b);
    }

    #[test]
    fn test_sample_indices_sorted_distinct_and_repeatable() {
        let first = SeedContext::new(7).sample_indices(1000, 25);
        let second = SeedContext::new(7).sample_indices(1000, 25);
        assert_eq!(first, second);
        assert_eq!(first.len(), 25);
        assert!(first.windows(2).all(|w| w[0] < w[1]));
        assert!(first.iter().all(|&i| i < 1000));
    }

    #[test]
    fn test_sample_indices_larger_than_len_returns_all() {
        let mut ctx = SeedContext::new(1);
        assert_eq!(ctx.sample_indices(4, 10), vec![0, 1, 2, 3]);
        assert!(ctx.sample_indices(0, 3).is_empty());
    }
}
