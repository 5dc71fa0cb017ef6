//! Seedable RNG used for dealing and reshuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same deal
//! - **Uniform shuffles**: Fisher-Yates via `rand::seq::SliceRandom`
//!
//! ```
//! use nanjamonja::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.shuffled(&[1, 2, 3, 4, 5]), b.shuffled(&[1, 2, 3, 4, 5]));
//! ```

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backing every shuffle in a session.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Return a shuffled copy of `items`, leaving the input untouched.
    ///
    /// Every permutation is reachable with uniform probability.
    #[must_use]
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut copy = items.to_vec();
        self.shuffle(&mut copy);
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let data: Vec<u32> = (0..60).collect();
        for _ in 0..10 {
            assert_eq!(rng1.shuffled(&data), rng2.shuffled(&data));
        }
    }

    #[test]
    fn test_different_seeds() {
        let data: Vec<u32> = (0..60).collect();
        let a = GameRng::new(1).shuffled(&data);
        let b = GameRng::new(2).shuffled(&data);
        assert_ne!(a, b);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffled_leaves_input_alone() {
        let mut rng = GameRng::new(3);
        let input = vec!['a', 'b', 'c', 'd', 'e', 'f'];
        let out = rng.shuffled(&input);

        assert_eq!(input, vec!['a', 'b', 'c', 'd', 'e', 'f']);
        let mut sorted = out.clone();
        sorted.sort();
        assert_eq!(sorted, input);
    }

    #[test]
    fn test_shuffled_empty_and_single() {
        let mut rng = GameRng::new(0);
        assert!(rng.shuffled::<u8>(&[]).is_empty());
        assert_eq!(rng.shuffled(&[9]), vec![9]);
    }

    #[test]
    fn test_every_position_reachable() {
        // First element should land in every slot across enough shuffles.
        let mut rng = GameRng::new(11);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let out = rng.shuffled(&[0, 1, 2, 3]);
            let pos = out.iter().position(|&x| x == 0).unwrap();
            seen[pos] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
