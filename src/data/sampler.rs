// ============================================================
// Layer 4 — Mini-Batch Sampler
// ============================================================
// Partitions example indices into fixed-size mini-batches.
//
// Training epochs draw a fresh random permutation of the
// split (Fisher-Yates via rand::seq::SliceRandom); validation
// keeps file order. In both cases the trailing remainder is
// DROPPED: 35 examples with batch size 16 give two batches
// covering 32 examples, and the last 3 are never seen.
//
// The RNG is seeded once per run and its stream continues
// across epochs and sweep configurations, so a whole run is
// reproducible from the seed.

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

pub struct MiniBatchSampler {
    batch_size: usize,
    rng:        StdRng,
}

impl MiniBatchSampler {
    /// # Panics
    /// Panics if `batch_size` is zero. Callers driven by a `TrainConfig`
    /// never reach this: `TrainConfig::validate` rejects a zero batch size
    /// before any sampler is built.
    pub fn new(batch_size: usize, seed: u64) -> Self {
        assert!(batch_size > 0, "batch_size must be positive");
        Self { batch_size, rng: StdRng::seed_from_u64(seed) }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Shuffle `0..len` and cut it into full mini-batches.
    pub fn shuffled(&mut self, len: usize) -> Vec<Vec<usize>> {
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(&mut self.rng);
        full_batches(&indices, self.batch_size)
    }

    /// `0..len` in order, cut into full mini-batches.
    pub fn sequential(&self, len: usize) -> Vec<Vec<usize>> {
        let indices: Vec<usize> = (0..len).collect();
        full_batches(&indices, self.batch_size)
    }
}

/// Cut `indices` into chunks of exactly `batch_size`, dropping the remainder.
pub fn full_batches(indices: &[usize], batch_size: usize) -> Vec<Vec<usize>> {
    indices.chunks_exact(batch_size).map(<[usize]>::to_vec).collect()
}

/// Cut `indices` into chunks of at most `batch_size`, keeping the remainder.
pub fn all_batches(indices: &[usize], batch_size: usize) -> Vec<Vec<usize>> {
    indices.chunks(batch_size).map(<[usize]>::to_vec).collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remainder_is_dropped() {
        let mut sampler = MiniBatchSampler::new(16, 42);
        let batches     = sampler.shuffled(35);
        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|b| b.len() == 16));
    }

    #[test]
    fn test_shuffled_batches_hold_distinct_indices() {
        let mut sampler = MiniBatchSampler::new(4, 7);
        let mut seen: Vec<usize> = sampler.shuffled(12).into_iter().flatten().collect();
        seen.sort();
        assert_eq!(seen, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = MiniBatchSampler::new(4, 42).shuffled(20);
        let b = MiniBatchSampler::new(4, 42).shuffled(20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rng_stream_continues_between_epochs() {
        let mut sampler = MiniBatchSampler::new(10, 3);
        let first       = sampler.shuffled(100);
        let second      = sampler.shuffled(100);
        assert_ne!(first, second);
    }

    #[test]
    fn test_sequential_keeps_order() {
        let sampler = MiniBatchSampler::new(2, 0);
        assert_eq!(sampler.sequential(5), vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_fewer_examples_than_one_batch() {
        let mut sampler = MiniBatchSampler::new(16, 42);
        assert!(sampler.shuffled(15).is_empty());
        assert!(sampler.sequential(0).is_empty());
    }

    #[test]
    fn test_all_batches_keeps_remainder() {
        let indices: Vec<usize> = (0..5).collect();
        assert_eq!(all_batches(&indices, 2), vec![vec![0, 1], vec![2, 3], vec![4]]);
    }

    #[test]
    #[should_panic(expected = "batch_size must be positive")]
    fn test_zero_batch_size_panics() {
        let _ = MiniBatchSampler::new(0, 42);
    }
}
