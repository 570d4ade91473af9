// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from the raw JSON dumps to tensor mini-batches.
//
//   reviews.json
//       │
//       ▼
//   JsonReviewLoader  → (tokens, label) pairs
//       │
//       ▼
//   Vocabulary        → sorted token set + <UNK>, index tables
//       │
//       ▼
//   Vectorizer        → length-V term-count vectors
//       │
//       ▼
//   ReviewDataset     → implements Burn's Dataset trait
//       │
//       ▼
//   MiniBatchSampler  → shuffled index batches, remainder dropped
//       │
//       ▼
//   ReviewBatcher     → stacks samples into [batch, V] tensors
//
// The vocabulary is built from the training split only;
// validation and test tokens never enlarge it.

/// Reads JSON review files into domain `Review`s
pub mod loader;

/// Vocabulary construction and token/index tables
pub mod vocabulary;

/// Bag-of-words term-count vectorization
pub mod vectorizer;

/// Implements Burn's Dataset trait for vectorized reviews
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;

/// Shuffles and partitions example indices into mini-batches
pub mod sampler;
