// ============================================================
// Layer 4 — Bag-of-Words Vectorizer
// ============================================================
// Turns a token sequence into a dense term-count vector of
// length V over the vocabulary's index space:
//
//   vocab:   bad:0  good:1  <UNK>:2
//   doc:     ["good", "great", "good"]
//   vector:  [0, 2, 1]          ("great" counts under <UNK>)
//
// Raw counts, no normalisation, word order discarded. Every
// call allocates a fresh vector, so the sum of the entries
// always equals the document's token count.

use crate::data::dataset::ReviewSample;
use crate::data::vocabulary::Vocabulary;
use crate::domain::review::Review;

/// Maps documents onto count vectors over a fixed vocabulary.
pub struct Vectorizer<'a> {
    vocab: &'a Vocabulary,
}

impl<'a> Vectorizer<'a> {
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self { vocab }
    }

    /// Length of every vector this vectorizer produces (V).
    pub fn dim(&self) -> usize {
        self.vocab.len()
    }

    /// Count each token's occurrences; unseen tokens go to <UNK>.
    pub fn vectorize(&self, tokens: &[String]) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dim()];
        for token in tokens {
            vector[self.vocab.index_or_unk(token)] += 1.0;
        }
        vector
    }

    pub fn vectorize_review(&self, review: &Review) -> ReviewSample {
        ReviewSample {
            features: self.vectorize(&review.tokens),
            label:    review.label,
        }
    }

    /// Vectorize a whole split, preserving order.
    pub fn vectorize_all(&self, reviews: &[Review]) -> Vec<ReviewSample> {
        reviews.iter().map(|review| self.vectorize_review(review)).collect()
    }
}
