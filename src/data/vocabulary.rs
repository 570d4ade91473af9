// ============================================================
// Layer 4 — Vocabulary and Index Tables
// ============================================================
// Two steps turn the training corpus into a fixed input space:
//
//   build_vocab        every distinct token seen in training
//   Vocabulary         sorted tokens + <UNK>, with
//                        index2word: Vec<String>          (index → token)
//                        word2index: HashMap<String, usize> (token → index)
//
// Tokens are sorted lexicographically (byte order of UTF-8,
// which is Unicode code-point order) so the same token set
// always produces the same indices. <UNK> is appended last and
// therefore always sits at index V-1.
//
// Example:
//   tokens {"good", "bad"}  →  bad:0  good:1  <UNK>:2   (V = 3)

use std::collections::{BTreeSet, HashMap};

use crate::domain::review::Review;

/// Reserved symbol every out-of-vocabulary token maps to.
pub const UNK: &str = "<UNK>";

/// Collect the distinct tokens of a corpus.
/// An empty corpus gives an empty set.
pub fn build_vocab(reviews: &[Review]) -> BTreeSet<String> {
    reviews
        .iter()
        .flat_map(|review| review.tokens.iter().cloned())
        .collect()
}

/// Immutable token ↔ index mapping over the training vocabulary.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    index2word: Vec<String>,
    word2index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Sort `tokens`, drop duplicates, append <UNK> and assign
    /// contiguous indices.
    ///
    /// A literal "<UNK>" in the input is folded into the reserved
    /// slot rather than given a second index.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut index2word: Vec<String> = tokens
            .into_iter()
            .filter(|token| token != UNK)
            .collect();
        index2word.sort();
        index2word.dedup();
        index2word.push(UNK.to_string());

        let word2index = index2word
            .iter()
            .enumerate()
            .map(|(index, word)| (word.clone(), index))
            .collect();

        Self { index2word, word2index }
    }

    /// Build the vocabulary of a training corpus.
    pub fn build(reviews: &[Review]) -> Self {
        Self::from_tokens(build_vocab(reviews))
    }

    /// V: number of indices, <UNK> included. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.index2word.len()
    }

    pub fn unk_index(&self) -> usize {
        self.index2word.len() - 1
    }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.word2index.get(token).copied()
    }

    /// Index of `token`, or the <UNK> slot if it was never seen in training.
    pub fn index_or_unk(&self, token: &str) -> usize {
        self.index_of(token).unwrap_or_else(|| self.unk_index())
    }

    pub fn token_at(&self, index: usize) -> Option<&str> {
        self.index2word.get(index).map(String::as_str)
    }

    /// All tokens in index order; the last one is <UNK>.
    pub fn tokens(&self) -> &[String] {
        &self.index2word
    }
}
