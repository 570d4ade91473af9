// ============================================================
// Layer 3 — Review Domain Type
// ============================================================
// One labelled training example: the review text split on
// whitespace, plus its star label. Token order is kept here
// even though the bag-of-words vectorizer discards it later.

use serde::{Deserialize, Serialize};

use crate::domain::label::Label;

/// A tokenized review with its gold label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Whitespace-separated tokens, in document order
    pub tokens: Vec<String>,

    /// Gold class (stars - 1)
    pub label: Label,
}

impl Review {
    pub fn new(tokens: Vec<String>, label: Label) -> Self {
        Self { tokens, label }
    }

    /// Tokenize raw review text and attach the label.
    ///
    ///   let review = Review::from_text("great  food\tslow service", label);
    ///   // tokens = ["great", "food", "slow", "service"]
    pub fn from_text(text: &str, label: Label) -> Self {
        Self::new(tokenize(text), label)
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

/// Split text on runs of Unicode whitespace. No case folding,
/// no punctuation stripping: "Good" and "good!" are distinct tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}
