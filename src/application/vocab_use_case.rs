// ============================================================
// Layer 2 — VocabUseCase
// ============================================================
// Builds the training vocabulary without training anything,
// and reports its size and both ends of the index table.
// Useful for checking what a data file will turn into before
// committing to a full sweep.

use anyhow::Result;

use crate::data::{loader::JsonReviewLoader, vocabulary::Vocabulary};
use crate::domain::traits::ReviewSource;

pub struct VocabUseCase {
    train_data: String,
    preview:    usize,
}

impl VocabUseCase {
    pub fn new(train_data: String, preview: usize) -> Self {
        Self { train_data, preview }
    }

    pub fn execute(&self) -> Result<Vocabulary> {
        let reviews = JsonReviewLoader::new(&self.train_data).load_all()?;
        let vocab   = Vocabulary::build(&reviews);

        tracing::info!(
            "{} reviews, {} tokens, vocabulary size {} (<UNK> at {})",
            reviews.len(),
            reviews.iter().map(|r| r.token_count()).sum::<usize>(),
            vocab.len(),
            vocab.unk_index()
        );

        for (index, token) in preview_entries(&vocab, self.preview) {
            tracing::info!("{index:>8}  {token}");
        }
        Ok(vocab)
    }
}

/// The first and last `n` index entries, without repeats.
fn preview_entries(vocab: &Vocabulary, n: usize) -> Vec<(usize, &str)> {
    let tokens = vocab.tokens();
    let head   = n.min(tokens.len());
    let tail   = tokens.len().saturating_sub(n).max(head);
    let entries = tokens.iter().map(String::as_str).enumerate();
    entries.clone().take(head).chain(entries.skip(tail)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_covers_both_ends() {
        let vocab = Vocabulary::from_tokens(["a", "b", "c", "d", "e"].map(String::from));
        let shown: Vec<usize> = preview_entries(&vocab, 2).into_iter().map(|(i, _)| i).collect();
        assert_eq!(shown, vec![0, 1, 4, 5]);
    }

    #[test]
    fn test_preview_of_small_vocab_has_no_repeats() {
        let vocab = Vocabulary::from_tokens(["a".to_string()]);
        let shown = preview_entries(&vocab, 10);
        assert_eq!(shown, vec![(0, "a"), (1, "<UNK>")]);
    }

    #[test]
    fn test_preview_of_zero_entries_is_empty() {
        let vocab = Vocabulary::from_tokens(["a", "b"].map(String::from));
        assert!(preview_entries(&vocab, 0).is_empty());
    }
}
