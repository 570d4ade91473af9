// ============================================================
// Layer 4 — JSON Review Loader
// ============================================================
// Loads one data split from a JSON file of the form
//
//   [
//     {"text": "Great tacos, slow service", "stars": 4},
//     {"text": "Never again.",              "stars": 1.0},
//     ...
//   ]
//
// Extra fields on each object are ignored. Any malformed
// record (missing field, wrong type, rating outside 1..=5)
// fails the whole load; the error names the file and the
// zero-based record index.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::PathBuf};

use crate::domain::label::Label;
use crate::domain::review::Review;
use crate::domain::traits::ReviewSource;

/// One record exactly as it appears in the JSON file.
#[derive(Debug, Deserialize)]
struct RawReview {
    text:  String,
    stars: f64,
}

/// Loads a JSON array of star-rated reviews from disk.
/// Implements the ReviewSource trait from Layer 3.
pub struct JsonReviewLoader {
    path: PathBuf,
}

impl JsonReviewLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReviewSource for JsonReviewLoader {
    fn load_all(&self) -> Result<Vec<Review>> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read review file '{}'", self.path.display()))?;

        let reviews = parse_reviews(&json)
            .with_context(|| format!("Invalid review data in '{}'", self.path.display()))?;

        tracing::debug!("Loaded {} reviews from '{}'", reviews.len(), self.path.display());
        Ok(reviews)
    }
}

/// Parse a JSON array of `{"text", "stars"}` objects into reviews.
pub fn parse_reviews(json: &str) -> Result<Vec<Review>> {
    let raw: Vec<RawReview> = serde_json::from_str(json)
        .context("expected a JSON array of objects with \"text\" and \"stars\" fields")?;

    raw.into_iter()
        .enumerate()
        .map(|(i, record)| {
            let label = Label::from_stars(record.stars)
                .with_context(|| format!("record {i} has an invalid \"stars\" value"))?;
            Ok(Review::from_text(&record.text, label))
        })
        .collect()
}
