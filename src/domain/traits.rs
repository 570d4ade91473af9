// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer asks a `ReviewSource` for reviews and
// never learns where they came from. `JsonReviewLoader` reads
// the star-rated JSON dumps; tests use in-memory sources.

use anyhow::Result;
use crate::domain::review::Review;

// ─── ReviewSource ─────────────────────────────────────────────────────────────
/// Any component that can produce labelled reviews.
///
/// Implementations:
///   - JsonReviewLoader → a JSON array of {"text", "stars"} objects
pub trait ReviewSource {
    /// Load every review from this source, in source order.
    fn load_all(&self) -> Result<Vec<Review>>;
}

impl ReviewSource for Vec<Review> {
    fn load_all(&self) -> Result<Vec<Review>> {
        Ok(self.clone())
    }
}
