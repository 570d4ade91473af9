// ============================================================
// Layer 3 — Label Domain Type
// ============================================================
// A review's gold class. Star ratings run 1..=5 in the raw
// data; the classifier works on zero-based class indices, so
// a Label always holds `stars - 1`, i.e. a value in 0..5.
//
// Construction is the only place a label can be out of range,
// so every constructor validates and everything downstream can
// index with `Label::index()` without re-checking.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Number of output classes (one per star rating).
pub const NUM_CLASSES: usize = 5;

/// A validated class index in `0..NUM_CLASSES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Label(u8);

impl Label {
    /// Build a label from a zero-based class index.
    pub fn new(index: usize) -> Result<Self> {
        if index >= NUM_CLASSES {
            bail!("class index {index} is out of range 0..{NUM_CLASSES}");
        }
        Ok(Self(index as u8))
    }

    /// Build a label from a raw star rating.
    ///
    /// JSON numbers arrive as `f64`; `4` and `4.0` are both accepted,
    /// `4.5` and `6` are rejected.
    pub fn from_stars(stars: f64) -> Result<Self> {
        if !stars.is_finite() || stars.fract() != 0.0 {
            bail!("star rating {stars} is not a whole number");
        }
        if !(1.0..=NUM_CLASSES as f64).contains(&stars) {
            bail!("star rating {stars} is out of range 1..={NUM_CLASSES}");
        }
        Self::new(stars as usize - 1)
    }

    /// Zero-based class index, used as the tensor target.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The original 1-5 star rating.
    pub fn stars(self) -> u8 {
        self.0 + 1
    }
}
