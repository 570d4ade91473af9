use burn::data::dataset::Dataset;

use crate::domain::label::Label;

/// One vectorized review: a length-V count vector and its gold label.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSample {
    pub features: Vec<f32>,
    pub label:    Label,
}

pub struct ReviewDataset {
    samples: Vec<ReviewSample>,
}

impl ReviewDataset {
    pub fn new(samples: Vec<ReviewSample>) -> Self { Self { samples } }

    /// Clone the samples at `indices`, in that order. Out-of-range
    /// indices are skipped.
    pub fn select(&self, indices: &[usize]) -> Vec<ReviewSample> {
        indices.iter().filter_map(|&i| self.get(i)).collect()
    }
}

impl Dataset<ReviewSample> for ReviewDataset {
    fn get(&self, index: usize) -> Option<ReviewSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}
