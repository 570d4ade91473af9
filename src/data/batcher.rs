// ============================================================
// Layer 4 — Review Batcher
// ============================================================
// Implements Burn's Batcher trait: a Vec of N ReviewSamples,
// each with a length-V count vector, becomes
//
//   features: [N, V] float tensor
//   labels:   [N]    int tensor of class indices
//
// The count vectors are flattened row by row and reshaped,
// which works because every sample has the same length V.

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
    tensor::TensorData,
};

use crate::data::dataset::ReviewSample;

// ─── ReviewBatch ──────────────────────────────────────────────────────────────
/// A mini-batch ready for the classifier forward pass.
#[derive(Debug, Clone)]
pub struct ReviewBatch<B: Backend> {
    /// Term-count vectors — shape: [batch_size, V]
    pub features: Tensor<B, 2>,

    /// Gold class indices — shape: [batch_size]
    pub labels: Tensor<B, 1, Int>,
}

// ─── ReviewBatcher ────────────────────────────────────────────────────────────
/// Stateless: the target device is supplied per call.
#[derive(Clone, Debug, Default)]
pub struct ReviewBatcher;

impl<B: Backend> Batcher<B, ReviewSample, ReviewBatch<B>> for ReviewBatcher {
    fn batch(&self, items: Vec<ReviewSample>, device: &B::Device) -> ReviewBatch<B> {
        let batch_size = items.len();
        let dim        = items.first().map_or(0, |s| s.features.len());

        let features_flat: Vec<f32> = items
            .iter()
            .flat_map(|s| s.features.iter().copied())
            .collect();

        let labels: Vec<i64> = items
            .iter()
            .map(|s| s.label.index() as i64)
            .collect();

        let features = Tensor::<B, 2>::from_data(
            TensorData::new(features_flat, [batch_size, dim]),
            device,
        );
        let labels = Tensor::<B, 1, Int>::from_data(
            TensorData::new(labels, [batch_size]),
            device,
        );

        ReviewBatch { features, labels }
    }
}
