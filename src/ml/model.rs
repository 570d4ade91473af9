use burn::{
    nn::{Linear, LinearConfig, Relu},
    prelude::*,
    tensor::activation::log_softmax,
};

use std::sync::{Mutex, PoisonError};

use crate::data::batcher::ReviewBatch;
use crate::domain::label::NUM_CLASSES;

// The backend RNG is process-global: reseeding and the draws that
// follow must not interleave with another initialisation.
static SEEDED_INIT: Mutex<()> = Mutex::new(());

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct ReviewClassifierConfig {
    /// V: vocabulary size including <UNK>
    pub input_dim:  usize,
    /// H: width of the single hidden layer
    pub hidden_dim: usize,
}

impl ReviewClassifierConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> ReviewClassifier<B> {
        ReviewClassifier {
            hidden:     LinearConfig::new(self.input_dim, self.hidden_dim).init(device),
            activation: Relu::new(),
            output:     LinearConfig::new(self.hidden_dim, NUM_CLASSES).init(device),
        }
    }

    /// Like [`init`](Self::init), but reseeds the backend first so the
    /// starting weights depend only on `seed` and the layer sizes.
    pub fn init_seeded<B: Backend>(&self, device: &B::Device, seed: u64) -> ReviewClassifier<B> {
        let _guard = SEEDED_INIT.lock().unwrap_or_else(PoisonError::into_inner);
        B::seed(device, seed);
        self.init(device)
    }
}

/// Two-layer perceptron over bag-of-words vectors:
/// V → H (ReLU) → 5 → log-softmax.
#[derive(Module, Debug)]
pub struct ReviewClassifier<B: Backend> {
    hidden:     Linear<B>,
    activation: Relu,
    output:     Linear<B>,
}

/// Result of running the classifier on one mini-batch.
pub struct ReviewOutput<B: Backend> {
    /// Mean negative log-likelihood over the batch, shape [1]
    pub loss:      Tensor<B, 1>,
    /// Log-probabilities, shape [batch, 5]
    pub log_probs: Tensor<B, 2>,
    /// Gold class indices, shape [batch]
    pub targets:   Tensor<B, 1, Int>,
}

impl<B: Backend> ReviewOutput<B> {
    pub fn batch_size(&self) -> usize {
        self.targets.dims()[0]
    }

    /// Argmax class per row, shape [batch].
    pub fn predictions(&self) -> Tensor<B, 1, Int> {
        // argmax(1) returns [batch, 1]
        self.log_probs.clone().argmax(1).flatten::<1>(0, 1)
    }

    /// How many rows the argmax gets right.
    pub fn correct(&self) -> usize {
        let correct: i64 = self
            .predictions()
            .equal(self.targets.clone())
            .int()
            .sum()
            .into_scalar()
            .elem::<i64>();
        correct as usize
    }

    pub fn loss_value(&self) -> f64 {
        self.loss.clone().into_scalar().elem::<f64>()
    }
}

impl<B: Backend> ReviewClassifier<B> {
    /// features: [batch, V] → log-probabilities: [batch, 5]
    pub fn forward(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.hidden.forward(features);
        let x = self.activation.forward(x);
        let x = self.output.forward(x);
        log_softmax(x, 1)
    }

    /// Mean negative log-likelihood of the gold classes.
    ///
    /// # Panics
    /// Panics if `log_probs` does not have 5 columns or its row count
    /// differs from the number of labels.
    pub fn compute_loss(&self, log_probs: Tensor<B, 2>, gold: Tensor<B, 1, Int>) -> Tensor<B, 1> {
        let [batch_size, num_classes] = log_probs.dims();
        assert_eq!(num_classes, NUM_CLASSES, "expected {NUM_CLASSES} log-probabilities per row");
        assert_eq!(gold.dims()[0], batch_size, "one gold label per row");

        log_probs
            .gather(1, gold.reshape([batch_size, 1]))
            .mean()
            .neg()
    }

    /// Forward pass plus loss for a whole mini-batch. Shared by
    /// training and validation so both score examples the same way.
    pub fn forward_classification(&self, batch: ReviewBatch<B>) -> ReviewOutput<B> {
        let log_probs = self.forward(batch.features);
        let loss      = self.compute_loss(log_probs.clone(), batch.labels.clone());
        ReviewOutput { loss, log_probs, targets: batch.labels }
    }
}
