// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All model math lives here, on top of Burn:
//
//   model.rs     — the bag-of-words classifier
//                  V → H (ReLU) → 5 → log-softmax,
//                  negative log-likelihood loss
//
//   optimizer.rs — the two optimiser kinds (Adam, SGD with
//                  momentum) and the learning-rate sweep grid
//
//   trainer.rs   — the sweep, the epoch loop, and the
//                  training / validation / test passes
//
// Training runs on Autodiff<NdArray>; validation and test use
// model.valid(), the same weights on plain NdArray.

/// Feed-forward bag-of-words classifier
pub mod model;

/// Optimiser kinds and the hyperparameter grid
pub mod optimizer;

/// Sweep, epoch loop, validation and test evaluation
pub mod trainer;
