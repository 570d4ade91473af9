// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Sweeps every (learning rate, optimiser) configuration over
// ONE model. Per configuration:
//
//   Idle ──► Training epoch ──► Validation epoch ──┐
//              ▲                                   │ epochs left
//              └───────────────────────────────────┘
//                                                  │ exhausted
//                                                  ▼
//                                   (optional) Test pass ──► Done
//
// Each configuration gets a fresh optimiser, but the model is
// NOT re-initialised: configuration k starts from the weights
// configuration k-1 ended with, so the sweep points are not
// independent trials.
//
// Training epoch: shuffle, cut into full mini-batches (the
// remainder is dropped), mean NLL per batch, one optimiser
// step per batch.
//
// Validation epoch: same mini-batching in file order on
// model.valid() — the inner backend without autodiff — so no
// gradient can reach the parameters.
//
// Test pass: every test example scored once, remainder kept.

use anyhow::Result;
use burn::{
    data::{dataloader::batcher::Batcher, dataset::Dataset},
    module::AutodiffModule,
    optim::{GradientsParams, Optimizer},
    prelude::*,
    tensor::backend::AutodiffBackend,
};
use std::time::Instant;

use crate::application::train_use_case::TrainConfig;
use crate::data::{
    batcher::{ReviewBatch, ReviewBatcher},
    dataset::ReviewDataset,
    sampler::{all_batches, MiniBatchSampler},
};
use crate::infra::{
    metrics::{ConfigOutcome, EpochMetrics, Phase, PhaseMetrics, PhaseTally, SweepReport},
    progress::phase_bar,
};
use crate::ml::model::{ReviewClassifier, ReviewClassifierConfig};
use crate::ml::optimizer::{adam, sgd, sweep_grid, OptimizerKind, SweepConfiguration};

pub type TrainBackend = burn::backend::Autodiff<burn::backend::NdArray>;

/// The three data splits a sweep runs over. `test` is optional.
pub struct Splits<'a> {
    pub train: &'a ReviewDataset,
    pub valid: &'a ReviewDataset,
    pub test:  Option<&'a ReviewDataset>,
}

pub fn run_training(cfg: &TrainConfig, input_dim: usize, splits: Splits<'_>) -> Result<SweepReport> {
    let device = burn::backend::ndarray::NdArrayDevice::Cpu;

    let model: ReviewClassifier<TrainBackend> =
        ReviewClassifierConfig::new(input_dim, cfg.hidden_dim).init_seeded(&device, cfg.seed);
    tracing::info!(
        "Model ready: {} → {} → 5, {} parameters",
        input_dim, cfg.hidden_dim, model.num_params()
    );

    let (_, report) = run_sweep(model, cfg, &splits, &device)?;
    Ok(report)
}

/// Run every sweep configuration over the same model, returning the
/// final model alongside the per-configuration metrics.
pub fn run_sweep<B: AutodiffBackend>(
    mut model: ReviewClassifier<B>,
    cfg:       &TrainConfig,
    splits:    &Splits<'_>,
    device:    &B::Device,
) -> Result<(ReviewClassifier<B>, SweepReport)> {
    let mut sampler = MiniBatchSampler::new(cfg.batch_size, cfg.seed);
    let mut report  = SweepReport::default();

    for configuration in sweep_grid(&cfg.learning_rates) {
        tracing::info!("========== Training {} for {} epochs ==========", configuration, cfg.epochs);

        let (trained, outcome) = match configuration.optimizer {
            OptimizerKind::Adam => run_configuration(
                model, adam::<B>(), configuration, cfg.epochs, &mut sampler, splits, device,
            )?,
            OptimizerKind::Sgd => run_configuration(
                model, sgd::<B>(cfg.sgd_momentum), configuration, cfg.epochs, &mut sampler, splits, device,
            )?,
        };
        model = trained;
        report.push(outcome);
    }

    Ok((model, report))
}

fn run_configuration<B, O>(
    mut model:     ReviewClassifier<B>,
    mut optim:     O,
    configuration: SweepConfiguration,
    epochs:        usize,
    sampler:       &mut MiniBatchSampler,
    splits:        &Splits<'_>,
    device:        &B::Device,
) -> Result<(ReviewClassifier<B>, ConfigOutcome)>
where
    B: AutodiffBackend,
    O: Optimizer<ReviewClassifier<B>, B>,
{
    let mut outcome = ConfigOutcome::new(configuration);

    for epoch in 1..=epochs {
        let (trained, training) = train_epoch(
            model, &mut optim, configuration.learning_rate, splits.train, sampler, device, epoch,
        )?;
        model = trained;
        training.log();

        let validation = validate_epoch(&model.valid(), splits.valid, sampler, device, epoch)?;
        validation.log();

        outcome.epochs.push(EpochMetrics { epoch, training, validation });
    }

    if let Some(test) = splits.test {
        let metrics = evaluate(&model.valid(), test, sampler.batch_size(), device, epochs);
        match metrics.accuracy() {
            Some(acc) => tracing::info!("Test accuracy for {}: {:.4}", configuration, acc),
            None      => tracing::warn!("Test split is empty; no test accuracy for {}", configuration),
        }
        outcome.test_accuracy = metrics.accuracy();
    }

    Ok((model, outcome))
}

/// One shuffled pass over the training split with a parameter update per batch.
pub fn train_epoch<B, O>(
    mut model:     ReviewClassifier<B>,
    optim:         &mut O,
    learning_rate: f64,
    dataset:       &ReviewDataset,
    sampler:       &mut MiniBatchSampler,
    device:        &B::Device,
    epoch:         usize,
) -> Result<(ReviewClassifier<B>, PhaseMetrics)>
where
    B: AutodiffBackend,
    O: Optimizer<ReviewClassifier<B>, B>,
{
    tracing::info!("Training started for epoch {}", epoch);
    let started  = Instant::now();
    let batches  = sampler.shuffled(dataset.len());
    let progress = phase_bar(Phase::Training, epoch, batches.len())?;
    let mut tally = PhaseTally::default();

    for indices in batches {
        let batch: ReviewBatch<B> = ReviewBatcher.batch(dataset.select(&indices), device);
        let output = model.forward_classification(batch);
        tally.record(output.correct(), output.batch_size(), output.loss_value());

        // Backward pass + optimiser update
        let grads = output.loss.backward();
        let grads = GradientsParams::from_grads(grads, &model);
        model = optim.step(learning_rate, model, grads);

        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok((model, tally.finish(Phase::Training, epoch, started.elapsed())))
}

/// One in-order pass over the validation split. Takes a model on a
/// plain (non-autodiff) backend, so parameters cannot change.
pub fn validate_epoch<B: Backend>(
    model:   &ReviewClassifier<B>,
    dataset: &ReviewDataset,
    sampler: &MiniBatchSampler,
    device:  &B::Device,
    epoch:   usize,
) -> Result<PhaseMetrics> {
    tracing::info!("Validation started for epoch {}", epoch);
    let started  = Instant::now();
    let batches  = sampler.sequential(dataset.len());
    let progress = phase_bar(Phase::Validation, epoch, batches.len())?;
    let mut tally = PhaseTally::default();

    for indices in batches {
        let batch: ReviewBatch<B> = ReviewBatcher.batch(dataset.select(&indices), device);
        let output = model.forward_classification(batch);
        tally.record(output.correct(), output.batch_size(), output.loss_value());
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(tally.finish(Phase::Validation, epoch, started.elapsed()))
}

/// Score every example of `dataset` once, remainder included.
pub fn evaluate<B: Backend>(
    model:      &ReviewClassifier<B>,
    dataset:    &ReviewDataset,
    batch_size: usize,
    device:     &B::Device,
    epoch:      usize,
) -> PhaseMetrics {
    let started   = Instant::now();
    let indices: Vec<usize> = (0..dataset.len()).collect();
    let mut tally = PhaseTally::default();

    for chunk in all_batches(&indices, batch_size) {
        let batch: ReviewBatch<B> = ReviewBatcher.batch(dataset.select(&chunk), device);
        let output = model.forward_classification(batch);
        tally.record(output.correct(), output.batch_size(), output.loss_value());
    }

    tally.finish(Phase::Test, epoch, started.elapsed())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::ReviewSample;
    use crate::domain::label::Label;
    use burn::backend::{ndarray::NdArrayDevice, NdArray};

    /// `n` samples over a 3-word vocabulary: "good" → 5 stars, "bad" → 1 star.
    fn separable(n: usize) -> ReviewDataset {
        let samples = (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    ReviewSample { features: vec![0.0, 2.0, 0.0], label: Label::new(4).unwrap() }
                } else {
                    ReviewSample { features: vec![2.0, 0.0, 0.0], label: Label::new(0).unwrap() }
                }
            })
            .collect();
        ReviewDataset::new(samples)
    }

    fn test_config(learning_rates: Vec<f64>, epochs: usize) -> TrainConfig {
        TrainConfig { hidden_dim: 8, epochs, learning_rates, ..TrainConfig::default() }
    }

    fn model(device: &NdArrayDevice) -> ReviewClassifier<TrainBackend> {
        ReviewClassifierConfig::new(3, 8).init_seeded(device, 42)
    }

    /// Mean loss of the first 16 examples, scored without autodiff.
    fn batch_loss(model: &ReviewClassifier<TrainBackend>, data: &ReviewDataset, device: &NdArrayDevice) -> f64 {
        let indices: Vec<usize> = (0..16).collect();
        let batch: ReviewBatch<NdArray> = ReviewBatcher.batch(data.select(&indices), device);
        model.valid().forward_classification(batch).loss_value()
    }

    #[test]
    fn test_training_epoch_drops_remainder() {
        let device      = NdArrayDevice::Cpu;
        let data        = separable(35);
        let mut sampler = MiniBatchSampler::new(16, 42);
        let mut optim   = adam::<TrainBackend>();

        let (_, metrics) = train_epoch(model(&device), &mut optim, 0.001, &data, &mut sampler, &device, 1)
            .unwrap();
        assert_eq!(metrics.total, 32);
        assert!(metrics.correct <= 32);
        assert_eq!(metrics.phase, Phase::Training);
    }

    #[test]
    fn test_training_reduces_loss() {
        let device      = NdArrayDevice::Cpu;
        let data        = separable(16);
        let mut sampler = MiniBatchSampler::new(16, 42);
        let mut optim   = adam::<TrainBackend>();

        let mut model = model(&device);
        let before    = batch_loss(&model, &data, &device);
        for epoch in 1..=20 {
            let (trained, _) = train_epoch(model, &mut optim, 0.01, &data, &mut sampler, &device, epoch)
                .unwrap();
            model = trained;
        }
        let after = batch_loss(&model, &data, &device);
        assert!(after < before, "loss went from {before} to {after}");
    }

    #[test]
    fn test_validation_leaves_parameters_untouched() {
        let device  = NdArrayDevice::Cpu;
        let data    = separable(32);
        let sampler = MiniBatchSampler::new(16, 42);
        let model   = model(&device).valid();

        let first  = validate_epoch(&model, &data, &sampler, &device, 1).unwrap();
        let second = validate_epoch(&model, &data, &sampler, &device, 2).unwrap();
        assert_eq!(first.total, 32);
        assert_eq!(first.correct, second.correct);
        assert_eq!(first.mean_loss, second.mean_loss);
    }

    #[test]
    fn test_validation_of_tiny_split_reports_no_accuracy() {
        let device  = NdArrayDevice::Cpu;
        let sampler = MiniBatchSampler::new(16, 42);
        let metrics = validate_epoch(&model(&device).valid(), &separable(10), &sampler, &device, 1)
            .unwrap();
        assert_eq!(metrics.total, 0);
        assert_eq!(metrics.accuracy(), None);
    }

    #[test]
    fn test_evaluate_scores_every_example() {
        let device  = NdArrayDevice::Cpu;
        let metrics = evaluate(&model(&device).valid(), &separable(5), 16, &device, 1);
        assert_eq!(metrics.total, 5);
        assert_eq!(metrics.phase, Phase::Test);

        let empty = evaluate(&model(&device).valid(), &separable(0), 16, &device, 1);
        assert_eq!(empty.accuracy(), None);
    }

    #[test]
    fn test_sweep_covers_grid_and_reuses_model() {
        let device = NdArrayDevice::Cpu;
        let train  = separable(32);
        let valid  = separable(16);
        let test   = separable(8);
        let splits = Splits { train: &train, valid: &valid, test: Some(&test) };
        let cfg    = test_config(vec![0.01, 0.002], 2);

        let initial       = model(&device);
        let initial_loss  = batch_loss(&initial, &train, &device);
        let (trained, report) = run_sweep(initial, &cfg, &splits, &device).unwrap();

        assert_eq!(report.outcomes.len(), 4);
        let order: Vec<_> = report.outcomes.iter().map(|o| o.configuration.to_string()).collect();
        assert_eq!(order, vec!["adam lr=0.01", "sgd lr=0.01", "adam lr=0.002", "sgd lr=0.002"]);
        for outcome in &report.outcomes {
            assert_eq!(outcome.epochs.len(), 2);
            assert!(outcome.test_accuracy.is_some());
        }

        // Eight epochs of updates on one model move it away from its start.
        let final_loss = batch_loss(&trained, &train, &device);
        assert!(final_loss < initial_loss, "loss went from {initial_loss} to {final_loss}");
    }

    #[test]
    fn test_same_seed_repeats_the_whole_run() {
        let train = separable(32);
        let valid = separable(16);
        let cfg   = test_config(vec![0.01], 2);
        let run   = || {
            let splits = Splits { train: &train, valid: &valid, test: None };
            run_training(&cfg, 3, splits).unwrap()
        };

        let (first, second) = (run(), run());
        assert_eq!(first.outcomes.len(), second.outcomes.len());
        for (a, b) in first.outcomes.iter().zip(&second.outcomes) {
            for (x, y) in a.epochs.iter().zip(&b.epochs) {
                assert_eq!(x.training.mean_loss, y.training.mean_loss);
                assert_eq!(x.training.correct, y.training.correct);
                assert_eq!(x.validation.mean_loss, y.validation.mean_loss);
            }
        }
    }
}
