// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Runs the full pipeline in order:
//
//   Step 1: Load train / validation (/ test) reviews   (Layer 4)
//   Step 2: Build vocabulary from training data only   (Layer 4)
//   Step 3: Vectorize every split                      (Layer 4)
//   Step 4: Sweep learning rates × optimisers          (Layer 5)
//   Step 5: Summarise the sweep                        (Layer 6)

use anyhow::{bail, Result};
use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::data::{
    dataset::ReviewDataset,
    loader::JsonReviewLoader,
    vectorizer::Vectorizer,
    vocabulary::Vocabulary,
};
use crate::domain::{label::NUM_CLASSES, review::Review, traits::ReviewSource};
use crate::infra::metrics::SweepReport;
use crate::ml::optimizer::{DEFAULT_LEARNING_RATES, DEFAULT_SGD_MOMENTUM};
use crate::ml::trainer::{run_training, Splits};

// ─── Training Configuration ──────────────────────────────────────────────────
// Every knob of a run. Built from the CLI arguments; logged as
// JSON at debug level so a run can be reproduced from its log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub train_data:     String,
    pub val_data:       String,
    pub test_data:      Option<String>,
    pub do_train:       bool,
    pub hidden_dim:     usize,
    pub epochs:         usize,
    pub batch_size:     usize,
    pub learning_rates: Vec<f64>,
    pub sgd_momentum:   f64,
    pub seed:           u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            train_data:     "training.json".to_string(),
            val_data:       "validation.json".to_string(),
            test_data:      None,
            do_train:       false,
            hidden_dim:     32,
            epochs:         10,
            batch_size:     16,
            learning_rates: DEFAULT_LEARNING_RATES.to_vec(),
            sgd_momentum:   DEFAULT_SGD_MOMENTUM,
            seed:           42,
        }
    }
}

impl TrainConfig {
    /// Reject settings the training loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.hidden_dim == 0 {
            bail!("hidden dimension must be positive");
        }
        if self.batch_size == 0 {
            bail!("batch size must be positive");
        }
        if self.learning_rates.is_empty() {
            bail!("at least one learning rate is required");
        }
        if let Some(lr) = self.learning_rates.iter().find(|lr| !(lr.is_finite() && **lr > 0.0)) {
            bail!("learning rate {lr} must be a positive number");
        }
        if !(0.0..1.0).contains(&self.sgd_momentum) {
            bail!("SGD momentum {} must be in [0, 1)", self.sgd_momentum);
        }
        Ok(())
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Load the configured JSON files and run the sweep.
    pub fn execute(&self) -> Result<SweepReport> {
        let cfg = &self.config;
        tracing::debug!("Config: {}", serde_json::to_string(cfg)?);
        if !cfg.do_train {
            tracing::debug!("--do-train not set; the sweep runs regardless");
        }

        tracing::info!("========== Loading data ==========");
        let train = JsonReviewLoader::new(&cfg.train_data);
        let valid = JsonReviewLoader::new(&cfg.val_data);
        let test  = cfg.test_data.as_ref().map(JsonReviewLoader::new);

        self.run(&train, &valid, test.as_ref().map(|t| t as &dyn ReviewSource))
    }

    /// Run the pipeline over arbitrary review sources.
    pub fn run(
        &self,
        train: &dyn ReviewSource,
        valid: &dyn ReviewSource,
        test:  Option<&dyn ReviewSource>,
    ) -> Result<SweepReport> {
        let cfg = &self.config;
        cfg.validate()?;

        // ── Step 1: Load every split ─────────────────────────────────────────
        let train_reviews = train.load_all()?;
        let valid_reviews = valid.load_all()?;
        let test_reviews  = test.map(|t| t.load_all()).transpose()?;
        tracing::info!(
            "Loaded {} training and {} validation reviews",
            train_reviews.len(),
            valid_reviews.len()
        );
        tracing::info!("Training star distribution: {}", star_histogram(&train_reviews));

        // ── Step 2: Vocabulary from training data only ───────────────────────
        let vocab = Vocabulary::build(&train_reviews);
        tracing::info!("Vocabulary size (with <UNK>): {}", vocab.len());

        // ── Step 3: Vectorize ────────────────────────────────────────────────
        tracing::info!("========== Vectorizing data ==========");
        let vectorizer = Vectorizer::new(&vocab);
        let train_set  = ReviewDataset::new(vectorizer.vectorize_all(&train_reviews));
        let valid_set  = ReviewDataset::new(vectorizer.vectorize_all(&valid_reviews));
        let test_set   = test_reviews.map(|r| ReviewDataset::new(vectorizer.vectorize_all(&r)));

        for (name, set) in [("training", &train_set), ("validation", &valid_set)] {
            if set.len() < cfg.batch_size {
                tracing::warn!(
                    "{} split has {} reviews, fewer than one mini-batch of {}",
                    name, set.len(), cfg.batch_size
                );
            }
        }

        // ── Step 4: Sweep ────────────────────────────────────────────────────
        let splits = Splits { train: &train_set, valid: &valid_set, test: test_set.as_ref() };
        let report = run_training(cfg, vectorizer.dim(), splits)?;

        // ── Step 5: Summary ──────────────────────────────────────────────────
        report.log_summary();
        tracing::debug!("Sweep report: {}", serde_json::to_string(&report)?);

        Ok(report)
    }
}

/// "1★:n 2★:n ..." counts of each star rating.
fn star_histogram(reviews: &[Review]) -> String {
    let mut counts = [0usize; NUM_CLASSES];
    for review in reviews {
        counts[review.label.stars() as usize - 1] += 1;
    }
    counts
        .iter()
        .enumerate()
        .map(|(i, n)| format!("{}★:{}", i + 1, n))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::label::Label;

    fn reviews(n: usize) -> Vec<Review> {
        (0..n)
            .map(|i| {
                let stars = if i % 2 == 0 { 5 } else { 1 };
                let text  = if i % 2 == 0 { "great food" } else { "awful service" };
                Review::from_text(text, Label::from_stars(stars as f64).unwrap())
            })
            .collect()
    }

    #[test]
    fn test_defaults_are_valid() {
        let cfg = TrainConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.batch_size, 16);
        assert_eq!(cfg.learning_rates.len(), 5);
        assert_eq!(cfg.sgd_momentum, 0.75);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let bad = [
            TrainConfig { hidden_dim: 0, ..TrainConfig::default() },
            TrainConfig { batch_size: 0, ..TrainConfig::default() },
            TrainConfig { learning_rates: vec![], ..TrainConfig::default() },
            TrainConfig { learning_rates: vec![0.01, -1.0], ..TrainConfig::default() },
            TrainConfig { sgd_momentum: 1.0, ..TrainConfig::default() },
        ];
        for cfg in bad {
            assert!(cfg.validate().is_err(), "{cfg:?}");
        }
    }

    #[test]
    fn test_run_over_in_memory_sources() {
        let cfg = TrainConfig {
            hidden_dim:     4,
            epochs:         1,
            learning_rates: vec![0.01],
            ..TrainConfig::default()
        };
        let train = reviews(40);
        let valid = reviews(20);

        let report = TrainUseCase::new(cfg).run(&train, &valid, None).unwrap();
        assert_eq!(report.outcomes.len(), 2);
        for outcome in &report.outcomes {
            let epoch = &outcome.epochs[0];
            assert_eq!(epoch.training.total, 32);
            assert_eq!(epoch.validation.total, 16);
            assert!(outcome.test_accuracy.is_none());
        }
    }

    #[test]
    fn test_run_rejects_zero_batch_size_before_sampling() {
        let cfg = TrainConfig { batch_size: 0, ..TrainConfig::default() };
        let err = TrainUseCase::new(cfg).run(&reviews(40), &reviews(20), None).unwrap_err();
        assert!(err.to_string().contains("batch size"), "{err}");
    }

    #[test]
    fn test_star_histogram() {
        assert_eq!(star_histogram(&reviews(3)), "1★:1 2★:0 3★:0 4★:0 5★:2");
    }

    #[test]
    fn test_missing_file_fails_the_run() {
        let cfg = TrainConfig {
            train_data: "no/such/train.json".to_string(),
            ..TrainConfig::default()
        };
        assert!(TrainUseCase::new(cfg).execute().is_err());
    }
}
