// ============================================================
// Layer 6 — Metrics
// ============================================================
// Records what each phase of each epoch achieved:
//
//   - correct / total  → accuracy (same formula for every phase)
//   - mean mini-batch loss
//   - wall-clock time
//
// Records roll up as PhaseMetrics → EpochMetrics →
// ConfigOutcome (one per sweep point) → SweepReport.
//
// A split with fewer examples than one mini-batch processes
// nothing (the remainder is dropped), so total == 0. Accuracy
// is then undefined and reported as `None` instead of being
// divided by zero.

use serde::Serialize;
use std::{cmp::Ordering, fmt, time::Duration};

use crate::ml::optimizer::SweepConfiguration;

/// Which pass over the data a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Training,
    Validation,
    Test,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Training   => "Training",
            Phase::Validation => "Validation",
            Phase::Test       => "Test",
        };
        f.write_str(name)
    }
}

/// correct / total, or `None` when nothing was scored.
pub fn accuracy(correct: usize, total: usize) -> Option<f64> {
    (total > 0).then(|| correct as f64 / total as f64)
}

/// Running counters while a phase iterates over its mini-batches.
#[derive(Debug, Default)]
pub struct PhaseTally {
    correct:  usize,
    total:    usize,
    loss_sum: f64,
    batches:  usize,
}

impl PhaseTally {
    /// Add one mini-batch: `correct` hits out of `total` examples, mean loss `loss`.
    pub fn record(&mut self, correct: usize, total: usize, loss: f64) {
        self.correct  += correct;
        self.total    += total;
        self.loss_sum += loss;
        self.batches  += 1;
    }

    pub fn finish(self, phase: Phase, epoch: usize, elapsed: Duration) -> PhaseMetrics {
        PhaseMetrics {
            phase,
            epoch,
            correct:      self.correct,
            total:        self.total,
            mean_loss:    (self.batches > 0).then(|| self.loss_sum / self.batches as f64),
            elapsed_secs: elapsed.as_secs_f64(),
        }
    }
}

/// Outcome of one phase of one epoch.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseMetrics {
    pub phase:        Phase,
    pub epoch:        usize,
    pub correct:      usize,
    pub total:        usize,
    /// Mean of the per-batch mean losses
    pub mean_loss:    Option<f64>,
    pub elapsed_secs: f64,
}

impl PhaseMetrics {
    pub fn accuracy(&self) -> Option<f64> {
        accuracy(self.correct, self.total)
    }

    /// Report the phase the way the training log expects it.
    pub fn log(&self) {
        let (phase, epoch) = (self.phase, self.epoch);
        tracing::info!("{phase} completed for epoch {epoch}");
        match self.accuracy() {
            Some(acc) => tracing::info!("{phase} accuracy for epoch {epoch}: {acc:.4}"),
            None => tracing::warn!(
                "{phase} accuracy for epoch {epoch}: n/a (fewer examples than one mini-batch)"
            ),
        }
        if let Some(loss) = self.mean_loss {
            tracing::debug!("{phase} mean loss for epoch {epoch}: {loss:.4}");
        }
        tracing::info!("{phase} time for this epoch: {:.3}s", self.elapsed_secs);
    }
}

/// Training and validation results of one epoch.
#[derive(Debug, Clone, Serialize)]
pub struct EpochMetrics {
    pub epoch:      usize,
    pub training:   PhaseMetrics,
    pub validation: PhaseMetrics,
}

/// Everything one sweep configuration produced.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigOutcome {
    pub configuration: SweepConfiguration,
    pub epochs:        Vec<EpochMetrics>,
    /// Filled only when a test split was supplied
    pub test_accuracy: Option<f64>,
}

impl ConfigOutcome {
    pub fn new(configuration: SweepConfiguration) -> Self {
        Self { configuration, epochs: Vec::new(), test_accuracy: None }
    }

    pub fn final_validation_accuracy(&self) -> Option<f64> {
        self.epochs.last().and_then(|e| e.validation.accuracy())
    }
}

/// Results of the whole learning-rate × optimiser sweep.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SweepReport {
    pub outcomes: Vec<ConfigOutcome>,
}

impl SweepReport {
    pub fn push(&mut self, outcome: ConfigOutcome) {
        self.outcomes.push(outcome);
    }

    /// The configuration with the highest last-epoch validation accuracy.
    pub fn best(&self) -> Option<&ConfigOutcome> {
        self.outcomes
            .iter()
            .filter_map(|o| o.final_validation_accuracy().map(|acc| (o, acc)))
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .map(|(o, _)| o)
    }

    pub fn log_summary(&self) {
        tracing::info!("========== Sweep summary ==========");
        for outcome in &self.outcomes {
            let val = outcome
                .final_validation_accuracy()
                .map_or_else(|| "n/a".to_string(), |a| format!("{a:.4}"));
            match outcome.test_accuracy {
                Some(test) => tracing::info!(
                    "{:<18} final validation accuracy {}  test accuracy {:.4}",
                    outcome.configuration.to_string(), val, test
                ),
                None => tracing::info!(
                    "{:<18} final validation accuracy {}",
                    outcome.configuration.to_string(), val
                ),
            }
        }
        if let Some(best) = self.best() {
            tracing::info!("Best configuration: {}", best.configuration);
        }
    }
}
