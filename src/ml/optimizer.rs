// ============================================================
// Layer 5 — Optimiser Kinds and the Sweep Grid
// ============================================================
// The sweep crosses every learning rate with both optimiser
// kinds, learning rate outermost:
//
//   (0.001, adam) (0.001, sgd) (0.0015, adam) ... (0.01, sgd)
//
// Adam:  m = β1*m + (1-β1)*g ; v = β2*v + (1-β2)*g²
//        θ = θ - lr * m̂ / (√v̂ + ε)        β=(0.9, 0.999), ε=1e-8
// SGD:   b = μ*b + g ; θ = θ - lr * b    μ=0.75, no dampening
//
// A fresh optimiser (zeroed moment / momentum buffers) is
// built for every configuration.

use burn::{
    optim::{momentum::MomentumConfig, AdamConfig, Optimizer, SgdConfig},
    tensor::backend::AutodiffBackend,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ml::model::ReviewClassifier;

/// Learning rates swept by default.
pub const DEFAULT_LEARNING_RATES: [f64; 5] = [0.001, 0.0015, 0.002, 0.0025, 0.01];

/// Momentum of the SGD variant.
pub const DEFAULT_SGD_MOMENTUM: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizerKind {
    Adam,
    Sgd,
}

impl OptimizerKind {
    /// Sweep order within one learning rate.
    pub const ALL: [OptimizerKind; 2] = [OptimizerKind::Adam, OptimizerKind::Sgd];

    pub fn name(self) -> &'static str {
        match self {
            OptimizerKind::Adam => "adam",
            OptimizerKind::Sgd  => "sgd",
        }
    }
}

impl fmt::Display for OptimizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One point of the hyperparameter grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfiguration {
    pub learning_rate: f64,
    pub optimizer:     OptimizerKind,
}

impl fmt::Display for SweepConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lr={}", self.optimizer, self.learning_rate)
    }
}

/// Cartesian product of `learning_rates` × [adam, sgd].
pub fn sweep_grid(learning_rates: &[f64]) -> Vec<SweepConfiguration> {
    learning_rates
        .iter()
        .flat_map(|&learning_rate| {
            OptimizerKind::ALL
                .into_iter()
                .map(move |optimizer| SweepConfiguration { learning_rate, optimizer })
        })
        .collect()
}

pub fn adam<B: AutodiffBackend>() -> impl Optimizer<ReviewClassifier<B>, B> {
    AdamConfig::new()
        .with_beta_1(0.9)
        .with_beta_2(0.999)
        .with_epsilon(1e-8)
        .init::<B, ReviewClassifier<B>>()
}

pub fn sgd<B: AutodiffBackend>(momentum: f64) -> impl Optimizer<ReviewClassifier<B>, B> {
    let momentum = MomentumConfig::new()
        .with_momentum(momentum)
        .with_dampening(0.0)
        .with_nesterov(false);
    SgdConfig::new()
        .with_momentum(Some(momentum))
        .init::<B, ReviewClassifier<B>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_is_lr_major() {
        let grid = sweep_grid(&DEFAULT_LEARNING_RATES);
        assert_eq!(grid.len(), 10);
        assert_eq!(grid[0], SweepConfiguration { learning_rate: 0.001, optimizer: OptimizerKind::Adam });
        assert_eq!(grid[1], SweepConfiguration { learning_rate: 0.001, optimizer: OptimizerKind::Sgd });
        assert_eq!(grid[9], SweepConfiguration { learning_rate: 0.01, optimizer: OptimizerKind::Sgd });
    }

    #[test]
    fn test_empty_rates_give_empty_grid() {
        assert!(sweep_grid(&[]).is_empty());
    }

    #[test]
    fn test_display_names() {
        let c = SweepConfiguration { learning_rate: 0.002, optimizer: OptimizerKind::Sgd };
        assert_eq!(c.to_string(), "sgd lr=0.002");
    }
}
