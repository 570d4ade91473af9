// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands `train` and `vocab` and their flags.
// clap's derive macros generate --help, error messages for
// missing arguments, and string → number conversion.

use clap::{Args, Subcommand};

use crate::application::train_use_case::TrainConfig;
use crate::ml::optimizer::{DEFAULT_LEARNING_RATES, DEFAULT_SGD_MOMENTUM};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the classifier, sweeping learning rates and optimisers
    Train(TrainArgs),

    /// Build the training vocabulary and report on it
    Vocab(VocabArgs),
}

/// All arguments for the `train` command.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Width of the hidden layer
    #[arg(short = 'H', long)]
    pub hidden_dim: usize,

    /// Number of epochs per sweep configuration
    #[arg(short, long)]
    pub epochs: usize,

    /// JSON file of training reviews ({"text", "stars"} objects)
    #[arg(long)]
    pub train_data: String,

    /// JSON file of validation reviews
    #[arg(long)]
    pub val_data: String,

    /// Optional JSON file of test reviews, scored after each configuration
    #[arg(long)]
    pub test_data: Option<String>,

    /// Training-mode flag; recorded in the config
    #[arg(long)]
    pub do_train: bool,

    /// Examples per mini-batch; the trailing remainder of each split is dropped
    #[arg(long, default_value_t = 16)]
    pub batch_size: usize,

    /// Comma-separated learning rates to sweep
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_LEARNING_RATES)]
    pub learning_rates: Vec<f64>,

    /// Momentum of the SGD configurations
    #[arg(long, default_value_t = DEFAULT_SGD_MOMENTUM)]
    pub sgd_momentum: f64,

    /// Seed for shuffling the training data
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// The application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            train_data:     a.train_data,
            val_data:       a.val_data,
            test_data:      a.test_data,
            do_train:       a.do_train,
            hidden_dim:     a.hidden_dim,
            epochs:         a.epochs,
            batch_size:     a.batch_size,
            learning_rates: a.learning_rates,
            sgd_momentum:   a.sgd_momentum,
            seed:           a.seed,
        }
    }
}

/// All arguments for the `vocab` command
#[derive(Args, Debug)]
pub struct VocabArgs {
    /// JSON file of training reviews
    #[arg(long)]
    pub train_data: String,

    /// How many entries to show from each end of the index table
    #[arg(long, default_value_t = 10)]
    pub preview: usize,
}
