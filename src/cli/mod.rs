// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses the command line with clap and hands off to Layer 2.
//
//   1. `train` — load data, build vocabulary, run the sweep
//   2. `vocab` — build and inspect the vocabulary only

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, TrainArgs, VocabArgs};

#[derive(Parser, Debug)]
#[command(
    name = "star-sentiment",
    version,
    about = "Train a bag-of-words feed-forward classifier on 1-5 star reviews."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case. This layer only routes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args) => run_train(args),
            Commands::Vocab(args) => run_vocab(args),
        }
    }
}

fn run_train(args: TrainArgs) -> Result<()> {
    use crate::application::train_use_case::TrainUseCase;

    tracing::info!("Training on '{}', validating on '{}'", args.train_data, args.val_data);

    let report = TrainUseCase::new(args.into()).execute()?;
    match report.best() {
        Some(best) => println!("Sweep complete. Best configuration: {}", best.configuration),
        None       => println!("Sweep complete. No configuration produced a validation accuracy."),
    }
    Ok(())
}

fn run_vocab(args: VocabArgs) -> Result<()> {
    use crate::application::vocab_use_case::VocabUseCase;

    let vocab = VocabUseCase::new(args.train_data, args.preview).execute()?;
    println!("Vocabulary size: {}", vocab.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::train_use_case::TrainConfig;

    #[test]
    fn test_train_args_map_to_config() {
        let cli = Cli::try_parse_from([
            "star-sentiment", "train",
            "-H", "32", "-e", "3",
            "--train-data", "train.json",
            "--val-data", "val.json",
            "--do-train",
        ])
        .unwrap();

        let Commands::Train(args) = cli.command else { panic!("expected train") };
        let cfg: TrainConfig = args.into();
        assert_eq!(cfg.hidden_dim, 32);
        assert_eq!(cfg.epochs, 3);
        assert_eq!(cfg.batch_size, 16);
        assert_eq!(cfg.learning_rates, vec![0.001, 0.0015, 0.002, 0.0025, 0.01]);
        assert_eq!(cfg.sgd_momentum, 0.75);
        assert!(cfg.do_train);
        assert!(cfg.test_data.is_none());
    }

    #[test]
    fn test_learning_rates_are_comma_separated() {
        let cli = Cli::try_parse_from([
            "star-sentiment", "train", "--hidden-dim", "8", "--epochs", "1",
            "--train-data", "t.json", "--val-data", "v.json",
            "--learning-rates", "0.1,0.05", "--test-data", "test.json",
        ])
        .unwrap();

        let Commands::Train(args) = cli.command else { panic!("expected train") };
        assert_eq!(args.learning_rates, vec![0.1, 0.05]);
        assert_eq!(args.test_data.as_deref(), Some("test.json"));
    }

    #[test]
    fn test_hidden_dim_and_epochs_are_required() {
        let missing = Cli::try_parse_from([
            "star-sentiment", "train", "--train-data", "t.json", "--val-data", "v.json",
        ]);
        assert!(missing.is_err());
    }
}
