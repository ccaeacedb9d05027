// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with `clap`.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `train`    — fits the spam filter on a directory of
//                   labelled emails and reports accuracy
//   2. `classify` — fits the filter, then labels one message

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, TrainArgs, ClassifyArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "email-classifier",
    version = "0.1.0",
    about = "Train a Naive Bayes spam filter on labelled emails, then classify new messages."
)]
pub struct Cli {
    /// The subcommand to run (train or classify)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the application layer.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match &self.command {
            Commands::Train(args)    => self.run_train(args.clone()),
            Commands::Classify(args) => self.run_classify(args.clone()),
        }
    }

    /// Handles the `train` subcommand.
    fn run_train(&self, args: TrainArgs) -> Result<()> {
        use crate::application::classifier::EmailClassifier;

        tracing::info!("Training on emails in: {}", args.data_dir);

        let mut classifier = EmailClassifier::new(args.into());
        let metrics = classifier.train()?;

        println!("Accuracy: {}", metrics.accuracy);
        Ok(())
    }

    /// Handles the `classify` subcommand.
    /// There is no persisted model, so the filter is trained from the
    /// data directory before the message is labelled.
    fn run_classify(&self, args: ClassifyArgs) -> Result<()> {
        use crate::application::classifier::EmailClassifier;

        let content = args.content.clone();
        let mut classifier = EmailClassifier::new(args.into());
        classifier.train()?;

        let label = classifier.classify(&content)?;
        println!("{}", label);
        Ok(())
    }
}
