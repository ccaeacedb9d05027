// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `train` and `classify`, and all
// their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → f64, PathBuf, etc.)

use std::path::PathBuf;

use clap::{Args, Subcommand};
use crate::application::classifier::{TrainConfig, DEFAULT_DATA_DIR, DEFAULT_TEST_SIZE};

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the spam filter on a directory of labelled emails
    Train(TrainArgs),

    /// Train the filter, then classify a single message
    Classify(ClassifyArgs),
}

/// All arguments for the `train` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug, Clone)]
pub struct TrainArgs {
    /// Directory containing one JSON email record per file
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: String,

    /// Fraction of the data held out for evaluation, in (0, 1)
    #[arg(long, default_value_t = DEFAULT_TEST_SIZE)]
    pub test_size: f64,

    /// Append this run's evaluation metrics to a CSV file
    #[arg(long)]
    pub metrics_csv: Option<PathBuf>,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            data_dir:    a.data_dir,
            test_size:   a.test_size,
            metrics_csv: a.metrics_csv,
        }
    }
}

/// All arguments for the `classify` command
#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// The email content to classify
    #[arg(long)]
    pub content: String,

    /// Directory with labelled emails to train on first
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: String,

    /// Fraction of the data held out for evaluation, in (0, 1)
    #[arg(long, default_value_t = DEFAULT_TEST_SIZE)]
    pub test_size: f64,
}

impl From<ClassifyArgs> for TrainConfig {
    fn from(a: ClassifyArgs) -> Self {
        TrainConfig {
            data_dir:    a.data_dir,
            test_size:   a.test_size,
            metrics_csv: None,
        }
    }
}
