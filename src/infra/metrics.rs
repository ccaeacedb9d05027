// ============================================================
// Layer 6 — Evaluation Metrics
// ============================================================
// Records the outcome of a training run: how many held-out
// documents were evaluated, how many were labelled correctly,
// and the resulting accuracy.
//
// MetricsLogger appends one CSV row per run, so repeated runs
// over a growing mail corpus can be compared:
//
//   evaluated,correct,accuracy
//   20,18,0.900000
//   24,23,0.958333

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

/// Held-out evaluation result for one training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalMetrics {
    /// Number of held-out documents evaluated
    pub evaluated: usize,

    /// How many of them received their true label
    pub correct: usize,

    /// correct / evaluated, in [0.0, 1.0]; 0.0 for an empty set
    pub accuracy: f64,
}

impl EvalMetrics {
    /// Build a metrics record from raw counts.
    pub fn new(correct: usize, evaluated: usize) -> Self {
        let accuracy = if evaluated > 0 {
            correct as f64 / evaluated as f64
        } else {
            0.0
        };
        Self { evaluated, correct, accuracy }
    }
}

/// Appends run metrics to a CSV file for later analysis.
pub struct MetricsLogger {
    /// Full path to the CSV file
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create a new MetricsLogger.
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let csv_path = path.into();

        if let Some(parent) = csv_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("cannot create '{}'", parent.display()))?;
            }
        }

        // Header only on a fresh file, so runs append across invocations
        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)
                .with_context(|| format!("cannot create '{}'", csv_path.display()))?;
            writeln!(f, "evaluated,correct,accuracy")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one run's metrics as a new CSV row.
    pub fn log(&self, m: &EvalMetrics) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("cannot open '{}'", self.csv_path.display()))?;

        writeln!(f, "{},{},{:.6}", m.evaluated, m.correct, m.accuracy)?;

        tracing::debug!(
            "Logged run metrics: {}/{} correct, accuracy={:.4}",
            m.correct,
            m.evaluated,
            m.accuracy,
        );

        Ok(())
    }

    /// Path to the metrics CSV file
    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}
