// ============================================================
// Layer 4 — Train/Evaluation Splitter
// ============================================================
// Randomly shuffles samples and splits them into two sets:
//   - Training set:   used to fit the vectorizer and classifier
//   - Evaluation set: used to measure held-out accuracy
//
// Uses the unbiased Fisher-Yates shuffle via
// rand::seq::SliceRandom. The shuffle is unseeded, so the
// partition differs between runs.

use anyhow::{ensure, Result};
use rand::seq::SliceRandom;

/// Randomly shuffle `samples` and split into (train, evaluation).
///
/// `test_size` is the held-out fraction and must lie strictly
/// inside (0, 1). The evaluation set gets `ceil(len × test_size)`
/// samples, so any valid fraction yields at least one. Errors if
/// either resulting set would be empty.
pub fn split_train_test<T>(mut samples: Vec<T>, test_size: f64) -> Result<(Vec<T>, Vec<T>)> {
    ensure!(
        test_size > 0.0 && test_size < 1.0,
        "test_size must be in (0, 1), got {test_size}"
    );

    let total  = samples.len();
    let n_test = ((total as f64) * test_size).ceil() as usize;
    ensure!(
        n_test < total,
        "{} documents are too few to hold out {:.0}% for evaluation",
        total,
        test_size * 100.0
    );

    samples.shuffle(&mut rand::thread_rng());

    // split_off(n) removes elements [n..] from the Vec and returns them
    let test = samples.split_off(total - n_test);

    tracing::debug!(
        "Dataset split: {} training, {} evaluation",
        samples.len(),
        test.len(),
    );

    Ok((samples, test))
}
