// ============================================================
// Layer 5 — Multinomial Naive Bayes
// ============================================================
// Fits per-class statistics over sparse token-count rows:
//
//   prior(c)        = ln( docs(c) / docs )
//   likelihood(c,t) = ln( (count(c,t) + α) / (total(c) + α·V) )
//
// with Laplace/additive smoothing (default α = 1). Inference
// scores each class as prior + Σ count·likelihood over the
// tokens present in the row and returns the argmax. Ties break
// toward the first class in sorted label order.
//
// Reference: Manning, Raghavan & Schütze (2008), ch. 13

use std::collections::{BTreeSet, HashMap};

use anyhow::{ensure, Result};

use crate::ml::vectorizer::SparseVector;

/// Default additive-smoothing pseudocount
pub const DEFAULT_ALPHA: f64 = 1.0;

/// A fitted multinomial Naive Bayes model.
/// Invalid for use before fitting — it can only be obtained
/// from a successful `fit`.
pub struct MultinomialNb {
    /// Class labels in sorted order; index = class id
    classes: Vec<String>,

    /// ln of each class's empirical document frequency
    class_log_priors: Vec<f64>,

    /// Smoothed ln-likelihood per class per vocabulary index
    feature_log_probs: Vec<Vec<f64>>,
}

impl MultinomialNb {
    /// Fit the model on training rows and their labels.
    ///
    /// `n_features` is the width of the frozen feature space the
    /// rows were produced in. Errors if rows and labels disagree
    /// in length, the training set is empty, fewer than 2 distinct
    /// labels are present, or `alpha` is not positive.
    pub fn fit(
        rows:       &[SparseVector],
        labels:     &[String],
        n_features: usize,
        alpha:      f64,
    ) -> Result<Self> {
        ensure!(
            rows.len() == labels.len(),
            "got {} feature rows but {} labels",
            rows.len(),
            labels.len()
        );
        ensure!(!rows.is_empty(), "cannot fit a classifier on an empty training set");
        ensure!(alpha > 0.0, "smoothing pseudocount must be positive, got {alpha}");

        let classes: Vec<String> = labels
            .iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .collect();
        ensure!(
            classes.len() >= 2,
            "training data must contain at least 2 distinct labels, found {}",
            classes.len()
        );

        let class_index: HashMap<&str, usize> = classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i))
            .collect();

        // Accumulate per-class document and token counts
        let mut doc_counts   = vec![0usize; classes.len()];
        let mut token_counts = vec![vec![0u64; n_features]; classes.len()];
        let mut token_totals = vec![0u64; classes.len()];

        for (row, label) in rows.iter().zip(labels) {
            let c = class_index[label.as_str()];
            doc_counts[c] += 1;
            for &(index, count) in row {
                token_counts[c][index] += u64::from(count);
                token_totals[c]        += u64::from(count);
            }
        }

        let n_docs = rows.len() as f64;
        let class_log_priors: Vec<f64> = doc_counts
            .iter()
            .map(|&d| (d as f64 / n_docs).ln())
            .collect();

        let feature_log_probs: Vec<Vec<f64>> = (0..classes.len())
            .map(|c| {
                let denominator = token_totals[c] as f64 + alpha * n_features as f64;
                token_counts[c]
                    .iter()
                    .map(|&t| ((t as f64 + alpha) / denominator).ln())
                    .collect()
            })
            .collect();

        tracing::debug!(
            "Fitted Naive Bayes: {} classes over {} documents, {} features",
            classes.len(),
            rows.len(),
            n_features,
        );

        Ok(Self { classes, class_log_priors, feature_log_probs })
    }

    /// The class labels this model was fitted on, in sorted order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Predict the label of one feature row: argmax over the
    /// per-class posterior scores. Deterministic — ties go to the
    /// first class in sorted label order.
    pub fn predict(&self, row: &SparseVector) -> &str {
        let mut best       = 0usize;
        let mut best_score = self.score(0, row);

        for c in 1..self.classes.len() {
            let score = self.score(c, row);
            if score > best_score {
                best       = c;
                best_score = score;
            }
        }

        &self.classes[best]
    }

    /// Posterior score of one class for one row:
    /// log prior + Σ count·log-likelihood over present tokens
    fn score(&self, class: usize, row: &SparseVector) -> f64 {
        let likelihoods = &self.feature_log_probs[class];
        self.class_log_priors[class]
            + row
                .iter()
                .map(|&(index, count)| f64::from(count) * likelihoods[index])
                .sum::<f64>()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_single_class_is_rejected() {
        let rows = vec![vec![(0, 1)], vec![(0, 2)]];
        let result = MultinomialNb::fit(&rows, &labels(&["spam", "spam"]), 1, DEFAULT_ALPHA);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_training_set_is_rejected() {
        let result = MultinomialNb::fit(&[], &[], 0, DEFAULT_ALPHA);
        assert!(result.is_err());
    }

    #[test]
    fn test_mismatched_rows_and_labels_are_rejected() {
        let rows = vec![vec![(0, 1)]];
        let result = MultinomialNb::fit(&rows, &labels(&["spam", "ham"]), 1, DEFAULT_ALPHA);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_positive_alpha_is_rejected() {
        let rows = vec![vec![(0, 1)], vec![(1, 1)]];
        let result = MultinomialNb::fit(&rows, &labels(&["spam", "ham"]), 2, 0.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_classes_are_sorted() {
        let rows  = vec![vec![(0, 1)], vec![(1, 1)]];
        let model = MultinomialNb::fit(&rows, &labels(&["spam", "ham"]), 2, DEFAULT_ALPHA).unwrap();
        assert_eq!(model.classes(), &["ham".to_string(), "spam".to_string()]);
    }

    #[test]
    fn test_predicts_the_class_owning_a_token() {
        // feature 0 appears only in spam rows, feature 1 only in ham rows
        let rows = vec![
            vec![(0, 3)],
            vec![(0, 2)],
            vec![(1, 3)],
            vec![(1, 2)],
        ];
        let model = MultinomialNb::fit(
            &rows,
            &labels(&["spam", "spam", "ham", "ham"]),
            2,
            DEFAULT_ALPHA,
        )
        .unwrap();

        assert_eq!(model.predict(&vec![(0, 1)]), "spam");
        assert_eq!(model.predict(&vec![(1, 1)]), "ham");
    }

    #[test]
    fn test_empty_row_falls_back_to_the_prior() {
        // 3 ham documents vs 1 spam document → ham prior dominates
        let rows = vec![vec![(0, 1)], vec![(0, 1)], vec![(0, 1)], vec![(1, 1)]];
        let model = MultinomialNb::fit(
            &rows,
            &labels(&["ham", "ham", "ham", "spam"]),
            2,
            DEFAULT_ALPHA,
        )
        .unwrap();

        assert_eq!(model.predict(&Vec::new()), "ham");
    }

    #[test]
    fn test_tie_breaks_toward_first_sorted_class() {
        // Perfectly symmetric classes: every score ties
        let rows = vec![vec![(0, 1)], vec![(1, 1)]];
        let model = MultinomialNb::fit(&rows, &labels(&["spam", "ham"]), 2, DEFAULT_ALPHA).unwrap();

        // Empty row: equal priors, no likelihood terms → tie → "ham"
        assert_eq!(model.predict(&Vec::new()), "ham");
    }

    #[test]
    fn test_inference_is_deterministic() {
        let rows = vec![vec![(0, 2)], vec![(1, 2)]];
        let model = MultinomialNb::fit(&rows, &labels(&["spam", "ham"]), 2, DEFAULT_ALPHA).unwrap();

        let row = vec![(0, 1), (1, 1)];
        let first = model.predict(&row).to_string();
        for _ in 0..10 {
            assert_eq!(model.predict(&row), first);
        }
    }
}
