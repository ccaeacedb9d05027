// ============================================================
// Layer 5 — Classifier Pipeline
// ============================================================
// Composes the fitted CountVectorizer and MultinomialNb into a
// single inference engine. A ClassifierPipeline only exists in
// the fitted state: `fit` is the sole constructor, and the
// vectorizer's vocabulary is built from the training text alone.

use anyhow::{ensure, Result};

use crate::infra::metrics::EvalMetrics;
use crate::ml::model::{MultinomialNb, DEFAULT_ALPHA};
use crate::ml::vectorizer::CountVectorizer;

/// A fitted text-classification pipeline:
/// text → sparse counts → Naive Bayes argmax → label.
pub struct ClassifierPipeline {
    vectorizer: CountVectorizer,
    model:      MultinomialNb,
}

impl ClassifierPipeline {
    /// Fit the vectorizer and classifier in sequence on the
    /// training documents. `contents` and `labels` are parallel
    /// sequences — the i-th content carries the i-th label.
    pub fn fit(contents: &[String], labels: &[String]) -> Result<Self> {
        ensure!(
            contents.len() == labels.len(),
            "got {} training documents but {} labels",
            contents.len(),
            labels.len()
        );

        let vectorizer = CountVectorizer::fit(contents);
        let rows       = vectorizer.transform_all(contents);
        let model      = MultinomialNb::fit(&rows, labels, vectorizer.vocabulary_len(), DEFAULT_ALPHA)?;

        tracing::debug!(
            "Fitted pipeline on {} documents: vocabulary of {} tokens, classes {:?}",
            contents.len(),
            vectorizer.vocabulary_len(),
            model.classes(),
        );

        Ok(Self { vectorizer, model })
    }

    /// Predict the label of one document through the frozen
    /// vectorizer and the fitted model.
    pub fn predict(&self, content: &str) -> String {
        let row = self.vectorizer.transform(content);
        self.model.predict(&row).to_string()
    }

    /// Measure accuracy on a held-out set of parallel
    /// content/label sequences.
    pub fn evaluate(&self, contents: &[String], labels: &[String]) -> EvalMetrics {
        let correct = contents
            .iter()
            .zip(labels)
            .filter(|(content, label)| self.predict(content) == **label)
            .count();

        EvalMetrics::new(correct, contents.len())
    }

    /// The class labels the pipeline was fitted on, in sorted order
    pub fn classes(&self) -> &[String] {
        self.model.classes()
    }
}
