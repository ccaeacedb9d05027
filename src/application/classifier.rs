// ============================================================
// Layer 2 — EmailClassifier
// ============================================================
// The pipeline orchestrator. Runs the full training sequence in
// order:
//
//   Step 1: Load JSON email records     (Layer 4 - data)
//   Step 2: Normalise the body text     (Layer 4 - data)
//   Step 3: Split train/evaluation      (Layer 4 - data)
//   Step 4: Fit vectorizer + classifier (Layer 5 - ml)
//   Step 5: Evaluate held-out accuracy  (Layer 6 - infra)
//
// Lifecycle: an EmailClassifier starts untrained and becomes
// trained on the first successful `train()`. Classification
// requires the trained state — calling `classify` before `train`
// is rejected with a descriptive error. Training again re-runs
// the whole fit from scratch and replaces the previous state.

use anyhow::{anyhow, Result};
use std::path::PathBuf;

use crate::data::{
    loader::JsonLoader,
    preprocessor::Preprocessor,
    splitter::split_train_test,
};
use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;
use crate::infra::metrics::{EvalMetrics, MetricsLogger};
use crate::ml::pipeline::ClassifierPipeline;

/// Relative directory the original deployment keeps its mail corpus in
pub const DEFAULT_DATA_DIR: &str = "email_data";

/// Fraction of the corpus held out for evaluation
pub const DEFAULT_TEST_SIZE: f64 = 0.2;

// ─── Training Configuration ──────────────────────────────────────────────────
/// Everything a training run needs to know.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// Directory containing one JSON email record per file
    pub data_dir: String,

    /// Held-out fraction, strictly inside (0, 1)
    pub test_size: f64,

    /// When set, run metrics are appended to this CSV file
    pub metrics_csv: Option<PathBuf>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            data_dir:    DEFAULT_DATA_DIR.to_string(),
            test_size:   DEFAULT_TEST_SIZE,
            metrics_csv: None,
        }
    }
}

// ─── EmailClassifier ─────────────────────────────────────────────────────────
/// A utility for classifying emails based on their content.
///
/// Holds the fitted pipeline once trained; `None` means the
/// untrained state.
pub struct EmailClassifier {
    config:   TrainConfig,
    pipeline: Option<ClassifierPipeline>,
}

impl EmailClassifier {
    /// Create an untrained classifier over the given configuration
    pub fn new(config: TrainConfig) -> Self {
        Self { config, pipeline: None }
    }

    /// Whether `train` has completed successfully
    pub fn is_trained(&self) -> bool {
        self.pipeline.is_some()
    }

    /// Load the email corpus as two parallel sequences: the i-th
    /// content corresponds to the i-th label. Order follows the
    /// directory listing.
    pub fn load(&self) -> Result<(Vec<String>, Vec<String>)> {
        let loader    = JsonLoader::new(&self.config.data_dir);
        let documents = loader.load_all()?;
        Ok(documents.into_iter().map(|d| (d.content, d.label)).unzip())
    }

    /// Train the spam filter: load → normalise → split → fit →
    /// evaluate. Returns the held-out evaluation metrics and
    /// leaves the classifier in the trained state.
    ///
    /// Training an already-trained instance re-runs the whole fit
    /// and replaces the previous state.
    pub fn train(&mut self) -> Result<EvalMetrics> {
        if self.pipeline.is_some() {
            tracing::warn!("Classifier is already trained — refitting from scratch and replacing the previous state");
        }

        // ── Step 1: Load the labelled corpus ─────────────────────────────────
        let loader    = JsonLoader::new(&self.config.data_dir);
        let documents = loader.load_all()?;
        tracing::info!(
            "Loaded {} documents from '{}'",
            documents.len(),
            self.config.data_dir,
        );

        // ── Step 2: Normalise the body text ──────────────────────────────────
        let preprocessor = Preprocessor::new();
        let documents: Vec<Document> = documents
            .into_iter()
            .map(|mut d| {
                d.content = preprocessor.clean(&d.content);
                d
            })
            .collect();

        // ── Step 3: Shuffle and split train/evaluation ───────────────────────
        let (train_docs, test_docs) = split_train_test(documents, self.config.test_size)?;
        tracing::info!(
            "Split: {} training, {} evaluation",
            train_docs.len(),
            test_docs.len(),
        );

        // ── Step 4: Fit the pipeline on the training subset only ─────────────
        let (contents, labels): (Vec<String>, Vec<String>) = train_docs
            .into_iter()
            .map(|d| (d.content, d.label))
            .unzip();
        let pipeline = ClassifierPipeline::fit(&contents, &labels)?;

        // ── Step 5: Evaluate on the held-out subset ──────────────────────────
        let (test_contents, test_labels): (Vec<String>, Vec<String>) = test_docs
            .into_iter()
            .map(|d| (d.content, d.label))
            .unzip();
        let metrics = pipeline.evaluate(&test_contents, &test_labels);
        tracing::info!(
            "Held-out accuracy: {:.4} ({}/{} correct)",
            metrics.accuracy,
            metrics.correct,
            metrics.evaluated,
        );

        if let Some(path) = &self.config.metrics_csv {
            MetricsLogger::new(path)?.log(&metrics)?;
        }

        self.pipeline = Some(pipeline);
        Ok(metrics)
    }

    /// Classify an email based on its content. Requires the
    /// trained state.
    pub fn classify(&self, content: &str) -> Result<String> {
        let pipeline = self
            .pipeline
            .as_ref()
            .ok_or_else(|| anyhow!("the classifier has not been trained yet — run train first"))?;

        let cleaned = Preprocessor::new().clean(content);
        Ok(pipeline.predict(&cleaned))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_record(dir: &Path, name: &str, content: &str, label: &str) {
        let record = serde_json::json!({ "content": content, "label": label });
        fs::write(dir.join(name), record.to_string()).unwrap();
    }

    /// Ten clearly separable records — five of each class — so a
    /// 0.2 split always leaves both classes in the training set.
    fn seed_corpus(dir: &Path) {
        let spam = [
            "Buy now!!!",
            "Win a free prize now",
            "Claim your free prize money",
            "Free money if you buy today",
            "You won the prize, claim your money now",
        ];
        let ham = [
            "Let's meet for lunch",
            "See you at the meeting",
            "Lunch meeting moved to noon",
            "Notes from the morning meeting",
            "Shall we schedule lunch after the meeting",
        ];
        for (i, content) in spam.iter().enumerate() {
            write_record(dir, &format!("spam_{i}.json"), content, "spam");
        }
        for (i, content) in ham.iter().enumerate() {
            write_record(dir, &format!("ham_{i}.json"), content, "ham");
        }
    }

    fn config_for(dir: &Path) -> TrainConfig {
        TrainConfig {
            data_dir: dir.to_string_lossy().into_owned(),
            ..TrainConfig::default()
        }
    }

    #[test]
    fn test_load_returns_parallel_sequences() {
        let dir = tempfile::tempdir().unwrap();
        seed_corpus(dir.path());

        let classifier = EmailClassifier::new(config_for(dir.path()));
        let (contents, labels) = classifier.load().unwrap();

        assert_eq!(contents.len(), 10);
        assert_eq!(labels.len(),   10);
    }

    #[test]
    fn test_classify_before_train_is_a_state_error() {
        let dir = tempfile::tempdir().unwrap();
        seed_corpus(dir.path());

        let classifier = EmailClassifier::new(config_for(dir.path()));
        assert!(!classifier.is_trained());

        let err = classifier.classify("free prize now").unwrap_err();
        assert!(err.to_string().contains("not been trained"));
    }

    #[test]
    fn test_end_to_end_spam_ham_scenario() {
        let dir = tempfile::tempdir().unwrap();
        seed_corpus(dir.path());

        let mut classifier = EmailClassifier::new(config_for(dir.path()));
        let metrics = classifier.train().unwrap();

        assert!(classifier.is_trained());
        assert!((0.0..=1.0).contains(&metrics.accuracy));
        assert_eq!(metrics.evaluated, 2); // ceil(10 × 0.2)

        assert_eq!(classifier.classify("free prize now").unwrap(), "spam");
        assert_eq!(classifier.classify("meeting lunch").unwrap(), "ham");
    }

    #[test]
    fn test_classification_is_deterministic_once_trained() {
        let dir = tempfile::tempdir().unwrap();
        seed_corpus(dir.path());

        let mut classifier = EmailClassifier::new(config_for(dir.path()));
        classifier.train().unwrap();

        let first = classifier.classify("free lunch prize").unwrap();
        for _ in 0..5 {
            assert_eq!(classifier.classify("free lunch prize").unwrap(), first);
        }
    }

    #[test]
    fn test_retraining_replaces_state_and_still_classifies() {
        let dir = tempfile::tempdir().unwrap();
        seed_corpus(dir.path());

        let mut classifier = EmailClassifier::new(config_for(dir.path()));
        classifier.train().unwrap();
        classifier.train().unwrap();

        assert!(classifier.is_trained());
        assert_eq!(classifier.classify("free prize now").unwrap(), "spam");
    }

    #[test]
    fn test_single_label_corpus_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..10 {
            write_record(dir.path(), &format!("spam_{i}.json"), "buy a prize now", "spam");
        }

        let mut classifier = EmailClassifier::new(config_for(dir.path()));
        let result = classifier.train();

        assert!(result.is_err());
        assert!(!classifier.is_trained());
    }

    #[test]
    fn test_invalid_test_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        seed_corpus(dir.path());

        let mut classifier = EmailClassifier::new(TrainConfig {
            data_dir:  dir.path().to_string_lossy().into_owned(),
            test_size: 1.5,
            ..TrainConfig::default()
        });
        assert!(classifier.train().is_err());
    }

    #[test]
    fn test_missing_data_dir_fails_training() {
        let mut classifier = EmailClassifier::new(TrainConfig {
            data_dir: "no/such/directory".to_string(),
            ..TrainConfig::default()
        });
        assert!(classifier.train().is_err());
    }

    #[test]
    fn test_metrics_csv_row_is_appended() {
        let dir      = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("email_data");
        fs::create_dir(&data_dir).unwrap();
        seed_corpus(&data_dir);
        let csv = dir.path().join("metrics.csv");

        let mut classifier = EmailClassifier::new(TrainConfig {
            data_dir:    data_dir.to_string_lossy().into_owned(),
            test_size:   DEFAULT_TEST_SIZE,
            metrics_csv: Some(csv.clone()),
        });
        classifier.train().unwrap();

        let contents = fs::read_to_string(csv).unwrap();
        assert!(contents.starts_with("evaluated,correct,accuracy"));
        assert_eq!(contents.lines().count(), 2);
    }
}
