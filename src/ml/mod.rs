// ============================================================
// Layer 5 — ML Layer
// ============================================================
// All feature-extraction and classification math lives here.
// No file I/O and no CLI concerns — the application layer feeds
// this layer cleaned text and labels.
//
// What's in this layer:
//
//   vectorizer.rs — CountVectorizer
//                   Word tokenisation (UAX#29 boundaries),
//                   English stop-word removal, and the frozen
//                   vocabulary mapping tokens to feature indices.
//                   Output: sparse token-count vectors.
//
//   model.rs      — MultinomialNb
//                   Multinomial Naive Bayes: per-class log
//                   priors and Laplace-smoothed per-token log
//                   likelihoods, argmax inference.
//
//   pipeline.rs   — ClassifierPipeline
//                   The fitted vectorizer + model pair, with
//                   held-out evaluation.
//
// Reference: Manning, Raghavan & Schütze (2008),
//            Introduction to Information Retrieval, ch. 13

/// Token-count feature extraction with a frozen vocabulary
pub mod vectorizer;

/// Multinomial Naive Bayes classifier
pub mod model;

/// Fitted vectorizer + classifier composition
pub mod pipeline;
