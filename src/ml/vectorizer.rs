// ============================================================
// Layer 5 — Count Vectorizer
// ============================================================
// Transforms raw text into sparse token-count vectors.
//
// Tokenisation uses UAX#29 word boundaries (punctuation-aware),
// lowercases every token, and discards English stop words before
// counting.
//
// The vocabulary is built once, from the training text only, and
// is frozen afterwards: tokens met later that are not in the
// vocabulary are dropped — they never widen the feature space and
// never cause an error.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

/// A sparse token-count row: (feature index, count) pairs,
/// sorted by feature index. Indices are vocabulary positions.
pub type SparseVector = Vec<(usize, u32)>;

/// Count-based feature extractor with a frozen vocabulary.
pub struct CountVectorizer {
    /// token → feature index, assigned in first-encounter order
    vocabulary: HashMap<String, usize>,
}

impl CountVectorizer {
    /// Build the vocabulary from the training documents.
    /// Each distinct surviving token gets the next free index.
    pub fn fit(documents: &[String]) -> Self {
        let mut vocabulary = HashMap::new();

        for document in documents {
            for token in tokenize(document) {
                let next = vocabulary.len();
                vocabulary.entry(token).or_insert(next);
            }
        }

        tracing::debug!("Fitted vocabulary of {} tokens", vocabulary.len());
        Self { vocabulary }
    }

    /// Number of features in the frozen vocabulary
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Transform one document into a sparse count vector over the
    /// frozen vocabulary. Out-of-vocabulary tokens are ignored.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: HashMap<usize, u32> = HashMap::new();

        for token in tokenize(document) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *counts.entry(index).or_insert(0) += 1;
            }
        }

        let mut row: SparseVector = counts.into_iter().collect();
        row.sort_unstable_by_key(|&(index, _)| index);
        row
    }

    /// Transform a batch of documents
    pub fn transform_all(&self, documents: &[String]) -> Vec<SparseVector> {
        documents.iter().map(|d| self.transform(d)).collect()
    }
}

/// Lowercased UAX#29 word tokens with English stop words removed.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.unicode_words()
        .map(|w| w.to_lowercase())
        .filter(|w| !STOP_WORDS.contains(&w.as_str()))
}

/// Fixed English stop-word list applied after tokenisation.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an",
    "and", "any", "are", "as", "at", "be", "because", "been", "before",
    "being", "below", "between", "both", "but", "by", "can", "did", "do",
    "does", "doing", "don", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into",
    "is", "it", "its", "itself", "just", "me", "more", "most", "my",
    "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "s",
    "same", "she", "should", "so", "some", "such", "t", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under",
    "until", "up", "very", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "you", "your",
    "yours", "yourself", "yourselves",
];
