// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// Represents a single labelled email loaded from disk.
// This is a plain data struct with no behaviour — the body text,
// its category label, and the filename it came from.

/// A labelled email record.
///
/// The storage filename is the record's only identity; no other
/// metadata is modelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The filename the record came from — kept for traceability
    /// in error messages and logs
    pub source: String,

    /// The free-text email body
    pub content: String,

    /// The categorical label, e.g. "spam" or "ham"
    pub label: String,
}

impl Document {
    /// Create a new Document.
    /// Uses impl Into<String> so callers can pass &str or String.
    pub fn new(
        source:  impl Into<String>,
        content: impl Into<String>,
        label:   impl Into<String>,
    ) -> Self {
        Self {
            source:  source.into(),
            content: content.into(),
            label:   label.into(),
        }
    }
}
