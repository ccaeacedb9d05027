// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer programs against these traits instead
// of concrete types, so storage formats can be swapped without
// touching the orchestration code.

use anyhow::Result;
use crate::domain::document::Document;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can produce labelled documents.
///
/// Implementations:
///   - JsonLoader → loads from a directory of JSON record files
pub trait DocumentSource {
    /// Load all available documents from this source, in the
    /// source's listing order. Returns an error on the first
    /// unreadable or malformed entry — there is no partial success.
    fn load_all(&self) -> Result<Vec<Document>>;
}
