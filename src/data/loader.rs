// ============================================================
// Layer 4 — Document Loader
// ============================================================
// Loads labelled email records from a directory.
//
// Storage format: one JSON object per file, with two required
// string fields:
//
//   { "content": "Buy now!!!", "label": "spam" }
//
// Every directory entry is read — there is no extension or
// content-type filtering. Loading is all-or-nothing: the first
// unreadable or malformed entry aborts the whole load.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

/// The on-disk record shape. The filename is not part of the
/// record — it becomes the Document's `source`.
#[derive(Debug, Deserialize)]
struct RawRecord {
    content: String,
    label:   String,
}

/// Loads all email records from a given directory.
/// Implements the DocumentSource trait from Layer 3.
pub struct JsonLoader {
    /// Path to the directory containing the record files
    dir: String,
}

impl JsonLoader {
    /// Create a new JsonLoader pointed at a directory
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DocumentSource for JsonLoader {
    fn load_all(&self) -> Result<Vec<Document>> {
        let dir = Path::new(&self.dir);

        let entries = fs::read_dir(dir)
            .with_context(|| format!("cannot read data directory '{}'", self.dir))?;

        let mut documents = Vec::new();
        for entry in entries {
            let entry = entry
                .with_context(|| format!("cannot list data directory '{}'", self.dir))?;
            let path = entry.path();
            let source = entry.file_name().to_string_lossy().into_owned();

            let raw = fs::read_to_string(&path)
                .with_context(|| format!("cannot read '{}'", path.display()))?;

            let record: RawRecord = serde_json::from_str(&raw)
                .with_context(|| format!("'{}' is not a valid email record", path.display()))?;

            documents.push(Document::new(source, record.content, record.label));
        }

        tracing::debug!("Loaded {} documents from '{}'", documents.len(), self.dir);
        Ok(documents)
    }
}
