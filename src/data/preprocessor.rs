// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Normalises raw email body text before tokenisation.
//
// Email bodies arrive with:
//   - CRLF line endings from SMTP transport
//   - Non-breaking spaces (U+00A0) from HTML-sourced text
//   - Zero-width spaces (U+200B) from copy-pasting
//   - Tab characters and runs of spaces from layout tricks
//   - Stray control characters
//
// Cleaning steps (applied in order):
//   1. Map Unicode whitespace variants and control chars to plain space
//   2. Normalise \r\n and \r to \n
//   3. Collapse runs of spaces, trim each line
//
// The same cleaning runs on the training path and the classify
// path, so fitted vocabulary and inference input always agree.

pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Clean a raw email body for downstream tokenisation.
    pub fn clean(&self, text: &str) -> String {
        // Character-level normalisation pass
        let normalised: String = text
            .replace("\r\n", "\n")
            .chars()
            .map(|c| match c {
                '\t' => ' ',
                '\u{00A0}' => ' ',
                '\u{200B}' => ' ',
                '\u{FEFF}' => ' ',
                '\r' => '\n',
                c if c.is_control() && c != '\n' => ' ',
                c => c,
            })
            .collect();

        // Collapse runs of spaces and trim line edges
        normalised
            .lines()
            .map(|line| {
                line.split(' ')
                    .filter(|w| !w.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_multiple_spaces() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("free   prize"), "free prize");
    }

    #[test]
    fn test_trims_edges() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("  see you at the meeting  "), "see you at the meeting");
    }

    #[test]
    fn test_normalises_crlf() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("line one\r\nline two"), "line one\nline two");
    }

    #[test]
    fn test_removes_control_chars() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("win\x01big"), "win big");
    }

    #[test]
    fn test_maps_nbsp_to_space() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("buy\u{00A0}now"), "buy now");
    }

    #[test]
    fn test_empty_string() {
        let p = Preprocessor::new();
        assert_eq!(p.clean(""), "");
    }
}
