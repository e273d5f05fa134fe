// file: src/parser/normalizer.rs
// description: Plain-text normalization applied to every extracted document
// reference: line ending and whitespace normalization

use crate::utils::patterns::{EXCESS_NEWLINES, LINE_ENDING};

pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// CRLF and lone CR become LF, three or more newlines collapse to a blank
    /// line, and the result is trimmed. Applying it twice changes nothing.
    pub fn clean_text(&self, content: &str) -> String {
        let normalized = self.normalize_line_endings(content);
        let collapsed = self.collapse_blank_lines(&normalized);
        collapsed.trim().to_string()
    }

    fn normalize_line_endings(&self, content: &str) -> String {
        LINE_ENDING.replace_all(content, "\n").into_owned()
    }

    fn collapse_blank_lines(&self, content: &str) -> String {
        EXCESS_NEWLINES.replace_all(content, "\n\n").into_owned()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
