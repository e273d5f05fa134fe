// file: src/models/document.rs
// description: source document formats and text statistics
// reference: internal data structures

use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    WordProcessor,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(DocumentFormat::PlainText),
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::WordProcessor),
            other => Err(PipelineError::UnsupportedFormat {
                extension: if other.is_empty() {
                    "(none)".to_string()
                } else {
                    format!(".{}", other)
                },
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::PlainText => "TXT",
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::WordProcessor => "DOCX",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub characters: usize,
    pub words: usize,
    pub lines: usize,
    pub estimated_reading_time: usize,
}

impl DocumentStats {
    pub fn from_text(text: &str) -> Self {
        let words = text.split_whitespace().count();

        Self {
            characters: text.chars().count(),
            words,
            lines: text.split('\n').count(),
            estimated_reading_time: words.div_ceil(WORDS_PER_MINUTE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("notes.txt")).unwrap(),
            DocumentFormat::PlainText
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("Chapter.PDF")).unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("unit/lesson.docx")).unwrap(),
            DocumentFormat::WordProcessor
        );
    }

    #[test]
    fn test_unsupported_format() {
        for name in ["slides.pptx", "notes.md", "README"] {
            let err = DocumentFormat::from_path(Path::new(name)).unwrap_err();
            assert!(matches!(err, PipelineError::UnsupportedFormat { .. }), "{name}");
        }
    }

    #[test]
    fn test_stats() {
        let text = "Plants need light.\nThey also need water and soil.";
        let stats = DocumentStats::from_text(text);

        assert_eq!(stats.words, 9);
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.characters, text.chars().count());
        assert_eq!(stats.estimated_reading_time, 1);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text = "word ".repeat(401);
        let stats = DocumentStats::from_text(text.trim());
        assert_eq!(stats.words, 401);
        assert_eq!(stats.estimated_reading_time, 3);
    }

    #[test]
    fn test_empty_text_stats() {
        let stats = DocumentStats::from_text("");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.estimated_reading_time, 0);
    }
}
