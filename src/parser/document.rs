// file: src/parser/document.rs
// description: loads study documents and extracts plain text per format
// reference: https://docs.rs/docx-rs, https://docs.rs/pdf-extract

use crate::error::{PipelineError, Result};
use crate::models::DocumentFormat;
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Raw bytes of a study document plus its detected format. Lives only long
/// enough to extract text.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub format: DocumentFormat,
    pub bytes: Vec<u8>,
}

impl SourceDocument {
    pub fn load(path: &Path) -> Result<Self> {
        let format = DocumentFormat::from_path(path)?;

        let bytes = fs::read(path).map_err(|e| PipelineError::ParseFailure {
            path: path.to_path_buf(),
            format: format.as_str(),
            message: e.to_string(),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            format,
            bytes,
        })
    }

    pub fn extract_text(&self) -> Result<String> {
        match self.format {
            DocumentFormat::PlainText => self.extract_plain_text(),
            DocumentFormat::Pdf => self.extract_pdf(),
            DocumentFormat::WordProcessor => self.extract_docx(),
        }
    }

    fn extract_plain_text(&self) -> Result<String> {
        String::from_utf8(self.bytes.clone()).map_err(|e| self.failure(e))
    }

    fn extract_pdf(&self) -> Result<String> {
        pdf_extract::extract_text_from_mem(&self.bytes).map_err(|e| self.failure(e))
    }

    fn extract_docx(&self) -> Result<String> {
        let docx = docx_rs::read_docx(&self.bytes).map_err(|e| self.failure(e))?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
                _ => None,
            })
            .filter(|text| !text.trim().is_empty())
            .collect();

        debug!("Extracted {} paragraphs from DOCX", paragraphs.len());
        Ok(paragraphs.join("\n"))
    }

    fn failure(&self, err: impl std::fmt::Display) -> PipelineError {
        PipelineError::ParseFailure {
            path: self.path.clone(),
            format: self.format.as_str(),
            message: err.to_string(),
        }
    }
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut parts = Vec::new();

    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => parts.push(t.text.clone()),
                    RunChild::Tab(_) => parts.push("\t".to_string()),
                    _ => {}
                }
            }
        }
    }

    parts.join("")
}

pub struct DocumentParser;

impl DocumentParser {
    /// Dispatches on the file extension and returns the raw extracted text.
    pub fn parse(path: &Path) -> Result<String> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        info!("Parsing document: {}", name);

        let document = SourceDocument::load(path)?;
        let text = document.extract_text()?;

        info!(
            "Parsed {} file: {} characters",
            document.format,
            text.chars().count()
        );
        Ok(text)
    }
}
