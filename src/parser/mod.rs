// file: src/parser/mod.rs
// description: document parsing module exports
// reference: internal module structure

pub mod document;
pub mod normalizer;

pub use document::{DocumentParser, SourceDocument};
pub use normalizer::TextNormalizer;
