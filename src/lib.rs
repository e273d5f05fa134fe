// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod audio;
pub mod client;
pub mod config;
pub mod error;
pub mod exporter;
pub mod generator;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod test_sets;
pub mod utils;

pub use audio::{AudioClip, AudioGenerator, AudioStats};
pub use client::{GenerationOptions, GenerationRequest, ModelClient, RetryPolicy, SpeechClient};
pub use config::{Config, ModelConfig, OutputConfig, SpeechConfig};
pub use error::{PipelineError, Result};
pub use exporter::JsonExporter;
pub use generator::{ContentGenerator, ContentKind, DefinitionQuiz, ScienceQuiz, Vocabulary};
pub use models::{
    ContentType, DefinitionQuizItem, DocumentFormat, DocumentStats, QuizItem, TestSetConfig,
    VocabularyItem,
};
pub use parser::{DocumentParser, TextNormalizer};
pub use pipeline::{QuizPipeline, RunOptions, RunSummary};
pub use test_sets::{ConfigUpdater, UpsertOutcome, generate_id};
pub use utils::Validator;
