// file: src/generator/mod.rs
// description: generic content generator over the three content kinds
// reference: prompt -> model JSON -> validated, normalized item list

pub mod definition;
pub mod prompt;
pub mod science;
pub mod vocabulary;

pub use definition::DefinitionQuiz;
pub use prompt::PromptTemplate;
pub use science::ScienceQuiz;
pub use vocabulary::Vocabulary;

use crate::audio::AudioClip;
use crate::client::{GenerationOptions, GenerationRequest, ModelClient};
use crate::error::{PipelineError, Result};
use crate::models::{ChoiceOption, ContentType};
use crate::utils::validation::json_kind;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{error, info};

/// What varies between content kinds: the prompt, sampling options, the
/// per-item validation and derivation rules, and which fields get audio.
pub trait ContentKind {
    type Item: Serialize;

    fn content_type(&self) -> ContentType;

    fn template(&self) -> PromptTemplate;

    fn options(&self) -> GenerationOptions;

    /// Validates one raw model item. `position` is 1-based and appears in
    /// every error raised for the item.
    fn validate_item(&self, position: usize, raw: Value) -> Result<Self::Item>;

    fn audio_clips(&self, item: &Self::Item) -> Vec<AudioClip>;
}

pub struct ContentGenerator<'a, K: ContentKind> {
    client: &'a ModelClient,
    kind: K,
}

impl<'a, K: ContentKind> ContentGenerator<'a, K> {
    pub fn new(client: &'a ModelClient, kind: K) -> Self {
        Self { client, kind }
    }

    pub fn build_request(&self, document_text: &str) -> GenerationRequest {
        GenerationRequest::new(
            self.kind.template().fill(document_text),
            self.kind.options(),
        )
    }

    /// Backend and JSON failures are retried by the client. Validation
    /// failures are returned as-is; regenerating is the caller's decision.
    pub async fn generate(&self, document_text: &str) -> Result<Vec<K::Item>> {
        let label = self.kind.content_type().label();
        info!("Generating {}...", label);

        let request = self.build_request(document_text);

        let result = match self.client.generate_json_with_retry(&request).await {
            Ok(data) => self.validate_all(data),
            Err(e) => Err(e),
        };

        match result {
            Ok(items) => {
                info!("Generated {} {} items", items.len(), label);
                Ok(items)
            }
            Err(e) => {
                error!("Error generating {}: {}", label, e);
                Err(e)
            }
        }
    }

    pub fn validate_all(&self, data: Value) -> Result<Vec<K::Item>> {
        let items = match data {
            Value::Array(items) => items,
            other => {
                return Err(PipelineError::SchemaViolation {
                    index: None,
                    field: None,
                    message: format!(
                        "{} data must be an array, found {}",
                        self.kind.content_type().label(),
                        json_kind(&other)
                    ),
                });
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(i, raw)| self.kind.validate_item(i + 1, raw))
            .collect()
    }

    pub fn audio_clips(&self, items: &[K::Item]) -> Vec<AudioClip> {
        items
            .iter()
            .flat_map(|item| self.kind.audio_clips(item))
            .collect()
    }
}

/// Moves the listed keys out of `object`; what is left is carried through as
/// the item's unknown fields.
pub(crate) fn take_extra(mut object: Map<String, Value>, known: &[&str]) -> Map<String, Value> {
    for key in known {
        object.remove(*key);
    }
    object
}

/// Shared four-card rule for vocabulary and definition items: exactly four
/// options, exactly one flagged correct.
pub(crate) fn parse_choice_options(
    position: usize,
    object: &Map<String, Value>,
    subject: &str,
) -> Result<Vec<ChoiceOption>> {
    let raw = match object.get("options") {
        Some(Value::Array(raw)) if raw.len() == 4 => raw.clone(),
        _ => {
            return Err(PipelineError::schema(
                position,
                "options",
                format!("{} must have exactly 4 options", subject),
            ));
        }
    };

    let options: Vec<ChoiceOption> = serde_json::from_value(Value::Array(raw)).map_err(|e| {
        PipelineError::schema(position, "options", format!("{} has malformed options: {}", subject, e))
    })?;

    let correct = options.iter().filter(|opt| opt.is_correct).count();
    if correct != 1 {
        return Err(PipelineError::schema(
            position,
            "options",
            format!(
                "{} must have exactly one correct option (found {})",
                subject, correct
            ),
        ));
    }

    Ok(options)
}
