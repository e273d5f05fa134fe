// file: src/generator/definition.rs
// description: definition quiz rules: four word options, answer reconciled with the flagged option
// reference: pick-the-word definition items

use crate::audio::AudioClip;
use crate::client::GenerationOptions;
use crate::error::{PipelineError, Result};
use crate::generator::{ContentKind, PromptTemplate, parse_choice_options, take_extra};
use crate::models::{ContentType, DefinitionQuizItem};
use crate::utils::{Validator, slugify};
use serde_json::Value;
use tracing::warn;

const KNOWN_FIELDS: &[&str] = &["question", "correctAnswer", "options", "audioQuestion"];

#[derive(Debug, Clone, Default)]
pub struct DefinitionQuiz;

impl DefinitionQuiz {
    pub fn new() -> Self {
        Self
    }
}

impl ContentKind for DefinitionQuiz {
    type Item = DefinitionQuizItem;

    fn content_type(&self) -> ContentType {
        ContentType::DefinitionQuiz
    }

    fn template(&self) -> PromptTemplate {
        PromptTemplate::definition_quiz()
    }

    fn options(&self) -> GenerationOptions {
        GenerationOptions::default()
            .with_temperature(0.7)
            .with_max_tokens(6000)
    }

    fn validate_item(&self, position: usize, raw: Value) -> Result<DefinitionQuizItem> {
        let object = Validator::require_object(position, raw)?;

        let question = Validator::require_string(position, &object, "question")?;
        let mut correct_answer = Validator::require_string(position, &object, "correctAnswer")?;

        let subject = format!("Question {}", position);
        let options = parse_choice_options(position, &object, &subject)?;

        // The option flagged correct is authoritative.
        let flagged = options
            .iter()
            .find(|opt| opt.is_correct)
            .and_then(|opt| opt.word.clone())
            .filter(|word| !word.trim().is_empty())
            .ok_or_else(|| {
                PipelineError::schema(position, "options", "correct option has no 'word'")
            })?;

        if flagged != correct_answer {
            warn!(
                "Question {}: correctAnswer \"{}\" doesn't match correct option \"{}\". Fixing...",
                position, correct_answer, flagged
            );
            correct_answer = flagged;
        }

        let audio_question = Validator::optional_string(&object, "audioQuestion")
            .unwrap_or_else(|| format!("audios/question-{}.mp3", slugify(&correct_answer, 40)));

        Ok(DefinitionQuizItem {
            question,
            correct_answer,
            options,
            audio_question,
            extra: take_extra(object, KNOWN_FIELDS),
        })
    }

    fn audio_clips(&self, item: &DefinitionQuizItem) -> Vec<AudioClip> {
        vec![AudioClip::new(&item.question, Some(&item.audio_question))]
    }
}
