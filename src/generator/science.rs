// file: src/generator/science.rs
// description: science quiz rules: question types, answers, translations, audio names
// reference: multiple-choice and true/false quiz items

use crate::audio::AudioClip;
use crate::client::GenerationOptions;
use crate::error::{PipelineError, Result};
use crate::generator::{ContentKind, PromptTemplate, take_extra};
use crate::models::{ContentType, CorrectAnswer, QuizItem, QuizType, Verdict};
use crate::utils::{Validator, slugify, truncate_chars};
use serde_json::Value;
use tracing::warn;

const KNOWN_FIELDS: &[&str] = &[
    "question",
    "type",
    "options",
    "correctAnswer",
    "exam",
    "explanation",
    "questionES",
    "explanationES",
    "audioQuestion",
];

#[derive(Debug, Clone)]
pub struct ScienceQuiz {
    exam_name: String,
}

impl ScienceQuiz {
    pub fn new(exam_name: impl Into<String>) -> Self {
        Self {
            exam_name: exam_name.into(),
        }
    }

    fn correct_answer(
        &self,
        position: usize,
        kind: QuizType,
        options: &[Value],
        raw: Option<&Value>,
    ) -> Result<CorrectAnswer> {
        match kind {
            QuizType::MultipleChoice => {
                if options.len() != 4 {
                    return Err(PipelineError::schema(
                        position,
                        "options",
                        format!(
                            "multiple-choice must have exactly 4 options (found {})",
                            options.len()
                        ),
                    ));
                }
                match raw.and_then(answer_index) {
                    Some(index) if index <= 3 => Ok(CorrectAnswer::Index(index as u8)),
                    _ => Err(PipelineError::schema(
                        position,
                        "correctAnswer",
                        "correctAnswer must be 0-3 for multiple-choice",
                    )),
                }
            }
            QuizType::TrueFalse => match raw.and_then(Value::as_str) {
                Some("T") => Ok(CorrectAnswer::Verdict(Verdict::True)),
                Some("F") => Ok(CorrectAnswer::Verdict(Verdict::False)),
                _ => Err(PipelineError::schema(
                    position,
                    "correctAnswer",
                    "correctAnswer must be 'T' or 'F' for true-false",
                )),
            },
        }
    }
}

/// Integral numbers only; `2.0` is accepted as `2`.
fn answer_index(value: &Value) -> Option<u64> {
    if let Some(index) = value.as_u64() {
        return Some(index);
    }
    value
        .as_f64()
        .filter(|n| n.fract() == 0.0 && *n >= 0.0)
        .map(|n| n as u64)
}

impl ContentKind for ScienceQuiz {
    type Item = QuizItem;

    fn content_type(&self) -> ContentType {
        ContentType::ScienceQuiz
    }

    fn template(&self) -> PromptTemplate {
        PromptTemplate::science_quiz()
    }

    fn options(&self) -> GenerationOptions {
        GenerationOptions::default()
            .with_temperature(0.7)
            .with_max_tokens(8000)
    }

    fn validate_item(&self, position: usize, raw: Value) -> Result<QuizItem> {
        let object = Validator::require_object(position, raw)?;

        let question = Validator::require_string(position, &object, "question")?;
        let type_name = Validator::require_string(position, &object, "type")?;
        let kind = QuizType::parse(&type_name).ok_or_else(|| {
            PipelineError::schema(
                position,
                "type",
                format!(
                    "unsupported type '{}' (expected multiple-choice or true-false)",
                    type_name
                ),
            )
        })?;

        let options = match object.get("options") {
            Some(Value::Array(options)) => options.clone(),
            _ => Vec::new(),
        };
        let correct_answer =
            self.correct_answer(position, kind, &options, object.get("correctAnswer"))?;

        let exam = Validator::optional_string(&object, "exam")
            .unwrap_or_else(|| self.exam_name.clone());
        let explanation = Validator::optional_string(&object, "explanation");

        let question_es = Validator::optional_string(&object, "questionES").unwrap_or_else(|| {
            warn!("Question {} missing Spanish translation", position);
            question.clone()
        });

        let explanation_es =
            Validator::optional_string(&object, "explanationES").unwrap_or_else(|| {
                warn!("Question {} missing Spanish explanation", position);
                explanation.clone().unwrap_or_default()
            });

        let audio_question =
            Validator::optional_string(&object, "audioQuestion").unwrap_or_else(|| {
                format!(
                    "audios/english-{}{}-{}.mp3",
                    kind.audio_tag(),
                    position,
                    slugify(&truncate_chars(&question, 50), 40)
                )
            });

        Ok(QuizItem {
            question,
            kind,
            options,
            correct_answer,
            exam,
            explanation,
            question_es,
            explanation_es,
            audio_question,
            extra: take_extra(object, KNOWN_FIELDS),
        })
    }

    fn audio_clips(&self, item: &QuizItem) -> Vec<AudioClip> {
        vec![AudioClip::new(&item.question, Some(&item.audio_question))]
    }
}
