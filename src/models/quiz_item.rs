// file: src/models/quiz_item.rs
// description: science quiz question model (multiple-choice or true/false)
// reference: internal data structures

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizType {
    #[serde(rename = "multiple-choice")]
    MultipleChoice,
    #[serde(rename = "true-false")]
    TrueFalse,
}

impl QuizType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "multiple-choice" => Some(QuizType::MultipleChoice),
            "true-false" => Some(QuizType::TrueFalse),
            _ => None,
        }
    }

    /// Short tag used in derived audio filenames.
    pub fn audio_tag(&self) -> &'static str {
        match self {
            QuizType::MultipleChoice => "q",
            QuizType::TrueFalse => "tf",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "T")]
    True,
    #[serde(rename = "F")]
    False,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    Index(u8),
    Verdict(Verdict),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizItem {
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuizType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<Value>,
    pub correct_answer: CorrectAnswer,
    pub exam: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(rename = "questionES")]
    pub question_es: String,
    #[serde(rename = "explanationES")]
    pub explanation_es: String,
    pub audio_question: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
