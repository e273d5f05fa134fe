// file: src/models/definition_item.rs
// description: definition quiz question model: pick the word matching a definition
// reference: internal data structures

use crate::models::ChoiceOption;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionQuizItem {
    pub question: String,
    pub correct_answer: String,
    pub options: Vec<ChoiceOption>,
    pub audio_question: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
