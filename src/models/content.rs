// file: src/models/content.rs
// description: content set kinds and the answer option shared by card-style items
// reference: internal data structures

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    ScienceQuiz,
    Vocabulary,
    DefinitionQuiz,
}

impl ContentType {
    pub fn file_name(&self, test_set_id: &str) -> String {
        match self {
            ContentType::ScienceQuiz => format!("science-quiz-data-{}.json", test_set_id),
            ContentType::Vocabulary => format!("vocabulary-data-{}.json", test_set_id),
            ContentType::DefinitionQuiz => format!("definition-quiz-data-{}.json", test_set_id),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentType::ScienceQuiz => "Science Quiz",
            ContentType::Vocabulary => "Vocabulary",
            ContentType::DefinitionQuiz => "Definition Quiz",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the four answer cards on a vocabulary or definition item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub is_correct: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Model output flags the correct card as `true`, `"true"` or `1`.
/// `null`, `"false"`, `""` and `0` read as not correct.
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "1"),
        _ => false,
    })
}
