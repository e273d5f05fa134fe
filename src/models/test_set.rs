// file: src/models/test_set.rs
// description: entry of the flat test-set list consumed by the quiz front end
// reference: internal data structures

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Hand-edited entries may omit fields or carry extra ones; both survive a
/// read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSetConfig {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub vocabulary_file: String,
    #[serde(default)]
    pub science_quiz_file: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TestSetConfig {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        vocabulary_file: impl Into<String>,
        science_quiz_file: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            vocabulary_file: vocabulary_file.into(),
            science_quiz_file: science_quiz_file.into(),
            extra: Map::new(),
        }
    }
}
