// file: src/models/vocabulary_item.rs
// description: vocabulary card model with translations, audio and emoji image
// reference: internal data structures

use crate::models::ChoiceOption;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    pub word: String,
    pub spanish: String,
    #[serde(rename = "sentenceEN")]
    pub sentence_en: String,
    #[serde(rename = "sentenceES")]
    pub sentence_es: String,
    pub options: Vec<ChoiceOption>,
    pub audio_word: String,
    pub audio_sentence: String,
    pub word_emoji: String,
    pub word_emoji_image: String,
    pub explanation: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
