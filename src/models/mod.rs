// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod content;
pub mod definition_item;
pub mod document;
pub mod quiz_item;
pub mod test_set;
pub mod vocabulary_item;

pub use content::{ChoiceOption, ContentType};
pub use definition_item::DefinitionQuizItem;
pub use document::{DocumentFormat, DocumentStats};
pub use quiz_item::{CorrectAnswer, QuizItem, QuizType, Verdict};
pub use test_set::TestSetConfig;
pub use vocabulary_item::VocabularyItem;
