// file: src/generator/vocabulary.rs
// description: vocabulary card rules: translations, four picture options, audio and emoji image
// reference: https://github.com/jdecked/twemoji

use crate::audio::AudioClip;
use crate::client::GenerationOptions;
use crate::error::Result;
use crate::generator::{ContentKind, PromptTemplate, parse_choice_options, take_extra};
use crate::models::{ContentType, VocabularyItem};
use crate::utils::{Validator, emoji_image_url, slugify, truncate_chars};
use serde_json::Value;
use tracing::warn;

const DEFAULT_EMOJI: &str = "📚";

const KNOWN_FIELDS: &[&str] = &[
    "word",
    "spanish",
    "sentenceEN",
    "sentenceES",
    "options",
    "audioWord",
    "audioSentence",
    "wordEmoji",
    "wordEmojiImage",
    "explanation",
];

#[derive(Debug, Clone, Default)]
pub struct Vocabulary;

impl Vocabulary {
    pub fn new() -> Self {
        Self
    }
}

impl ContentKind for Vocabulary {
    type Item = VocabularyItem;

    fn content_type(&self) -> ContentType {
        ContentType::Vocabulary
    }

    fn template(&self) -> PromptTemplate {
        PromptTemplate::vocabulary()
    }

    fn options(&self) -> GenerationOptions {
        GenerationOptions::default()
            .with_temperature(0.7)
            .with_max_tokens(6000)
    }

    fn validate_item(&self, position: usize, raw: Value) -> Result<VocabularyItem> {
        let object = Validator::require_object(position, raw)?;

        let word = Validator::require_string(position, &object, "word")?;
        let subject = format!("Vocabulary item {} ({})", position, word);

        let spanish = Validator::optional_string(&object, "spanish").unwrap_or_else(|| {
            warn!("Item {} ({}) missing Spanish translation", position, word);
            word.clone()
        });

        let sentence_en = Validator::require_string(position, &object, "sentenceEN")?;
        let sentence_es = Validator::optional_string(&object, "sentenceES").unwrap_or_else(|| {
            warn!("Item {} ({}) missing Spanish sentence", position, word);
            sentence_en.clone()
        });

        let options = parse_choice_options(position, &object, &subject)?;

        let audio_word = Validator::optional_string(&object, "audioWord")
            .unwrap_or_else(|| format!("audios/word-{}.mp3", slugify(&word, 40)));

        let audio_sentence = Validator::optional_string(&object, "audioSentence")
            .unwrap_or_else(|| {
                format!(
                    "audios/sentence-{}.mp3",
                    slugify(&truncate_chars(&sentence_en, 50), 40)
                )
            });

        let word_emoji = Validator::optional_string(&object, "wordEmoji").unwrap_or_else(|| {
            options
                .iter()
                .find(|opt| opt.is_correct)
                .and_then(|opt| opt.emoji.clone())
                .filter(|emoji| !emoji.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_EMOJI.to_string())
        });

        let word_emoji_image = Validator::optional_string(&object, "wordEmojiImage")
            .unwrap_or_else(|| emoji_image_url(&word_emoji));

        let explanation = Validator::optional_string(&object, "explanation")
            .unwrap_or_else(|| format!("{} {}", sentence_en, sentence_es));

        Ok(VocabularyItem {
            word,
            spanish,
            sentence_en,
            sentence_es,
            options,
            audio_word,
            audio_sentence,
            word_emoji,
            word_emoji_image,
            explanation,
            extra: take_extra(object, KNOWN_FIELDS),
        })
    }

    fn audio_clips(&self, item: &VocabularyItem) -> Vec<AudioClip> {
        vec![
            AudioClip::new(&item.word, Some(&item.audio_word)),
            AudioClip::new(&item.sentence_en, Some(&item.audio_sentence)),
        ]
    }
}
