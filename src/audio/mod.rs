// file: src/audio/mod.rs
// description: audio batch generation module exports
// reference: internal module structure

pub mod generator;
pub mod progress;

pub use generator::{AudioGenerator, ClipOutcome};
pub use progress::{AudioStats, BatchProgress};

use crate::utils::{sanitize_filename, strip_markup};
use std::path::Path;

/// One text field to speak and the file it is stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub text: String,
    pub filename: String,
}

impl AudioClip {
    /// `reference` is the item's audio path (`audios/word-seed.mp3`); only its
    /// file name is used. Without one, the name is derived from the text.
    pub fn new(text: &str, reference: Option<&str>) -> Self {
        let text = strip_markup(text).trim().to_string();

        let filename = reference
            .and_then(|r| Path::new(r).file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("{}.mp3", sanitize_filename(&text)));

        Self { text, filename }
    }
}
