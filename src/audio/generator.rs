// file: src/audio/generator.rs
// description: writes one mp3 per clip, skipping files already on disk
// reference: sequential batch with per-item error accounting

use crate::audio::AudioClip;
use crate::audio::progress::{AudioStats, BatchProgress};
use crate::client::SpeechClient;
use crate::error::{PipelineError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipOutcome {
    Generated,
    Skipped,
}

pub struct AudioGenerator {
    audio_dir: PathBuf,
    client: SpeechClient,
    request_delay: Duration,
    force: bool,
    show_progress: bool,
}

impl AudioGenerator {
    pub fn new(
        audio_dir: impl Into<PathBuf>,
        client: SpeechClient,
        request_delay: Duration,
    ) -> Result<Self> {
        let audio_dir = audio_dir.into();
        fs::create_dir_all(&audio_dir)
            .map_err(|e| PipelineError::file_operation(&audio_dir, e))?;

        Ok(Self {
            audio_dir,
            client,
            request_delay,
            force: false,
            show_progress: true,
        })
    }

    /// Regenerate clips even when the target file already exists.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn audio_dir(&self) -> &Path {
        &self.audio_dir
    }

    pub fn target_path(&self, clip: &AudioClip) -> PathBuf {
        self.audio_dir.join(&clip.filename)
    }

    pub async fn generate_clip(&self, clip: &AudioClip) -> Result<ClipOutcome> {
        let target = self.target_path(clip);

        if !self.force && target.exists() {
            debug!("Skipping existing audio: {}", clip.filename);
            return Ok(ClipOutcome::Skipped);
        }

        if clip.text.is_empty() {
            return Err(PipelineError::Validation(format!(
                "No text to speak for {}",
                clip.filename
            )));
        }

        let result = self.client.synthesize(&clip.text).await;
        tokio::time::sleep(self.request_delay).await;

        let bytes = result?;
        fs::write(&target, &bytes).map_err(|e| PipelineError::file_operation(&target, e))?;

        debug!("Wrote {} bytes to {}", bytes.len(), target.display());
        Ok(ClipOutcome::Generated)
    }

    pub async fn generate_batch(&self, label: &str, clips: &[AudioClip]) -> AudioStats {
        let mut stats = AudioStats::new();

        if clips.is_empty() {
            return stats;
        }

        info!("Generating {} audio files ({} clips)...", label, clips.len());
        let progress = BatchProgress::new(clips.len(), self.show_progress);

        for clip in clips {
            match self.generate_clip(clip).await {
                Ok(ClipOutcome::Generated) => stats.successful += 1,
                Ok(ClipOutcome::Skipped) => stats.skipped += 1,
                Err(e) => {
                    warn!("Failed to generate audio {}: {}", clip.filename, e);
                    stats.failed += 1;
                }
            }
            progress.advance(&clip.filename);
        }

        progress.finish();
        info!(
            "{} audio: {} generated, {} skipped, {} failed",
            label, stats.successful, stats.skipped, stats.failed
        );

        stats
    }
}
