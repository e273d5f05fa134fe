// file: src/audio/progress.rs
// description: per-batch audio counters and progress bar
// reference: uses indicatif for progress bars and tracks generation counts

use crate::utils::logging::{format_error, format_success, format_warning, rule};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioStats {
    pub successful: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl AudioStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.successful + self.skipped + self.failed
    }

    pub fn merge(&mut self, other: AudioStats) {
        self.successful += other.successful;
        self.skipped += other.skipped;
        self.failed += other.failed;
    }

    pub fn log_summary(&self, audio_dir: &Path) {
        info!("{}", rule());
        info!("Audio Generation Summary:");
        info!("{}", rule());
        info!("{}", format_success(&format!("Successful: {}", self.successful)));
        info!(
            "{}",
            format_warning(&format!("Skipped (already exists): {}", self.skipped))
        );
        info!("{}", format_error(&format!("Failed: {}", self.failed)));
        info!("Audio directory: {}", audio_dir.display());
        info!("{}", rule());
    }
}

pub struct BatchProgress {
    bar: ProgressBar,
}

impl BatchProgress {
    pub fn new(total: usize, visible: bool) -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(total as u64),
            if visible {
                ProgressDrawTarget::stderr()
            } else {
                ProgressDrawTarget::hidden()
            },
        );

        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            bar.set_style(style.progress_chars("█▓▒░"));
        }

        Self { bar }
    }

    pub fn advance(&self, message: &str) {
        self.bar.set_message(message.to_string());
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for BatchProgress {
    fn drop(&mut self) {
        self.finish();
    }
}
