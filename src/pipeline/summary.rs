// file: src/pipeline/summary.rs
// description: what a run produced: files, item counts and audio totals
// reference: end-of-run statistics block

use crate::audio::AudioStats;
use crate::models::ContentType;
use crate::test_sets::UpsertOutcome;
use crate::utils::logging::{format_success, rule};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub test_set_id: String,
    pub files_written: Vec<PathBuf>,
    pub item_counts: Vec<(ContentType, usize)>,
    pub audio: AudioStats,
    pub config_outcome: Option<UpsertOutcome>,
    pub duration_secs: f64,
}

impl RunSummary {
    pub fn new(test_set_id: impl Into<String>) -> Self {
        Self {
            test_set_id: test_set_id.into(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, content_type: ContentType, path: PathBuf, count: usize) {
        self.item_counts.push((content_type, count));
        self.files_written.push(path);
    }

    pub fn items_for(&self, content_type: ContentType) -> Option<usize> {
        self.item_counts
            .iter()
            .find(|(kind, _)| *kind == content_type)
            .map(|(_, count)| *count)
    }

    pub fn total_items(&self) -> usize {
        self.item_counts.iter().map(|(_, count)| count).sum()
    }

    pub fn log_summary(&self) {
        info!("{}", rule());
        info!("{}", format_success("Quiz generation complete!"));
        info!("{}", rule());
        info!("Test set ID: {}", self.test_set_id);
        for (kind, count) in &self.item_counts {
            info!("{}: {} items", kind.label(), count);
        }
        for path in &self.files_written {
            info!("Wrote {}", path.display());
        }
        if self.audio.total() > 0 {
            info!(
                "Audio: {} generated, {} skipped, {} failed",
                self.audio.successful, self.audio.skipped, self.audio.failed
            );
        }
        info!("Duration: {:.2}s", self.duration_secs);
        info!("{}", rule());
    }
}
