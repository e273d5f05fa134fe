// file: src/pipeline/orchestrator.rs
// description: runs parse, the three generators, audio and the test-set update in order
// reference: sequential stages, any stage error aborts the run

use crate::audio::{AudioGenerator, AudioStats};
use crate::client::{ModelClient, SpeechClient};
use crate::config::Config;
use crate::error::{PipelineError, Result};
use crate::exporter::JsonExporter;
use crate::generator::{ContentGenerator, ContentKind, DefinitionQuiz, ScienceQuiz, Vocabulary};
use crate::models::{ContentType, DocumentStats, TestSetConfig};
use crate::parser::{DocumentParser, TextNormalizer};
use crate::pipeline::summary::RunSummary;
use crate::test_sets::{ConfigUpdater, generate_id};
use crate::utils::Validator;
use crate::utils::logging::{format_step, format_success};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub document_path: PathBuf,
    /// Defaults to the document's file stem.
    pub test_set_name: Option<String>,
    pub skip_science_quiz: bool,
    pub skip_vocabulary: bool,
    pub skip_definition_quiz: bool,
    pub skip_audio: bool,
    pub force_audio: bool,
}

impl RunOptions {
    pub fn new(document_path: impl Into<PathBuf>) -> Self {
        Self {
            document_path: document_path.into(),
            ..Self::default()
        }
    }

    pub fn resolved_name(&self) -> String {
        self.test_set_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| {
                self.document_path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default()
            })
    }
}

pub struct QuizPipeline {
    config: Config,
    model: ModelClient,
    show_progress: bool,
}

impl QuizPipeline {
    pub fn new(config: Config) -> Result<Self> {
        let model = ModelClient::new(&config.model)?;
        Ok(Self {
            config,
            model,
            show_progress: true,
        })
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub async fn run(&self, options: &RunOptions) -> Result<RunSummary> {
        let start = Instant::now();
        const TOTAL_STEPS: usize = 6;

        Validator::validate_file_path(&options.document_path)?;

        let name = options.resolved_name();
        let id = generate_id(&name);
        if id.is_empty() {
            return Err(PipelineError::Validation(format!(
                "Test set name '{}' has no usable characters for an id",
                name
            )));
        }

        info!("{}", format_step(1, TOTAL_STEPS, "Checking model backend"));
        if !self.model.test_connection().await {
            return Err(PipelineError::BackendUnreachable {
                url: self.config.model.base_url.clone(),
                message: format!("model \"{}\" is not available", self.model.model()),
            });
        }

        info!("{}", format_step(2, TOTAL_STEPS, "Parsing document"));
        let text = self.load_document(&options.document_path)?;

        info!("Test set: {} (ID: {})", name, id);
        let science_file = ContentType::ScienceQuiz.file_name(&id);
        let vocabulary_file = ContentType::Vocabulary.file_name(&id);

        let audio = if options.skip_audio {
            None
        } else {
            let speech = SpeechClient::new(&self.config.speech)?;
            let generator = AudioGenerator::new(
                &self.config.output.audio_dir,
                speech,
                self.config.speech.request_delay(),
            )?
            .with_force(options.force_audio)
            .with_progress(self.show_progress);
            Some(generator)
        };

        let mut summary = RunSummary::new(id.clone());

        info!("{}", format_step(3, TOTAL_STEPS, "Science quiz"));
        if options.skip_science_quiz {
            info!("Skipping science quiz generation");
        } else {
            self.run_stage(ScienceQuiz::new(name.clone()), &text, &id, audio.as_ref(), &mut summary)
                .await?;
        }

        info!("{}", format_step(4, TOTAL_STEPS, "Vocabulary"));
        if options.skip_vocabulary {
            info!("Skipping vocabulary generation");
        } else {
            self.run_stage(Vocabulary::new(), &text, &id, audio.as_ref(), &mut summary)
                .await?;
        }

        info!("{}", format_step(5, TOTAL_STEPS, "Definition quiz"));
        if options.skip_definition_quiz {
            info!("Skipping definition quiz generation");
        } else {
            self.run_stage(DefinitionQuiz::new(), &text, &id, audio.as_ref(), &mut summary)
                .await?;
        }

        info!("{}", format_step(6, TOTAL_STEPS, "Updating test-set configuration"));
        let entry = TestSetConfig::new(
            id,
            name,
            format!("Generated from {}", file_name(&options.document_path)),
            vocabulary_file,
            science_file,
        );
        let updater = ConfigUpdater::new(&self.config.output.config_file);
        summary.config_outcome = Some(updater.add_test_set(entry)?);

        if let Some(audio) = &audio {
            summary.audio.log_summary(audio.audio_dir());
        }

        summary.duration_secs = start.elapsed().as_secs_f64();
        summary.log_summary();

        Ok(summary)
    }

    fn load_document(&self, path: &Path) -> Result<String> {
        let raw = DocumentParser::parse(path)?;
        let text = TextNormalizer::new().clean_text(&raw);
        Validator::validate_content_not_empty(&text)?;

        let stats = DocumentStats::from_text(&text);
        info!("Document stats:");
        info!("  Characters: {}", stats.characters);
        info!("  Words: {}", stats.words);
        info!("  Lines: {}", stats.lines);
        info!("  Estimated reading time: {} min", stats.estimated_reading_time);

        Ok(text)
    }

    async fn run_stage<K: ContentKind>(
        &self,
        kind: K,
        text: &str,
        id: &str,
        audio: Option<&AudioGenerator>,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let content_type = kind.content_type();
        let generator = ContentGenerator::new(&self.model, kind);

        let items = generator.generate(text).await?;
        if items.is_empty() {
            warn!("Model returned no {} items", content_type.label());
        }

        let path = self.config.output.output_dir.join(content_type.file_name(id));
        JsonExporter::save(&items, &path)?;
        info!(
            "{}",
            format_success(&format!("{} saved: {}", content_type.label(), path.display()))
        );
        summary.record(content_type, path, items.len());

        if let Some(audio) = audio {
            let clips = generator.audio_clips(&items);
            let stats: AudioStats = audio.generate_batch(content_type.label(), &clips).await;
            summary.audio.merge(stats);
        }

        Ok(())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
