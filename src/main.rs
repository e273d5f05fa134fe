// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use quizgen::utils::logging::{format_error, format_info};
use quizgen::{Config, ConfigUpdater, OutputConfig, QuizPipeline, RunOptions};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "generate-quiz")]
#[command(author = "cipher")]
#[command(version)]
#[command(
    about = "Generate science quiz, vocabulary and definition sets with audio from a document",
    long_about = None
)]
struct Cli {
    /// Source document (.txt, .pdf or .docx)
    #[arg(value_name = "DOCUMENT", required_unless_present = "list_test_sets")]
    document: Option<PathBuf>,

    /// Test set name, defaults to the document's file name without extension
    #[arg(value_name = "TEST_SET_NAME")]
    name: Option<String>,

    #[arg(long)]
    skip_science_quiz: bool,

    #[arg(long)]
    skip_vocabulary: bool,

    #[arg(long)]
    skip_definition_quiz: bool,

    #[arg(long)]
    skip_audio: bool,

    /// Regenerate audio files that already exist
    #[arg(long, conflicts_with = "skip_audio")]
    force_audio: bool,

    /// Root for generated files, audio and the test-set list
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Hide the audio progress bar
    #[arg(long)]
    no_progress: bool,

    /// Print the configured test sets and exit
    #[arg(long)]
    list_test_sets: bool,

    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    quizgen::utils::logging::init_logger(cli.color, cli.verbose);

    let mut config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).context("Failed to load configuration")?
    };

    if let Some(output_dir) = &cli.output_dir {
        config.output = OutputConfig::rooted_at(output_dir);
    }

    if cli.list_test_sets {
        return cmd_list(&config);
    }

    let Some(document) = cli.document else {
        anyhow::bail!("A document path is required");
    };

    let options = RunOptions {
        document_path: document,
        test_set_name: cli.name,
        skip_science_quiz: cli.skip_science_quiz,
        skip_vocabulary: cli.skip_vocabulary,
        skip_definition_quiz: cli.skip_definition_quiz,
        skip_audio: cli.skip_audio,
        force_audio: cli.force_audio,
    };

    info!("Document: {}", options.document_path.display());
    info!("Test set name: {}", options.resolved_name());
    info!("Model: {}", config.model.model);

    let show_progress = progress_visible(cli.no_progress, std::io::stderr().is_terminal());
    let pipeline = QuizPipeline::new(config)?.with_progress(show_progress);

    match pipeline.run(&options).await {
        Ok(summary) => {
            info!("Next steps:");
            info!("  1. Review the generated JSON files");
            info!("  2. Open the app and select \"{}\"", options.resolved_name());
            if summary.audio.failed > 0 {
                warn!(
                    "{} audio files failed; rerun to retry only the missing ones",
                    summary.audio.failed
                );
            }
            Ok(())
        }
        Err(e) => {
            error!("{}", format_error(&format!("Quiz generation failed: {}", e)));
            Err(e.into())
        }
    }
}

fn progress_visible(no_progress: bool, stderr_is_terminal: bool) -> bool {
    !no_progress && stderr_is_terminal
}

fn cmd_list(config: &Config) -> Result<()> {
    let updater = ConfigUpdater::new(&config.output.config_file);
    let entries = updater
        .list_test_sets()
        .with_context(|| format!("Failed to read {}", updater.path().display()))?;

    if entries.is_empty() {
        println!("No test sets in {}", updater.path().display());
        return Ok(());
    }

    println!("{}", format_info(&format!("{} test set(s):", entries.len())));
    for entry in entries {
        println!("  {} ({})", entry.name, entry.id);
        println!("    vocabulary:   {}", entry.vocabulary_file);
        println!("    science quiz: {}", entry.science_quiz_file);
    }

    Ok(())
}
