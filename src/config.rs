// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub model: ModelConfig,
    pub speech: SpeechConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub max_attempts: usize,
    pub retry_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpeechConfig {
    pub endpoint: String,
    pub voice: String,
    pub speed: f32,
    pub request_delay_ms: u64,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub audio_dir: PathBuf,
    pub config_file: PathBuf,
}

impl ModelConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl SpeechConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl OutputConfig {
    /// Rebase every output path under `root`: generated files go to the root
    /// itself, audio to `root/audios`, the test-set list to
    /// `root/test-sets-config.json`.
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            audio_dir: root.join("audios"),
            config_file: root.join("test-sets-config.json"),
            output_dir: root,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default_config();
        let mut builder = config::Config::builder()
            .add_source(
                config::Config::try_from(&defaults)
                    .map_err(|e| PipelineError::Config(e.to_string()))?,
            );

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(
                config::File::from(Path::new("config/default.toml")).required(false),
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix("QUIZGEN")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            model: ModelConfig {
                base_url: "http://localhost:11434".to_string(),
                model: "kimi-k2:1t-cloud".to_string(),
                timeout_secs: 300,
                max_attempts: 3,
                retry_delay_ms: 2000,
            },
            speech: SpeechConfig {
                endpoint: "http://localhost:8880/v1/audio/speech".to_string(),
                voice: "af_alloy".to_string(),
                speed: 1.0,
                request_delay_ms: 100,
                timeout_secs: 120,
            },
            output: OutputConfig {
                output_dir: PathBuf::from("public"),
                audio_dir: PathBuf::from("public/audios"),
                config_file: PathBuf::from("public/test-sets-config.json"),
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.model.max_attempts == 0 {
            return Err(PipelineError::Config(
                "model.max_attempts must be greater than 0".to_string(),
            ));
        }

        if self.model.model.trim().is_empty() {
            return Err(PipelineError::Config(
                "model.model must name an installed model".to_string(),
            ));
        }

        if self.speech.speed <= 0.0 {
            return Err(PipelineError::Config(
                "speech.speed must be positive".to_string(),
            ));
        }

        Validator::validate_url(&self.model.base_url)
            .map_err(|e| PipelineError::Config(format!("model.base_url: {}", e)))?;
        Validator::validate_url(&self.speech.endpoint)
            .map_err(|e| PipelineError::Config(format!("speech.endpoint: {}", e)))?;

        Ok(())
    }
}
