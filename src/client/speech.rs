// file: src/client/speech.rs
// description: client for the local OpenAI-compatible speech endpoint
// reference: https://platform.openai.com/docs/api-reference/audio/createSpeech

use crate::config::SpeechConfig;
use crate::error::{PipelineError, Result};
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    input: &'a str,
    voice: &'a str,
    response_format: &'static str,
    download_format: &'static str,
    stream: bool,
    speed: f32,
    return_download_link: bool,
}

#[derive(Debug, Clone)]
pub struct SpeechClient {
    client: Client,
    endpoint: String,
    voice: String,
    speed: f32,
}

impl SpeechClient {
    pub fn new(config: &SpeechConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| PipelineError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            voice: config.voice.clone(),
            speed: config.speed,
        })
    }

    /// Requests one MP3 rendering of `text` and returns the raw payload.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        let request = SpeechRequest {
            input: text,
            voice: &self.voice,
            response_format: "mp3",
            download_format: "mp3",
            stream: true,
            speed: self.speed,
            return_download_link: true,
        };

        debug!("Requesting speech for {} chars", text.chars().count());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| PipelineError::BackendUnreachable {
                url: self.endpoint.clone(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(PipelineError::BackendError {
                url: self.endpoint.clone(),
                message: format!("TTS server error: {}", response.status()),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| PipelineError::BackendError {
                url: self.endpoint.clone(),
                message: format!("Failed to read audio payload: {}", e),
            })?;

        Ok(bytes.to_vec())
    }
}
