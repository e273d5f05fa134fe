// file: src/client/model.rs
// description: client for the local text-generation backend (tags + generate API)
// reference: https://github.com/ollama/ollama/blob/main/docs/api.md

use crate::client::retry::RetryPolicy;
use crate::config::ModelConfig;
use crate::error::{PipelineError, Result};
use crate::utils::patterns::JSON_SPAN;
use crate::utils::truncate_chars;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, warn};

const PREVIEW_CHARS: usize = 500;

/// Sampling options forwarded verbatim to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub num_predict: u32,
}

impl GenerationOptions {
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, num_predict: u32) -> Self {
        self.num_predict = num_predict;
        self
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.9,
            top_k: 40,
            num_predict: 4000,
        }
    }
}

/// A filled prompt plus its sampling options. Built once per generator run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    prompt: String,
    options: GenerationOptions,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, options: GenerationOptions) -> Self {
        Self {
            prompt: prompt.into(),
            options,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }
}

#[derive(Debug, Serialize)]
struct GenerateBody<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: &'a GenerationOptions,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Debug, Deserialize)]
struct ModelTag {
    name: String,
}

#[derive(Debug, Clone)]
pub struct ModelClient {
    client: Client,
    base_url: String,
    model: String,
    retry: RetryPolicy,
}

impl ModelClient {
    pub fn new(config: &ModelConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| PipelineError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            retry: RetryPolicy::new(config.max_attempts, config.retry_delay()),
        })
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether the configured model is installed. Never fails: an unreachable
    /// backend is reported as `false` and the caller decides what to do.
    pub async fn test_connection(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Failed to connect to model backend at {}: {}", url, e);
                return false;
            }
        };

        if !response.status().is_success() {
            error!(
                "Model backend returned status {} for {}",
                response.status(),
                url
            );
            return false;
        }

        let tags: TagsResponse = match response.json().await {
            Ok(tags) => tags,
            Err(e) => {
                error!("Failed to decode model list from {}: {}", url, e);
                return false;
            }
        };

        if tags.models.iter().any(|m| m.name == self.model) {
            info!("Connected to model backend. Model \"{}\" is available", self.model);
            true
        } else {
            let available: Vec<&str> = tags.models.iter().map(|m| m.name.as_str()).collect();
            warn!(
                "Model \"{}\" not found. Available models: {:?}",
                self.model, available
            );
            false
        }
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        info!("Generating with {}...", self.model);

        let body = GenerateBody {
            model: &self.model,
            prompt: request.prompt(),
            stream: false,
            options: request.options(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| PipelineError::BackendUnreachable {
                url: url.clone(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PipelineError::BackendError {
                url,
                message: format!("status {}: {}", status, error_text),
            });
        }

        let generated: GenerateResponse =
            response
                .json()
                .await
                .map_err(|e| PipelineError::BackendError {
                    url: url.clone(),
                    message: format!("Failed to decode generate response: {}", e),
                })?;

        info!("Generated {} characters", generated.response.chars().count());
        Ok(generated.response)
    }

    pub async fn generate_json(&self, request: &GenerationRequest) -> Result<Value> {
        let text = self.generate(request).await?;
        extract_json(&text)
    }

    pub async fn generate_with_retry(&self, request: &GenerationRequest) -> Result<String> {
        self.retry
            .run("Generation", || self.generate(request))
            .await
    }

    pub async fn generate_json_with_retry(&self, request: &GenerationRequest) -> Result<Value> {
        self.retry
            .run("JSON generation", || self.generate_json(request))
            .await
    }
}

/// Parses the first bracketed span of a model reply, falling back to the
/// whole reply when no bracket pair is present.
pub fn extract_json(text: &str) -> Result<Value> {
    let candidate = JSON_SPAN.find(text).map(|m| m.as_str()).unwrap_or(text);

    serde_json::from_str(candidate).map_err(|e| {
        let preview = truncate_chars(text, PREVIEW_CHARS);
        debug!("Unparseable model response: {}", preview);
        PipelineError::InvalidJson {
            message: e.to_string(),
            preview,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_json_from_prose() {
        let reply = "Sure! Here is the quiz:\n```json\n[{\"question\": \"Is the Sun a star?\"}]\n```\nEnjoy.";
        let value = extract_json(reply).unwrap();
        assert_eq!(value, json!([{"question": "Is the Sun a star?"}]));
    }

    #[test]
    fn test_extract_json_whole_text() {
        assert_eq!(extract_json(" 42 ").unwrap(), json!(42));
    }

    #[test]
    fn test_extract_json_invalid() {
        let err = extract_json("I could not create a quiz from this text.").unwrap_err();
        assert!(matches!(err, PipelineError::InvalidJson { .. }));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_extract_json_unbalanced() {
        let err = extract_json("[\"seed\", \"root\"").unwrap_err();
        assert!(matches!(err, PipelineError::InvalidJson { .. }));
    }

    #[test]
    fn test_generation_options_serialization() {
        let options = GenerationOptions::default()
            .with_temperature(0.5)
            .with_max_tokens(8000);

        let value = serde_json::to_value(options).unwrap();
        assert!((value["temperature"].as_f64().unwrap() - 0.5).abs() < 1e-6);
        assert!((value["top_p"].as_f64().unwrap() - 0.9).abs() < 1e-6);
        assert_eq!(value["top_k"], json!(40));
        assert_eq!(value["num_predict"], json!(8000));
    }

    #[test]
    fn test_client_trims_base_url() {
        let mut config = crate::config::Config::default_config().model;
        config.base_url = "http://localhost:11434/".to_string();

        let client = ModelClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:11434");
        assert_eq!(client.model(), "kimi-k2:1t-cloud");
        assert_eq!(client.retry.max_attempts, 3);
    }
}
