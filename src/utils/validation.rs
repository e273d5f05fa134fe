// file: src/utils/validation.rs
// description: input validation helpers for documents, urls and model items
// reference: input validation patterns

use crate::error::{PipelineError, Result};
use serde_json::{Map, Value};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PipelineError::Validation(format!(
                "Document not found: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(PipelineError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_content_not_empty(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(PipelineError::Validation("Content is empty".to_string()));
        }
        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(PipelineError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn require_object(index: usize, value: Value) -> Result<Map<String, Value>> {
        match value {
            Value::Object(map) => Ok(map),
            other => Err(PipelineError::SchemaViolation {
                index: Some(index),
                field: None,
                message: format!("expected an object, found {}", json_kind(&other)),
            }),
        }
    }

    pub fn require_string(index: usize, object: &Map<String, Value>, key: &str) -> Result<String> {
        match object.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            _ => Err(PipelineError::schema(
                index,
                key,
                format!("missing '{}' field", key),
            )),
        }
    }

    pub fn optional_string(object: &Map<String, Value>, key: &str) -> Option<String> {
        match object.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
