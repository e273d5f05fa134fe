// file: src/exporter/json.rs
// description: pretty-printed json array files for generated content

use crate::error::{PipelineError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

pub struct JsonExporter;

impl JsonExporter {
    /// Writes `items` as a 2-space indented array, replacing any existing file.
    pub fn save<T: Serialize>(items: &[T], path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PipelineError::file_operation(parent, e))?;
        }

        let json = serde_json::to_string_pretty(items)?;
        fs::write(path, json).map_err(|e| PipelineError::file_operation(path, e))?;

        info!("Saved {} items to {}", items.len(), path.display());
        Ok(())
    }

    pub fn load<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
        let content =
            fs::read_to_string(path).map_err(|e| PipelineError::file_operation(path, e))?;
        let items = serde_json::from_str(&content)?;
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TestSetConfig;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    #[test]
    fn test_save_creates_parents_and_indents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("public/nested/items.json");

        JsonExporter::save(&[json!({"word": "seed"})], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[\n  {\n    \"word\": \"seed\"\n  }\n]");
    }

    #[test]
    fn test_save_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("items.json");

        JsonExporter::save(&[1, 2, 3], &path).unwrap();
        JsonExporter::save(&[4], &path).unwrap();

        let items: Vec<Value> = JsonExporter::load(&path).unwrap();
        assert_eq!(items, vec![json!(4)]);
    }

    #[test]
    fn test_load_typed_entries() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test-sets-config.json");
        fs::write(
            &path,
            r#"[{"id":"unit-1","name":"Unit 1","description":"d","vocabularyFile":"v.json","scienceQuizFile":"s.json"}]"#,
        )
        .unwrap();

        let entries: Vec<TestSetConfig> = JsonExporter::load(&path).unwrap();
        assert_eq!(entries[0].vocabulary_file, "v.json");
    }

    #[test]
    fn test_load_missing_and_malformed() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.json");
        assert!(matches!(
            JsonExporter::load::<Value>(&missing),
            Err(PipelineError::FileOperation { .. })
        ));

        let broken = temp.path().join("broken.json");
        fs::write(&broken, "[{").unwrap();
        assert!(matches!(
            JsonExporter::load::<Value>(&broken),
            Err(PipelineError::Serialization(_))
        ));
    }
}
