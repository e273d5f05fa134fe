// file: src/test_sets/updater.rs
// description: upserts entries into the front end's test-set list
// reference: read-modify-write of a flat json array keyed by id

use crate::error::Result;
use crate::exporter::JsonExporter;
use crate::models::TestSetConfig;
use crate::utils::identifier;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Added,
    Updated,
}

/// `"Biology Chapter 3!"` becomes `"biology-chapter-3"`.
pub fn generate_id(name: &str) -> String {
    identifier(name)
}

pub struct ConfigUpdater {
    path: PathBuf,
}

impl ConfigUpdater {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file reads as an empty list.
    pub fn list_test_sets(&self) -> Result<Vec<TestSetConfig>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        JsonExporter::load(&self.path)
    }

    /// Replaces the entry with the same id in place, or appends it. Other
    /// entries are rewritten exactly as they were read.
    pub fn add_test_set(&self, entry: TestSetConfig) -> Result<UpsertOutcome> {
        let mut entries: Vec<Value> = if self.path.exists() {
            JsonExporter::load(&self.path)?
        } else {
            Vec::new()
        };
        let value = serde_json::to_value(&entry)?;

        let existing = entries
            .iter_mut()
            .find(|e| e.get("id").and_then(Value::as_str) == Some(entry.id.as_str()));

        let outcome = match existing {
            Some(existing) => {
                info!("Updating existing test set: {}", entry.id);
                *existing = value;
                UpsertOutcome::Updated
            }
            None => {
                info!("Adding new test set: {}", entry.id);
                entries.push(value);
                UpsertOutcome::Added
            }
        };

        JsonExporter::save(&entries, &self.path)?;
        info!("Updated {}", self.path.display());

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn entry(id: &str, description: &str) -> TestSetConfig {
        TestSetConfig::new(
            id,
            "Unit",
            description,
            format!("vocabulary-data-{}.json", id),
            format!("science-quiz-data-{}.json", id),
        )
    }

    #[test]
    fn test_generate_id() {
        assert_eq!(generate_id("Biology Chapter 3!"), "biology-chapter-3");
        assert_eq!(generate_id("  -Plants  &  Animals- "), "plants-animals");
        assert_eq!(generate_id("unit_1"), "unit1");
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let updater = ConfigUpdater::new(temp.path().join("test-sets-config.json"));
        assert!(updater.list_test_sets().unwrap().is_empty());
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let temp = TempDir::new().unwrap();
        let updater = ConfigUpdater::new(temp.path().join("public/test-sets-config.json"));

        assert_eq!(updater.add_test_set(entry("a", "first")).unwrap(), UpsertOutcome::Added);
        assert_eq!(updater.add_test_set(entry("b", "second")).unwrap(), UpsertOutcome::Added);
        assert_eq!(
            updater.add_test_set(entry("a", "again")).unwrap(),
            UpsertOutcome::Updated
        );

        let entries = updater.list_test_sets().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "a");
        assert_eq!(entries[0].description, "again");
        assert_eq!(entries[1].id, "b");
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test-sets-config.json");
        fs::write(&path, "not json").unwrap();

        let updater = ConfigUpdater::new(&path);
        assert!(updater.add_test_set(entry("a", "first")).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn test_upsert_keeps_other_entries_intact() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test-sets-config.json");
        fs::write(
            &path,
            r#"[
  {"id": "unit-1", "name": "Unit 1", "description": "d", "vocabularyFile": "v.json",
   "scienceQuizFile": "s.json", "definitionQuizFile": "d.json", "readingFile": "r.json"},
  {"id": "handmade", "name": "Handmade"}
]"#,
        )
        .unwrap();

        let updater = ConfigUpdater::new(&path);
        assert_eq!(
            updater.add_test_set(entry("unit-2", "new")).unwrap(),
            UpsertOutcome::Added
        );

        let raw: Vec<Value> = JsonExporter::load(&path).unwrap();
        assert_eq!(raw.len(), 3);
        assert_eq!(raw[0]["definitionQuizFile"], serde_json::json!("d.json"));
        assert_eq!(raw[0]["readingFile"], serde_json::json!("r.json"));
        assert_eq!(raw[1], serde_json::json!({"id": "handmade", "name": "Handmade"}));
        assert_eq!(raw[2]["id"], serde_json::json!("unit-2"));

        let listed = updater.list_test_sets().unwrap();
        assert_eq!(listed[1].description, "");
        assert_eq!(listed[2].description, "new");
    }

    #[test]
    fn test_entry_without_description_does_not_block_upsert() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test-sets-config.json");
        fs::write(
            &path,
            r#"[{"id":"unit-1","name":"Unit 1","vocabularyFile":"v.json","scienceQuizFile":"s.json"}]"#,
        )
        .unwrap();

        let updater = ConfigUpdater::new(&path);
        assert_eq!(
            updater.add_test_set(entry("unit-1", "regenerated")).unwrap(),
            UpsertOutcome::Updated
        );

        let listed = updater.list_test_sets().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].description, "regenerated");
    }
}
