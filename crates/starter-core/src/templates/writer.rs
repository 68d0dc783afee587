//! Writing template files and patching JSON manifests under a project root

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::PathBuf;
use tokio::fs;

/// Materializes literal file content beneath one project root
#[derive(Debug, Clone)]
pub struct TemplateWriter {
    root: PathBuf,
}

impl TemplateWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute path of `relative_path` under the root
    pub fn path(&self, relative_path: &str) -> PathBuf {
        self.root.join(relative_path)
    }

    /// Create `relative_path` (and ancestors) as a directory
    pub async fn ensure_dir(&self, relative_path: &str) -> Result<()> {
        let dir = self.path(relative_path);
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create directory: {}", dir.display()))
    }

    /// Write `content` to `relative_path`, replacing whatever was there
    pub async fn write(&self, relative_path: &str, content: &str) -> Result<PathBuf> {
        let target_path = self.path(relative_path);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&target_path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

        Ok(target_path)
    }

    /// Whether `relative_path` exists under the root
    pub async fn exists(&self, relative_path: &str) -> Result<bool> {
        let path = self.path(relative_path);
        fs::try_exists(&path)
            .await
            .with_context(|| format!("Failed to check {}", path.display()))
    }

    /// Delete a file if present, returning whether anything was removed
    pub async fn remove_if_exists(&self, relative_path: &str) -> Result<bool> {
        let target_path = self.path(relative_path);
        if !self.exists(relative_path).await? {
            return Ok(false);
        }
        fs::remove_file(&target_path)
            .await
            .with_context(|| format!("Failed to remove file: {}", target_path.display()))?;
        Ok(true)
    }

    /// Read and parse a JSON file under the root
    pub async fn read_json(&self, relative_path: &str) -> Result<Value> {
        let path = self.path(relative_path);
        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Serialize `value` with two-space indentation and a trailing newline
    pub async fn write_json(&self, relative_path: &str, value: &Value) -> Result<()> {
        let mut content = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize {}", relative_path))?;
        content.push('\n');
        self.write(relative_path, &content).await?;
        Ok(())
    }

    /// Deep-merge `patch` into the JSON file at `relative_path` and rewrite it
    pub async fn patch_json(&self, relative_path: &str, patch: &Value) -> Result<Value> {
        let mut json = self.read_json(relative_path).await?;
        deep_merge(&mut json, patch);
        self.write_json(relative_path, &json).await?;
        Ok(json)
    }
}

/// Recursively merge `patch` into `target`
///
/// Objects merge key by key. Any other patch value, arrays included, replaces
/// the target value outright. A non-object target under an object patch is
/// replaced by an empty object first.
pub fn deep_merge(target: &mut Value, patch: &Value) {
    match patch {
        Value::Object(patch_map) => {
            if !target.is_object() {
                *target = Value::Object(Map::new());
            }
            if let Value::Object(target_map) = target {
                for (key, value) in patch_map {
                    let slot = target_map.entry(key.clone()).or_insert(Value::Null);
                    deep_merge(slot, value);
                }
            }
        }
        other => *target = other.clone(),
    }
}
