//! Human readable labels for extension keys.
//!
//! Labels are read from a JSON object mapping bare, lowercase extensions to
//! a display name:
//!
//! ```json
//! { "rs": "Rust", "ts": "TypeScript" }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[cfg(test)]
mod tests;

/// File name looked up in the working directory when no labels file is given.
pub const DEFAULT_LABELS_FILE: &str = "labels.json";

/// Extension to label lookup table.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Labels {
    entries: BTreeMap<String, String>,
}

impl Labels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads labels from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON object of
    /// strings.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read labels file {}", path.display()))?;
        let entries: BTreeMap<String, String> = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid labels file {}", path.display()))?;

        Ok(entries.into_iter().collect())
    }

    /// Loads `labels.json` from `dir` if it exists, otherwise returns an
    /// empty table.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(DEFAULT_LABELS_FILE);
        if !path.is_file() {
            return Ok(Self::new());
        }
        Self::load(&path)
    }

    pub fn insert(&mut self, extension: &str, label: impl Into<String>) {
        self.entries.insert(normalize(extension), label.into());
    }

    /// Looks up the label for an extension key such as `".RS"` or `"rs"`.
    ///
    /// The empty key never has a label.
    pub fn label_for(&self, extension: &str) -> Option<&str> {
        if extension.is_empty() {
            return None;
        }
        self.entries.get(&normalize(extension)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Labels {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut labels = Self::new();
        for (extension, label) in iter {
            labels.insert(&extension, label);
        }
        labels
    }
}

fn normalize(extension: &str) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}
