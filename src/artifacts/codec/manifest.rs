use crate::artifacts::codec::{DEFAULT_FILE_NAME, normalize_file_name};
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Ordered list of the JavaScript files a step is made of.
///
/// Names are trimmed, stripped of a leading `./` and blank names dropped on
/// construction. The manifest, never map iteration order, decides the order files
/// are assembled in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    names: Vec<String>,
}

// shape of a step's manifest.json
#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    js: serde_json::Value,
}

impl Manifest {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| normalize_file_name(name.as_ref().trim()).to_string())
            .filter(|name| !name.is_empty())
            .collect();

        Self { names }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a comma separated list such as `main.js, enemies.js`.
    pub fn parse_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// Reads the `js` array of a step's `manifest.json`. A missing or non-array
    /// `js` field gives an empty manifest; non-string entries are ignored.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let file: ManifestFile =
            serde_json::from_str(text).context("manifest is not valid JSON")?;

        let names = file
            .js
            .as_array()
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| entry.as_str())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        Ok(Self::new(names))
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid manifest {}", path.display()))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// `main.js` when listed, otherwise the first entry, otherwise `main.js`.
    pub fn default_file_name(&self) -> &str {
        if self.contains(DEFAULT_FILE_NAME) {
            DEFAULT_FILE_NAME
        } else {
            self.names
                .first()
                .map(String::as_str)
                .unwrap_or(DEFAULT_FILE_NAME)
        }
    }

    /// Names in assembly order, falling back to `[fallback]` for an empty manifest.
    pub fn emission_order<'m>(&'m self, fallback: &'m str) -> Vec<&'m str> {
        if self.names.is_empty() {
            vec![fallback]
        } else {
            self.names.iter().map(String::as_str).collect()
        }
    }
}
