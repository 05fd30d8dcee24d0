use crate::artifacts::submission::record::{SubmissionRecord, extract_records};
use crate::artifacts::submission::step_key::StepKey;
use anyhow::Context;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Records gathered from any number of export/submit documents.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    records: Vec<SubmissionRecord>,
}

impl RecordSet {
    pub fn new(records: Vec<SubmissionRecord>) -> Self {
        Self { records }
    }

    /// Loads every `.json` file among `paths`, descending into directories.
    /// Files that cannot be read or parsed are skipped with a warning.
    pub fn load(paths: &[PathBuf]) -> anyhow::Result<Self> {
        let mut records = Vec::new();

        for file in json_files(paths)? {
            let text = match std::fs::read_to_string(&file) {
                Ok(text) => text,
                Err(err) => {
                    log::warn!("skipping {}: {err}", file.display());
                    continue;
                }
            };
            let json = match serde_json::from_str::<serde_json::Value>(&text) {
                Ok(json) => json,
                Err(err) => {
                    log::warn!("skipping {}: invalid JSON: {err}", file.display());
                    continue;
                }
            };

            let source_name = file
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| file.display().to_string());
            records.extend(extract_records(&json, &source_name));
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[SubmissionRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records of one step, oldest first; ties are broken by label.
    pub fn history(&self, step: &StepKey) -> Vec<&SubmissionRecord> {
        let mut history = self
            .records
            .iter()
            .filter(|record| &record.step == step)
            .collect::<Vec<_>>();

        history.sort_by(|a, b| {
            a.timestamp_millis()
                .cmp(&b.timestamp_millis())
                .then_with(|| a.label().cmp(&b.label()))
        });
        history
    }

    /// Every step with its history, in step order.
    pub fn steps(&self) -> Vec<(StepKey, Vec<&SubmissionRecord>)> {
        self.records
            .iter()
            .map(|record| record.step.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|step| {
                let history = self.history(&step);
                (step, history)
            })
            .collect()
    }

    /// The most recent record of every step.
    pub fn latest(&self) -> Vec<&SubmissionRecord> {
        self.steps()
            .into_iter()
            .filter_map(|(_, history)| history.last().copied())
            .collect()
    }
}

/// Pair of history indices compared by default: oldest against newest, or the
/// only record against itself.
pub fn default_pair(history_len: usize) -> Option<(usize, usize)> {
    match history_len {
        0 => None,
        1 => Some((0, 0)),
        n => Some((0, n - 1)),
    }
}

fn json_files(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry =
                    entry.with_context(|| format!("failed to walk {}", path.display()))?;
                if entry.file_type().is_file() && is_json(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            anyhow::bail!("{} does not exist", path.display());
        }
    }

    Ok(files)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"))
}
