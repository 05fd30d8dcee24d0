use crate::areas::workbench::Workbench;
use crate::artifacts::submission::document::{DocumentKind, SubmitDocument, document_filename};
use crate::artifacts::submission::record::StepSources;
use crate::artifacts::submission::step_key::StepKey;
use anyhow::Context;
use chrono::Utc;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Source files making up one step. Missing paths submit empty sources.
#[derive(Debug, Clone, Default, new)]
pub struct SourcePaths {
    pub html: Option<PathBuf>,
    pub css: Option<PathBuf>,
    pub js: Option<PathBuf>,
}

impl SourcePaths {
    fn read(&self) -> anyhow::Result<StepSources> {
        Ok(StepSources::new(
            read_optional(self.html.as_deref())?,
            read_optional(self.css.as_deref())?,
            read_optional(self.js.as_deref())?,
            Some(Utc::now()),
        ))
    }
}

impl Workbench {
    pub fn submit(
        &self,
        step: &str,
        sources: &SourcePaths,
        name: &str,
        out: &Path,
    ) -> anyhow::Result<()> {
        let step = StepKey::parse(step).ok_or_else(|| anyhow::anyhow!("invalid step: {step}"))?;
        let now = Utc::now();
        let document = SubmitDocument::new(step, sources.read()?, now);

        let path = out.join(document_filename(name, DocumentKind::Submit, now.date_naive()));
        write_document(&path, &document.to_json()?)?;

        writeln!(self.writer(), "wrote {}", path.display())?;

        Ok(())
    }
}

pub(crate) fn write_document(path: &Path, json: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

fn read_optional(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => Ok(String::new()),
    }
}
