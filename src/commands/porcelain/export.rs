use crate::areas::workbench::Workbench;
use crate::artifacts::submission::document::{DocumentKind, ExportDocument, document_filename};
use crate::artifacts::submission::record_set::RecordSet;
use crate::commands::porcelain::submit::write_document;
use chrono::Utc;
use std::path::{Path, PathBuf};

impl Workbench {
    /// Gathers the newest record of every step into one export document.
    pub fn export(&self, paths: &[PathBuf], name: &str, out: &Path) -> anyhow::Result<()> {
        let record_set = RecordSet::load(paths)?;
        let now = Utc::now();
        let document = ExportDocument::new(record_set.latest(), now);

        if document.is_empty() {
            anyhow::bail!("no submissions found");
        }
        log::info!("exporting {} steps", document.len());

        let path = out.join(document_filename(name, DocumentKind::Export, now.date_naive()));
        write_document(&path, &document.to_json()?)?;

        writeln!(self.writer(), "wrote {}", path.display())?;

        Ok(())
    }
}
