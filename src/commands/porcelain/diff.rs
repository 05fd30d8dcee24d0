use crate::areas::session::EditingSession;
use crate::areas::workbench::Workbench;
use crate::artifacts::codec::file_map::FileMap;
use crate::artifacts::codec::manifest::Manifest;
use crate::artifacts::codec::normalize_file_name;
use crate::artifacts::diff::OutputFormat;
use crate::artifacts::diff::renderer::DiffView;
use anyhow::Context;
use colored::Colorize;
use std::path::Path;

impl Workbench {
    /// Compares two source files. With a manifest or a file name both files are
    /// read as combined blobs and only that file (or the default file) is compared.
    pub fn diff(
        &self,
        before: &Path,
        after: &Path,
        manifest: &Manifest,
        file: Option<&str>,
    ) -> anyhow::Result<()> {
        let before_text = read_source(before)?;
        let after_text = read_source(after)?;

        let per_file = !manifest.is_empty() || file.is_some();
        let (before_text, after_text, suffix) = if per_file {
            let before_session = EditingSession::from_combined(&before_text, manifest.clone());
            let after_session = EditingSession::from_combined(&after_text, manifest.clone());
            let file = file.unwrap_or_else(|| before_session.active_file()).to_string();
            if before_session.content(&file).is_none() && after_session.content(&file).is_none() {
                anyhow::bail!(
                    "no file named {file}; available: {}",
                    FileMap::joined_names(
                        &[before_session.file_map(), after_session.file_map()],
                        before_session.manifest()
                    )
                );
            }

            (
                before_session.content(&file).unwrap_or_default().to_string(),
                after_session.content(&file).unwrap_or_default().to_string(),
                format!(" ({})", normalize_file_name(&file)),
            )
        } else {
            (before_text, after_text, String::new())
        };

        let outcome = self.line_diff().compare(&before_text, &after_text);
        let view = DiffView::from_outcome(&outcome);

        writeln!(
            self.writer(),
            "{}",
            format!("--- a/{}{suffix}", before.display()).bold()
        )?;
        writeln!(
            self.writer(),
            "{}",
            format!("+++ b/{}{suffix}", after.display()).bold()
        )?;
        self.print_view(&view)?;

        Ok(())
    }

    pub(crate) fn print_view(&self, view: &DiffView) -> anyhow::Result<()> {
        match self.options().format {
            OutputFormat::Html => writeln!(self.writer(), "{}", view.to_html())?,
            OutputFormat::Text => {
                for row in view.rows() {
                    writeln!(self.writer(), "{}", row.to_colored())?;
                }
            }
        }

        Ok(())
    }
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
