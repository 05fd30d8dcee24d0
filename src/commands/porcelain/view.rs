use crate::areas::workbench::Workbench;
use crate::artifacts::submission::record_set::RecordSet;
use colored::Colorize;
use std::path::PathBuf;

impl Workbench {
    pub fn view(&self, paths: &[PathBuf]) -> anyhow::Result<()> {
        let record_set = RecordSet::load(paths)?;

        if record_set.is_empty() {
            writeln!(self.writer(), "no submissions found")?;
            return Ok(());
        }

        for (step, history) in record_set.steps() {
            writeln!(self.writer(), "{}", step.to_string().bold())?;
            for (index, record) in history.iter().enumerate() {
                writeln!(self.writer(), "  #{} {}", index + 1, record.label())?;
            }
        }

        Ok(())
    }
}
