use crate::areas::workbench::Workbench;
use crate::artifacts::codec::manifest::Manifest;
use crate::artifacts::diff::renderer::DiffView;
use crate::artifacts::submission::compare::pick_texts;
use crate::artifacts::submission::record::{SourceKind, SubmissionRecord};
use crate::artifacts::submission::record_set::{RecordSet, default_pair};
use crate::artifacts::submission::step_key::StepKey;
use colored::Colorize;
use derive_new::new;
use std::path::PathBuf;

/// Which two records of a step to compare. Indices are 1-based, as printed by
/// `view`; unset indices default to oldest against newest.
#[derive(Debug, Clone, Default, new)]
pub struct ComparePicks<'c> {
    pub kind: SourceKind,
    pub file: Option<&'c str>,
    pub old: Option<usize>,
    pub new: Option<usize>,
}

impl Workbench {
    pub fn compare(
        &self,
        paths: &[PathBuf],
        step: &str,
        picks: &ComparePicks,
        manifest: &Manifest,
    ) -> anyhow::Result<()> {
        let step = StepKey::parse(step).ok_or_else(|| anyhow::anyhow!("invalid step: {step}"))?;
        let record_set = RecordSet::load(paths)?;
        let history = record_set.history(&step);

        let (default_old, default_new) = default_pair(history.len())
            .ok_or_else(|| anyhow::anyhow!("no submissions found for {step}"))?;
        let old = pick(&history, picks.old, default_old, &step)?;
        let new = pick(&history, picks.new, default_new, &step)?;

        writeln!(
            self.writer(),
            "{}",
            format!(
                "{step} / {} / old: {} -> new: {}",
                picks.kind.label(),
                old.label(),
                new.label()
            )
            .bold()
        )?;

        let (before, after) =
            pick_texts(&old.sources, &new.sources, picks.kind, picks.file, manifest)?;
        let outcome = self.line_diff().compare(&before, &after);
        self.print_view(&DiffView::from_outcome(&outcome))?;

        Ok(())
    }
}

fn pick<'r>(
    history: &[&'r SubmissionRecord],
    index: Option<usize>,
    default: usize,
    step: &StepKey,
) -> anyhow::Result<&'r SubmissionRecord> {
    let position = match index {
        Some(index) => index.checked_sub(1),
        None => Some(default),
    };

    position
        .and_then(|position| history.get(position).copied())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no record #{} for {step} ({} available)",
                index.unwrap_or(default + 1),
                history.len()
            )
        })
}
