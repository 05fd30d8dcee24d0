use crate::artifacts::submission::DOCUMENT_VERSION;
use crate::artifacts::submission::record::{StepSources, SubmissionRecord};
use crate::artifacts::submission::step_key::StepKey;
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

const MAX_BASE_LEN: usize = 80;

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\\/:*?"<>|]"#).expect("filename regex is a valid constant pattern")
});
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex is a valid constant pattern"));
static UNDERSCORE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+").expect("underscore regex is a valid constant pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Export,
    Submit,
}

impl DocumentKind {
    fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Export => "export",
            DocumentKind::Submit => "submit",
        }
    }
}

/// A single step handed in by a learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitDocument {
    version: u32,
    #[serde(serialize_with = "chrono::serde::ts_milliseconds::serialize")]
    submitted_at: DateTime<Utc>,
    step: StepKey,
    item: StepSources,
}

impl SubmitDocument {
    pub fn new(step: StepKey, item: StepSources, submitted_at: DateTime<Utc>) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            submitted_at,
            step,
            item,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Every step a learner has worked on, one entry per step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    version: u32,
    #[serde(serialize_with = "chrono::serde::ts_milliseconds::serialize")]
    exported_at: DateTime<Utc>,
    items: BTreeMap<String, StepSources>,
}

impl ExportDocument {
    pub fn new<'r>(
        records: impl IntoIterator<Item = &'r SubmissionRecord>,
        exported_at: DateTime<Utc>,
    ) -> Self {
        let items = records
            .into_iter()
            .map(|record| (record.step.to_string(), record.sources.clone()))
            .collect();

        Self {
            version: DOCUMENT_VERSION,
            exported_at,
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Makes a learner-supplied name safe to use as a file name prefix on any
/// platform.
pub fn sanitize_filename_base(name: &str) -> String {
    let name = UNSAFE_FILENAME_CHARS.replace_all(name.trim(), "_");
    let name = WHITESPACE_RUN.replace_all(&name, "_");
    let name = UNDERSCORE_RUN.replace_all(&name, "_");

    name.trim_matches('_').chars().take(MAX_BASE_LEN).collect()
}

/// `<base>-shooting-learning-<kind>-<YYYYMMDD>.json`, without the base prefix
/// when the sanitized base is empty.
pub fn document_filename(base: &str, kind: DocumentKind, date: NaiveDate) -> String {
    let base = sanitize_filename_base(base);
    let prefix = if base.is_empty() {
        String::new()
    } else {
        format!("{base}-")
    };

    format!(
        "{prefix}shooting-learning-{}-{}.json",
        kind.as_str(),
        date.format("%Y%m%d")
    )
}
