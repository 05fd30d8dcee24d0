use crate::artifacts::submission::step_key::StepKey;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use derive_new::new;
use serde::Serialize;
use serde_json::Value;

const UNKNOWN_TIME: &str = "unknown time";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SourceKind {
    Html,
    Css,
    #[default]
    Js,
}

impl SourceKind {
    pub fn label(self) -> &'static str {
        match self {
            SourceKind::Html => "HTML",
            SourceKind::Css => "CSS",
            SourceKind::Js => "JavaScript",
        }
    }
}

/// The three editable sources of one step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, new)]
pub struct StepSources {
    pub html: String,
    pub css: String,
    pub js: String,
    #[serde(
        rename = "updatedAt",
        serialize_with = "chrono::serde::ts_milliseconds_option::serialize"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl StepSources {
    /// Reads an `{ html, css, js, updatedAt }` object leniently: non-string sources
    /// read as empty, an unusable `updatedAt` as unknown.
    pub fn from_json(value: &Value) -> Option<Self> {
        let item = value.as_object()?;
        let text = |field: &str| {
            item.get(field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Some(Self {
            html: text("html"),
            css: text("css"),
            js: text("js"),
            updated_at: item.get("updatedAt").and_then(parse_updated_at),
        })
    }

    pub fn text(&self, kind: SourceKind) -> &str {
        match kind {
            SourceKind::Html => &self.html,
            SourceKind::Css => &self.css,
            SourceKind::Js => &self.js,
        }
    }
}

/// Epoch milliseconds (as the playground writes them) or an RFC 3339 string.
pub fn parse_updated_at(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|ms| ms as i64))
            .and_then(DateTime::from_timestamp_millis),
        Value::String(text) => DateTime::parse_from_rfc3339(text)
            .map(|when| when.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                text.parse::<i64>()
                    .ok()
                    .and_then(DateTime::from_timestamp_millis)
            }),
        _ => None,
    }
}

pub fn format_when(when: Option<DateTime<Utc>>) -> String {
    when.map(|when| when.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| UNKNOWN_TIME.to_string())
}

/// One step's sources as found in one document.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SubmissionRecord {
    pub step: StepKey,
    pub sources: StepSources,
    pub source_name: String,
}

impl SubmissionRecord {
    pub fn label(&self) -> String {
        format!("{} / {}", format_when(self.sources.updated_at), self.source_name)
    }

    /// Sort key for history ordering; records without a time sort first.
    pub fn timestamp_millis(&self) -> i64 {
        self.sources
            .updated_at
            .map(|when| when.timestamp_millis())
            .unwrap_or(0)
    }
}

/// Extracts every step record from an export or submit document. Anything that is
/// neither shape yields no records.
pub fn extract_records(json: &Value, source_name: &str) -> Vec<SubmissionRecord> {
    let Some(document) = json.as_object() else {
        return Vec::new();
    };

    if let Some(items) = document.get("items").and_then(Value::as_object) {
        return items
            .iter()
            .filter_map(|(key, item)| {
                let record = StepKey::parse(key).zip(StepSources::from_json(item));
                if record.is_none() {
                    log::debug!("{source_name}: skipping item {key:?}");
                }
                record
            })
            .map(|(step, sources)| SubmissionRecord::new(step, sources, source_name.to_string()))
            .collect();
    }

    match (
        document.get("step").and_then(StepKey::from_json),
        document.get("item").and_then(StepSources::from_json),
    ) {
        (Some(step), Some(sources)) => {
            vec![SubmissionRecord::new(step, sources, source_name.to_string())]
        }
        _ => {
            log::debug!("{source_name}: neither an export nor a submit document");
            Vec::new()
        }
    }
}
