//! Exported and submitted learner work
//!
//! The playground saves a learner's HTML/CSS/JS per step and hands it out as JSON
//! in two shapes:
//!
//! - export: `{ version, exportedAt, items: { <step>: { html, css, js, updatedAt } } }`
//! - submit: `{ version, submittedAt, step, item: { html, css, js, updatedAt } }`
//!
//! - `step_key`: normalizing step identifiers such as `3`, `"step3"` or `"Step 03"`
//! - `record`: reading documents into per-step records
//! - `record_set`: grouping and ordering records loaded from many files
//! - `document`: writing submit/export documents and naming their files
//! - `compare`: choosing which texts of two records to diff

pub mod compare;
pub mod document;
pub mod record;
pub mod record_set;
pub mod step_key;

pub const DOCUMENT_VERSION: u32 = 1;
pub const STEP_KEY_REGEX: &str = r"^step([0-9]+)$";
