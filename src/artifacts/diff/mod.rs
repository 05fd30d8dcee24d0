//! Line diffing
//!
//! This module implements the line-level comparison used to show a learner's
//! code against the sample solution:
//!
//! - `line_sequence`: newline normalization and splitting into lines
//! - `diff_algorithm`: Myers' diff producing an edit script
//! - `renderer`: turning an edit script into display rows (text or HTML)

use clap::ValueEnum;
use derive_new::new;

pub mod diff_algorithm;
pub mod line_sequence;
pub mod renderer;

/// Upper bound on `before.len() + after.len()` before a diff is skipped.
pub const DEFAULT_MAX_LINES: usize = 20_000;

/// Upper bound on inserted plus deleted lines before a diff is given up. Keeps
/// the Myers trace near 32 MB whatever the input size.
pub const DEFAULT_MAX_EDITS: usize = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffOptions {
    pub max_lines: usize,
    pub format: OutputFormat,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            format: OutputFormat::default(),
        }
    }
}
