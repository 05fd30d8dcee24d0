//! Multi-file source bundles
//!
//! Several logical JavaScript files travel as one text blob, each introduced by a
//! marker comment line:
//!
//! ```text
//! // --- file: main.js ---
//! import { spawn } from "./enemies.js";
//!
//! // --- file: enemies.js ---
//! export function spawn() {}
//! ```
//!
//! - `marker`: recognizing and writing marker lines
//! - `manifest`: the ordered list of expected file names
//! - `file_map`: splitting a blob into files and assembling it back

pub mod file_map;
pub mod manifest;
pub mod marker;

pub const DEFAULT_FILE_NAME: &str = "main.js";
pub const MARKER_LINE_REGEX: &str = r"(?i)^//\s*-{3,}\s*file:\s*(\S+)\s*-{3,}$";

/// The key a file is stored under: its name without a leading `./`.
pub fn normalize_file_name(name: &str) -> &str {
    name.strip_prefix("./").unwrap_or(name)
}
