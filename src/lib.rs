//! Line diffs and multi-file source bundles for the step-by-step lessons
//!
//! - `artifacts`: diff engine, renderer, multi-file codec and submission records
//! - `areas`: stateful holders (the command workbench, per-file editing sessions)
//! - `commands`: CLI operations built on top of both

pub mod areas;
pub mod artifacts;
pub mod commands;
