//! Command implementations
//!
//! Every command is an `impl Workbench` block writing to the workbench's writer.
//! They fall into two groups:
//!
//! - `plumbing`: working with combined blobs directly (split, assemble)
//! - `porcelain`: what an instructor or learner runs day to day (diff, view, compare,
//!   submit, export)

pub mod plumbing;
pub mod porcelain;
