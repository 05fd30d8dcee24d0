//! Stateful holders
//!
//! - `workbench`: what every command runs against (output writer, diff options)
//! - `session`: the file-by-file editing state of one multi-file step

pub mod session;
pub mod workbench;
