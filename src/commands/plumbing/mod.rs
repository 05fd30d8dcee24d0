//! Plumbing commands
//!
//! Direct access to the combined-blob codec, mostly useful for preparing lesson
//! material and for scripting:
//!
//! - `split`: break a combined blob into its files
//! - `assemble`: build a combined blob from a directory of files

pub mod assemble;
pub mod split;
