//! Data structures and algorithms
//!
//! This module contains everything that does not depend on where input comes from
//! or where output goes:
//!
//! - `codec`: splitting combined multi-file sources and assembling them back
//! - `core`: shared output plumbing (pager wrapper)
//! - `diff`: line diffing (Myers' diff) and diff rendering
//! - `submission`: exported/submitted learner work and its JSON documents

pub mod codec;
pub mod core;
pub mod diff;
pub mod submission;
