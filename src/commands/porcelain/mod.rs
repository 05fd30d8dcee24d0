//! Porcelain commands
//!
//! The commands used while teaching: comparing code against the sample, browsing
//! and comparing saved submissions, and writing new submission documents.
//!
//! ## Commands
//!
//! - `diff`: compare two source files line by line
//! - `view`: list the submissions found in export/submit documents
//! - `compare`: diff two submissions of one step
//! - `submit`: write a submit document for one step
//! - `export`: write the latest submission of every step to one document

pub mod compare;
pub mod diff;
pub mod export;
pub mod submit;
pub mod view;
