//! # Datacheck Loader
//!
//! File-loading boundary for the datacheck validation engine. This crate
//! turns external documents into the in-memory types of `datacheck_core`:
//!
//! - the requirements catalog, read once at startup from a tabular CSV
//!   document with `Attribute Field Name` and `Response Type` columns
//! - delivered data files, read per file as CSV (header row + records) or
//!   JSON (array of flat key-value records), with format selection by file
//!   extension
//!
//! Loading preserves structural anomalies on purpose: a duplicated CSV header
//! stays duplicated in [`datacheck_core::Dataset::columns`], because
//! duplicate detection is itself a validation target.
//!
//! An unrecognized extension is a recoverable skip condition
//! ([`load_file`] returns `Ok(None)`), not an error; a malformed or
//! unreadable file is a [`LoaderError`] the engine handles per file.

mod catalog;
mod dataset;

pub use catalog::*;
pub use dataset::*;
