//! # Datacheck Core
//!
//! Core data structures and types for the datacheck validation engine.
//!
//! This crate provides the fundamental building blocks for validating delivered
//! data files against a field-level requirements catalog:
//!
//! - **RequirementsCatalog**: the expected field names and their declared
//!   response types, loaded once per run and read-only thereafter
//! - **Dataset**: a literal, duplicate-preserving in-memory model of one
//!   file's columns and rows
//! - **Rule**: a pure check producing a pass/fail outcome plus diagnostic
//!   detail for one file
//! - **ValidationReport**: the ordered collection of all outcomes for a run
//!
//! ## Example
//!
//! ```rust
//! use datacheck_core::{FieldRequirement, RequirementsCatalog};
//!
//! let catalog = RequirementsCatalog::from_requirements(vec![
//!     FieldRequirement {
//!         name: "Active".to_string(),
//!         response_type: "Yes/No".to_string(),
//!     },
//!     FieldRequirement {
//!         name: "Comment".to_string(),
//!         response_type: "Free Text".to_string(),
//!     },
//! ]);
//!
//! assert_eq!(catalog.fields_matching("yes/no"), vec!["Active"]);
//! ```

pub mod catalog;
pub mod dataset;
pub mod report;
pub mod rule;

pub use catalog::*;
pub use dataset::*;
pub use report::*;
pub use rule::*;
