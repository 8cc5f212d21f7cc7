//! # Datacheck Validator
//!
//! Validation rules and orchestration for delivered data files. This crate
//! provides the two checks applied to every file:
//!
//! - Structural duplicate-column detection ([`DuplicateColumnRule`])
//! - Categorical "Yes/No" field validation driven by the requirements
//!   catalog ([`TypedFieldRule`])
//!
//! plus the [`ValidationEngine`] that loads each file, runs every rule, and
//! collects one [`datacheck_core::RuleOutcome`] per (file, rule) pair into a
//! [`datacheck_core::ValidationReport`].
//!
//! ## Example
//!
//! ```rust
//! use datacheck_core::{Dataset, RequirementsCatalog};
//! use datacheck_validator::DuplicateColumnRule;
//!
//! let dataset = Dataset::new(
//!     vec!["A".into(), "B".into(), "A".into()],
//!     Vec::new(),
//! );
//!
//! let result = DuplicateColumnRule::new().check(&dataset);
//! assert!(result.has_duplicates);
//! assert_eq!(result.occurrences, vec!["A", "A"]);
//! ```

mod duplicates;
mod engine;
mod typed;

pub use duplicates::*;
pub use engine::*;
pub use typed::*;
