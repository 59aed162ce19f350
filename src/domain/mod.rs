//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the measured `Composition` and the candidate `Catalog` (inputs)
//! - accepted `MixtureRecord`s and the `SearchSummary` (outputs)
//! - run configuration (`RunConfig`, `Limits`, `ReportStyle`)

pub mod types;

pub use types::*;
