//! Input/output helpers.
//!
//! - `.ea` ingest + validation (`ingest`)
//! - per-member CSV export (`export`)
//! - results JSON write (`results`)

pub mod export;
pub mod ingest;
pub mod results;

pub use export::*;
pub use ingest::*;
pub use results::*;
