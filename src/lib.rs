//! `anacal` library crate.
//!
//! The binary (`anacal`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the search can feed other front-ends through `fit::ResultSink`

pub mod app;
pub mod chem;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod logging;
pub mod math;
pub mod report;
