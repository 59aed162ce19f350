//! Write search results as JSON.
//!
//! The results file is the portable representation of a run:
//! - input composition and candidate list
//! - every accepted mixture
//! - the search summary
//!
//! The schema is defined by `domain::ResultsFile`.

use std::fs::File;
use std::path::Path;

use chrono::Local;

use crate::domain::{MixtureRecord, ResultsFile, SearchSummary};
use crate::error::{AppError, EXIT_EXPORT};
use crate::io::ingest::IngestedData;

/// Assemble the JSON document for a finished run.
pub fn build_results_file(
    ingest: &IngestedData,
    tolerance: f64,
    records: &[MixtureRecord],
    summary: &SearchSummary,
) -> ResultsFile {
    ResultsFile {
        tool: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        generated: Local::now(),
        title: ingest.composition.title.clone(),
        tolerance,
        elements: ingest.composition.elements.clone(),
        candidates: ingest.catalog.components.clone(),
        mixtures: records.to_vec(),
        summary: *summary,
    }
}

/// Write a results JSON file.
pub fn write_results_json(path: &Path, results: &ResultsFile) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            EXIT_EXPORT,
            format!("Failed to create results JSON '{}': {e}", path.display()),
        )
    })?;

    serde_json::to_writer_pretty(file, results)
        .map_err(|e| AppError::new(EXIT_EXPORT, format!("Failed to write results JSON: {e}")))?;

    Ok(())
}
