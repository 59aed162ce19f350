//! Shared run pipeline used by the CLI front-end and by tests.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! read input -> search (streaming to a sink) -> optional exports
//!
//! The caller decides where accepted mixtures go (terminal table, memory, both).

use tracing::debug;

use crate::domain::{MixtureRecord, RunConfig, SearchSummary};
use crate::error::AppError;
use crate::fit::{CollectingSink, ResultSink, run_search};
use crate::io::ingest::{IngestedData, load_ea_file};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub records: Vec<MixtureRecord>,
    pub summary: SearchSummary,
}

/// Read and validate the configured input file.
pub fn load_input(config: &RunConfig) -> Result<IngestedData, AppError> {
    load_ea_file(&config.input_path, &config.limits)
}

/// Run the search, streaming records into `sink` while also collecting them.
pub fn run_analysis<S: ResultSink>(
    ingest: &IngestedData,
    config: &RunConfig,
    sink: S,
) -> RunOutput {
    let mut fan_out = (sink, CollectingSink::new());
    let summary = run_search(
        &ingest.composition,
        &ingest.catalog,
        config.tolerance,
        &mut fan_out,
    );
    RunOutput {
        records: fan_out.1.records,
        summary,
    }
}

/// Write the exports requested in `config`.
pub fn write_exports(
    ingest: &IngestedData,
    config: &RunConfig,
    output: &RunOutput,
) -> Result<(), AppError> {
    if let Some(path) = &config.export_json {
        let results = crate::io::results::build_results_file(
            ingest,
            config.tolerance,
            &output.records,
            &output.summary,
        );
        crate::io::results::write_results_json(path, &results)?;
        debug!(path = %path.display(), "results JSON written");
    }
    if let Some(path) = &config.export_csv {
        crate::io::export::write_results_csv(path, &output.records, &ingest.catalog)?;
        debug!(path = %path.display(), "results CSV written");
    }
    Ok(())
}
