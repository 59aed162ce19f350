//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments into a `RunConfig`
//! - reads the `.ea` input
//! - prints the report while the search runs
//! - writes optional exports

use clap::Parser;
use tracing::debug;

use crate::cli::Cli;
use crate::domain::{FractionBasis, Limits, ReportStyle, RunConfig};
use crate::error::{AppError, EXIT_INVALID};
use crate::io::ingest::resolve_input_path;
use crate::report::TableReporter;

pub mod pipeline;

/// Entry point for the `anacal` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    crate::logging::init_tracing();

    let cli = Cli::parse();
    let config = run_config_from_args(&cli)?;
    debug!(?config, "run configuration");

    let ingest = pipeline::load_input(&config)?;

    print!(
        "{}",
        crate::report::format_preamble(&ingest.composition, &ingest.catalog, config.tolerance)
    );
    let reporter = TableReporter::new(&ingest.composition, &ingest.catalog, config.style);
    print!("{}", reporter.header());

    let output = pipeline::run_analysis(&ingest, &config, reporter);
    pipeline::write_exports(&ingest, &config, &output)
}

pub fn run_config_from_args(cli: &Cli) -> Result<RunConfig, AppError> {
    if !cli.max_dev.is_finite() || cli.max_dev < 0.0 {
        return Err(AppError::new(
            EXIT_INVALID,
            format!("Invalid error limit {}: expected a nonnegative percentage.", cli.max_dev),
        ));
    }

    let style = if cli.short {
        ReportStyle::Short(if cli.weight {
            FractionBasis::Mass
        } else {
            FractionBasis::Mole
        })
    } else {
        ReportStyle::Long
    };

    Ok(RunConfig {
        input_path: resolve_input_path(&cli.input),
        tolerance: cli.max_dev / 100.0,
        limits: Limits {
            max_elements: cli.max_elements,
            max_components: cli.max_components,
        },
        style,
        export_json: cli.export_json.clone(),
        export_csv: cli.export_csv.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn builds_config_from_defaults() {
        let config = run_config_from_args(&parse(&["anacal", "debo"])).unwrap();
        assert_eq!(config.input_path, PathBuf::from("debo.ea"));
        assert_eq!(config.tolerance, 0.01);
        assert_eq!(config.limits, Limits::default());
        assert_eq!(config.style, ReportStyle::Long);
    }

    #[test]
    fn short_and_weight_select_style() {
        let config = run_config_from_args(&parse(&["anacal", "-s", "debo", "2"])).unwrap();
        assert_eq!(config.style, ReportStyle::Short(FractionBasis::Mole));
        assert_eq!(config.tolerance, 0.02);

        let config = run_config_from_args(&parse(&["anacal", "-s", "-w", "debo"])).unwrap();
        assert_eq!(config.style, ReportStyle::Short(FractionBasis::Mass));

        // Weight alone has no effect on the long layout.
        let config = run_config_from_args(&parse(&["anacal", "-w", "debo"])).unwrap();
        assert_eq!(config.style, ReportStyle::Long);
    }

    #[test]
    fn rejects_negative_or_non_finite_limit() {
        let err = run_config_from_args(&parse(&["anacal", "debo", "--", "-1"])).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_INVALID);

        let err = run_config_from_args(&parse(&["anacal", "debo", "inf"])).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_INVALID);
    }
}
