//! Command-line parsing for the elemental-analysis mixture calculator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! fitting code. `app::run_config_from_args` turns `Cli` into a `RunConfig`.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{DEFAULT_MAX_COMPONENTS, DEFAULT_MAX_DEV_PERCENT, DEFAULT_MAX_ELEMENTS};

const LONG_ABOUT: &str = "\
Explains an elemental analysis as a mixture of candidate compounds.

Every combination of candidates (up to one more than the number of analyzed
elements) is fitted by least squares with mass fractions summing to 1.
Mixtures with nonnegative fractions whose RMS deviation is within MAX_DEV
percent are reported, in a fixed order.

INPUT FORMAT (FILE, `.ea` appended when missing):

  line 1    title
  line 2    analyzed elements with mass percent, e.g. C54.53 H6.31 N8.10 S14.48
  line 3+   one bruto formula per line, e.g. C15 H20 N2 O3 S  # optional name

Whitespace between element terms is optional, counts may be fractional and a
missing count means 1. Blank lines and lines holding only a comment are
skipped. Elements in a formula that were not analyzed only add weight.

Example:

  6718 DEBO 145
  C54.53 H6.31 N8.10 S14.48
  C15 H20 N2 O3 S
  C11 H16 N2 O S
  C4 H12 N2 S2
  C2 H4 O S
  S       #sulphur
  H Cl    #hydrochloric acid
  H2 O    #water

Set ANACAL_LOG (e.g. ANACAL_LOG=anacal=debug) for diagnostics on stderr.";

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "anacal",
    version,
    about = "Elemental analysis mixture calculator",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    /// Input file (`.ea` is appended if the name lacks it).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Error limit in percent (RMS deviation over analyzed elements).
    #[arg(value_name = "MAX_DEV", default_value_t = DEFAULT_MAX_DEV_PERCENT)]
    pub max_dev: f64,

    /// Short report: one line per mixture.
    #[arg(short = 's', long)]
    pub short: bool,

    /// With --short, show weight fractions instead of mole fractions.
    #[arg(short = 'w', long)]
    pub weight: bool,

    /// Maximum number of analyzed elements (and elements per formula).
    #[arg(long, default_value_t = DEFAULT_MAX_ELEMENTS)]
    pub max_elements: usize,

    /// Maximum number of candidate formulae.
    #[arg(long, default_value_t = DEFAULT_MAX_COMPONENTS)]
    pub max_components: usize,

    /// Export accepted mixtures (with inputs and summary) to JSON.
    #[arg(long = "export-json", value_name = "PATH")]
    pub export_json: Option<PathBuf>,

    /// Export one CSV row per mixture member.
    #[arg(long = "export-csv", value_name = "PATH")]
    pub export_csv: Option<PathBuf>,
}
