//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during the combination search
//! - exported to JSON/CSV
//! - asserted on directly in tests

use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Default maximum number of analyzed elements (and elements per formula).
pub const DEFAULT_MAX_ELEMENTS: usize = 20;

/// Default maximum number of candidate components.
pub const DEFAULT_MAX_COMPONENTS: usize = 26;

/// Default error limit, in percent.
pub const DEFAULT_MAX_DEV_PERCENT: f64 = 1.0;

/// Capacity limits enforced by the input reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    pub max_elements: usize,
    pub max_components: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_elements: DEFAULT_MAX_ELEMENTS,
            max_components: DEFAULT_MAX_COMPONENTS,
        }
    }
}

/// One analyzed element and its measured mass fraction (0..=1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedElement {
    pub symbol: String,
    pub measured: f64,
}

/// The unknown mixture to explain.
///
/// Measured fractions need not sum to 1: elements that were not determined
/// are simply absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub title: String,
    pub elements: Vec<AnalyzedElement>,
}

impl Composition {
    /// Number of analyzed elements (N).
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Measured mass fraction of analyzed element `c`.
    pub fn measured(&self, c: usize) -> f64 {
        self.elements[c].measured
    }

    /// Index of `symbol` among the analyzed elements.
    pub fn position(&self, symbol: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.symbol == symbol)
    }
}

/// One `symbol count` term of a bruto formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaTerm {
    pub symbol: String,
    pub count: f64,
}

/// A bruto formula in the order it was written.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Formula {
    pub terms: Vec<FormulaTerm>,
}

impl Formula {
    /// Compact rendering, e.g. `C15H20N2O3S`.
    pub fn compact(&self) -> String {
        self.terms
            .iter()
            .map(|t| format!("{}{}", t.symbol, fmt_count(t.count)))
            .collect()
    }

    /// Space-separated rendering, e.g. `C15 H20 N2 O3 S`.
    pub fn spaced(&self) -> String {
        let parts: Vec<String> = self
            .terms
            .iter()
            .map(|t| format!("{}{}", t.symbol, fmt_count(t.count)))
            .collect();
        parts.join(" ")
    }
}

/// Counts of one are implied; integral counts print without decimals.
fn fmt_count(count: f64) -> String {
    let rounded = count.round();
    if (count - rounded).abs() < 1e-9 {
        if rounded as i64 == 1 {
            String::new()
        } else {
            format!("{}", rounded as i64)
        }
    } else {
        format!("{count}")
    }
}

/// A candidate component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// 1-based catalog number, as shown in reports.
    pub id: usize,
    pub formula: Formula,
    pub title: Option<String>,
    pub molecular_weight: f64,
    /// Mass fraction contributed to each analyzed element, aligned to
    /// `Composition::elements`.
    pub elfrac: Vec<f64>,
}

/// Ordered candidate list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub components: Vec<Component>,
}

impl Catalog {
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    /// Number of candidates (M).
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, index: usize) -> &Component {
        &self.components[index]
    }

    /// Elemental mass fraction of candidate `index` for analyzed element `c`.
    pub fn elfrac(&self, index: usize, c: usize) -> f64 {
        self.components[index].elfrac[c]
    }
}

/// Why a combination produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Zero row in the normal equations, or singular LU factorization.
    Degenerate,
    /// At least one negative mass fraction.
    Infeasible,
    /// Misfit above the configured tolerance.
    OverTolerance,
}

/// One member of an accepted mixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberShare {
    /// 0-based catalog index.
    pub index: usize,
    /// 1-based catalog number.
    pub id: usize,
    pub mass_fraction: f64,
    pub mole_fraction: f64,
    pub molecular_weight: f64,
}

/// An accepted combination, as emitted to a result sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixtureRecord {
    /// 1-based, in enumeration order.
    pub sequence: usize,
    pub members: Vec<MemberShare>,
    /// Calculated mass fraction per analyzed element.
    pub calculated: Vec<f64>,
    /// RMS deviation over analyzed elements, as a fraction.
    pub misfit: f64,
}

impl MixtureRecord {
    pub fn member_indices(&self) -> Vec<usize> {
        self.members.iter().map(|m| m.index).collect()
    }
}

/// Counters reported with the completion signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchSummary {
    /// Largest combination size searched (K).
    pub max_size: usize,
    pub enumerated: usize,
    pub accepted: usize,
    pub degenerate: usize,
    pub infeasible: usize,
    pub over_tolerance: usize,
}

impl SearchSummary {
    pub fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::Degenerate => self.degenerate += 1,
            SkipReason::Infeasible => self.infeasible += 1,
            SkipReason::OverTolerance => self.over_tolerance += 1,
        }
    }
}

/// Which fraction the short report shows per component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FractionBasis {
    Mole,
    Mass,
}

impl FractionBasis {
    pub fn label(self) -> &'static str {
        match self {
            FractionBasis::Mole => "mole",
            FractionBasis::Mass => "wght",
        }
    }
}

/// Terminal report layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    /// One row per element / member.
    Long,
    /// One line per accepted mixture.
    Short(FractionBasis),
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_path: PathBuf,
    /// Error limit as a fraction (`MAX_DEV / 100`).
    pub tolerance: f64,
    pub limits: Limits,
    pub style: ReportStyle,
    pub export_json: Option<PathBuf>,
    pub export_csv: Option<PathBuf>,
}

/// A saved search result file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsFile {
    pub tool: String,
    pub version: String,
    pub generated: DateTime<Local>,
    pub title: String,
    /// Error limit as a fraction.
    pub tolerance: f64,
    pub elements: Vec<AnalyzedElement>,
    pub candidates: Vec<Component>,
    pub mixtures: Vec<MixtureRecord>,
    pub summary: SearchSummary,
}
