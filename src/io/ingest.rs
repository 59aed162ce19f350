//! `.ea` input reader.
//!
//! This module is responsible for turning an elemental-analysis input file
//! into a validated `Composition` and candidate `Catalog`.
//!
//! File layout (1-based line numbers):
//!
//! ```text
//! 1   title line
//! 2   analyzed elements with mass percentages, e.g. C54.53 H6.31 N8.10 S14.48
//! 3+  one bruto formula per line, e.g. C15 H20 N2 O3 S   # optional title
//! ```
//!
//! Design goals:
//! - **Strict syntax** with line numbers in every error (exit code 2)
//! - **Capacity limits** enforced here, never in the search (exit code 3)
//! - **Separation of concerns**: no fitting logic here

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::chem::{FormulaError, mass_profile};
use crate::domain::{AnalyzedElement, Catalog, Component, Composition, Formula, FormulaTerm, Limits};
use crate::error::{AppError, EXIT_INPUT};

/// Extension appended to input names that lack it.
pub const EA_EXTENSION: &str = ".ea";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("line {line}: {details}")]
    Syntax { line: usize, details: String },

    #[error("line {line}: unknown element: {symbol}")]
    UnknownElement { line: usize, symbol: String },

    #[error("line {line}: formula has zero molecular weight")]
    Massless { line: usize },

    #[error("missing composition line (expected element percentages after the title)")]
    MissingComposition,

    #[error("line {line}: duplicate analyzed element: {symbol}")]
    DuplicateElement { line: usize, symbol: String },

    #[error("line {line}: percentage {value} for {symbol} is outside 0..100")]
    PercentOutOfRange { line: usize, symbol: String, value: f64 },

    #[error("line {line}: too many elements (limit {limit})")]
    TooManyElements { line: usize, limit: usize },

    #[error("too many formulae (limit {limit})")]
    TooManyComponents { limit: usize },
}

impl ParseError {
    /// True for capacity-limit violations (as opposed to malformed input).
    pub fn is_capacity(&self) -> bool {
        matches!(
            self,
            ParseError::TooManyElements { .. } | ParseError::TooManyComponents { .. }
        )
    }

    fn syntax(line: usize, details: impl Into<String>) -> Self {
        ParseError::Syntax {
            line,
            details: details.into(),
        }
    }
}

/// Parsed input: the composition to explain and its candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestedData {
    pub composition: Composition,
    pub catalog: Catalog,
}

/// Input path as typed, with `.ea` appended when the name lacks it.
pub fn resolve_input_path(path: &Path) -> PathBuf {
    let contains_ext = path
        .file_name()
        .map(|name| name.to_string_lossy().contains(EA_EXTENSION))
        .unwrap_or(false);
    if contains_ext {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(EA_EXTENSION);
        PathBuf::from(name)
    }
}

/// Read and parse an `.ea` file.
pub fn load_ea_file(path: &Path, limits: &Limits) -> Result<IngestedData, AppError> {
    let text = fs::read_to_string(path).map_err(|e| {
        AppError::new(
            EXIT_INPUT,
            format!("Failed to read input file '{}': {e}", path.display()),
        )
    })?;
    let data = parse_ea(&text, limits)?;
    debug!(
        path = %path.display(),
        elements = data.composition.len(),
        candidates = data.catalog.len(),
        "input parsed"
    );
    Ok(data)
}

/// Parse the contents of an `.ea` file.
pub fn parse_ea(text: &str, limits: &Limits) -> Result<IngestedData, ParseError> {
    let mut lines = text.lines().enumerate().map(|(idx, raw)| (idx + 1, raw));

    let title = lines
        .next()
        .map(|(_, raw)| raw.trim().to_string())
        .ok_or(ParseError::MissingComposition)?;

    let mut composition: Option<Composition> = None;
    let mut components = Vec::new();

    for (line, raw) in lines {
        let (body, comment) = split_comment(raw);
        if body.trim().is_empty() {
            continue;
        }
        let terms = tokenize(body, line)?;

        match &composition {
            None => {
                composition = Some(parse_composition(&title, &terms, line, limits)?);
            }
            Some(comp) => {
                if components.len() >= limits.max_components {
                    return Err(ParseError::TooManyComponents {
                        limit: limits.max_components,
                    });
                }
                let id = components.len() + 1;
                components.push(parse_component(id, &terms, comment, comp, line, limits)?);
            }
        }
    }

    let composition = composition.ok_or(ParseError::MissingComposition)?;
    Ok(IngestedData {
        composition,
        catalog: Catalog::new(components),
    })
}

/// Split a line at the first `#`; the comment is trimmed, `None` if empty.
fn split_comment(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once('#') {
        Some((body, comment)) => {
            let comment = comment.trim();
            (body, (!comment.is_empty()).then_some(comment))
        }
        None => (raw, None),
    }
}

/// One `Symbol[number]` token.
#[derive(Debug, Clone, PartialEq)]
struct Token {
    symbol: String,
    number: Option<f64>,
}

/// Split a line body into element tokens. Whitespace between tokens is
/// optional: `C15H20N2O3S` and `C15 H20 N2 O3 S` are equivalent.
fn tokenize(body: &str, line: usize) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = body.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if ch.is_whitespace() {
            i += 1;
            continue;
        }
        if !ch.is_ascii_uppercase() {
            return Err(ParseError::syntax(
                line,
                format!("expected an element symbol at '{ch}'"),
            ));
        }

        let mut symbol = ch.to_string();
        i += 1;
        if i < chars.len() && chars[i].is_ascii_lowercase() {
            symbol.push(chars[i]);
            i += 1;
        }

        let start = i;
        while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
            i += 1;
        }
        let number = if start == i {
            None
        } else {
            let text: String = chars[start..i].iter().collect();
            let value = text.parse::<f64>().map_err(|_| {
                ParseError::syntax(line, format!("invalid number '{text}' after {symbol}"))
            })?;
            Some(value)
        };

        tokens.push(Token { symbol, number });
    }

    Ok(tokens)
}

fn parse_composition(
    title: &str,
    tokens: &[Token],
    line: usize,
    limits: &Limits,
) -> Result<Composition, ParseError> {
    if tokens.len() > limits.max_elements {
        return Err(ParseError::TooManyElements {
            line,
            limit: limits.max_elements,
        });
    }

    let mut elements: Vec<AnalyzedElement> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if crate::chem::element_by_symbol(&token.symbol).is_none() {
            return Err(ParseError::UnknownElement {
                line,
                symbol: token.symbol.clone(),
            });
        }
        if elements.iter().any(|e| e.symbol == token.symbol) {
            return Err(ParseError::DuplicateElement {
                line,
                symbol: token.symbol.clone(),
            });
        }
        let percent = token.number.ok_or_else(|| {
            ParseError::syntax(line, format!("missing percentage for {}", token.symbol))
        })?;
        if !(0.0..=100.0).contains(&percent) {
            return Err(ParseError::PercentOutOfRange {
                line,
                symbol: token.symbol.clone(),
                value: percent,
            });
        }
        elements.push(AnalyzedElement {
            symbol: token.symbol.clone(),
            measured: percent / 100.0,
        });
    }

    Ok(Composition {
        title: title.to_string(),
        elements,
    })
}

fn parse_component(
    id: usize,
    tokens: &[Token],
    comment: Option<&str>,
    composition: &Composition,
    line: usize,
    limits: &Limits,
) -> Result<Component, ParseError> {
    if tokens.len() > limits.max_elements {
        return Err(ParseError::TooManyElements {
            line,
            limit: limits.max_elements,
        });
    }

    let formula = Formula {
        terms: tokens
            .iter()
            .map(|t| FormulaTerm {
                symbol: t.symbol.clone(),
                count: t.number.unwrap_or(1.0),
            })
            .collect(),
    };

    let profile = mass_profile(&formula, composition).map_err(|e| match e {
        FormulaError::UnknownElement(symbol) => ParseError::UnknownElement { line, symbol },
        FormulaError::Massless => ParseError::Massless { line },
    })?;

    Ok(Component {
        id,
        formula,
        title: comment.map(str::to_string),
        molecular_weight: profile.molecular_weight,
        elfrac: profile.elfrac,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "6718 DEBO 145
C54.53 H6.31 N8.10 S14.48
C15 H20 N2 O3 S
C11 H16 N2 O S
C4 H12 N2 S2
C2 H4 O S
S\t#sulphur
H Cl\t#hydrochloric acid
H2 O\t#water
";

    #[test]
    fn parses_documented_sample() {
        let data = parse_ea(SAMPLE, &Limits::default()).unwrap();

        assert_eq!(data.composition.title, "6718 DEBO 145");
        let symbols: Vec<&str> = data
            .composition
            .elements
            .iter()
            .map(|e| e.symbol.as_str())
            .collect();
        assert_eq!(symbols, vec!["C", "H", "N", "S"]);
        assert!((data.composition.measured(0) - 0.5453).abs() < 1e-12);

        assert_eq!(data.catalog.len(), 7);
        let first = data.catalog.get(0);
        assert_eq!(first.id, 1);
        assert_eq!(first.formula.compact(), "C15H20N2O3S");
        assert!((first.molecular_weight - 308.396).abs() < 1e-3);
        assert_eq!(first.elfrac.len(), 4);

        let sulphur = data.catalog.get(4);
        assert_eq!(sulphur.title.as_deref(), Some("sulphur"));
        assert_eq!(sulphur.elfrac, vec![0.0, 0.0, 0.0, 1.0]);

        let hcl = data.catalog.get(5);
        assert_eq!(hcl.title.as_deref(), Some("hydrochloric acid"));
        // Cl is not analyzed: it only adds weight.
        assert!((hcl.elfrac[1] - 1.008 / 36.458).abs() < 1e-9);
    }

    #[test]
    fn whitespace_between_tokens_is_optional() {
        let data = parse_ea("t\nC50H50\nC6H6\nCH4O0.5\n", &Limits::default()).unwrap();
        assert_eq!(data.catalog.get(0).formula.spaced(), "C6 H6");
        assert_eq!(data.catalog.get(1).formula.terms[2].count, 0.5);
    }

    #[test]
    fn blank_and_comment_only_lines_are_skipped() {
        let data = parse_ea("t\n\nC50 H50\n\n# note\nC6 H6\n", &Limits::default()).unwrap();
        assert_eq!(data.catalog.len(), 1);
    }

    #[test]
    fn reports_unknown_element_with_line() {
        let err = parse_ea("t\nC50 H6\nC6 Xy2\n", &Limits::default()).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownElement {
                line: 3,
                symbol: "Xy".to_string()
            }
        );

        let err = parse_ea("t\nQ50\n", &Limits::default()).unwrap_err();
        assert!(matches!(err, ParseError::UnknownElement { line: 2, .. }));
    }

    #[test]
    fn rejects_malformed_input() {
        let limits = Limits::default();
        assert!(matches!(
            parse_ea("t\nc50\n", &limits),
            Err(ParseError::Syntax { line: 2, .. })
        ));
        assert!(matches!(
            parse_ea("t\nC5.0.1\n", &limits),
            Err(ParseError::Syntax { line: 2, .. })
        ));
        assert!(matches!(
            parse_ea("t\nC50 H\n", &limits),
            Err(ParseError::Syntax { line: 2, .. })
        ));
        assert!(matches!(
            parse_ea("t\nC50 C10\n", &limits),
            Err(ParseError::DuplicateElement { .. })
        ));
        assert!(matches!(
            parse_ea("t\nC150\n", &limits),
            Err(ParseError::PercentOutOfRange { .. })
        ));
        assert!(matches!(
            parse_ea("t\nC50\nC0\n", &limits),
            Err(ParseError::Massless { line: 3 })
        ));
        assert_eq!(parse_ea("", &limits), Err(ParseError::MissingComposition));
        assert_eq!(parse_ea("only a title\n", &limits), Err(ParseError::MissingComposition));
    }

    #[test]
    fn enforces_capacity_limits() {
        let limits = Limits {
            max_elements: 2,
            max_components: 2,
        };

        let err = parse_ea("t\nC50 H5 N3\n", &limits).unwrap_err();
        assert_eq!(err, ParseError::TooManyElements { line: 2, limit: 2 });
        assert!(err.is_capacity());

        let err = parse_ea("t\nC50\nC H4 O\n", &limits).unwrap_err();
        assert_eq!(err, ParseError::TooManyElements { line: 3, limit: 2 });

        let err = parse_ea("t\nC50\nC\nH\nO\n", &limits).unwrap_err();
        assert_eq!(err, ParseError::TooManyComponents { limit: 2 });

        assert!(parse_ea("t\nC50\nC\nH\n", &limits).is_ok());
    }

    #[test]
    fn appends_extension_when_missing() {
        assert_eq!(resolve_input_path(Path::new("debo")), PathBuf::from("debo.ea"));
        assert_eq!(resolve_input_path(Path::new("dir/debo.ea")), PathBuf::from("dir/debo.ea"));
    }

    #[test]
    fn missing_file_maps_to_input_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.ea");
        let err = load_ea_file(&path, &Limits::default()).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_INPUT);
    }
}
