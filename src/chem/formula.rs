//! Molecular weight and elemental mass fractions of a bruto formula.

use thiserror::Error;

use crate::chem::elements::element_by_symbol;
use crate::domain::{Composition, Formula};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    #[error("unknown element: {0}")]
    UnknownElement(String),
    #[error("formula has zero molecular weight")]
    Massless,
}

/// Molecular weight plus mass fractions aligned to a composition.
#[derive(Debug, Clone, PartialEq)]
pub struct MassProfile {
    pub molecular_weight: f64,
    pub elfrac: Vec<f64>,
}

/// Compute the mass profile of `formula` over the analyzed elements of
/// `composition`.
///
/// Every term contributes to the molecular weight; only analyzed elements
/// get a mass fraction. A repeated element accumulates.
pub fn mass_profile(
    formula: &Formula,
    composition: &Composition,
) -> Result<MassProfile, FormulaError> {
    let mut molecular_weight = 0.0;
    let mut mass = vec![0.0; composition.len()];

    for term in &formula.terms {
        let element = element_by_symbol(&term.symbol)
            .ok_or_else(|| FormulaError::UnknownElement(term.symbol.clone()))?;
        let contribution = term.count * element.atomic_weight;
        molecular_weight += contribution;
        if let Some(c) = composition.position(&term.symbol) {
            mass[c] += contribution;
        }
    }

    if !(molecular_weight > 0.0 && molecular_weight.is_finite()) {
        return Err(FormulaError::Massless);
    }

    let elfrac = mass.into_iter().map(|m| m / molecular_weight).collect();
    Ok(MassProfile {
        molecular_weight,
        elfrac,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AnalyzedElement, FormulaTerm};

    fn formula(terms: &[(&str, f64)]) -> Formula {
        Formula {
            terms: terms
                .iter()
                .map(|(s, n)| FormulaTerm {
                    symbol: s.to_string(),
                    count: *n,
                })
                .collect(),
        }
    }

    fn analyzed(symbols: &[&str]) -> Composition {
        Composition {
            title: String::new(),
            elements: symbols
                .iter()
                .map(|s| AnalyzedElement {
                    symbol: s.to_string(),
                    measured: 0.0,
                })
                .collect(),
        }
    }

    #[test]
    fn water_profile() {
        let comp = analyzed(&["H", "C"]);
        let profile = mass_profile(&formula(&[("H", 2.0), ("O", 1.0)]), &comp).unwrap();

        assert!((profile.molecular_weight - 18.015).abs() < 1e-9);
        assert!((profile.elfrac[0] - 2.016 / 18.015).abs() < 1e-12);
        assert_eq!(profile.elfrac[1], 0.0);
    }

    #[test]
    fn repeated_elements_accumulate() {
        let comp = analyzed(&["C"]);
        // Acetic acid written as CH3COOH.
        let split = formula(&[("C", 1.0), ("H", 3.0), ("C", 1.0), ("O", 2.0), ("H", 1.0)]);
        let merged = formula(&[("C", 2.0), ("H", 4.0), ("O", 2.0)]);

        let a = mass_profile(&split, &comp).unwrap();
        let b = mass_profile(&merged, &comp).unwrap();
        assert!((a.molecular_weight - b.molecular_weight).abs() < 1e-9);
        assert!((a.elfrac[0] - b.elfrac[0]).abs() < 1e-12);
    }

    #[test]
    fn fractions_of_fully_analyzed_formula_sum_to_one() {
        let comp = analyzed(&["C", "H", "N", "O", "S"]);
        let profile = mass_profile(
            &formula(&[("C", 15.0), ("H", 20.0), ("N", 2.0), ("O", 3.0), ("S", 1.0)]),
            &comp,
        )
        .unwrap();
        assert!((profile.elfrac.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_unknown_and_massless() {
        let comp = analyzed(&["C"]);
        assert_eq!(
            mass_profile(&formula(&[("Qq", 1.0)]), &comp),
            Err(FormulaError::UnknownElement("Qq".to_string()))
        );
        assert_eq!(
            mass_profile(&formula(&[("C", 0.0)]), &comp),
            Err(FormulaError::Massless)
        );
    }
}
