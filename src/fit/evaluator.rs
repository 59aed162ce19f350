//! Goodness-of-fit evaluation and acceptance rules.

use crate::domain::{Catalog, Composition, MemberShare, SkipReason};

/// A combination that passed every acceptance rule (not yet numbered).
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub members: Vec<MemberShare>,
    pub calculated: Vec<f64>,
    pub misfit: f64,
}

/// Apply the acceptance rules to a fitted combination.
///
/// `mass_fractions` is aligned to `members`. Rejection order: any negative
/// mass fraction (`Infeasible`), then misfit above `tolerance`
/// (`OverTolerance`). A misfit exactly at the tolerance is accepted.
pub fn evaluate(
    members: &[usize],
    mass_fractions: &[f64],
    composition: &Composition,
    catalog: &Catalog,
    tolerance: f64,
) -> Result<Evaluation, SkipReason> {
    if mass_fractions.iter().any(|&w| w < 0.0) {
        return Err(SkipReason::Infeasible);
    }

    let moles = mole_fractions(members, mass_fractions, catalog);
    let calculated = calculated_composition(members, mass_fractions, composition, catalog);
    let misfit = rms_misfit(composition, &calculated);

    // NaN misfit must not slip through as "not greater".
    if !(misfit <= tolerance) {
        return Err(SkipReason::OverTolerance);
    }

    let members = members
        .iter()
        .zip(mass_fractions)
        .zip(moles)
        .map(|((&index, &mass_fraction), mole_fraction)| {
            let component = catalog.get(index);
            MemberShare {
                index,
                id: component.id,
                mass_fraction,
                mole_fraction,
                molecular_weight: component.molecular_weight,
            }
        })
        .collect();

    Ok(Evaluation {
        members,
        calculated,
        misfit,
    })
}

/// Mass fraction over molecular weight, renormalized to sum to 1.
pub fn mole_fractions(members: &[usize], mass_fractions: &[f64], catalog: &Catalog) -> Vec<f64> {
    let raw: Vec<f64> = members
        .iter()
        .zip(mass_fractions)
        .map(|(&index, &w)| w / catalog.get(index).molecular_weight)
        .collect();
    let total: f64 = raw.iter().sum();
    raw.into_iter().map(|m| m / total).collect()
}

/// Elemental composition of the mixture over the analyzed elements.
pub fn calculated_composition(
    members: &[usize],
    mass_fractions: &[f64],
    composition: &Composition,
    catalog: &Catalog,
) -> Vec<f64> {
    (0..composition.len())
        .map(|c| {
            members
                .iter()
                .zip(mass_fractions)
                .map(|(&index, &w)| w * catalog.elfrac(index, c))
                .sum()
        })
        .collect()
}

/// RMS deviation between measured and calculated fractions.
pub fn rms_misfit(composition: &Composition, calculated: &[f64]) -> f64 {
    let n = composition.len();
    if n == 0 {
        return f64::NAN;
    }
    let sse: f64 = composition
        .elements
        .iter()
        .zip(calculated)
        .map(|(e, &calc)| {
            let r = e.measured - calc;
            r * r
        })
        .sum();
    (sse / n as f64).sqrt()
}
