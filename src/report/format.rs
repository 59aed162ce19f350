//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the search code stays clean and testable
//! - output changes are localized
//!
//! Two layouts exist. The long layout prints one row per analyzed element
//! (found vs calculated) side by side with one row per mixture member. The
//! short layout prints one line per mixture: deviations ×10⁴ and member
//! fractions ×10³ in fixed columns per candidate.

use crate::domain::{Catalog, Composition, FractionBasis, MixtureRecord, ReportStyle};

const HYPHENS: &str =
    "---------------------------------------------------------------------------------";

/// Run banner plus the candidate list.
pub fn format_preamble(composition: &Composition, catalog: &Catalog, tolerance: f64) -> String {
    let mut out = String::new();
    let formula_width = 2 * composition.len() + 2;
    // Undo the percent-to-fraction round trip (7 / 100 * 100 != 7).
    let percent = (tolerance * 100.0 * 1e9).round() / 1e9;

    out.push_str(&format!(
        "ANACAL - error limit {percent}% - {}\n\n",
        composition.title
    ));
    out.push_str("Candidate components:\n");
    out.push_str(&format!("nr molwgt {:<formula_width$} name\n", "formula"));

    for component in &catalog.components {
        let line = format!(
            "{:>2} {:>6.2} {:<formula_width$} {}",
            component.id,
            component.molecular_weight,
            component.formula.compact(),
            component.title.as_deref().unwrap_or(""),
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Column headings for the chosen layout.
pub fn format_table_header(
    composition: &Composition,
    catalog: &Catalog,
    style: ReportStyle,
) -> String {
    match style {
        ReportStyle::Long => concat!(
            "                             --percent  by--\n",
            "       found  calcd st.dev   weight     mole  nr   molwgt   formula\n"
        )
        .to_string(),
        ReportStyle::Short(basis) => short_header(composition, catalog, basis),
    }
}

/// One accepted mixture in the chosen layout.
pub fn format_record(
    record: &MixtureRecord,
    composition: &Composition,
    catalog: &Catalog,
    style: ReportStyle,
) -> String {
    match style {
        ReportStyle::Long => long_record(record, composition, catalog),
        ReportStyle::Short(basis) => short_record(record, composition, catalog, basis),
    }
}

fn short_header(composition: &Composition, catalog: &Catalog, basis: FractionBasis) -> String {
    let n = composition.len();
    let m = catalog.len();
    let h1 = hyphens((3 + n * 6).saturating_sub(19) / 2);
    let h2 = hyphens((m * 5).saturating_sub(6) / 2);

    let mut out = format!(
        "     {h1}found-calcd (%x100){h1}  {h2}{}‰{h2}\n",
        basis.label()
    );
    out.push_str("nr   std");
    for element in &composition.elements {
        out.push_str(&format!("{:>6}", element.symbol));
    }
    for component in &catalog.components {
        out.push_str(&format!(" {:>4}", component.id));
    }
    out.push('\n');
    out
}

fn short_record(
    record: &MixtureRecord,
    composition: &Composition,
    catalog: &Catalog,
    basis: FractionBasis,
) -> String {
    let mut out = format!("{:>2} {:>5.0}", record.sequence, record.misfit * 10_000.0);

    for (element, calc) in composition.elements.iter().zip(&record.calculated) {
        out.push_str(&format!(" {:>5.0}", (element.measured - calc) * 10_000.0));
    }

    let mut shares = record.members.iter().peekable();
    for index in 0..catalog.len() {
        match shares.next_if(|s| s.index == index) {
            Some(share) => {
                let value = match basis {
                    FractionBasis::Mole => share.mole_fraction,
                    FractionBasis::Mass => share.mass_fraction,
                };
                out.push_str(&format!(" {:>4.0}", value * 1000.0));
            }
            None => out.push_str("     "),
        }
    }

    let mut line = out.trim_end().to_string();
    line.push('\n');
    line
}

fn long_record(record: &MixtureRecord, composition: &Composition, catalog: &Catalog) -> String {
    let n = composition.len();
    let k = record.members.len();
    let mut out = String::from("\n");

    for row in 0..n.max(k) {
        let mut line = String::new();

        if row < n {
            let element = &composition.elements[row];
            if row == 0 {
                line.push_str(&format!("{:>2} ", record.sequence));
            } else {
                line.push_str("   ");
            }
            line.push_str(&format!(
                "{:<2}{:>7.2}{:>7.2}",
                element.symbol,
                element.measured * 100.0,
                record.calculated[row] * 100.0
            ));
            if row == 0 {
                line.push_str(&format!("{:>7.3} ", record.misfit * 100.0));
            } else {
                line.push_str("        ");
            }
        } else {
            line.push_str(&" ".repeat(27));
        }

        if let Some(share) = record.members.get(row) {
            let component = catalog.get(share.index);
            line.push_str(&format!(
                "{:>8.2} {:>8.2} {:>3}  {:>7.2}   {}",
                share.mass_fraction * 100.0,
                share.mole_fraction * 100.0,
                share.id,
                share.molecular_weight,
                component.formula.spaced(),
            ));
        }

        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

fn hyphens(len: usize) -> &'static str {
    &HYPHENS[..len.min(HYPHENS.len())]
}
