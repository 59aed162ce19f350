//! Export accepted mixtures to CSV.
//!
//! One row per (mixture, member), meant to be easy to consume in
//! spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{Catalog, MixtureRecord};
use crate::error::{AppError, EXIT_EXPORT};

/// Write accepted mixtures to a CSV file.
pub fn write_results_csv(
    path: &Path,
    records: &[MixtureRecord],
    catalog: &Catalog,
) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            EXIT_EXPORT,
            format!("Failed to create export CSV '{}': {e}", path.display()),
        )
    })?;
    write_results(&mut file, records, catalog)
        .map_err(|e| AppError::new(EXIT_EXPORT, format!("Failed to write export CSV: {e}")))
}

fn write_results<W: Write>(
    out: &mut W,
    records: &[MixtureRecord],
    catalog: &Catalog,
) -> std::io::Result<()> {
    writeln!(
        out,
        "sequence,misfit,nr,formula,mass_fraction,mole_fraction,molecular_weight"
    )?;

    for record in records {
        for share in &record.members {
            let component = catalog.get(share.index);
            writeln!(
                out,
                "{},{:.10},{},{},{:.10},{:.10},{:.4}",
                record.sequence,
                record.misfit,
                share.id,
                component.formula.compact(),
                share.mass_fraction,
                share.mole_fraction,
                share.molecular_weight,
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Limits;
    use crate::fit::search;
    use crate::io::ingest::parse_ea;

    #[test]
    fn one_row_per_member() {
        let input = "mix\nC40 H6.71 O53.29\nC H2 O\nC6 H6\nH2 O\n";
        let data = parse_ea(input, &Limits::default()).unwrap();
        let out = search(&data.composition, &data.catalog, 0.01);
        assert!(!out.records.is_empty());

        let mut buf = Vec::new();
        write_results(&mut buf, &out.records, &data.catalog).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        let members: usize = out.records.iter().map(|r| r.members.len()).sum();
        assert_eq!(lines.len(), members + 1);
        assert!(lines[0].starts_with("sequence,misfit,nr"));
        assert!(lines[1].starts_with("1,"));
        assert!(lines[1].contains(",CH2O,"));
    }
}
