//! Exhaustive mixture search.
//!
//! For every combination from `Combinations` (fixed order) we:
//! 1. fit constrained mass fractions (`fitter`)
//! 2. apply the acceptance rules (`evaluator`)
//! 3. forward accepted mixtures to the sink with a running sequence number
//!
//! Rejected combinations are counted and skipped; nothing here fails for a
//! well-formed composition/catalog pair.

use tracing::{debug, info, trace};

use crate::domain::{Catalog, Composition, MixtureRecord, SearchSummary, SkipReason};
use crate::fit::combinations::{Combinations, combination_count};
use crate::fit::evaluator::{Evaluation, evaluate};
use crate::fit::fitter::fit_mass_fractions;
use crate::fit::sink::{CollectingSink, ResultSink};

/// Fit and evaluate a single combination.
pub fn evaluate_combination(
    members: &[usize],
    composition: &Composition,
    catalog: &Catalog,
    tolerance: f64,
) -> Result<Evaluation, SkipReason> {
    let fractions =
        fit_mass_fractions(members, composition, catalog).ok_or(SkipReason::Degenerate)?;
    evaluate(members, &fractions, composition, catalog, tolerance)
}

/// Run the search to exhaustion, streaming accepted mixtures into `sink`.
pub fn run_search<S: ResultSink + ?Sized>(
    composition: &Composition,
    catalog: &Catalog,
    tolerance: f64,
    sink: &mut S,
) -> SearchSummary {
    let combos = Combinations::for_problem(catalog.len(), composition.len());
    let mut summary = SearchSummary {
        max_size: combos.max_size(),
        ..SearchSummary::default()
    };
    debug!(
        candidates = catalog.len(),
        elements = composition.len(),
        max_size = summary.max_size,
        combinations = combination_count(catalog.len(), summary.max_size),
        "search started"
    );

    for members in combos {
        summary.enumerated += 1;
        match evaluate_combination(&members, composition, catalog, tolerance) {
            Ok(eval) => {
                summary.accepted += 1;
                let record = MixtureRecord {
                    sequence: summary.accepted,
                    members: eval.members,
                    calculated: eval.calculated,
                    misfit: eval.misfit,
                };
                trace!(sequence = record.sequence, ?members, misfit = record.misfit, "accepted");
                sink.on_accept(&record);
            }
            Err(reason) => {
                trace!(?members, ?reason, "skipped");
                summary.record_skip(reason);
            }
        }
    }

    info!(
        max_size = summary.max_size,
        enumerated = summary.enumerated,
        accepted = summary.accepted,
        degenerate = summary.degenerate,
        infeasible = summary.infeasible,
        over_tolerance = summary.over_tolerance,
        "search complete"
    );
    sink.on_complete(&summary);
    summary
}

/// Run the search and collect every accepted mixture.
pub fn search(composition: &Composition, catalog: &Catalog, tolerance: f64) -> CollectingSink {
    let mut sink = CollectingSink::new();
    run_search(composition, catalog, tolerance, &mut sink);
    sink
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AnalyzedElement, Component, Formula};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn composition(measured: &[f64]) -> Composition {
        Composition {
            title: "test".to_string(),
            elements: measured
                .iter()
                .enumerate()
                .map(|(i, &m)| AnalyzedElement {
                    symbol: format!("E{i}"),
                    measured: m,
                })
                .collect(),
        }
    }

    fn catalog(rows: &[(Vec<f64>, f64)]) -> Catalog {
        Catalog::new(
            rows.iter()
                .enumerate()
                .map(|(i, (elfrac, mw))| Component {
                    id: i + 1,
                    formula: Formula::default(),
                    title: None,
                    molecular_weight: *mw,
                    elfrac: elfrac.clone(),
                })
                .collect(),
        )
    }

    /// Random catalog whose elemental fractions leave room for unanalyzed
    /// elements (row sums below 1).
    fn random_problem(rng: &mut StdRng, m: usize, n: usize) -> (Composition, Catalog) {
        let rows: Vec<(Vec<f64>, f64)> = (0..m)
            .map(|_| {
                let raw: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..1.0)).collect();
                let scale = rng.gen_range(0.5..1.0) / raw.iter().sum::<f64>();
                let elfrac = raw.iter().map(|v| v * scale).collect();
                (elfrac, rng.gen_range(20.0..400.0))
            })
            .collect();

        // Measured composition: a random convex mixture of the first few rows.
        let used = m.min(3);
        let weights: Vec<f64> = (0..used).map(|_| rng.gen_range(0.1..1.0)).collect();
        let total: f64 = weights.iter().sum();
        let measured: Vec<f64> = (0..n)
            .map(|c| {
                (0..used)
                    .map(|i| weights[i] / total * rows[i].0[c])
                    .sum()
            })
            .collect();

        (composition(&measured), catalog(&rows))
    }

    #[test]
    fn two_pure_elements_emit_exactly_one_mixture() {
        let comp = composition(&[0.5, 0.5]);
        let cat = catalog(&[(vec![1.0, 0.0], 10.0), (vec![0.0, 1.0], 20.0)]);

        let out = search(&comp, &cat, 0.01);
        assert_eq!(out.records.len(), 1);

        let record = &out.records[0];
        assert_eq!(record.sequence, 1);
        assert_eq!(record.member_indices(), vec![0, 1]);
        assert_eq!(record.members[0].mass_fraction, 0.5);
        assert_eq!(record.members[1].mass_fraction, 0.5);
        assert!((record.members[0].mole_fraction - 0.6667).abs() < 1e-4);
        assert!((record.members[1].mole_fraction - 0.3333).abs() < 1e-4);
        assert_eq!(record.calculated, vec![0.5, 0.5]);
        assert_eq!(record.misfit, 0.0);

        let summary = out.summary.unwrap();
        assert_eq!(summary.enumerated, 3);
        assert_eq!(summary.accepted, 1);
        assert_eq!(summary.over_tolerance, 2);
        assert_eq!(summary.max_size, 2);
    }

    #[test]
    fn duplicate_signatures_skip_only_the_pair() {
        // Components 0 and 1 share a signature; each alone still fits.
        let comp = composition(&[0.5, 0.5]);
        let cat = catalog(&[
            (vec![0.5, 0.5], 30.0),
            (vec![0.5, 0.5], 60.0),
            (vec![1.0, 0.0], 10.0),
        ]);

        let out = search(&comp, &cat, 0.01);
        let sets: Vec<Vec<usize>> = out.records.iter().map(|r| r.member_indices()).collect();

        assert!(sets.contains(&vec![0]));
        assert!(sets.contains(&vec![1]));
        assert!(!sets.contains(&vec![0, 1]));
        assert!(out.summary.unwrap().degenerate >= 1);
    }

    #[test]
    fn duplicate_pair_is_never_emitted() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let (comp, mut cat) = random_problem(&mut rng, 4, 3);
            cat.components[2].elfrac = cat.components[0].elfrac.clone();

            let out = search(&comp, &cat, 1.0);
            let both = |set: &[usize]| set.contains(&0) && set.contains(&2);
            assert!(out.records.iter().all(|r| !both(&r.member_indices())));

            let pairs: Vec<Vec<usize>> = Combinations::for_problem(4, 3)
                .filter(|set| both(set))
                .collect();
            assert_eq!(pairs.len(), 4);
            for set in &pairs {
                assert_eq!(
                    evaluate_combination(set, &comp, &cat, 1.0),
                    Err(SkipReason::Degenerate),
                    "members {set:?}"
                );
            }
            assert!(out.summary.unwrap().degenerate >= pairs.len());
        }
    }

    #[test]
    fn empty_inputs_complete_without_records() {
        let comp = composition(&[]);
        let cat = catalog(&[(vec![], 10.0)]);
        let out = search(&comp, &cat, 0.01);
        assert!(out.records.is_empty());
        assert_eq!(out.summary.unwrap().enumerated, 0);

        let comp = composition(&[0.3]);
        let out = search(&comp, &Catalog::default(), 0.01);
        assert!(out.records.is_empty());
        assert!(out.summary.is_some());
    }

    #[test]
    fn accepted_mixtures_honor_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let m = rng.gen_range(1..7);
            let n = rng.gen_range(1..5);
            let (comp, cat) = random_problem(&mut rng, m, n);

            let out = search(&comp, &cat, 0.05);
            let summary = out.summary.unwrap();
            let cap = m.min(n + 1);
            assert_eq!(summary.enumerated, combination_count(m, cap));
            assert_eq!(
                summary.enumerated,
                summary.accepted + summary.degenerate + summary.infeasible + summary.over_tolerance
            );
            assert_eq!(summary.accepted, out.records.len());

            for (i, record) in out.records.iter().enumerate() {
                assert_eq!(record.sequence, i + 1);
                let mass: f64 = record.members.iter().map(|s| s.mass_fraction).sum();
                let mole: f64 = record.members.iter().map(|s| s.mole_fraction).sum();
                assert!((mass - 1.0).abs() < 1e-6);
                assert!((mole - 1.0).abs() < 1e-6);
                assert!(record.members.iter().all(|s| s.mass_fraction >= 0.0));
                assert!(record.members.iter().all(|s| s.mole_fraction >= 0.0));
                assert!(record.misfit <= 0.05);
                assert!(record.members.len() <= cap);
            }
        }
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let mut rng = StdRng::seed_from_u64(42);
        let (comp, cat) = random_problem(&mut rng, 6, 4);

        let first = search(&comp, &cat, 0.02);
        let second = search(&comp, &cat, 0.02);
        assert_eq!(first.records, second.records);
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn exact_mixture_is_found() {
        let mut rng = StdRng::seed_from_u64(3);
        let (comp, cat) = random_problem(&mut rng, 5, 4);

        // The measured composition was built from members 0, 1 and 2.
        let out = search(&comp, &cat, 1e-6);
        let found = out
            .records
            .iter()
            .find(|r| r.member_indices() == vec![0, 1, 2])
            .expect("exact mixture should be accepted");
        assert!(found.misfit < 1e-6);
    }

    #[test]
    fn sequence_follows_enumeration_order() {
        // A generous tolerance accepts every feasible mixture.
        let comp = composition(&[0.4, 0.3]);
        let cat = catalog(&[
            (vec![0.6, 0.2], 40.0),
            (vec![0.2, 0.5], 50.0),
            (vec![0.3, 0.3], 60.0),
        ]);

        let out = search(&comp, &cat, 1.0);
        let sets: Vec<Vec<usize>> = out.records.iter().map(|r| r.member_indices()).collect();
        for pair in sets.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.len() < b.len() || (a.len() == b.len() && a < b));
        }
        assert_eq!(&sets[..3], &[vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn tuple_sink_fans_out() {
        let comp = composition(&[0.5, 0.5]);
        let cat = catalog(&[(vec![1.0, 0.0], 10.0), (vec![0.0, 1.0], 20.0)]);

        let mut pair = (CollectingSink::new(), CollectingSink::new());
        let summary = run_search(&comp, &cat, 0.01, &mut pair);
        assert_eq!(pair.0.records, pair.1.records);
        assert_eq!(pair.1.summary, Some(summary));
    }
}
