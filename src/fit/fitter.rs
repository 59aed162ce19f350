//! Constrained least-squares fit for a single combination.
//!
//! Given:
//! - the measured composition `y_c` over analyzed elements `c = 1..N`
//! - a combination of `k` candidates with elemental fractions `e_i(c)`
//!
//! we look for mass fractions `w_i` minimizing `Σ_c (y_c - Σ_i w_i e_i(c))^2`
//! subject to `Σ_i w_i = 1`.
//!
//! The constraint is eliminated by substitution: the member with the largest
//! catalog index is the reference `q`, its fraction is `1 - Σ_{i≠q} w_i`, and
//! the remaining `k - 1` fractions solve the normal equations of
//!
//! ```text
//! y - e_q  ≈  Σ_{i≠q} w_i (e_i - e_q)
//! ```
//!
//! The reference is never chosen for conditioning; it is always the last
//! member of the combination.

use nalgebra::{DMatrix, DVector};

use crate::domain::{Catalog, Composition};
use crate::math::{has_duplicate_row, has_zero_row, solve_dense};

/// Solve for the mass fractions of `members`, aligned to `members`.
///
/// Returns `None` for a degenerate combination: a zero or repeated row in
/// the normal equations (checked before any solve) or a singular
/// factorization.
/// The returned fractions sum to 1 by construction and may be negative;
/// feasibility is the evaluator's job.
pub fn fit_mass_fractions(
    members: &[usize],
    composition: &Composition,
    catalog: &Catalog,
) -> Option<Vec<f64>> {
    let k = members.len();
    match k {
        0 => None,
        1 => Some(vec![1.0]),
        _ => {
            let (a, b) = normal_equations(members, composition, catalog);
            if has_zero_row(&a) || has_duplicate_row(&a) {
                return None;
            }
            let x = solve_dense(a, &b)?;

            let mut fractions: Vec<f64> = x.iter().copied().collect();
            let free_sum: f64 = fractions.iter().sum();
            fractions.push(1.0 - free_sum);
            Some(fractions)
        }
    }
}

/// Build `A` and `b` for the `k - 1` non-reference members.
///
/// `A[i][j] = Σ_c d_j(c) d_i(c)` and `b[i] = Σ_c t(c) d_i(c)` with
/// `d_i(c) = e_i(c) - e_q(c)` and `t(c) = y_c - e_q(c)`.
fn normal_equations(
    members: &[usize],
    composition: &Composition,
    catalog: &Catalog,
) -> (DMatrix<f64>, DVector<f64>) {
    let (free, reference) = members.split_at(members.len() - 1);
    let q = reference[0];
    let n_free = free.len();

    let mut a = DMatrix::<f64>::zeros(n_free, n_free);
    let mut b = DVector::<f64>::zeros(n_free);
    let mut diff = vec![0.0; n_free];

    for c in 0..composition.len() {
        let eq = catalog.elfrac(q, c);
        let target = composition.measured(c) - eq;

        for (d, &member) in diff.iter_mut().zip(free) {
            *d = catalog.elfrac(member, c) - eq;
        }
        for i in 0..n_free {
            for j in 0..n_free {
                a[(i, j)] += diff[j] * diff[i];
            }
            b[i] += target * diff[i];
        }
    }

    (a, b)
}
