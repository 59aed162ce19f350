//! Dense linear solver for the normal equations.
//!
//! Each fit produces a tiny square system `A x = b` (at most `N` unknowns,
//! where `N` is the number of analyzed elements). We solve it with an LU
//! decomposition with partial pivoting.
//!
//! Singularity checks, all treated identically by callers:
//! - `has_zero_row` and `has_duplicate_row`: structural pre-checks, run
//!   before factorizing.
//! - `solve_dense`: returns `None` when a pivot of the factorization is
//!   negligible relative to the largest one.

use nalgebra::{DMatrix, DVector};

/// True if any row of `a` is identically zero.
pub fn has_zero_row(a: &DMatrix<f64>) -> bool {
    a.row_iter().any(|row| row.iter().all(|&v| v == 0.0))
}

/// True if two rows of `a` are bitwise equal.
///
/// Members with identical signatures produce identical rows in the normal
/// equations; rounding during elimination can hide that from the pivots.
pub fn has_duplicate_row(a: &DMatrix<f64>) -> bool {
    let n = a.nrows();
    (0..n).any(|i| {
        ((i + 1)..n).any(|j| a.row(i).iter().zip(a.row(j).iter()).all(|(x, y)| x == y))
    })
}

/// Solve a square system using LU decomposition with partial pivoting.
///
/// Returns `None` if the matrix is numerically singular (some pivot of `U`
/// is at most `n * ε * max|u_jj|`) or the solution is not finite.
pub fn solve_dense(a: DMatrix<f64>, b: &DVector<f64>) -> Option<DVector<f64>> {
    if !a.is_square() || a.nrows() != b.len() {
        return None;
    }
    let n = a.nrows();
    let lu = a.lu();

    let pivots = lu.u().diagonal();
    let largest = pivots.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    let threshold = f64::EPSILON * n as f64 * largest;
    if pivots.iter().any(|v| v.abs() <= threshold) {
        return None;
    }

    let x = lu.solve(b)?;
    if x.iter().all(|v| v.is_finite()) {
        Some(x)
    } else {
        None
    }
}
