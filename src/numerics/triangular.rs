//! Dense unit-triangular solves over [`Scalar`] matrices.
//!
//! The reverse Levinson-Durbin recursion stacks its order ladder into a
//! unit-upper-triangular matrix and inverts it by solving against the
//! identity. Dual numbers do not implement the `RealField` machinery that
//! dense linear-algebra crates require, so back substitution is written
//! here directly on `ndarray` storage.

use ndarray::{Array2, ArrayView2};

use crate::numerics::scalar::Scalar;

/// Identity matrix of size `n × n`.
pub fn eye<T: Scalar>(n: usize) -> Array2<T> {
    Array2::eye(n)
}

/// solve_unit_upper_triangular — solve `U X = B` for unit-upper-triangular `U`.
///
/// Parameters
/// ----------
/// - `u`: `ArrayView2<T>`
///   Square `n × n` matrix. Only the strictly upper triangle is read; the
///   diagonal is taken to be one and the lower triangle is ignored.
/// - `b`: `ArrayView2<T>`
///   Right-hand sides, `n × p`.
///
/// Returns
/// -------
/// `Array2<T>`
///   Solution `X` of shape `n × p`, computed by column-wise back
///   substitution.
///
/// Panics
/// ------
/// - Panics on shape mismatch between `u` and `b`; callers build both from
///   the same order and treat a mismatch as a programming error.
pub fn solve_unit_upper_triangular<T: Scalar>(u: ArrayView2<T>, b: ArrayView2<T>) -> Array2<T> {
    let n = u.nrows();
    assert_eq!(u.ncols(), n, "triangular factor must be square");
    assert_eq!(b.nrows(), n, "right-hand side rows must match the factor");

    let mut x = b.to_owned();
    for col in 0..x.ncols() {
        for i in (0..n).rev() {
            let mut acc = x[[i, col]];
            for j in i + 1..n {
                acc = acc - u[[i, j]] * x[[j, col]];
            }
            x[[i, col]] = acc;
        }
    }
    x
}
