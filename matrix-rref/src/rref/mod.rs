//! # Row-Reduction Module
//!
//! A stateless two-pass engine taking a matrix to reduced row-echelon form
//! (RREF), and the `[A | I]` inversion built on top of it.
//!
//! The engine itself is total: a pivot column with no nonzero candidate is
//! skipped, which keeps reduction well-defined (and idempotent) for
//! rank-deficient input. Inversion, by contrast, fails explicitly with
//! [`MatrixError::SingularMatrix`] when any pivot column was skipped.

use crate::errors::MatrixError;
use crate::matrix::Matrix;
use crate::matrix::element::Element;

use tracing::{debug, trace};

/// Forward elimination to row-echelon form, in place.
///
/// For each pivot column `i` up to `min(rows, cols)`, the first row at or
/// below position `i` with a nonzero entry in column `i` is swapped into
/// place, and every row below has that column zeroed by subtracting
/// `entry / pivot` times the pivot row across columns `i` onward.
///
/// Returns the pivot columns for which no nonzero candidate existed; those
/// columns are passed over without advancing the pivot.
pub fn forward_eliminate<T: Element>(m: &mut Matrix<T>) -> Vec<usize> {
    let rows = m.rows();
    let cols = m.cols();
    let steps = rows.min(cols);

    let mut skipped = Vec::new();
    let data = m.data_mut();

    for i in 0..steps {
        let Some(pivot_row) = (i..rows).find(|&r| data[r][i] != T::zero()) else {
            debug!(column = i, "no nonzero pivot candidate, column skipped");
            skipped.push(i);
            continue;
        };

        if pivot_row != i {
            trace!(column = i, from = pivot_row, "swapping pivot row into place");
            data.swap(i, pivot_row);
        }

        let pivot = data[i][i].clone();
        for r in (i + 1)..rows {
            let entry = data[r][i].clone();
            if entry == T::zero() {
                continue;
            }
            let ratio = entry / pivot.clone();
            for k in (i + 1)..cols {
                let delta = ratio.clone() * data[i][k].clone();
                data[r][k] = data[r][k].clone() - delta;
            }
            // Zeroed directly so float rounding cannot leave residue in the
            // pivot column.
            data[r][i] = T::zero();
        }
    }

    skipped
}

/// Backward reduction from row-echelon form to RREF, in place.
///
/// Walking rows bottom-up, each row's leading (first nonzero) entry is
/// normalized to exactly 1 and the rest of its column is cleared above.
/// All-zero rows are left unchanged.
pub fn backward_reduce<T: Element>(m: &mut Matrix<T>) {
    let rows = m.rows();
    let cols = m.cols();
    let steps = rows.min(cols);

    let data = m.data_mut();

    for i in (0..steps).rev() {
        let Some(lead) = (0..cols).find(|&j| data[i][j] != T::zero()) else {
            continue;
        };

        let value = data[i][lead].clone();
        for j in (lead + 1)..cols {
            data[i][j] = data[i][j].clone() / value.clone();
        }
        data[i][lead] = T::one();

        for r in 0..i {
            let factor = data[r][lead].clone();
            if factor == T::zero() {
                continue;
            }
            for j in 0..cols {
                let delta = factor.clone() * data[i][j].clone();
                data[r][j] = data[r][j].clone() - delta;
            }
            data[r][lead] = T::zero();
        }
    }
}

/// Both passes over a private working copy; the operand is not mutated.
pub fn rref<T: Element>(m: &Matrix<T>) -> Matrix<T> {
    let mut working = m.clone();
    forward_eliminate(&mut working);
    backward_reduce(&mut working);
    working
}

/// Inverse of a square matrix via row reduction of `[A | I]`.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] for a non-square operand and
/// [`MatrixError::SingularMatrix`] when some pivot column has no nonzero
/// candidate in or below the pivot row.
pub fn inverse<T: Element>(m: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare(format!(
            "inverse requires a square matrix, got {}x{}",
            m.rows(),
            m.cols()
        )));
    }

    let mut augmented = m.augment(&m.identity()?)?;

    // The augmented matrix is n x 2n, so the pivot columns of the forward
    // pass are exactly the columns of the original operand.
    let skipped = forward_eliminate(&mut augmented);
    if let Some(&column) = skipped.first() {
        return Err(MatrixError::SingularMatrix(format!(
            "no nonzero pivot candidate in column {}",
            column
        )));
    }
    backward_reduce(&mut augmented);

    let n = m.cols();
    let data = (0..m.rows())
        .map(|i| augmented.row(i)[n..].to_vec())
        .collect();
    Matrix::try_with(data)
}

impl<T: Element> Matrix<T> {
    /// The reduced row-echelon form of `self`, computed on a working copy.
    pub fn rref(&self) -> Matrix<T> {
        rref(self)
    }

    /// The inverse of `self`, computed via RREF of `[self | I]`. The
    /// receiver is never mutated, even on failure.
    pub fn inverse(&self) -> Result<Matrix<T>, MatrixError> {
        inverse(self)
    }
}
