//! # Matrix Module
//!
//! Provides the [`Matrix`] struct: an immutable-shape, mutable-content
//! rectangular numeric container with row-major storage.

pub mod element;
pub mod ops;

use crate::errors::MatrixError;
use element::Element;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use std::fmt;

/// A `rows x cols` rectangular matrix. Both dimensions are at least 1 and
/// every row holds exactly `cols` elements.
///
/// The matrix exclusively owns its storage; `Clone` produces a deep copy of
/// all rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<Vec<T>>,
}

impl<T: Element> Matrix<T> {
    /// Create a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Shape`] if `rows` is empty, the first row is
    /// empty, or any row's length differs from the first row's length.
    ///
    /// # Example
    ///
    /// ```
    /// # use matrix_rref::Matrix;
    /// let m = Matrix::try_with(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.rows(), 2);
    /// assert_eq!(m.cols(), 2);
    ///
    /// assert!(Matrix::<f64>::try_with(vec![]).is_err());
    /// assert!(Matrix::try_with(vec![vec![1.0], vec![2.0, 3.0]]).is_err());
    /// ```
    pub fn try_with(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(MatrixError::Shape("matrix cannot be 0x0".to_string()));
        }

        let cols = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::Shape(format!(
                    "Row {} has length {} but expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
        }

        Ok(Matrix {
            rows: rows.len(),
            cols,
            data: rows,
        })
    }

    /// Create a 1xN row vector from a flat sequence.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Shape`] if `values` is empty.
    pub fn row_vector(values: Vec<T>) -> Result<Self, MatrixError> {
        if values.is_empty() {
            return Err(MatrixError::Shape("matrix cannot be 0x0".to_string()));
        }

        Ok(Matrix {
            rows: 1,
            cols: values.len(),
            data: vec![values],
        })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the value at row `i`, column `j`.
    ///
    /// For a row vector (`rows == 1`), `i` is ignored and `j` indexes the
    /// flat storage directly. This is a deliberate shorthand, not an error
    /// path.
    ///
    /// # Example
    ///
    /// ```
    /// # use matrix_rref::Matrix;
    /// let v = Matrix::row_vector(vec![5.0, 6.0, 7.0]).unwrap();
    /// assert_eq!(v.elem(2, 1), 6.0);
    /// ```
    pub fn elem(&self, i: usize, j: usize) -> T {
        if self.rows == 1 {
            return self.data[0][j].clone();
        }
        self.data[i][j].clone()
    }

    /// Returns row `i` as a slice.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i]
    }

    /// Returns column `j` as an owned vector, scanning all rows.
    pub fn col(&self, j: usize) -> Vec<T> {
        self.data.iter().map(|row| row[j].clone()).collect()
    }

    /// Replace row `i` in place.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Shape`] if `values.len() != cols`.
    pub fn set_row(&mut self, i: usize, values: Vec<T>) -> Result<(), MatrixError> {
        if values.len() != self.cols {
            return Err(MatrixError::Shape(format!(
                "Replacement row has length {} but expected {}",
                values.len(),
                self.cols
            )));
        }
        self.data[i] = values;
        Ok(())
    }

    /// Replace column `j` in place.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Shape`] if `values.len() != rows`.
    pub fn set_col(&mut self, j: usize, values: Vec<T>) -> Result<(), MatrixError> {
        if values.len() != self.rows {
            return Err(MatrixError::Shape(format!(
                "Replacement column has length {} but expected {}",
                values.len(),
                self.rows
            )));
        }
        for (i, value) in values.into_iter().enumerate() {
            self.data[i][j] = value;
        }
        Ok(())
    }

    /// Mutable access to the backing rows, for the row-reduction engine.
    /// Callers must preserve rectangularity.
    pub(crate) fn data_mut(&mut self) -> &mut [Vec<T>] {
        &mut self.data
    }

    /// True when the matrix is a 1xN row vector.
    pub fn is_row(&self) -> bool {
        self.rows == 1
    }

    /// True when the matrix is an Nx1 column vector.
    pub fn is_column(&self) -> bool {
        self.cols == 1
    }

    /// True when `rows == cols`.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The identity matrix of the same size as `self`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a non-square receiver.
    pub fn identity(&self) -> Result<Matrix<T>, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare(format!(
                "identity requires a square matrix, got {}x{}",
                self.rows, self.cols
            )));
        }

        let data = (0..self.rows)
            .map(|i| {
                (0..self.cols)
                    .map(|j| if i == j { T::one() } else { T::zero() })
                    .collect()
            })
            .collect();

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Horizontal concatenation of `self` and `other`.
    ///
    /// The precondition is identical shape (same `rows` *and* same `cols`),
    /// not merely a matching row count. The result keeps `rows` and has
    /// `cols * 2` columns.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Shape`] if the shapes differ.
    ///
    /// # Example
    ///
    /// ```
    /// # use matrix_rref::Matrix;
    /// let a = Matrix::try_with(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
    /// let b = Matrix::try_with(vec![vec![2.0, 3.0], vec![4.0, 5.0]]).unwrap();
    /// let wide = a.augment(&b).unwrap();
    /// assert_eq!(wide.cols(), 4);
    /// assert_eq!(wide.row(0), &[1.0, 0.0, 2.0, 3.0]);
    /// ```
    pub fn augment(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::Shape(format!(
                "augment requires matrices of identical shape, got {}x{} and {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }

        let mut data = self.data.clone();
        for (i, row) in data.iter_mut().enumerate() {
            row.extend_from_slice(other.row(i));
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols * 2,
            data,
        })
    }
}

impl<T: Element> fmt::Display for Matrix<T> {
    /// Renders a bracketed grid with columns right-aligned to the widest
    /// cell. Columns containing a negative value reserve one extra leading
    /// space, so positive and negative entries align on their digits. No
    /// trailing newline after the final row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cells: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|row| row.iter().map(|x| x.to_string()).collect())
            .collect();

        for j in 0..self.cols {
            let signed = cells.iter().any(|row| row[j].starts_with('-'));
            if signed {
                for row in cells.iter_mut() {
                    if !row[j].starts_with('-') {
                        row[j].insert(0, ' ');
                    }
                }
            }
        }

        let widths: Vec<usize> = (0..self.cols)
            .map(|j| cells.iter().map(|row| row[j].len()).max().unwrap_or(0))
            .collect();

        let lines = cells
            .iter()
            .map(|row| {
                let body = row
                    .iter()
                    .enumerate()
                    .map(|(j, cell)| format!("{:>width$}", cell, width = widths[j]))
                    .join(" ");
                format!("[{}]", body)
            })
            .join("\n");

        write!(f, "{}", lines)
    }
}
