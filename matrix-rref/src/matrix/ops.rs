//! Scalar and matrix multiplication, and integer powers.

use crate::elementwise::dot;
use crate::errors::MatrixError;
use crate::matrix::Matrix;
use crate::matrix::element::Element;

/// Right-hand operand of [`Matrix::multiply`].
///
/// An explicit variant tag instead of dispatching on the operand's runtime
/// kind: a bare number selects scalar multiplication, a matrix selects the
/// matrix product.
#[derive(Debug, Clone)]
pub enum Multiplicand<T> {
    Scalar(T),
    Matrix(Matrix<T>),
}

impl<T: Element> Matrix<T> {
    /// A new matrix with every element multiplied by `k`. Shape unchanged.
    pub fn scale(&self, k: T) -> Matrix<T> {
        let data = (0..self.rows())
            .map(|i| {
                (0..self.cols())
                    .map(|j| self.elem(i, j) * k.clone())
                    .collect()
            })
            .collect();

        // Rebuilding through the constructor keeps the invariants in one place.
        Matrix::try_with(data).expect("scaling preserves shape")
    }

    /// Standard matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] naming both shapes unless
    /// `self.cols == other.rows`.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.cols() != other.rows() {
            return Err(MatrixError::DimensionMismatch(format!(
                "cannot multiply matrices of sizes {}x{} and {}x{}",
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols()
            )));
        }

        let mut data = Vec::with_capacity(self.rows());
        for i in 0..self.rows() {
            let mut row = Vec::with_capacity(other.cols());
            for j in 0..other.cols() {
                row.push(dot(self.row(i), &other.col(j))?);
            }
            data.push(row);
        }

        Matrix::try_with(data)
    }

    /// Multiplication entry point dispatching on the operand's variant.
    pub fn multiply(&self, rhs: &Multiplicand<T>) -> Result<Matrix<T>, MatrixError> {
        match rhs {
            Multiplicand::Scalar(k) => Ok(self.scale(k.clone())),
            Multiplicand::Matrix(other) => self.matmul(other),
        }
    }

    /// Integer power of a square matrix.
    ///
    /// `0` yields the identity, a negative exponent inverts first, and a
    /// positive exponent multiplies repeatedly. The accumulator is seeded
    /// with an identity sized to match the operand.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a non-square receiver at any
    /// exponent, and propagates [`MatrixError::SingularMatrix`] from
    /// inversion for negative exponents.
    pub fn power(&self, exponent: i64) -> Result<Matrix<T>, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare(format!(
                "power requires a square matrix, got {}x{}",
                self.rows(),
                self.cols()
            )));
        }

        if exponent == 0 {
            return self.identity();
        }
        if exponent < 0 {
            return self.inverse()?.power(-exponent);
        }

        let mut acc = self.identity()?;
        for _ in 0..exponent {
            acc = acc.matmul(self)?;
        }
        Ok(acc)
    }
}
