//! # Elementwise Module
//!
//! Elementwise addition and multiplication over operands that are either a
//! scalar or a sequence of numbers, plus the dot product.

use crate::errors::MatrixError;
use crate::matrix::element::Element;

use serde::{Deserialize, Serialize};

/// A scalar-or-sequence operand for the elementwise operations.
///
/// The explicit variant tag replaces dispatching on the operand's runtime
/// kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand<T> {
    Scalar(T),
    Sequence(Vec<T>),
}

impl<T> From<Vec<T>> for Operand<T> {
    fn from(values: Vec<T>) -> Self {
        Operand::Sequence(values)
    }
}

/// Elementwise addition.
///
/// scalar + scalar -> scalar; scalar + sequence -> sequence with the scalar
/// broadcast to every element; sequence + sequence -> elementwise sum.
///
/// # Errors
///
/// Returns [`MatrixError::LengthMismatch`] if two sequences differ in length.
pub fn ew_add<T: Element>(a: &Operand<T>, b: &Operand<T>) -> Result<Operand<T>, MatrixError> {
    combine(a, b, "add", |x, y| x + y)
}

/// Elementwise multiplication, with the same broadcasting rules as [`ew_add`].
///
/// # Errors
///
/// Returns [`MatrixError::LengthMismatch`] if two sequences differ in length.
pub fn ew_mul<T: Element>(a: &Operand<T>, b: &Operand<T>) -> Result<Operand<T>, MatrixError> {
    combine(a, b, "multiply", |x, y| x * y)
}

/// Sum of elementwise products of two equal-length vectors.
///
/// # Errors
///
/// Returns [`MatrixError::LengthMismatch`] on unequal lengths.
///
/// # Example
///
/// ```
/// # use matrix_rref::elementwise::dot;
/// assert_eq!(dot(&[1.0, 2.0], &[3.0, 4.0]).unwrap(), 11.0);
/// assert!(dot(&[1.0], &[1.0, 2.0]).is_err());
/// ```
pub fn dot<T: Element>(v1: &[T], v2: &[T]) -> Result<T, MatrixError> {
    if v1.len() != v2.len() {
        return Err(MatrixError::LengthMismatch(format!(
            "cannot compute the dot product of vectors of length {} and {}",
            v1.len(),
            v2.len()
        )));
    }

    Ok(v1
        .iter()
        .zip(v2.iter())
        .fold(T::zero(), |acc, (i, j)| acc + i.clone() * j.clone()))
}

fn combine<T: Element>(
    a: &Operand<T>,
    b: &Operand<T>,
    verb: &str,
    op: impl Fn(T, T) -> T,
) -> Result<Operand<T>, MatrixError> {
    let result = match (a, b) {
        (Operand::Scalar(x), Operand::Scalar(y)) => Operand::Scalar(op(x.clone(), y.clone())),
        (Operand::Scalar(x), Operand::Sequence(ys)) => {
            Operand::Sequence(ys.iter().map(|y| op(x.clone(), y.clone())).collect())
        }
        (Operand::Sequence(xs), Operand::Scalar(y)) => {
            Operand::Sequence(xs.iter().map(|x| op(x.clone(), y.clone())).collect())
        }
        (Operand::Sequence(xs), Operand::Sequence(ys)) => {
            if xs.len() != ys.len() {
                return Err(MatrixError::LengthMismatch(format!(
                    "cannot elementwise {} sequences of length {} and {}",
                    verb,
                    xs.len(),
                    ys.len()
                )));
            }
            Operand::Sequence(
                xs.iter()
                    .zip(ys.iter())
                    .map(|(x, y)| op(x.clone(), y.clone()))
                    .collect(),
            )
        }
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::TestResult;
    use quickcheck::quickcheck;

    #[test]
    fn test_ew_add_scalar_scalar() {
        let result = ew_add(&Operand::Scalar(2.0), &Operand::Scalar(3.0)).unwrap();
        assert_eq!(result, Operand::Scalar(5.0));
    }

    #[test]
    fn test_ew_add_broadcast() {
        // ew_add(3, [1, 2, 3]) -> [4, 5, 6]
        let result = ew_add(
            &Operand::Scalar(3.0),
            &Operand::Sequence(vec![1.0, 2.0, 3.0]),
        )
        .unwrap();
        assert_eq!(result, Operand::Sequence(vec![4.0, 5.0, 6.0]));

        // Broadcasting works from either side.
        let result = ew_add(
            &Operand::Sequence(vec![1.0, 2.0, 3.0]),
            &Operand::Scalar(3.0),
        )
        .unwrap();
        assert_eq!(result, Operand::Sequence(vec![4.0, 5.0, 6.0]));
    }

    #[test]
    fn test_ew_mul_sequences() {
        // ew_mul([1, 2], [3, 4]) -> [3, 8]
        let result = ew_mul(
            &Operand::Sequence(vec![1.0, 2.0]),
            &Operand::Sequence(vec![3.0, 4.0]),
        )
        .unwrap();
        assert_eq!(result, Operand::Sequence(vec![3.0, 8.0]));
    }

    #[test]
    fn test_ew_add_length_mismatch() {
        let result = ew_add(
            &Operand::Sequence(vec![1.0, 2.0]),
            &Operand::Sequence(vec![1.0, 2.0, 3.0]),
        );
        assert!(matches!(result, Err(MatrixError::LengthMismatch(_))));
    }

    #[test]
    fn test_dot() {
        // 1*3 + 2*4 = 11
        assert_eq!(dot(&[1.0, 2.0], &[3.0, 4.0]).unwrap(), 11.0);
        assert!(matches!(
            dot(&[1.0, 2.0], &[1.0]),
            Err(MatrixError::LengthMismatch(_))
        ));
    }

    quickcheck! {
        fn prop_broadcast_preserves_length(k: i64, values: Vec<i64>) -> bool {
            match ew_add(&Operand::Scalar(k), &Operand::Sequence(values.clone())) {
                Ok(Operand::Sequence(result)) => result.len() == values.len(),
                _ => false,
            }
        }

        fn prop_dot_is_symmetric(pairs: Vec<(i64, i64)>) -> TestResult {
            // Keep values small enough that i64 products cannot overflow.
            let a: Vec<i64> = pairs.iter().map(|(x, _)| x % 1000).collect();
            let b: Vec<i64> = pairs.iter().map(|(_, y)| y % 1000).collect();
            match (dot(&a, &b), dot(&b, &a)) {
                (Ok(x), Ok(y)) => TestResult::from_bool(x == y),
                _ => TestResult::error("dot on equal-length vectors must not fail"),
            }
        }

        fn prop_unequal_lengths_rejected(a: Vec<i64>, b: Vec<i64>) -> TestResult {
            if a.len() == b.len() {
                return TestResult::discard();
            }
            let sum = ew_add(&Operand::Sequence(a.clone()), &Operand::Sequence(b.clone()));
            let product = ew_mul(&Operand::Sequence(a), &Operand::Sequence(b));
            TestResult::from_bool(sum.is_err() && product.is_err())
        }
    }
}
