#[derive(thiserror::Error, Debug)]
pub enum MatrixError {
    /// Error when constructing from empty or ragged input, or when a
    /// row/column setter or augmentation receives the wrong shape.
    #[error("Shape: {0}")]
    Shape(String),
    /// Error when identity, power or inverse is requested on a non-square matrix.
    #[error("NotSquare: {0}")]
    NotSquare(String),
    /// Error when the inner dimensions of a matrix product do not match.
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    /// Error when elementwise or dot operations receive sequences of unequal length.
    #[error("LengthMismatch: {0}")]
    LengthMismatch(String),
    /// Error when inversion finds a pivot column with no nonzero candidate.
    #[error("SingularMatrix: {0}")]
    SingularMatrix(String),
}
