//! # Matrix RREF
//!
//! A rectangular numeric matrix with linear-algebra operations layered on
//! top, and a row-reduction engine used for inversion via an augmented
//! matrix `[A | I]`.
//!
//! Elements are generic over the [`Element`] trait, so [`Matrix`] works with
//! `f64`, integer types, or any numeric type providing the ring operations
//! plus division.

pub mod elementwise;
pub mod errors;
pub mod matrix;
pub mod rref;

pub use errors::MatrixError;
pub use matrix::element::Element;
pub use matrix::ops::Multiplicand;
pub use matrix::Matrix;
