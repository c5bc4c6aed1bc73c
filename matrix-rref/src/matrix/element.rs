use num_traits::{One, Zero};

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// The numeric operations a matrix element must provide.
///
/// Deliberately does not require `Ord`, so `f64` qualifies. Zero tests in
/// the row-reduction engine are exact (`== T::zero()`).
pub trait Element: // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + fmt::Display
    + fmt::Debug
{
}

impl<T> Element for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Neg<Output = T>
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + fmt::Display
        + fmt::Debug
{
}
