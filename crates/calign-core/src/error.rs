// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

/// Structured error type for curve construction and validation.
///
/// # Error Philosophy
/// - Only structural problems (shape and ordering of the input arrays) are errors.
/// - Missing data is never an error; it travels as `None` or a sentinel value.
/// - Variants are structured for reliable pattern matching.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("length mismatch: values has {values} entries, points has {points}")]
    LengthMismatch { values: usize, points: usize },
    #[error("non-finite point: points[{index}]={value}")]
    NonFinitePoint { index: usize, value: f64 },
    #[error(
        "points must be non-decreasing: points[{index}]={value} is below previous={previous}"
    )]
    UnsortedPoints {
        index: usize,
        previous: f64,
        value: f64,
    },
}

impl CurveError {
    /// Creates a `CurveError::LengthMismatch`.
    pub fn length_mismatch(values: usize, points: usize) -> Self {
        Self::LengthMismatch { values, points }
    }

    /// Returns an error when two parallel channels differ in length.
    pub fn check_parallel(values: usize, points: usize) -> Result<(), Self> {
        if values == points {
            Ok(())
        } else {
            Err(Self::length_mismatch(values, points))
        }
    }
}
