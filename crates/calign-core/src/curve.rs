// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::CurveError;
use crate::interpolate::{InterpolationMethod, interpolate_with};
use crate::timeline::point_range;

/// Parallel `values`/`points` arrays describing one sampled curve.
///
/// Construction guarantees equal lengths and finite, non-decreasing points.
/// Values may hold sentinels.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCurve"))]
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    values: Vec<f64>,
    points: Vec<f64>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCurve {
    values: Vec<f64>,
    points: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCurve> for Curve {
    type Error = CurveError;

    fn try_from(raw: RawCurve) -> Result<Self, Self::Error> {
        Curve::new(raw.values, raw.points)
    }
}

fn validate_points(points: &[f64]) -> Result<(), CurveError> {
    let mut prev: Option<f64> = None;
    for (index, &value) in points.iter().enumerate() {
        if !value.is_finite() {
            return Err(CurveError::NonFinitePoint { index, value });
        }
        if let Some(previous) = prev
            && value < previous
        {
            return Err(CurveError::UnsortedPoints {
                index,
                previous,
                value,
            });
        }
        prev = Some(value);
    }
    Ok(())
}

impl Curve {
    pub fn new(values: Vec<f64>, points: Vec<f64>) -> Result<Self, CurveError> {
        CurveError::check_parallel(values.len(), points.len())?;
        validate_points(&points)?;
        Ok(Self { values, points })
    }

    pub fn from_slices(values: &[f64], points: &[f64]) -> Result<Self, CurveError> {
        Self::new(values.to_vec(), points.to_vec())
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(first, last)` point of the curve; `None` when empty.
    pub fn range(&self) -> Option<(f64, f64)> {
        point_range(&self.points)
    }

    /// Evaluates the curve at `target`; see [`interpolate_with`].
    pub fn sample_at(&self, method: InterpolationMethod, target: f64) -> Option<f64> {
        interpolate_with(method, target, &self.values, &self.points)
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.values, self.points)
    }
}
