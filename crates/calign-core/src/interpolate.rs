// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::sentinel::{is_valid, to_sample};

/// How a curve is evaluated between two of its own points.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InterpolationMethod {
    /// Time-weighted linear blend of the two bracketing values.
    #[default]
    Linear,
    /// Hold the left bracketing value until the next point.
    StepLeft,
}

impl InterpolationMethod {
    /// Stable, user-facing label for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::StepLeft => "StepLeft",
        }
    }
}

/// Where a target falls relative to a curve's own points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    Exact(usize),
    /// `points[i] < target < points[i + 1]`.
    Bracket(usize),
    Outside,
}

/// Locates `target` in non-decreasing `points`.
///
/// Exact matches resolve to the first equal point, so runs of duplicate
/// points behave like the first of the run.
fn locate(target: f64, points: &[f64]) -> Position {
    let idx = points.partition_point(|&point| point < target);
    if idx < points.len() && points[idx] == target {
        Position::Exact(idx)
    } else if idx > 0 && idx < points.len() {
        Position::Bracket(idx - 1)
    } else {
        Position::Outside
    }
}

/// Linearly interpolates the curve `(values, points)` at `target`.
///
/// Semantics:
/// - Mismatched `values`/`points` lengths return `None`.
/// - An exact point match returns that value, or `None` when it is a sentinel.
/// - A bracketed target with a sentinel on either side returns `None`.
/// - Targets before the first point, after the last point, or on an empty
///   curve return `None`.
/// - A `Some` result is always finite.
///
/// `points` must be non-decreasing; this is not re-checked here.
pub fn interpolate(target: f64, values: &[f64], points: &[f64]) -> Option<f64> {
    interpolate_with(InterpolationMethod::Linear, target, values, points)
}

/// Evaluates the curve `(values, points)` at `target` with an explicit method.
///
/// Exact matches, length mismatches and out-of-range targets behave as in
/// [`interpolate`] for every method.
pub fn interpolate_with(
    method: InterpolationMethod,
    target: f64,
    values: &[f64],
    points: &[f64],
) -> Option<f64> {
    if values.len() != points.len() {
        return None;
    }

    match locate(target, points) {
        Position::Exact(idx) => to_sample(values[idx]),
        Position::Bracket(idx) => match method {
            InterpolationMethod::Linear => linear_between(target, idx, values, points),
            InterpolationMethod::StepLeft => to_sample(values[idx]),
        },
        Position::Outside => None,
    }
}

fn linear_between(target: f64, idx: usize, values: &[f64], points: &[f64]) -> Option<f64> {
    let (left, right) = (values[idx], values[idx + 1]);
    if !is_valid(left) || !is_valid(right) {
        return None;
    }

    let span = points[idx + 1] - points[idx];
    if !span.is_finite() {
        return None;
    }
    let w_left = (points[idx + 1] - target) / span;
    let w_right = (target - points[idx]) / span;

    to_sample(left * w_left + right * w_right)
}
