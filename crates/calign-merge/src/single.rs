// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use calign_core::{
    CurveError, ValidityInterval, ValidityRule, rebase_intervals, valid_intervals_with,
    values_by_intervals,
};

/// Validity filter for one curve that is not merged with others, such as a
/// well log keyed by depth.
///
/// Validity comes from the x channel alone. A sentinel in the y channel does
/// not split an interval and is passed through by [`Self::valid_y_values`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SingleCurveValidator {
    rule: ValidityRule,
    x_values: Vec<f64>,
    y_values: Vec<f64>,
    intervals: Vec<ValidityInterval>,
}

impl SingleCurveValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(rule: ValidityRule) -> Self {
        Self {
            rule,
            ..Self::default()
        }
    }

    pub fn rule(&self) -> ValidityRule {
        self.rule
    }

    /// Stores both channels and recomputes the validity intervals from `x_values`.
    ///
    /// On a length mismatch the previous points and intervals are kept.
    pub fn set_points(&mut self, x_values: Vec<f64>, y_values: Vec<f64>) -> Result<(), CurveError> {
        CurveError::check_parallel(x_values.len(), y_values.len())?;

        self.intervals = valid_intervals_with(&x_values, self.rule);
        self.x_values = x_values;
        self.y_values = y_values;

        log::trace!(
            "single curve: {} samples, {} valid intervals under rule {}",
            self.x_values.len(),
            self.intervals.len(),
            self.rule.as_str()
        );
        Ok(())
    }

    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    pub fn y_values(&self) -> &[f64] {
        &self.y_values
    }

    pub fn valid_intervals(&self) -> &[ValidityInterval] {
        &self.intervals
    }

    pub fn valid_x_values(&self) -> Vec<f64> {
        values_by_intervals(&self.x_values, &self.intervals)
    }

    pub fn valid_y_values(&self) -> Vec<f64> {
        values_by_intervals(&self.y_values, &self.intervals)
    }

    /// The validity intervals indexed into the filtered output instead of the stored arrays.
    pub fn filtered_intervals(&self) -> Vec<ValidityInterval> {
        rebase_intervals(&self.intervals)
    }

    /// Filters any channel parallel to the stored points, e.g. error bars.
    pub fn project(&self, values: &[f64]) -> Result<Vec<f64>, CurveError> {
        CurveError::check_parallel(values.len(), self.x_values.len())?;
        Ok(values_by_intervals(values, &self.intervals))
    }
}
