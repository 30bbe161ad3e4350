// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::sentinel::{ValidityRule, is_valid_with};

/// Closed index range `[start, end]` over a sequence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValidityInterval {
    pub start: usize,
    pub end: usize,
}

impl ValidityInterval {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of indices covered; zero for an inverted interval (`start > end`).
    pub const fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub const fn contains(&self, idx: usize) -> bool {
        self.start <= idx && idx <= self.end
    }
}

/// Scans `len` positions once and returns the maximal runs where `is_valid_at` holds.
///
/// Runs are ordered, non-overlapping and separated by at least one invalid index.
fn scan_runs(len: usize, mut is_valid_at: impl FnMut(usize) -> bool) -> Vec<ValidityInterval> {
    let mut intervals = Vec::new();
    let mut open_start: Option<usize> = None;

    for idx in 0..len {
        match (is_valid_at(idx), open_start) {
            (true, None) => open_start = Some(idx),
            (false, Some(start)) => {
                intervals.push(ValidityInterval::new(start, idx - 1));
                open_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = open_start {
        intervals.push(ValidityInterval::new(start, len - 1));
    }

    intervals
}

/// Returns the maximal runs of valid (finite) values.
///
/// Semantics:
/// - Empty input returns no intervals.
/// - All-invalid input returns no intervals.
/// - All-valid input of length `n` returns `[[0, n - 1]]`.
pub fn valid_intervals(values: &[f64]) -> Vec<ValidityInterval> {
    valid_intervals_with(values, ValidityRule::Finite)
}

/// Same scan as [`valid_intervals`] under an explicit [`ValidityRule`].
pub fn valid_intervals_with(values: &[f64], rule: ValidityRule) -> Vec<ValidityInterval> {
    scan_runs(values.len(), |idx| is_valid_with(values[idx], rule))
}

/// Returns the maximal runs of `true` in a precomputed validity mask.
pub fn intervals_from_mask(mask: &[bool]) -> Vec<ValidityInterval> {
    scan_runs(mask.len(), |idx| mask[idx])
}

/// Concatenates the entries of `values` covered by each interval, in order.
///
/// Intervals reaching past the end of `values` are truncated to what exists;
/// inverted intervals are skipped.
pub fn values_by_intervals<T: Copy>(values: &[T], intervals: &[ValidityInterval]) -> Vec<T> {
    let total: usize = intervals.iter().map(ValidityInterval::len).sum();
    let mut out = Vec::with_capacity(total.min(values.len()));

    for interval in intervals {
        if interval.is_empty() || interval.start >= values.len() {
            continue;
        }
        let end = interval.end.min(values.len() - 1);
        out.extend_from_slice(&values[interval.start..=end]);
    }

    out
}

/// Re-expresses intervals as closed ranges into the output of [`values_by_intervals`].
///
/// Example: `[[1, 2], [5, 7]]` becomes `[[0, 1], [2, 4]]`. Inverted
/// intervals contribute nothing to the filtered output and are dropped.
pub fn rebase_intervals(intervals: &[ValidityInterval]) -> Vec<ValidityInterval> {
    let mut offset = 0usize;
    intervals
        .iter()
        .filter(|interval| !interval.is_empty())
        .map(|interval| {
            let rebased = ValidityInterval::new(offset, offset + interval.len() - 1);
            offset += interval.len();
            rebased
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        ValidityInterval, intervals_from_mask, rebase_intervals, valid_intervals,
        valid_intervals_with, values_by_intervals,
    };
    use crate::sentinel::ValidityRule;

    const INF: f64 = f64::INFINITY;

    fn iv(start: usize, end: usize) -> ValidityInterval {
        ValidityInterval::new(start, end)
    }

    #[test]
    fn empty_and_all_invalid_inputs_have_no_intervals() {
        assert!(valid_intervals(&[]).is_empty());
        assert!(valid_intervals(&[INF, f64::NAN, f64::NEG_INFINITY]).is_empty());
        assert!(intervals_from_mask(&[]).is_empty());
        assert!(intervals_from_mask(&[false, false]).is_empty());
    }

    #[test]
    fn all_valid_input_is_one_interval() {
        assert_eq!(valid_intervals(&[1.0]), vec![iv(0, 0)]);
        assert_eq!(valid_intervals(&[1.0, 2.0, 3.0, 4.0]), vec![iv(0, 3)]);
    }

    #[test]
    fn runs_open_and_close_around_sentinels() {
        let values = [INF, 1.0, 2.0, f64::NAN, 3.0, INF, INF, 4.0, 5.0];
        assert_eq!(
            valid_intervals(&values),
            vec![iv(1, 2), iv(4, 4), iv(7, 8)]
        );

        let values = [1.0, INF, 2.0];
        assert_eq!(valid_intervals(&values), vec![iv(0, 0), iv(2, 2)]);
    }

    #[test]
    fn positive_rule_splits_on_non_positive_values() {
        let values = [1.0, 0.0, 2.0, 3.0, -1.0, 4.0];
        assert_eq!(
            valid_intervals_with(&values, ValidityRule::FinitePositive),
            vec![iv(0, 0), iv(2, 3), iv(5, 5)]
        );
        assert_eq!(
            valid_intervals_with(&values, ValidityRule::Finite),
            vec![iv(0, 5)]
        );
    }

    #[test]
    fn mask_scan_matches_value_scan() {
        let values = [INF, 1.0, 2.0, INF, 3.0];
        let mask: Vec<bool> = values.iter().map(|v| v.is_finite()).collect();
        assert_eq!(intervals_from_mask(&mask), valid_intervals(&values));
    }

    #[test]
    fn values_by_intervals_concatenates_in_order() {
        let values = [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0];
        let intervals = [iv(1, 2), iv(5, 7)];
        assert_eq!(
            values_by_intervals(&values, &intervals),
            vec![11.0, 12.0, 15.0, 16.0, 17.0]
        );
        assert!(values_by_intervals(&values, &[]).is_empty());
    }

    #[test]
    fn values_by_intervals_truncates_out_of_range_intervals() {
        let values = [1, 2, 3];
        assert_eq!(values_by_intervals(&values, &[iv(1, 9)]), vec![2, 3]);
        assert!(values_by_intervals(&values, &[iv(5, 6)]).is_empty());
    }

    #[test]
    fn rebased_intervals_index_into_filtered_output() {
        let intervals = [iv(1, 2), iv(5, 7)];
        assert_eq!(rebase_intervals(&intervals), vec![iv(0, 1), iv(2, 4)]);
        assert!(rebase_intervals(&[]).is_empty());
    }

    #[test]
    fn inverted_intervals_are_empty_and_skipped_by_helpers() {
        let inverted = iv(3, 1);
        assert!(inverted.is_empty());
        assert_eq!(inverted.len(), 0);
        assert!(!inverted.contains(2));

        let values = [1.0, 2.0, 3.0, 4.0];
        assert!(values_by_intervals(&values, &[inverted]).is_empty());
        assert_eq!(
            values_by_intervals(&values, &[iv(0, 0), inverted, iv(2, 3)]),
            vec![1.0, 3.0, 4.0]
        );

        assert!(rebase_intervals(&[inverted]).is_empty());
        assert_eq!(
            rebase_intervals(&[iv(0, 0), inverted, iv(2, 3)]),
            vec![iv(0, 0), iv(1, 2)]
        );
    }

    #[test]
    fn interval_len_and_contains() {
        let interval = iv(3, 5);
        assert_eq!(interval.len(), 3);
        assert!(interval.contains(3));
        assert!(interval.contains(5));
        assert!(!interval.contains(6));
        assert_eq!(iv(4, 4).len(), 1);
        assert!(!iv(4, 4).is_empty());
    }
}
