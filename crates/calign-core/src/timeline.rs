// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

/// Merges several point sequences into one strictly ascending, deduplicated sequence.
///
/// Semantics:
/// - Output length is at most the sum of the input lengths.
/// - Neither the order of the sequences nor the order inside a sequence matters.
/// - Non-finite points are skipped.
/// - `-0.0` and `0.0` collapse into a single point.
pub fn timestamp_union<'a, I>(point_sets: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let mut merged: Vec<f64> = point_sets
        .into_iter()
        .flat_map(|points| points.iter().copied())
        .filter(|point| point.is_finite())
        .collect();

    merged.sort_unstable_by(f64::total_cmp);
    merged.dedup_by(|a, b| *a == *b);
    merged
}

/// Inclusive `[first, last]` span of a sorted point sequence; `None` when empty.
pub fn point_range(points: &[f64]) -> Option<(f64, f64)> {
    Some((*points.first()?, *points.last()?))
}

/// Keeps only timeline points inside the range shared by every `(first, last)` span.
///
/// Returns an empty timeline when `ranges` is empty or the spans do not overlap.
pub fn clip_to_common_range(timeline: &[f64], ranges: &[(f64, f64)]) -> Vec<f64> {
    let Some(&(first, last)) = ranges.first() else {
        return Vec::new();
    };

    let (lower, upper) = ranges
        .iter()
        .skip(1)
        .fold((first, last), |(lo, hi), &(start, end)| {
            (lo.max(start), hi.min(end))
        });

    if lower > upper {
        return Vec::new();
    }

    timeline
        .iter()
        .copied()
        .filter(|&point| lower <= point && point <= upper)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{clip_to_common_range, point_range, timestamp_union};

    #[test]
    fn union_sorts_and_deduplicates() {
        let a = [0.0, 10.0, 11.0, 15.0, 20.0];
        let b = [1.0, 2.0, 3.0, 5.0, 7.0, 10.0];
        let merged = timestamp_union([&a[..], &b[..]]);
        assert_eq!(
            merged,
            vec![0.0, 1.0, 2.0, 3.0, 5.0, 7.0, 10.0, 11.0, 15.0, 20.0]
        );
    }

    #[test]
    fn union_is_commutative_and_idempotent() {
        let a = [5.0, 1.0, 3.0];
        let b = [2.0, 3.0, 9.0, 2.0];

        let ab = timestamp_union([&a[..], &b[..]]);
        let ba = timestamp_union([&b[..], &a[..]]);
        let again = timestamp_union([ab.as_slice()]);

        assert_eq!(ab, ba);
        assert_eq!(ab, again);
        assert!(ab.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn union_of_nothing_is_empty() {
        let none: [&[f64]; 0] = [];
        assert!(timestamp_union(none).is_empty());
        let empty: &[f64] = &[];
        assert!(timestamp_union([empty, empty]).is_empty());
    }

    #[test]
    fn union_skips_non_finite_points_and_merges_signed_zero() {
        let a = [f64::NAN, 1.0, -0.0];
        let b = [0.0, f64::INFINITY, 1.0];
        let merged = timestamp_union([&a[..], &b[..]]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0], 0.0);
        assert_eq!(merged[1], 1.0);
    }

    #[test]
    fn point_range_reports_first_and_last() {
        assert_eq!(point_range(&[]), None);
        assert_eq!(point_range(&[4.0]), Some((4.0, 4.0)));
        assert_eq!(point_range(&[1.0, 2.0, 8.0]), Some((1.0, 8.0)));
    }

    #[test]
    fn clipping_keeps_only_the_shared_span() {
        let timeline = [0.0, 1.0, 2.0, 3.0, 5.0, 7.0, 10.0, 11.0, 15.0, 20.0];
        let clipped = clip_to_common_range(&timeline, &[(0.0, 20.0), (1.0, 7.0)]);
        assert_eq!(clipped, vec![1.0, 2.0, 3.0, 5.0, 7.0]);
    }

    #[test]
    fn clipping_disjoint_or_missing_ranges_is_empty() {
        let timeline = [0.0, 10.0, 100.0, 200.0];
        assert!(clip_to_common_range(&timeline, &[(0.0, 20.0), (100.0, 300.0)]).is_empty());
        assert!(clip_to_common_range(&timeline, &[]).is_empty());
    }
}
