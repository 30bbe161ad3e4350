// SPDX-License-Identifier: MIT OR Apache-2.0

#![no_main]

#[path = "common.rs"]
mod common;

use calign_merge::{AlignerConfig, CurveAligner, InterpolationMethod};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut cursor = common::ByteCursor::new(data);

    let curve_count = common::bounded(cursor.next_u8(), 0, 6);
    let flags = cursor.next_u8();
    let config = AlignerConfig::default()
        .with_method(if flags & 1 == 0 {
            InterpolationMethod::Linear
        } else {
            InterpolationMethod::StepLeft
        })
        .with_clip_to_common_range(flags & 2 != 0);

    let mut aligner = CurveAligner::new(config);
    for _ in 0..curve_count {
        let len = common::bounded(cursor.next_u8(), 0, 48);
        let points = common::take_sorted_points(&mut cursor, len);
        let values = common::take_values(&mut cursor, len);
        let _ = aligner.add_curve(&values, &points);
    }

    let first = aligner.compute().clone();
    let second = aligner.compute().clone();
    assert_eq!(first, second);

    let timeline_len = first.timeline().len();
    for idx in 0..first.series_count() {
        let series = first.series(idx).unwrap_or(&[]);
        assert_eq!(series.len(), timeline_len);
    }
    for interval in first.valid_intervals() {
        assert!(interval.start <= interval.end && interval.end < timeline_len);
    }
});
