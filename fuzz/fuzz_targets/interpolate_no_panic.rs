// SPDX-License-Identifier: MIT OR Apache-2.0

#![no_main]

#[path = "common.rs"]
mod common;

use calign_core::{InterpolationMethod, interpolate_with};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut cursor = common::ByteCursor::new(data);

    let value_len = common::bounded(cursor.next_u8(), 0, 64);
    let point_len = match cursor.next_u8() % 4 {
        0 => value_len.saturating_add(1),
        1 => value_len.saturating_sub(1),
        _ => value_len,
    };
    let method = if cursor.next_u8() & 1 == 0 {
        InterpolationMethod::Linear
    } else {
        InterpolationMethod::StepLeft
    };
    let unsorted = cursor.next_u8() % 5 == 0;

    let values = common::take_values(&mut cursor, value_len);
    let mut points = common::take_values(&mut cursor, point_len);
    if !unsorted {
        points.retain(|p| p.is_finite());
        points.sort_by(f64::total_cmp);
    }

    while !cursor.is_exhausted() {
        let target = cursor.next_f64();
        if let Some(sample) = interpolate_with(method, target, &values, &points) {
            assert!(sample.is_finite());
        }
    }
});
