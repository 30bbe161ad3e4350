// SPDX-License-Identifier: MIT OR Apache-2.0

#![no_main]

#[path = "common.rs"]
mod common;

use calign_merge::{SingleCurveValidator, ValidityRule};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut cursor = common::ByteCursor::new(data);

    let rule = if cursor.next_u8() & 1 == 0 {
        ValidityRule::Finite
    } else {
        ValidityRule::FinitePositive
    };
    let x_len = common::bounded(cursor.next_u8(), 0, 96);
    let y_len = if cursor.next_u8() % 6 == 0 {
        x_len.saturating_add(1)
    } else {
        x_len
    };

    let x_values = common::take_values(&mut cursor, x_len);
    let y_values = common::take_values(&mut cursor, y_len);

    let mut validator = SingleCurveValidator::with_rule(rule);
    if validator.set_points(x_values, y_values).is_err() {
        assert!(validator.valid_intervals().is_empty());
        return;
    }

    let filtered_x = validator.valid_x_values();
    let filtered_y = validator.valid_y_values();
    assert_eq!(filtered_x.len(), filtered_y.len());

    if let Some(last) = validator.filtered_intervals().last() {
        assert_eq!(last.end + 1, filtered_x.len());
    }
});
