// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

pub mod curve;
pub mod error;
pub mod interpolate;
pub mod intervals;
pub mod sentinel;
pub mod timeline;

pub use curve::Curve;
pub use error::CurveError;
pub use interpolate::{InterpolationMethod, interpolate, interpolate_with};
pub use intervals::{
    ValidityInterval, intervals_from_mask, rebase_intervals, valid_intervals,
    valid_intervals_with, values_by_intervals,
};
pub use sentinel::{INVALID_VALUE, ValidityRule, from_sample, is_valid, is_valid_with, to_sample};
pub use timeline::{clip_to_common_range, point_range, timestamp_union};
