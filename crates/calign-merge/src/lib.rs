// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

pub mod aligner;
pub mod config;
pub mod single;

pub use aligner::{AlignedSeries, AlignerState, CurveAligner, align};
pub use calign_core::{Curve, CurveError, InterpolationMethod, ValidityInterval, ValidityRule};
pub use config::AlignerConfig;
pub use single::SingleCurveValidator;
