// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use calign_core::{
    Curve, CurveError, ValidityInterval, clip_to_common_range, from_sample, intervals_from_mask,
    timestamp_union, values_by_intervals,
};

use crate::config::AlignerConfig;

/// Lifecycle of a [`CurveAligner`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignerState {
    #[default]
    Empty,
    CurvesAdded,
    Computed,
}

/// Result of one alignment pass: the shared timeline, one series per curve
/// and the index runs where every curve has data.
///
/// Series entries are aligned 1:1 with the timeline; `None` marks a timeline
/// point where the curve has no usable value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlignedSeries {
    timeline: Vec<f64>,
    series: Vec<Vec<Option<f64>>>,
    intervals: Vec<ValidityInterval>,
}

impl AlignedSeries {
    pub fn timeline(&self) -> &[f64] {
        &self.timeline
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn series(&self, curve_idx: usize) -> Option<&[Option<f64>]> {
        self.series.get(curve_idx).map(Vec::as_slice)
    }

    /// Series encoded with [`calign_core::INVALID_VALUE`] in place of `None`.
    pub fn series_with_sentinel(&self, curve_idx: usize) -> Option<Vec<f64>> {
        self.series(curve_idx)
            .map(|samples| samples.iter().copied().map(from_sample).collect())
    }

    pub fn valid_intervals(&self) -> &[ValidityInterval] {
        &self.intervals
    }

    /// Timeline points inside the joint validity intervals.
    pub fn valid_timeline(&self) -> Vec<f64> {
        values_by_intervals(&self.timeline, &self.intervals)
    }

    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }
}

/// Aligns `curves` onto the union of their points.
///
/// Zero curves, or a timeline left empty after clipping, yield an empty result.
pub fn align(curves: &[Curve], config: &AlignerConfig) -> AlignedSeries {
    let mut timeline = timestamp_union(curves.iter().map(Curve::points));

    if config.clip_to_common_range {
        let ranges: Vec<(f64, f64)> = curves.iter().filter_map(Curve::range).collect();
        timeline = clip_to_common_range(&timeline, &ranges);
        if timeline.is_empty() && !ranges.is_empty() {
            log::debug!(
                "curves share no common range; {} spans clipped to an empty timeline",
                ranges.len()
            );
        }
    }

    if curves.is_empty() || timeline.is_empty() {
        return AlignedSeries::default();
    }

    let mut joint = vec![true; timeline.len()];
    let mut series = Vec::with_capacity(curves.len());

    for curve in curves {
        let mut samples = Vec::with_capacity(timeline.len());
        for (&point, valid) in timeline.iter().zip(joint.iter_mut()) {
            let sample = curve.sample_at(config.method, point);
            *valid &= sample.is_some();
            samples.push(sample);
        }
        series.push(samples);
    }

    let intervals = intervals_from_mask(&joint);

    AlignedSeries {
        timeline,
        series,
        intervals,
    }
}

/// Session that collects curves and aligns them on demand.
///
/// Adding a curve after [`CurveAligner::compute`] discards the previous
/// result until the next `compute`.
#[derive(Clone, Debug, Default)]
pub struct CurveAligner {
    config: AlignerConfig,
    curves: Vec<Curve>,
    state: AlignerState,
    result: AlignedSeries,
}

impl CurveAligner {
    pub fn new(config: AlignerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    pub fn state(&self) -> AlignerState {
        self.state
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Validates and stores a curve, returning its index.
    ///
    /// On error the session is left untouched.
    pub fn add_curve(&mut self, values: &[f64], points: &[f64]) -> Result<usize, CurveError> {
        let curve = Curve::from_slices(values, points).inspect_err(|err| {
            log::warn!("rejected curve #{}: {err}", self.curves.len());
        })?;
        Ok(self.add(curve))
    }

    /// Stores an already validated curve, returning its index.
    pub fn add(&mut self, curve: Curve) -> usize {
        self.curves.push(curve);
        self.result = AlignedSeries::default();
        self.state = AlignerState::CurvesAdded;
        self.curves.len() - 1
    }

    /// Rebuilds the timeline, every series and the joint intervals from scratch.
    pub fn compute(&mut self) -> &AlignedSeries {
        self.result = align(&self.curves, &self.config);
        self.state = AlignerState::Computed;

        log::debug!(
            "aligned {} curves onto {} points with {} joint intervals",
            self.curves.len(),
            self.result.timeline.len(),
            self.result.intervals.len()
        );

        &self.result
    }

    pub fn result(&self) -> &AlignedSeries {
        &self.result
    }

    pub fn timeline(&self) -> &[f64] {
        self.result.timeline()
    }

    /// Interpolated series of `curve_idx`; empty until computed, `None` for an unknown curve.
    pub fn interpolated_values(&self, curve_idx: usize) -> Option<&[Option<f64>]> {
        if curve_idx >= self.curves.len() {
            return None;
        }
        Some(self.result.series(curve_idx).unwrap_or(&[]))
    }

    pub fn interpolated_values_with_sentinel(&self, curve_idx: usize) -> Option<Vec<f64>> {
        self.interpolated_values(curve_idx)
            .map(|samples| samples.iter().copied().map(from_sample).collect())
    }

    pub fn valid_intervals(&self) -> &[ValidityInterval] {
        self.result.valid_intervals()
    }
}
