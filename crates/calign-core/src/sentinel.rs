// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

/// Sentinel written for "no data" when a caller asks for a float-encoded series.
pub const INVALID_VALUE: f64 = f64::INFINITY;

/// Rule deciding which finite samples count as valid.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValidityRule {
    /// Every finite value is valid.
    #[default]
    Finite,
    /// Finite and strictly positive, for consumers plotting on a log axis.
    FinitePositive,
}

impl ValidityRule {
    /// Stable, user-facing label for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Finite => "Finite",
            Self::FinitePositive => "FinitePositive",
        }
    }
}

/// Returns `false` for `+inf`, `-inf` and `NaN`, `true` for every other value.
#[inline]
pub fn is_valid(x: f64) -> bool {
    x.is_finite()
}

/// Applies `rule` on top of [`is_valid`].
#[inline]
pub fn is_valid_with(x: f64, rule: ValidityRule) -> bool {
    match rule {
        ValidityRule::Finite => is_valid(x),
        ValidityRule::FinitePositive => is_valid(x) && x > 0.0,
    }
}

/// Decodes a sentinel-encoded value.
#[inline]
pub fn to_sample(x: f64) -> Option<f64> {
    is_valid(x).then_some(x)
}

/// Encodes a sample, writing [`INVALID_VALUE`] for `None`.
#[inline]
pub fn from_sample(sample: Option<f64>) -> f64 {
    sample.unwrap_or(INVALID_VALUE)
}
