// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use calign_core::InterpolationMethod;

/// Configuration for [`crate::CurveAligner`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlignerConfig {
    pub method: InterpolationMethod,
    /// Drop timeline points outside the span every curve covers.
    pub clip_to_common_range: bool,
}

impl AlignerConfig {
    pub fn with_method(mut self, method: InterpolationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_clip_to_common_range(mut self, clip: bool) -> Self {
        self.clip_to_common_range = clip;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::AlignerConfig;
    use calign_core::InterpolationMethod;

    #[test]
    fn default_is_linear_over_the_full_union() {
        let config = AlignerConfig::default();
        assert_eq!(config.method, InterpolationMethod::Linear);
        assert!(!config.clip_to_common_range);
    }

    #[test]
    fn builders_set_fields() {
        let config = AlignerConfig::default()
            .with_method(InterpolationMethod::StepLeft)
            .with_clip_to_common_range(true);
        assert_eq!(config.method, InterpolationMethod::StepLeft);
        assert!(config.clip_to_common_range);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AlignerConfig = serde_json::from_str(r#"{"method":"StepLeft"}"#)
            .expect("partial config should deserialize");
        assert_eq!(config.method, InterpolationMethod::StepLeft);
        assert!(!config.clip_to_common_range);
    }
}
