// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas configuration.
//!
//! Every field has a default, so a configuration file only needs to list what
//! it changes:
//!
//! ```
//! use pinmark_canvas::CanvasConfig;
//!
//! let config = CanvasConfig::from_json_str(r#"{ "device_pixel_ratio": 2.0 }"#).unwrap();
//! assert_eq!(config.device_pixel_ratio, 2.0);
//! assert_eq!(config.zoom_in_factor, 1.1);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a [`CanvasConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON could not be parsed.
    #[error("invalid canvas config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field that must be finite and positive was not.
    #[error("`{field}` must be finite and greater than zero, got {value}")]
    NotPositive {
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// A field that must be finite and non-negative was not.
    #[error("`{field}` must be finite and not negative, got {value}")]
    Negative {
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// An opacity outside `[0, 1]`.
    #[error("`{field}` must be between 0 and 1, got {value}")]
    OpacityOutOfRange {
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// `min_scale` is greater than `max_scale`.
    #[error("min_scale {min} is greater than max_scale {max}")]
    InvertedScaleLimits {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
}

/// Tunables for interaction and overlay styling.
///
/// Distances are in device pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Zoom factor applied per wheel notch towards the user (negative delta).
    pub zoom_in_factor: f64,
    /// Zoom factor applied per wheel notch away from the user (positive delta).
    pub zoom_out_factor: f64,
    /// Smallest allowed scale, if any.
    pub min_scale: Option<f64>,
    /// Largest allowed scale, if any.
    pub max_scale: Option<f64>,
    /// Physical pixels per logical pixel. Upper bound for the initial fit.
    pub device_pixel_ratio: f64,
    /// Marker radius.
    pub marker_radius: f64,
    /// Radius of the active marker.
    pub active_marker_radius: f64,
    /// Marker outline width.
    pub marker_stroke_width: f64,
    /// Extra distance accepted by marker hit tests.
    pub hit_tolerance: f64,
    /// Largest pointer travel between press and release that still counts as a click.
    pub click_slop: f64,
    /// Fill opacity of the other markers while one is active.
    pub dimmed_opacity: f64,
    /// Fill opacity of a marker while it is being dragged.
    pub dragged_opacity: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            zoom_in_factor: 1.1,
            zoom_out_factor: 0.9,
            min_scale: None,
            max_scale: None,
            device_pixel_ratio: 1.0,
            marker_radius: 10.0,
            active_marker_radius: 14.0,
            marker_stroke_width: 3.0,
            hit_tolerance: 0.0,
            click_slop: 3.0,
            dimmed_opacity: 0.5,
            dragged_opacity: 0.2,
        }
    }
}

impl CanvasConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("zoom_in_factor", self.zoom_in_factor)?;
        positive("zoom_out_factor", self.zoom_out_factor)?;
        if let Some(min) = self.min_scale {
            positive("min_scale", min)?;
        }
        if let Some(max) = self.max_scale {
            positive("max_scale", max)?;
        }
        if let (Some(min), Some(max)) = (self.min_scale, self.max_scale)
            && min > max
        {
            return Err(ConfigError::InvertedScaleLimits { min, max });
        }
        positive("device_pixel_ratio", self.device_pixel_ratio)?;
        positive("marker_radius", self.marker_radius)?;
        positive("active_marker_radius", self.active_marker_radius)?;
        non_negative("marker_stroke_width", self.marker_stroke_width)?;
        non_negative("hit_tolerance", self.hit_tolerance)?;
        non_negative("click_slop", self.click_slop)?;
        opacity("dimmed_opacity", self.dimmed_opacity)?;
        opacity("dragged_opacity", self.dragged_opacity)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn opacity(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OpacityOutOfRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        CanvasConfig::default().validate().unwrap();
    }

    #[test]
    fn empty_json_gives_defaults() {
        assert_eq!(
            CanvasConfig::from_json_str("{}").unwrap(),
            CanvasConfig::default()
        );
    }

    #[test]
    fn json_round_trip() {
        let config = CanvasConfig {
            min_scale: Some(0.25),
            max_scale: Some(8.0),
            ..CanvasConfig::default()
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(CanvasConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn rejects_bad_factors() {
        let err = CanvasConfig::from_json_str(r#"{ "zoom_in_factor": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotPositive {
                field: "zoom_in_factor",
                ..
            }
        ));
    }

    #[test]
    fn rejects_inverted_limits() {
        let config = CanvasConfig {
            min_scale: Some(4.0),
            max_scale: Some(2.0),
            ..CanvasConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedScaleLimits { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let config = CanvasConfig {
            dimmed_opacity: 1.5,
            ..CanvasConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OpacityOutOfRange { .. })
        ));

        let config = CanvasConfig {
            click_slop: -1.0,
            ..CanvasConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Negative { .. })));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            CanvasConfig::from_json_str("{ nope"),
            Err(ConfigError::Parse(_))
        ));
    }
}
