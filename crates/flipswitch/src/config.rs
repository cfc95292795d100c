//! Switch configuration.
//!
//! Every constant the control uses lives in one immutable [`SwitchConfig`]
//! so tests and hosts can override individual values without global state.
//! Partial YAML documents are accepted; missing fields keep their defaults.
//!
//! ```
//! use flipswitch::SwitchConfig;
//!
//! let config = SwitchConfig::from_yaml("margin: 8\nanimation_duration_ms: 250\n")
//!     .expect("valid config");
//! assert_eq!(config.margin, 8.0);
//! assert_eq!(config.animation_duration_ms, 250);
//! assert_eq!(config.golden_ratio, SwitchConfig::GOLDEN_RATIO);
//! ```

use crate::error::ConfigError;
use flipswitch_core::{Color, CubicBezier, Point, Shadow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Immutable configuration record for a switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchConfig {
    /// Gap between the control bounds and the track, on every side
    pub margin: f32,
    /// Minimum track width
    pub min_width: f32,
    /// Minimum track height
    pub min_height: f32,
    /// Track border width
    pub border_line_width: f32,
    /// Duration of every transition
    pub animation_duration_ms: u32,
    /// Divisor giving the resting knob width
    pub golden_ratio: f64,
    /// Divisor giving the wider knob while pressed
    pub pressed_ratio_divisor: f64,
    /// Accent color used when no tint is given
    pub default_tint: Color,
    /// Track border when off
    pub inactive_border: Color,
    /// Track fill when off
    pub host_background: Color,
    /// Knob fill
    pub knob_color: Color,
    /// Shadow under the knob
    pub knob_shadow: Shadow,
    /// Shadow around the knob highlight
    pub highlight_shadow: Shadow,
    /// Curve for refreshes caused by dragging
    pub drag_easing: CubicBezier,
    /// Curve for clicks and programmatic changes
    pub commit_easing: CubicBezier,
    /// Alpha multiplier for the "on" colors while disabled
    pub disabled_opacity: f32,
}

impl SwitchConfig {
    /// Default margin
    pub const MARGIN: f32 = 5.0;
    /// Default minimum track width
    pub const MIN_WIDTH: f32 = 32.0;
    /// Default minimum track height
    pub const MIN_HEIGHT: f32 = 20.0;
    /// Default border width
    pub const BORDER_LINE_WIDTH: f32 = 1.0;
    /// Default transition duration
    pub const ANIMATION_DURATION_MS: u32 = 400;
    /// Golden ratio
    pub const GOLDEN_RATIO: f64 = 1.618_033_988_75;
    /// Pressed knob divisor
    pub const PRESSED_RATIO_DIVISOR: f64 = 1.38;
    /// Ease-in/ease-out used while dragging
    pub const DRAG_EASING: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);
    /// Overshooting curve used for discrete commits
    pub const COMMIT_EASING: CubicBezier = CubicBezier::new(0.25, 1.5, 0.5, 1.0);

    /// Parse a YAML document and validate the result.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = self.check();
        if let Err(err) = &result {
            debug!(%err, "switch config rejected");
        }
        result
    }

    fn check(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("golden_ratio", self.golden_ratio),
            ("pressed_ratio_divisor", self.pressed_ratio_divisor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be a positive number, got {value}"),
                ));
            }
        }

        for (field, value) in [
            ("margin", self.margin),
            ("border_line_width", self.border_line_width),
            ("min_width", self.min_width),
            ("min_height", self.min_height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be non-negative, got {value}"),
                ));
            }
        }

        if self.animation_duration_ms == 0 {
            return Err(ConfigError::invalid(
                "animation_duration_ms",
                "must be greater than zero",
            ));
        }

        if !(0.0..=1.0).contains(&self.disabled_opacity) {
            return Err(ConfigError::invalid(
                "disabled_opacity",
                format!("must be within [0, 1], got {}", self.disabled_opacity),
            ));
        }

        for (field, curve) in [
            ("drag_easing", self.drag_easing),
            ("commit_easing", self.commit_easing),
        ] {
            if !(0.0..=1.0).contains(&curve.x1) || !(0.0..=1.0).contains(&curve.x2) {
                return Err(ConfigError::invalid(
                    field,
                    "control point x values must be within [0, 1]",
                ));
            }
        }

        Ok(())
    }
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            margin: Self::MARGIN,
            min_width: Self::MIN_WIDTH,
            min_height: Self::MIN_HEIGHT,
            border_line_width: Self::BORDER_LINE_WIDTH,
            animation_duration_ms: Self::ANIMATION_DURATION_MS,
            golden_ratio: Self::GOLDEN_RATIO,
            pressed_ratio_divisor: Self::PRESSED_RATIO_DIVISOR,
            default_tint: Color::from_rgba8(79, 220, 116, 255),
            inactive_border: Color::from_rgba8(0, 0, 0, 51),
            host_background: Color::from_rgba8(239, 239, 239, 255),
            knob_color: Color::WHITE,
            knob_shadow: Shadow::new(Color::from_rgba8(0, 0, 0, 77), 4.0, Point::new(0.0, 2.0)),
            highlight_shadow: Shadow::new(Color::from_rgba8(0, 0, 0, 89), 4.0, Point::ORIGIN),
            drag_easing: Self::DRAG_EASING,
            commit_easing: Self::COMMIT_EASING,
            disabled_opacity: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = SwitchConfig::default();
        assert_eq!(config.margin, 5.0);
        assert_eq!(config.min_width, 32.0);
        assert_eq!(config.min_height, 20.0);
        assert_eq!(config.border_line_width, 1.0);
        assert_eq!(config.animation_duration_ms, 400);
        assert_eq!(config.golden_ratio, 1.618_033_988_75);
        assert_eq!(config.pressed_ratio_divisor, 1.38);
        assert_eq!(config.default_tint.to_rgba8(), [79, 220, 116, 255]);
        assert_eq!(config.inactive_border.to_rgba8(), [0, 0, 0, 51]);
        assert_eq!(config.knob_shadow.offset, Point::new(0.0, 2.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = SwitchConfig::from_yaml("border_line_width: 2\n").unwrap();
        assert_eq!(config.border_line_width, 2.0);
        assert_eq!(config.margin, SwitchConfig::MARGIN);
    }

    #[test]
    fn test_from_yaml_easing_override() {
        let yaml = "commit_easing:\n  x1: 0.3\n  y1: 1.2\n  x2: 0.6\n  y2: 1.0\n";
        let config = SwitchConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.commit_easing, CubicBezier::new(0.3, 1.2, 0.6, 1.0));
        assert_eq!(config.drag_easing, SwitchConfig::DRAG_EASING);
    }

    #[test]
    fn test_from_yaml_empty_document_is_default() {
        let config = SwitchConfig::from_yaml("{}").unwrap();
        assert_eq!(config, SwitchConfig::default());
    }

    #[test]
    fn test_from_yaml_syntax_error() {
        let err = SwitchConfig::from_yaml("margin: [").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_validate_rejects_zero_ratio() {
        let config = SwitchConfig {
            golden_ratio: 0.0,
            ..SwitchConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "golden_ratio",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_negative_margin() {
        let err = SwitchConfig::from_yaml("margin: -1").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "margin", .. }));
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let config = SwitchConfig {
            animation_duration_ms: 0,
            ..SwitchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_opacity_out_of_range() {
        let config = SwitchConfig {
            disabled_opacity: 1.5,
            ..SwitchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bezier_x_out_of_range() {
        let config = SwitchConfig {
            drag_easing: CubicBezier::new(1.5, 0.0, 0.5, 1.0),
            ..SwitchConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("drag_easing"));
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = SwitchConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SwitchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
