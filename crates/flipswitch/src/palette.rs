//! Track colors for each switch state.

use crate::config::SwitchConfig;
use flipswitch_core::Color;
use serde::{Deserialize, Serialize};

/// Fill and border color of the background track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorPair {
    /// Track fill
    pub background: Color,
    /// Track border
    pub border: Color,
}

/// Resolves the track colors for the effective side and enabled state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    host_background: Color,
    inactive_border: Color,
    disabled_opacity: f32,
}

impl ColorPalette {
    /// Build a palette from the configuration.
    #[must_use]
    pub const fn from_config(config: &SwitchConfig) -> Self {
        Self {
            host_background: config.host_background,
            inactive_border: config.inactive_border,
            disabled_opacity: config.disabled_opacity,
        }
    }

    /// Colors for an enabled switch.
    ///
    /// On: fill and border are both the tint. Off: the host background with
    /// a translucent black border.
    #[must_use]
    pub const fn resolve(&self, effective_on: bool, tint: Color) -> ColorPair {
        if effective_on {
            ColorPair {
                background: tint,
                border: tint,
            }
        } else {
            ColorPair {
                background: self.host_background,
                border: self.inactive_border,
            }
        }
    }

    /// Colors taking the enabled flag into account. A disabled "on" pair is
    /// faded by the configured opacity; the "off" pair is already neutral.
    #[must_use]
    pub fn resolve_for(&self, effective_on: bool, enabled: bool, tint: Color) -> ColorPair {
        let pair = self.resolve(effective_on, tint);
        if enabled || !effective_on {
            return pair;
        }
        ColorPair {
            background: pair.background.fade(self.disabled_opacity),
            border: pair.border.fade(self.disabled_opacity),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::from_config(&SwitchConfig::default())
    }
}
