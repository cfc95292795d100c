//! Layer geometry for the switch.
//!
//! The control is drawn as three stacked layers: a rounded background track
//! inset by the margin, a knob, and a knob highlight that shares the knob's
//! geometry but carries its own shadow.

use crate::config::SwitchConfig;
use flipswitch_core::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Background track bounds and corner radius.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackGeometry {
    /// Track bounds in control coordinates
    pub rect: Rect,
    /// Corner radius
    pub radius: f32,
}

/// Geometry of all three layers for one bounds/state combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerGeometry {
    /// Background track
    pub background: TrackGeometry,
    /// Knob
    pub knob: Rect,
    /// Knob highlight, always equal to `knob`
    pub knob_highlight: Rect,
    /// Tallest the control should be laid out, from the resting knob width
    pub max_height: f32,
}

/// Compute layer geometry for `bounds`.
///
/// `effective_on` selects the side the knob rests on. Non-positive bounds
/// yield zero-sized layers rather than negative ones.
#[must_use]
pub fn compute_layout(
    bounds: Size,
    pressed: bool,
    effective_on: bool,
    config: &SwitchConfig,
) -> LayerGeometry {
    let margin = config.margin;
    let border = config.border_line_width;

    let track_height = bounds.height - 2.0 * margin;
    let background = TrackGeometry {
        rect: Rect::new(
            margin,
            margin,
            (bounds.width - 2.0 * margin).max(0.0),
            track_height.max(0.0),
        ),
        radius: ((track_height / 2.0).floor() - 1.0).max(0.0),
    };

    let knob_width = if pressed {
        pressed_knob_width(bounds.width, config)
    } else {
        resting_knob_width(bounds.width, config)
    };
    let knob_height = (bounds.height - 2.0 * margin - 2.0 * border).max(0.0);
    let knob_x = if effective_on {
        bounds.width - knob_width - border - margin
    } else {
        margin + border
    };
    let knob = Rect::new(knob_x.max(0.0), margin + border, knob_width, knob_height);

    LayerGeometry {
        background,
        knob,
        knob_highlight: knob,
        max_height: max_height(bounds.width, config),
    }
}

/// Width available to the knob inside the track border.
fn inner_width(width: f32, config: &SwitchConfig) -> f64 {
    f64::from(width - 2.0 * config.margin - 2.0 * config.border_line_width)
}

/// Knob width at rest: inner width divided by the golden ratio, floored.
#[must_use]
pub fn resting_knob_width(width: f32, config: &SwitchConfig) -> f32 {
    (inner_width(width, config) / config.golden_ratio)
        .floor()
        .max(0.0) as f32
}

/// Knob width while pressed, wider than at rest.
#[must_use]
pub fn pressed_knob_width(width: f32, config: &SwitchConfig) -> f32 {
    (inner_width(width, config) / config.pressed_ratio_divisor)
        .floor()
        .max(0.0) as f32
}

/// Maximum control height for `width`. Independent of the pressed state so
/// the control never grows when the knob widens.
#[must_use]
pub fn max_height(width: f32, config: &SwitchConfig) -> f32 {
    resting_knob_width(width, config) + 2.0 * config.margin + 2.0 * config.border_line_width
}

/// Pointer x at or beyond which a drag previews the "on" side. Truncated
/// toward zero, so a control narrower than its margins has midpoint 0.
#[must_use]
pub fn drag_midpoint(width: f32, config: &SwitchConfig) -> f32 {
    ((width - 2.0 * config.margin) / 2.0).trunc()
}

/// Corner radius for a knob rect.
#[must_use]
pub fn knob_radius(knob: &Rect) -> f32 {
    ((knob.height / 2.0).floor() - 1.0).max(0.0)
}
