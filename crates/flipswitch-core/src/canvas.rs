//! Paint abstraction and a recording backend.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Drop shadow cast by a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color
    pub color: Color,
    /// Blur radius in pixels
    pub blur_radius: f32,
    /// Offset from the shape
    pub offset: Point,
}

impl Shadow {
    /// Create a new shadow.
    #[must_use]
    pub const fn new(color: Color, blur_radius: f32, offset: Point) -> Self {
        Self {
            color,
            blur_radius,
            offset,
        }
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Fill a rectangle with uniformly rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    /// Stroke the outline of a rounded rectangle.
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, width: f32);

    /// Paint the drop shadow of a rounded rectangle.
    fn draw_shadow(&mut self, rect: Rect, radius: f32, shadow: Shadow);
}

/// A recorded paint operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled rounded rectangle
    Fill {
        /// Bounds
        rect: Rect,
        /// Corner radius
        radius: f32,
        /// Fill color
        color: Color,
    },
    /// Stroked rounded rectangle
    Stroke {
        /// Bounds
        rect: Rect,
        /// Corner radius
        radius: f32,
        /// Stroke color
        color: Color,
        /// Line width
        width: f32,
    },
    /// Drop shadow
    Shadow {
        /// Bounds of the shape casting the shadow
        rect: Rect,
        /// Corner radius
        radius: f32,
        /// Shadow parameters
        shadow: Shadow,
    },
}

/// Canvas that records draw commands instead of rendering.
///
/// Useful for testing and for hosts that replay commands on their own
/// backend.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Fill {
            rect,
            radius,
            color,
        });
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::Stroke {
            rect,
            radius,
            color,
            width,
        });
    }

    fn draw_shadow(&mut self, rect: Rect, radius: f32, shadow: Shadow) {
        self.commands.push(DrawCommand::Shadow {
            rect,
            radius,
            shadow,
        });
    }
}
