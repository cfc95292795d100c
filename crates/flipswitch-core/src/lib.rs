//! Core types for Flipswitch controls.
//!
//! This crate provides the primitives a control builds on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with 8-bit conversions
//! - Animation: [`Easing`], [`CubicBezier`], [`Interpolate`], [`Tween`]
//! - Host input: [`Event`], [`MouseButton`]
//! - Painting: [`Canvas`], [`RecordingCanvas`]

mod animation;
mod canvas;
mod color;
mod event;
mod geometry;

pub use animation::{CubicBezier, Easing, Interpolate, Tween};
pub use canvas::{Canvas, DrawCommand, RecordingCanvas, Shadow};
pub use color::Color;
pub use event::{Event, MouseButton};
pub use geometry::{Point, Rect, Size};
