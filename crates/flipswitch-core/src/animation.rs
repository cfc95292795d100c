//! Easing curves, interpolation and eased values.
//!
//! A [`Tween`] maps elapsed wall-clock time onto a value between two
//! endpoints through an [`Easing`] curve. Hosts own the frame clock and feed
//! elapsed milliseconds; nothing here schedules frames.

use crate::color::Color;
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

// =============================================================================
// CubicBezier - Unit Bezier Timing Curve
// =============================================================================

/// Cubic bezier timing curve anchored at (0,0) and (1,1).
///
/// The two control points are free in `y`, so a curve may overshoot 1.0
/// before settling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    /// First control point x, in [0, 1]
    pub x1: f64,
    /// First control point y
    pub y1: f64,
    /// Second control point x, in [0, 1]
    pub x2: f64,
    /// Second control point y
    pub y2: f64,
}

impl CubicBezier {
    const NEWTON_ITERATIONS: usize = 8;
    const BISECTION_ITERATIONS: usize = 32;
    const EPSILON: f64 = 1e-7;

    /// Create a curve from its two control points.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Evaluate the curve's progress for normalized time `t`.
    #[must_use]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        Self::sample(self.y1, self.y2, self.solve_param(t))
    }

    /// One bezier axis with endpoints 0 and 1, in Horner form.
    fn sample(p1: f64, p2: f64, s: f64) -> f64 {
        let c = 3.0 * p1;
        let b = 3.0f64.mul_add(p2 - p1, -c);
        let a = 1.0 - c - b;
        (a.mul_add(s, b) * s + c) * s
    }

    fn sample_derivative(p1: f64, p2: f64, s: f64) -> f64 {
        let c = 3.0 * p1;
        let b = 3.0f64.mul_add(p2 - p1, -c);
        let a = 1.0 - c - b;
        (3.0 * a).mul_add(s * s, (2.0 * b).mul_add(s, c))
    }

    /// Find the curve parameter whose x equals `x`.
    fn solve_param(&self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..Self::NEWTON_ITERATIONS {
            let err = Self::sample(self.x1, self.x2, s) - x;
            if err.abs() < Self::EPSILON {
                return s;
            }
            let slope = Self::sample_derivative(self.x1, self.x2, s);
            if slope.abs() < Self::EPSILON {
                break;
            }
            s -= err / slope;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        for _ in 0..Self::BISECTION_ITERATIONS {
            let value = Self::sample(self.x1, self.x2, s);
            if (value - x).abs() < Self::EPSILON {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (hi - lo).mul_add(0.5, lo);
        }
        s
    }
}

// =============================================================================
// Easing
// =============================================================================

/// Easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Custom cubic bezier curve
    CubicBezier(CubicBezier),
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    ///
    /// The input is clamped; the output is not, since bezier curves may
    /// overshoot.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicBezier(curve) => curve.apply(t),
        }
    }
}

impl From<CubicBezier> for Easing {
    fn from(curve: CubicBezier) -> Self {
        Self::CubicBezier(curve)
    }
}

// =============================================================================
// Interpolate Trait
// =============================================================================

/// Trait for types that can be interpolated.
pub trait Interpolate {
    /// Interpolate between two values. `t` may fall outside [0, 1].
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        (to - from).mul_add(t, *from)
    }
}

impl Interpolate for f32 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        (*to - *from).mul_add(t as Self, *from)
    }
}

impl Interpolate for Point {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        from.lerp(to, t as f32)
    }
}

impl Interpolate for Size {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        from.lerp(to, t as f32)
    }
}

impl Interpolate for Rect {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        Self::from_origin_size(
            Point::interpolate(&from.origin(), &to.origin(), t),
            Size::interpolate(&from.size(), &to.size(), t),
        )
    }
}

impl Interpolate for Color {
    // `lerp` clamps t, so an overshooting curve saturates at the target.
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        from.lerp(to, t as f32)
    }
}

// =============================================================================
// Tween - Eased Value Over Time
// =============================================================================

/// A value eased from `from` to `to` over `duration_ms`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<T> {
    /// Start value
    pub from: T,
    /// End value
    pub to: T,
    /// Total duration in milliseconds
    pub duration_ms: f64,
    /// Elapsed time in milliseconds
    pub elapsed_ms: f64,
    /// Easing function
    pub easing: Easing,
}

impl<T: Interpolate + Clone> Tween<T> {
    /// Create a linear tween.
    #[must_use]
    pub const fn new(from: T, to: T, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            elapsed_ms: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Set easing function.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Value at the current elapsed time.
    #[must_use]
    pub fn value(&self) -> T {
        self.value_at(self.elapsed_ms)
    }

    /// Value at an arbitrary elapsed time. Once complete this is exactly `to`.
    #[must_use]
    pub fn value_at(&self, elapsed_ms: f64) -> T {
        if elapsed_ms >= self.duration_ms {
            return self.to.clone();
        }
        let eased = self.easing.apply(Self::progress_of(elapsed_ms, self.duration_ms));
        T::interpolate(&self.from, &self.to, eased)
    }

    /// Whether the tween has reached its end.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Advance by `dt_ms` milliseconds.
    pub fn update(&mut self, dt_ms: f64) {
        self.elapsed_ms = (self.elapsed_ms + dt_ms.max(0.0)).min(self.duration_ms);
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        Self::progress_of(self.elapsed_ms, self.duration_ms)
    }

    fn progress_of(elapsed_ms: f64, duration_ms: f64) -> f64 {
        if duration_ms > 0.0 {
            (elapsed_ms / duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
