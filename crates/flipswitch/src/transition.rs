//! Transition planning.
//!
//! Each refresh is expressed as a [`TransitionBatch`]: a declarative list of
//! (target, from, to, duration, easing) entries covering the track colors and
//! the knob and highlight geometry. Batches are built from the currently
//! displayed [`SwitchVisuals`] so a refresh issued mid-animation starts from
//! wherever the previous one left off.

use crate::config::SwitchConfig;
use crate::gesture::RefreshCause;
use crate::layout::{LayerGeometry, TrackGeometry};
use crate::palette::ColorPair;
use flipswitch_core::{Color, Easing, Interpolate, Point, Rect, Size, Tween};
use serde::{Deserialize, Serialize};

// =============================================================================
// Targets and Values
// =============================================================================

/// Drawable layer of the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerId {
    /// Rounded track
    Background,
    /// Knob
    Knob,
    /// Knob highlight
    KnobHighlight,
}

/// Animatable attribute of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    /// Fill color
    BackgroundColor,
    /// Border color
    BorderColor,
    /// Width and height
    Size,
    /// Top-left position
    Position,
}

/// A layer attribute a transition drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    /// Layer
    pub layer: LayerId,
    /// Attribute on that layer
    pub property: Property,
}

impl Target {
    /// Create a new target.
    #[must_use]
    pub const fn new(layer: LayerId, property: Property) -> Self {
        Self { layer, property }
    }
}

/// Value of an animatable attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnimatedValue {
    /// A color
    Color(Color),
    /// A size
    Size(Size),
    /// A position
    Point(Point),
}

impl Interpolate for AnimatedValue {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        match (from, to) {
            (Self::Color(a), Self::Color(b)) => Self::Color(Color::interpolate(a, b, t)),
            (Self::Size(a), Self::Size(b)) => Self::Size(Size::interpolate(a, b, t)),
            (Self::Point(a), Self::Point(b)) => Self::Point(Point::interpolate(a, b, t)),
            // Mismatched kinds cannot blend; jump to the target.
            _ => *to,
        }
    }
}

/// One property transition of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Attribute driven
    pub target: Target,
    /// Endpoints, duration, easing and progress
    pub tween: Tween<AnimatedValue>,
}

impl Transition {
    /// Start value.
    #[must_use]
    pub const fn start_value(&self) -> AnimatedValue {
        self.tween.from
    }

    /// End value.
    #[must_use]
    pub const fn end_value(&self) -> AnimatedValue {
        self.tween.to
    }
}

/// Synchronized transitions produced by one refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionBatch {
    cause: RefreshCause,
    transitions: Vec<Transition>,
}

impl TransitionBatch {
    /// Why the batch was planned.
    #[must_use]
    pub const fn cause(&self) -> RefreshCause {
        self.cause
    }

    /// Transitions in planning order.
    #[must_use]
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub(crate) fn transitions_mut(&mut self) -> &mut [Transition] {
        &mut self.transitions
    }

    /// Number of transitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// End value planned for `target`, if the batch drives it.
    #[must_use]
    pub fn end_value(&self, target: Target) -> Option<AnimatedValue> {
        self.transitions
            .iter()
            .find(|transition| transition.target == target)
            .map(Transition::end_value)
    }

    /// Whether every transition has reached its end.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.transitions.iter().all(|t| t.tween.is_complete())
    }
}

// =============================================================================
// SwitchVisuals - What Is Currently Displayed
// =============================================================================

/// Displayed attributes of all three layers, possibly mid-animation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SwitchVisuals {
    /// Track bounds and radius; resized directly, never animated
    pub background: TrackGeometry,
    /// Track fill
    pub background_color: Color,
    /// Track border
    pub border_color: Color,
    /// Knob bounds
    pub knob: Rect,
    /// Knob highlight bounds
    pub knob_highlight: Rect,
}

impl SwitchVisuals {
    /// Current value of an animatable attribute.
    ///
    /// The track's size and position are not animatable; asking for them
    /// reports the track rect unchanged.
    #[must_use]
    pub const fn get(&self, target: Target) -> AnimatedValue {
        match (target.layer, target.property) {
            (LayerId::Background, Property::BackgroundColor) => {
                AnimatedValue::Color(self.background_color)
            }
            (LayerId::Background, Property::BorderColor) => AnimatedValue::Color(self.border_color),
            (LayerId::Background, Property::Size) => AnimatedValue::Size(self.background.rect.size()),
            (LayerId::Background, Property::Position) => {
                AnimatedValue::Point(self.background.rect.origin())
            }
            (LayerId::Knob, Property::Position) => AnimatedValue::Point(self.knob.origin()),
            (LayerId::Knob, _) => AnimatedValue::Size(self.knob.size()),
            (LayerId::KnobHighlight, Property::Position) => {
                AnimatedValue::Point(self.knob_highlight.origin())
            }
            (LayerId::KnobHighlight, _) => AnimatedValue::Size(self.knob_highlight.size()),
        }
    }

    /// Write an interpolated value. Values whose kind does not fit the target
    /// are ignored.
    pub fn set(&mut self, target: Target, value: AnimatedValue) {
        match (target.layer, target.property, value) {
            (LayerId::Background, Property::BackgroundColor, AnimatedValue::Color(c)) => {
                self.background_color = c;
            }
            (LayerId::Background, Property::BorderColor, AnimatedValue::Color(c)) => {
                self.border_color = c;
            }
            (LayerId::Knob, Property::Size, AnimatedValue::Size(s)) => {
                self.knob = self.knob.with_size(s);
            }
            (LayerId::Knob, Property::Position, AnimatedValue::Point(p)) => {
                self.knob = self.knob.with_origin(p);
            }
            (LayerId::KnobHighlight, Property::Size, AnimatedValue::Size(s)) => {
                self.knob_highlight = self.knob_highlight.with_size(s);
            }
            (LayerId::KnobHighlight, Property::Position, AnimatedValue::Point(p)) => {
                self.knob_highlight = self.knob_highlight.with_origin(p);
            }
            _ => {}
        }
    }

    /// Jump straight to the given geometry and colors.
    pub fn snap_to(&mut self, geometry: &LayerGeometry, colors: ColorPair) {
        self.background = geometry.background;
        self.background_color = colors.background;
        self.border_color = colors.border;
        self.knob = geometry.knob;
        self.knob_highlight = geometry.knob_highlight;
    }
}

// =============================================================================
// TransitionPlanner
// =============================================================================

/// Builds a [`TransitionBatch`] for every animated refresh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionPlanner {
    duration_ms: u32,
    drag_easing: Easing,
    commit_easing: Easing,
}

impl TransitionPlanner {
    /// Targets in the order every batch lists them.
    pub const TARGETS: [Target; 6] = [
        Target::new(LayerId::Background, Property::BackgroundColor),
        Target::new(LayerId::Background, Property::BorderColor),
        Target::new(LayerId::Knob, Property::Size),
        Target::new(LayerId::Knob, Property::Position),
        Target::new(LayerId::KnobHighlight, Property::Size),
        Target::new(LayerId::KnobHighlight, Property::Position),
    ];

    /// Build a planner from the configuration.
    #[must_use]
    pub fn from_config(config: &SwitchConfig) -> Self {
        Self {
            duration_ms: config.animation_duration_ms,
            drag_easing: config.drag_easing.into(),
            commit_easing: config.commit_easing.into(),
        }
    }

    /// Easing curve for a refresh cause.
    #[must_use]
    pub const fn easing_for(&self, cause: RefreshCause) -> Easing {
        match cause {
            RefreshCause::Drag => self.drag_easing,
            RefreshCause::Commit => self.commit_easing,
        }
    }

    /// Plan the transitions from `current` towards `geometry` and `colors`.
    #[must_use]
    pub fn plan(
        &self,
        current: &SwitchVisuals,
        geometry: &LayerGeometry,
        colors: ColorPair,
        cause: RefreshCause,
    ) -> TransitionBatch {
        let easing = self.easing_for(cause);
        let duration_ms = f64::from(self.duration_ms);

        let transitions = Self::TARGETS
            .iter()
            .map(|&target| {
                let end = Self::end_value(target, geometry, colors);
                Transition {
                    target,
                    tween: Tween::new(current.get(target), end, duration_ms).with_easing(easing),
                }
            })
            .collect();

        TransitionBatch { cause, transitions }
    }

    fn end_value(target: Target, geometry: &LayerGeometry, colors: ColorPair) -> AnimatedValue {
        match (target.layer, target.property) {
            (LayerId::Background, Property::BorderColor) => AnimatedValue::Color(colors.border),
            (LayerId::Background, _) => AnimatedValue::Color(colors.background),
            (LayerId::Knob, Property::Position) => AnimatedValue::Point(geometry.knob.origin()),
            (LayerId::Knob, _) => AnimatedValue::Size(geometry.knob.size()),
            (LayerId::KnobHighlight, Property::Position) => {
                AnimatedValue::Point(geometry.knob_highlight.origin())
            }
            (LayerId::KnobHighlight, _) => AnimatedValue::Size(geometry.knob_highlight.size()),
        }
    }
}

impl Default for TransitionPlanner {
    fn default() -> Self {
        Self::from_config(&SwitchConfig::default())
    }
}
