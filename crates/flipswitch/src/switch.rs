//! Animated on/off switch control.
//!
//! [`Switch`] owns the logical state, current bounds, displayed visuals and
//! the single in-flight transition batch. The host forwards pointer and
//! resize input, calls [`Switch::tick`] once per frame while
//! [`Switch::is_animating`] is true, and paints with [`Switch::paint`].
//!
//! ```
//! use flipswitch::Switch;
//! use flipswitch_core::Point;
//!
//! let mut switch = Switch::new();
//! switch.resize(42.0, 30.0);
//!
//! switch.pointer_down(Point::new(10.0, 15.0));
//! let toggled = switch.pointer_up(Point::new(10.0, 15.0));
//! assert_eq!(toggled.map(|t| t.checked), Some(true));
//!
//! while switch.tick(16.0) {}
//! assert_eq!(switch.visuals().knob.x, 18.0);
//! ```

use crate::config::SwitchConfig;
use crate::error::ConfigError;
use crate::gesture::{GestureEffect, GestureResponse, GestureTracker, LogicalState, RefreshCause};
use crate::layout::{self, LayerGeometry};
use crate::palette::ColorPalette;
use crate::runner::TransitionRunner;
use crate::transition::{SwitchVisuals, TransitionBatch, TransitionPlanner};
use flipswitch_core::{Canvas, Color, Event, MouseButton, Point, Rect, Size};
use tracing::{debug, trace};

/// Message emitted when a pointer gesture completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggled {
    /// The committed state
    pub checked: bool,
}

type ToggledListener = Box<dyn FnMut(bool)>;

/// Two-state switch with drag-to-commit gestures and animated transitions.
pub struct Switch {
    config: SwitchConfig,
    palette: ColorPalette,
    planner: TransitionPlanner,
    tracker: GestureTracker,
    runner: TransitionRunner,
    visuals: SwitchVisuals,
    bounds: Size,
    tint: Color,
    enabled: bool,
    listeners: Vec<ToggledListener>,
}

impl Switch {
    /// Create an unchecked, enabled switch with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::build(SwitchConfig::default(), None)
    }

    /// Create a switch with a custom accent color.
    #[must_use]
    pub fn with_tint(tint: Color) -> Self {
        Self::build(SwitchConfig::default(), Some(tint))
    }

    /// Create a switch from a configuration, validating it first.
    pub fn with_config(config: SwitchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, None))
    }

    fn build(config: SwitchConfig, tint: Option<Color>) -> Self {
        let bounds = Self::minimum_size_for(&config);
        let mut switch = Self {
            palette: ColorPalette::from_config(&config),
            planner: TransitionPlanner::from_config(&config),
            tracker: GestureTracker::new(false),
            runner: TransitionRunner::new(),
            visuals: SwitchVisuals::default(),
            bounds,
            tint: tint.unwrap_or(config.default_tint),
            enabled: true,
            listeners: Vec::new(),
            config,
        };
        switch.refresh(false, RefreshCause::Commit);
        switch
    }

    // =========================================================================
    // Public state
    // =========================================================================

    /// Committed value.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.tracker.state().checked
    }

    /// Set the committed value and animate to it with the commit curve.
    ///
    /// Never raises `toggled`.
    pub fn set_checked(&mut self, checked: bool) {
        self.tracker.set_checked(checked);
        self.refresh(true, RefreshCause::Commit);
    }

    /// Accent color.
    #[must_use]
    pub const fn tint_color(&self) -> Color {
        self.tint
    }

    /// Change the accent color and animate the track towards it.
    pub fn set_tint_color(&mut self, tint: Color) {
        self.tint = tint;
        let cause = if self.tracker.state().dragging {
            RefreshCause::Drag
        } else {
            RefreshCause::Commit
        };
        self.refresh(true, cause);
    }

    /// Whether the switch accepts pointer input.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the switch. Disabling abandons a gesture in
    /// progress without committing it.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        let abandoned = !enabled && self.tracker.cancel();
        debug!(enabled, abandoned, "switch enabled state changed");
        self.refresh(false, RefreshCause::Commit);
    }

    /// Interaction state.
    #[must_use]
    pub const fn state(&self) -> &LogicalState {
        self.tracker.state()
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &SwitchConfig {
        &self.config
    }

    /// Register a callback for completed gestures.
    pub fn on_toggled(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Pointer pressed at `position` (control coordinates).
    pub fn pointer_down(&mut self, position: Point) {
        trace!(x = position.x, y = position.y, "switch pointer down");
        let response = self.tracker.pointer_down(self.enabled);
        self.apply(&response);
    }

    /// Pointer moved to `position`.
    pub fn pointer_move(&mut self, position: Point) {
        let midpoint = layout::drag_midpoint(self.bounds.width, &self.config);
        let response = self.tracker.pointer_move(position.x, midpoint);
        self.apply(&response);
    }

    /// Pointer released at `position`. Returns the notification raised, if
    /// the release completed a gesture.
    pub fn pointer_up(&mut self, position: Point) -> Option<Toggled> {
        trace!(x = position.x, y = position.y, "switch pointer up");
        let response = self.tracker.pointer_up(self.enabled);
        self.apply(&response)
    }

    /// Route a host event. Only the left button drives gestures, and a
    /// press must land inside [`Switch::rect`].
    pub fn event(&mut self, event: &Event) -> Option<Toggled> {
        match *event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                if self.rect().contains_point(&position) {
                    self.pointer_down(position);
                }
                None
            }
            Event::MouseMove { position } => {
                self.pointer_move(position);
                None
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => self.pointer_up(position),
            Event::Resize { width, height } => {
                self.resize(width, height);
                None
            }
            Event::MouseDown { .. } | Event::MouseUp { .. } => None,
        }
    }

    fn apply(&mut self, response: &GestureResponse) -> Option<Toggled> {
        let mut toggled = None;
        for effect in response.effects() {
            match *effect {
                GestureEffect::Refresh(cause) => self.refresh(true, cause),
                GestureEffect::Toggled(checked) => {
                    for listener in &mut self.listeners {
                        listener(checked);
                    }
                    toggled = Some(Toggled { checked });
                }
            }
        }
        toggled
    }

    // =========================================================================
    // Size
    // =========================================================================

    /// Apply new control bounds. Geometry is updated without animation and
    /// the height is capped at [`Switch::maximum_height`] for the new width.
    pub fn resize(&mut self, width: f32, height: f32) {
        let width = width.max(0.0);
        let max_height = layout::max_height(width, &self.config);
        let height = if max_height > 0.0 {
            height.min(max_height)
        } else {
            height
        };
        self.bounds = Size::new(width, height.max(0.0));
        self.refresh(false, RefreshCause::Commit);
    }

    /// Current bounds.
    #[must_use]
    pub const fn bounds(&self) -> Size {
        self.bounds
    }

    /// Smallest size the host should lay the control out at.
    #[must_use]
    pub fn minimum_size(&self) -> Size {
        Self::minimum_size_for(&self.config)
    }

    fn minimum_size_for(config: &SwitchConfig) -> Size {
        Size::new(
            config.min_width + 2.0 * config.margin,
            config.min_height + 2.0 * config.margin,
        )
    }

    /// Tallest the control should be for its current width.
    #[must_use]
    pub fn maximum_height(&self) -> f32 {
        layout::max_height(self.bounds.width, &self.config)
    }

    /// Layout hint: the track's natural size plus the margin on each side.
    #[must_use]
    pub fn preferred_size(&self) -> Size {
        self.minimum_size()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Geometry the current state resolves to, ignoring animation.
    #[must_use]
    pub fn geometry(&self) -> LayerGeometry {
        let state = self.tracker.state();
        layout::compute_layout(self.bounds, state.pressed, state.effective_on(), &self.config)
    }

    /// Displayed attributes, possibly mid-animation.
    #[must_use]
    pub const fn visuals(&self) -> &SwitchVisuals {
        &self.visuals
    }

    /// Advance the running transition batch by `dt_ms`. Returns whether it is
    /// still running.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        self.runner.tick(dt_ms, &mut self.visuals)
    }

    /// Whether a transition batch is running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.runner.is_running()
    }

    /// The running transition batch.
    #[must_use]
    pub const fn active_batch(&self) -> Option<&TransitionBatch> {
        self.runner.active()
    }

    /// Paint the track, knob and knob highlight.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        let visuals = &self.visuals;
        let track = visuals.background;
        canvas.fill_rounded_rect(track.rect, track.radius, visuals.background_color);
        canvas.stroke_rounded_rect(
            track.rect,
            track.radius,
            visuals.border_color,
            self.config.border_line_width,
        );

        for (rect, shadow) in [
            (visuals.knob, self.config.knob_shadow),
            (visuals.knob_highlight, self.config.highlight_shadow),
        ] {
            let rect = rect.with_size(rect.size().non_negative());
            let radius = layout::knob_radius(&rect);
            canvas.draw_shadow(rect, radius, shadow);
            canvas.fill_rounded_rect(rect, radius, self.config.knob_color);
        }
    }

    /// Control-local bounds, for hit testing by the host.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.bounds.width, self.bounds.height)
    }

    // =========================================================================
    // Refresh
    // =========================================================================

    fn refresh(&mut self, animated: bool, cause: RefreshCause) {
        let state = *self.tracker.state();
        let effective_on = state.effective_on();
        let geometry =
            layout::compute_layout(self.bounds, state.pressed, effective_on, &self.config);
        let colors = self.palette.resolve_for(effective_on, self.enabled, self.tint);
        trace!(animated, ?cause, effective_on, pressed = state.pressed, "switch refresh");

        // The track is resized directly; only its colors animate.
        self.visuals.background = geometry.background;

        if animated {
            let batch = self.planner.plan(&self.visuals, &geometry, colors, cause);
            self.runner.start(batch);
        } else {
            self.runner.cancel();
            self.visuals.snap_to(&geometry, colors);
        }
    }
}

impl Default for Switch {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Switch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Switch")
            .field("state", self.tracker.state())
            .field("bounds", &self.bounds)
            .field("tint", &self.tint)
            .field("enabled", &self.enabled)
            .field("visuals", &self.visuals)
            .field("animating", &self.runner.is_running())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
