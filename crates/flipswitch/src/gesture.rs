//! Pointer gesture recognition for the switch.
//!
//! [`GestureTracker`] reduces pointer-down/move/up into the switch's
//! [`LogicalState`] and reports, in order, the refreshes the control must
//! perform and whether a `toggled` notification is due.
//!
//! A press without movement toggles. A press followed by movement becomes a
//! drag: the knob previews whichever half of the track the pointer is over,
//! and release commits that side.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Discrete interaction state of a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogicalState {
    /// Committed value
    pub checked: bool,
    /// Pointer is held down on the control
    pub pressed: bool,
    /// Pointer moved while pressed
    pub dragging: bool,
    /// Side previewed by the drag; only meaningful while `dragging`
    pub drag_towards_on: bool,
    /// The previewed side flipped at least once since the press
    pub drag_direction_changed: bool,
}

impl LogicalState {
    /// Side used for rendering: the drag preview while dragging, else `checked`.
    #[must_use]
    pub const fn effective_on(&self) -> bool {
        if self.dragging {
            self.drag_towards_on
        } else {
            self.checked
        }
    }
}

/// Why a refresh was requested; selects the easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefreshCause {
    /// Live drag preview
    Drag,
    /// Click, press feedback or programmatic change
    Commit,
}

impl RefreshCause {
    const fn for_state(state: &LogicalState) -> Self {
        if state.dragging {
            Self::Drag
        } else {
            Self::Commit
        }
    }
}

/// Something the control must do in response to a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEffect {
    /// Recompute geometry and colors, animated
    Refresh(RefreshCause),
    /// Raise the `toggled` notification
    Toggled(bool),
}

/// Ordered effects of one pointer event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GestureResponse {
    effects: Vec<GestureEffect>,
}

impl GestureResponse {
    /// Response with no effects (event ignored or no visible change).
    #[must_use]
    pub const fn none() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    fn push(&mut self, effect: GestureEffect) {
        self.effects.push(effect);
    }

    /// All effects in order.
    #[must_use]
    pub fn effects(&self) -> &[GestureEffect] {
        &self.effects
    }

    /// Whether the event changed nothing visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Causes of the requested refreshes, in order.
    pub fn refreshes(&self) -> impl Iterator<Item = RefreshCause> + '_ {
        self.effects.iter().filter_map(|effect| match effect {
            GestureEffect::Refresh(cause) => Some(*cause),
            GestureEffect::Toggled(_) => None,
        })
    }

    /// Value to notify with, if the gesture completed.
    #[must_use]
    pub fn toggled(&self) -> Option<bool> {
        self.effects.iter().find_map(|effect| match effect {
            GestureEffect::Toggled(checked) => Some(*checked),
            GestureEffect::Refresh(_) => None,
        })
    }
}

/// Stateful reducer from pointer events to [`LogicalState`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GestureTracker {
    state: LogicalState,
}

impl GestureTracker {
    /// Create a tracker, not pressed, with the given committed value.
    #[must_use]
    pub fn new(checked: bool) -> Self {
        Self {
            state: LogicalState {
                checked,
                ..LogicalState::default()
            },
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &LogicalState {
        &self.state
    }

    /// Overwrite the committed value. A gesture in progress keeps running
    /// and its release overwrites this again.
    pub fn set_checked(&mut self, checked: bool) {
        self.state.checked = checked;
    }

    /// Pointer pressed on the control.
    pub fn pointer_down(&mut self, enabled: bool) -> GestureResponse {
        if !enabled {
            return GestureResponse::none();
        }

        self.state.pressed = true;
        self.state.dragging = false;
        self.state.drag_towards_on = false;
        self.state.drag_direction_changed = false;

        let mut response = GestureResponse::none();
        response.push(GestureEffect::Refresh(RefreshCause::for_state(&self.state)));
        response
    }

    /// Pointer moved to `x`. `midpoint` is the x at or beyond which the drag
    /// previews "on".
    pub fn pointer_move(&mut self, x: f32, midpoint: f32) -> GestureResponse {
        if !self.state.pressed {
            return GestureResponse::none();
        }

        self.state.dragging = true;
        let towards_on = x >= midpoint;
        if towards_on == self.state.drag_towards_on {
            return GestureResponse::none();
        }

        trace!(x, towards_on, "drag direction flipped");
        self.state.drag_towards_on = towards_on;
        self.state.drag_direction_changed = true;

        let mut response = GestureResponse::none();
        response.push(GestureEffect::Refresh(RefreshCause::Drag));
        response
    }

    /// Pointer released. Commits the toggle or the drag-previewed side and
    /// always reports `toggled`, even if the value is unchanged. A release
    /// without a matching press is ignored.
    pub fn pointer_up(&mut self, enabled: bool) -> GestureResponse {
        if !enabled || !self.state.pressed {
            return GestureResponse::none();
        }

        let mut response = GestureResponse::none();
        self.state.pressed = false;
        self.state.checked = if self.state.dragging {
            self.state.drag_towards_on
        } else {
            !self.state.checked
        };
        response.push(GestureEffect::Refresh(RefreshCause::for_state(&self.state)));

        let dragged = self.state.dragging;
        self.state.dragging = false;
        self.state.drag_towards_on = false;

        // Settle pass: without a flip the knob may not have been redrawn
        // since the press, so refresh once more with the commit curve.
        if !self.state.drag_direction_changed {
            response.push(GestureEffect::Refresh(RefreshCause::Commit));
        }
        self.state.drag_direction_changed = false;

        debug!(checked = self.state.checked, dragged, "switch gesture committed");
        response.push(GestureEffect::Toggled(self.state.checked));
        response
    }

    /// Abandon a gesture in progress without committing. Returns whether a
    /// gesture was active.
    pub fn cancel(&mut self) -> bool {
        let active = self.state.pressed || self.state.dragging;
        self.state.pressed = false;
        self.state.dragging = false;
        self.state.drag_towards_on = false;
        self.state.drag_direction_changed = false;
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MID: f32 = 16.0;

    // ===== LogicalState Tests =====

    #[test]
    fn test_initial_state() {
        let tracker = GestureTracker::default();
        assert_eq!(*tracker.state(), LogicalState::default());
        assert!(!tracker.state().effective_on());
    }

    #[test]
    fn test_effective_on_follows_drag() {
        let state = LogicalState {
            checked: true,
            dragging: true,
            drag_towards_on: false,
            ..LogicalState::default()
        };
        assert!(!state.effective_on());

        let state = LogicalState {
            dragging: false,
            ..state
        };
        assert!(state.effective_on());
    }

    // ===== Click Tests =====

    #[test]
    fn test_pointer_down_presses_and_refreshes() {
        let mut tracker = GestureTracker::default();
        let response = tracker.pointer_down(true);
        assert!(tracker.state().pressed);
        assert_eq!(
            response.effects(),
            &[GestureEffect::Refresh(RefreshCause::Commit)]
        );
    }

    #[test]
    fn test_click_toggles_on() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(true);
        let response = tracker.pointer_up(true);

        assert!(tracker.state().checked);
        assert!(!tracker.state().pressed);
        assert_eq!(response.toggled(), Some(true));
        assert_eq!(
            response.refreshes().collect::<Vec<_>>(),
            vec![RefreshCause::Commit, RefreshCause::Commit]
        );
    }

    #[test]
    fn test_click_toggles_off() {
        let mut tracker = GestureTracker::new(true);
        tracker.pointer_down(true);
        assert_eq!(tracker.pointer_up(true).toggled(), Some(false));
        assert!(!tracker.state().checked);
    }

    #[test]
    fn test_toggled_is_last_effect() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(true);
        let response = tracker.pointer_up(true);
        assert_eq!(response.effects().last(), Some(&GestureEffect::Toggled(true)));
    }

    // ===== Disabled Tests =====

    #[test]
    fn test_disabled_pointer_down_ignored() {
        let mut tracker = GestureTracker::default();
        assert!(tracker.pointer_down(false).is_empty());
        assert!(!tracker.state().pressed);
    }

    #[test]
    fn test_disabled_pointer_up_ignored() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(true);
        let response = tracker.pointer_up(false);
        assert!(response.is_empty());
        assert!(!tracker.state().checked);
        assert!(tracker.state().pressed);
    }

    #[test]
    fn test_release_without_press_ignored() {
        let mut tracker = GestureTracker::default();
        let response = tracker.pointer_up(true);
        assert!(response.is_empty());
        assert!(!tracker.state().checked);
    }

    #[test]
    fn test_second_release_ignored() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(true);
        assert_eq!(tracker.pointer_up(true).toggled(), Some(true));
        assert!(tracker.pointer_up(true).is_empty());
        assert!(tracker.state().checked);
    }

    // ===== Drag Tests =====

    #[test]
    fn test_move_without_press_ignored() {
        let mut tracker = GestureTracker::default();
        assert!(tracker.pointer_move(30.0, MID).is_empty());
        assert!(!tracker.state().dragging);
    }

    #[test]
    fn test_move_sets_dragging() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(true);
        let response = tracker.pointer_move(2.0, MID);
        assert!(tracker.state().dragging);
        // Still on the "off" side: nothing to redraw.
        assert!(response.is_empty());
    }

    #[test]
    fn test_move_across_midpoint_refreshes_with_drag_curve() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(true);
        let response = tracker.pointer_move(MID, MID);
        assert!(tracker.state().drag_towards_on);
        assert!(tracker.state().drag_direction_changed);
        assert_eq!(response.effects(), &[GestureEffect::Refresh(RefreshCause::Drag)]);
    }

    #[test]
    fn test_move_same_side_twice_refreshes_once() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(true);
        assert!(!tracker.pointer_move(30.0, MID).is_empty());
        assert!(tracker.pointer_move(31.0, MID).is_empty());
    }

    #[test]
    fn test_drag_past_midpoint_commits_on() {
        let mut tracker = GestureTracker::new(true);
        tracker.pointer_down(true);
        tracker.pointer_move(30.0, MID);
        let response = tracker.pointer_up(true);
        assert!(tracker.state().checked);
        assert_eq!(response.toggled(), Some(true));
        // Direction flipped, so no settle pass.
        assert_eq!(
            response.refreshes().collect::<Vec<_>>(),
            vec![RefreshCause::Drag]
        );
    }

    #[test]
    fn test_drag_before_midpoint_commits_off() {
        let mut tracker = GestureTracker::new(true);
        tracker.pointer_down(true);
        tracker.pointer_move(3.0, MID);
        let response = tracker.pointer_up(true);
        assert!(!tracker.state().checked);
        assert_eq!(response.toggled(), Some(false));
        // No flip: commit refresh plus settle pass.
        assert_eq!(
            response.refreshes().collect::<Vec<_>>(),
            vec![RefreshCause::Drag, RefreshCause::Commit]
        );
    }

    #[test]
    fn test_drag_reversal_commits_last_side() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(true);
        tracker.pointer_move(30.0, MID);
        tracker.pointer_move(2.0, MID);
        tracker.pointer_up(true);
        assert!(!tracker.state().checked);
    }

    #[test]
    fn test_release_resets_drag_state() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(true);
        tracker.pointer_move(30.0, MID);
        tracker.pointer_up(true);
        let state = tracker.state();
        assert!(!state.pressed);
        assert!(!state.dragging);
        assert!(!state.drag_towards_on);
        assert!(!state.drag_direction_changed);
    }

    #[test]
    fn test_new_press_clears_previous_drag() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(true);
        tracker.pointer_move(30.0, MID);
        tracker.pointer_down(true);
        assert!(!tracker.state().dragging);
        assert!(!tracker.state().drag_direction_changed);
    }

    // ===== Cancel / set_checked =====

    #[test]
    fn test_cancel_abandons_gesture() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(true);
        tracker.pointer_move(30.0, MID);
        assert!(tracker.cancel());
        assert!(!tracker.state().checked);
        assert!(!tracker.state().pressed);
        assert!(!tracker.cancel());
    }

    #[test]
    fn test_release_after_cancel_ignored() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(true);
        tracker.pointer_move(30.0, MID);
        tracker.cancel();
        assert!(tracker.pointer_up(true).is_empty());
        assert!(!tracker.state().checked);
    }

    #[test]
    fn test_set_checked_during_drag_is_overwritten() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(true);
        tracker.pointer_move(30.0, MID);
        tracker.set_checked(false);
        tracker.pointer_up(true);
        assert!(tracker.state().checked);
    }

    proptest! {
        #[test]
        fn prop_final_value_is_last_side(initial: bool, xs in proptest::collection::vec(0.0f32..42.0, 1..20)) {
            let mut tracker = GestureTracker::new(initial);
            tracker.pointer_down(true);
            for x in &xs {
                tracker.pointer_move(*x, MID);
            }
            let response = tracker.pointer_up(true);
            let expected = *xs.last().unwrap() >= MID;
            prop_assert_eq!(tracker.state().checked, expected);
            prop_assert_eq!(response.toggled(), Some(expected));
        }

        #[test]
        fn prop_click_flips_exactly_once(initial: bool) {
            let mut tracker = GestureTracker::new(initial);
            tracker.pointer_down(true);
            let response = tracker.pointer_up(true);
            prop_assert_eq!(tracker.state().checked, !initial);
            prop_assert_eq!(response.toggled(), Some(!initial));
        }
    }
}
