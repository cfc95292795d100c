//! Drives the single in-flight transition batch of a switch.

use crate::transition::{SwitchVisuals, TransitionBatch};
use tracing::{debug, trace};

/// Plays at most one [`TransitionBatch`] at a time.
///
/// Starting a batch replaces whatever is running; the replaced batch stops
/// where it is, and the new one was planned from those displayed values.
#[derive(Debug, Default)]
pub struct TransitionRunner {
    active: Option<TransitionBatch>,
}

impl TransitionRunner {
    /// Create an idle runner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `batch`, returning the batch it superseded, if any.
    pub fn start(&mut self, batch: TransitionBatch) -> Option<TransitionBatch> {
        let previous = self.active.replace(batch);
        if let Some(previous) = &previous {
            if !previous.is_complete() {
                debug!(cause = ?previous.cause(), "transition batch superseded");
            }
        }
        previous
    }

    /// Stop the running batch without applying its end values.
    pub fn cancel(&mut self) -> Option<TransitionBatch> {
        self.active.take()
    }

    /// Advance the running batch by `dt_ms` and write the interpolated values
    /// into `visuals`. Returns whether a batch is still running.
    pub fn tick(&mut self, dt_ms: f64, visuals: &mut SwitchVisuals) -> bool {
        let Some(batch) = self.active.as_mut() else {
            return false;
        };

        for transition in batch.transitions_mut() {
            transition.tween.update(dt_ms);
            visuals.set(transition.target, transition.tween.value());
        }

        if batch.is_complete() {
            trace!(cause = ?batch.cause(), "transition batch finished");
            self.active = None;
            return false;
        }
        true
    }

    /// Whether a batch is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// The running batch.
    #[must_use]
    pub const fn active(&self) -> Option<&TransitionBatch> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SwitchConfig;
    use crate::gesture::RefreshCause;
    use crate::layout::compute_layout;
    use crate::palette::ColorPalette;
    use crate::transition::{AnimatedValue, LayerId, Property, Target, TransitionPlanner};
    use flipswitch_core::{Color, Point, Size};

    fn setup() -> (SwitchVisuals, TransitionBatch) {
        let config = SwitchConfig::default();
        let palette = ColorPalette::default();
        let tint = config.default_tint;
        let bounds = Size::new(42.0, 30.0);

        let mut visuals = SwitchVisuals::default();
        visuals.snap_to(
            &compute_layout(bounds, false, false, &config),
            palette.resolve(false, tint),
        );
        let batch = TransitionPlanner::default().plan(
            &visuals,
            &compute_layout(bounds, false, true, &config),
            palette.resolve(true, tint),
            RefreshCause::Drag,
        );
        (visuals, batch)
    }

    #[test]
    fn test_idle_tick_is_noop() {
        let mut runner = TransitionRunner::new();
        let mut visuals = SwitchVisuals::default();
        assert!(!runner.tick(16.0, &mut visuals));
        assert_eq!(visuals, SwitchVisuals::default());
    }

    #[test]
    fn test_tick_runs_to_completion() {
        let (mut visuals, batch) = setup();
        let mut runner = TransitionRunner::new();
        assert!(runner.start(batch).is_none());
        assert!(runner.is_running());

        assert!(runner.tick(200.0, &mut visuals));
        assert!(visuals.knob.x > 6.0 && visuals.knob.x < 18.0);

        assert!(!runner.tick(200.0, &mut visuals));
        assert!(!runner.is_running());
        assert_eq!(visuals.knob.origin(), Point::new(18.0, 6.0));
        assert_eq!(visuals.background_color, SwitchConfig::default().default_tint);
    }

    #[test]
    fn test_start_replaces_running_batch() {
        let (mut visuals, batch) = setup();
        let mut runner = TransitionRunner::new();
        runner.start(batch.clone());
        runner.tick(100.0, &mut visuals);

        let replaced = runner.start(batch);
        assert!(replaced.is_some());
        assert!(runner.active().is_some_and(|b| b.transitions()[0].tween.elapsed_ms == 0.0));
    }

    #[test]
    fn test_cancel_keeps_last_values() {
        let (mut visuals, batch) = setup();
        let mut runner = TransitionRunner::new();
        runner.start(batch);
        runner.tick(100.0, &mut visuals);
        let frozen = visuals;

        assert!(runner.cancel().is_some());
        assert!(!runner.tick(100.0, &mut visuals));
        assert_eq!(visuals, frozen);
    }

    #[test]
    fn test_tick_writes_every_target() {
        let (mut visuals, batch) = setup();
        let mut runner = TransitionRunner::new();
        runner.start(batch);
        runner.tick(400.0, &mut visuals);

        let border = Target::new(LayerId::Background, Property::BorderColor);
        assert_eq!(
            visuals.get(border),
            AnimatedValue::Color(Color::from_rgba8(79, 220, 116, 255))
        );
        assert_eq!(visuals.knob_highlight, visuals.knob);
    }
}
