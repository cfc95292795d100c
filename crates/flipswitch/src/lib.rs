//! Animated two-state switch control.
//!
//! A [`Switch`] toggles on click or commits whichever side of the track the
//! pointer was dragged to. Every visual change is described as a
//! [`TransitionBatch`] that the host advances with [`Switch::tick`].

pub mod config;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod palette;
pub mod runner;
pub mod switch;
pub mod transition;

pub use config::SwitchConfig;
pub use error::ConfigError;
pub use gesture::{GestureEffect, GestureResponse, GestureTracker, LogicalState, RefreshCause};
pub use layout::{compute_layout, LayerGeometry, TrackGeometry};
pub use palette::{ColorPair, ColorPalette};
pub use runner::TransitionRunner;
pub use switch::{Switch, Toggled};
pub use transition::{
    AnimatedValue, LayerId, Property, SwitchVisuals, Target, Transition, TransitionBatch,
    TransitionPlanner,
};
