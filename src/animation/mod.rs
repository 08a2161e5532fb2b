//! Deterministic tweening driven by explicit time steps.
//!
//! Nothing here reads a clock: hosts feed elapsed time through
//! `BarChart::advance` (or a frame-clock callback in the GTK adapter).

mod bar_state;
mod easing;
mod tween;
mod visibility;

pub use bar_state::{AnimationConfig, BarAnimationState};
pub use easing::Easing;
pub use tween::{Animated, Lerp, TweenSpec, lerp};
pub use visibility::{VisibilitySpec, VisibilityTransition};
