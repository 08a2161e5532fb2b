use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::{Animated, TweenSpec};

/// Slide + fade specs for one direction of a visibility change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilitySpec {
    pub slide: TweenSpec,
    pub fade: TweenSpec,
}

impl VisibilitySpec {
    /// Bubble enter: slide up from its own height while fading in.
    #[must_use]
    pub const fn bubble_enter() -> Self {
        Self {
            slide: TweenSpec::millis(500),
            fade: TweenSpec::millis(500),
        }
    }

    /// Bubble exit: slide down with a shorter fade out.
    #[must_use]
    pub const fn bubble_exit() -> Self {
        Self {
            slide: TweenSpec::millis(500),
            fade: TweenSpec::millis(200),
        }
    }
}

/// Enter/exit transition of an element that slides vertically and fades.
///
/// `offset_fraction` is 0 when fully shown and 1 when slid out by the
/// element's own height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityTransition {
    target_visible: bool,
    offset: Animated<f64>,
    alpha: Animated<f64>,
}

impl VisibilityTransition {
    #[must_use]
    pub fn new(visible: bool) -> Self {
        let (offset, alpha) = if visible { (0.0, 1.0) } else { (1.0, 0.0) };
        Self {
            target_visible: visible,
            offset: Animated::new(offset),
            alpha: Animated::new(alpha),
        }
    }

    pub fn show(&mut self, spec: VisibilitySpec) {
        self.target_visible = true;
        self.offset.animate_to(0.0, spec.slide);
        self.alpha.animate_to(1.0, spec.fade);
    }

    pub fn hide(&mut self, spec: VisibilitySpec) {
        self.target_visible = false;
        self.offset.animate_to(1.0, spec.slide);
        self.alpha.animate_to(0.0, spec.fade);
    }

    pub fn set_visible(&mut self, visible: bool, enter: VisibilitySpec, exit: VisibilitySpec) {
        if visible {
            self.show(enter);
        } else {
            self.hide(exit);
        }
    }

    pub fn snap(&mut self, visible: bool) {
        *self = Self::new(visible);
    }

    pub fn step(&mut self, dt: Duration) -> bool {
        let offset_running = self.offset.step(dt);
        let alpha_running = self.alpha.step(dt);
        offset_running || alpha_running
    }

    pub fn finish(&mut self) {
        self.offset.finish();
        self.alpha.finish();
    }

    #[must_use]
    pub fn target_visible(&self) -> bool {
        self.target_visible
    }

    /// Whether any part of the element should still be drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.alpha.value() > 0.0
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.offset.is_running() || self.alpha.is_running()
    }

    #[must_use]
    pub fn visible_fraction(&self) -> f64 {
        self.alpha.value().clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn offset_fraction(&self) -> f64 {
        self.offset.value()
    }
}
