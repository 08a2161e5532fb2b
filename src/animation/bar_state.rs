use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::{Animated, TweenSpec, VisibilitySpec, VisibilityTransition};
use crate::render::Color;

/// Timing of every animated bar property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// When `false`, every change snaps to its final value.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_height_tween")]
    pub bar_height: TweenSpec,
    #[serde(default = "default_color_tween")]
    pub color: TweenSpec,
    #[serde(default = "VisibilitySpec::bubble_enter")]
    pub bubble_enter: VisibilitySpec,
    #[serde(default = "VisibilitySpec::bubble_exit")]
    pub bubble_exit: VisibilitySpec,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            bar_height: default_height_tween(),
            color: default_color_tween(),
            bubble_enter: VisibilitySpec::bubble_enter(),
            bubble_exit: VisibilitySpec::bubble_exit(),
        }
    }
}

impl AnimationConfig {
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_height_tween() -> TweenSpec {
    TweenSpec::millis(500)
}

fn default_color_tween() -> TweenSpec {
    TweenSpec::millis(300)
}

/// Animated presentation state of one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarAnimationState {
    height: Animated<f64>,
    bar_color: Animated<Color>,
    name_color: Animated<Color>,
    bubble: VisibilityTransition,
}

impl BarAnimationState {
    /// State for a bar that appears already at rest: full height, final
    /// colors, bubble shown when selected.
    #[must_use]
    pub fn settled(height: f64, bar_color: Color, name_color: Color, selected: bool) -> Self {
        Self {
            height: Animated::new(height),
            bar_color: Animated::new(bar_color),
            name_color: Animated::new(name_color),
            bubble: VisibilityTransition::new(selected),
        }
    }

    pub fn retarget_height(&mut self, target_height: f64, config: AnimationConfig) {
        if config.enabled {
            self.height.animate_to(target_height, config.bar_height);
        } else {
            self.height.snap_to(target_height);
        }
    }

    pub fn retarget_selection(
        &mut self,
        selected: bool,
        bar_color: Color,
        name_color: Color,
        config: AnimationConfig,
    ) {
        if config.enabled {
            self.bar_color.animate_to(bar_color, config.color);
            self.name_color.animate_to(name_color, config.color);
            if selected != self.bubble.target_visible() {
                self.bubble
                    .set_visible(selected, config.bubble_enter, config.bubble_exit);
            }
        } else {
            self.bar_color.snap_to(bar_color);
            self.name_color.snap_to(name_color);
            self.bubble.snap(selected);
        }
    }

    /// Advances every property; returns `true` while any is still running.
    pub fn step(&mut self, dt: Duration) -> bool {
        let height = self.height.step(dt);
        let bar_color = self.bar_color.step(dt);
        let name_color = self.name_color.step(dt);
        let bubble = self.bubble.step(dt);
        height || bar_color || name_color || bubble
    }

    pub fn finish(&mut self) {
        self.height.finish();
        self.bar_color.finish();
        self.name_color.finish();
        self.bubble.finish();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.height.is_running()
            || self.bar_color.is_running()
            || self.name_color.is_running()
            || self.bubble.is_running()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height.value()
    }

    #[must_use]
    pub fn target_height(&self) -> f64 {
        self.height.target()
    }

    #[must_use]
    pub fn bar_color(&self) -> Color {
        self.bar_color.value()
    }

    #[must_use]
    pub fn name_color(&self) -> Color {
        self.name_color.value()
    }

    #[must_use]
    pub fn bubble(&self) -> &VisibilityTransition {
        &self.bubble
    }
}
