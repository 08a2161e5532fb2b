use std::time::Duration;

use tracing::trace;

use crate::render::Renderer;

use super::{BarChart, PluginEvent};

impl<R: Renderer> BarChart<R> {
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animations.values().any(|state| state.is_running())
    }

    /// Advances every bar animation by `dt`.
    ///
    /// Returns `true` while any animation is still running. Emits
    /// `AnimationsSettled` on the step that finishes the last one.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let was_animating = self.is_animating();
        let mut running = false;
        for state in self.animations.values_mut() {
            running |= state.step(dt);
        }
        if was_animating && !running {
            trace!("animations settled");
            self.emit_plugin_event(PluginEvent::AnimationsSettled);
        }
        running
    }

    /// Jumps every animation to its target.
    pub fn finish_animations(&mut self) {
        let was_animating = self.is_animating();
        for state in self.animations.values_mut() {
            state.finish();
        }
        if was_animating {
            self.emit_plugin_event(PluginEvent::AnimationsSettled);
        }
    }
}
