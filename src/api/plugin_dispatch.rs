use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{BarChart, PluginEvent};

impl<R: Renderer> BarChart<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.viewport,
            max_value: self.scale.max_value(),
            content_height_per_unit: self.scale.per_unit(),
            bars_len: self.bars.len(),
            selected_id: self.selection.selected(),
            scroll_offset: self.scroll.offset(),
            animating: self.is_animating(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
