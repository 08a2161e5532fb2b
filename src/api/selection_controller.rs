use tracing::debug;

use crate::core::BarId;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{BarChart, PluginEvent};

impl<R: Renderer> BarChart<R> {
    #[must_use]
    pub fn selected_id(&self) -> Option<BarId> {
        self.selection.selected()
    }

    #[must_use]
    pub fn is_selected(&self, id: BarId) -> bool {
        self.selection.is_selected(id)
    }

    /// Selects the bar with `id`. Returns `true` when the selection changed.
    pub fn select(&mut self, id: BarId) -> ChartResult<bool> {
        if !self.bars.contains_key(&id) {
            return Err(ChartError::UnknownBarId(id));
        }
        let Some(previous) = self.selection.select(id) else {
            return Ok(false);
        };

        debug!(?previous, current = %id, "selection changed");
        self.retarget_selection_colors();
        self.emit_plugin_event(PluginEvent::SelectionChanged {
            previous,
            current: id,
        });
        Ok(true)
    }

    /// Points every bar's colors and bubble at its selection-dependent target.
    pub(super) fn retarget_selection_colors(&mut self) {
        let config = self.animation_config;
        let selection = self.selection;
        let colors = self.colors;
        for (id, state) in &mut self.animations {
            let selected = selection.is_selected(*id);
            state.retarget_selection(
                selected,
                colors.bar_color(selected),
                colors.bar_name_color(selected),
                config,
            );
        }
    }
}
