use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::animation::{AnimationConfig, BarAnimationState};
use crate::core::{BarDatum, BarId, ContentScale, GoalDatum, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::validation::{index_bars, validate_max_value};
use super::{BarChart, ChartColors, ChartTextStyles, PluginEvent};

impl<R: Renderer> BarChart<R> {
    /// Bars in display order.
    pub fn bars(&self) -> impl Iterator<Item = &BarDatum> {
        self.bars.values()
    }

    #[must_use]
    pub fn bars_len(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn bar(&self, id: BarId) -> Option<&BarDatum> {
        self.bars.get(&id)
    }

    /// Replaces every bar. Bars that keep their id tween to their new height;
    /// new ids appear at rest; removed ids are dropped.
    pub fn set_bars(&mut self, bars: Vec<BarDatum>) -> ChartResult<()> {
        let bars = index_bars(bars)?;
        debug!(
            previous = self.bars.len(),
            next = bars.len(),
            "set bars"
        );
        self.bars = bars;
        self.sync_bar_animations();
        self.refresh_scroll_range()?;
        self.emit_plugin_event(PluginEvent::BarsUpdated {
            bars_len: self.bars.len(),
        });
        Ok(())
    }

    /// Updates the value of one bar in place.
    pub fn update_bar_value(
        &mut self,
        id: BarId,
        value: f64,
        display_value: impl Into<String>,
    ) -> ChartResult<()> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "bar `{id}` value must be finite"
            )));
        }
        let bar = self.bars.get_mut(&id).ok_or(ChartError::UnknownBarId(id))?;
        bar.value = value;
        bar.display_value = display_value.into();
        trace!(%id, value, "update bar value");
        self.sync_bar_animations();
        self.emit_plugin_event(PluginEvent::BarsUpdated {
            bars_len: self.bars.len(),
        });
        Ok(())
    }

    pub fn set_goal(&mut self, goal: Option<GoalDatum>) -> ChartResult<()> {
        if let Some(goal) = &goal {
            goal.validate()?;
        }
        self.goal = goal;
        self.emit_plugin_event(PluginEvent::GoalUpdated {
            has_goal: self.goal.is_some(),
        });
        Ok(())
    }

    /// Changes the top of the value axis; every bar tweens to the new scale.
    pub fn set_max_value(&mut self, max_value: f64, label: impl Into<String>) -> ChartResult<()> {
        validate_max_value(max_value)?;
        self.scale = ContentScale::new(self.scale.total_content_height(), max_value)?;
        self.max_value_label = label.into();
        self.on_scale_changed();
        Ok(())
    }

    /// Resizes the chart. The new height must leave room for content.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.scale = ContentScale::for_chart_height(viewport.height_f64(), self.scale.max_value())?;
        self.viewport = viewport;
        self.refresh_scroll_range()?;
        self.on_scale_changed();
        Ok(())
    }

    pub fn set_unit(&mut self, unit: impl Into<String>) {
        self.unit = unit.into();
    }

    pub fn set_colors(&mut self, colors: ChartColors) -> ChartResult<()> {
        colors.validate()?;
        self.colors = colors;
        self.retarget_selection_colors();
        Ok(())
    }

    pub fn set_text_styles(&mut self, text_styles: ChartTextStyles) -> ChartResult<()> {
        text_styles.validate()?;
        self.text_styles = text_styles;
        Ok(())
    }

    pub fn set_animation_config(&mut self, config: AnimationConfig) {
        self.animation_config = config;
        if !config.enabled {
            self.finish_animations();
        }
    }

    fn on_scale_changed(&mut self) {
        self.sync_bar_animations();
        self.emit_plugin_event(PluginEvent::ScaleChanged {
            content_height_per_unit: self.scale.per_unit(),
        });
    }

    /// Rebuilds per-bar animation state in display order, retargeting bars
    /// that already had one.
    pub(super) fn sync_bar_animations(&mut self) {
        let config = self.animation_config;
        let mut previous = std::mem::take(&mut self.animations);
        let mut next = IndexMap::with_capacity(self.bars.len());
        for bar in self.bars.values() {
            let target_height = self.scale.bar_height(bar.value);
            let selected = self.selection.is_selected(bar.id);
            let state = match previous.swap_remove(&bar.id) {
                Some(mut state) => {
                    state.retarget_height(target_height, config);
                    state
                }
                None => BarAnimationState::settled(
                    target_height,
                    self.colors.bar_color(selected),
                    self.colors.bar_name_color(selected),
                    selected,
                ),
            };
            next.insert(bar.id, state);
        }
        self.animations = next;
    }
}
