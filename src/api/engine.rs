use indexmap::IndexMap;
use tracing::debug;

use crate::animation::{AnimationConfig, BarAnimationState};
use crate::core::{BarDatum, BarId, BarRowLayout, ContentScale, GoalDatum, Viewport};
use crate::error::ChartResult;
use crate::extensions::{ChartPlugin, PluginEvent};
use crate::interaction::{ScrollState, SelectionState};
use crate::render::{EstimatedTextMeasurer, Renderer, TextMeasurer};

use super::validation::index_bars;
use super::{BarChartConfig, ChartColors, ChartTextStyles};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `BarChart` owns the bar data, the shared content scale, the selection and
/// scroll state and the per-bar animations, and hands fully materialized
/// frames to its renderer.
pub struct BarChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) scale: ContentScale,
    pub(super) max_value_label: String,
    pub(super) unit: String,
    pub(super) goal: Option<GoalDatum>,
    pub(super) bars: IndexMap<BarId, BarDatum>,
    pub(super) animations: IndexMap<BarId, BarAnimationState>,
    pub(super) selection: SelectionState,
    pub(super) scroll: ScrollState,
    pub(super) colors: ChartColors,
    pub(super) text_styles: ChartTextStyles,
    pub(super) animation_config: AnimationConfig,
    pub(super) text_measurer: Box<dyn TextMeasurer>,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
}

impl<R: Renderer + std::fmt::Debug> std::fmt::Debug for BarChart<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BarChart")
            .field("renderer", &self.renderer)
            .field("viewport", &self.viewport)
            .field("scale", &self.scale)
            .field("max_value_label", &self.max_value_label)
            .field("unit", &self.unit)
            .field("goal", &self.goal)
            .field("bars", &self.bars)
            .field("animations", &self.animations)
            .field("selection", &self.selection)
            .field("scroll", &self.scroll)
            .field("colors", &self.colors)
            .field("text_styles", &self.text_styles)
            .field("animation_config", &self.animation_config)
            .field("plugins", &self.plugins.len())
            .finish_non_exhaustive()
    }
}

impl<R: Renderer> BarChart<R> {
    pub fn new(renderer: R, config: BarChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let scale =
            ContentScale::for_chart_height(config.viewport.height_f64(), config.max_value)?;
        let bars = index_bars(config.bars)?;

        let mut chart = Self {
            renderer,
            viewport: config.viewport,
            scale,
            max_value_label: config.max_value_label,
            unit: config.unit,
            goal: config.goal,
            bars,
            animations: IndexMap::new(),
            selection: SelectionState::new(config.initial_selected_id),
            scroll: ScrollState::default(),
            colors: config.colors,
            text_styles: config.text_styles,
            animation_config: config.animation,
            text_measurer: Box::new(EstimatedTextMeasurer),
            plugins: Vec::new(),
        };
        chart.sync_bar_animations();
        chart.refresh_scroll_range()?;
        debug!(
            bars = chart.bars.len(),
            per_unit = chart.scale.per_unit(),
            "bar chart initialized"
        );
        Ok(chart)
    }

    /// Replaces the text measurer used to center labels.
    pub fn set_text_measurer(&mut self, measurer: Box<dyn TextMeasurer>) {
        self.text_measurer = measurer;
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn scale(&self) -> ContentScale {
        self.scale
    }

    #[must_use]
    pub fn max_value_label(&self) -> &str {
        &self.max_value_label
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    #[must_use]
    pub fn goal(&self) -> Option<&GoalDatum> {
        self.goal.as_ref()
    }

    #[must_use]
    pub fn colors(&self) -> ChartColors {
        self.colors
    }

    #[must_use]
    pub fn text_styles(&self) -> ChartTextStyles {
        self.text_styles
    }

    #[must_use]
    pub fn animation_config(&self) -> AnimationConfig {
        self.animation_config
    }

    pub(super) fn row_layout(&self) -> ChartResult<BarRowLayout> {
        BarRowLayout::for_viewport(self.viewport, self.bars.len())
    }

    pub(super) fn refresh_scroll_range(&mut self) -> ChartResult<()> {
        let layout = self.row_layout()?;
        self.scroll.set_max_offset(layout.max_scroll());
        Ok(())
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// Used by GTK draw callbacks while keeping the renderer decoupled from
    /// GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
