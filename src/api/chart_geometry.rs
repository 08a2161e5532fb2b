use serde::{Deserialize, Serialize};

use crate::core::{
    BarGeometry, BarId, BarRowLayout, BubbleGeometry, BubbleMetrics, ChartMetrics,
    GoalIndicatorMetrics, Rect, Viewport,
};
use crate::error::ChartResult;
use crate::render::{Color, Renderer};

use super::{BarChart, TextStyle};

/// Placed single-line label; `rect` is the measured text box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelGeometry {
    pub text: String,
    pub rect: Rect,
    pub color: Color,
}

/// Horizontal reference line across the bar row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLineGeometry {
    pub x_start: f64,
    pub x_end: f64,
    pub y: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleVisual {
    pub geometry: BubbleGeometry,
    pub fill_color: Color,
    pub text_color: Color,
    pub label: LabelGeometry,
    /// Fade factor in `[0, 1]`.
    pub alpha: f64,
}

/// Everything the renderer needs for one bar at the current animation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarVisual {
    pub geometry: BarGeometry,
    pub selected: bool,
    pub target_height: f64,
    pub fill_color: Color,
    pub name: LabelGeometry,
    pub bubble: Option<BubbleVisual>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalGeometry {
    pub y: f64,
    pub badge: Rect,
    pub corner_radius: f64,
    pub fill_color: Color,
    pub label: LabelGeometry,
    pub line: AxisLineGeometry,
    pub stroke_width: f64,
    pub dash_pattern: [f64; 2],
}

/// Resolved chart layout consumed by render frame building and snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub viewport: Viewport,
    pub background: Rect,
    pub background_corner_radius: f64,
    pub background_color: Color,
    pub total_content_height: f64,
    pub top_content_padding: f64,
    pub bottom_content_padding: f64,
    pub content_height_per_unit: f64,
    pub axis_column_width: f64,
    pub baseline_y: f64,
    pub max_value_label: LabelGeometry,
    pub top_axis_line: AxisLineGeometry,
    pub bottom_axis_line: AxisLineGeometry,
    pub unit_label: Option<LabelGeometry>,
    pub row: BarRowLayout,
    pub scroll_offset: f64,
    pub bars: Vec<BarVisual>,
    pub goal: Option<GoalGeometry>,
}

const AXIS_LINE_ALPHA: f64 = 0.5;

impl<R: Renderer> BarChart<R> {
    fn baseline_y(&self) -> f64 {
        self.viewport.height_f64() - ChartMetrics::BOTTOM_CONTENT_PADDING
    }

    /// Current (animated) geometry of every bar in display order.
    pub fn bar_geometries(&self) -> ChartResult<Vec<BarGeometry>> {
        let layout = self.row_layout()?;
        let baseline_y = self.baseline_y();
        let scroll = self.scroll.offset();
        Ok(self
            .bars
            .keys()
            .enumerate()
            .map(|(index, id)| {
                let height = self
                    .animations
                    .get(id)
                    .map_or_else(|| self.scale.bar_height(self.bars[id].value), |s| s.height());
                BarGeometry::resolve(*id, layout.slot_x(index, scroll), baseline_y, height)
            })
            .collect())
    }

    /// Measures `text` and places it at `(x, y)`; `x_anchor` selects which
    /// fraction of the measured width sits on `x` (0.5 centers).
    fn place_label(
        &self,
        text: &str,
        style: TextStyle,
        color: Color,
        x: f64,
        y: f64,
        x_anchor: f64,
    ) -> LabelGeometry {
        let extent = self
            .text_measurer
            .measure(text, style.font_size_px, style.weight);
        LabelGeometry {
            text: text.to_owned(),
            rect: Rect::new(x - extent.width * x_anchor, y, extent.width, extent.height),
            color,
        }
    }

    fn label_centered_in(
        &self,
        text: &str,
        style: TextStyle,
        color: Color,
        area: Rect,
    ) -> LabelGeometry {
        let mut label = self.place_label(text, style, color, area.center_x(), area.y, 0.5);
        label.rect.y = area.center_y() - label.rect.height / 2.0;
        label
    }

    fn bar_visual(&self, geometry: BarGeometry) -> BarVisual {
        let id: BarId = geometry.id;
        let datum = &self.bars[&id];
        let selected = self.selection.is_selected(id);
        let state = self.animations.get(&id);

        let fill_color = state.map_or(self.colors.bar_color(selected), |s| s.bar_color());
        let name_color = state.map_or(self.colors.bar_name_color(selected), |s| s.name_color());
        let target_height = state.map_or(geometry.bar.height, |s| s.target_height());

        let name = self.place_label(
            &datum.name,
            self.text_styles.bar_name,
            name_color,
            geometry.name_row.center_x(),
            geometry.name_row.y,
            0.5,
        );

        let (alpha, offset_fraction) = match state {
            Some(s) => (s.bubble().visible_fraction(), s.bubble().offset_fraction()),
            None if selected => (1.0, 0.0),
            None => (0.0, 1.0),
        };
        let bubble = (alpha > 0.0).then(|| {
            let bubble = geometry.bubble(offset_fraction * BubbleMetrics::total_height());
            let fill_color = self.colors.bar_color(true);
            let text_color = self.colors.on_bar_color(true);
            let label = self.label_centered_in(
                &datum.display_value,
                self.text_styles.bubble,
                text_color,
                bubble.body,
            );
            BubbleVisual {
                geometry: bubble,
                fill_color,
                text_color,
                label,
                alpha,
            }
        });

        BarVisual {
            geometry,
            selected,
            target_height,
            fill_color,
            name,
            bubble,
        }
    }

    /// Resolves the full chart layout for the current animation step.
    pub fn geometry(&self) -> ChartResult<ChartGeometry> {
        let viewport = self.viewport;
        let width = viewport.width_f64();
        let baseline_y = self.baseline_y();
        let axis_column_width = ChartMetrics::axis_lines_start_x();
        let axis_color = self.colors.on_background.faded(AXIS_LINE_ALPHA);

        let mut max_value_label = self.place_label(
            &self.max_value_label,
            self.text_styles.max_value,
            self.colors.on_background,
            ChartMetrics::START_Y_AXIS_SPACE / 2.0,
            0.0,
            0.5,
        );
        let label_height = max_value_label.rect.height;
        max_value_label.rect.y = ChartMetrics::top_draw_padding(label_height);
        let top_axis_line = AxisLineGeometry {
            x_start: axis_column_width,
            x_end: width,
            y: max_value_label.rect.y + label_height / 2.0,
            color: axis_color,
        };
        let bottom_axis_line = AxisLineGeometry {
            x_start: axis_column_width,
            x_end: width,
            y: baseline_y,
            color: axis_color,
        };

        let unit_label = (!self.unit.is_empty()).then(|| {
            self.place_label(
                &self.unit,
                self.text_styles.unit,
                self.colors.on_background,
                axis_column_width / 2.0,
                baseline_y,
                0.5,
            )
        });

        let goal = self.goal.as_ref().map(|goal| {
            let y = self.scale.goal_y(goal.value);
            let badge = Rect::new(
                0.0,
                y,
                GoalIndicatorMetrics::SIZE.width,
                GoalIndicatorMetrics::SIZE.height,
            );
            let label = self.label_centered_in(
                &goal.display_value,
                self.text_styles.goal,
                self.colors.on_goal_indicator,
                badge,
            );
            GoalGeometry {
                y,
                badge,
                corner_radius: GoalIndicatorMetrics::CORNER_RADIUS,
                fill_color: self.colors.goal_indicator,
                label,
                line: AxisLineGeometry {
                    x_start: badge.right(),
                    x_end: width,
                    y: badge.center_y(),
                    color: self.colors.goal_indicator,
                },
                stroke_width: GoalIndicatorMetrics::STROKE_WIDTH,
                dash_pattern: GoalIndicatorMetrics::DASH_PATTERN,
            }
        });

        let bars = self
            .bar_geometries()?
            .into_iter()
            .map(|geometry| self.bar_visual(geometry))
            .collect();

        Ok(ChartGeometry {
            viewport,
            background: Rect::new(0.0, 0.0, width, viewport.height_f64()),
            background_corner_radius: ChartMetrics::BACKGROUND_CORNER_RADIUS,
            background_color: self.colors.background,
            total_content_height: self.scale.total_content_height(),
            top_content_padding: ChartMetrics::TOP_CONTENT_PADDING,
            bottom_content_padding: ChartMetrics::BOTTOM_CONTENT_PADDING,
            content_height_per_unit: self.scale.per_unit(),
            axis_column_width,
            baseline_y,
            max_value_label,
            top_axis_line,
            bottom_axis_line,
            unit_label,
            row: self.row_layout()?,
            scroll_offset: self.scroll.offset(),
            bars,
            goal,
        })
    }
}
