use crate::core::{CornerRadii, Rect};
use crate::error::ChartResult;
use crate::render::{
    Color, FrameLayerKind, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive, TrianglePrimitive,
};

use super::{AxisLineGeometry, BarChart, BarVisual, LabelGeometry, TextStyle};

const AXIS_LINE_STROKE_WIDTH: f64 = 1.0;

impl<R: Renderer> BarChart<R> {
    /// Materializes the current animation step into backend-agnostic
    /// primitives.
    ///
    /// Axis lines and the goal indicator go to the `Guides` layer so bars and
    /// bubbles paint over them. Bars whose column lies outside the visible
    /// row (after scrolling) are culled; the remaining ones are emitted in
    /// display order.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let geometry = self.geometry()?;
        let mut frame = RenderFrame::new(geometry.viewport);

        if geometry.background_color.alpha > 0.0 {
            frame = frame.with_rect(
                FrameLayerKind::Background,
                rect_primitive(geometry.background, geometry.background_color).with_corner_radii(
                    CornerRadii::uniform(geometry.background_corner_radius),
                ),
            );
        }

        frame = frame
            .with_line(FrameLayerKind::Guides, axis_line(geometry.top_axis_line))
            .with_line(FrameLayerKind::Guides, axis_line(geometry.bottom_axis_line));
        frame = push_label(
            frame,
            FrameLayerKind::Guides,
            &geometry.max_value_label,
            self.text_styles.max_value,
        );
        if let Some(unit_label) = &geometry.unit_label {
            frame = push_label(frame, FrameLayerKind::Guides, unit_label, self.text_styles.unit);
        }

        if let Some(goal) = &geometry.goal {
            frame = frame
                .with_rect(
                    FrameLayerKind::Guides,
                    rect_primitive(goal.badge, goal.fill_color)
                        .with_corner_radii(CornerRadii::uniform(goal.corner_radius)),
                )
                .with_line(
                    FrameLayerKind::Guides,
                    LinePrimitive::new(
                        goal.line.x_start,
                        goal.line.y,
                        goal.line.x_end,
                        goal.line.y,
                        goal.stroke_width,
                        goal.line.color,
                    )
                    .with_stroke_style(LineStrokeStyle::dashed(&goal.dash_pattern)),
                );
            frame = push_label(
                frame,
                FrameLayerKind::Guides,
                &goal.label,
                self.text_styles.goal,
            );
        }

        for bar in geometry
            .bars
            .iter()
            .filter(|bar| geometry.row.is_slot_visible(bar.geometry.column_x))
        {
            frame = self.push_bar(frame, bar);
        }

        Ok(frame)
    }

    fn push_bar(&self, mut frame: RenderFrame, bar: &BarVisual) -> RenderFrame {
        let geometry = &bar.geometry;
        if geometry.bar.height > 0.0 {
            frame = frame.with_rect(
                FrameLayerKind::Bars,
                rect_primitive(geometry.bar, bar.fill_color)
                    .with_corner_radii(clamped_radii(geometry.corner_radii, geometry.bar)),
            );
        }
        frame = push_label(frame, FrameLayerKind::Bars, &bar.name, self.text_styles.bar_name);

        if let Some(bubble) = &bar.bubble {
            let fill_color = bubble.fill_color.faded(bubble.alpha);
            frame = frame
                .with_rect(
                    FrameLayerKind::Bars,
                    rect_primitive(bubble.geometry.body, fill_color)
                        .with_corner_radii(CornerRadii::uniform(bubble.geometry.corner_radius)),
                )
                .with_triangle(
                    FrameLayerKind::Bars,
                    TrianglePrimitive::new(bubble.geometry.tail, fill_color),
                );
            let mut label = bubble.label.clone();
            label.color = label.color.faded(bubble.alpha);
            frame = push_label(
                frame,
                FrameLayerKind::Bars,
                &label,
                self.text_styles.bubble,
            );
        }
        frame
    }
}

fn rect_primitive(rect: Rect, fill_color: Color) -> RectPrimitive {
    RectPrimitive::new(rect.x, rect.y, rect.width, rect.height, fill_color)
}

fn axis_line(line: AxisLineGeometry) -> LinePrimitive {
    LinePrimitive::new(
        line.x_start,
        line.y,
        line.x_end,
        line.y,
        AXIS_LINE_STROKE_WIDTH,
        line.color,
    )
}

/// Empty labels are skipped; backends reject empty text primitives.
fn push_label(
    frame: RenderFrame,
    layer: FrameLayerKind,
    label: &LabelGeometry,
    style: TextStyle,
) -> RenderFrame {
    if label.text.is_empty() {
        return frame;
    }
    frame.with_text(
        layer,
        TextPrimitive::new(
            label.text.clone(),
            label.rect.center_x(),
            label.rect.y,
            style.font_size_px,
            label.color,
            TextHAlign::Center,
        )
        .with_font_weight(style.weight),
    )
}

/// Short bars cannot fit their full rounding; radii shrink to the bar height.
fn clamped_radii(radii: CornerRadii, rect: Rect) -> CornerRadii {
    let vertical = radii.top_left + radii.bottom_left;
    if vertical <= rect.height || vertical <= 0.0 {
        return radii;
    }
    let factor = rect.height / vertical;
    CornerRadii {
        top_left: radii.top_left * factor,
        top_right: radii.top_right * factor,
        bottom_right: radii.bottom_right * factor,
        bottom_left: radii.bottom_left * factor,
    }
}
