use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::core::CornerRadii;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, FontWeight, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer, TextHAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub triangles_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Renders either offscreen into its own image surface through
/// `Renderer::render`, or in place on an external Cairo context through
/// `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::TRANSPARENT,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        context.save().map_err(|err| map_backend_error("failed to save context", err))?;
        context.set_operator(cairo::Operator::Source);
        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))?;

        let mut stats = CairoRenderStats::default();

        // Layers paint back to front; guides end up underneath the bars.
        for layer in &frame.layers {
            for rect in &layer.rects {
                append_rect_path(context, *rect);
                apply_color(context, rect.fill_color);
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                stats.rects_drawn += 1;
            }

            for triangle in &layer.triangles {
                let [a, b, c] = triangle.points;
                context.move_to(a.x, a.y);
                context.line_to(b.x, b.y);
                context.line_to(c.x, c.y);
                context.close_path();
                apply_color(context, triangle.fill_color);
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill triangle", err))?;
                stats.triangles_drawn += 1;
            }

            for line in &layer.lines {
                apply_color(context, line.color);
                context.set_line_width(line.stroke_width);
                match &line.stroke_style {
                    LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
                    LineStrokeStyle::Dashed(pattern) => context.set_dash(pattern, 0.0),
                }
                context.move_to(line.x1, line.y1);
                context.line_to(line.x2, line.y2);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke line", err))?;
                stats.lines_drawn += 1;
            }
            context.set_dash(&[], 0.0);

            for text in &layer.texts {
                let layout = pangocairo::functions::create_layout(context);
                let mut font_description = FontDescription::new();
                font_description.set_family("Sans");
                font_description.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
                font_description.set_weight(map_font_weight(text.font_weight));
                layout.set_font_description(Some(&font_description));
                layout.set_text(&text.text);

                let (text_width, _text_height) = layout.pixel_size();
                let x = match text.h_align {
                    TextHAlign::Left => text.x,
                    TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                    TextHAlign::Right => text.x - f64::from(text_width),
                };

                apply_color(context, text.color);
                context.move_to(x, text.y);
                pangocairo::functions::show_layout(context, &layout);
                stats.texts_drawn += 1;
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_font_weight(weight: FontWeight) -> pango::Weight {
    match weight {
        FontWeight::Normal => pango::Weight::Normal,
        FontWeight::SemiBold => pango::Weight::Semibold,
        FontWeight::Bold => pango::Weight::Bold,
    }
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radii.is_square() {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let max_radius = (rect.width * 0.5).min(rect.height * 0.5);
    let CornerRadii {
        top_left,
        top_right,
        bottom_right,
        bottom_left,
    } = rect.corner_radii;
    let clamp = |radius: f64| radius.min(max_radius).max(0.0);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    let r = clamp(top_right);
    context.arc(right - r, top + r, r, -FRAC_PI_2, 0.0);
    let r = clamp(bottom_right);
    context.arc(right - r, bottom - r, r, 0.0, FRAC_PI_2);
    let r = clamp(bottom_left);
    context.arc(left + r, bottom - r, r, FRAC_PI_2, PI);
    let r = clamp(top_left);
    context.arc(left + r, top + r, r, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
