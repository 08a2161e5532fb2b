mod frame;
mod null_renderer;
mod primitives;
mod text_measure;

pub use frame::{FrameLayerKind, LayerPrimitives, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, FontWeight, LinePrimitive, LineStrokeStyle, RectPrimitive, TextHAlign, TextPrimitive,
    TrianglePrimitive,
};
pub use text_measure::{EstimatedTextMeasurer, TextExtent, TextMeasurer};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
