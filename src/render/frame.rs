use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive, TrianglePrimitive};

/// Paint layers of one chart frame, listed back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameLayerKind {
    /// Chart background fill.
    Background,
    /// Axis lines, their labels and the goal indicator.
    Guides,
    /// Bars, bar names and selection bubbles.
    Bars,
}

impl FrameLayerKind {
    pub const CANONICAL_ORDER: [Self; 3] = [Self::Background, Self::Guides, Self::Bars];
}

/// Primitives of a single layer.
///
/// Inside a layer backends draw rects, then triangles, then lines, then texts.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: FrameLayerKind,
    pub rects: Vec<RectPrimitive>,
    pub triangles: Vec<TrianglePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn new(kind: FrameLayerKind) -> Self {
        Self {
            kind,
            rects: Vec::new(),
            triangles: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.triangles.is_empty()
            && self.lines.is_empty()
            && self.texts.is_empty()
    }

    fn validate(&self) -> ChartResult<()> {
        for rect in &self.rects {
            rect.validate()?;
        }
        for triangle in &self.triangles {
            triangle.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Layers are painted in order, so everything in `Guides` sits underneath
/// the bars and their bubbles.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: FrameLayerKind::CANONICAL_ORDER
                .into_iter()
                .map(LayerPrimitives::new)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: FrameLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: FrameLayerKind) -> &mut LayerPrimitives {
        let index = match self.layers.iter().position(|layer| layer.kind == kind) {
            Some(index) => index,
            None => {
                self.layers.push(LayerPrimitives::new(kind));
                self.layers.len() - 1
            }
        };
        &mut self.layers[index]
    }

    #[must_use]
    pub fn with_line(mut self, kind: FrameLayerKind, line: LinePrimitive) -> Self {
        self.layer_mut(kind).lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, kind: FrameLayerKind, text: TextPrimitive) -> Self {
        self.layer_mut(kind).texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, kind: FrameLayerKind, rect: RectPrimitive) -> Self {
        self.layer_mut(kind).rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_triangle(mut self, kind: FrameLayerKind, triangle: TrianglePrimitive) -> Self {
        self.layer_mut(kind).triangles.push(triangle);
        self
    }

    /// All rects in paint order.
    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.layers.iter().flat_map(|layer| layer.rects.iter())
    }

    pub fn triangles(&self) -> impl Iterator<Item = &TrianglePrimitive> {
        self.layers.iter().flat_map(|layer| layer.triangles.iter())
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.layers.iter().flat_map(|layer| layer.lines.iter())
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.layers.iter().flat_map(|layer| layer.texts.iter())
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            layer.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }
}
